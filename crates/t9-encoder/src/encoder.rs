use t9_keypad::{Key, Keypad, PAUSE, STANDARD_KEYPAD};

use crate::error::EncodeError;

/// Text → key press encoder, the inverse of multi-tap decoding.
///
/// Each letter becomes its key repeated once per position in the key's
/// letter list. Two letters on the same key must be separated by a
/// pause, otherwise their presses would merge into one run:
///
/// ```text
///   "hi"    → 44 444        (same key: pause required)
///   "hello" → 4433555 555666 (only the two l's need a pause)
///   "a b"   → 2022          (space is key 0)
/// ```
///
/// ASCII uppercase letters are folded to lowercase; the keypad has no
/// case.
///
/// # Example
///
/// ```rust
/// use t9_encoder::T9Encoder;
///
/// let presses = T9Encoder::new().encode("hihi").unwrap();
/// assert_eq!(presses, "44 444 44 444");
/// ```
#[derive(Clone, Debug)]
pub struct T9Encoder {
    keypad: Keypad,
    pause_between_letters: bool,
}

impl Default for T9Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl T9Encoder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            keypad: STANDARD_KEYPAD,
            pause_between_letters: false,
        }
    }

    /// Put a pause between every pair of letters, not only between
    /// letters that share a key. Longer output, easier to read.
    #[must_use]
    pub fn pause_between_letters(mut self) -> Self {
        self.pause_between_letters = true;
        self
    }

    /// Encode `text` into key presses.
    ///
    /// # Errors
    ///
    /// [`EncodeError::UnsupportedCharacter`] for the first character no
    /// key can produce.
    pub fn encode(&self, text: &str) -> Result<String, EncodeError> {
        let mut presses = String::with_capacity(text.len() * 2);
        let mut previous: Option<Key> = None;

        for (offset, character) in text.chars().enumerate() {
            let (key, count) = self
                .keypad
                .locate(character.to_ascii_lowercase())
                .ok_or(EncodeError::UnsupportedCharacter { character, offset })?;

            let needs_pause = match previous {
                Some(prev) => prev == key || self.pause_between_letters,
                None => false,
            };
            if needs_pause {
                presses.push(PAUSE);
            }

            presses.extend(std::iter::repeat_n(key.to_char(), count));
            previous = Some(key);
        }

        Ok(presses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_key_letters_are_paused() {
        let enc = T9Encoder::new();
        assert_eq!(enc.encode("hi").unwrap(), "44 444");
        assert_eq!(enc.encode("hello").unwrap(), "4433555 555666");
    }

    #[test]
    fn space_uses_key_zero() {
        let enc = T9Encoder::new();
        assert_eq!(enc.encode("a b").unwrap(), "2022");
        assert_eq!(enc.encode("  ").unwrap(), "0 0");
    }

    #[test]
    fn uppercase_folds_to_lowercase() {
        assert_eq!(T9Encoder::new().encode("SOS").unwrap(), "77776667777");
    }

    #[test]
    fn empty_text_is_empty_presses() {
        assert_eq!(T9Encoder::new().encode("").unwrap(), "");
    }

    #[test]
    fn pause_between_letters_separates_everything() {
        let enc = T9Encoder::new().pause_between_letters();
        assert_eq!(enc.encode("yes").unwrap(), "999 33 7777");
    }

    #[test]
    fn unsupported_character_reports_position() {
        let err = T9Encoder::new().encode("héllo").unwrap_err();
        assert_eq!(
            err,
            EncodeError::UnsupportedCharacter {
                character: 'é',
                offset: 1,
            }
        );

        let err = T9Encoder::new().encode("ok!").unwrap_err();
        assert_eq!(err.to_string(), "character '!' at offset 2 has no key");
    }

    #[test]
    fn decoder_inverts_encoder() {
        let text = "the quick brown fox jumps over the lazy dog";
        let presses = T9Encoder::new().encode(text).unwrap();
        assert_eq!(t9_decoder::decode(&presses), text);
    }
}
