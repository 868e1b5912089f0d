/// Errors that can occur while encoding text into key presses.
///
/// ```text
///   EncodeError
///   └── UnsupportedCharacter   ← no key produces this character
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The character has no key on the keypad (digits, punctuation,
    /// non-ASCII letters). `offset` counts characters, not bytes.
    #[error("character {character:?} at offset {offset} has no key")]
    UnsupportedCharacter { character: char, offset: usize },
}
