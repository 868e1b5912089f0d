use t9_keypad::{Key, Keypad, PLACEHOLDER};

use crate::config::OverflowPolicy;
use crate::diagnostic::{Diagnostic, DiagnosticSink};

/// An open run: consecutive presses of one key since the last flush.
///
/// A run always holds at least one press. It is created by the decoder
/// on the first press of a key and only grows from there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    key: Key,
    presses: usize,
    offset: usize,
}

impl Run {
    pub(crate) fn start(key: Key, offset: usize) -> Self {
        Self {
            key,
            presses: 1,
            offset,
        }
    }

    pub(crate) fn press(&mut self) {
        self.presses += 1;
    }

    /// The key being pressed.
    #[must_use]
    pub fn key(&self) -> Key {
        self.key
    }

    /// Presses so far (at least 1).
    #[must_use]
    pub fn presses(&self) -> usize {
        self.presses
    }

    /// Input offset of the first press.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Close the run and turn it into exactly one output letter.
    ///
    /// The letter index is `presses - 1` while that is in range. Beyond
    /// the key's letter count the [`OverflowPolicy`] decides. A key with
    /// no letters resolves to [`PLACEHOLDER`] and reports
    /// [`Diagnostic::UnmappedKey`].
    pub fn resolve<S: DiagnosticSink + ?Sized>(
        self,
        keypad: &Keypad,
        policy: OverflowPolicy,
        sink: &mut S,
    ) -> FlushedRun {
        let Some(letters) = keypad.letters(self.key) else {
            sink.report(Diagnostic::UnmappedKey {
                key: self.key,
                offset: self.offset,
            });
            return self.flushed(PLACEHOLDER);
        };

        let available = letters.len();
        let index = self.presses.saturating_sub(1);
        if index < available {
            return self.flushed(letters[index]);
        }

        if policy.reports_overflow() {
            sink.report(Diagnostic::PressCountOverflow {
                key: self.key,
                presses: self.presses,
                available,
                offset: self.offset,
            });
        }

        let letter = match policy {
            OverflowPolicy::Wrap => letters[index % available],
            OverflowPolicy::Clamp => letters[available - 1],
            OverflowPolicy::Placeholder => PLACEHOLDER,
        };
        self.flushed(letter)
    }

    fn flushed(self, letter: char) -> FlushedRun {
        FlushedRun {
            key: self.key,
            presses: self.presses,
            offset: self.offset,
            letter,
        }
    }
}

/// A closed run together with the letter it produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlushedRun {
    pub key: Key,
    pub presses: usize,
    /// Input offset of the run's first press.
    pub offset: usize,
    pub letter: char,
}
