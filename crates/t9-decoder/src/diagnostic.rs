use t9_keypad::Key;

/// A soft, per-character problem found while decoding.
///
/// Diagnostics are advisory. Reporting one never changes what the
/// decoder does next; the offending character is skipped, or the
/// offending run resolves to a substitute letter, and decoding carries
/// on with the rest of the input.
///
/// Every variant carries the zero-based input offset it refers to. For
/// run-level diagnostics this is the offset of the run's first press.
///
/// ```text
/// ┌────────────────────┬──────────────────────────────────────────────┐
/// │ Variant            │ Raised when                                  │
/// ├────────────────────┼──────────────────────────────────────────────┤
/// │ InvalidCharacter   │ input is not '0', '2'..='9' or ' '           │
/// │ UnmappedKey        │ a run's key has no letters at flush time     │
/// │ PressCountOverflow │ presses > letters under Clamp / Placeholder  │
/// └────────────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// The character is outside the key press alphabet and was skipped.
    #[error("invalid input character {character:?} at offset {offset}")]
    InvalidCharacter { character: char, offset: usize },

    /// A run was built on a key with no letters. The run resolved to
    /// the placeholder. Runs only ever start on mapped keys, so this is
    /// a guard rather than an expected outcome.
    #[error("key {key} has no letters (run at offset {offset})")]
    UnmappedKey { key: Key, offset: usize },

    /// A run pressed its key more times than the key has letters.
    #[error(
        "{presses} presses of key {key} exceed its {available} letters (run at offset {offset})"
    )]
    PressCountOverflow {
        key: Key,
        presses: usize,
        available: usize,
        offset: usize,
    },
}

impl Diagnostic {
    /// Input offset the diagnostic refers to.
    #[must_use]
    pub fn offset(&self) -> usize {
        match *self {
            Self::InvalidCharacter { offset, .. }
            | Self::UnmappedKey { offset, .. }
            | Self::PressCountOverflow { offset, .. } => offset,
        }
    }

    /// The character the diagnostic names: the skipped input character,
    /// or the digit of the offending run.
    #[must_use]
    pub fn character(&self) -> char {
        match *self {
            Self::InvalidCharacter { character, .. } => character,
            Self::UnmappedKey { key, .. } | Self::PressCountOverflow { key, .. } => key.to_char(),
        }
    }

    /// Stable snake-case name of the variant, for structured output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCharacter { .. } => "invalid_character",
            Self::UnmappedKey { .. } => "unmapped_key",
            Self::PressCountOverflow { .. } => "press_count_overflow",
        }
    }
}

/// Receiver for [`Diagnostic`]s raised during a decode.
///
/// The decoder owns its sink for the duration of one decode. Pass
/// `&mut sink` to keep ownership on the caller's side.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Forwards every diagnostic to `tracing` as a `WARN` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            kind = diagnostic.kind(),
            offset = diagnostic.offset(),
            character = ?diagnostic.character(),
            "{diagnostic}"
        );
    }
}

/// Drops every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct IgnoreDiagnostics;

impl DiagnosticSink for IgnoreDiagnostics {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_character() {
        let d = Diagnostic::InvalidCharacter {
            character: '*',
            offset: 3,
        };
        assert_eq!(d.to_string(), "invalid input character '*' at offset 3");
    }

    #[test]
    fn overflow_display_includes_counts() {
        let d = Diagnostic::PressCountOverflow {
            key: Key::Seven,
            presses: 5,
            available: 4,
            offset: 0,
        };
        assert_eq!(
            d.to_string(),
            "5 presses of key 7 exceed its 4 letters (run at offset 0)"
        );
    }

    #[test]
    fn accessors_agree_with_fields() {
        let d = Diagnostic::UnmappedKey {
            key: Key::One,
            offset: 9,
        };
        assert_eq!(d.offset(), 9);
        assert_eq!(d.character(), '1');
        assert_eq!(d.kind(), "unmapped_key");
    }

    fn report_one<S: DiagnosticSink>(mut sink: S) {
        sink.report(Diagnostic::InvalidCharacter {
            character: '#',
            offset: 0,
        });
    }

    #[test]
    fn borrowed_vec_collects_through_the_reference() {
        let mut collected: Vec<Diagnostic> = Vec::new();
        report_one(&mut collected);
        report_one(&mut collected);
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn ignore_and_tracing_sinks_accept_reports() {
        let d = Diagnostic::InvalidCharacter {
            character: 'x',
            offset: 1,
        };
        IgnoreDiagnostics.report(d);
        TracingSink.report(d);
    }
}
