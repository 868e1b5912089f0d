/// Configuration for a decode.
///
/// The keypad layout is fixed; the only tunable is what happens when a
/// run presses its key more often than the key has letters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// How runs longer than their key's letter list are resolved.
    pub overflow: OverflowPolicy,
}

impl DecoderConfig {
    #[must_use]
    pub fn with_overflow(overflow: OverflowPolicy) -> Self {
        Self { overflow }
    }
}

/// Resolution of a run whose press count exceeds its key's letters.
///
/// ```text
/// ┌─────────────┬──────────────────────────────┬────────────┬─────────────┐
/// │ Policy      │ Letter index                 │ "77777"    │ Diagnostic  │
/// ├─────────────┼──────────────────────────────┼────────────┼─────────────┤
/// │ Wrap        │ (presses - 1) mod len        │ p          │ no          │
/// │ Clamp       │ len - 1                      │ s          │ yes         │
/// │ Placeholder │ none, emits '?'              │ ?          │ yes         │
/// └─────────────┴──────────────────────────────┴────────────┴─────────────┘
/// ```
///
/// Runs within the letter count resolve identically under every policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Keep cycling through the letters, as handsets do.
    #[default]
    Wrap,
    /// Stop at the key's last letter.
    Clamp,
    /// Give up on the run and emit the placeholder character.
    Placeholder,
}

impl OverflowPolicy {
    /// Whether resolving an overflowing run under this policy should be
    /// reported as a diagnostic.
    #[must_use]
    pub fn reports_overflow(self) -> bool {
        !matches!(self, Self::Wrap)
    }
}
