/// Hard failures of a decode operation.
///
/// Malformed key presses are never errors: they are reported through a
/// [`DiagnosticSink`](crate::DiagnosticSink) and decoding carries on.
/// The only way a decode fails outright is when the input source itself
/// cannot be read.
///
/// ```text
///   DecodeError
///   └── Io(std::io::Error)   ← from the underlying sync or async reader
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The byte source returned an error before end-of-input.
    #[error("failed to read key presses: {0}")]
    Io(#[from] std::io::Error),
}
