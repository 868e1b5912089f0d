#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod diagnostic;
pub mod error;
pub mod run;
pub mod streaming;

pub use config::{DecoderConfig, OverflowPolicy};
pub use decoder::{RunState, Runs, T9Decoder, decode, decode_reader, decode_with};
pub use diagnostic::{Diagnostic, DiagnosticSink, IgnoreDiagnostics, TracingSink};
pub use error::DecodeError;
pub use run::{FlushedRun, Run};
pub use streaming::StreamingDecoder;
