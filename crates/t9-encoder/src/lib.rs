#![warn(clippy::pedantic)]

pub mod encoder;
pub mod error;

pub use encoder::T9Encoder;
pub use error::EncodeError;
