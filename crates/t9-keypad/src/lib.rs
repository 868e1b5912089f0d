#![warn(clippy::pedantic)]

pub mod key;
pub mod keypad;

pub use key::Key;
pub use keypad::{Keypad, PAUSE, PLACEHOLDER, STANDARD_KEYPAD};
