#![no_main]

use libfuzzer_sys::fuzz_target;
use t9_decoder::{decode_with, DecoderConfig, IgnoreDiagnostics};
use t9_encoder::T9Encoder;

// Fuzz target: T9Encoder -> decode roundtrip.
//
// Input format:
//   byte 0: bit 0 selects pause-between-letters
//   bytes 1..: text, kept only if it is lowercase letters and spaces
//
// Encodes the text, decodes the presses, and asserts the text survives.
fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    if !text.chars().all(|c| c == ' ' || c.is_ascii_lowercase()) {
        return;
    }

    let mut encoder = T9Encoder::new();
    if flags & 1 == 1 {
        encoder = encoder.pause_between_letters();
    }
    let presses = encoder.encode(text).unwrap();
    let decoded = decode_with(&presses, &DecoderConfig::default(), IgnoreDiagnostics);
    assert_eq!(decoded, text);
});
