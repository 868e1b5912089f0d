#![no_main]

use libfuzzer_sys::fuzz_target;
use t9_decoder::{decode_reader, decode_with, DecoderConfig, Diagnostic};

// Fuzz target: decode arbitrary bytes through the reader and string paths.
//
// Catches bugs in:
// - Offset tracking across invalid and non-ASCII input
// - Run flushing at pauses, key changes and end of input
// - Disagreement between the byte and string entry points
fuzz_target!(|data: &[u8]| {
    let config = DecoderConfig::default();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let from_reader = decode_reader(data, &config, &mut diagnostics).unwrap();

    for diagnostic in &diagnostics {
        assert!(diagnostic.offset() < data.len());
    }

    if let Ok(text) = std::str::from_utf8(data) {
        if text.is_ascii() {
            let mut from_str_diagnostics = Vec::new();
            let from_str = decode_with(text, &config, &mut from_str_diagnostics);
            assert_eq!(from_str, from_reader);
            assert_eq!(from_str_diagnostics, diagnostics);
        }
    }
});
