#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use t9_decoder::{decode_with, DecoderConfig, IgnoreDiagnostics, OverflowPolicy};
use t9_keypad::{PLACEHOLDER, STANDARD_KEYPAD};

#[derive(Debug, Arbitrary)]
enum Policy {
    Wrap,
    Clamp,
    Placeholder,
}

#[derive(Debug, Arbitrary)]
struct Input {
    policy: Policy,
    presses: String,
}

// Fuzz target: every overflow policy on arbitrary text.
//
// Asserts each output letter is either a keypad letter or the
// placeholder, and that the output never outgrows the input.
fuzz_target!(|input: Input| {
    let policy = match input.policy {
        Policy::Wrap => OverflowPolicy::Wrap,
        Policy::Clamp => OverflowPolicy::Clamp,
        Policy::Placeholder => OverflowPolicy::Placeholder,
    };
    let decoded = decode_with(
        &input.presses,
        &DecoderConfig::with_overflow(policy),
        IgnoreDiagnostics,
    );

    assert!(decoded.chars().count() <= input.presses.chars().count());
    for letter in decoded.chars() {
        assert!(letter == PLACEHOLDER || STANDARD_KEYPAD.locate(letter).is_some());
    }
});
