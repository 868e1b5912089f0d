//! Property-based tests for the decoder.
//!
//! These tests use proptest to verify:
//! - Decoding never panics and every output letter comes from one run
//! - Pauses collapse: widening any pause leaves the output unchanged
//! - Invalid characters are transparent to the output
//! - The encoder is a right inverse of the decoder

use proptest::prelude::*;
use t9_decoder::{DecoderConfig, IgnoreDiagnostics, OverflowPolicy, decode_with};
use t9_encoder::T9Encoder;
use t9_keypad::{Key, PLACEHOLDER, STANDARD_KEYPAD};

fn quiet(input: &str, overflow: OverflowPolicy) -> String {
    decode_with(input, &DecoderConfig::with_overflow(overflow), IgnoreDiagnostics)
}

fn arb_policy() -> impl Strategy<Value = OverflowPolicy> {
    prop_oneof![
        Just(OverflowPolicy::Wrap),
        Just(OverflowPolicy::Clamp),
        Just(OverflowPolicy::Placeholder),
    ]
}

fn arb_mapped_key() -> impl Strategy<Value = Key> {
    proptest::sample::select(
        Key::ALL
            .into_iter()
            .filter(|&k| STANDARD_KEYPAD.letters(k).is_some())
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #[test]
    fn never_panics_on_arbitrary_text(input in any::<String>(), policy in arb_policy()) {
        let decoded = quiet(&input, policy);
        prop_assert!(decoded.chars().count() <= input.chars().count());
    }

    #[test]
    fn output_letters_come_from_the_keypad(input in "[0-9 *#a-z]{0,64}", policy in arb_policy()) {
        for letter in quiet(&input, policy).chars() {
            prop_assert!(
                letter == PLACEHOLDER || STANDARD_KEYPAD.locate(letter).is_some(),
                "unexpected output letter {letter:?}"
            );
        }
    }

    #[test]
    fn widening_pauses_changes_nothing(input in "[0-9 ]{0,64}", width in 2usize..5) {
        let wide = input.replace(' ', &" ".repeat(width));
        prop_assert_eq!(quiet(&input, OverflowPolicy::Wrap), quiet(&wide, OverflowPolicy::Wrap));
    }

    #[test]
    fn invalid_characters_are_transparent(input in "[0-9 *#xA]{0,64}") {
        let cleaned: String = input
            .chars()
            .filter(|&c| c == ' ' || STANDARD_KEYPAD.key_for(c).is_some())
            .collect();
        prop_assert_eq!(quiet(&input, OverflowPolicy::Wrap), quiet(&cleaned, OverflowPolicy::Wrap));
    }

    #[test]
    fn runs_wrap_around_the_letter_list(key in arb_mapped_key(), presses in 1usize..40) {
        let letters = STANDARD_KEYPAD.letters(key).unwrap();
        let input = key.to_char().to_string().repeat(presses);
        let expected = letters[(presses - 1) % letters.len()].to_string();
        prop_assert_eq!(quiet(&input, OverflowPolicy::Wrap), expected);
    }

    #[test]
    fn decode_inverts_encode(text in "[a-z ]{0,64}", pause_all in any::<bool>()) {
        let mut encoder = T9Encoder::new();
        if pause_all {
            encoder = encoder.pause_between_letters();
        }
        let presses = encoder.encode(&text).unwrap();
        prop_assert_eq!(quiet(&presses, OverflowPolicy::Clamp), text);
    }
}
