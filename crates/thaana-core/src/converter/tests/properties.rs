//! Property-based checks for the codec contracts.

use proptest::prelude::*;

use super::*;
use crate::MAX_CODEPOINT;

fn arb_latin_char() -> impl Strategy<Value = u8> {
    prop_oneof![
        4 => prop::sample::select(b"aeiou".to_vec()),
        4 => prop::sample::select(b"bcdfghjklmnpqrstvwyz".to_vec()),
        1 => prop::sample::select(b" -.,0123!AHZ".to_vec()),
    ]
}

proptest! {
    #[test]
    fn utf8_round_trip_bmp(seq in prop::collection::vec(0..=MAX_CODEPOINT, 0..64)) {
        let conv = converter();
        let bytes = conv.codepoints_to_utf8(&seq).unwrap();
        prop_assert_eq!(conv.utf8_to_codepoints(&bytes), seq);
    }

    #[test]
    fn utf8_decode_agrees_with_std(
        chars in prop::collection::vec(prop::char::range('\0', '\u{FFFF}'), 0..32),
    ) {
        let text: String = chars.into_iter().collect();
        let expected: Vec<Codepoint> = text.chars().map(|c| c as Codepoint).collect();
        prop_assert_eq!(converter().utf8_to_codepoints(&text), expected);
    }

    #[test]
    fn entities_round_trip(seq in prop::collection::vec(0..=MAX_CODEPOINT, 0..32)) {
        // `&` written raw could combine with following text into a reference.
        prop_assume!(!seq.contains(&Codepoint::from(b'&')));
        // Raw bytes 128..=255 are re-read as UTF-8, so stay outside that band.
        prop_assume!(seq.iter().all(|&c| !(128..256).contains(&c)));
        let conv = converter();
        let entities = conv.codepoints_to_entities(&seq);
        prop_assert_eq!(conv.entities_to_codepoints(&entities).unwrap(), seq);
    }

    #[test]
    fn legacy_bijection_round_trip(index in 0usize..128) {
        let conv = converter();
        let byte = index as u8;
        if let Some(cp) = conv.tables().legacy_codepoint(byte) {
            let encoded = conv.codepoints_to_legacy(&[Codepoint::from(cp)]);
            prop_assert_eq!(conv.legacy_to_codepoints(&encoded), vec![Codepoint::from(cp)]);
            prop_assert_eq!(encoded, vec![byte]);
        }
    }

    #[test]
    fn latin_always_consumes_input(input in prop::collection::vec(arb_latin_char(), 0..48)) {
        let conv = converter();
        let out = conv.latin_to_legacy(&input);
        // Every table value is non-empty, so output never shrinks below one
        // byte per step.
        prop_assert!(input.is_empty() == out.is_empty());
        let back = conv.legacy_to_latin(&out);
        prop_assert!(input.is_empty() == back.is_empty());
    }

    #[test]
    fn legacy_to_utf8_is_reversed_decode(input in prop::collection::vec(any::<u8>(), 0..32)) {
        let conv = converter();
        let mut cps = conv.legacy_to_codepoints(&input);
        cps.reverse();
        prop_assert_eq!(conv.legacy_to_utf8(&input), conv.codepoints_to_utf8(&cps).unwrap());
    }
}
