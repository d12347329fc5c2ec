use super::*;

#[test]
fn test_codepoints_to_entities_boundary() {
    let conv = converter();
    assert_eq!(conv.codepoints_to_entities(&[255]), vec![255]);
    assert_eq!(conv.codepoints_to_entities(&[256]), b"&#256;".to_vec());
    assert_eq!(conv.codepoint_to_entity(1920), b"&#1920;".to_vec());
    assert_eq!(conv.codepoint_to_entity(65), b"A".to_vec());
}

#[test]
fn test_entities_round_trip_at_boundary() {
    let conv = converter();
    let seq = [65, 256, 1920, 65535];
    let entities = conv.codepoints_to_entities(&seq);
    assert_eq!(conv.entities_to_codepoints(&entities).unwrap(), seq.to_vec());
}

#[test]
fn test_entities_to_utf8() {
    let conv = converter();
    assert_eq!(
        conv.entities_to_utf8("&#1931;&#1960;&#1928;&#1964;&#1920;&#1960;").unwrap(),
        "ދިވެހި".as_bytes()
    );
    assert_eq!(conv.entities_to_utf8("plain & text").unwrap(), b"plain & text".to_vec());
}

#[test]
fn test_entities_to_utf8_out_of_range() {
    let conv = converter();
    assert_eq!(
        conv.entities_to_utf8("&#128512;"),
        Err(ConvertError::EntityOutOfRange("128512".into()))
    );
}

#[test]
fn test_entities_to_codepoints_mixed() {
    let conv = converter();
    assert_eq!(
        conv.entities_to_codepoints("x&#1920;ހ").unwrap(),
        vec![120, 1920, 1920]
    );
}

#[test]
fn test_entities_to_legacy() {
    let conv = converter();
    assert_eq!(
        conv.entities_to_legacy("&#1931;&#1960;&#1928;&#1964;&#1920;&#1960;"),
        b"divehi".to_vec()
    );
}

#[test]
fn test_entities_to_legacy_reverses_numbers() {
    let conv = converter();
    assert_eq!(conv.entities_to_legacy("&#1920; 2009"), b"h 9002".to_vec());
    assert_eq!(conv.entities_to_legacy("abc 123 def"), b"abc 321 def".to_vec());
}

#[test]
fn test_entities_to_legacy_unmapped_fallback() {
    let conv = converter();
    // U+0041 is not a layout key; it passes through as the byte 'A'.
    assert_eq!(conv.entities_to_legacy("&#65;"), b"A".to_vec());
    // 1999 % 256 == 207
    assert_eq!(conv.entities_to_legacy("&#1999;"), vec![207]);
}
