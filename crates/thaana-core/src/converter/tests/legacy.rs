use super::*;

#[test]
fn test_legacy_to_codepoints() {
    let conv = converter();
    assert_eq!(
        conv.legacy_to_codepoints("rWacje"),
        vec![1923, 1959, 1927, 1968, 1942, 1964]
    );
    // Unmapped bytes keep their own value.
    assert_eq!(conv.legacy_to_codepoints("h 1"), vec![1920, 32, 49]);
}

#[test]
fn test_legacy_to_entities() {
    let conv = converter();
    assert_eq!(conv.legacy_to_entities("hS 1"), b"&#1920;&#1921; 1".to_vec());
    assert_eq!(conv.legacy_to_entities(")("), b")(".to_vec());
}

#[test]
fn test_legacy_to_utf8_reverses_characters() {
    let conv = converter();
    let out = conv.legacy_to_utf8("hS");
    assert_eq!(out, "\u{0781}\u{0780}".as_bytes());
    assert_eq!(conv.legacy_to_utf8("h"), vec![0xDE, 0x80]);
}

#[test]
fn test_legacy_to_utf8_word() {
    let conv = converter();
    let out = conv.legacy_to_utf8("rWacje");
    assert_eq!(out, "\u{07AC}\u{0796}\u{07B0}\u{0787}\u{07A7}\u{0783}".as_bytes());
}

#[test]
fn test_legacy_to_utf8_ligature_and_fallback() {
    let conv = converter();
    // Q is the three-byte ligature; 0xE9 is unmapped and stays U+00E9.
    let out = conv.legacy_to_utf8([b'Q', 0xE9]);
    assert_eq!(out, "éﷲ".as_bytes());
}

#[test]
fn test_only_legacy_to_utf8_reverses() {
    let conv = converter();
    let utf8 = conv.legacy_to_utf8("hS");
    // Going back the other way does not flip again.
    assert_eq!(conv.utf8_to_legacy(&utf8), b"Sh".to_vec());
}
