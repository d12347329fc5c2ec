//! Digit-order repair for text converted into the legacy encoding.
//!
//! Legacy Thaana text is stored back-to-front for left-to-right renderers,
//! which leaves embedded numbers reading backwards. Each run of digits and
//! `.` `,` `:` that begins on a word boundary is reversed in place.

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_numeric_byte(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'.' | b',' | b':')
}

/// A word boundary sits before `pos` when exactly one side of it is a word byte.
fn is_boundary(text: &[u8], pos: usize) -> bool {
    let before = pos > 0 && is_word_byte(text[pos - 1]);
    let after = pos < text.len() && is_word_byte(text[pos]);
    before != after
}

/// Reverse every numeric run that starts on a word boundary.
///
/// Runs are matched greedily left to right; scanning resumes after each run.
pub(crate) fn reverse_numerics(mut text: Vec<u8>) -> Vec<u8> {
    let mut pos = 0;
    while pos < text.len() {
        if !is_numeric_byte(text[pos]) || !is_boundary(&text, pos) {
            pos += 1;
            continue;
        }
        let end = text[pos..]
            .iter()
            .position(|&b| !is_numeric_byte(b))
            .map_or(text.len(), |n| pos + n);
        text[pos..end].reverse();
        pos = end;
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rev(s: &str) -> String {
        String::from_utf8(reverse_numerics(s.as_bytes().to_vec())).unwrap()
    }

    #[test]
    fn test_reverses_isolated_number() {
        assert_eq!(rev("abc 123 def"), "abc 321 def");
    }

    #[test]
    fn test_includes_separators() {
        assert_eq!(rev("on 12.50, ok"), "on ,05.21 ok");
        assert_eq!(rev("10:30"), "03:01");
    }

    #[test]
    fn test_number_glued_to_word_untouched() {
        assert_eq!(rev("a12"), "a12");
        assert_eq!(rev("x1 y"), "x1 y");
    }

    #[test]
    fn test_leading_separator_needs_word_before() {
        // `.` after a word byte is a boundary, so the run starts there.
        assert_eq!(rev("x.5"), "x5.");
        // After a space the `.` is not on a boundary; the run starts at the digit.
        assert_eq!(rev(" .56"), " .65");
    }

    #[test]
    fn test_multiple_runs() {
        assert_eq!(rev("12 ab 345"), "21 ab 543");
    }

    #[test]
    fn test_empty_and_no_digits() {
        assert_eq!(rev(""), "");
        assert_eq!(rev("hwmc"), "hwmc");
    }

    #[test]
    fn test_high_bytes_are_not_word_bytes() {
        let out = reverse_numerics(vec![0xE9, b'4', b'2']);
        assert_eq!(out, vec![0xE9, b'2', b'4']);
    }
}
