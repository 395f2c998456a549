//! Position primitives shared by every section of the line parser.
//!
//! Both functions are pure functions of `(line, pos)` and work on bytes, so
//! any offset is accepted without risk of slicing inside a UTF-8 codepoint.
//! RFC 1459 allows a run of spaces wherever a single separator is expected,
//! which is why the parser never steps over exactly one space.

/// Characters that may trail the content of a line.
#[inline]
fn is_line_padding(b: u8) -> bool {
    matches!(b, b' ' | b'\r' | b'\n')
}

/// Returns the first index at or after `pos` that is not a space.
///
/// Offsets past the end of the line are returned unchanged.
///
/// # Examples
///
/// ```
/// use irc_parse_line::scanner::skip_spaces;
///
/// assert_eq!(skip_spaces("123   xy", 4), 6);
/// assert_eq!(skip_spaces("abc", 1), 1);
/// ```
#[inline]
pub fn skip_spaces(line: &str, pos: usize) -> usize {
    let bytes = line.as_bytes();
    let mut pos = pos;
    while bytes.get(pos) == Some(&b' ') {
        pos += 1;
    }
    pos
}

/// Returns the content boundary of `line`, searching from `pos`.
///
/// This is the index where the final run of spaces, `\r` and `\n` begins,
/// so `\r\n`, the non-conformant `\n\r`, and spaces in front of the
/// terminator are all excluded. Without such a run the line length is
/// returned. The result is never smaller than `pos` (clamped to the length).
///
/// # Examples
///
/// ```
/// use irc_parse_line::scanner::find_line_end;
///
/// assert_eq!(find_line_end("1234567", 0), 7);
/// assert_eq!(find_line_end("1234567\r\n", 2), 7);
/// assert_eq!(find_line_end("1234567 \r\n", 2), 7);
/// ```
#[inline]
pub fn find_line_end(line: &str, pos: usize) -> usize {
    let bytes = line.as_bytes();
    let start = pos.min(bytes.len());
    let mut end = bytes.len();
    while end > start && is_line_padding(bytes[end - 1]) {
        end -= 1;
    }
    end
}

/// Returns the index where the line terminator begins, searching from `pos`.
///
/// Unlike [`find_line_end`] only `\r` and `\n` are stripped; spaces are
/// content. The trailing parameter is cut here.
#[inline]
pub(crate) fn find_terminator(line: &str, pos: usize) -> usize {
    let bytes = line.as_bytes();
    let start = pos.min(bytes.len());
    let mut end = bytes.len();
    while end > start && matches!(bytes[end - 1], b'\r' | b'\n') {
        end -= 1;
    }
    end
}

/// Returns the index of the next space at or after `pos`, if any.
#[inline]
pub(crate) fn find_space(line: &str, pos: usize) -> Option<usize> {
    line.as_bytes()
        .get(pos..)?
        .iter()
        .position(|&b| b == b' ')
        .map(|i| pos + i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_line_end_plain() {
        assert_eq!(find_line_end("1234567", 0), 7);
        assert_eq!(find_line_end("1234567", 2), 7);
    }

    #[test]
    fn test_find_line_end_terminators() {
        assert_eq!(find_line_end("1234567\r", 2), 7);
        assert_eq!(find_line_end("1234567\n", 2), 7);
        assert_eq!(find_line_end("1234567\r\n", 2), 7);
        // not rfc compliant, but tolerated
        assert_eq!(find_line_end("1234567\n\r", 2), 7);
    }

    #[test]
    fn test_find_line_end_spaces_before_terminator() {
        assert_eq!(find_line_end("1234567 \r\n", 2), 7);
        assert_eq!(find_line_end("1234567   ", 0), 7);
    }

    #[test]
    fn test_find_line_end_never_before_pos() {
        assert_eq!(find_line_end("abc   ", 5), 5);
        assert_eq!(find_line_end("abc", 10), 3);
        assert_eq!(find_line_end("", 0), 0);
        assert_eq!(find_line_end(" \r\n", 0), 0);
    }

    #[test]
    fn test_skip_spaces() {
        assert_eq!(skip_spaces("123   xy", 4), 6);
        assert_eq!(skip_spaces("123   xy", 3), 6);
        assert_eq!(skip_spaces("123   xy", 6), 6);
        assert_eq!(skip_spaces("   ", 0), 3);
        assert_eq!(skip_spaces("abc", 7), 7);
    }

    #[test]
    fn test_skip_spaces_only_skips_space() {
        // tabs and terminators are not separators
        assert_eq!(skip_spaces("\tx", 0), 0);
        assert_eq!(skip_spaces(" \r\n", 0), 1);
    }

    #[test]
    fn test_find_terminator_keeps_spaces() {
        assert_eq!(find_terminator("ab  \r\n", 0), 4);
        assert_eq!(find_terminator("ab  ", 0), 4);
        assert_eq!(find_terminator("ab\n\r", 0), 2);
    }

    #[test]
    fn test_find_space() {
        assert_eq!(find_space("a b c", 0), Some(1));
        assert_eq!(find_space("a b c", 2), Some(3));
        assert_eq!(find_space("abc", 0), None);
        assert_eq!(find_space("abc", 9), None);
    }

    #[test]
    fn test_multibyte_offsets_do_not_panic() {
        let line = "é  ü";
        assert_eq!(skip_spaces(line, 1), 1);
        assert_eq!(skip_spaces(line, 2), 4);
        assert_eq!(find_line_end(line, 1), line.len());
    }
}
