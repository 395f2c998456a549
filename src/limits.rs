//! Protocol length limits.
//!
//! The parser accepts lines of any length; enforcing limits belongs to the
//! code that frames the byte stream. These helpers measure a received line
//! the same way the parser splits it.

use crate::scanner::{find_line_end, find_space, skip_spaces};

/// Maximum length for the IRCv3 tags section, including `@` and the
/// trailing space.
pub const MAX_TAGS_LENGTH: usize = 8191;

/// Maximum length for the message body (everything after the tags),
/// including CRLF.
pub const MAX_MESSAGE_BODY: usize = 512;

/// Byte length of the tags section (`@...` and its separating spaces), or
/// zero when the line carries no tags.
pub fn tags_section_len(line: &str) -> usize {
    if !line.starts_with('@') {
        return 0;
    }
    match find_space(line, 1) {
        Some(sp) => skip_spaces(line, sp),
        None => 0,
    }
}

/// Byte length of the body, excluding the tags section and the terminator.
pub fn body_len(line: &str) -> usize {
    let start = tags_section_len(line);
    find_line_end(line, start) - start
}

/// True when either section exceeds its limit. The body limit accounts for
/// the two bytes of CRLF.
pub fn exceeds_limits(line: &str) -> bool {
    tags_section_len(line) > MAX_TAGS_LENGTH || body_len(line) + 2 > MAX_MESSAGE_BODY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_section_len() {
        assert_eq!(tags_section_len("PING"), 0);
        assert_eq!(tags_section_len("@a=b PING"), 5);
        assert_eq!(tags_section_len("@a=b   PING"), 7);
        assert_eq!(tags_section_len("@just-tag"), 0);
    }

    #[test]
    fn test_body_len() {
        assert_eq!(body_len("PING :x\r\n"), 7);
        assert_eq!(body_len("@a=b PING :x"), 7);
    }

    #[test]
    fn test_exceeds_limits() {
        assert!(!exceeds_limits("PRIVMSG #c :short"));

        let long_body = format!("PRIVMSG #c :{}", "x".repeat(500));
        assert!(exceeds_limits(&long_body));

        let long_tags = format!("@k={} PING", "v".repeat(MAX_TAGS_LENGTH));
        assert!(exceeds_limits(&long_tags));
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_TAGS_LENGTH, 8191);
        assert_eq!(MAX_MESSAGE_BODY, 512);
    }
}
