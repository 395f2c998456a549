//! # irc-parse-line
//!
//! A single-pass parser for one line of IRC protocol text (RFC 1459/2812)
//! with the IRCv3 message-tags extension, tolerant of the quirks real
//! deployments such as Twitch IRC produce.
//!
//! ## Features
//!
//! - IRCv3 tags with value unescaping, in declaration order
//! - Prefix classification into server name or `nick!user@host` parts
//! - Verb validation (alphabetic command or three-digit numeric)
//! - Middle and trailing parameters, collapsing repeated spaces
//! - Zero-copy [`MessageRef`] with an owned [`Message`] counterpart
//!
//! Framing a byte stream into lines and talking to sockets are left to the
//! caller. Each call is independent and holds no state, so lines may be
//! parsed from any number of threads at once.

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ```rust
//! use irc_parse_line::{parse_line, TagValue};
//!
//! let msg = parse_line("@x;y=;z=abc :nick!user@host.name JOIN #kesor6\r\n").unwrap();
//!
//! assert_eq!(msg.tag("x"), Some(&TagValue::Flag));
//! assert_eq!(msg.source(), Some("nick"));
//! assert_eq!(msg.user(), Some("user"));
//! assert_eq!(msg.host(), Some("host.name"));
//! assert_eq!(msg.verb, "JOIN");
//! assert_eq!(msg.params, vec!["#kesor6"]);
//! ```
//!
//! A line that cannot be parsed yields [`InvalidMessage`]; callers usually
//! drop such a line and keep reading.
//!
//! ```rust
//! use irc_parse_line::parse_line;
//!
//! assert!(parse_line("1234").is_err());
//! assert!(parse_line("@just-tag").is_err());
//! ```

pub mod error;
pub mod ircv3;
pub mod limits;
pub mod message;
pub mod prefix;
pub mod scanner;

pub use self::error::{InvalidMessage, Result};
pub use self::ircv3::{parse_server_time, parse_unix_millis};
pub use self::limits::{MAX_MESSAGE_BODY, MAX_TAGS_LENGTH};
pub use self::message::{Message, MessageRef, Tag, TagValue};
pub use self::prefix::{Prefix, PrefixRef};
pub use self::scanner::{find_line_end, skip_spaces};

/// Parse a single IRC line into a [`MessageRef`] borrowing from `line`.
///
/// `line` must hold exactly one message; a trailing CRLF is allowed.
/// Fails when the line is empty, whitespace only, or has no valid verb.
pub fn parse_line(line: &str) -> Result<MessageRef<'_>> {
    MessageRef::parse(line)
}
