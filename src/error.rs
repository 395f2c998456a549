//! Error type for IRC line parsing.
//!
//! Parsing has a single failure kind: the line could not be turned into a
//! message. Tags and prefixes degrade gracefully, so in practice this is
//! raised for empty input, whitespace-only input, or a bad verb.

use thiserror::Error;

/// Convenience type alias for Results using [`InvalidMessage`].
pub type Result<T, E = InvalidMessage> = std::result::Result<T, E>;

/// A line that could not be parsed as an IRC message.
///
/// Callers usually drop the offending line (optionally logging it) and keep
/// reading from the connection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid message at position {position}: {reason}")]
pub struct InvalidMessage {
    /// Human-readable description of what was being parsed.
    pub reason: String,
    /// Byte offset into the line where parsing gave up.
    pub position: usize,
}

impl InvalidMessage {
    pub(crate) fn new(reason: impl Into<String>, position: usize) -> Self {
        InvalidMessage {
            reason: reason.into(),
            position,
        }
    }

    /// Input was the empty string.
    pub(crate) fn empty() -> Self {
        InvalidMessage::new("empty message", 0)
    }

    /// Input consisted only of spaces and line terminators.
    pub(crate) fn blank(len: usize) -> Self {
        InvalidMessage::new("message contains only whitespace", len)
    }
}
