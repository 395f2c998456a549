//! Timestamps carried in message tags.
//!
//! IRCv3 `server-time` uses the `time` tag with an RFC 3339 value such as
//! `2023-01-01T12:00:00.000Z`. Twitch additionally sends `tmi-sent-ts` as
//! milliseconds since the Unix epoch.

use chrono::{DateTime, Utc};

use crate::message::tags::{find_tag, Tag, TagValue};

/// Parse an IRCv3 server-time value.
///
/// Returns `None` if the value is not RFC 3339.
pub fn parse_server_time(ts: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(ts)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a millisecond Unix timestamp such as Twitch's `tmi-sent-ts`.
pub fn parse_unix_millis(ts: &str) -> Option<DateTime<Utc>> {
    ts.parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}

/// `time` wins over `tmi-sent-ts` when both are present.
pub(crate) fn from_tags(tags: &[Tag<'_>]) -> Option<DateTime<Utc>> {
    find_tag(tags, "time")
        .and_then(TagValue::as_str)
        .and_then(parse_server_time)
        .or_else(|| {
            find_tag(tags, "tmi-sent-ts")
                .and_then(TagValue::as_str)
                .and_then(parse_unix_millis)
        })
}
