//! Typed readers for well-known IRCv3 and Twitch tags.

pub mod server_time;

pub use self::server_time::{parse_server_time, parse_unix_millis};
