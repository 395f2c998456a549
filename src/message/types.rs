use std::str::FromStr;

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InvalidMessage;
use crate::ircv3::server_time;
use crate::prefix::Prefix;

use super::borrowed::{numeric, MessageRef};
use super::tags::{find_tag, Tag, TagValue};

/// An owned parsed IRC line.
///
/// Produced from a [`MessageRef`] when the parsed message has to outlive
/// the buffer it was read from.
///
/// ```
/// use irc_parse_line::Message;
///
/// let msg: Message = ":nick!user@host PRIVMSG #channel :Hello!".parse().unwrap();
/// assert_eq!(msg.source(), Some("nick"));
/// assert_eq!(msg.params, vec!["#channel", "Hello!"]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Message {
    pub tags: Vec<Tag<'static>>,
    pub prefix: Option<Prefix>,
    pub verb: String,
    pub params: Vec<String>,
}

impl Message {
    pub fn source(&self) -> Option<&str> {
        self.prefix.as_ref().map(Prefix::source)
    }

    pub fn servername(&self) -> Option<&str> {
        self.prefix.as_ref().and_then(Prefix::servername)
    }

    pub fn user(&self) -> Option<&str> {
        self.prefix.as_ref().and_then(Prefix::user)
    }

    pub fn host(&self) -> Option<&str> {
        self.prefix.as_ref().and_then(Prefix::host)
    }

    /// Value of the first tag declared with `key`.
    pub fn tag(&self, key: &str) -> Option<&TagValue<'static>> {
        find_tag(&self.tags, key)
    }

    pub fn numeric(&self) -> Option<u16> {
        numeric(&self.verb)
    }

    pub fn server_time(&self) -> Option<DateTime<Utc>> {
        server_time::from_tags(&self.tags)
    }
}

impl<'a> From<MessageRef<'a>> for Message {
    fn from(msg: MessageRef<'a>) -> Self {
        Message {
            tags: msg.tags.into_iter().map(Tag::into_owned).collect(),
            prefix: msg.prefix.map(Prefix::from),
            verb: msg.verb.to_owned(),
            params: msg.params.into_iter().map(str::to_owned).collect(),
        }
    }
}

impl FromStr for Message {
    type Err = InvalidMessage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageRef::parse(s).map(Message::from)
    }
}
