use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::Result;
use crate::ircv3::server_time;
use crate::prefix::PrefixRef;

use super::nom_parser;
use super::tags::{find_tag, Tag, TagValue};
use super::types::Message;

/// A parsed IRC line borrowing from the input.
///
/// Tags are kept in declaration order, duplicates included. `params` is
/// empty when the line carried none; the last element is the trailing
/// parameter when one was present.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MessageRef<'a> {
    pub tags: Vec<Tag<'a>>,
    pub prefix: Option<PrefixRef<'a>>,
    pub verb: &'a str,
    pub params: Vec<&'a str>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub raw: &'a str,
}

impl<'a> MessageRef<'a> {
    /// Parse one IRC line. A trailing CRLF (or LF, or `\n\r`) is tolerated.
    ///
    /// ```
    /// use irc_parse_line::MessageRef;
    ///
    /// let msg = MessageRef::parse("PRIVMSG Angel :yes I'm receiving it !\r\n").unwrap();
    /// assert_eq!(msg.verb, "PRIVMSG");
    /// assert_eq!(msg.params, vec!["Angel", "yes I'm receiving it !"]);
    /// ```
    pub fn parse(s: &'a str) -> Result<MessageRef<'a>> {
        nom_parser::parse_line(s)
    }

    /// Nickname or server name from the prefix.
    pub fn source(&self) -> Option<&'a str> {
        self.prefix.map(|p| p.source())
    }

    /// Server name, when the prefix is a dotted name with no user/host parts.
    pub fn servername(&self) -> Option<&'a str> {
        self.prefix.and_then(|p| p.servername())
    }

    pub fn user(&self) -> Option<&'a str> {
        self.prefix.and_then(|p| p.user())
    }

    pub fn host(&self) -> Option<&'a str> {
        self.prefix.and_then(|p| p.host())
    }

    /// Value of the first tag declared with `key`.
    pub fn tag(&self, key: &str) -> Option<&TagValue<'a>> {
        find_tag(&self.tags, key)
    }

    pub fn has_tag(&self, key: &str) -> bool {
        self.tag(key).is_some()
    }

    /// The reply code when the verb is a three-digit numeric.
    pub fn numeric(&self) -> Option<u16> {
        numeric(self.verb)
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric().is_some()
    }

    /// The `msgid` tag value.
    pub fn msgid(&self) -> Option<&str> {
        self.tag("msgid").and_then(TagValue::as_str)
    }

    /// When the message was sent, from the IRCv3 `time` tag or Twitch's
    /// `tmi-sent-ts` millisecond timestamp.
    pub fn server_time(&self) -> Option<DateTime<Utc>> {
        server_time::from_tags(&self.tags)
    }

    /// Copy into an owned [`Message`].
    pub fn to_message(&self) -> Message {
        Message::from(self.clone())
    }
}

/// Verbs are validated before this is called, so three characters means
/// three digits.
pub(crate) fn numeric(verb: &str) -> Option<u16> {
    if verb.len() == 3 {
        verb.parse().ok()
    } else {
        None
    }
}
