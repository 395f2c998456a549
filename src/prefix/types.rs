use std::convert::Infallible;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A message source borrowed from the input line.
///
/// Classification never fails: anything that is not a `nick!user@host` or
/// `nick@host` form is either a dotted server name or a bare nickname.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum PrefixRef<'a> {
    /// A server name such as `tmi.twitch.tv`.
    ServerName(&'a str),
    /// A nickname, with user and host when the prefix carried them.
    ///
    /// `user` is only ever set together with `host`.
    Nickname {
        nick: &'a str,
        user: Option<&'a str>,
        host: Option<&'a str>,
    },
}

impl<'a> PrefixRef<'a> {
    /// Classify a raw prefix (the text between `:` and the next space).
    ///
    /// The host separator is the last `@`; when a `!` is present that `@`
    /// must follow it. A prefix with neither separator is a server name if
    /// it contains a `.`, otherwise a bare nickname.
    ///
    /// ```
    /// use irc_parse_line::PrefixRef;
    ///
    /// let p = PrefixRef::parse("nick!user@host.name");
    /// assert_eq!(p.source(), "nick");
    /// assert_eq!(p.user(), Some("user"));
    /// assert_eq!(p.host(), Some("host.name"));
    ///
    /// assert_eq!(PrefixRef::parse("tmi.twitch.tv").servername(), Some("tmi.twitch.tv"));
    /// ```
    pub fn parse(raw: &'a str) -> Self {
        let user_sep = raw.find('!');
        let host_sep = raw
            .rfind('@')
            .filter(|&at| user_sep.map_or(true, |bang| at > bang));

        match (user_sep, host_sep) {
            (Some(bang), Some(at)) => PrefixRef::Nickname {
                nick: &raw[..bang],
                user: Some(&raw[bang + 1..at]),
                host: Some(&raw[at + 1..]),
            },
            (None, Some(at)) => PrefixRef::Nickname {
                nick: &raw[..at],
                user: None,
                host: Some(&raw[at + 1..]),
            },
            _ if raw.contains('.') => PrefixRef::ServerName(raw),
            _ => PrefixRef::Nickname {
                nick: raw,
                user: None,
                host: None,
            },
        }
    }

    /// The server name or nickname.
    pub fn source(&self) -> &'a str {
        match *self {
            PrefixRef::ServerName(name) => name,
            PrefixRef::Nickname { nick, .. } => nick,
        }
    }

    /// The server name, if the prefix was classified as one.
    pub fn servername(&self) -> Option<&'a str> {
        match *self {
            PrefixRef::ServerName(name) => Some(name),
            PrefixRef::Nickname { .. } => None,
        }
    }

    /// The nickname, if the prefix was classified as one.
    pub fn nickname(&self) -> Option<&'a str> {
        match *self {
            PrefixRef::ServerName(_) => None,
            PrefixRef::Nickname { nick, .. } => Some(nick),
        }
    }

    pub fn user(&self) -> Option<&'a str> {
        match *self {
            PrefixRef::ServerName(_) => None,
            PrefixRef::Nickname { user, .. } => user,
        }
    }

    pub fn host(&self) -> Option<&'a str> {
        match *self {
            PrefixRef::ServerName(_) => None,
            PrefixRef::Nickname { host, .. } => host,
        }
    }

    /// Convert to an owned [`Prefix`].
    pub fn into_owned(self) -> Prefix {
        match self {
            PrefixRef::ServerName(name) => Prefix::ServerName(name.to_owned()),
            PrefixRef::Nickname { nick, user, host } => Prefix::Nickname {
                nick: nick.to_owned(),
                user: user.map(str::to_owned),
                host: host.map(str::to_owned),
            },
        }
    }
}

/// An owned message source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Prefix {
    /// A server name such as `irc.libera.chat`.
    ServerName(String),
    /// A nickname, with user and host when the prefix carried them.
    Nickname {
        nick: String,
        user: Option<String>,
        host: Option<String>,
    },
}

impl Prefix {
    /// Classify a raw prefix string. See [`PrefixRef::parse`].
    pub fn new_from_str(raw: &str) -> Self {
        PrefixRef::parse(raw).into_owned()
    }

    pub fn source(&self) -> &str {
        match self {
            Prefix::ServerName(name) => name,
            Prefix::Nickname { nick, .. } => nick,
        }
    }

    pub fn servername(&self) -> Option<&str> {
        match self {
            Prefix::ServerName(name) => Some(name),
            Prefix::Nickname { .. } => None,
        }
    }

    pub fn user(&self) -> Option<&str> {
        match self {
            Prefix::ServerName(_) => None,
            Prefix::Nickname { user, .. } => user.as_deref(),
        }
    }

    pub fn host(&self) -> Option<&str> {
        match self {
            Prefix::ServerName(_) => None,
            Prefix::Nickname { host, .. } => host.as_deref(),
        }
    }
}

impl FromStr for Prefix {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Prefix::new_from_str(s))
    }
}

impl<'a> From<PrefixRef<'a>> for Prefix {
    fn from(prefix: PrefixRef<'a>) -> Self {
        prefix.into_owned()
    }
}
