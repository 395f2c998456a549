//! IRCv3 message tags: the `@key=value;key ` section at the start of a line.

use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The value side of a message tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TagValue<'a> {
    /// The key was declared without `=`; its presence is the value.
    Flag,
    /// The unescaped value. `key=` yields an empty string.
    Text(Cow<'a, str>),
}

impl<'a> TagValue<'a> {
    /// Returns the text value, or `None` for a bare flag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::Flag => None,
            TagValue::Text(s) => Some(s),
        }
    }

    /// True for a key declared without `=`.
    pub fn is_flag(&self) -> bool {
        matches!(self, TagValue::Flag)
    }

    /// Detaches the value from the input line.
    pub fn into_owned(self) -> TagValue<'static> {
        match self {
            TagValue::Flag => TagValue::Flag,
            TagValue::Text(s) => TagValue::Text(Cow::Owned(s.into_owned())),
        }
    }
}

/// A single message tag, in the order it was declared on the line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tag<'a> {
    /// Tag key, never unescaped (may carry a `+` client prefix or vendor).
    pub key: Cow<'a, str>,
    /// Tag value.
    pub value: TagValue<'a>,
}

impl<'a> Tag<'a> {
    /// Detaches the tag from the input line.
    pub fn into_owned(self) -> Tag<'static> {
        Tag {
            key: Cow::Owned(self.key.into_owned()),
            value: self.value.into_owned(),
        }
    }
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TagValue::Flag => f.write_str(&self.key),
            TagValue::Text(v) => write!(f, "{}={}", self.key, v),
        }
    }
}

/// Unescape a tag value from wire format.
///
/// `\:` becomes `;`, `\s` a space, `\\` a backslash, `\r` and `\n` CR and
/// LF. Any other escaped character stands for itself and a trailing lone
/// backslash is dropped. Values without a backslash are returned borrowed.
///
/// ```
/// use irc_parse_line::message::tags::unescape_tag_value;
///
/// assert_eq!(unescape_tag_value("hello\\sworld"), "hello world");
/// assert_eq!(unescape_tag_value("plain"), "plain");
/// ```
pub fn unescape_tag_value(value: &str) -> Cow<'_, str> {
    if !value.contains('\\') {
        return Cow::Borrowed(value);
    }

    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        let r = if c == '\\' {
            match iter.next() {
                Some(':') => ';',
                Some('s') => ' ',
                Some('\\') => '\\',
                Some('r') => '\r',
                Some('n') => '\n',
                Some(c) => c,
                None => break,
            }
        } else {
            c
        };
        unescaped.push(r);
    }
    Cow::Owned(unescaped)
}

/// Split a raw tag list (the text between `@` and the first space).
///
/// Empty tokens from `;;` or a trailing `;` are skipped. Keys are split on
/// the first `=`, and duplicate keys are all kept in declaration order.
pub(crate) fn parse_tag_list(raw: &str) -> Vec<Tag<'_>> {
    raw.split(';')
        .filter(|token| !token.is_empty())
        .map(|token| match token.split_once('=') {
            Some((key, value)) => Tag {
                key: Cow::Borrowed(key),
                value: TagValue::Text(unescape_tag_value(value)),
            },
            None => Tag {
                key: Cow::Borrowed(token),
                value: TagValue::Flag,
            },
        })
        .collect()
}

/// Value of the first tag declared with `key`.
pub(crate) fn find_tag<'t, 'a>(tags: &'t [Tag<'a>], key: &str) -> Option<&'t TagValue<'a>> {
    tags.iter().find(|t| t.key == key).map(|t| &t.value)
}
