//! Single-pass IRC line scanner.
//!
//! The line is walked left to right through four sections, each guarded by
//! a one-character lookahead:
//!
//! ```text
//! [@tags] [:prefix] <verb> [params...] [:trailing]
//! ```
//!
//! Section boundaries are recognised with small nom parsers; every space and
//! terminator decision goes through [`crate::scanner`]. Only the verb can
//! fail. Tags and prefixes that have no closing space are treated as absent,
//! which leaves the sigil in the verb position where the verb gate rejects it.

use nom::{
    branch::alt,
    bytes::complete::take_until,
    character::complete::{alpha1, char, satisfy},
    combinator::{all_consuming, recognize},
    error::{context, VerboseError, VerboseErrorKind},
    multi::count,
    sequence::preceded,
    IResult,
};

use crate::error::{InvalidMessage, Result};
use crate::prefix::PrefixRef;
use crate::scanner::{find_line_end, find_space, find_terminator, skip_spaces};

use super::borrowed::MessageRef;
use super::tags::parse_tag_list;

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

/// Parse IRCv3 message tags (the part after `@` and before the first space).
fn parse_tags(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing IRCv3 message tags",
        preceded(char('@'), take_until(" ")),
    )(input)
}

/// Parse message prefix (the part after `:` and before the first space).
fn parse_prefix(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message prefix",
        preceded(char(':'), take_until(" ")),
    )(input)
}

/// Validate a verb candidate: three digits or one or more ASCII letters.
fn parse_verb(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing IRC verb",
        all_consuming(alt((
            recognize(count(satisfy(|c| c.is_ascii_digit()), 3)),
            alpha1,
        ))),
    )(input)
}

/// Turn a nom failure on `span` (which starts at `offset` in the line) into
/// an [`InvalidMessage`] pointing at the innermost failing position.
fn invalid(err: nom::Err<VerboseError<&str>>, span: &str, offset: usize) -> InvalidMessage {
    let e = match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e,
        nom::Err::Incomplete(_) => {
            return InvalidMessage::new("incomplete input", offset + span.len());
        }
    };

    let position = e
        .errors
        .first()
        .map_or(offset, |(rest, _)| offset + span.len() - rest.len());
    let context_info = e
        .errors
        .iter()
        .rev()
        .find_map(|(_, kind)| match kind {
            VerboseErrorKind::Context(ctx) => Some(*ctx),
            _ => None,
        })
        .unwrap_or("parsing IRC verb");

    let reason = if span.is_empty() {
        format!("{}: missing verb", context_info)
    } else {
        format!(
            "{}: expected three digits or letters, found {:?}",
            context_info, span
        )
    };
    InvalidMessage::new(reason, position)
}

/// Parse one IRC line into a [`MessageRef`] borrowing from it.
pub(crate) fn parse_line(line: &str) -> Result<MessageRef<'_>> {
    let parsed = scan(line);
    match &parsed {
        Ok(msg) => tracing::trace!(
            verb = msg.verb,
            tags = msg.tags.len(),
            params = msg.params.len(),
            "parsed IRC line"
        ),
        Err(err) => tracing::debug!(
            reason = %err.reason,
            position = err.position,
            "rejected IRC line"
        ),
    }
    parsed
}

fn scan(line: &str) -> Result<MessageRef<'_>> {
    if line.is_empty() {
        return Err(InvalidMessage::empty());
    }
    if find_line_end(line, 0) == 0 {
        return Err(InvalidMessage::blank(line.len()));
    }

    let mut pos = 0;

    // Tags
    let mut tags = Vec::new();
    if let Ok((rest, raw)) = parse_tags(line) {
        tags = parse_tag_list(raw);
        pos = skip_spaces(line, line.len() - rest.len());
    }

    // Prefix
    let mut prefix = None;
    if let Ok((rest, raw)) = parse_prefix(&line[pos..]) {
        prefix = Some(PrefixRef::parse(raw));
        pos = skip_spaces(line, line.len() - rest.len());
    }

    // Verb
    let verb_end = find_space(line, pos).unwrap_or_else(|| find_line_end(line, pos));
    let candidate = &line[pos..verb_end];
    let verb = match parse_verb(candidate) {
        Ok((_, verb)) => verb,
        Err(e) => return Err(invalid(e, candidate, pos)),
    };
    pos = skip_spaces(line, verb_end);

    // Params; a ':' opening a token takes everything up to the terminator
    let content_end = find_line_end(line, pos);
    let mut params = Vec::new();
    while pos < content_end {
        if line.as_bytes()[pos] == b':' {
            params.push(&line[pos + 1..find_terminator(line, pos + 1)]);
            break;
        }
        let end = find_space(line, pos).map_or(content_end, |sp| sp.min(content_end));
        params.push(&line[pos..end]);
        pos = skip_spaces(line, end);
    }

    Ok(MessageRef {
        tags,
        prefix,
        verb,
        params,
        raw: line,
    })
}
