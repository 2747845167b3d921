use std::ops::Range;

use crate::error::SplitError;
use crate::options::QuotePolicy;

/// How a unit is terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tail {
    /// End of input.
    End,
    /// A comma (`,` or `，`), possibly padded with whitespace.
    Comma,
    /// A run of whitespace.
    Space,
}

/// Text carried by a unit. Escapes are not decoded yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload<'a> {
    /// Text between the quotes, quotes excluded.
    Quoted(&'a str),
    Unquoted(&'a str),
}

/// One lexical chunk of the input, before any merging happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit<'a> {
    /// Bytes covered by this unit: skipped separators, the body and the tail.
    pub span: Range<usize>,
    pub payload: Payload<'a>,
    pub tail: Tail,
    /// The exact delimiter text that followed the body.
    pub tail_text: &'a str,
}

impl<'a> Unit<'a> {
    pub fn text(&self) -> &'a str {
        match self.payload {
            Payload::Quoted(s) | Payload::Unquoted(s) => s,
        }
    }

    pub fn is_quoted(&self) -> bool {
        matches!(self.payload, Payload::Quoted(_))
    }

    pub fn has_comma_tail(&self) -> bool {
        self.tail == Tail::Comma
    }
}

fn is_comma(c: char) -> bool {
    matches!(c, ',' | '，')
}

/// Scans `input` into units, left to right.
///
/// Leading whitespace and stray commas (ones that follow an already
/// consumed comma tail, or start the input) are folded into the span of the
/// next unit. Text left after the last unit is only whitespace and commas.
pub fn scan(input: &str, policy: QuotePolicy) -> Result<Vec<Unit<'_>>, SplitError> {
    let mut scanner = Scanner { input, pos: 0 };
    let mut units = Vec::new();

    while let Some(unit) = scanner.next_unit(policy)? {
        tracing::trace!(
            start = unit.span.start,
            end = unit.span.end,
            quoted = unit.is_quoted(),
            tail = ?unit.tail,
            "scanned unit"
        );
        units.push(unit);
    }

    Ok(units)
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn next_unit(&mut self, policy: QuotePolicy) -> Result<Option<Unit<'a>>, SplitError> {
        let input = self.input;
        let start = self.pos;
        let body_start = skip_separators(input, start);
        if body_start == input.len() {
            self.pos = body_start;
            return Ok(None);
        }

        if input[body_start..].starts_with('"') {
            let err = match closing_quote(input, body_start) {
                Some(close) => match read_tail(input, close + 1) {
                    Some((tail, tail_end)) => {
                        self.pos = tail_end;
                        return Ok(Some(Unit {
                            span: start..tail_end,
                            payload: Payload::Quoted(&input[body_start + 1..close]),
                            tail,
                            tail_text: &input[close + 1..tail_end],
                        }));
                    }
                    None => SplitError::TextAfterClosingQuote { offset: close },
                },
                None => SplitError::UnclosedQuote { offset: body_start },
            };

            match policy {
                QuotePolicy::Literal => {
                    tracing::debug!(error = %err, "reading malformed quote as plain text");
                }
                QuotePolicy::Discard => {
                    tracing::debug!(
                        error = %err,
                        dropped = input.len() - body_start,
                        "dropping input after malformed quote"
                    );
                    self.pos = input.len();
                    return Ok(None);
                }
                QuotePolicy::Reject => return Err(err),
            }
        }

        let body_end = input[body_start..]
            .find(|c: char| c.is_whitespace() || is_comma(c))
            .map_or(input.len(), |i| body_start + i);
        // An unquoted body always stops at whitespace, a comma or the end.
        let (tail, tail_end) = read_tail(input, body_end).unwrap_or((Tail::End, body_end));
        self.pos = tail_end;

        Ok(Some(Unit {
            span: start..tail_end,
            payload: Payload::Unquoted(&input[body_start..body_end]),
            tail,
            tail_text: &input[body_end..tail_end],
        }))
    }
}

fn skip_separators(input: &str, from: usize) -> usize {
    input[from..]
        .find(|c: char| !c.is_whitespace() && !is_comma(c))
        .map_or(input.len(), |i| from + i)
}

fn skip_whitespace(input: &str, from: usize) -> usize {
    input[from..]
        .find(|c: char| !c.is_whitespace())
        .map_or(input.len(), |i| from + i)
}

/// Finds the quote closing the one at `open`.
///
/// A backslash pairs with a following `\` or `"`, so `\"` stays inside the
/// quotes while `\\"` closes them. Both are ASCII, which keeps byte stepping
/// on char boundaries.
fn closing_quote(input: &str, open: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut i = open + 1;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if matches!(bytes.get(i + 1), Some(b'\\' | b'"')) => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }

    None
}

/// Reads the delimiter starting at `at`. A comma wins over plain whitespace,
/// so `a  , b` has a single comma tail `"  , "`.
fn read_tail(input: &str, at: usize) -> Option<(Tail, usize)> {
    if at == input.len() {
        return Some((Tail::End, at));
    }

    let ws_end = skip_whitespace(input, at);
    match input[ws_end..].chars().next() {
        Some(c) if is_comma(c) => {
            Some((Tail::Comma, skip_whitespace(input, ws_end + c.len_utf8())))
        }
        _ if ws_end > at => Some((Tail::Space, ws_end)),
        _ => None,
    }
}
