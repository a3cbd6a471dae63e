use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, trace};

use crate::engine::{EventSink, Parser, Span};
use crate::grammar::{self, Rule};
use crate::http::request::HttpRequest;

/// Why a buffer failed to parse as a complete request.
///
/// The grammar itself only knows match/no-match; these variants are derived
/// from the engine's furthest-failure record after the top-level `Request`
/// production has failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A byte the grammar cannot accept at this position.
    #[error("unexpected byte {byte:#04x} at offset {offset}")]
    UnexpectedByte { offset: usize, byte: u8 },
    /// The input ended before the grammar did (e.g. no terminating blank
    /// line).
    #[error("unexpected end of input at offset {offset}")]
    Incomplete { offset: usize },
    /// The request-line does not start with a valid method token.
    #[error("malformed method at start of request")]
    InvalidMethod,
    /// The version field is not `HTTP/` digits `.` digits.
    #[error("malformed HTTP version at offset {offset}")]
    InvalidVersion { offset: usize },
    /// The grammar matched but the record could not be assembled. The
    /// request-target production rejects zero-length matches, so every
    /// complete match carries all required spans; kept as a guard instead
    /// of a panic.
    #[error("request structure could not be assembled")]
    InvalidRequest,
}

/// Event sink that assembles the request record.
///
/// The request-line rules fill the record spans directly,
/// `FieldName`/`FieldValue` park their spans in pending slots, and the
/// enclosing `MessageHeader` event commits them as one header. The top-level `Request` event is the
/// completion gate; without it the assembler is simply dropped.
#[derive(Debug, Default)]
struct RequestAssembler {
    method: Option<Span>,
    target: Option<Span>,
    version: Option<Span>,
    host: Option<Span>,
    pending_name: Option<Span>,
    pending_value: Option<Span>,
    headers: Vec<(Span, Option<Span>)>,
    complete: bool,
}

impl EventSink<Rule> for RequestAssembler {
    fn on_match(&mut self, rule: Rule, span: Span, matched: &[u8]) {
        trace!(?rule, offset = span.offset, len = span.len, "rule matched");
        match rule {
            Rule::Method => self.method = Some(span),
            Rule::RequestUri => self.target = Some(span),
            Rule::HttpVersion => self.version = Some(span),
            Rule::FieldName => self.pending_name = Some(span),
            Rule::FieldValue => self.pending_value = Some(span),
            Rule::MessageHeader => {
                let value = self.pending_value.take();
                if let Some(name) = self.pending_name.take() {
                    // The header line starts with its name, so the name
                    // bytes sit at the front of this rule's match.
                    if matched[..name.len] == *b"Host" {
                        self.host = value;
                    }
                    self.headers.push((name, value));
                }
            }
            Rule::Request => self.complete = true,
            _ => {}
        }
    }
}

impl RequestAssembler {
    /// Materializes the record against the input buffer. Returns `None` if
    /// a required span is missing or not valid UTF-8. The grammar emits an
    /// event for every required span of a complete match (the request-target
    /// production cannot match empty), so `None` signals an internal
    /// inconsistency.
    fn finalize<'a>(self, input: &'a [u8]) -> Option<HttpRequest<'a>> {
        let text = |span: Span| std::str::from_utf8(span.slice(input)).ok();

        let method = text(self.method?)?;
        let target = text(self.target?)?;
        let version = text(self.version?)?;
        let host = match self.host {
            Some(span) => Some(text(span)?),
            None => None,
        };

        // Duplicate names: last occurrence wins.
        let mut headers = HashMap::with_capacity(self.headers.len());
        for (name, value) in self.headers {
            let name = text(name)?;
            let value = match value {
                Some(span) => text(span)?,
                None => "",
            };
            headers.insert(name, value);
        }

        Some(HttpRequest {
            method,
            target,
            version,
            host,
            headers,
        })
    }
}

/// Parses one HTTP request from the front of `buf`.
///
/// On success returns the record plus the number of bytes consumed through
/// the terminating blank line; trailing bytes beyond that are ignored. On
/// failure nothing partial is returned.
pub fn parse_request(buf: &[u8]) -> Result<(HttpRequest<'_>, usize), ParseError> {
    let mut parser = Parser::new(buf, RequestAssembler::default());
    let matched = grammar::http::request(&mut parser);
    let consumed = parser.pos();
    let (offset, rule) = parser.furthest_failure();
    let assembler = parser.into_sink();

    if !matched || !assembler.complete {
        debug!(offset, ?rule, "request grammar did not match");
        return Err(classify(buf, offset, rule));
    }

    let request = assembler.finalize(buf).ok_or(ParseError::InvalidRequest)?;
    Ok((request, consumed))
}

fn classify(buf: &[u8], offset: usize, rule: Option<Rule>) -> ParseError {
    let Some(&byte) = buf.get(offset) else {
        return ParseError::Incomplete { offset };
    };
    match rule {
        Some(Rule::HttpVersion) => ParseError::InvalidVersion { offset },
        _ if offset == 0 => ParseError::InvalidMethod,
        _ => ParseError::UnexpectedByte { offset, byte },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let (parsed, consumed) = parse_request(req).unwrap();

        assert_eq!(parsed.method, "GET");
        assert_eq!(parsed.target, "/");
        assert_eq!(parsed.version, "HTTP/1.1");
        assert_eq!(parsed.host, Some("example.com"));
        assert_eq!(consumed, req.len());
    }

    #[test]
    fn missing_blank_line_is_incomplete() {
        let req = b"GET / HTTP/1.1\r\n";
        let err = parse_request(req).unwrap_err();
        assert_eq!(
            err,
            ParseError::Incomplete {
                offset: req.len()
            }
        );
    }
}
