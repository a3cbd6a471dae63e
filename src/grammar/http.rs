//! HTTP request grammar, RFC 2616 subset.
//!
//! Only the productions reachable from `request` are implemented. The
//! response grammar, quoted-strings/comments, transfer codings, media types
//! and date formats are out of scope. Literals are matched case-sensitively
//! (so `HTTP/` but not `http/`), and a method is any token, not just the
//! registered names; recognizing known methods is layered above the grammar
//! in [`crate::http::request`].

use crate::engine::{EventSink, Parser};
use crate::grammar::Rule;
use crate::grammar::uri::{abs_path, absolute_uri, authority};

/// Punctuation accepted inside a token besides letters and digits.
const TOKEN_EXTRA: &[u8] = b"*!+^|#-_$.~%&";

// hex = digit | "A".."F" | "a".."f"
pub fn hex<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Hex, |p| {
        p.range(b'0', b'9') || p.range(b'A', b'F') || p.range(b'a', b'f')
    })
}

// SP = single space
pub fn sp<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Sp, |p| p.byte(b' '))
}

// CRLF = CR LF
pub fn crlf<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Crlf, |p| p.literal(b"\r\n"))
}

// LWS = [CRLF] 1*( SP | HT )
pub fn lws<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Lws, |p| {
        p.optional(|p| p.literal(b"\r\n")) && p.at_least_one(|p| p.one_of(b" \t"))
    })
}

// token = 1*( alpha | digit | token punctuation )
pub fn token<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Token, |p| {
        p.at_least_one(|p| {
            p.range(b'0', b'9') || p.range(b'A', b'Z') || p.range(b'a', b'z') || p.one_of(TOKEN_EXTRA)
        })
    })
}

// field-content = 1*( HT | printable ASCII )
pub fn field_content<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::FieldContent, |p| {
        p.at_least_one(|p| p.byte(b'\t') || p.range(0x20, 0x7e))
    })
}

// field-value = *( field-content | LWS )
//
// LWS here is what makes header folding work: a CRLF followed by space or
// tab continues the same logical value, and the folded bytes stay in the
// value span verbatim.
pub fn field_value<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::FieldValue, |p| {
        p.many(|p| field_content(p) || lws(p))
    })
}

// field-name = token
pub fn field_name<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::FieldName, |p| token(p))
}

// message-header = field-name *( SP | HT ) ":" *( SP | HT ) [ field-value ] CRLF
pub fn message_header<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::MessageHeader, |p| {
        field_name(p)
            && p.many(|p| p.one_of(b" \t"))
            && p.byte(b':')
            && p.many(|p| p.one_of(b" \t"))
            && p.optional(field_value)
            && p.literal(b"\r\n")
    })
}

// HTTP-Version = "HTTP" "/" 1*digit "." 1*digit
pub fn http_version<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::HttpVersion, |p| {
        p.literal(b"HTTP/")
            && p.at_least_one(|p| p.range(b'0', b'9'))
            && p.byte(b'.')
            && p.at_least_one(|p| p.range(b'0', b'9'))
    })
}

// Method = token (extension-method form; known names are a semantic layer)
pub fn method<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Method, |p| token(p))
}

// Request-URI = "*" | absoluteURI | abs_path | authority
//
// authority can match empty (server is doubly optional), which would leave
// a request line with no target bytes; a match here must consume at least
// one byte.
pub fn request_uri<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::RequestUri, |p| {
        let start = p.pos();
        (p.byte(b'*') || absolute_uri(p) || abs_path(p) || authority(p)) && p.pos() > start
    })
}

// Request-Line = Method SP Request-URI SP HTTP-Version CRLF
pub fn request_line<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::RequestLine, |p| {
        method(p) && sp(p) && request_uri(p) && sp(p) && http_version(p) && crlf(p)
    })
}

// Request = Request-Line *( message-header ) CRLF
pub fn request<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Request, |p| {
        request_line(p) && p.many(message_header) && crlf(p)
    })
}
