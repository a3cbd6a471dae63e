//! Grammar productions for URIs and HTTP requests.
//!
//! - **`uri`**: the RFC 2396 request-URI subset (scheme, authority, paths,
//!   query, fragment)
//! - **`http`**: the RFC 2616 request subset (request-line, headers,
//!   terminating CRLF)
//!
//! Every production is a free function with the shared signature
//! `fn(&mut Parser<'_, Rule, S>) -> bool`, carrying the rollback and
//! emission contract of [`crate::engine`].

pub mod http;
pub mod uri;

/// Identity of a grammar production, compared by value.
///
/// One flat namespace for both grammars, since HTTP productions reference
/// URI productions directly (the request-target embeds the URI grammar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    // URI grammar
    Alphanum,
    DomainlabelMinus,
    ToplabelMinus,
    Domainlabel,
    Toplabel,
    Hostname,
    Reserved,
    Unreserved,
    Escaped,
    Uric,
    Query,
    RegName,
    RelSegment,
    Userinfo,
    UserinfoAt,
    Ipv4Address,
    Host,
    Port,
    Hostport,
    Server,
    Authority,
    Pchar,
    Param,
    Segment,
    PathSegments,
    AbsPath,
    NetPath,
    RelPath,
    RelativeUri,
    Fragment,
    HierPart,
    UricNoSlash,
    OpaquePart,
    Scheme,
    AbsoluteUri,
    Path,
    UriReference,

    // HTTP grammar
    Hex,
    Sp,
    Crlf,
    Lws,
    Token,
    FieldContent,
    FieldValue,
    FieldName,
    MessageHeader,
    HttpVersion,
    Method,
    RequestUri,
    RequestLine,
    Request,
}
