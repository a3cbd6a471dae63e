//! URI grammar, RFC 2396 subset.
//!
//! Alternation is ordered: the first branch that matches wins, with no
//! longest-match resolution. Two deliberate leniencies carried over from the
//! reference grammar as written: IPv4 octets are `1*DIGIT` with no 0-255
//! bound, and domain labels tolerate a trailing hyphen (only the leading
//! alphanumeric is enforced structurally).

use crate::engine::{EventSink, Parser};
use crate::grammar::Rule;
use crate::grammar::http::hex;

// alphanum = alpha | digit
pub fn alphanum<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Alphanum, |p| {
        p.range(b'a', b'z') || p.range(b'A', b'Z') || p.range(b'0', b'9')
    })
}

// domainlabel (long form) = alphanum *( alphanum | "-" )
fn domainlabel_minus<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::DomainlabelMinus, |p| {
        alphanum(p) && p.many(|p| alphanum(p) || p.byte(b'-'))
    })
}

// toplabel (long form) = alpha *( alphanum | "-" )
fn toplabel_minus<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::ToplabelMinus, |p| {
        (p.range(b'a', b'z') || p.range(b'A', b'Z')) && p.many(|p| alphanum(p) || p.byte(b'-'))
    })
}

// domainlabel = alphanum | alphanum *( alphanum | "-" ) alphanum
pub fn domainlabel<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Domainlabel, |p| domainlabel_minus(p) || alphanum(p))
}

// toplabel = alpha | alpha *( alphanum | "-" ) alphanum
pub fn toplabel<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Toplabel, |p| {
        toplabel_minus(p) || p.range(b'a', b'z') || p.range(b'A', b'Z')
    })
}

// hostname = *( domainlabel "." ) toplabel [ "." ]
pub fn hostname<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Hostname, |p| {
        p.many(|p| domainlabel(p) && p.byte(b'.'))
            && toplabel(p)
            && p.optional(|p| p.byte(b'.'))
    })
}

// reserved = [;/?:@&=+$,]
pub fn reserved<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Reserved, |p| p.one_of(b";/?:@&=+$,"))
}

// unreserved = alphanum | [-_.!~*'()]
pub fn unreserved<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Unreserved, |p| {
        p.range(b'a', b'z') || p.range(b'A', b'Z') || p.range(b'0', b'9') || p.one_of(b"-_.!~*'()")
    })
}

// escaped = "%" hex hex
pub fn escaped<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Escaped, |p| p.byte(b'%') && hex(p) && hex(p))
}

// uric = reserved | unreserved | escaped
pub fn uric<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Uric, |p| reserved(p) || unreserved(p) || escaped(p))
}

// query = *uric
pub fn query<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Query, |p| p.many(uric))
}

// fragment = *uric
pub fn fragment<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Fragment, |p| p.many(uric))
}

// reg_name = 1*( unreserved | escaped | [$,;:@&=+] )
pub fn reg_name<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::RegName, |p| {
        p.at_least_one(|p| unreserved(p) || escaped(p) || p.one_of(b"$,;:@&=+"))
    })
}

// rel_segment = 1*( unreserved | escaped | [;@&=+$,] )
pub fn rel_segment<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::RelSegment, |p| {
        p.at_least_one(|p| unreserved(p) || escaped(p) || p.one_of(b";@&=+$,"))
    })
}

// userinfo = *( unreserved | escaped | [;:&=+$,] )
pub fn userinfo<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Userinfo, |p| {
        p.many(|p| unreserved(p) || escaped(p) || p.one_of(b";:&=+$,"))
    })
}

// [ userinfo "@" ]
fn userinfo_at<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::UserinfoAt, |p| {
        p.optional(|p| userinfo(p) && p.byte(b'@'))
    })
}

// IPv4address = 1*digit "." 1*digit "." 1*digit "." 1*digit
pub fn ipv4_address<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Ipv4Address, |p| {
        p.at_least_one(|p| p.range(b'0', b'9'))
            && p.byte(b'.')
            && p.at_least_one(|p| p.range(b'0', b'9'))
            && p.byte(b'.')
            && p.at_least_one(|p| p.range(b'0', b'9'))
            && p.byte(b'.')
            && p.at_least_one(|p| p.range(b'0', b'9'))
    })
}

// host = hostname | IPv4address
pub fn host<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Host, |p| hostname(p) || ipv4_address(p))
}

// port = *digit
pub fn port<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Port, |p| p.many(|p| p.range(b'0', b'9')))
}

// hostport = host [ ":" port ]
pub fn hostport<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Hostport, |p| {
        host(p) && p.optional(|p| p.byte(b':') && port(p))
    })
}

// server = [ [ userinfo "@" ] hostport ]
pub fn server<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Server, |p| {
        p.optional(|p| userinfo_at(p) && hostport(p))
    })
}

// authority = server | reg_name
pub fn authority<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Authority, |p| server(p) || reg_name(p))
}

// pchar = unreserved | escaped | [:@&=+$,]
pub fn pchar<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Pchar, |p| {
        unreserved(p) || escaped(p) || p.one_of(b":@&=+$,")
    })
}

// param = *pchar
pub fn param<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Param, |p| p.many(pchar))
}

// segment = *pchar *( ";" param )
pub fn segment<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Segment, |p| {
        p.many(pchar) && p.many(|p| p.byte(b';') && param(p))
    })
}

// path_segments = segment *( "/" segment )
pub fn path_segments<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::PathSegments, |p| {
        segment(p) && p.many(|p| p.byte(b'/') && segment(p))
    })
}

// abs_path = "/" path_segments [ query ]
//
// RFC 2396 only hangs the query behind "?" at the URI level; this grammar
// additionally tolerates a bare trailing query on the path itself.
pub fn abs_path<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::AbsPath, |p| {
        p.byte(b'/') && path_segments(p) && p.optional(query)
    })
}

// net_path = "//" authority [ abs_path ]
pub fn net_path<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::NetPath, |p| {
        p.literal(b"//") && authority(p) && p.optional(abs_path)
    })
}

// rel_path = rel_segment [ abs_path ]
pub fn rel_path<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::RelPath, |p| {
        rel_segment(p) && p.optional(abs_path)
    })
}

// relative_uri = ( net_path | abs_path | rel_path ) [ "?" query ]
pub fn relative_uri<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::RelativeUri, |p| {
        (net_path(p) || abs_path(p) || rel_path(p)) && p.optional(|p| p.byte(b'?') && query(p))
    })
}

// hier_part = ( net_path | abs_path ) [ "?" query ]
pub fn hier_part<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::HierPart, |p| {
        (net_path(p) || abs_path(p)) && p.optional(|p| p.byte(b'?') && query(p))
    })
}

// uric_no_slash = unreserved | escaped | [;?:@&=+$,]
pub fn uric_no_slash<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::UricNoSlash, |p| {
        unreserved(p) || escaped(p) || p.one_of(b";?:@&=+$,")
    })
}

// opaque_part = uric_no_slash *uric
pub fn opaque_part<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::OpaquePart, |p| {
        uric_no_slash(p) && p.many(uric)
    })
}

// scheme = alpha *( alpha | digit | "+" | "-" | "." )
pub fn scheme<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Scheme, |p| {
        (p.range(b'a', b'z') || p.range(b'A', b'Z'))
            && p.many(|p| {
                p.range(b'a', b'z') || p.range(b'A', b'Z') || p.range(b'0', b'9') || p.one_of(b"+-.")
            })
    })
}

// absoluteURI = scheme ":" ( hier_part | opaque_part )
pub fn absolute_uri<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::AbsoluteUri, |p| {
        scheme(p) && p.byte(b':') && (hier_part(p) || opaque_part(p))
    })
}

// path = [ abs_path | opaque_part ]
pub fn path<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::Path, |p| p.optional(|p| abs_path(p) || opaque_part(p)))
}

// URI-reference = [ absoluteURI | relativeURI ] [ "#" fragment ]
pub fn uri_reference<S: EventSink<Rule>>(p: &mut Parser<'_, Rule, S>) -> bool {
    p.rule(Rule::UriReference, |p| {
        p.optional(|p| absolute_uri(p) || relative_uri(p))
            && p.optional(|p| p.byte(b'#') && fragment(p))
    })
}
