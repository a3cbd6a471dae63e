use graze::engine::parser::Parser;
use graze::engine::sink::EventSink;
use graze::engine::span::Span;
use graze::grammar::Rule;
use graze::grammar::uri;

#[derive(Default)]
struct Recorder {
    events: Vec<(Rule, Span)>,
}

impl EventSink<Rule> for Recorder {
    fn on_match(&mut self, rule: Rule, span: Span, _matched: &[u8]) {
        self.events.push((rule, span));
    }
}

fn run(
    input: &[u8],
    production: fn(&mut Parser<'_, Rule, Recorder>) -> bool,
) -> (bool, usize, Vec<(Rule, Span)>) {
    let mut p = Parser::new(input, Recorder::default());
    let ok = production(&mut p);
    let pos = p.pos();
    (ok, pos, p.into_sink().events)
}

fn span_of(events: &[(Rule, Span)], rule: Rule) -> Option<Span> {
    events.iter().find(|(r, _)| *r == rule).map(|(_, s)| *s)
}

#[test]
fn test_scheme_stops_at_separator() {
    let (ok, pos, _) = run(b"http://x", uri::scheme);
    assert!(ok);
    assert_eq!(pos, 4);
}

#[test]
fn test_scheme_requires_leading_alpha() {
    let (ok, pos, _) = run(b"1http:", uri::scheme);
    assert!(!ok);
    assert_eq!(pos, 0);
}

#[test]
fn test_hostname_dotted() {
    let (ok, pos, _) = run(b"www.example.com", uri::hostname);
    assert!(ok);
    assert_eq!(pos, 15);
}

#[test]
fn test_hostname_single_label() {
    let (ok, pos, _) = run(b"localhost", uri::hostname);
    assert!(ok);
    assert_eq!(pos, 9);
}

#[test]
fn test_hostname_trailing_dot_defeated_by_greedy_repetition() {
    // The label repetition is greedy and never gives back, so it swallows
    // "com." and leaves nothing for the mandatory toplabel. The optional
    // trailing dot in the grammar is unreachable in practice.
    let (ok, pos, _) = run(b"example.com.", uri::hostname);
    assert!(!ok);
    assert_eq!(pos, 0);
}

#[test]
fn test_host_falls_back_to_ipv4() {
    let (ok, pos, events) = run(b"127.0.0.1", uri::host);
    assert!(ok);
    assert_eq!(pos, 9);
    assert!(span_of(&events, Rule::Ipv4Address).is_some());
}

#[test]
fn test_ipv4_octets_not_range_checked() {
    // Grammar-level leniency: each octet is 1*DIGIT, so overlong numeric
    // forms are syntactically fine.
    let (ok, pos, _) = run(b"999.1234.0.00042", uri::ipv4_address);
    assert!(ok);
    assert_eq!(pos, 16);
}

#[test]
fn test_escaped_requires_two_hex_digits() {
    let (ok, pos, _) = run(b"%2F", uri::escaped);
    assert!(ok);
    assert_eq!(pos, 3);

    let (ok, pos, _) = run(b"%2", uri::escaped);
    assert!(!ok);
    assert_eq!(pos, 0);

    let (ok, pos, _) = run(b"%GG", uri::escaped);
    assert!(!ok);
    assert_eq!(pos, 0);
}

#[test]
fn test_abs_path_with_params_and_query() {
    let (ok, pos, _) = run(b"/pub/WWW;v=1/TheProject.html", uri::abs_path);
    assert!(ok);
    assert_eq!(pos, 28);

    // The query set includes '?', so a trailing query rides along.
    let (ok, pos, _) = run(b"/search?q=rust", uri::abs_path);
    assert!(ok);
    assert_eq!(pos, 14);
}

#[test]
fn test_abs_path_stops_at_unencoded_space() {
    let (ok, pos, _) = run(b"/a b", uri::abs_path);
    assert!(ok);
    assert_eq!(pos, 2);
}

#[test]
fn test_authority_server_form_spans() {
    let input = b"user@www.example.com:8080";
    let (ok, pos, events) = run(input, uri::authority);
    assert!(ok);
    assert_eq!(pos, input.len());

    assert_eq!(span_of(&events, Rule::Userinfo), Some(Span::new(0, 4)));
    assert_eq!(span_of(&events, Rule::Host), Some(Span::new(5, 15)));
    assert_eq!(span_of(&events, Rule::Port), Some(Span::new(21, 4)));
}

#[test]
fn test_absolute_uri_hierarchical() {
    let input = b"http://www.w3.org/pub/WWW/TheProject.html";
    let (ok, pos, events) = run(input, uri::absolute_uri);
    assert!(ok);
    assert_eq!(pos, input.len());

    assert_eq!(span_of(&events, Rule::Scheme), Some(Span::new(0, 4)));
    assert_eq!(span_of(&events, Rule::AbsPath), Some(Span::new(17, 24)));
}

#[test]
fn test_absolute_uri_opaque() {
    let input = b"mailto:someone@example.com";
    let (ok, pos, events) = run(input, uri::absolute_uri);
    assert!(ok);
    assert_eq!(pos, input.len());
    assert!(span_of(&events, Rule::OpaquePart).is_some());
}

#[test]
fn test_uri_reference_with_fragment() {
    let input = b"http://x.org/a#top";
    let (ok, pos, events) = run(input, uri::uri_reference);
    assert!(ok);
    assert_eq!(pos, input.len());
    assert_eq!(span_of(&events, Rule::Fragment), Some(Span::new(15, 3)));
}

#[test]
fn test_uri_reference_matches_empty_silently() {
    // Everything in URI-reference is optional; an empty match emits nothing.
    let (ok, pos, events) = run(b"", uri::uri_reference);
    assert!(ok);
    assert_eq!(pos, 0);
    assert!(events.is_empty());
}

#[test]
fn test_relative_uri_with_query() {
    let input = b"a/b?k=v";
    let (ok, pos, events) = run(input, uri::relative_uri);
    assert!(ok);
    assert_eq!(pos, input.len());
    assert!(span_of(&events, Rule::RelSegment).is_some());
    assert!(span_of(&events, Rule::Query).is_some());
}
