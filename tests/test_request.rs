use std::collections::HashMap;

use graze::http::request::{HttpRequest, Method};

fn request_with_headers(headers: HashMap<&'static str, &'static str>) -> HttpRequest<'static> {
    HttpRequest {
        method: "GET",
        target: "/",
        version: "HTTP/1.1",
        host: None,
        headers,
    }
}

#[test]
fn test_request_header_retrieval() {
    let mut headers = HashMap::new();
    headers.insert("Host", "example.com");
    headers.insert("Content-Type", "application/json");
    let req = request_with_headers(headers);

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_header_lookup_is_byte_exact() {
    let mut headers = HashMap::new();
    headers.insert("Host", "example.com");
    let req = request_with_headers(headers);

    assert_eq!(req.header("host"), None);
    assert_eq!(req.header("HOST"), None);
}

#[test]
fn test_known_method_mapping() {
    let req = request_with_headers(HashMap::new());
    assert_eq!(req.known_method(), Some(Method::GET));

    let brew = HttpRequest {
        method: "BREW",
        ..request_with_headers(HashMap::new())
    };
    assert_eq!(brew.known_method(), None);
}

#[test]
fn test_method_from_token() {
    assert_eq!(Method::from_token("GET"), Some(Method::GET));
    assert_eq!(Method::from_token("CONNECT"), Some(Method::CONNECT));
    assert_eq!(Method::from_token("TRACE"), Some(Method::TRACE));
    assert_eq!(Method::from_token("get"), None); // Case-sensitive
    assert_eq!(Method::from_token("INVALID"), None);
}

#[test]
fn test_keep_alive_default() {
    let req = request_with_headers(HashMap::new());
    assert!(req.keep_alive());
}

#[test]
fn test_keep_alive_close() {
    let mut headers = HashMap::new();
    headers.insert("Connection", "close");
    let req = request_with_headers(headers);

    assert!(!req.keep_alive());
}

#[test]
fn test_keep_alive_value_case_insensitive() {
    let mut headers = HashMap::new();
    headers.insert("Connection", "Keep-Alive");
    let req = request_with_headers(headers);

    assert!(req.keep_alive());
}
