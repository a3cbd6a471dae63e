//! HTTP request record and assembly.
//!
//! This layer sits on top of the grammar and turns the flat span-event
//! stream into a structured record:
//!
//! - **`parser`**: the public entry point [`parser::parse_request`], the
//!   typed [`parser::ParseError`], and the event sink that assembles the
//!   record
//! - **`request`**: the [`request::HttpRequest`] record borrowed from the
//!   input buffer, plus the known-method layer
//!
//! A parse either matches the whole `Request` production from the first byte
//! through the terminating blank line, or it yields an error and nothing
//! else; no half-filled record ever escapes.
//!
//! # Example
//!
//! ```
//! use graze::http::parser::parse_request;
//!
//! let buf = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
//! let (req, consumed) = parse_request(buf).unwrap();
//! assert_eq!(req.method, "GET");
//! assert_eq!(req.host, Some("example.com"));
//! assert_eq!(consumed, buf.len());
//! ```

pub mod parser;
pub mod request;
