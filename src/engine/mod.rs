//! Generic backtracking parsing engine.
//!
//! The engine knows nothing about HTTP. It provides:
//!
//! - **`span`**: `(offset, len)` views into the input buffer
//! - **`parser`**: the cursor, the primitive matchers (literal, byte, range,
//!   set) and the rollback combinators (sequence, repetition, optional,
//!   ordered alternation, negative lookahead)
//! - **`sink`**: the event protocol through which named rules report the
//!   byte ranges they matched
//!
//! There is no parse tree. A rule that consumes at least one byte emits
//! exactly one event after all of its sub-rules have emitted theirs
//! (post-order), and a rule that consumes nothing is invisible. Consumers
//! reconstruct whatever structure they need from that flat stream.
//!
//! # Example
//!
//! ```
//! use graze::engine::parser::Parser;
//! use graze::engine::sink::EventSink;
//! use graze::engine::span::Span;
//!
//! struct Count(usize);
//!
//! impl EventSink<&'static str> for Count {
//!     fn on_match(&mut self, _rule: &'static str, _span: Span, _matched: &[u8]) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut p = Parser::new(b"aaab", Count(0));
//! let ok = p.rule("letters", |p| p.at_least_one(|p| p.byte(b'a')));
//! assert!(ok);
//! assert_eq!(p.pos(), 3);
//! assert_eq!(p.into_sink().0, 1);
//! ```

pub mod parser;
pub mod sink;
pub mod span;

pub use parser::Parser;
pub use sink::EventSink;
pub use span::Span;
