use crate::engine::span::Span;

/// Receiver for span events emitted by named rules.
///
/// `R` is the rule identity type; any `Copy` value compared by value works.
/// Events arrive synchronously, depth-first and post-order: a rule's event
/// fires only after every sub-rule event inside it has fired, and only when
/// the rule consumed at least one byte.
///
/// Events are not retracted. If an enclosing rule fails *after* a sub-rule
/// already emitted, the sub-rule's event stands; consumers that care about
/// the overall outcome gate on the top-level rule's event.
pub trait EventSink<R> {
    /// Called once per non-empty rule match. `matched` is the slice of the
    /// input buffer identified by `span`.
    fn on_match(&mut self, rule: R, span: Span, matched: &[u8]);
}

/// Sink that drops every event. Useful when only the match/no-match outcome
/// and cursor position matter.
#[derive(Debug, Default)]
pub struct NullSink;

impl<R> EventSink<R> for NullSink {
    fn on_match(&mut self, _rule: R, _span: Span, _matched: &[u8]) {}
}
