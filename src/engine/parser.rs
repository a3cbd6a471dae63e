use crate::engine::sink::EventSink;
use crate::engine::span::Span;

/// Backtracking parser over one immutable byte buffer.
///
/// Holds the cursor, the furthest-failure record and the event sink, so a
/// parse is fully reentrant: no state survives outside this value, and two
/// threads can parse two buffers concurrently.
///
/// The primitive matchers advance the cursor on success and leave it
/// untouched on failure. The combinators add all-or-nothing rollback on top:
/// whenever a grouped body fails, the cursor is restored to where the group
/// started. Repetition is iterative, so recursion depth tracks grammar
/// nesting only, never input length.
pub struct Parser<'a, R, S> {
    input: &'a [u8],
    pos: usize,
    furthest: usize,
    furthest_rule: Option<R>,
    sink: S,
}

impl<'a, R, S> Parser<'a, R, S>
where
    R: Copy,
    S: EventSink<R>,
{
    pub fn new(input: &'a [u8], sink: S) -> Self {
        Self {
            input,
            pos: 0,
            furthest: 0,
            furthest_rule: None,
            sink,
        }
    }

    /// Current cursor position.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The buffer being parsed.
    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    /// Deepest offset at which a rule failed, and the first rule that failed
    /// there. Used to turn the engine's yes/no outcome into a diagnostic.
    pub fn furthest_failure(&self) -> (usize, Option<R>) {
        (self.furthest, self.furthest_rule)
    }

    /// Consumes the parser, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    // --- primitive matchers ---

    /// Matches `lit` byte-for-byte, case-sensitively.
    pub fn literal(&mut self, lit: &[u8]) -> bool {
        if self.input[self.pos..].starts_with(lit) {
            self.pos += lit.len();
            true
        } else {
            false
        }
    }

    /// Matches exactly the byte `want`.
    pub fn byte(&mut self, want: u8) -> bool {
        match self.input.get(self.pos) {
            Some(&b) if b == want => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Matches one byte in the inclusive range `lo..=hi`.
    pub fn range(&mut self, lo: u8, hi: u8) -> bool {
        match self.input.get(self.pos) {
            Some(&b) if b >= lo && b <= hi => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Matches one byte contained in `set`.
    pub fn one_of(&mut self, set: &[u8]) -> bool {
        match self.input.get(self.pos) {
            Some(b) if set.contains(b) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    // --- combinators ---

    /// Runs `body` as one group: if it fails, the cursor is restored to the
    /// position held before the first step ran.
    pub fn seq(&mut self, body: impl FnOnce(&mut Self) -> bool) -> bool {
        let mark = self.pos;
        if body(self) {
            true
        } else {
            self.pos = mark;
            false
        }
    }

    /// Runs `body` once; failure is absorbed into a zero-length success.
    pub fn optional(&mut self, body: impl FnOnce(&mut Self) -> bool) -> bool {
        let mark = self.pos;
        if !body(self) {
            self.pos = mark;
        }
        true
    }

    /// Applies `body` repeatedly until it fails. Each failed application is
    /// rolled back; `many` itself never fails. A successful application that
    /// consumed nothing also stops the loop, so a nullable body cannot spin
    /// forever.
    pub fn many(&mut self, mut body: impl FnMut(&mut Self) -> bool) -> bool {
        loop {
            let mark = self.pos;
            if !body(self) {
                self.pos = mark;
                return true;
            }
            if self.pos == mark {
                return true;
            }
        }
    }

    /// One mandatory application of `body`, then `many`.
    pub fn at_least_one(&mut self, mut body: impl FnMut(&mut Self) -> bool) -> bool {
        if !self.seq(&mut body) {
            return false;
        }
        self.many(body)
    }

    /// Negative lookahead: runs `body`, restores the cursor unconditionally,
    /// and succeeds iff `body` failed.
    pub fn not(&mut self, body: impl FnOnce(&mut Self) -> bool) -> bool {
        let mark = self.pos;
        let matched = body(self);
        self.pos = mark;
        !matched
    }

    /// Named production. On failure: cursor restored, furthest-failure record
    /// updated, `false` returned. On success with at least one byte consumed:
    /// one event emitted to the sink, after all sub-rule events (the body has
    /// already run). Zero-length success emits nothing.
    pub fn rule(&mut self, id: R, body: impl FnOnce(&mut Self) -> bool) -> bool {
        let mark = self.pos;
        if !body(self) {
            if self.pos > self.furthest || self.furthest_rule.is_none() {
                self.furthest = self.pos;
                self.furthest_rule = Some(id);
            }
            self.pos = mark;
            return false;
        }
        if self.pos > mark {
            let span = Span::new(mark, self.pos - mark);
            let matched = span.slice(self.input);
            self.sink.on_match(id, span, matched);
        }
        true
    }
}
