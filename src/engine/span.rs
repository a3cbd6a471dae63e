/// A matched region of the input buffer.
///
/// Spans are plain `(offset, len)` values; they never own bytes and are only
/// meaningful against the buffer they were produced from. The rule mechanism
/// never emits a zero-length span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first matched byte
    pub offset: usize,
    /// Number of bytes matched
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Offset one past the last matched byte.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Projects the span onto its input buffer.
    ///
    /// # Panics
    ///
    /// Panics if the span does not lie within `input`. Spans produced by the
    /// engine always do.
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.offset..self.end()]
    }
}
