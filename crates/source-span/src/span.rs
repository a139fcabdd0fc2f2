//! Byte spans.

use text_size::{TextRange, TextSize};

/// A byte offset into a source string.
pub type ByteOffset = TextSize;

/// A half-open byte range `[start, end)` in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// The start byte offset (inclusive).
    pub start: ByteOffset,
    /// The end byte offset (exclusive).
    pub end: ByteOffset,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    #[inline]
    pub fn new(start: impl Into<ByteOffset>, end: impl Into<ByteOffset>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Creates a span from `usize` offsets, as produced by `str` searches and
    /// `logos` token ranges.
    #[inline]
    pub fn from_offsets(start: usize, end: usize) -> Self {
        Self::new(TextSize::from(start as u32), TextSize::from(end as u32))
    }

    /// Creates an empty span at the given offset.
    #[inline]
    pub fn empty(offset: impl Into<ByteOffset>) -> Self {
        let offset = offset.into();
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns the length of this span in bytes.
    #[inline]
    pub fn len(&self) -> TextSize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the sub-span `[start, end)` relative to the start of this span.
    #[inline]
    pub fn slice(self, start: usize, end: usize) -> Span {
        let base = u32::from(self.start) as usize;
        Span::from_offsets(base + start, base + end)
    }

    /// Returns the span as a `usize` range for indexing into the source.
    #[inline]
    pub fn range(self) -> std::ops::Range<usize> {
        u32::from(self.start) as usize..u32::from(self.end) as usize
    }

    /// Returns the text covered by this span.
    #[inline]
    pub fn text(self, source: &str) -> &str {
        &source[self.range()]
    }
}

impl From<TextRange> for Span {
    fn from(range: TextRange) -> Self {
        Self {
            start: range.start(),
            end: range.end(),
        }
    }
}

impl From<Span> for TextRange {
    fn from(span: Span) -> Self {
        TextRange::new(span.start, span.end)
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::from_offsets(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_from_offsets() {
        let span = Span::from_offsets(3, 9);
        assert_eq!(span.start, TextSize::from(3));
        assert_eq!(span.end, TextSize::from(9));
        assert_eq!(span.len(), TextSize::from(6));
    }

    #[test]
    fn test_span_empty() {
        let span = Span::empty(5u32);
        assert!(span.is_empty());
        assert_eq!(span.len(), TextSize::from(0));
    }

    #[test]
    fn test_span_slice_is_relative() {
        let value = Span::from_offsets(12, 30);
        assert_eq!(value.slice(4, 9), Span::from_offsets(16, 21));
    }

    #[test]
    fn test_span_text() {
        let source = r#"<div class="row">"#;
        let span = Span::from_offsets(12, 15);
        assert_eq!(span.text(source), "row");
        assert_eq!(span.range(), 12..15);
    }
}
