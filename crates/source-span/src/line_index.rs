//! Line index for offset → line/column conversion.

use crate::ByteOffset;
use text_size::TextSize;

/// A line and column position (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineCol {
    /// 0-indexed line number.
    pub line: u32,
    /// 0-indexed column (byte offset within the line).
    pub col: u32,
}

impl LineCol {
    /// Creates a new line/column position.
    #[inline]
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// Byte offsets of line starts, for O(log n) offset lookups.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// `line_starts[i]` is the offset where line `i` begins.
    line_starts: Vec<ByteOffset>,
    len: ByteOffset,
}

impl LineIndex {
    /// Creates a new line index from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];

        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::from((offset + 1) as u32));
            }
        }

        Self {
            line_starts,
            len: TextSize::from(text.len() as u32),
        }
    }

    /// Returns the number of lines in the source.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts a byte offset to a line/column position.
    ///
    /// Returns `None` if the offset lies past the end of the text.
    pub fn line_col(&self, offset: ByteOffset) -> Option<LineCol> {
        if offset > self.len {
            return None;
        }

        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };

        let col = u32::from(offset) - u32::from(self.line_starts[line]);
        Some(LineCol::new(line as u32, col))
    }

    /// Returns the text of a line without its trailing newline.
    pub fn line_text<'a>(&self, line: u32, text: &'a str) -> Option<&'a str> {
        let line = line as usize;
        let start = u32::from(*self.line_starts.get(line)?) as usize;
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| u32::from(*next) as usize - 1)
            .unwrap_or(text.len());

        text.get(start..end).map(|l| l.trim_end_matches('\r'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_line() {
        let index = LineIndex::new("hello world");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(TextSize::from(0)), Some(LineCol::new(0, 0)));
        assert_eq!(index.line_col(TextSize::from(5)), Some(LineCol::new(0, 5)));
    }

    #[test]
    fn test_multiple_lines() {
        let index = LineIndex::new("<html>\n<div class=\"a\">\n</html>");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_col(TextSize::from(7)), Some(LineCol::new(1, 0)));
        assert_eq!(index.line_col(TextSize::from(19)), Some(LineCol::new(1, 12)));
        assert_eq!(index.line_col(TextSize::from(23)), Some(LineCol::new(2, 0)));
    }

    #[test]
    fn test_end_of_text_is_addressable() {
        let index = LineIndex::new("ab\n");
        assert_eq!(index.line_col(TextSize::from(3)), Some(LineCol::new(1, 0)));
        assert_eq!(index.line_col(TextSize::from(4)), None);
    }

    #[test]
    fn test_line_text() {
        let text = "first\r\nsecond\nthird";
        let index = LineIndex::new(text);
        assert_eq!(index.line_text(0, text), Some("first"));
        assert_eq!(index.line_text(1, text), Some("second"));
        assert_eq!(index.line_text(2, text), Some("third"));
        assert_eq!(index.line_text(3, text), None);
    }
}
