//! Parse error types.

use source_span::Span;
use thiserror::Error;

/// An error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The location in the source where the error occurred.
    pub span: Span,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A `/*` comment runs to the end of the file.
    #[error("unterminated comment")]
    UnterminatedComment,

    /// A `{` block is not closed before the end of the file.
    #[error("unclosed block: {{ opened by {opened_by}")]
    UnclosedBlock {
        /// What opened the block (a selector or an at-rule name).
        opened_by: String,
    },

    /// An at-rule was cut off by the end of the file.
    #[error("unexpected end of file: expected {expected}")]
    UnexpectedEof {
        /// What was expected.
        expected: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ParseError::new(
            ParseErrorKind::UnclosedBlock {
                opened_by: ".card".to_string(),
            },
            Span::from_offsets(0, 5),
        );
        assert_eq!(error.to_string(), "unclosed block: { opened by .card");
    }

    #[test]
    fn test_eof_display() {
        let error = ParseError::new(
            ParseErrorKind::UnexpectedEof {
                expected: "';' after @import".to_string(),
            },
            Span::from_offsets(0, 7),
        );
        assert_eq!(
            error.to_string(),
            "unexpected end of file: expected ';' after @import"
        );
    }
}
