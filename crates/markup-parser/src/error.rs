//! Parse error types.

use source_span::Span;
use thiserror::Error;

/// A problem found while scanning markup. Scanning continues after every error.
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
    /// A `<!--` comment is never closed.
    #[error("unclosed comment")]
    UnclosedComment,

    /// A start tag is cut off before its `>`.
    #[error("unclosed tag: <{tag_name}>")]
    UnclosedTag {
        /// The name of the unclosed tag.
        tag_name: String,
    },

    /// A quoted attribute value has no closing quote.
    #[error("unterminated value for attribute `{name}`")]
    UnterminatedAttributeValue {
        /// The attribute name.
        name: String,
    },

    /// A raw-text element such as `<script>` has no end tag.
    #[error("missing end tag: </{tag_name}>")]
    MissingEndTag {
        /// The name of the element.
        tag_name: String,
    },
}
