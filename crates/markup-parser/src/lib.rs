//! Markup scanner for class-check.
//!
//! Finds every element start tag in an HTML document together with its
//! attributes:
//! - Lexer (tokenizer) using `logos`
//! - A tolerant scanner: comments, declarations and raw-text element content
//!   are skipped, malformed tags are recorded as errors and scanning resumes
//! - Attribute values with character references decoded
//!
//! # Example
//!
//! ```
//! use markup_parser::parse;
//!
//! let result = parse(r#"<div class="row g-0"><span class="badge">new</span></div>"#);
//! assert!(result.errors.is_empty());
//!
//! let classes: Vec<_> = result
//!     .document
//!     .elements_with_class()
//!     .flat_map(|element| element.class_tokens())
//!     .map(|token| token.name)
//!     .collect();
//! assert_eq!(classes, ["row", "g-0", "badge"]);
//! ```

mod ast;
mod error;
mod lexer;
mod parser;

pub use ast::*;
pub use error::{ParseError, ParseErrorKind};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::decode_character_references;
pub use source_span::Span;

/// The result of scanning a markup document.
#[derive(Debug)]
pub struct ParseResult {
    /// The scanned elements.
    pub document: MarkupDocument,
    /// Any errors encountered while scanning.
    pub errors: Vec<ParseError>,
}

/// Scans HTML source for elements and their attributes.
///
/// Never fails: malformed markup yields errors next to whatever elements
/// could be recovered.
pub fn parse(source: &str) -> ParseResult {
    parser::Parser::new(source).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let result = parse("");
        assert!(result.errors.is_empty());
        assert!(result.document.elements.is_empty());
    }

    #[test]
    fn test_text_only() {
        let result = parse("just some text, no tags");
        assert!(result.errors.is_empty());
        assert!(result.document.elements.is_empty());
    }
}
