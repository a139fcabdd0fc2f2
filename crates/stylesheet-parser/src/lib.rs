//! Stylesheet parser for class-check.
//!
//! Splits CSS and SCSS source into its top-level rules:
//! - Lexer (tokenizer) using `logos`
//! - A rule parser that classifies each top-level rule and skips its block
//! - Error recovery: structural errors are collected, never panicked on
//!
//! Rule bodies are not parsed. The parser only needs to know where each rule
//! starts and ends, what kind of rule it is, and the selector or import target
//! it carries.
//!
//! # Example
//!
//! ```
//! use stylesheet_parser::{parse, Rule};
//!
//! let result = parse(".btn:hover { color: red; } @import \"./theme\";");
//! assert!(result.errors.is_empty());
//!
//! for rule in &result.stylesheet.rules {
//!     match rule {
//!         Rule::Style(style) => println!("selector: {}", style.selector),
//!         Rule::Import(import) => println!("import: {}", import.href),
//!         _ => {}
//!     }
//! }
//! ```

mod ast;
mod error;
mod lexer;
mod parser;

pub use ast::*;
pub use error::{ParseError, ParseErrorKind};
pub use lexer::{Lexer, Token, TokenKind};
pub use source_span::Span;

/// The result of parsing a stylesheet.
#[derive(Debug)]
pub struct ParseResult {
    /// The parsed rules.
    pub stylesheet: Stylesheet,
    /// Any errors encountered during parsing.
    pub errors: Vec<ParseError>,
}

/// Parses stylesheet source into its top-level rules.
///
/// Parsing always runs to the end of the input; rules before and after a
/// structural error are still returned alongside the error.
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
        assert!(result.stylesheet.rules.is_empty());
    }

    #[test]
    fn test_parse_single_rule() {
        let result = parse(".custom-btn { color: red; }");
        assert!(result.errors.is_empty());
        assert_eq!(result.stylesheet.rules.len(), 1);
    }
}
