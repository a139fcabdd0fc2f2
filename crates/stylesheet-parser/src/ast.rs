//! Top-level rule types.

use smol_str::SmolStr;
use source_span::Span;

/// A parsed stylesheet: its top-level rules in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// The rules, in the order they appear.
    pub rules: Vec<Rule>,
}

/// A top-level rule.
///
/// Blocks are never descended into: nested rules (SCSS nesting, rules inside
/// `@media`) are part of their parent's span and are not listed separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// A `/* ... */` comment between rules.
    Comment(CommentRule),
    /// `@charset "...";`
    Charset(CharsetRule),
    /// `@font-face { ... }`
    FontFace(FontFaceRule),
    /// `@media ... { ... }`
    Media(MediaRule),
    /// One target of an `@import`. A comma-separated import produces one rule per target.
    Import(ImportRule),
    /// A qualified rule: `selector { declarations }`.
    Style(StyleRule),
    /// Any other at-rule, or a top-level statement that is not a rule
    /// (SCSS variable assignments, stray text).
    Unknown(UnknownRule),
}

impl Rule {
    /// Returns the span of the rule.
    pub fn span(&self) -> Span {
        match self {
            Rule::Comment(r) => r.span,
            Rule::Charset(r) => r.span,
            Rule::FontFace(r) => r.span,
            Rule::Media(r) => r.span,
            Rule::Import(r) => r.span,
            Rule::Style(r) => r.span,
            Rule::Unknown(r) => r.span,
        }
    }

    /// Returns a short name for the rule kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Rule::Comment(_) => "comment",
            Rule::Charset(_) => "charset",
            Rule::FontFace(_) => "font-face",
            Rule::Media(_) => "media",
            Rule::Import(_) => "import",
            Rule::Style(_) => "style",
            Rule::Unknown(_) => "unknown",
        }
    }
}

/// A comment rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRule {
    /// The span of the whole comment.
    pub span: Span,
}

/// A charset rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetRule {
    /// The declared encoding, unquoted.
    pub encoding: SmolStr,
    /// The span of the rule.
    pub span: Span,
}

/// A font-face rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFaceRule {
    /// The span of the rule.
    pub span: Span,
}

/// A media rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRule {
    /// The media query list.
    pub query: String,
    /// The span of the rule including its block.
    pub span: Span,
}

/// An import target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRule {
    /// The imported path or URL, unquoted.
    pub href: SmolStr,
    /// The span of the href in the source.
    pub href_span: Span,
    /// The span of the whole `@import` statement.
    pub span: Span,
}

/// A qualified (style) rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// The selector text with comments removed and surrounding whitespace trimmed.
    pub selector: String,
    /// The span of the rule including its block.
    pub span: Span,
}

/// An unrecognized at-rule or statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRule {
    /// The at-keyword without `@`, lowercased; `None` for plain statements.
    pub name: Option<SmolStr>,
    /// The span of the rule.
    pub span: Span,
}
