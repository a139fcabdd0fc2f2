//! Stylesheet lexer using logos.
//!
//! The lexer only distinguishes what the rule parser needs to find rule
//! boundaries: comments, strings, at-keywords, braces, parentheses and the
//! separators `;` and `,`. Everything else is [`TokenKind::Text`]; the parser
//! reads selector and prelude text straight from the source by span.

use logos::Logos;
use source_span::Span;
use text_size::TextSize;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The span of the token in the source.
    pub span: Span,
}

/// Token kinds for CSS and SCSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos, Default)]
pub enum TokenKind {
    /// Spaces, tabs, line breaks and the U+FEFF byte order mark.
    #[regex(r"[ \t\r\n\f\x{FEFF}]+")]
    Whitespace,

    /// `/* ... */`
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    Comment,

    /// `/*` with no closing `*/` before the end of input.
    #[token("/*")]
    UnterminatedComment,

    /// A quoted string, single or double.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    #[regex(r#"'([^'\\\n]|\\[^\n])*'"#)]
    String,

    /// A quote that is not closed on the same line.
    #[regex(r#""([^"\\\n]|\\[^\n])*"#)]
    #[regex(r#"'([^'\\\n]|\\[^\n])*"#)]
    UnterminatedString,

    /// `@media`, `@import`, `@font-face`, ...
    #[regex(r"@[a-zA-Z_-][a-zA-Z0-9_-]*", priority = 10)]
    AtKeyword,

    /// SCSS interpolation opener `#{`
    #[token("#{")]
    InterpolationStart,

    /// `{`
    #[token("{")]
    LBrace,

    /// `}`
    #[token("}")]
    RBrace,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `,`
    #[token(",")]
    Comma,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `/` outside a comment
    #[token("/")]
    Slash,

    /// `#` not followed by `{`
    #[token("#")]
    Hash,

    /// Any run of other characters (selectors, property names, values).
    #[regex(r#"[^ \t\r\n\f\x{FEFF}{}();,"'/#]+"#, priority = 1)]
    Text,

    /// End of file
    Eof,

    /// Invalid/unknown token
    #[default]
    Error,
}

impl TokenKind {
    /// Returns true for tokens that carry no structure.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Returns a human-readable name for this token kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::UnterminatedComment => "unterminated comment",
            TokenKind::String => "string",
            TokenKind::UnterminatedString => "unterminated string",
            TokenKind::AtKeyword => "at-keyword",
            TokenKind::InterpolationStart => "'#{'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Semicolon => "';'",
            TokenKind::Comma => "','",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Slash => "'/'",
            TokenKind::Hash => "'#'",
            TokenKind::Text => "text",
            TokenKind::Eof => "end of file",
            TokenKind::Error => "invalid token",
        }
    }
}

/// A lexer for stylesheet source code.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src str,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
            finished: false,
        }
    }

    /// Returns the source string being lexed.
    pub fn source(&self) -> &'src str {
        self.source
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let kind = match self.inner.next() {
            Some(Ok(kind)) => kind,
            Some(Err(())) => TokenKind::Error,
            None => {
                self.finished = true;
                let end = TextSize::from(self.source.len() as u32);
                return Some(Token {
                    kind: TokenKind::Eof,
                    span: Span::empty(end),
                });
            }
        };

        Some(Token {
            kind,
            span: Span::from(self.inner.span()),
        })
    }
}
