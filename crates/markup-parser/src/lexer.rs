//! HTML lexer using logos.
//!
//! Tokens cover tag syntax only. Text content, comment bodies and raw-text
//! element content are skipped by the parser reading the source directly.

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

/// Token kinds for HTML markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos, Default)]
pub enum TokenKind {
    /// `<!--`
    #[token("<!--", priority = 20)]
    CommentOpen,

    /// `<!` or `<?` (doctype, CDATA, processing instructions)
    #[regex(r"<[!?]", priority = 15)]
    DeclarationOpen,

    /// `</`
    #[token("</", priority = 10)]
    LAngleSlash,

    /// `<`
    #[token("<", priority = 10)]
    LAngle,

    /// `>`
    #[token(">", priority = 10)]
    RAngle,

    /// `/>`
    #[token("/>", priority = 10)]
    SlashRAngle,

    /// `/`
    #[token("/", priority = 10)]
    Slash,

    /// `=`
    #[token("=", priority = 10)]
    Eq,

    /// `"`
    #[token("\"", priority = 10)]
    DoubleQuote,

    /// `'`
    #[token("'", priority = 10)]
    SingleQuote,

    /// ASCII whitespace
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    /// A run of characters that can form a tag name, attribute name,
    /// unquoted value or a word of text.
    #[regex(r#"[^ \t\r\n\f<>/="']+"#, priority = 1)]
    Name,

    /// End of file
    Eof,

    /// Invalid/unknown token
    #[default]
    Error,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::CommentOpen => "'<!--'",
            TokenKind::DeclarationOpen => "'<!'",
            TokenKind::LAngleSlash => "'</'",
            TokenKind::LAngle => "'<'",
            TokenKind::RAngle => "'>'",
            TokenKind::SlashRAngle => "'/>'",
            TokenKind::Slash => "'/'",
            TokenKind::Eq => "'='",
            TokenKind::DoubleQuote => "'\"'",
            TokenKind::SingleQuote => "'''",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Name => "name",
            TokenKind::Eof => "end of file",
            TokenKind::Error => "invalid token",
        }
    }
}

/// A lexer for HTML source.
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
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(result) => Some(Token {
                kind: result.unwrap_or(TokenKind::Error),
                span: Span::from(self.inner.span()),
            }),
            None => {
                self.finished = true;
                Some(Token {
                    kind: TokenKind::Eof,
                    span: Span::empty(TextSize::from(self.source.len() as u32)),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokenize(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .map(|t| t.kind)
            .filter(|k| *k != TokenKind::Eof)
            .collect()
    }

    #[test]
    fn test_start_tag_with_class() {
        assert_eq!(
            tokenize(r#"<div class="row g-0">"#),
            vec![
                TokenKind::LAngle,
                TokenKind::Name,
                TokenKind::Whitespace,
                TokenKind::Name,
                TokenKind::Eq,
                TokenKind::DoubleQuote,
                TokenKind::Name,
                TokenKind::Whitespace,
                TokenKind::Name,
                TokenKind::DoubleQuote,
                TokenKind::RAngle
            ]
        );
    }

    #[test]
    fn test_self_closing_and_end_tags() {
        assert_eq!(
            tokenize("<br/></p>"),
            vec![
                TokenKind::LAngle,
                TokenKind::Name,
                TokenKind::SlashRAngle,
                TokenKind::LAngleSlash,
                TokenKind::Name,
                TokenKind::RAngle
            ]
        );
    }

    #[test]
    fn test_comment_and_doctype() {
        assert_eq!(
            tokenize("<!DOCTYPE html><!-- x -->"),
            vec![
                TokenKind::DeclarationOpen,
                TokenKind::Name,
                TokenKind::Whitespace,
                TokenKind::Name,
                TokenKind::RAngle,
                TokenKind::CommentOpen,
                TokenKind::Whitespace,
                TokenKind::Name,
                TokenKind::Whitespace,
                TokenKind::Name,
                TokenKind::RAngle
            ]
        );
    }

    #[test]
    fn test_single_quotes() {
        assert_eq!(
            tokenize("class='a'"),
            vec![
                TokenKind::Name,
                TokenKind::Eq,
                TokenKind::SingleQuote,
                TokenKind::Name,
                TokenKind::SingleQuote
            ]
        );
    }
}
