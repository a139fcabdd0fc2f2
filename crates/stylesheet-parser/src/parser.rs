//! Top-level rule parser.

use crate::ast::*;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::ParseResult;
use smol_str::SmolStr;
use source_span::Span;
use text_size::TextSize;

/// At-rules whose block is mandatory.
const BLOCK_AT_RULES: &[&str] = &["media", "font-face", "supports", "keyframes", "page"];

/// How a rule prelude ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminator {
    /// `{`, not consumed.
    Block,
    /// `;`, consumed.
    Semicolon,
    /// A stray `}`, not consumed.
    StrayBrace,
    Eof,
}

/// The tokens between the start of a rule and its block or `;`.
struct Prelude {
    /// Index of the first prelude token.
    first: usize,
    /// Index one past the last prelude token.
    last: usize,
    terminator: Terminator,
}

/// The stylesheet parser.
pub struct Parser<'src> {
    /// The source being parsed.
    source: &'src str,
    /// The token stream.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
    /// Parse errors collected during parsing.
    errors: Vec<ParseError>,
    /// EOF token for when we're past the end
    eof_token: Token,
}

impl<'src> Parser<'src> {
    /// Creates a new parser.
    pub fn new(source: &'src str) -> Self {
        let tokens: Vec<Token> = Lexer::new(source).collect();
        let eof_token = Token {
            kind: TokenKind::Eof,
            span: Span::empty(TextSize::from(source.len() as u32)),
        };
        Self {
            source,
            tokens,
            pos: 0,
            errors: Vec::new(),
            eof_token,
        }
    }

    /// Parses the source into a stylesheet.
    pub fn parse(mut self) -> ParseResult {
        let stylesheet = self.parse_stylesheet();
        ParseResult {
            stylesheet,
            errors: self.errors,
        }
    }

    // === Token helpers ===

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof_token)
    }

    fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    fn token_text(&self, index: usize) -> &'src str {
        let span = self.tokens.get(index).unwrap_or(&self.eof_token).span;
        span.text(self.source)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn error(&mut self, kind: ParseErrorKind, span: Span) {
        self.errors.push(ParseError::new(kind, span));
    }

    fn skip_whitespace(&mut self) {
        while self.current_kind() == TokenKind::Whitespace {
            self.advance();
        }
    }

    /// End offset of the token before the current position.
    fn previous_end(&self) -> TextSize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.span.end)
            .unwrap_or_default()
    }

    // === Rules ===

    fn parse_stylesheet(&mut self) -> Stylesheet {
        let mut rules = Vec::new();

        loop {
            self.skip_whitespace();
            match self.current_kind() {
                TokenKind::Eof => break,
                TokenKind::Comment => {
                    let span = self.current().span;
                    rules.push(Rule::Comment(CommentRule { span }));
                    self.advance();
                }
                TokenKind::UnterminatedComment => {
                    let start = self.current().span.start;
                    self.error(
                        ParseErrorKind::UnterminatedComment,
                        Span::new(start, TextSize::from(self.source.len() as u32)),
                    );
                    break;
                }
                // Empty statements and unbalanced closers between rules.
                TokenKind::Semicolon | TokenKind::RBrace => self.advance(),
                TokenKind::AtKeyword => rules.extend(self.parse_at_rule()),
                _ => rules.extend(self.parse_qualified_rule()),
            }
        }

        Stylesheet { rules }
    }

    /// Parses `@name prelude;` or `@name prelude { ... }`.
    fn parse_at_rule(&mut self) -> Vec<Rule> {
        let start = self.current().span.start;
        let name = SmolStr::new(self.current().span.text(self.source)[1..].to_ascii_lowercase());
        self.advance();

        let prelude = self.parse_prelude();
        if prelude.terminator == Terminator::Block {
            self.parse_block(&format!("@{name}"));
        } else if prelude.terminator == Terminator::Eof
            && BLOCK_AT_RULES.contains(&name.as_str())
        {
            self.error(
                ParseErrorKind::UnexpectedEof {
                    expected: format!("'{{' after @{name}"),
                },
                Span::new(start, self.previous_end()),
            );
        }
        let span = Span::new(start, self.previous_end());

        match name.as_str() {
            "charset" => {
                let encoding = self
                    .find_token(&prelude, TokenKind::String)
                    .map(|i| SmolStr::new(unquote(self.token_text(i))))
                    .unwrap_or_default();
                vec![Rule::Charset(CharsetRule { encoding, span })]
            }
            "import" => self
                .import_targets(&prelude)
                .into_iter()
                .map(|(href, href_span)| {
                    Rule::Import(ImportRule {
                        href,
                        href_span,
                        span,
                    })
                })
                .collect(),
            "media" => vec![Rule::Media(MediaRule {
                query: self.prelude_text(&prelude),
                span,
            })],
            "font-face" => vec![Rule::FontFace(FontFaceRule { span })],
            _ => vec![Rule::Unknown(UnknownRule {
                name: Some(name),
                span,
            })],
        }
    }

    /// Parses `selector { ... }`. A prelude ended by anything other than a
    /// block is a statement such as `$var: 1;` and becomes an unknown rule.
    fn parse_qualified_rule(&mut self) -> Option<Rule> {
        let start = self.current().span.start;
        let prelude = self.parse_prelude();

        if prelude.terminator != Terminator::Block {
            if prelude.first == prelude.last {
                return None;
            }
            return Some(Rule::Unknown(UnknownRule {
                name: None,
                span: Span::new(start, self.previous_end()),
            }));
        }

        let selector = self.prelude_text(&prelude);
        self.parse_block(&selector);

        Some(Rule::Style(StyleRule {
            selector,
            span: Span::new(start, self.previous_end()),
        }))
    }

    /// Collects prelude tokens up to a `{` or `;` that is not inside
    /// parentheses or an SCSS interpolation.
    fn parse_prelude(&mut self) -> Prelude {
        let first = self.pos;
        let mut parens = 0usize;
        let mut interpolation = 0usize;
        let mut rest_is_comment = false;

        let terminator = loop {
            match self.current_kind() {
                TokenKind::Eof => break Terminator::Eof,
                TokenKind::UnterminatedComment => {
                    let start = self.current().span.start;
                    self.error(
                        ParseErrorKind::UnterminatedComment,
                        Span::new(start, TextSize::from(self.source.len() as u32)),
                    );
                    rest_is_comment = true;
                    break Terminator::Eof;
                }
                TokenKind::LParen => parens += 1,
                TokenKind::RParen => parens = parens.saturating_sub(1),
                TokenKind::InterpolationStart => interpolation += 1,
                TokenKind::RBrace if interpolation > 0 => interpolation -= 1,
                TokenKind::RBrace => break Terminator::StrayBrace,
                TokenKind::LBrace if parens == 0 => break Terminator::Block,
                TokenKind::Semicolon if parens == 0 => break Terminator::Semicolon,
                _ => {}
            }
            self.advance();
        };

        let last = self.pos;
        if terminator == Terminator::Semicolon {
            self.advance();
        } else if rest_is_comment {
            self.pos = self.tokens.len();
        }

        // Trailing whitespace and comments are not part of the prelude.
        let mut trimmed = last;
        while trimmed > first && self.tokens[trimmed - 1].kind.is_trivia() {
            trimmed -= 1;
        }

        Prelude {
            first,
            last: trimmed,
            terminator,
        }
    }

    /// Skips a `{ ... }` block, including any nested blocks.
    fn parse_block(&mut self, opened_by: &str) {
        let open = self.current().span;
        self.advance();
        let mut depth = 1usize;

        loop {
            match self.current_kind() {
                TokenKind::Eof => {
                    self.error(
                        ParseErrorKind::UnclosedBlock {
                            opened_by: opened_by.to_string(),
                        },
                        open,
                    );
                    return;
                }
                TokenKind::UnterminatedComment => {
                    let start = self.current().span.start;
                    self.error(
                        ParseErrorKind::UnterminatedComment,
                        Span::new(start, TextSize::from(self.source.len() as u32)),
                    );
                    self.pos = self.tokens.len();
                    return;
                }
                TokenKind::LBrace | TokenKind::InterpolationStart => depth += 1,
                TokenKind::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        self.advance();
                        return;
                    }
                }
                _ => {}
            }
            self.advance();
        }
    }

    // === Prelude helpers ===

    /// Returns the prelude text with comments replaced by a space and
    /// surrounding whitespace trimmed.
    fn prelude_text(&self, prelude: &Prelude) -> String {
        let mut text = String::new();
        for index in prelude.first..prelude.last {
            match self.tokens[index].kind {
                TokenKind::Comment => text.push(' '),
                _ => text.push_str(self.token_text(index)),
            }
        }
        text.trim().to_string()
    }

    fn find_token(&self, prelude: &Prelude, kind: TokenKind) -> Option<usize> {
        (prelude.first..prelude.last).find(|&i| self.tokens[i].kind == kind)
    }

    /// Extracts the targets of an `@import` prelude: a quoted string or a
    /// `url(...)` per comma-separated entry. Media queries after the target are ignored.
    fn import_targets(&self, prelude: &Prelude) -> Vec<(SmolStr, Span)> {
        let mut targets = Vec::new();
        let mut found_in_entry = false;
        let mut parens = 0usize;
        let mut index = prelude.first;

        while index < prelude.last {
            let token = &self.tokens[index];
            match token.kind {
                TokenKind::Comma if parens == 0 => found_in_entry = false,
                TokenKind::LParen => parens += 1,
                TokenKind::RParen => parens = parens.saturating_sub(1),
                TokenKind::String if !found_in_entry && parens == 0 => {
                    let inner = shrink(token.span, 1);
                    targets.push((SmolStr::new(inner.text(self.source)), inner));
                    found_in_entry = true;
                }
                TokenKind::Text
                    if !found_in_entry
                        && parens == 0
                        && self.token_text(index).eq_ignore_ascii_case("url")
                        && self.tokens.get(index + 1).map(|t| t.kind) == Some(TokenKind::LParen) =>
                {
                    if let Some((href, span, close)) = self.url_argument(index + 1, prelude.last) {
                        targets.push((href, span));
                        found_in_entry = true;
                        index = close;
                    }
                }
                _ => {}
            }
            index += 1;
        }

        targets
    }

    /// Reads the argument of `url(` starting at the `(` token. Returns the
    /// href, its span and the index of the closing `)`.
    fn url_argument(&self, open: usize, limit: usize) -> Option<(SmolStr, Span, usize)> {
        let close = (open + 1..limit).find(|&i| self.tokens[i].kind == TokenKind::RParen)?;
        let inner = Span::new(self.tokens[open].span.end, self.tokens[close].span.start);
        let raw = inner.text(self.source);
        let trimmed = raw.trim();
        let offset = raw.len() - raw.trim_start().len();
        let mut span = inner.slice(offset, offset + trimmed.len());

        let href = if is_quoted(trimmed) {
            span = shrink(span, 1);
            unquote(trimmed)
        } else {
            trimmed
        };

        Some((SmolStr::new(href), span, close))
    }
}

fn is_quoted(text: &str) -> bool {
    text.len() >= 2
        && ((text.starts_with('"') && text.ends_with('"'))
            || (text.starts_with('\'') && text.ends_with('\'')))
}

fn unquote(text: &str) -> &str {
    if is_quoted(text) {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

fn shrink(span: Span, by: u32) -> Span {
    Span::new(span.start + TextSize::from(by), span.end - TextSize::from(by))
}
