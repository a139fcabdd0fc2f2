//! Start-tag scanner for HTML.

use crate::ast::*;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::ParseResult;
use smol_str::SmolStr;
use source_span::Span;
use std::borrow::Cow;
use text_size::TextSize;

/// Elements whose content is text, never markup.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "textarea", "title", "xmp", "iframe", "noembed", "noframes",
];

/// The markup parser.
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

    /// Scans the source for elements.
    pub fn parse(mut self) -> ParseResult {
        let document = self.parse_document();
        ParseResult {
            document,
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

    fn current_text(&self) -> &'src str {
        self.current().span.text(self.source)
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos + 1).unwrap_or(&self.eof_token)
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

    fn end_of_source(&self) -> usize {
        self.source.len()
    }

    /// Moves past every token that starts before `offset`.
    fn skip_to_offset(&mut self, offset: usize) {
        let offset = TextSize::from(offset as u32);
        while self.current_kind() != TokenKind::Eof && self.current().span.start < offset {
            self.advance();
        }
    }

    /// Skips past the next occurrence of `delimiter` at or after `from`.
    /// Returns false when the delimiter does not occur.
    fn skip_past(&mut self, from: usize, delimiter: &str) -> bool {
        match self.source[from..].find(delimiter) {
            Some(found) => {
                self.skip_to_offset(from + found + delimiter.len());
                true
            }
            None => {
                self.skip_to_offset(self.end_of_source());
                false
            }
        }
    }

    // === Document ===

    fn parse_document(&mut self) -> MarkupDocument {
        let mut elements = Vec::new();

        loop {
            match self.current_kind() {
                TokenKind::Eof => break,
                TokenKind::CommentOpen => {
                    let open = self.current().span;
                    if !self.skip_past(u32::from(open.end) as usize, "-->") {
                        self.error(
                            ParseErrorKind::UnclosedComment,
                            Span::new(open.start, TextSize::from(self.end_of_source() as u32)),
                        );
                    }
                }
                TokenKind::DeclarationOpen | TokenKind::LAngleSlash => {
                    let open = self.current().span;
                    self.skip_past(u32::from(open.end) as usize, ">");
                }
                TokenKind::LAngle if self.at_tag_name() => {
                    let element = self.parse_element();
                    let raw_text = !element.self_closing
                        && RAW_TEXT_ELEMENTS.contains(&element.name.as_str());
                    if raw_text {
                        self.skip_raw_text(&element);
                    }
                    elements.push(element);
                }
                _ => self.advance(),
            }
        }

        MarkupDocument { elements }
    }

    /// True when the current `<` is immediately followed by a tag name.
    fn at_tag_name(&self) -> bool {
        let next = self.peek();
        next.kind == TokenKind::Name
            && next.span.start == self.current().span.end
            && next
                .span
                .text(self.source)
                .starts_with(|c: char| c.is_ascii_alphabetic())
    }

    fn parse_element(&mut self) -> Element {
        let start = self.current().span.start;
        self.advance();
        let name = SmolStr::new(self.current_text().to_ascii_lowercase());
        self.advance();

        let mut attributes = Vec::new();
        let mut self_closing = false;

        loop {
            match self.current_kind() {
                TokenKind::RAngle => {
                    self.advance();
                    break;
                }
                TokenKind::SlashRAngle => {
                    self_closing = true;
                    self.advance();
                    break;
                }
                TokenKind::Name => attributes.push(self.parse_attribute()),
                TokenKind::Eof
                | TokenKind::LAngle
                | TokenKind::LAngleSlash
                | TokenKind::CommentOpen
                | TokenKind::DeclarationOpen => {
                    let end = self.current().span.start;
                    self.error(
                        ParseErrorKind::UnclosedTag {
                            tag_name: name.to_string(),
                        },
                        Span::new(start, end),
                    );
                    break;
                }
                // Stray `/`, `=` or quotes between attributes.
                _ => self.advance(),
            }
        }

        let end = self
            .pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.span.end)
            .unwrap_or(start);

        Element {
            name,
            attributes,
            self_closing,
            span: Span::new(start, end.max(start)),
        }
    }

    fn parse_attribute(&mut self) -> Attribute {
        let name = SmolStr::new(self.current_text().to_ascii_lowercase());
        self.advance();

        let after_name = self.pos;
        self.skip_whitespace();
        if self.current_kind() != TokenKind::Eq {
            self.pos = after_name;
            return Attribute { name, value: None };
        }
        self.advance();
        self.skip_whitespace();

        let value = self.parse_attribute_value(&name);
        Attribute {
            name,
            value: Some(value),
        }
    }

    fn parse_attribute_value(&mut self, name: &str) -> AttributeValue {
        match self.current_kind() {
            TokenKind::DoubleQuote | TokenKind::SingleQuote => {
                let quote = if self.current_kind() == TokenKind::DoubleQuote {
                    '"'
                } else {
                    '\''
                };
                let open = self.current().span;
                let content_start = u32::from(open.end) as usize;
                let content_end = match self.source[content_start..].find(quote) {
                    Some(found) => {
                        let end = content_start + found;
                        self.skip_to_offset(end + 1);
                        end
                    }
                    None => {
                        self.error(
                            ParseErrorKind::UnterminatedAttributeValue {
                                name: name.to_string(),
                            },
                            Span::new(open.start, TextSize::from(self.end_of_source() as u32)),
                        );
                        self.skip_to_offset(self.end_of_source());
                        self.end_of_source()
                    }
                };
                self.make_value(content_start, content_end)
            }
            TokenKind::RAngle | TokenKind::SlashRAngle | TokenKind::Eof => {
                let at = u32::from(self.current().span.start) as usize;
                self.make_value(at, at)
            }
            _ => {
                let start = u32::from(self.current().span.start) as usize;
                let mut end = self.source[start..]
                    .find(|c: char| c.is_ascii_whitespace() || c == '>')
                    .map(|found| start + found)
                    .unwrap_or(self.end_of_source());
                // Leave a trailing `/>` to close the tag.
                if end > start
                    && self.source[..end].ends_with('/')
                    && self.source[end..].starts_with('>')
                {
                    end -= 1;
                }
                self.skip_to_offset(end);
                self.make_value(start, end)
            }
        }
    }

    fn make_value(&self, start: usize, end: usize) -> AttributeValue {
        let raw = &self.source[start..end];
        let text = decode_character_references(raw);
        AttributeValue {
            decoded: matches!(text, Cow::Owned(_)),
            text: text.into_owned(),
            span: Span::from_offsets(start, end),
        }
    }

    /// Skips the content of a raw-text element up to, not including, its end tag.
    fn skip_raw_text(&mut self, element: &Element) {
        let from = u32::from(element.span.end) as usize;
        match find_end_tag(&self.source[from..], &element.name) {
            Some(found) => self.skip_to_offset(from + found),
            None => {
                self.error(
                    ParseErrorKind::MissingEndTag {
                        tag_name: element.name.to_string(),
                    },
                    element.span,
                );
                self.skip_to_offset(self.end_of_source());
            }
        }
    }
}

/// Finds `</name` followed by whitespace, `/` or `>`, ignoring ASCII case.
fn find_end_tag(haystack: &str, name: &str) -> Option<usize> {
    let bytes = haystack.as_bytes();
    let needle_len = name.len() + 2;
    let mut offset = 0;

    while let Some(found) = haystack[offset..].find("</") {
        let at = offset + found;
        let candidate = bytes.get(at + 2..at + needle_len)?;
        let boundary = bytes
            .get(at + needle_len)
            .map_or(true, |b| b.is_ascii_whitespace() || *b == b'/' || *b == b'>');
        if candidate.eq_ignore_ascii_case(name.as_bytes()) && boundary {
            return Some(at);
        }
        offset = at + 2;
    }

    None
}

/// Decodes the character references that appear in practice in attribute
/// values. Unknown named references are left untouched.
pub fn decode_character_references(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    let mut changed = false;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match decode_reference(tail) {
            Some((decoded, consumed)) => {
                out.push(decoded);
                rest = &tail[consumed..];
                changed = true;
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(raw)
    }
}

/// Decodes one reference at the start of `text` (which begins with `&`).
/// Returns the character and the number of bytes consumed.
fn decode_reference(text: &str) -> Option<(char, usize)> {
    let semi = text.find(';')?;
    let body = &text[1..semi];

    let decoded = if let Some(number) = body.strip_prefix('#') {
        let hex = number
            .strip_prefix('x')
            .or_else(|| number.strip_prefix('X'));
        let code = match hex {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        char::from_u32(code)?
    } else {
        match body {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            "nbsp" => '\u{a0}',
            _ => return None,
        }
    };

    Some((decoded, semi + 1))
}
