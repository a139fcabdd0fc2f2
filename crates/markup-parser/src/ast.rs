//! Element and attribute types.

use smol_str::SmolStr;
use source_span::Span;

/// A scanned HTML document: every start tag in document order.
///
/// The scanner does not build a tree. Nesting is irrelevant for class checks,
/// and a flat list tolerates arbitrarily broken markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupDocument {
    /// Elements in the order their start tags appear.
    pub elements: Vec<Element>,
}

impl MarkupDocument {
    /// Iterates over the elements that carry a `class` attribute.
    pub fn elements_with_class(&self) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(|element| element.attribute("class").is_some())
    }
}

/// An element start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// The tag name, lowercased.
    pub name: SmolStr,
    /// The attributes in source order, duplicates included.
    pub attributes: Vec<Attribute>,
    /// Whether the tag ended with `/>`.
    pub self_closing: bool,
    /// The span of the start tag.
    pub span: Span,
}

impl Element {
    /// Returns the first attribute with the given (lowercase) name.
    ///
    /// Later duplicates are ignored, as browsers do.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Returns the whitespace-separated tokens of the `class` attribute.
    pub fn class_tokens(&self) -> Vec<ClassToken> {
        let Some(value) = self.attribute("class").and_then(|attr| attr.value.as_ref()) else {
            return Vec::new();
        };

        let mut tokens = Vec::new();
        let mut start = None;
        let text = value.text.as_str();

        for (offset, byte) in text.bytes().enumerate().chain(std::iter::once((text.len(), b' '))) {
            match (byte.is_ascii_whitespace(), start) {
                (false, None) => start = Some(offset),
                (true, Some(begin)) => {
                    let span = if value.decoded {
                        value.span
                    } else {
                        value.span.slice(begin, offset)
                    };
                    tokens.push(ClassToken {
                        name: SmolStr::new(&text[begin..offset]),
                        span,
                    });
                    start = None;
                }
                _ => {}
            }
        }

        tokens
    }
}

/// An attribute on a start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name, lowercased.
    pub name: SmolStr,
    /// The value, if the attribute has `=`.
    pub value: Option<AttributeValue>,
}

/// An attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValue {
    /// The value with character references decoded.
    pub text: String,
    /// Whether decoding changed the text, in which case offsets inside
    /// `text` no longer line up with the source.
    pub decoded: bool,
    /// The span of the raw value, without quotes.
    pub span: Span,
}

/// One class name from a `class` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToken {
    /// The class name.
    pub name: SmolStr,
    /// Where the class name appears. Falls back to the whole attribute
    /// value when the value contained character references.
    pub span: Span,
}
