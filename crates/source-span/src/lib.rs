//! Source positions for class-check.
//!
//! Both parsers record where every rule, element and attribute value starts and
//! ends as a [`Span`]. The output layer turns those byte offsets back into
//! 1-based line/column pairs through a [`LineIndex`].

mod line_index;
mod span;

pub use line_index::{LineCol, LineIndex};
pub use span::{ByteOffset, Span};
