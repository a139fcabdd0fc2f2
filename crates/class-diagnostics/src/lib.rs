//! Framework class migration checks for class-check.
//!
//! This crate provides:
//! - Reference tables of Bootstrap 4 classes removed in Bootstrap 5, the
//!   Bootstrap 5 class set, and opt-in Font Awesome 5 to 6 renames
//! - A class verifier combining the tables with a per-run ignore set
//! - Markup checks producing one diagnostic per invalid or unknown class
//! - Class harvesting from local CSS and SCSS stylesheets
//!
//! # Example
//!
//! ```
//! use class_diagnostics::{check, ClassVerifier, IgnoreSet, ReferenceTables};
//! use markup_parser::parse;
//!
//! let tables = ReferenceTables::bootstrap5();
//! let ignore: IgnoreSet = ["custom-btn"].into_iter().collect();
//! let verifier = ClassVerifier::new(&tables, &ignore);
//!
//! let doc = parse(r#"<div class="row no-gutters custom-btn">"#).document;
//! let diagnostics = check(&doc, &verifier);
//!
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].message, "no-gutters -> use g-0");
//! ```

pub mod css;
mod diagnostic;
mod markup;
pub mod tables;
mod verifier;

pub use css::{extract_classes, selector_classes, HarvestError};
pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use markup::check;
pub use tables::ReferenceTables;
pub use verifier::{ClassVerifier, IgnoreSet, Verdict, ICON_FONT_PREFIX};
