//! Reference tables: classes removed from and classes present in the
//! target framework version.
//!
//! The tables are assembled once from an immutable base plus explicit
//! overlays, then shared read-only by every check.

pub mod bootstrap;
pub mod fontawesome;
pub mod valid;

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

/// Theme color names used by color-variant classes.
pub(crate) const THEME_COLORS: &[&str] = &[
    "primary",
    "secondary",
    "success",
    "danger",
    "warning",
    "info",
    "light",
    "dark",
];

/// Breakpoint infixes in Bootstrap 4; the empty infix is the unprefixed class.
pub(crate) const BOOTSTRAP4_BREAKPOINTS: &[&str] = &["", "sm", "md", "lg", "xl"];

/// Breakpoint infixes in Bootstrap 5.
pub(crate) const BOOTSTRAP5_BREAKPOINTS: &[&str] = &["", "sm", "md", "lg", "xl", "xxl"];

/// Joins the non-empty parts of a class name with `-`.
pub(crate) fn class_name(parts: &[&str]) -> String {
    let mut name = String::new();
    for part in parts.iter().filter(|part| !part.is_empty()) {
        if !name.is_empty() {
            name.push('-');
        }
        name.push_str(part);
    }
    name
}

/// Lookup tables for the class verifier.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    /// Class name to migration advice (possibly empty).
    invalid: FxHashMap<SmolStr, SmolStr>,
    /// Classes known to exist unchanged.
    valid: FxHashSet<SmolStr>,
}

impl ReferenceTables {
    /// Creates empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// The Bootstrap 4 to 5 migration tables.
    pub fn bootstrap5() -> Self {
        let invalid = bootstrap::invalid_classes()
            .map(|(class, advice)| (SmolStr::from(class), SmolStr::from(advice)))
            .collect();
        let valid = valid::valid_classes().map(SmolStr::from).collect();
        Self { invalid, valid }
    }

    /// Adds the Font Awesome 5 to 6 renames to the invalid table.
    pub fn with_fontawesome(self) -> Self {
        self.with_overlay(fontawesome::invalid_classes())
    }

    /// Adds invalid classes with their advice. Later entries replace
    /// earlier advice for the same class.
    pub fn with_overlay<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<SmolStr>,
        V: Into<SmolStr>,
    {
        self.invalid.extend(
            entries
                .into_iter()
                .map(|(class, advice)| (class.into(), advice.into())),
        );
        self
    }

    /// Adds classes to the valid set.
    pub fn with_valid<I, K>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<SmolStr>,
    {
        self.valid.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Returns the advice for an invalid class, or `None` if the class is
    /// not in the invalid table.
    pub fn advice(&self, class: &str) -> Option<&str> {
        self.invalid.get(class).map(SmolStr::as_str)
    }

    /// Returns true if the class is known to exist.
    pub fn is_valid(&self, class: &str) -> bool {
        self.valid.contains(class)
    }

    /// Iterates over the invalid class names.
    pub fn invalid_classes(&self) -> impl Iterator<Item = &str> {
        self.invalid.keys().map(SmolStr::as_str)
    }

    /// Number of entries in the invalid table.
    pub fn invalid_len(&self) -> usize {
        self.invalid.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_class_name() {
        assert_eq!(class_name(&["ml", "", "3"]), "ml-3");
        assert_eq!(class_name(&["col", "md", ""]), "col-md");
        assert_eq!(class_name(&["", "x"]), "x");
    }

    #[test]
    fn test_bootstrap5_tables() {
        let tables = ReferenceTables::bootstrap5();
        assert_eq!(tables.advice("no-gutters"), Some("use g-0"));
        assert_eq!(tables.advice("text-hide"), Some(""));
        assert_eq!(tables.advice("row"), None);
        assert!(tables.is_valid("row"));
        assert!(!tables.is_valid("no-gutters"));
    }

    #[test]
    fn test_invalid_and_valid_are_disjoint() {
        let tables = ReferenceTables::bootstrap5().with_fontawesome();
        for class in tables.invalid_classes() {
            assert!(!tables.is_valid(class), "{class} is in both tables");
        }
    }

    #[test]
    fn test_fontawesome_is_opt_in() {
        let base = ReferenceTables::bootstrap5();
        assert_eq!(base.advice("fa-times"), None);
        let merged = base.clone().with_fontawesome();
        assert_eq!(merged.advice("fa-times"), Some("use fa-xmark"));
        assert_eq!(merged.advice("fas"), Some("use fa-solid"));
        assert!(merged.invalid_len() > base.invalid_len());
    }

    #[test]
    fn test_overlay_replaces_advice() {
        let tables = ReferenceTables::bootstrap5()
            .with_overlay([("old-removed-class", "use new-class"), ("no-gutters", "use gx-0")]);
        assert_eq!(tables.advice("old-removed-class"), Some("use new-class"));
        assert_eq!(tables.advice("no-gutters"), Some("use gx-0"));
    }
}
