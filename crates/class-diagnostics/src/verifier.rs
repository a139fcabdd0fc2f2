//! Classifies a single class name.

use crate::tables::ReferenceTables;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

/// Prefix of Font Awesome utility and icon classes, always accepted.
pub const ICON_FONT_PREFIX: &str = "fa-";

/// The outcome of checking one class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Removed or renamed; `advice` may be empty.
    Invalid {
        /// Migration advice.
        advice: SmolStr,
    },
    /// A framework class that still exists.
    Valid,
    /// Supplied by the user or defined in a local stylesheet.
    Ignored,
    /// An icon-font class.
    IconFont,
    /// None of the above.
    Unknown,
}

impl Verdict {
    /// Returns false for classes that should be reported.
    pub fn is_acceptable(&self) -> bool {
        !matches!(self, Verdict::Invalid { .. } | Verdict::Unknown)
    }
}

/// Class names accepted for this run.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    classes: FxHashSet<SmolStr>,
}

impl IgnoreSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class name.
    pub fn insert(&mut self, class: impl Into<SmolStr>) {
        self.classes.insert(class.into());
    }

    /// Returns true if the class name is in the set.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Number of distinct class names.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl<S: Into<SmolStr>> Extend<S> for IgnoreSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.classes.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<SmolStr>> FromIterator<S> for IgnoreSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// Checks class names against the reference tables and the ignore set.
#[derive(Debug, Clone, Copy)]
pub struct ClassVerifier<'a> {
    tables: &'a ReferenceTables,
    ignore: &'a IgnoreSet,
}

impl<'a> ClassVerifier<'a> {
    /// Creates a verifier over shared, read-only tables.
    pub fn new(tables: &'a ReferenceTables, ignore: &'a IgnoreSet) -> Self {
        Self { tables, ignore }
    }

    /// Classifies a class name.
    ///
    /// The invalid table is consulted first, so a class is reported even
    /// when the project defines or ignores it.
    pub fn verify(&self, class: &str) -> Verdict {
        if let Some(advice) = self.tables.advice(class) {
            return Verdict::Invalid {
                advice: SmolStr::new(advice),
            };
        }
        if self.tables.is_valid(class) {
            return Verdict::Valid;
        }
        if self.ignore.contains(class) {
            return Verdict::Ignored;
        }
        if class.starts_with(ICON_FONT_PREFIX) {
            return Verdict::IconFont;
        }
        Verdict::Unknown
    }
}
