//! Diagnostic types.

use smol_str::SmolStr;
use source_span::Span;

/// A finding about one class token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The diagnostic code.
    pub code: DiagnosticCode,
    /// The severity level.
    pub severity: Severity,
    /// The diagnostic message.
    pub message: String,
    /// The class name the finding is about.
    pub class_name: SmolStr,
    /// The source location of the class token.
    pub span: Span,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(
        code: DiagnosticCode,
        class_name: impl Into<SmolStr>,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            severity: code.default_severity(),
            code,
            message: message.into(),
            class_name: class_name.into(),
            span,
        }
    }

    /// A class that was removed or renamed. `advice` may be empty.
    pub fn invalid_class(class_name: &str, advice: &str, span: Span) -> Self {
        let message = if advice.is_empty() {
            format!("{class_name} ->")
        } else {
            format!("{class_name} -> {advice}")
        };
        Self::new(DiagnosticCode::InvalidClass, class_name, message, span)
    }

    /// A class that is neither a framework class nor defined locally.
    pub fn unknown_class(class_name: &str, span: Span) -> Self {
        Self::new(
            DiagnosticCode::UnknownClass,
            class_name,
            format!("Unknown class: {class_name}"),
            span,
        )
    }
}

/// The severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational, for classes the tool cannot place.
    Info,
    /// A class that needs to change.
    Warning,
}

impl Severity {
    /// Returns the severity as an upper-case label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Diagnostic codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// `invalid-class`: removed or renamed in the target framework version
    InvalidClass,
    /// `unknown-class`: not a framework class and not defined locally
    UnknownClass,
}

impl DiagnosticCode {
    /// Returns the default severity for this diagnostic code.
    pub fn default_severity(&self) -> Severity {
        match self {
            DiagnosticCode::InvalidClass => Severity::Warning,
            DiagnosticCode::UnknownClass => Severity::Info,
        }
    }

    /// Returns the diagnostic code as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::InvalidClass => "invalid-class",
            DiagnosticCode::UnknownClass => "unknown-class",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
