//! Output formatting.

use crate::cli::OutputFormat;
use camino::Utf8Path;
use class_diagnostics::{Diagnostic, Severity};
use serde::Serialize;
use source_span::{LineCol, LineIndex};

/// A formatted diagnostic for output.
#[derive(Debug, Serialize)]
pub struct FormattedDiagnostic {
    /// The severity (`WARNING` or `INFO`).
    #[serde(rename = "type")]
    pub diagnostic_type: String,
    /// The file path, relative to the scanned folder.
    pub filename: String,
    /// The start position.
    pub start: Position,
    /// The end position.
    pub end: Position,
    /// The message.
    pub message: String,
    /// The diagnostic code.
    pub code: String,
    /// The class name.
    #[serde(rename = "className")]
    pub class_name: String,
}

/// A position in the source.
#[derive(Debug, Serialize)]
pub struct Position {
    /// 1-indexed line number.
    pub line: u32,
    /// 1-indexed column number.
    pub column: u32,
    /// Byte offset.
    pub offset: u32,
}

/// Formats diagnostics for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats the diagnostics of one file as text. JSON output is
    /// collected with [`Formatter::format_json_diagnostics`] instead.
    pub fn format(&self, diagnostics: &[Diagnostic], file_path: &Utf8Path, source: &str) -> String {
        match self.format {
            OutputFormat::Human => Self::format_human(diagnostics, file_path),
            OutputFormat::HumanVerbose => Self::format_human_verbose(diagnostics, file_path, source),
            OutputFormat::Machine => Self::format_machine(diagnostics, file_path, source),
            OutputFormat::Json => serde_json::to_string_pretty(&Self::format_json_diagnostics(
                diagnostics,
                file_path,
                source,
            ))
            .unwrap_or_default(),
        }
    }

    /// One line per diagnostic, tagged with the file name.
    fn format_human(diagnostics: &[Diagnostic], file_path: &Utf8Path) -> String {
        let file_name = file_path.file_name().unwrap_or(file_path.as_str());
        let mut output = String::new();

        for diag in diagnostics {
            output.push_str(&format!(
                "{} [{}] {}\n",
                diag.severity, file_name, diag.message
            ));
        }

        output
    }

    /// Location, message and the offending source line.
    fn format_human_verbose(
        diagnostics: &[Diagnostic],
        file_path: &Utf8Path,
        source: &str,
    ) -> String {
        let line_index = LineIndex::new(source);
        let mut output = String::new();

        for diag in diagnostics {
            let start = line_index
                .line_col(diag.span.start)
                .unwrap_or(LineCol::new(0, 0));

            output.push_str(&format!(
                "{}:{}:{}\n{}: {} ({})\n",
                file_path,
                start.line + 1,
                start.col + 1,
                diag.severity,
                diag.message,
                diag.code
            ));

            if let Some(line) = line_index.line_text(start.line, source) {
                let gutter = (start.line + 1).to_string();
                let line_len = line.len() as u32;
                let width = u32::from(diag.span.len())
                    .min(line_len.saturating_sub(start.col))
                    .max(1);
                output.push_str(&format!("  {} | {}\n", gutter, line));
                output.push_str(&format!(
                    "  {} | {}{}\n",
                    " ".repeat(gutter.len()),
                    " ".repeat(start.col as usize),
                    "^".repeat(width as usize)
                ));
            }

            output.push('\n');
        }

        output
    }

    /// Formats diagnostics into JSON-ready structs.
    pub fn format_json_diagnostics(
        diagnostics: &[Diagnostic],
        file_path: &Utf8Path,
        source: &str,
    ) -> Vec<FormattedDiagnostic> {
        let line_index = LineIndex::new(source);
        diagnostics
            .iter()
            .map(|diag| {
                let start = line_index
                    .line_col(diag.span.start)
                    .unwrap_or(LineCol::new(0, 0));
                let end = line_index
                    .line_col(diag.span.end)
                    .unwrap_or(LineCol::new(0, 0));

                FormattedDiagnostic {
                    diagnostic_type: diag.severity.to_string(),
                    filename: file_path.to_string(),
                    start: Position {
                        line: start.line + 1,
                        column: start.col + 1,
                        offset: u32::from(diag.span.start),
                    },
                    end: Position {
                        line: end.line + 1,
                        column: end.col + 1,
                        offset: u32::from(diag.span.end),
                    },
                    message: diag.message.clone(),
                    code: diag.code.to_string(),
                    class_name: diag.class_name.to_string(),
                }
            })
            .collect()
    }

    /// Formats as machine-readable output.
    fn format_machine(diagnostics: &[Diagnostic], file_path: &Utf8Path, source: &str) -> String {
        let line_index = LineIndex::new(source);
        let mut output = String::new();

        for diag in diagnostics {
            let start = line_index
                .line_col(diag.span.start)
                .unwrap_or(LineCol::new(0, 0));
            let end = line_index
                .line_col(diag.span.end)
                .unwrap_or(LineCol::new(0, 0));

            output.push_str(&format!(
                "{} {}:{}:{}:{}:{} {} ({})\n",
                diag.severity,
                file_path,
                start.line + 1,
                start.col + 1,
                end.line + 1,
                end.col + 1,
                diag.message,
                diag.code
            ));
        }

        output
    }
}

/// Summary of a check run.
#[derive(Debug, Default)]
pub struct CheckSummary {
    /// Number of markup files checked.
    pub file_count: usize,
    /// Number of stylesheets harvested.
    pub stylesheet_count: usize,
    /// Number of invalid classes found.
    pub warning_count: usize,
    /// Number of unknown classes reported.
    pub info_count: usize,
    /// Whether to fail on warnings.
    pub fail_on_warnings: bool,
}

impl CheckSummary {
    /// Adds the counts for one file's reported diagnostics.
    pub fn record(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            match diag.severity {
                Severity::Warning => self.warning_count += 1,
                Severity::Info => self.info_count += 1,
            }
        }
    }

    /// Whether the run should exit with a failure status.
    pub fn failed(&self) -> bool {
        self.fail_on_warnings && self.warning_count > 0
    }

    /// Formats the summary line.
    pub fn format(&self) -> String {
        format!(
            "====================================\nclass-check found {} and {} in {} ({})",
            plural(self.warning_count, "invalid class", "invalid classes"),
            plural(self.info_count, "unknown class", "unknown classes"),
            plural(self.file_count, "file", "files"),
            plural(self.stylesheet_count, "stylesheet", "stylesheets"),
        )
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}
