//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use class_diagnostics::Severity;

/// Finds Bootstrap 4 classes that are invalid or renamed in Bootstrap 5.
#[derive(Debug, Parser)]
#[command(name = "class-check")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path of the folder to be scanned
    pub folder: Utf8PathBuf,

    /// Recursively scan subfolders
    #[arg(long)]
    pub recursive: bool,

    /// Ignore the specified css classes
    #[arg(short = 'i', long = "ignore", value_name = "CLASS")]
    pub ignore: Vec<String>,

    /// Include Font Awesome 5 to 6 renamed classes
    #[arg(long)]
    pub fontawesome: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Minimum severity threshold
    #[arg(long, value_enum, default_value = "info")]
    pub threshold: Threshold,

    /// Exit with error on warnings
    #[arg(long = "fail-on-warnings")]
    pub fail_on_warnings: bool,

    /// Glob patterns of files to skip, relative to the folder
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Path to the configuration file (default: <FOLDER>/class-check.json)
    #[arg(long)]
    pub config: Option<Utf8PathBuf>,

    /// Print debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// Human-readable with source snippets
    HumanVerbose,
    /// JSON output
    Json,
    /// Machine-readable (one line per diagnostic)
    Machine,
}

/// Severity threshold.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum Threshold {
    /// Show unknown and invalid classes (default)
    #[default]
    Info,
    /// Only show invalid classes
    Warning,
}

impl Threshold {
    /// Returns whether diagnostics of this severity are shown.
    pub fn includes(&self, severity: Severity) -> bool {
        match self {
            Threshold::Info => true,
            Threshold::Warning => severity >= Severity::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["class-check", "site"]);
        assert_eq!(args.folder.as_str(), "site");
        assert!(!args.recursive);
        assert!(!args.fontawesome);
        assert!(args.ignore.is_empty());
        assert_eq!(args.output, OutputFormat::Human);
        assert_eq!(args.threshold, Threshold::Info);
    }

    #[test]
    fn test_folder_is_required() {
        assert!(Args::try_parse_from(["class-check"]).is_err());
    }

    #[test]
    fn test_repeated_ignore() {
        let args = Args::parse_from([
            "class-check",
            "site",
            "-i",
            "custom-a",
            "--ignore",
            "custom-b",
            "--recursive",
            "--fontawesome",
        ]);
        assert_eq!(args.ignore, vec!["custom-a", "custom-b"]);
        assert!(args.recursive);
        assert!(args.fontawesome);
    }

    #[test]
    fn test_output_formats() {
        let args = Args::parse_from(["class-check", "site", "--output", "json"]);
        assert_eq!(args.output, OutputFormat::Json);

        let args = Args::parse_from(["class-check", "site", "--output", "human-verbose"]);
        assert_eq!(args.output, OutputFormat::HumanVerbose);
    }

    #[test]
    fn test_threshold() {
        let args = Args::parse_from(["class-check", "site", "--threshold", "warning"]);
        assert!(!args.threshold.includes(Severity::Info));
        assert!(args.threshold.includes(Severity::Warning));
        assert!(Threshold::Info.includes(Severity::Info));
    }
}
