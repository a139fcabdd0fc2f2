//! Main orchestration logic.

use crate::cli::{Args, OutputFormat};
use crate::config::ProjectConfig;
use crate::output::{CheckSummary, FormattedDiagnostic, Formatter};
use camino::{Utf8Path, Utf8PathBuf};
use class_diagnostics::{
    check, extract_classes, ClassVerifier, Diagnostic, HarvestError, IgnoreSet, ReferenceTables,
};
use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use std::fs;
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Orchestration errors.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum RunError {
    /// The folder to scan does not exist.
    #[error("Path {0} does not exist")]
    #[diagnostic(code(class_check::missing_folder))]
    MissingFolder(Utf8PathBuf),

    /// Invalid glob pattern.
    #[error("invalid glob pattern: {0}")]
    #[diagnostic(code(class_check::invalid_glob))]
    InvalidGlob(String),

    /// Failed to read a markup file.
    #[error("failed to read {path}")]
    #[diagnostic(code(class_check::read_markup))]
    ReadFailed {
        /// The markup file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A stylesheet could not be harvested.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Harvest(#[from] HarvestError),
}

/// Files found in the scanned folder.
#[derive(Debug, Default)]
pub struct Discovered {
    /// `.scss` and `.css` files.
    pub stylesheets: Vec<Utf8PathBuf>,
    /// `.html` files.
    pub pages: Vec<Utf8PathBuf>,
}

/// Runs the check over the folder named in `args`.
pub fn run(args: &Args) -> Result<CheckSummary, RunError> {
    let folder = &args.folder;
    if !folder.exists() {
        return Err(RunError::MissingFolder(folder.clone()));
    }

    let config = ProjectConfig::load(folder, args.config.as_deref());

    let mut tables = ReferenceTables::bootstrap5();
    if args.fontawesome || config.fontawesome {
        tables = tables.with_fontawesome();
    }
    let tables = tables.with_overlay(config.invalid.clone());

    let excludes = build_excludes(args.exclude.iter().chain(&config.exclude))?;
    let discovered = discover(folder, args.recursive, &excludes);
    debug!(
        "Found {} stylesheets and {} pages",
        discovered.stylesheets.len(),
        discovered.pages.len()
    );

    let ignore = build_ignore_set(
        args.ignore.iter().chain(&config.ignore),
        &discovered.stylesheets,
    )?;
    debug!("Ignore set holds {} classes", ignore.len());

    let verifier = ClassVerifier::new(&tables, &ignore);
    let formatter = Formatter::new(args.output);
    let output_json = args.output == OutputFormat::Json;

    struct FileOutput {
        diagnostics: Vec<Diagnostic>,
        text: Option<String>,
        json: Vec<FormattedDiagnostic>,
    }

    // Results are collected in discovery order, so output is deterministic.
    let outputs: Vec<FileOutput> = discovered
        .pages
        .par_iter()
        .map(|path| -> Result<FileOutput, RunError> {
            debug!("Scanning {}", path);
            let source = fs::read_to_string(path).map_err(|source| RunError::ReadFailed {
                path: path.clone(),
                source,
            })?;

            let parse_result = markup_parser::parse(&source);
            for error in &parse_result.errors {
                debug!("{}: recovered from {}", path, error);
            }

            let mut diagnostics = check(&parse_result.document, &verifier);
            diagnostics.retain(|diag| args.threshold.includes(diag.severity));

            let relative_path = path.strip_prefix(folder).unwrap_or(path);
            let (text, json) = if diagnostics.is_empty() {
                (None, Vec::new())
            } else if output_json {
                let json =
                    Formatter::format_json_diagnostics(&diagnostics, relative_path, &source);
                (None, json)
            } else {
                let text = formatter.format(&diagnostics, relative_path, &source);
                (Some(text), Vec::new())
            };

            Ok(FileOutput {
                diagnostics,
                text,
                json,
            })
        })
        .collect::<Result<_, RunError>>()?;

    let mut summary = CheckSummary {
        file_count: discovered.pages.len(),
        stylesheet_count: discovered.stylesheets.len(),
        fail_on_warnings: args.fail_on_warnings,
        ..Default::default()
    };
    let mut json_output = Vec::new();

    for output in outputs {
        summary.record(&output.diagnostics);
        if let Some(text) = output.text {
            print!("{}", text);
        }
        json_output.extend(output.json);
    }

    if output_json {
        let json = serde_json::to_string_pretty(&json_output).unwrap_or_else(|_| "[]".to_string());
        println!("{}", json);
    } else {
        println!("{}", summary.format());
    }

    Ok(summary)
}

/// Builds the exclude set from the user's patterns. Nothing is excluded by
/// default: vendored stylesheets define classes too.
fn build_excludes<'a>(patterns: impl Iterator<Item = &'a String>) -> Result<GlobSet, RunError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| RunError::InvalidGlob(e.to_string()))?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|e| RunError::InvalidGlob(e.to_string()))
}

/// Finds stylesheets and pages, in file system order.
///
/// Without `recursive` only the folder's own entries are considered.
pub fn discover(folder: &Utf8Path, recursive: bool, excludes: &GlobSet) -> Discovered {
    let mut walker = WalkDir::new(folder).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut discovered = Discovered::default();
    let files = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| Utf8PathBuf::try_from(e.into_path()).ok())
        .filter(|p| {
            let relative = p.strip_prefix(folder).unwrap_or(p);
            !excludes.is_match(relative.as_str())
        });

    for path in files {
        let extension = path.extension().unwrap_or_default();
        if extension == "scss" || extension == "css" {
            discovered.stylesheets.push(path);
        } else if extension == "html" {
            discovered.pages.push(path);
        }
    }

    discovered
}

/// Seeds the ignore set with user classes, then adds every class harvested
/// from the stylesheets. Any harvesting failure aborts.
fn build_ignore_set<'a>(
    seed: impl Iterator<Item = &'a String>,
    stylesheets: &[Utf8PathBuf],
) -> Result<IgnoreSet, RunError> {
    let mut ignore: IgnoreSet = seed.map(String::as_str).collect();

    let harvested = stylesheets
        .par_iter()
        .map(|path| extract_classes(path))
        .collect::<Result<Vec<_>, HarvestError>>()?;

    for (path, classes) in stylesheets.iter().zip(harvested) {
        debug!("Harvested {} classes from {}", classes.len(), path);
        ignore.extend(classes);
    }

    if !stylesheets.is_empty() {
        info!(
            "Collected {} local classes from {} stylesheets",
            ignore.len(),
            stylesheets.len()
        );
    }

    Ok(ignore)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(files: &[(&str, &str)]) -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        for (name, contents) in files {
            let path = root.join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, contents).unwrap();
        }
        (dir, root)
    }

    fn relative(root: &Utf8Path, paths: &[Utf8PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_discover_top_level_only() {
        let (_dir, root) = project(&[
            ("index.html", ""),
            ("style.css", ""),
            ("theme.scss", ""),
            ("notes.txt", ""),
            ("sub/page.html", ""),
            ("sub/more.css", ""),
        ]);
        let excludes = build_excludes(std::iter::empty()).unwrap();
        let found = discover(&root, false, &excludes);

        assert_eq!(relative(&root, &found.pages), vec!["index.html"]);
        assert_eq!(relative(&root, &found.stylesheets), vec!["style.css", "theme.scss"]);
    }

    #[test]
    fn test_discover_recursive_with_excludes() {
        let (_dir, root) = project(&[
            ("index.html", ""),
            ("sub/page.html", ""),
            ("vendor/lib.css", ""),
            ("node_modules/pkg/dist.css", ""),
        ]);
        let patterns = vec!["vendor/**".to_string()];
        let excludes = build_excludes(patterns.iter()).unwrap();
        let found = discover(&root, true, &excludes);

        assert_eq!(relative(&root, &found.pages), vec!["index.html", "sub/page.html"]);
        assert_eq!(
            relative(&root, &found.stylesheets),
            vec!["node_modules/pkg/dist.css"]
        );
    }

    #[test]
    fn test_invalid_glob() {
        let patterns = vec!["[".to_string()];
        assert!(matches!(
            build_excludes(patterns.iter()),
            Err(RunError::InvalidGlob(_))
        ));
    }

    #[test]
    fn test_ignore_set_combines_seed_and_harvest() {
        let (_dir, root) = project(&[("a.css", ".from-a {}"), ("b.scss", ".from-b {}")]);
        let seed = vec!["from-cli".to_string()];
        let stylesheets = vec![root.join("a.css"), root.join("b.scss")];
        let ignore = build_ignore_set(seed.iter(), &stylesheets).unwrap();

        assert!(ignore.contains("from-cli"));
        assert!(ignore.contains("from-a"));
        assert!(ignore.contains("from-b"));
    }

    #[test]
    fn test_truncated_stylesheet_is_harvested() {
        let (_dir, root) = project(&[("open.css", ".x { color: red;")]);
        let ignore = build_ignore_set(std::iter::empty(), &[root.join("open.css")]).unwrap();
        assert!(ignore.contains("x"));
    }

    #[test]
    fn test_missing_stylesheet_aborts() {
        let (_dir, root) = project(&[]);
        let result = build_ignore_set(std::iter::empty(), &[root.join("gone.css")]);
        assert!(matches!(result, Err(RunError::Harvest(HarvestError::Read { .. }))));
    }
}
