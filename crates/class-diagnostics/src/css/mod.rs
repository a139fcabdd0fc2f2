//! Harvests class names defined in local stylesheets.
//!
//! Only top-level style rules are harvested. Rules nested in `@media`
//! blocks or SCSS nesting are not. Local `@import "./..."` targets are
//! followed, preferring `.scss` over `.css`.
//!
//! A stylesheet cut off at the end of the file (an unclosed block or
//! comment) is closed implicitly: the rules before the break are harvested
//! and a warning names the location.

mod error;

pub use error::HarvestError;

use camino::{Utf8Path, Utf8PathBuf};
use smol_str::SmolStr;
use source_span::{LineIndex, Span};
use stylesheet_parser::Rule;
use tracing::{debug, warn};

/// Extracts the class names of a stylesheet and of the local stylesheets it
/// imports, in order of appearance with duplicates kept.
pub fn extract_classes(path: &Utf8Path) -> Result<Vec<SmolStr>, HarvestError> {
    let mut extractor = Extractor::default();
    let mut classes = Vec::new();
    extractor.extract_file(path, &mut classes)?;
    Ok(classes)
}

/// Extracts class names from one selector list.
///
/// The list is split on whitespace, commas and combinators. From each part
/// containing a `.`, the text after the last `.` is kept, cut at the first
/// `::` or `:`.
pub fn selector_classes(selector: &str) -> Vec<SmolStr> {
    separate_combinators(selector)
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter_map(|part| {
            let dot = part.rfind('.')?;
            let class = &part[dot + 1..];
            let end = class
                .find("::")
                .or_else(|| class.find(':'))
                .unwrap_or(class.len());
            Some(SmolStr::new(&class[..end]))
        })
        .collect()
}

/// Replaces `>`, `+` and `~` outside brackets and parentheses with spaces.
fn separate_combinators(selector: &str) -> String {
    let mut depth = 0usize;
    selector
        .chars()
        .map(|c| match c {
            '[' | '(' => {
                depth += 1;
                c
            }
            ']' | ')' => {
                depth = depth.saturating_sub(1);
                c
            }
            '>' | '+' | '~' if depth == 0 => ' ',
            _ => c,
        })
        .collect()
}

/// Replaces lines starting with `//` by spaces, keeping every offset.
fn blank_line_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for line in source.split_inclusive('\n') {
        if line.trim_start().starts_with("//") {
            let content = line.trim_end_matches(|c| c == '\r' || c == '\n');
            out.extend(std::iter::repeat(' ').take(content.len()));
            out.push_str(&line[content.len()..]);
        } else {
            out.push_str(line);
        }
    }
    out
}

/// Tracks the stylesheets currently being extracted to stop import cycles.
#[derive(Debug, Default)]
struct Extractor {
    stack: Vec<Utf8PathBuf>,
}

impl Extractor {
    fn extract_file(
        &mut self,
        path: &Utf8Path,
        classes: &mut Vec<SmolStr>,
    ) -> Result<(), HarvestError> {
        let canonical = path
            .canonicalize_utf8()
            .unwrap_or_else(|_| path.to_path_buf());
        if self.stack.contains(&canonical) {
            warn!("circular stylesheet import {}", path);
            return Ok(());
        }

        debug!("Parsing {}", path);
        let source = std::fs::read_to_string(path).map_err(|source| HarvestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cleaned = blank_line_comments(&source);
        let result = stylesheet_parser::parse(&cleaned);
        let file = SourceFile {
            path,
            lines: LineIndex::new(&cleaned),
        };

        for error in &result.errors {
            warn!("{}: {} (recovered)", file.location(error.span), error);
        }

        self.stack.push(canonical);
        let outcome = self.extract_rules(&file, &result.stylesheet.rules, classes);
        self.stack.pop();
        outcome
    }

    fn extract_rules(
        &mut self,
        file: &SourceFile<'_>,
        rules: &[Rule],
        classes: &mut Vec<SmolStr>,
    ) -> Result<(), HarvestError> {
        for rule in rules {
            match rule {
                Rule::Comment(_)
                | Rule::Charset(_)
                | Rule::FontFace(_)
                | Rule::Media(_)
                | Rule::Unknown(_) => {}
                Rule::Import(import) => {
                    self.follow_import(file, &import.href, import.href_span, classes)?
                }
                Rule::Style(style) => classes.extend(selector_classes(&style.selector)),
            }
        }
        Ok(())
    }

    fn follow_import(
        &mut self,
        importer: &SourceFile<'_>,
        href: &str,
        href_span: Span,
        classes: &mut Vec<SmolStr>,
    ) -> Result<(), HarvestError> {
        if !href.starts_with("./") {
            return Ok(());
        }

        let target = importer
            .path
            .parent()
            .unwrap_or_else(|| Utf8Path::new(""))
            .join(href);

        for extension in ["scss", "css"] {
            let candidate = target.with_extension(extension);
            if candidate.is_file() {
                return self.extract_file(&candidate, classes);
            }
        }

        warn!(
            "{}: unresolved stylesheet import {}",
            importer.location(href_span),
            target
        );
        Ok(())
    }
}

/// A stylesheet being extracted, for locating warnings.
struct SourceFile<'a> {
    path: &'a Utf8Path,
    lines: LineIndex,
}

impl SourceFile<'_> {
    /// Formats `path:line:col` (1-based) for the start of `span`.
    fn location(&self, span: Span) -> String {
        match self.lines.line_col(span.start) {
            Some(pos) => format!("{}:{}:{}", self.path, pos.line + 1, pos.col + 1),
            None => self.path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(selector: &str) -> Vec<String> {
        selector_classes(selector)
            .into_iter()
            .map(|class| class.to_string())
            .collect()
    }

    #[test]
    fn test_compound_selector_keeps_last_class() {
        assert_eq!(names(".a.b.c"), vec!["c"]);
        assert_eq!(names("span.badge"), vec!["badge"]);
    }

    #[test]
    fn test_pseudo_classes_and_elements() {
        assert_eq!(names(".btn:hover, .btn::after"), vec!["btn", "btn"]);
        assert_eq!(names(".link:not(:focus)"), vec!["link"]);
    }

    #[test]
    fn test_descendants_and_lists() {
        assert_eq!(
            names(".card .card-title,\n.nav-link"),
            vec!["card", "card-title", "nav-link"]
        );
        assert_eq!(names("div p"), Vec::<String>::new());
    }

    #[test]
    fn test_combinators() {
        assert_eq!(names(".a>.b + .c~.d"), vec!["a", "b", "c", "d"]);
        assert_eq!(names("li:nth-child(2n+1).item"), vec!["item"]);
        assert_eq!(names(r#"a[title~="x"].tip"#), vec!["tip"]);
    }

    #[test]
    fn test_blank_line_comments_keeps_offsets() {
        let source = ".a {}\n  // comment\r\n.b {}\n";
        let cleaned = blank_line_comments(source);
        assert_eq!(cleaned.len(), source.len());
        assert_eq!(cleaned, format!(".a {{}}\n{}\r\n.b {{}}\n", " ".repeat(12)));
    }

    #[test]
    fn test_location_is_one_based() {
        let file = SourceFile {
            path: Utf8Path::new("theme.scss"),
            lines: LineIndex::new(".a {}\n@import \"./gone\";\n"),
        };
        assert_eq!(file.location(Span::from_offsets(15, 21)), "theme.scss:2:10");
    }

    #[test]
    fn test_blank_line_comments_leaves_urls() {
        let source = ".a { background: url(//cdn.example.com/x.png); }";
        assert_eq!(blank_line_comments(source), source);
    }
}
