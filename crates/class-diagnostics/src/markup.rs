//! Class checks over scanned markup.

use crate::verifier::{ClassVerifier, Verdict};
use crate::Diagnostic;
use markup_parser::MarkupDocument;

/// Verifies every class token of every element with a `class` attribute.
///
/// Each token is checked on its own; one diagnostic is produced per invalid
/// or unknown token, in document order.
pub fn check(doc: &MarkupDocument, verifier: &ClassVerifier<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for element in doc.elements_with_class() {
        for token in element.class_tokens() {
            match verifier.verify(&token.name) {
                Verdict::Invalid { advice } => {
                    diagnostics.push(Diagnostic::invalid_class(&token.name, &advice, token.span));
                }
                Verdict::Unknown => {
                    diagnostics.push(Diagnostic::unknown_class(&token.name, token.span));
                }
                Verdict::Valid | Verdict::Ignored | Verdict::IconFont => {}
            }
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiagnosticCode, IgnoreSet, ReferenceTables};
    use markup_parser::parse;
    use pretty_assertions::assert_eq;

    fn run(source: &str, ignore: &[&str]) -> Vec<Diagnostic> {
        let tables = ReferenceTables::bootstrap5().with_overlay([("old-removed-class", "use new-class")]);
        let ignore: IgnoreSet = ignore.iter().copied().collect();
        let verifier = ClassVerifier::new(&tables, &ignore);
        check(&parse(source).document, &verifier)
    }

    #[test]
    fn test_every_token_is_checked() {
        let source = r#"<div class="custom-btn unknown-thing old-removed-class">"#;
        let diagnostics = run(source, &["custom-btn"]);

        let summary: Vec<(DiagnosticCode, &str)> = diagnostics
            .iter()
            .map(|d| (d.code, d.message.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (DiagnosticCode::UnknownClass, "Unknown class: unknown-thing"),
                (DiagnosticCode::InvalidClass, "old-removed-class -> use new-class"),
            ]
        );
        assert_eq!(diagnostics[1].span.text(source), "old-removed-class");
    }

    #[test]
    fn test_repeated_class_reported_each_time() {
        let diagnostics = run(r#"<p class="sr-only"></p><span class="sr-only">"#, &[]);
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_clean_page() {
        let diagnostics = run(
            r#"<nav class="navbar navbar-expand-lg"><i class="fa fa-user"></i></nav>"#,
            &["fa"],
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_elements_without_class_are_skipped() {
        assert!(run(r#"<div id="x" data-class="ml-3"><br></div>"#, &[]).is_empty());
    }
}
