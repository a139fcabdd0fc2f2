//! Harvesting classes from stylesheets on disk.

use camino::{Utf8Path, Utf8PathBuf};
use class_diagnostics::{extract_classes, HarvestError};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

struct Project {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Project {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        Self { _dir: dir, root }
    }

    fn file(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}

fn extract(path: &Utf8Path) -> Vec<String> {
    extract_classes(path)
        .unwrap()
        .into_iter()
        .map(|class| class.to_string())
        .collect()
}

#[test]
fn extracts_top_level_selectors() {
    let project = Project::new();
    let path = project.file(
        "style.css",
        r#"@charset "utf-8";
/* header */
.custom-btn { color: red; }
.a.b.c, .btn:hover, .btn::after { margin: 0; }
@font-face { font-family: X; src: url(x.woff); }
@media (max-width: 600px) { .inside-media { display: none; } }
"#,
    );

    assert_eq!(extract(&path), vec!["custom-btn", "c", "btn", "btn"]);
}

#[test]
fn extraction_is_idempotent() {
    let project = Project::new();
    let path = project.file("style.css", ".one {} .two .three {}");
    assert_eq!(extract(&path), extract(&path));
}

#[test]
fn line_comments_are_ignored() {
    let project = Project::new();
    let path = project.file(
        "theme.scss",
        "// .commented-out { }\n.navbar-custom { }\n  // another\n.footer-custom { }\n",
    );
    assert_eq!(extract(&path), vec!["navbar-custom", "footer-custom"]);
}

#[test]
fn local_import_falls_back_to_css() {
    let project = Project::new();
    let main = project.file("main.scss", "@import \"./b\";\n.main {}\n");
    project.file("b.css", ".from-b {}");

    assert_eq!(extract(&main), vec!["from-b", "main"]);
}

#[test]
fn local_import_prefers_scss() {
    let project = Project::new();
    let main = project.file("main.scss", "@import './parts/vars.css';");
    project.file("parts/vars.scss", ".from-scss {}");
    project.file("parts/vars.css", ".from-css {}");

    assert_eq!(extract(&main), vec!["from-scss"]);
}

#[test]
fn nested_import_resolves_relative_to_importer() {
    let project = Project::new();
    let main = project.file("main.css", "@import \"./parts/a\";");
    project.file("parts/a.css", "@import \"./b\";\n.a {}");
    project.file("parts/b.css", ".b {}");

    assert_eq!(extract(&main), vec!["b", "a"]);
}

#[test]
fn package_imports_are_skipped() {
    let project = Project::new();
    let main = project.file(
        "main.scss",
        "@import \"bootstrap\";\n@import url(\"https://fonts.example.com/x.css\");\n.own {}\n",
    );
    assert_eq!(extract(&main), vec!["own"]);
}

#[test]
fn unresolved_local_import_continues() {
    let project = Project::new();
    let main = project.file("main.css", "@import \"./missing\";\n.still-here {}");
    assert_eq!(extract(&main), vec!["still-here"]);
}

#[test]
fn circular_imports_terminate() {
    let project = Project::new();
    let a = project.file("a.css", "@import \"./b\";\n.a {}");
    project.file("b.css", "@import \"./a\";\n.b {}");

    assert_eq!(extract(&a), vec!["b", "a"]);
}

#[test]
fn diamond_imports_are_extracted_twice() {
    let project = Project::new();
    let main = project.file("main.css", "@import \"./left\";\n@import \"./right\";");
    project.file("left.css", "@import \"./shared\";");
    project.file("right.css", "@import \"./shared\";");
    project.file("shared.css", ".shared {}");

    assert_eq!(extract(&main), vec!["shared", "shared"]);
}

#[test]
fn missing_file_is_an_error() {
    let project = Project::new();
    let error = extract_classes(&project.root.join("nope.css")).unwrap_err();
    assert!(matches!(error, HarvestError::Read { .. }));
}

#[test]
fn truncated_stylesheet_keeps_recovered_rules() {
    let project = Project::new();
    let path = project.file("broken.css", ".ok {}\n.open { color: red;\n");
    assert_eq!(extract(&path), vec!["ok", "open"]);
}

#[test]
fn trailing_brace_in_line_comment_is_recovered() {
    let project = Project::new();
    let path = project.file(
        "theme.scss",
        ".a {}\n.b { color: red; } // see {docs\n",
    );
    assert_eq!(extract(&path), vec!["a", "b"]);
}

#[test]
fn byte_order_mark_before_import() {
    let project = Project::new();
    let main = project.file("a.scss", "\u{feff}@import \"./b\";\n.a {}\n");
    project.file("b.css", ".from-b {}");

    assert_eq!(extract(&main), vec!["from-b", "a"]);
}
