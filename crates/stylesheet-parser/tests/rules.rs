use stylesheet_parser::{parse, Rule};

fn dump(source: &str) -> String {
    let result = parse(source);
    assert!(result.errors.is_empty(), "errors: {:?}", result.errors);
    result
        .stylesheet
        .rules
        .iter()
        .map(|rule| {
            let span = rule.span();
            let detail = match rule {
                Rule::Import(r) => format!("{:?}", r.href.as_str()),
                Rule::Style(r) => format!("{:?}", r.selector),
                Rule::Media(r) => format!("{:?}", r.query),
                Rule::Charset(r) => format!("{:?}", r.encoding.as_str()),
                Rule::Unknown(r) => format!("{:?}", r.name.as_deref()),
                Rule::Comment(_) | Rule::FontFace(_) => String::new(),
            };
            format!(
                "{} {}..{} {}",
                rule.kind_name(),
                u32::from(span.start),
                u32::from(span.end),
                detail
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_snapshot_scss_entry_point() {
    // The line comment is not CSS; the parser folds it into the next selector.
    let source = r#"@import "bootstrap";
@import "./variables";
// theme overrides
.navbar-brand.active, .nav-link:focus { outline: none; }
@media print { .d-print-none { display: none; } }
"#;
    insta::assert_snapshot!(dump(source), @r#"
    import 0..20 "bootstrap"
    import 21..43 "./variables"
    style 44..119 "// theme overrides\n.navbar-brand.active, .nav-link:focus"
    media 120..169 "print"
    "#);
}

#[test]
fn test_scss_statements_are_unknown() {
    let source = "@use 'sass:math';\n$gutter: 1rem;\n@include media-breakpoint-up(md) { .x { a: b; } }\n";
    let result = parse(source);
    assert!(result.errors.is_empty());
    let names: Vec<Option<&str>> = result
        .stylesheet
        .rules
        .iter()
        .map(|rule| match rule {
            Rule::Unknown(r) => r.name.as_deref(),
            other => panic!("unexpected {}", other.kind_name()),
        })
        .collect();
    assert_eq!(names, vec![Some("use"), None, Some("include")]);
}

#[test]
fn test_reparse_is_stable() {
    let source = ".a.b.c { } .btn:hover { } .btn::after { }";
    let first = parse(source).stylesheet;
    let second = parse(source).stylesheet;
    assert_eq!(first, second);
    assert_eq!(first.rules.len(), 3);
}

#[test]
fn test_errors_do_not_drop_earlier_rules() {
    let result = parse(".ok { } .broken { color: red;");
    assert_eq!(result.stylesheet.rules.len(), 2);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].to_string(),
        "unclosed block: { opened by .broken"
    );
}
