//! Bootstrap 4 classes that are gone or renamed in Bootstrap 5.
//!
//! Reference: https://getbootstrap.com/docs/5.0/migration/

use super::{class_name, BOOTSTRAP4_BREAKPOINTS, THEME_COLORS};

/// Removed or renamed classes, with migration advice.
pub static REMOVED_CLASSES: &[(&str, &str)] = &[
    // Borders
    ("border-left", "use border-start"),
    ("border-right", "use border-end"),
    ("border-left-0", "use border-start-0"),
    ("border-right-0", "use border-end-0"),
    ("rounded-left", "use rounded-start"),
    ("rounded-right", "use rounded-end"),
    ("rounded-sm", "use rounded-1"),
    ("rounded-lg", "use rounded-3"),
    // Dropdowns
    ("dropleft", "use dropstart"),
    ("dropright", "use dropend"),
    // Badges and buttons
    ("badge-pill", "use rounded-pill"),
    ("btn-block", "use d-grid on the parent element"),
    ("close", "use btn-close"),
    // Forms
    ("custom-control", "use form-check"),
    ("custom-control-inline", "use form-check-inline"),
    ("custom-checkbox", "use form-check"),
    ("custom-radio", "use form-check"),
    ("custom-switch", "use form-switch"),
    ("custom-control-input", "use form-check-input"),
    ("custom-control-label", "use form-check-label"),
    ("custom-select", "use form-select"),
    ("custom-select-sm", "use form-select-sm"),
    ("custom-select-lg", "use form-select-lg"),
    ("custom-range", "use form-range"),
    ("custom-file", "use form-control"),
    ("custom-file-input", "use form-control"),
    ("custom-file-label", ""),
    ("form-control-file", "use form-control"),
    ("form-control-range", "use form-range"),
    ("form-group", "use margin utilities like mb-3"),
    ("form-row", "use row with gutter utilities"),
    ("form-inline", "use grid utilities"),
    ("input-group-append", "place addons directly inside input-group"),
    ("input-group-prepend", "place addons directly inside input-group"),
    // Layout and components
    ("no-gutters", "use g-0"),
    ("card-deck", "use the grid with row-cols-*"),
    ("card-columns", "use a masonry layout"),
    ("jumbotron", "use utilities like p-5 mb-4 bg-light rounded-3"),
    ("jumbotron-fluid", "use utilities like p-5 mb-4 bg-light"),
    ("media", "use d-flex"),
    ("media-body", "use flex-grow-1"),
    ("thead-dark", "use table-dark"),
    ("thead-light", "use table-light"),
    ("pre-scrollable", ""),
    // Embeds
    ("embed-responsive", "use ratio"),
    ("embed-responsive-item", ""),
    ("embed-responsive-21by9", "use ratio-21x9"),
    ("embed-responsive-16by9", "use ratio-16x9"),
    ("embed-responsive-4by3", "use ratio-4x3"),
    ("embed-responsive-1by1", "use ratio-1x1"),
    // Typography
    ("text-monospace", "use font-monospace"),
    ("text-hide", ""),
    ("text-justify", ""),
    ("font-italic", "use fst-italic"),
    ("font-weight-bold", "use fw-bold"),
    ("font-weight-bolder", "use fw-bolder"),
    ("font-weight-normal", "use fw-normal"),
    ("font-weight-light", "use fw-light"),
    ("font-weight-lighter", "use fw-lighter"),
    // Accessibility
    ("sr-only", "use visually-hidden"),
    ("sr-only-focusable", "use visually-hidden-focusable"),
];

/// Direction-dependent utilities that switched from left/right to start/end.
///
/// Each entry is a class prefix and the values that follow the optional
/// breakpoint, e.g. `float` + `md` + `left`.
static LEFT_RIGHT_UTILITIES: &[&str] = &["float", "text", "dropdown-menu"];

const MARGIN_SIZES: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "auto", "n1", "n2", "n3", "n4", "n5",
];
const PADDING_SIZES: &[&str] = &["0", "1", "2", "3", "4", "5"];

/// Every invalid class with its advice: the static list plus the families
/// generated per breakpoint and size.
pub fn invalid_classes() -> impl Iterator<Item = (String, String)> {
    let fixed = REMOVED_CLASSES
        .iter()
        .map(|(class, advice)| (class.to_string(), advice.to_string()));

    let badges = THEME_COLORS
        .iter()
        .map(|color| (format!("badge-{color}"), format!("use bg-{color}")));

    fixed
        .chain(badges)
        .chain(left_right_renames())
        .chain(spacing_renames())
}

fn left_right_renames() -> impl Iterator<Item = (String, String)> {
    LEFT_RIGHT_UTILITIES.iter().flat_map(|&prefix| {
        BOOTSTRAP4_BREAKPOINTS.iter().flat_map(move |&bp| {
            [("left", "start"), ("right", "end")]
                .into_iter()
                .map(move |(old, new)| {
                    (
                        class_name(&[prefix, bp, old]),
                        format!("use {}", class_name(&[prefix, bp, new])),
                    )
                })
        })
    })
}

/// `ml-*`, `mr-*`, `pl-*`, `pr-*` became `ms-*`, `me-*`, `ps-*`, `pe-*`.
fn spacing_renames() -> impl Iterator<Item = (String, String)> {
    let properties: [(&str, &[&str]); 2] = [("m", MARGIN_SIZES), ("p", PADDING_SIZES)];

    properties.into_iter().flat_map(|(property, sizes)| {
        [("l", "s"), ("r", "e")]
            .into_iter()
            .flat_map(move |(old_side, new_side)| {
                BOOTSTRAP4_BREAKPOINTS.iter().flat_map(move |&bp| {
                    sizes.iter().map(move |&size| {
                        let old = class_name(&[format!("{property}{old_side}").as_str(), bp, size]);
                        let new = class_name(&[format!("{property}{new_side}").as_str(), bp, size]);
                        (old, format!("use {new}"))
                    })
                })
            })
    })
}
