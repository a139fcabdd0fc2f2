//! Classes that exist in Bootstrap 5.
//!
//! Reference: https://getbootstrap.com/docs/5.0/

use super::{class_name, BOOTSTRAP5_BREAKPOINTS, THEME_COLORS};

/// Component and content classes without responsive or color variants.
pub static COMPONENT_CLASSES: &[&str] = &[
    // Layout
    "container-fluid",
    "row",
    "hstack",
    "vstack",
    "vr",
    "clearfix",
    // Content
    "h1", "h2", "h3", "h4", "h5", "h6",
    "display-1", "display-2", "display-3", "display-4", "display-5", "display-6",
    "lead",
    "small",
    "mark",
    "initialism",
    "blockquote",
    "blockquote-footer",
    "list-unstyled",
    "list-inline",
    "list-inline-item",
    "img-fluid",
    "img-thumbnail",
    "figure",
    "figure-img",
    "figure-caption",
    // Tables
    "table",
    "table-sm",
    "table-bordered",
    "table-borderless",
    "table-striped",
    "table-hover",
    "table-active",
    "table-responsive",
    "caption-top",
    // Forms
    "form-label",
    "form-text",
    "form-control",
    "form-control-sm",
    "form-control-lg",
    "form-control-plaintext",
    "form-control-color",
    "form-select",
    "form-select-sm",
    "form-select-lg",
    "form-check",
    "form-check-input",
    "form-check-label",
    "form-check-inline",
    "form-switch",
    "form-range",
    "form-floating",
    "input-group",
    "input-group-text",
    "input-group-sm",
    "input-group-lg",
    "col-form-label",
    "col-form-label-sm",
    "col-form-label-lg",
    "valid-feedback",
    "invalid-feedback",
    "valid-tooltip",
    "invalid-tooltip",
    "was-validated",
    "needs-validation",
    "has-validation",
    "is-valid",
    "is-invalid",
    // Buttons
    "btn",
    "btn-link",
    "btn-lg",
    "btn-sm",
    "btn-check",
    "btn-close",
    "btn-close-white",
    "btn-group",
    "btn-group-sm",
    "btn-group-lg",
    "btn-group-vertical",
    "btn-toolbar",
    // States
    "active",
    "disabled",
    "show",
    "fade",
    "collapse",
    "collapsing",
    // Accordion
    "accordion",
    "accordion-item",
    "accordion-header",
    "accordion-button",
    "accordion-collapse",
    "accordion-body",
    "accordion-flush",
    // Alerts
    "alert",
    "alert-dismissible",
    "alert-heading",
    "alert-link",
    // Badges and breadcrumbs
    "badge",
    "breadcrumb",
    "breadcrumb-item",
    // Cards
    "card",
    "card-body",
    "card-title",
    "card-subtitle",
    "card-text",
    "card-link",
    "card-header",
    "card-footer",
    "card-img",
    "card-img-top",
    "card-img-bottom",
    "card-img-overlay",
    "card-group",
    "card-header-tabs",
    "card-header-pills",
    // Carousel
    "carousel",
    "slide",
    "carousel-fade",
    "carousel-dark",
    "carousel-inner",
    "carousel-item",
    "carousel-item-next",
    "carousel-item-prev",
    "carousel-item-start",
    "carousel-item-end",
    "carousel-control-prev",
    "carousel-control-next",
    "carousel-control-prev-icon",
    "carousel-control-next-icon",
    "carousel-indicators",
    "carousel-caption",
    // Dropdowns
    "dropdown",
    "dropup",
    "dropstart",
    "dropend",
    "dropdown-toggle",
    "dropdown-toggle-split",
    "dropdown-menu",
    "dropdown-menu-dark",
    "dropdown-item",
    "dropdown-item-text",
    "dropdown-divider",
    "dropdown-header",
    // List group
    "list-group",
    "list-group-flush",
    "list-group-item",
    "list-group-item-action",
    // Modal
    "modal",
    "modal-dialog",
    "modal-dialog-centered",
    "modal-dialog-scrollable",
    "modal-content",
    "modal-header",
    "modal-title",
    "modal-body",
    "modal-footer",
    "modal-sm",
    "modal-lg",
    "modal-xl",
    "modal-fullscreen",
    "modal-backdrop",
    // Navs and navbar
    "nav",
    "nav-item",
    "nav-link",
    "nav-tabs",
    "nav-pills",
    "nav-fill",
    "nav-justified",
    "tab-content",
    "tab-pane",
    "navbar",
    "navbar-brand",
    "navbar-nav",
    "navbar-nav-scroll",
    "navbar-toggler",
    "navbar-toggler-icon",
    "navbar-collapse",
    "navbar-text",
    "navbar-light",
    "navbar-dark",
    // Offcanvas
    "offcanvas",
    "offcanvas-start",
    "offcanvas-end",
    "offcanvas-top",
    "offcanvas-bottom",
    "offcanvas-header",
    "offcanvas-title",
    "offcanvas-body",
    // Pagination
    "pagination",
    "pagination-lg",
    "pagination-sm",
    "page-item",
    "page-link",
    // Popovers and tooltips
    "popover",
    "popover-arrow",
    "popover-header",
    "popover-body",
    "tooltip",
    "tooltip-arrow",
    "tooltip-inner",
    // Progress and spinners
    "progress",
    "progress-bar",
    "progress-bar-striped",
    "progress-bar-animated",
    "spinner-border",
    "spinner-border-sm",
    "spinner-grow",
    "spinner-grow-sm",
    // Toasts
    "toast",
    "toast-container",
    "toast-header",
    "toast-body",
    // Helpers
    "ratio",
    "ratio-1x1",
    "ratio-4x3",
    "ratio-16x9",
    "ratio-21x9",
    "fixed-top",
    "fixed-bottom",
    "sticky-top",
    "visually-hidden",
    "visually-hidden-focusable",
    "stretched-link",
    "text-truncate",
    // Utilities without variants
    "border",
    "border-0",
    "border-top",
    "border-end",
    "border-bottom",
    "border-start",
    "border-top-0",
    "border-end-0",
    "border-bottom-0",
    "border-start-0",
    "border-white",
    "rounded",
    "rounded-top",
    "rounded-end",
    "rounded-bottom",
    "rounded-start",
    "rounded-circle",
    "rounded-pill",
    "shadow",
    "shadow-none",
    "shadow-sm",
    "shadow-lg",
    "font-monospace",
    "fst-italic",
    "fst-normal",
    "text-lowercase",
    "text-uppercase",
    "text-capitalize",
    "text-wrap",
    "text-nowrap",
    "text-break",
    "text-reset",
    "text-decoration-none",
    "text-decoration-underline",
    "text-decoration-line-through",
    "text-white",
    "text-body",
    "text-muted",
    "text-black-50",
    "text-white-50",
    "bg-white",
    "bg-body",
    "bg-transparent",
    "bg-gradient",
    "translate-middle",
    "translate-middle-x",
    "translate-middle-y",
    "mw-100",
    "mh-100",
    "vw-100",
    "vh-100",
    "min-vw-100",
    "min-vh-100",
    "invisible",
    "visible",
    "pe-none",
    "pe-auto",
    "user-select-all",
    "user-select-auto",
    "user-select-none",
];

/// Utility families: class prefix and the values that follow it.
static FIXED_UTILITIES: &[(&str, &[&str])] = &[
    ("fs", &["1", "2", "3", "4", "5", "6"]),
    ("fw", &["bold", "bolder", "normal", "light", "lighter"]),
    ("lh", &["1", "sm", "base", "lg"]),
    ("border", &["1", "2", "3", "4", "5"]),
    ("rounded", &["0", "1", "2", "3"]),
    ("w", &["25", "50", "75", "100", "auto"]),
    ("h", &["25", "50", "75", "100", "auto"]),
    ("position", &["static", "relative", "absolute", "fixed", "sticky"]),
    ("top", &["0", "50", "100"]),
    ("bottom", &["0", "50", "100"]),
    ("start", &["0", "50", "100"]),
    ("end", &["0", "50", "100"]),
    ("overflow", &["auto", "hidden", "visible", "scroll"]),
    ("align", &["baseline", "top", "middle", "bottom", "text-top", "text-bottom"]),
    ("gap", &["0", "1", "2", "3", "4", "5"]),
    ("d-print", &["none", "inline", "inline-block", "block", "grid", "table", "flex", "inline-flex"]),
];

/// Utility families that take an optional breakpoint infix.
static RESPONSIVE_UTILITIES: &[(&str, &[&str])] = &[
    ("container", &[""]),
    ("col", &["", "auto", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]),
    ("offset", &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"]),
    ("order", &["first", "last", "0", "1", "2", "3", "4", "5"]),
    ("row-cols", &["auto", "1", "2", "3", "4", "5", "6"]),
    ("g", SPACING_SIZES),
    ("gx", SPACING_SIZES),
    ("gy", SPACING_SIZES),
    ("d", &[
        "none", "inline", "inline-block", "block", "grid", "table", "table-row",
        "table-cell", "flex", "inline-flex",
    ]),
    ("flex", &[
        "row", "row-reverse", "column", "column-reverse", "wrap", "nowrap",
        "wrap-reverse", "fill", "grow-0", "grow-1", "shrink-0", "shrink-1",
    ]),
    ("justify-content", &["start", "end", "center", "between", "around", "evenly"]),
    ("align-items", &["start", "end", "center", "baseline", "stretch"]),
    ("align-self", &["auto", "start", "end", "center", "baseline", "stretch"]),
    ("align-content", &["start", "end", "center", "between", "around", "stretch"]),
    ("float", &["start", "end", "none"]),
    ("text", &["start", "end", "center"]),
    ("dropdown-menu", &["start", "end"]),
    ("navbar-expand", &[""]),
    ("list-group-horizontal", &[""]),
    ("table-responsive", &[""]),
    ("m", MARGIN_SIZES),
    ("mt", MARGIN_SIZES),
    ("mb", MARGIN_SIZES),
    ("ms", MARGIN_SIZES),
    ("me", MARGIN_SIZES),
    ("mx", MARGIN_SIZES),
    ("my", MARGIN_SIZES),
    ("p", SPACING_SIZES),
    ("pt", SPACING_SIZES),
    ("pb", SPACING_SIZES),
    ("ps", SPACING_SIZES),
    ("pe", SPACING_SIZES),
    ("px", SPACING_SIZES),
    ("py", SPACING_SIZES),
];

const SPACING_SIZES: &[&str] = &["0", "1", "2", "3", "4", "5"];
const MARGIN_SIZES: &[&str] = &["0", "1", "2", "3", "4", "5", "auto"];

/// Color-themed families, e.g. `btn-outline-danger`.
static THEMED_PREFIXES: &[&str] = &[
    "text",
    "bg",
    "btn",
    "btn-outline",
    "alert",
    "border",
    "link",
    "list-group-item",
    "table",
];

/// Every valid Bootstrap 5 class.
pub fn valid_classes() -> impl Iterator<Item = String> {
    let components = COMPONENT_CLASSES.iter().map(|class| class.to_string());

    let fixed = FIXED_UTILITIES.iter().flat_map(|&(prefix, values)| {
        values.iter().map(move |&value| class_name(&[prefix, value]))
    });

    let responsive = RESPONSIVE_UTILITIES.iter().flat_map(|&(prefix, values)| {
        BOOTSTRAP5_BREAKPOINTS.iter().flat_map(move |&bp| {
            values
                .iter()
                .map(move |&value| class_name(&[prefix, bp, value]))
        })
    });

    let themed = THEMED_PREFIXES.iter().flat_map(|&prefix| {
        THEME_COLORS
            .iter()
            .map(move |&color| class_name(&[prefix, color]))
    });

    let fullscreen = BOOTSTRAP5_BREAKPOINTS
        .iter()
        .filter(|bp| !bp.is_empty())
        .map(|bp| format!("modal-fullscreen-{bp}-down"));

    components
        .chain(fixed)
        .chain(responsive)
        .chain(themed)
        .chain(fullscreen)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(class: &str) -> bool {
        valid_classes().any(|name| name == class)
    }

    #[test]
    fn test_grid_classes() {
        for class in ["container", "container-xxl", "row", "col", "col-6", "col-md-4", "col-lg-auto"] {
            assert!(contains(class), "{class}");
        }
    }

    #[test]
    fn test_logical_spacing() {
        assert!(contains("ms-3"));
        assert!(contains("me-md-auto"));
        assert!(contains("px-xl-5"));
        assert!(!contains("ml-3"));
        assert!(!contains("pe-auto-1"));
    }

    #[test]
    fn test_themed_classes() {
        assert!(contains("btn-outline-danger"));
        assert!(contains("bg-primary"));
        assert!(!contains("badge-primary"));
    }

    #[test]
    fn test_generated_names_are_well_formed() {
        for class in valid_classes() {
            assert!(!class.is_empty());
            assert!(!class.starts_with('-') && !class.ends_with('-'), "{class}");
            assert!(!class.contains("--"), "{class}");
        }
    }
}
