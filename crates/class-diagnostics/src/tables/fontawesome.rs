//! Font Awesome 5 icon names that were renamed in Font Awesome 6.
//!
//! Reference: https://docs.fontawesome.com/web/setup/upgrade/whats-changed

/// Style prefixes replaced by long-form style classes.
pub static STYLE_PREFIXES: &[(&str, &str)] = &[
    ("fas", "use fa-solid"),
    ("far", "use fa-regular"),
    ("fal", "use fa-light"),
    ("fad", "use fa-duotone"),
    ("fab", "use fa-brands"),
];

/// Renamed icons: old name, new name.
pub static RENAMED_ICONS: &[(&str, &str)] = &[
    ("fa-arrow-circle-down", "fa-circle-arrow-down"),
    ("fa-arrow-circle-left", "fa-circle-arrow-left"),
    ("fa-arrow-circle-right", "fa-circle-arrow-right"),
    ("fa-arrow-circle-up", "fa-circle-arrow-up"),
    ("fa-calendar-alt", "fa-calendar-days"),
    ("fa-check-circle", "fa-circle-check"),
    ("fa-chevron-circle-down", "fa-circle-chevron-down"),
    ("fa-chevron-circle-left", "fa-circle-chevron-left"),
    ("fa-chevron-circle-right", "fa-circle-chevron-right"),
    ("fa-chevron-circle-up", "fa-circle-chevron-up"),
    ("fa-cloud-download-alt", "fa-cloud-arrow-down"),
    ("fa-cloud-upload-alt", "fa-cloud-arrow-up"),
    ("fa-cog", "fa-gear"),
    ("fa-cogs", "fa-gears"),
    ("fa-comment-alt", "fa-message"),
    ("fa-compress-arrows-alt", "fa-minimize"),
    ("fa-cut", "fa-scissors"),
    ("fa-edit", "fa-pen-to-square"),
    ("fa-ellipsis-h", "fa-ellipsis"),
    ("fa-ellipsis-v", "fa-ellipsis-vertical"),
    ("fa-exchange-alt", "fa-right-left"),
    ("fa-exclamation-circle", "fa-circle-exclamation"),
    ("fa-exclamation-triangle", "fa-triangle-exclamation"),
    ("fa-expand-arrows-alt", "fa-maximize"),
    ("fa-external-link-alt", "fa-up-right-from-square"),
    ("fa-file-alt", "fa-file-lines"),
    ("fa-file-download", "fa-file-arrow-down"),
    ("fa-file-upload", "fa-file-arrow-up"),
    ("fa-first-aid", "fa-kit-medical"),
    ("fa-frown", "fa-face-frown"),
    ("fa-glass-martini", "fa-martini-glass-empty"),
    ("fa-globe-americas", "fa-earth-americas"),
    ("fa-grin", "fa-face-grin"),
    ("fa-hand-paper", "fa-hand"),
    ("fa-heart-broken", "fa-heart-crack"),
    ("fa-history", "fa-clock-rotate-left"),
    ("fa-home", "fa-house"),
    ("fa-hospital-alt", "fa-hospital"),
    ("fa-info-circle", "fa-circle-info"),
    ("fa-level-down-alt", "fa-turn-down"),
    ("fa-level-up-alt", "fa-turn-up"),
    ("fa-list-alt", "fa-rectangle-list"),
    ("fa-long-arrow-alt-down", "fa-down-long"),
    ("fa-long-arrow-alt-left", "fa-left-long"),
    ("fa-long-arrow-alt-right", "fa-right-long"),
    ("fa-long-arrow-alt-up", "fa-up-long"),
    ("fa-map-marker", "fa-location-pin"),
    ("fa-map-marker-alt", "fa-location-dot"),
    ("fa-medkit", "fa-suitcase-medical"),
    ("fa-meh", "fa-face-meh"),
    ("fa-minus-circle", "fa-circle-minus"),
    ("fa-mobile-alt", "fa-mobile-screen-button"),
    ("fa-money-bill-alt", "fa-money-bill-1"),
    ("fa-pause-circle", "fa-circle-pause"),
    ("fa-pencil-alt", "fa-pencil"),
    ("fa-phone-alt", "fa-phone-flip"),
    ("fa-play-circle", "fa-circle-play"),
    ("fa-plus-circle", "fa-circle-plus"),
    ("fa-poll", "fa-square-poll-vertical"),
    ("fa-question-circle", "fa-circle-question"),
    ("fa-redo", "fa-arrow-rotate-right"),
    ("fa-save", "fa-floppy-disk"),
    ("fa-search", "fa-magnifying-glass"),
    ("fa-search-minus", "fa-magnifying-glass-minus"),
    ("fa-search-plus", "fa-magnifying-glass-plus"),
    ("fa-shipping-fast", "fa-truck-fast"),
    ("fa-shopping-cart", "fa-cart-shopping"),
    ("fa-sign-in-alt", "fa-right-to-bracket"),
    ("fa-sign-out-alt", "fa-right-from-bracket"),
    ("fa-sliders-h", "fa-sliders"),
    ("fa-smile", "fa-face-smile"),
    ("fa-sort-alpha-down", "fa-arrow-down-a-z"),
    ("fa-sort-amount-down", "fa-arrow-down-wide-short"),
    ("fa-star-half-alt", "fa-star-half-stroke"),
    ("fa-stop-circle", "fa-circle-stop"),
    ("fa-sync", "fa-arrows-rotate"),
    ("fa-sync-alt", "fa-rotate"),
    ("fa-tachometer-alt", "fa-gauge-high"),
    ("fa-th", "fa-table-cells"),
    ("fa-th-large", "fa-table-cells-large"),
    ("fa-th-list", "fa-table-list"),
    ("fa-times", "fa-xmark"),
    ("fa-times-circle", "fa-circle-xmark"),
    ("fa-trash-alt", "fa-trash-can"),
    ("fa-trash-restore", "fa-trash-arrow-up"),
    ("fa-undo", "fa-arrow-rotate-left"),
    ("fa-unlock-alt", "fa-unlock-keyhole"),
    ("fa-user-alt", "fa-user-large"),
    ("fa-user-circle", "fa-circle-user"),
    ("fa-user-cog", "fa-user-gear"),
    ("fa-user-edit", "fa-user-pen"),
    ("fa-user-times", "fa-user-xmark"),
    ("fa-users-cog", "fa-users-gear"),
    ("fa-volume-down", "fa-volume-low"),
    ("fa-volume-mute", "fa-volume-xmark"),
    ("fa-volume-up", "fa-volume-high"),
    ("fa-window-close", "fa-rectangle-xmark"),
];

/// Every Font Awesome 5 class that changed, with its advice.
pub fn invalid_classes() -> impl Iterator<Item = (String, String)> {
    let prefixes = STYLE_PREFIXES
        .iter()
        .map(|(class, advice)| (class.to_string(), advice.to_string()));

    let icons = RENAMED_ICONS
        .iter()
        .map(|(old, new)| (old.to_string(), format!("use {new}")));

    prefixes.chain(icons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_renames_keep_prefix() {
        for (old, new) in RENAMED_ICONS {
            assert!(old.starts_with("fa-"), "{old}");
            assert!(new.starts_with("fa-"), "{new}");
            assert_ne!(old, new);
        }
    }

    #[test]
    fn test_advice() {
        let times = invalid_classes().find(|(class, _)| class == "fa-times");
        assert_eq!(
            times,
            Some(("fa-times".to_string(), "use fa-xmark".to_string()))
        );
    }
}
