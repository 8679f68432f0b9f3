//! Per-category accent colors.
//!
//! Filter buttons and entry badges share one palette. Labels are matched
//! case-insensitively; anything that is not exactly one known category
//! (including a multi-category badge such as `design,motion`) gets the
//! neutral accent.

use folio_core::Category;

stylance::import_crate_style!(css, "src/components/accent.module.css");

/// CSS class carrying the accent for a category.
pub fn for_category(category: Category) -> &'static str {
    match category {
        Category::Photography => css::photography,
        Category::Motion => css::motion,
        Category::Design => css::design,
        Category::ThreeDArt => css::threeDArt,
    }
}

/// CSS class for an arbitrary category label.
pub fn for_label(label: &str) -> &'static str {
    Category::from_label(label)
        .map(for_category)
        .unwrap_or(css::neutral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(for_label("photography"), css::photography);
        assert_eq!(for_label("3d_art"), css::threeDArt);
        assert_eq!(for_label("Design"), css::design);
    }

    #[test]
    fn test_unknown_and_joined_labels_are_neutral() {
        assert_eq!(for_label("sculpture"), css::neutral);
        assert_eq!(for_label("design,motion"), css::neutral);
        assert_eq!(for_label(""), css::neutral);
    }
}
