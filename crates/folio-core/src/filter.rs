//! Category filtering for the gallery.
//!
//! The visible set is a pure function of the parsed items and the current
//! [`Selection`], so it can be recomputed (or memoized) freely.

use std::fmt;

use crate::models::{Category, GalleryItem};

/// Label of the unfiltered selection.
pub const ALL_LABEL: &str = "all";

/// The active category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No filtering.
    #[default]
    All,
    /// Items whose primary or secondary categories contain this label.
    Category(String),
}

impl Selection {
    /// Parse a filter label; `"all"` means no filtering.
    pub fn parse(label: &str) -> Self {
        if label == ALL_LABEL {
            Self::All
        } else {
            Self::Category(label.to_string())
        }
    }

    pub fn category(category: Category) -> Self {
        Self::Category(category.as_str().to_string())
    }

    /// Whether `label` is the currently selected category.
    pub fn is_active(&self, label: &str) -> bool {
        matches!(self, Self::Category(current) if current == label)
    }

    /// Selection after a filter button for `label` is pressed.
    ///
    /// Pressing the active category clears the filter; pressing any other
    /// category replaces the selection.
    pub fn toggled(&self, label: &str) -> Self {
        if self.is_active(label) {
            Self::All
        } else {
            Self::parse(label)
        }
    }

    /// In-place form of [`Selection::toggled`].
    pub fn toggle(&mut self, label: &str) {
        *self = self.toggled(label);
    }

    /// Whether an item is visible under this selection.
    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(label) => item.in_category(label),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_LABEL),
            Self::Category(label) => f.write_str(label),
        }
    }
}

/// Items visible under `selection`, in their original order.
pub fn filter_items<'a>(items: &'a [GalleryItem], selection: &Selection) -> Vec<&'a GalleryItem> {
    items.iter().filter(|item| selection.matches(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DEFAULT_ASPECT_RATIO, MediaType};

    fn item(title: &str, categories: &[&str], alt: &[&str]) -> GalleryItem {
        GalleryItem {
            title: title.to_string(),
            description: String::new(),
            media: vec!["img1.jpg".to_string()],
            media_type: MediaType::Still,
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
            alt_categories: alt.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn sample() -> Vec<GalleryItem> {
        vec![
            item("harbour", &["photography"], &[]),
            item("reel", &["motion"], &["design"]),
            item("poster", &["design"], &[]),
            item("untagged", &[], &[]),
            item("render", &["3D_art"], &["motion"]),
        ]
    }

    fn titles(items: &[&GalleryItem]) -> Vec<String> {
        items.iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn test_all_is_identity() {
        let items = sample();
        let visible = filter_items(&items, &Selection::All);
        assert_eq!(visible.len(), items.len());
        for (kept, original) in visible.iter().zip(&items) {
            assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn test_filter_primary_and_alt() {
        let items = sample();
        let visible = filter_items(&items, &Selection::parse("motion"));
        assert_eq!(titles(&visible), vec!["reel", "render"]);

        let visible = filter_items(&items, &Selection::parse("design"));
        assert_eq!(titles(&visible), vec!["reel", "poster"]);
    }

    #[test]
    fn test_filter_only_returns_matches() {
        let items = sample();
        for category in Category::ALL {
            let selection = Selection::category(category);
            for kept in filter_items(&items, &selection) {
                assert!(kept.in_category(category.as_str()));
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = sample();
        let selection = Selection::parse("design");
        let once: Vec<GalleryItem> = filter_items(&items, &selection)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_items(&once, &selection);
        assert_eq!(titles(&twice), vec!["reel", "poster"]);
        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn test_untagged_only_under_all() {
        let items = sample();
        for category in Category::ALL {
            let visible = filter_items(&items, &Selection::category(category));
            assert!(visible.iter().all(|i| i.title != "untagged"));
        }
        assert!(
            filter_items(&items, &Selection::All)
                .iter()
                .any(|i| i.title == "untagged")
        );
    }

    #[test]
    fn test_toggle_law() {
        let mut selection = Selection::default();
        selection.toggle("photography");
        assert_eq!(selection, Selection::Category("photography".to_string()));
        assert!(selection.is_active("photography"));
        selection.toggle("photography");
        assert_eq!(selection, Selection::All);

        let items = sample();
        assert_eq!(
            filter_items(&items, &selection).len(),
            filter_items(&items, &Selection::All).len()
        );
    }

    #[test]
    fn test_toggle_switches_category() {
        let selection = Selection::parse("motion").toggled("design");
        assert_eq!(selection, Selection::parse("design"));
    }

    #[test]
    fn test_parse_all() {
        assert_eq!(Selection::parse("all"), Selection::All);
        assert_eq!(Selection::All.to_string(), "all");
        assert_eq!(Selection::parse("design").to_string(), "design");
    }

    #[test]
    fn test_single_photography_item() {
        let items = vec![item("img", &["photography"], &[])];
        assert_eq!(filter_items(&items, &Selection::parse("photography")).len(), 1);
        assert!(filter_items(&items, &Selection::parse("motion")).is_empty());
        assert_eq!(filter_items(&items, &Selection::All).len(), 1);
    }
}
