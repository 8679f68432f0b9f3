//! Gallery item representation.

use std::fmt;

use super::media::{MediaAsset, MediaKind};

/// Aspect ratio used when the feed omits `<aspect_ratio>`.
pub const DEFAULT_ASPECT_RATIO: &str = "16/9";

// =============================================================================
// Media Type
// =============================================================================

/// Declared type of an item, from the feed's `<type>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaType {
    Still,
    #[default]
    Motion,
}

impl MediaType {
    /// Parse the `<type>` text. Surrounding whitespace is ignored.
    ///
    /// Anything other than `still` renders as a video, so it maps to
    /// [`MediaType::Motion`].
    pub fn from_feed(text: &str) -> Self {
        match text.trim() {
            "still" => Self::Still,
            _ => Self::Motion,
        }
    }

    /// Media kind used for a single-asset item.
    pub fn kind(self) -> MediaKind {
        match self {
            Self::Still => MediaKind::Image,
            Self::Motion => MediaKind::Video,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Still => write!(f, "still"),
            Self::Motion => write!(f, "motion"),
        }
    }
}

// =============================================================================
// Gallery Item
// =============================================================================

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub title: String,
    pub description: String,
    /// Media strings in display order.
    pub media: Vec<String>,
    pub media_type: MediaType,
    /// CSS aspect ratio, e.g. `"4/5"`.
    pub aspect_ratio: String,
    /// Primary categories.
    pub categories: Vec<String>,
    /// Secondary categories; they match filters but are not shown as badges.
    pub alt_categories: Vec<String>,
}

/// How an item's media should be laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemLayout {
    /// No media; the item is not rendered.
    Empty,
    /// One asset, whose kind follows the item's declared [`MediaType`].
    Single(MediaAsset),
    /// Several assets, each classified on its own.
    Carousel(Vec<MediaAsset>),
}

impl GalleryItem {
    pub fn has_media(&self) -> bool {
        !self.media.is_empty()
    }

    /// Check whether `category` is one of the item's primary or secondary
    /// categories (exact match).
    pub fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
            || self.alt_categories.iter().any(|c| c == category)
    }

    /// Badge text: primary categories joined by commas.
    pub fn category_label(&self) -> String {
        self.categories.join(",")
    }

    pub fn layout(&self) -> ItemLayout {
        match self.media.as_slice() {
            [] => ItemLayout::Empty,
            [only] => ItemLayout::Single(MediaAsset::new(self.media_type.kind(), only.as_str())),
            many => ItemLayout::Carousel(many.iter().map(MediaAsset::inferred).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(media: &[&str], media_type: MediaType) -> GalleryItem {
        GalleryItem {
            title: "Untitled".to_string(),
            description: String::new(),
            media: media.iter().map(|s| s.to_string()).collect(),
            media_type,
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            categories: vec!["design".to_string(), "motion".to_string()],
            alt_categories: vec!["photography".to_string()],
        }
    }

    #[test]
    fn test_media_type_from_feed() {
        assert_eq!(MediaType::from_feed("still"), MediaType::Still);
        assert_eq!(MediaType::from_feed("  still\n"), MediaType::Still);
        assert_eq!(MediaType::from_feed("motion"), MediaType::Motion);
        assert_eq!(MediaType::from_feed("gif"), MediaType::Motion);
    }

    #[test]
    fn test_single_layout_uses_declared_type() {
        // Declared type wins over the suffix heuristic for single assets.
        let layout = item(&["abc123"], MediaType::Still).layout();
        match layout {
            ItemLayout::Single(asset) => {
                assert_eq!(asset.kind, MediaKind::Image);
                assert_eq!(asset.url, "https://stream.mux.com/abc123.m3u8");
            }
            other => panic!("expected single layout, got {:?}", other),
        }
    }

    #[test]
    fn test_carousel_layout_infers_each_asset() {
        let layout = item(&["https://cdn/a.jpg", "vid42"], MediaType::Still).layout();
        let ItemLayout::Carousel(assets) = layout else {
            panic!("expected carousel layout");
        };
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].kind, MediaKind::Image);
        assert_eq!(assets[1].kind, MediaKind::Video);
    }

    #[test]
    fn test_empty_layout() {
        let gallery_item = item(&[], MediaType::Motion);
        assert!(!gallery_item.has_media());
        assert_eq!(gallery_item.layout(), ItemLayout::Empty);
    }

    #[test]
    fn test_in_category() {
        let gallery_item = item(&["a.jpg"], MediaType::Still);
        assert!(gallery_item.in_category("design"));
        assert!(gallery_item.in_category("photography"));
        assert!(!gallery_item.in_category("Design"));
        assert!(!gallery_item.in_category("3D_art"));
    }

    #[test]
    fn test_category_label() {
        assert_eq!(item(&[], MediaType::Still).category_label(), "design,motion");
    }
}
