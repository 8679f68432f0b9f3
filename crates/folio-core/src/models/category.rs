//! The fixed set of portfolio categories offered as filters.

use std::fmt;

/// A filterable portfolio category.
///
/// Feed items may carry arbitrary category strings; only these four are
/// exposed as filter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Photography,
    Motion,
    Design,
    ThreeDArt,
}

impl Category {
    /// All categories in filter-bar order.
    pub const ALL: [Category; 4] = [
        Category::Photography,
        Category::Motion,
        Category::Design,
        Category::ThreeDArt,
    ];

    /// The label used both in the feed and on the filter button.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Photography => "photography",
            Self::Motion => "motion",
            Self::Design => "design",
            Self::ThreeDArt => "3D_art",
        }
    }

    /// Look up a category from a label, ignoring ASCII case.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
