//! The static preset catalog.
//!
//! Presets are grouped into named categories. Categories are presentation
//! grouping only; the layout engine sees a flat ordered [`Selection`].

use indexmap::IndexMap;

use crate::types::{CanvasSpec, Selection};

/// Season choices offered for document naming.
pub const SEASONS: &[&str] = &["SPRING2026", "SUMMER2026", "FALL2026", "WINTER2026"];

/// Collection choices offered for document naming.
pub const COLLECTIONS: &[&str] = &[
    "TheEssentialEdit",
    "SpringBreakHits",
    "SpringBreakOnShuffle",
];

/// Platform choices offered for document naming.
pub const PLATFORMS: &[&str] = &[
    "SALE", "EMAIL", "BLOG", "BANNER", "RETOUCH", "WEBSITE", "HOMEPAGES",
];

/// An ordered mapping from category name to canvas presets.
///
/// Category and preset order is declaration order, which is also the order
/// the host presents them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    categories: IndexMap<String, Vec<CanvasSpec>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The builtin catalog shipped with the tool.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.add_category(
            "BANNERS",
            vec![
                CanvasSpec::new("Dashboard Card", 318, 203, "DashboardCard"),
                CanvasSpec::new("Dashboard Desktop", 1600, 170, "DashboardDesktop"),
                CanvasSpec::new("Dashboard Mobile", 700, 170, "DashboardMobile"),
                CanvasSpec::new("Homepage Desktop", 1600, 550, "HomepageDesktop"),
                CanvasSpec::new("Homepage Mobile", 700, 800, "HomepageMobile"),
                CanvasSpec::new("Brand Banner Desktop", 1586, 380, "BrandBannerDesktop"),
                CanvasSpec::new("Brand Banner Mobile", 630, 340, "BrandBannerMobile"),
            ],
        );
        catalog.add_category(
            "EMAIL",
            vec![CanvasSpec::new("Primary", 700, 700, "PrimaryEmail")],
        );
        catalog.add_category(
            "BLOG",
            vec![
                CanvasSpec::new("Blog Banner", 800, 326, "BlogBanner"),
                CanvasSpec::new("Blog Social", 1200, 630, "BlogSocial"),
                CanvasSpec::new("Blog Thumbnail", 350, 263, "BlogThumbnail"),
            ],
        );
        catalog.add_category(
            "MEDIA SCREENS",
            vec![CanvasSpec::new("Media Screen", 1080, 1920, "MediaScreen")],
        );
        catalog
    }

    /// Add a category with its presets, after any existing categories.
    pub fn add_category(&mut self, name: impl Into<String>, presets: Vec<CanvasSpec>) {
        self.categories.insert(name.into(), presets);
    }

    /// Category names in declaration order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Presets of one category, if it exists.
    pub fn category(&self, name: &str) -> Option<&[CanvasSpec]> {
        self.categories.get(name).map(Vec::as_slice)
    }

    /// Iterate over all presets in catalog order.
    pub fn presets(&self) -> impl Iterator<Item = &CanvasSpec> {
        self.categories.values().flatten()
    }

    /// Look up a preset by its code.
    pub fn find_by_code(&self, code: &str) -> Option<&CanvasSpec> {
        self.presets().find(|spec| spec.code == code)
    }

    /// Build a selection from preset codes, preserving the given order.
    ///
    /// Codes that do not exist in the catalog are skipped; a stale code in
    /// host state is not a layout error.
    pub fn select_codes<'a, I>(&self, codes: I) -> Selection
    where
        I: IntoIterator<Item = &'a str>,
    {
        codes
            .into_iter()
            .filter_map(|code| self.find_by_code(code))
            .cloned()
            .collect()
    }
}
