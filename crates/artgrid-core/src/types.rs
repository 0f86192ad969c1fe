//! Canvas preset and selection value types.

/// A named width×height canvas preset selectable by the user.
///
/// Presets are defined once in the [`Catalog`](crate::Catalog) and copied
/// into a [`Selection`] when checked. Dimensions are in document pixels and
/// must be positive; the layout engine rejects zero-sized presets rather
/// than clamping them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasSpec {
    /// Human-readable name shown in the host UI.
    pub display_name: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Stable short code identifying the preset.
    pub code: String,
}

impl CanvasSpec {
    /// Create a preset.
    pub fn new(
        display_name: impl Into<String>,
        width: u32,
        height: u32,
        code: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            width,
            height,
            code: code.into(),
        }
    }
}

/// An ordered sequence of canvas presets, in the exact order the user
/// checked them.
///
/// Insertion order determines placement order; the selection is never
/// sorted by size or name. The host rebuilds this value from widget state
/// on every query instead of mutating shared state in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    items: Vec<CanvasSpec>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a preset at the end of the selection.
    pub fn push(&mut self, spec: CanvasSpec) {
        self.items.push(spec);
    }

    /// Number of selected presets.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The selected presets in placement order.
    pub fn as_slice(&self) -> &[CanvasSpec] {
        &self.items
    }

    /// Iterate over the selected presets in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &CanvasSpec> {
        self.items.iter()
    }
}

impl From<Vec<CanvasSpec>> for Selection {
    fn from(items: Vec<CanvasSpec>) -> Self {
        Self { items }
    }
}

impl FromIterator<CanvasSpec> for Selection {
    fn from_iter<I: IntoIterator<Item = CanvasSpec>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a CanvasSpec;
    type IntoIter = std::slice::Iter<'a, CanvasSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
