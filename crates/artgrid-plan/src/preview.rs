//! Live preview values.
//!
//! The preview is recomputed from scratch on every widget change. Each
//! call is a cheap linear pass, so there is no cancellation protocol: a
//! newer preview simply replaces the one on screen.

use artgrid_core::Selection;
use artgrid_layout::{compute_layout, GridParams};
use artgrid_naming::NamingFields;
use serde::Serialize;

use crate::PlanError;

/// What the preview panel displays.
///
/// The estimated document size is the raw engine bounds: the preview
/// intentionally reports unpadded bounds, while
/// [`build_plan`](crate::build_plan) adds the commit padding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    /// Sanitized composite document name.
    pub document_name: String,
    /// Number of selected artboards.
    pub artboard_count: usize,
    /// Estimated (width, height); `None` when nothing is selected.
    pub document_size: Option<(f64, f64)>,
    /// One bullet line per selected artboard.
    pub lines: Vec<String>,
}

impl Preview {
    /// The one-line summary, e.g.
    /// `"Artboards: 3 | Estimated Document: 2818×303 px"`.
    pub fn summary(&self) -> String {
        match self.document_size {
            Some((width, height)) => format!(
                "Artboards: {} | Estimated Document: {}×{} px",
                self.artboard_count, width, height
            ),
            None => "Artboards: 0 | Estimated Document: —".to_string(),
        }
    }
}

/// Compute the preview for the current widget state.
///
/// Uses the same layout function as the commit path, so the preview can
/// only drift from the created document by the documented commit padding.
pub fn render_preview(
    selection: &Selection,
    params: &GridParams,
    fields: &NamingFields,
) -> Result<Preview, PlanError> {
    let document_name = fields.document_name();

    if selection.is_empty() {
        return Ok(Preview {
            document_name,
            artboard_count: 0,
            document_size: None,
            lines: Vec::new(),
        });
    }

    let layout = compute_layout(selection, params)?;
    let lines = selection
        .iter()
        .map(|spec| format!("• {} — {}×{}", spec.display_name, spec.width, spec.height))
        .collect();

    Ok(Preview {
        document_name,
        artboard_count: selection.len(),
        document_size: Some((layout.document_width, layout.document_height)),
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use artgrid_core::Catalog;
    use crate::{build_plan, COMMIT_PADDING};

    fn fields() -> NamingFields {
        NamingFields::new("FALL2026", "TheEssentialEdit", "EMAIL", "V1")
    }

    #[test]
    fn test_empty_preview() {
        let preview = render_preview(&Selection::new(), &GridParams::default(), &fields()).unwrap();

        assert_eq!(preview.artboard_count, 0);
        assert_eq!(preview.document_size, None);
        assert!(preview.lines.is_empty());
        assert_eq!(preview.summary(), "Artboards: 0 | Estimated Document: —");
    }

    #[test]
    fn test_preview_lines_and_summary() {
        let catalog = Catalog::builtin();
        let selection = catalog.select_codes(vec!["DashboardCard", "BlogBanner"]);

        let preview = render_preview(&selection, &GridParams::default(), &fields()).unwrap();

        assert_eq!(preview.artboard_count, 2);
        assert_eq!(preview.lines[0], "• Dashboard Card — 318×203");
        assert_eq!(preview.lines[1], "• Blog Banner — 800×326");
        assert!(preview.summary().starts_with("Artboards: 2 | Estimated Document: "));
    }

    #[test]
    fn test_preview_name_is_sanitized() {
        let fields = NamingFields::new(" SPRING 2026 ", "A/B", "SALE", "V1");
        let preview = render_preview(&Selection::new(), &GridParams::default(), &fields).unwrap();
        assert_eq!(preview.document_name, "SPRING2026_A_B_SALE_V1");
    }

    #[test]
    fn test_preview_size_is_unpadded_commit_is_padded() {
        let catalog = Catalog::builtin();
        let selection = catalog.select_codes(vec!["HomepageDesktop", "HomepageMobile"]);
        let params = GridParams::default();

        let preview = render_preview(&selection, &params, &fields()).unwrap();
        let plan = build_plan(&selection, &params, &fields()).unwrap();

        let (preview_width, preview_height) = preview.document_size.unwrap();
        assert!((plan.width - (preview_width + COMMIT_PADDING)).abs() < 0.001);
        assert!((plan.height - (preview_height + COMMIT_PADDING)).abs() < 0.001);
    }

    #[test]
    fn test_preview_is_stable_across_calls() {
        let catalog = Catalog::builtin();
        let selection = catalog.select_codes(vec!["MediaScreen", "PrimaryEmail"]);
        let params = GridParams::default();

        let first = render_preview(&selection, &params, &fields()).unwrap();
        let second = render_preview(&selection, &params, &fields()).unwrap();
        assert_eq!(first, second);
    }
}
