//! Commit-time document plans.

use artgrid_core::{CanvasSpec, Selection};
use artgrid_layout::{compute_layout, GridParams, Placement};
use artgrid_naming::NamingFields;
use serde::Serialize;

use crate::PlanError;

/// Flat extra padding added to the document size at commit time only.
///
/// The layout engine's bounds carry the leading start margin but no
/// trailing margin; this constant is the plan layer's own, separately
/// applied step so nothing kisses the document edge. The preview reports
/// the unpadded engine bounds.
pub const COMMIT_PADDING: f64 = 50.0;

/// One artboard the host should create: its title and where it goes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtboardPlan {
    /// Artboard title, e.g. `"Dashboard Card (318x203)"`.
    pub title: String,
    /// Absolute position and size in document pixel space.
    pub placement: Placement,
}

/// Everything the host needs to create the document and its artboards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentPlan {
    /// Sanitized composite document name.
    pub name: String,
    /// Document width including commit padding.
    pub width: f64,
    /// Document height including commit padding.
    pub height: f64,
    /// Artboards in placement order.
    pub artboards: Vec<ArtboardPlan>,
}

/// The artboard title shown in the host's layer list.
pub fn artboard_title(spec: &CanvasSpec) -> String {
    format!("{} ({}x{})", spec.display_name, spec.width, spec.height)
}

/// Build the commit-time plan for a selection.
///
/// Runs the same layout computation as [`render_preview`](crate::render_preview)
/// with the same parameters. An empty selection is an error here (there is
/// nothing to create), while the preview treats it as a normal state.
pub fn build_plan(
    selection: &Selection,
    params: &GridParams,
    fields: &NamingFields,
) -> Result<DocumentPlan, PlanError> {
    if selection.is_empty() {
        return Err(PlanError::EmptySelection);
    }

    let layout = compute_layout(selection, params)?;

    let artboards = selection
        .iter()
        .zip(layout.placements.iter())
        .map(|(spec, placement)| ArtboardPlan {
            title: artboard_title(spec),
            placement: *placement,
        })
        .collect();

    Ok(DocumentPlan {
        name: fields.document_name(),
        width: layout.document_width + COMMIT_PADDING,
        height: layout.document_height + COMMIT_PADDING,
        artboards,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use artgrid_core::Catalog;

    fn fields() -> NamingFields {
        NamingFields::new("SPRING2026", "SpringBreakHits", "BANNER", "V2")
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        let result = build_plan(&Selection::new(), &GridParams::default(), &fields());
        assert!(matches!(result, Err(PlanError::EmptySelection)));
    }

    #[test]
    fn test_plan_matches_engine_bounds_plus_padding() {
        let catalog = Catalog::builtin();
        let selection =
            catalog.select_codes(vec!["DashboardCard", "DashboardDesktop", "DashboardMobile"]);
        let params = GridParams::default();

        let layout = compute_layout(&selection, &params).unwrap();
        let plan = build_plan(&selection, &params, &fields()).unwrap();

        assert!((plan.width - (layout.document_width + COMMIT_PADDING)).abs() < 0.001);
        assert!((plan.height - (layout.document_height + COMMIT_PADDING)).abs() < 0.001);
        assert_eq!(plan.artboards.len(), 3);
    }

    #[test]
    fn test_artboard_titles_and_order() {
        let catalog = Catalog::builtin();
        let selection = catalog.select_codes(vec!["BlogSocial", "DashboardCard"]);

        let plan = build_plan(&selection, &GridParams::default(), &fields()).unwrap();

        assert_eq!(plan.artboards[0].title, "Blog Social (1200x630)");
        assert_eq!(plan.artboards[1].title, "Dashboard Card (318x203)");
    }

    #[test]
    fn test_document_name_from_fields() {
        let catalog = Catalog::builtin();
        let selection = catalog.select_codes(vec!["PrimaryEmail"]);

        let plan = build_plan(&selection, &GridParams::default(), &fields()).unwrap();
        assert_eq!(plan.name, "SPRING2026_SpringBreakHits_BANNER_V2");
    }

    #[test]
    fn test_invalid_params_propagate() {
        let catalog = Catalog::builtin();
        let selection = catalog.select_codes(vec!["PrimaryEmail"]);
        let params = GridParams::default().with_columns(0);

        let result = build_plan(&selection, &params, &fields());
        assert!(matches!(result, Err(PlanError::Layout(_))));
    }
}
