//! Document plans and live previews.
//!
//! This crate is the boundary between the pure computation crates and a
//! host document editor. The host gathers widget state into a
//! [`Selection`](artgrid_core::Selection), [`GridParams`](artgrid_layout::GridParams),
//! and [`NamingFields`](artgrid_naming::NamingFields); this crate turns
//! those into plain values the host can render or replay as creation
//! calls:
//!
//! - [`render_preview`]: the live preview text, recomputed on every
//!   widget change.
//! - [`build_plan`]: the commit-time [`DocumentPlan`] with document name,
//!   padded document size, and one named placement per artboard.
//!
//! Both entry points run the same layout engine with the same parameters,
//! so the preview never drifts from what gets created. A host-side
//! creation failure cannot desynchronize anything here; there is no state
//! to corrupt.

mod config;
mod plan;
mod preview;

pub use config::load_catalog;
pub use plan::{artboard_title, build_plan, ArtboardPlan, DocumentPlan, COMMIT_PADDING};
pub use preview::{render_preview, Preview};

use thiserror::Error;

/// Errors from plan building and catalog loading.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Commit was requested with nothing selected.
    #[error("no canvases selected")]
    EmptySelection,

    /// The layout engine rejected its parameters.
    #[error(transparent)]
    Layout(#[from] artgrid_core::LayoutError),

    /// A catalog configuration file could not be parsed.
    #[error("invalid catalog: {0}")]
    Json(#[from] serde_json::Error),
}
