//! Error types for the artgrid planner.

use thiserror::Error;

/// Top-level error type for the artgrid crates.
#[derive(Debug, Error)]
pub enum ArtgridError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Precondition violations reported by the layout engine.
///
/// These are caller errors: the engine fails fast on malformed parameters
/// instead of clamping to a default, since clamping masks layout bugs.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("columns per row must be at least 1, got {columns}")]
    InvalidColumns { columns: usize },

    #[error("spacing must be a non-negative finite number, got {spacing}")]
    NegativeSpacing { spacing: f64 },

    #[error("start offset must be non-negative and finite, got ({x}, {y})")]
    NegativeStart { x: f64, y: f64 },

    #[error("canvas '{name}' has non-positive size {width}x{height}")]
    InvalidCanvasSize {
        name: String,
        width: u32,
        height: u32,
    },
}
