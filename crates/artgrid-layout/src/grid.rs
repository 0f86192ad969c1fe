//! Row-wrap grid placement.
//!
//! Presets are placed left to right in input order. After
//! `columns_per_row` placements the cursor wraps to a new row whose offset
//! is the tallest preset of the finished row plus the spacing. There is no
//! rotation, shelf fitting, or row balancing; the walk is a single O(n)
//! pass over the selection.

use artgrid_core::{CanvasSpec, LayoutError, Selection};

/// Parameters for one grid layout invocation.
///
/// Preview and commit must use the same parameter values; the host holds
/// one `GridParams` and passes it to both calls.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridParams {
    /// Number of presets placed per row before wrapping.
    pub columns_per_row: usize,
    /// Left margin of the first column, in pixels.
    pub start_x: f64,
    /// Top margin of the first row, in pixels.
    pub start_y: f64,
    /// Gap between presets, both horizontally and vertically, in pixels.
    pub spacing: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            columns_per_row: 3,
            start_x: 50.0,
            start_y: 50.0,
            spacing: 50.0,
        }
    }
}

impl GridParams {
    /// Set the row capacity.
    pub fn with_columns(mut self, columns_per_row: usize) -> Self {
        self.columns_per_row = columns_per_row;
        self
    }

    /// Set the start offsets.
    pub fn with_start(mut self, start_x: f64, start_y: f64) -> Self {
        self.start_x = start_x;
        self.start_y = start_y;
        self
    }

    /// Set the gap between presets.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Check the parameter preconditions.
    ///
    /// Malformed parameters are rejected rather than clamped; silent
    /// clamping has masked layout bugs before.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.columns_per_row < 1 {
            return Err(LayoutError::InvalidColumns {
                columns: self.columns_per_row,
            });
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(LayoutError::NegativeSpacing {
                spacing: self.spacing,
            });
        }
        let starts_valid = self.start_x.is_finite()
            && self.start_y.is_finite()
            && self.start_x >= 0.0
            && self.start_y >= 0.0;
        if !starts_valid {
            return Err(LayoutError::NegativeStart {
                x: self.start_x,
                y: self.start_y,
            });
        }
        Ok(())
    }
}

/// Absolute top-left position and size of one placed preset, in document
/// pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    /// The right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// The bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Output of one layout invocation.
///
/// `placements` has the same order and length as the input selection.
/// The document size is the tight bounding box of all placements plus the
/// single leading start margin; no trailing margin is added here (the plan
/// layer applies its own commit padding as a separate step).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutResult {
    pub placements: Vec<Placement>,
    pub document_width: f64,
    pub document_height: f64,
}

/// Compute placements and document bounds for a selection.
///
/// Pure and deterministic: identical arguments produce identical results,
/// so the preview and commit paths call this one function instead of
/// carrying two implementations that could drift apart.
///
/// An empty selection is not an error; it yields no placements and bounds
/// that collapse to the start offsets, which the caller treats as "nothing
/// to create".
pub fn compute_layout(
    selection: &Selection,
    params: &GridParams,
) -> Result<LayoutResult, LayoutError> {
    params.validate()?;
    for spec in selection {
        validate_spec(spec)?;
    }

    let mut x = params.start_x;
    let mut y = params.start_y;
    let mut column = 0;
    let mut row_height = 0.0_f64;
    let mut right_most = 0.0_f64;
    let mut bottom_most = 0.0_f64;
    let mut placements = Vec::with_capacity(selection.len());

    for spec in selection {
        let width = f64::from(spec.width);
        let height = f64::from(spec.height);

        placements.push(Placement {
            x,
            y,
            width,
            height,
        });

        right_most = right_most.max(x + width);
        bottom_most = bottom_most.max(y + height);
        row_height = row_height.max(height);

        column += 1;
        if column >= params.columns_per_row {
            // Row break: wrap below the tallest preset of this row.
            x = params.start_x;
            y += row_height + params.spacing;
            column = 0;
            row_height = 0.0;
        } else {
            x += width + params.spacing;
        }
    }

    Ok(LayoutResult {
        placements,
        document_width: right_most + params.start_x,
        document_height: bottom_most + params.start_y,
    })
}

fn validate_spec(spec: &CanvasSpec) -> Result<(), LayoutError> {
    if spec.width == 0 || spec.height == 0 {
        return Err(LayoutError::InvalidCanvasSize {
            name: spec.display_name.clone(),
            width: spec.width,
            height: spec.height,
        });
    }
    Ok(())
}
