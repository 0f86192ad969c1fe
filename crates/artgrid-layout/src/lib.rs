//! Grid layout computation for canvas selections.
//!
//! This crate places an ordered selection of canvas presets into a
//! fixed-column row-wrap grid and reports the enclosing document bounds.
//! The computation is a pure function of its arguments: the host calls it
//! once per preview tick and once more at commit time, and both calls are
//! guaranteed to produce identical results.
//!
//! # Example
//!
//! ```
//! use artgrid_core::Catalog;
//! use artgrid_layout::{compute_layout, GridParams};
//!
//! let catalog = Catalog::builtin();
//! let selection = catalog.select_codes(vec!["DashboardCard", "BlogSocial"]);
//! let result = compute_layout(&selection, &GridParams::default()).unwrap();
//!
//! assert_eq!(result.placements.len(), 2);
//! ```

mod grid;

pub use grid::{compute_layout, GridParams, LayoutResult, Placement};
