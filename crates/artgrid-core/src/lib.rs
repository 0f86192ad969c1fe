//! Core types for the artgrid planner.
//!
//! This crate defines the vocabulary shared by the layout engine and the
//! plan builder: canvas presets, the ordered user selection, the builtin
//! preset catalog, and the error types.
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` on the
//! data types (used by hosts that supply the catalog as a JSON file).

pub mod catalog;
pub mod errors;
pub mod types;

pub use catalog::{Catalog, COLLECTIONS, PLATFORMS, SEASONS};
pub use errors::{ArtgridError, LayoutError};
pub use types::{CanvasSpec, Selection};
