//! Catalog configuration loading.
//!
//! The builtin catalog covers the shipped presets; hosts can also supply
//! their own catalog as a JSON document mapping category names to preset
//! lists, in declaration order:
//!
//! ```json
//! {
//!     "categories": {
//!         "BANNERS": [
//!             {"display_name": "Dashboard Card", "width": 318,
//!              "height": 203, "code": "DashboardCard"}
//!         ]
//!     }
//! }
//! ```

use artgrid_core::Catalog;

use crate::PlanError;

/// Parse a catalog from its JSON representation.
///
/// Category and preset order in the file is preserved.
pub fn load_catalog(json: &str) -> Result<Catalog, PlanError> {
    Ok(serde_json::from_str(json)?)
}
