//! Export module for the wishlist
//!
//! Provides export of the computed wishlist in multiple formats:
//! - JSON: Machine-readable snapshot with derived state and totals
//! - YAML: The same snapshot, human-readable
//! - HTML: A static, self-contained wishlist page

pub mod html;
pub mod json;
pub mod yaml;

pub use html::{export_html, render_page};
pub use json::{export_json, import_from_json, WishlistExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_yaml, import_from_yaml};
