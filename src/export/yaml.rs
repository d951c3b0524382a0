//! YAML Export functionality
//!
//! Same snapshot as the JSON export, in a hand-editable format.

use crate::config::Settings;
use crate::error::{WishlistError, WishlistResult};
use crate::export::json::WishlistExport;
use crate::storage::Catalog;
use std::io::Write;

/// Export the wishlist to YAML format
pub fn export_yaml<W: Write>(
    catalog: &Catalog,
    settings: &Settings,
    writer: &mut W,
) -> WishlistResult<()> {
    let export = WishlistExport::from_catalog(catalog, settings);

    writeln!(writer, "# Wishlist Export: {}", export.title)
        .map_err(|e| WishlistError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| WishlistError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| WishlistError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| WishlistError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| WishlistError::Export(e.to_string()))?;

    tracing::debug!("Exported {} items as YAML", export.items.len());
    Ok(())
}

/// Import from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> WishlistResult<WishlistExport> {
    let export: WishlistExport =
        serde_yaml::from_str(yaml_str).map_err(|e| WishlistError::Yaml(e.to_string()))?;

    export.validate().map_err(WishlistError::Validation)?;

    Ok(export)
}
