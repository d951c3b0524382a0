//! CLI command for exports
//!
//! Writes a JSON/YAML snapshot or the static HTML page, to a file or stdout.

use crate::config::Settings;
use crate::error::{WishlistError, WishlistResult};
use crate::export::{export_html, export_json, export_yaml};
use crate::storage::Catalog;
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON snapshot with derived state and totals
    Json,
    /// YAML snapshot, human-readable
    Yaml,
    /// Static wishlist page
    Html,
}

/// Handle `export`
pub fn handle_export(
    catalog: &Catalog,
    settings: &Settings,
    format: ExportFormat,
    output: Option<PathBuf>,
    compact: bool,
) -> WishlistResult<()> {
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                WishlistError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(catalog, settings, format, compact, &mut writer)?;
            writer
                .flush()
                .map_err(|e| WishlistError::Export(e.to_string()))?;

            println!("Exported {} items to: {}", catalog.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(catalog, settings, format, compact, &mut writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    catalog: &Catalog,
    settings: &Settings,
    format: ExportFormat,
    compact: bool,
    writer: &mut W,
) -> WishlistResult<()> {
    match format {
        ExportFormat::Json => export_json(catalog, settings, writer, !compact),
        ExportFormat::Yaml => export_yaml(catalog, settings, writer),
        ExportFormat::Html => export_html(catalog, settings, writer),
    }
}
