//! CLI command for the wishlist report

use crate::config::Settings;
use crate::error::{WishlistError, WishlistResult};
use crate::reports::WishlistReport;
use crate::storage::Catalog;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Handle `report`: print to the terminal or write CSV
pub fn handle_report(
    catalog: &Catalog,
    settings: &Settings,
    output: Option<PathBuf>,
) -> WishlistResult<()> {
    let report = WishlistReport::generate(catalog, settings.title.clone());

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            WishlistError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        writer
            .flush()
            .map_err(|e| WishlistError::Export(e.to_string()))?;
        println!("Wishlist report exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(&settings.currency));
    }

    Ok(())
}
