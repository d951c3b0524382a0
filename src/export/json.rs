//! JSON Export functionality
//!
//! Exports the computed wishlist (items with derived state, plus totals) as
//! a versioned snapshot.

use crate::config::Settings;
use crate::error::{WishlistError, WishlistResult};
use crate::models::{CurrencyFormat, Item, ItemState, Totals};
use crate::reports::Section;
use crate::services::{aggregate, compute_item_state, WishlistService};
use crate::storage::Catalog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One item in the snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedItem {
    /// 1-based sorted position
    pub id: String,
    pub section: Section,
    #[serde(flatten)]
    pub item: Item,
    pub state: ItemState,
}

/// Full wishlist export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub title: String,

    /// Currency convention the amounts are meant to be shown in
    pub currency: CurrencyFormat,

    /// Items in sorted order
    pub items: Vec<ExportedItem>,

    pub totals: Totals,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub item_count: usize,
    pub needed_count: usize,
    pub bought_count: usize,
    /// Where the items were loaded from
    pub source: String,
}

impl WishlistExport {
    /// Create a new export from a catalog
    pub fn from_catalog(catalog: &Catalog, settings: &Settings) -> Self {
        let service = WishlistService::new(catalog);
        let view = service.view();

        let mut items: Vec<ExportedItem> = view
            .needed
            .iter()
            .map(|l| (l, Section::Needed))
            .chain(view.bought.iter().map(|l| (l, Section::Bought)))
            .map(|(listed, section)| ExportedItem {
                id: listed.id.clone(),
                section,
                item: listed.item.clone(),
                state: listed.state(),
            })
            .collect();
        items.sort_by_key(|e| e.id.parse::<usize>().unwrap_or(usize::MAX));

        let metadata = ExportMetadata {
            item_count: items.len(),
            needed_count: view.needed.len(),
            bought_count: view.bought.len(),
            source: catalog.source().to_string(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            title: settings.title.clone(),
            currency: settings.currency.clone(),
            items,
            totals: service.totals(),
            metadata,
        }
    }

    /// Validate the export structure
    ///
    /// Recomputes every derived value from the exported items and checks it
    /// against what was written.
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        for exported in &self.items {
            let state = compute_item_state(&exported.item);
            if state != exported.state {
                return Err(format!(
                    "Item {} ({}) has a stale state",
                    exported.id, exported.item.name
                ));
            }

            let expected = if state.remaining > 0 {
                Section::Needed
            } else {
                Section::Bought
            };
            if exported.section != expected {
                return Err(format!(
                    "Item {} ({}) is in the wrong section",
                    exported.id, exported.item.name
                ));
            }
        }

        let totals = aggregate(self.items.iter().map(|e| &e.item));
        if totals != self.totals {
            return Err("Totals do not match the exported items".to_string());
        }

        if self.metadata.item_count != self.items.len()
            || self.metadata.needed_count + self.metadata.bought_count != self.items.len()
        {
            return Err("Item counts do not match the exported items".to_string());
        }

        Ok(())
    }
}

/// Export the wishlist to JSON
pub fn export_json<W: Write>(
    catalog: &Catalog,
    settings: &Settings,
    writer: &mut W,
    pretty: bool,
) -> WishlistResult<()> {
    let export = WishlistExport::from_catalog(catalog, settings);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| WishlistError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| WishlistError::Export(e.to_string()))?;
    tracing::debug!("Exported {} items as JSON", export.items.len());

    Ok(())
}

/// Read back a JSON export
pub fn import_from_json(json_str: &str) -> WishlistResult<WishlistExport> {
    let export: WishlistExport = serde_json::from_str(json_str)?;
    export.validate().map_err(WishlistError::Validation)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_snapshot() {
        let catalog = Catalog::embedded().unwrap();
        let export = WishlistExport::from_catalog(&catalog, &Settings::default());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.items.len(), 8);
        assert_eq!(export.metadata.needed_count, 1);
        assert_eq!(export.metadata.bought_count, 7);
        assert_eq!(export.metadata.source, "built-in list");
        assert_eq!(export.items[0].id, "1");
        assert_eq!(export.items[6].section, Section::Needed);
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = Catalog::embedded().unwrap();
        let mut output = Vec::new();
        export_json(&catalog, &Settings::default(), &mut output, true).unwrap();

        let json = String::from_utf8(output).unwrap();
        assert!(json.contains("\"schema_version\": \"1.0.0\""));
        assert!(json.contains("\"remaining_total\": 3192.0"));

        let imported = import_from_json(&json).unwrap();
        assert_eq!(imported.totals.total.cents(), 797129);
    }

    #[test]
    fn test_validate_detects_tampering() {
        let catalog = Catalog::embedded().unwrap();
        let mut export = WishlistExport::from_catalog(&catalog, &Settings::default());
        export.items[0].item.bought_qty = 0;

        assert!(export.validate().is_err());
    }

    #[test]
    fn test_validate_schema_version() {
        let catalog = Catalog::embedded().unwrap();
        let mut export = WishlistExport::from_catalog(&catalog, &Settings::default());
        export.schema_version = "0.1.0".into();

        assert!(export
            .validate()
            .unwrap_err()
            .contains("Schema version mismatch"));
    }
}
