//! User settings for the wishlist
//!
//! Manages presentation preferences: page title, currency convention,
//! donation link, and an optional item file override.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::WishlistPaths;
use crate::error::WishlistError;
use crate::models::CurrencyFormat;

/// User settings for the wishlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Title shown above the wishlist
    #[serde(default = "default_title")]
    pub title: String,

    /// Currency convention used for every amount
    #[serde(default)]
    pub currency: CurrencyFormat,

    /// Item file to load instead of the data directory catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_file: Option<PathBuf>,

    /// Donation link shown on the exported page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donate_url: Option<String>,

    /// Label of the donation link
    #[serde(default = "default_donate_label")]
    pub donate_label: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_title() -> String {
    "Wishlist".to_string()
}

fn default_donate_label() -> String {
    "Donate".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            title: default_title(),
            currency: CurrencyFormat::default(),
            items_file: None,
            donate_url: None,
            donate_label: default_donate_label(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &WishlistPaths) -> Result<Self, WishlistError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                WishlistError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WishlistError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            tracing::debug!("Loaded settings from {}", settings_path.display());
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WishlistPaths) -> Result<(), WishlistError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            WishlistError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            WishlistError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Resolve which item file to load, if any
    ///
    /// A command-line path wins over the settings override, which wins over
    /// the data directory catalog. `None` means the embedded default list.
    pub fn resolve_items_file(
        &self,
        paths: &WishlistPaths,
        cli_override: Option<PathBuf>,
    ) -> Option<PathBuf> {
        cli_override
            .or_else(|| self.items_file.clone())
            .or_else(|| Some(paths.items_file()).filter(|p| p.exists()))
    }
}
