//! Path management for the wishlist
//!
//! Provides XDG-compliant path resolution for configuration, item data, and
//! exports.
//!
//! ## Path Resolution Order
//!
//! 1. `WISHLIST_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/wishlist-cli` or `~/.config/wishlist-cli`
//! 3. Windows: `%APPDATA%\wishlist-cli`

use std::path::PathBuf;

use crate::error::WishlistError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "WISHLIST_CLI_DATA_DIR";

/// Manages all paths used by the wishlist
#[derive(Debug, Clone)]
pub struct WishlistPaths {
    /// Base directory for all wishlist data
    base_dir: PathBuf,
}

impl WishlistPaths {
    /// Create a new WishlistPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, WishlistError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create WishlistPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/wishlist-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/wishlist-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the default export directory (~/.config/wishlist-cli/exports/)
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the item catalog
    pub fn items_file(&self) -> PathBuf {
        self.data_dir().join("items.yaml")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), WishlistError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WishlistError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| WishlistError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| WishlistError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if the wishlist has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, WishlistError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                WishlistError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("wishlist-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, WishlistError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| WishlistError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("wishlist-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WishlistPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);

        let paths = WishlistPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WishlistPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.export_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WishlistPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.items_file(),
            temp_dir.path().join("data").join("items.yaml")
        );
    }
}
