//! Data directory initialization
//!
//! Seeds the data directory with the built-in item list so it can be edited
//! by hand afterwards.

use crate::config::paths::WishlistPaths;
use crate::error::WishlistResult;

use super::catalog::Catalog;

/// Create the directory layout and write the default catalog
///
/// An existing item file is left untouched. Returns whether a catalog was
/// written.
pub fn initialize_storage(paths: &WishlistPaths) -> WishlistResult<bool> {
    paths.ensure_directories()?;

    let items_file = paths.items_file();
    if items_file.exists() {
        tracing::info!("Item file already exists at {}", items_file.display());
        return Ok(false);
    }

    Catalog::embedded()?.save(&items_file)?;
    tracing::info!("Wrote default item list to {}", items_file.display());
    Ok(true)
}
