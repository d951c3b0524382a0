//! CLI commands for the item catalog
//!
//! Validating item files and seeding the data directory.

use std::path::Path;

use crate::config::{Settings, WishlistPaths};
use crate::error::WishlistResult;
use crate::storage::{initialize_storage, Catalog};

/// Handle `validate`: load a catalog and report what was found
pub fn handle_validate(path: Option<&Path>, strict: bool) -> WishlistResult<()> {
    let catalog = Catalog::load_or_embedded(path, strict)?;

    println!(
        "{}: {} items OK",
        catalog.source(),
        catalog.len()
    );

    if !catalog.issues().is_empty() {
        println!();
        println!("{} item(s) will be clamped:", catalog.issues().len());
        for issue in catalog.issues() {
            println!("  - {}", issue);
        }
    }

    Ok(())
}

/// Handle `init`: write settings and the default item list
pub fn handle_init(paths: &WishlistPaths, settings: &Settings) -> WishlistResult<()> {
    println!("Initializing wishlist at: {}", paths.base_dir().display());

    let written = initialize_storage(paths)?;
    settings.save(paths)?;

    if written {
        println!("Default item list written to: {}", paths.items_file().display());
    } else {
        println!(
            "Keeping existing item list at: {}",
            paths.items_file().display()
        );
    }
    println!("Initialization complete!");
    Ok(())
}

/// Handle `config`: show paths and settings
pub fn handle_config(paths: &WishlistPaths, settings: &Settings) -> WishlistResult<()> {
    println!("Wishlist Configuration");
    println!("======================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Items file:       {}", paths.items_file().display());
    println!();
    println!("Settings:");
    println!("  Title:          {}", settings.title);
    println!("  Currency:       {}", settings.currency.symbol);
    println!(
        "  Items override: {}",
        settings
            .items_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string())
    );
    println!(
        "  Donate link:    {}",
        settings.donate_url.as_deref().unwrap_or("(none)")
    );
    Ok(())
}
