//! Storage layer for the wishlist
//!
//! Loads the item source list from the built-in catalog or a JSON/YAML file
//! and validates it at the boundary. Writes are atomic.

pub mod catalog;
pub mod file_io;
pub mod init;

pub use catalog::{validate_items, Catalog, CatalogIssue, CatalogSource};
pub use file_io::{read_data, write_data_atomic, DataFormat};
pub use init::initialize_storage;
