//! Configuration module for the wishlist
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::WishlistPaths;
pub use settings::Settings;
