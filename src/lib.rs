//! Wishlist - donation wishlist for the terminal
//!
//! This library provides the core functionality for the wishlist tool. It
//! takes a list of wanted items with prices and bought quantities, derives
//! what is still needed, and renders the result as a terminal report, CSV,
//! JSON, YAML or a static HTML page.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Items, money, and the derived state/totals
//! - `storage`: Item list loading and validation
//! - `services`: Item state calculator, sorting, partitioning, totals
//! - `reports`: The needed/bought report
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and HTML output
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use wishlist::services::WishlistService;
//! use wishlist::storage::Catalog;
//!
//! let catalog = Catalog::embedded()?;
//! let totals = WishlistService::new(&catalog).totals();
//! println!("still needed: {}", totals.remaining_total);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{WishlistError, WishlistResult};
