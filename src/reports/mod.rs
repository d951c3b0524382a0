//! Reports module for the wishlist
//!
//! Builds the needed/bought report that every output (terminal, CSV, page
//! export) is rendered from.

pub mod wishlist;

pub use wishlist::{ItemReportRow, ProgressTone, Section, WishlistReport, NO_DESCRIPTION};
