//! Display formatting for terminal output
//!
//! Provides utilities for formatting wishlist rows and totals for terminal
//! display, including tables and progress bars.

pub mod item;
pub mod report;

pub use item::{format_item_details, format_item_table, format_totals};
pub use report::{format_bar, truncate};
