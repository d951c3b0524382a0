//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod catalog;
pub mod export;
pub mod items;
pub mod report;

pub use catalog::{handle_config, handle_init, handle_validate};
pub use export::{handle_export, ExportFormat};
pub use items::{handle_list, handle_show, handle_totals, ListFilter};
pub use report::handle_report;
