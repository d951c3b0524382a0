//! Core data models for the wishlist
//!
//! Items as they come from the source list, plus the value types derived
//! from them: per-item state and list-wide totals.

pub mod item;
pub mod money;
pub mod state;

pub use item::{Item, ItemValidationError, DEFAULT_QTY};
pub use money::{CurrencyFormat, Money, MoneyParseError, SymbolPosition};
pub use state::{ItemState, Totals};
