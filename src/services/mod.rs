//! Service layer for the wishlist
//!
//! Pure calculations over the item list: per-item state, sorting and
//! partitioning, and totals. Nothing here performs I/O or keeps state
//! between calls.

pub mod collation;
pub mod item_state;
pub mod partition;
pub mod totals;
pub mod wishlist;

pub use collation::locale_compare;
pub use item_state::compute_item_state;
pub use partition::{is_bought, is_needed, partition, sort_items, ListedItem, WishlistView};
pub use totals::aggregate;
pub use wishlist::WishlistService;
