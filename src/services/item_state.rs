//! Item state calculation
//!
//! Maps a raw item to its clamped quantities and money totals. Total over
//! every integer input: an inconsistent `bought_qty` is clamped, never
//! rejected.

use crate::models::{Item, ItemState};

/// Derive the state of a single item
pub fn compute_item_state(item: &Item) -> ItemState {
    let qty = item.desired_qty();
    let bought = item.bought_qty.clamp(0, i64::from(qty)) as u32;
    let remaining = qty.saturating_sub(bought);

    ItemState {
        qty,
        bought,
        remaining,
        fully_bought: bought == qty,
        line_total: item.price * qty,
        bought_total: item.price * bought,
        remaining_total: item.price * remaining,
    }
}
