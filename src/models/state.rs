//! Derived per-item state and list-wide totals
//!
//! Neither type is ever stored; both are recomputed from the item list on
//! every render.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Clamped quantities and money totals derived from one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemState {
    /// Desired quantity (defaulted)
    pub qty: u32,
    /// Bought quantity, clamped to `0..=qty`
    pub bought: u32,
    /// `qty - bought`
    pub remaining: u32,
    /// `bought == qty`
    pub fully_bought: bool,
    /// `price * qty`
    pub line_total: Money,
    /// `price * bought`
    pub bought_total: Money,
    /// `price * remaining`
    pub remaining_total: Money,
}

impl ItemState {
    /// Purchase progress as a whole percentage
    pub fn progress_percent(&self) -> u32 {
        let pct = f64::from(self.bought) / f64::from(self.qty.max(1)) * 100.0;
        pct.round() as u32
    }

    /// Whether any unit is still unpurchased
    pub fn is_needed(&self) -> bool {
        self.remaining > 0
    }
}

/// Aggregate sums across every item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub total_qty: u64,
    pub bought_qty: u64,
    pub remaining_qty: u64,
    pub total: Money,
    pub bought_total: Money,
    pub remaining_total: Money,
}

impl Totals {
    /// Fold one item's state into the running totals
    pub fn add_state(&mut self, state: &ItemState) {
        self.total_qty += u64::from(state.qty);
        self.bought_qty += u64::from(state.bought);
        self.remaining_qty += u64::from(state.remaining);
        self.total += state.line_total;
        self.bought_total += state.bought_total;
        self.remaining_total += state.remaining_total;
    }

    /// Combine two partial totals
    pub fn merge(mut self, other: Totals) -> Totals {
        self.total_qty += other.total_qty;
        self.bought_qty += other.bought_qty;
        self.remaining_qty += other.remaining_qty;
        self.total += other.total;
        self.bought_total += other.bought_total;
        self.remaining_total += other.remaining_total;
        self
    }

    /// Bought and remaining parts add up to the whole
    pub fn is_consistent(&self) -> bool {
        self.total_qty == self.bought_qty + self.remaining_qty
            && self.total == self.bought_total + self.remaining_total
    }

    /// Overall purchase progress as a whole percentage
    pub fn progress_percent(&self) -> u32 {
        let pct = self.bought_qty as f64 / self.total_qty.max(1) as f64 * 100.0;
        pct.round() as u32
    }
}
