//! Sorting and needed/bought partitioning
//!
//! Items are stably sorted by name, numbered from 1 in sorted order, then
//! split into two disjoint lists: items with units still to buy, and items
//! that are fully bought.

use serde::{Deserialize, Serialize};

use crate::models::{Item, ItemState};

use super::collation::locale_compare;
use super::item_state::compute_item_state;

/// An item paired with its render key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListedItem {
    /// 1-based position in sorted order, as a string
    pub id: String,
    pub item: Item,
}

impl ListedItem {
    /// Derived state of the wrapped item
    pub fn state(&self) -> ItemState {
        compute_item_state(&self.item)
    }
}

/// The two halves of the wishlist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WishlistView {
    /// Items with at least one unit remaining, in sorted order
    pub needed: Vec<ListedItem>,
    /// Fully bought items, in sorted order
    pub bought: Vec<ListedItem>,
}

impl WishlistView {
    /// Number of items across both lists
    pub fn len(&self) -> usize {
        self.needed.len() + self.bought.len()
    }

    /// Whether both lists are empty
    pub fn is_empty(&self) -> bool {
        self.needed.is_empty() && self.bought.is_empty()
    }

    /// Iterate over all items in id order
    pub fn iter(&self) -> impl Iterator<Item = &ListedItem> {
        let mut all: Vec<&ListedItem> = self.needed.iter().chain(&self.bought).collect();
        all.sort_by_key(|listed| listed.id.parse::<usize>().unwrap_or(usize::MAX));
        all.into_iter()
    }
}

/// True iff any unit of the item is still unpurchased
pub fn is_needed(item: &Item) -> bool {
    compute_item_state(item).remaining > 0
}

/// True iff every desired unit has been purchased
pub fn is_bought(item: &Item) -> bool {
    compute_item_state(item).remaining == 0
}

/// Sort items by name and assign sequential ids
///
/// Ties keep their original relative order.
pub fn sort_items(items: &[Item]) -> Vec<ListedItem> {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by(|a, b| locale_compare(&a.name, &b.name));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, item)| ListedItem {
            id: (i + 1).to_string(),
            item: item.clone(),
        })
        .collect()
}

/// Sort, number, and split the item list
pub fn partition(items: &[Item]) -> WishlistView {
    let (needed, bought): (Vec<ListedItem>, Vec<ListedItem>) = sort_items(items)
        .into_iter()
        .partition(|listed| is_needed(&listed.item));

    WishlistView { needed, bought }
}
