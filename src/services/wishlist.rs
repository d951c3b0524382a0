//! Wishlist service
//!
//! Entry point for callers holding a loaded catalog: everything here is
//! recomputed from the catalog's items on each call.

use crate::error::{WishlistError, WishlistResult};
use crate::models::{Item, Totals};
use crate::storage::Catalog;

use super::partition::{partition, sort_items, ListedItem, WishlistView};
use super::totals::aggregate;

/// Service for querying the wishlist
pub struct WishlistService<'a> {
    catalog: &'a Catalog,
}

impl<'a> WishlistService<'a> {
    /// Create a new wishlist service
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// The raw source items, in source order
    pub fn items(&self) -> &[Item] {
        self.catalog.items()
    }

    /// All items sorted by name with their ids
    pub fn listed(&self) -> Vec<ListedItem> {
        sort_items(self.items())
    }

    /// Needed and bought lists
    pub fn view(&self) -> WishlistView {
        partition(self.items())
    }

    /// Totals across the whole list
    pub fn totals(&self) -> Totals {
        aggregate(self.items())
    }

    /// Find an item by id, exact name, or unique partial name
    pub fn find(&self, query: &str) -> WishlistResult<ListedItem> {
        let query = query.trim();
        let listed = self.listed();

        if let Some(found) = listed.iter().find(|l| l.id == query) {
            return Ok(found.clone());
        }

        if let Some(found) = listed
            .iter()
            .find(|l| l.item.name.eq_ignore_ascii_case(query))
        {
            return Ok(found.clone());
        }

        let needle = query.to_lowercase();
        let mut matches = listed
            .into_iter()
            .filter(|l| l.item.name.to_lowercase().contains(&needle));

        match (matches.next(), matches.next()) {
            (Some(found), None) => Ok(found),
            (Some(_), Some(_)) => Err(WishlistError::Validation(format!(
                "'{}' matches more than one item; use the item id",
                query
            ))),
            _ => Err(WishlistError::item_not_found(query)),
        }
    }
}
