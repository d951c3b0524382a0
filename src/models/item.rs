//! Wishlist item model
//!
//! An item is one entry in the source list: what it costs, how many are
//! wanted and how many have already been bought. Items are read once and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Desired quantity used when an item does not specify one
pub const DEFAULT_QTY: u32 = 1;

/// A single wishlist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, also the sort key
    pub name: String,

    /// Price of a single unit
    pub price: Money,

    /// Image path or URL
    #[serde(default)]
    pub image: String,

    /// Where the item can be bought
    #[serde(default, alias = "buyUrl")]
    pub buy_url: String,

    /// Desired quantity (defaults to 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<u32>,

    /// Quantity already bought, as supplied by the source
    ///
    /// Not guaranteed to lie within `0..=qty`.
    #[serde(default, alias = "boughtQty")]
    pub bought_qty: i64,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Item {
    /// Create a new item with one unit wanted and none bought
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
            image: String::new(),
            buy_url: String::new(),
            qty: None,
            bought_qty: 0,
            description: None,
        }
    }

    /// Set the desired quantity
    pub fn with_qty(mut self, qty: u32) -> Self {
        self.qty = Some(qty);
        self
    }

    /// Set the bought quantity
    pub fn with_bought(mut self, bought_qty: i64) -> Self {
        self.bought_qty = bought_qty;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image path
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the purchase link
    pub fn with_buy_url(mut self, buy_url: impl Into<String>) -> Self {
        self.buy_url = buy_url.into();
        self
    }

    /// Desired quantity with the default applied
    pub fn desired_qty(&self) -> u32 {
        self.qty.unwrap_or(DEFAULT_QTY)
    }

    /// Whether the raw bought quantity lies outside `0..=desired_qty`
    pub fn bought_out_of_range(&self) -> bool {
        self.bought_qty < 0 || self.bought_qty > i64::from(self.desired_qty())
    }

    /// Validate the record before it reaches the calculator
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }

        if self.name.len() > 200 {
            return Err(ItemValidationError::NameTooLong(self.name.len()));
        }

        if self.price.is_negative() {
            return Err(ItemValidationError::NegativePrice(self.price));
        }

        if self.qty == Some(0) {
            return Err(ItemValidationError::ZeroQuantity);
        }

        if self.price.checked_mul(self.desired_qty()).is_none() {
            return Err(ItemValidationError::LineTotalOverflow(self.price));
        }

        Ok(())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} @ {}", self.desired_qty(), self.name, self.price)
    }
}

/// Validation errors for items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativePrice(Money),
    ZeroQuantity,
    LineTotalOverflow(Money),
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Item name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Item name too long ({} chars, max 200)", len)
            }
            Self::NegativePrice(price) => write!(f, "Item price cannot be negative ({})", price),
            Self::ZeroQuantity => write!(f, "Desired quantity must be at least 1"),
            Self::LineTotalOverflow(price) => {
                write!(f, "Item price {} times quantity is too large", price)
            }
        }
    }
}

impl std::error::Error for ItemValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = Item::new("MSI PRO B760-P DDR4 II", Money::from_cents(9900));
        assert_eq!(item.qty, None);
        assert_eq!(item.desired_qty(), 1);
        assert_eq!(item.bought_qty, 0);
        assert!(item.description.is_none());
    }

    #[test]
    fn test_bought_out_of_range() {
        let item = Item::new("Cable", Money::from_cents(1599)).with_qty(4);
        assert!(!item.clone().with_bought(4).bought_out_of_range());
        assert!(!item.clone().with_bought(0).bought_out_of_range());
        assert!(item.clone().with_bought(5).bought_out_of_range());
        assert!(item.with_bought(-1).bought_out_of_range());
    }

    #[test]
    fn test_validation() {
        let item = Item::new("Valid", Money::from_cents(100));
        assert!(item.validate().is_ok());

        let unnamed = Item::new("  ", Money::from_cents(100));
        assert_eq!(unnamed.validate(), Err(ItemValidationError::EmptyName));

        let negative = Item::new("Refund", Money::from_cents(-100));
        assert_eq!(
            negative.validate(),
            Err(ItemValidationError::NegativePrice(Money::from_cents(-100)))
        );

        let zero = Item::new("Nothing", Money::from_cents(100)).with_qty(0);
        assert_eq!(zero.validate(), Err(ItemValidationError::ZeroQuantity));
    }

    #[test]
    fn test_validation_rejects_overflowing_line_total() {
        let price = Money::from_cents(i64::MAX / 2 + 1);
        let single = Item::new("Big", price);
        assert!(single.validate().is_ok());

        let double = single.with_qty(2);
        assert_eq!(
            double.validate(),
            Err(ItemValidationError::LineTotalOverflow(price))
        );
    }

    #[test]
    fn test_builder_sets_presentation_fields() {
        let item = Item::new("Intel Core i7-12700K", Money::from_cents(31049))
            .with_description("12 cores")
            .with_image("/products/cpu.avif")
            .with_buy_url("https://example.com/cpu");

        assert_eq!(item.description.as_deref(), Some("12 cores"));
        assert_eq!(item.image, "/products/cpu.avif");
        assert_eq!(item.buy_url, "https://example.com/cpu");

        let yaml = serde_yaml::to_string(&item).unwrap();
        let back: Item = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_deserialize_source_field_names() {
        let json = r#"{
            "name": "Corsair RM750x, 750 Watt PSU",
            "price": 149.0,
            "image": "/products/psu.webp",
            "buyUrl": "https://example.com/psu",
            "qty": 1,
            "boughtQty": 1
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.price.cents(), 14900);
        assert_eq!(item.buy_url, "https://example.com/psu");
        assert_eq!(item.bought_qty, 1);
        assert!(item.description.is_none());
    }

    #[test]
    fn test_deserialize_missing_quantities() {
        let item: Item = serde_yaml::from_str("name: Case\nprice: 224.9\n").unwrap();
        assert_eq!(item.qty, None);
        assert_eq!(item.desired_qty(), 1);
        assert_eq!(item.bought_qty, 0);
        assert_eq!(item.price.cents(), 22490);
    }
}
