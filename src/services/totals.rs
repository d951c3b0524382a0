//! Totals aggregation
//!
//! Plain sums over each item's derived state, so the result does not depend
//! on the order the items are folded in.

use crate::models::{Item, Totals};

use super::item_state::compute_item_state;

/// Fold every item's state into one set of totals
pub fn aggregate<'a, I>(items: I) -> Totals
where
    I: IntoIterator<Item = &'a Item>,
{
    items.into_iter().fold(Totals::default(), |mut acc, item| {
        acc.add_state(&compute_item_state(item));
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::partition::sort_items;

    fn source_items() -> Vec<Item> {
        vec![
            Item::new("Seagate Exos X18", Money::from_cents(39900)).with_qty(16).with_bought(8),
            Item::new("10Gtek HBA", Money::from_cents(8599)).with_qty(2).with_bought(2),
            Item::new("YIWENTEC cable", Money::from_cents(1599)).with_qty(4).with_bought(4),
            Item::new("Fractal Define 7 XL", Money::from_cents(22490)).with_qty(1).with_bought(1),
            Item::new("MSI PRO B760-P", Money::from_cents(9900)).with_qty(1).with_bought(1),
            Item::new("Intel Core i7-12700K", Money::from_cents(31049)).with_qty(1).with_bought(1),
            Item::new("Corsair Vengeance LPX", Money::from_cents(14199)).with_qty(4).with_bought(4),
            Item::new("Corsair RM750x", Money::from_cents(14900)).with_qty(1).with_bought(1),
        ]
    }

    #[test]
    fn test_source_list_totals_are_exact() {
        let totals = aggregate(&source_items());

        let expected = 39900 * 16
            + 8599 * 2
            + 1599 * 4
            + 22490
            + 9900
            + 31049
            + 14199 * 4
            + 14900;
        assert_eq!(totals.total.cents(), expected);
        assert_eq!(totals.total.cents(), 797129);
        assert_eq!(totals.remaining_total.cents(), 39900 * 8);
        assert_eq!(totals.bought_total.cents(), 797129 - 319200);

        assert_eq!(totals.total_qty, 30);
        assert_eq!(totals.bought_qty, 22);
        assert_eq!(totals.remaining_qty, 8);
        assert!(totals.is_consistent());
    }

    #[test]
    fn test_huge_totals_saturate() {
        let items = vec![
            Item::new("Big", Money::from_cents(i64::MAX / 2 + 1)),
            Item::new("Bigger", Money::from_cents(i64::MAX / 2 + 1)),
        ];
        let totals = aggregate(&items);
        assert_eq!(totals.total.cents(), i64::MAX);
        assert_eq!(totals.remaining_total.cents(), i64::MAX);
        assert_eq!(totals.total_qty, 2);
    }

    #[test]
    fn test_empty_list_is_all_zero() {
        let totals = aggregate(&Vec::<Item>::new());
        assert_eq!(totals, Totals::default());
        assert!(totals.is_consistent());
    }

    #[test]
    fn test_order_independent() {
        let items = source_items();
        let mut reversed = items.clone();
        reversed.reverse();

        let sorted: Vec<Item> = sort_items(&items).into_iter().map(|l| l.item).collect();

        assert_eq!(aggregate(&items), aggregate(&reversed));
        assert_eq!(aggregate(&items), aggregate(&sorted));
    }

    #[test]
    fn test_malformed_quantities_stay_consistent() {
        let items = vec![
            Item::new("Overbought", Money::from_cents(5000)).with_bought(5),
            Item::new("Negative", Money::from_cents(1000)).with_qty(3).with_bought(-2),
        ];
        let totals = aggregate(&items);

        assert_eq!(totals.bought_qty, 1);
        assert_eq!(totals.remaining_qty, 3);
        assert_eq!(totals.bought_total.cents(), 5000);
        assert_eq!(totals.remaining_total.cents(), 3000);
        assert!(totals.is_consistent());
    }
}
