//! Item display formatting
//!
//! Formats report rows for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_bar, truncate};
use crate::models::{CurrencyFormat, Totals};
use crate::reports::ItemReportRow;

#[derive(Tabled)]
struct ItemTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Price")]
    price: String,
}

/// Format report rows as a table
pub fn format_item_table(rows: &[&ItemReportRow], currency: &CurrencyFormat) -> String {
    if rows.is_empty() {
        return "No items found.".to_string();
    }

    let table_rows: Vec<ItemTableRow> = rows
        .iter()
        .map(|row| ItemTableRow {
            id: row.id.clone(),
            name: truncate(&row.name, 48),
            status: row.section.label(),
            progress: format!(
                "{} {}/{}",
                format_bar(row.state.bought, row.state.qty, 8),
                row.state.bought,
                row.state.qty
            ),
            price: row.price_badge(currency),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format a single item's details
pub fn format_item_details(row: &ItemReportRow, currency: &CurrencyFormat) -> String {
    let state = &row.state;
    let mut output = String::new();

    output.push_str(&format!("Item: {}\n", row.name));
    output.push_str(&format!("  ID:             {}\n", row.id));
    output.push_str(&format!("  Status:         {}\n", row.section.label()));
    output.push_str(&format!(
        "  Description:    {}\n",
        row.description_or_default()
    ));
    output.push_str(&format!("  Unit price:     {}\n", currency.format(row.price)));
    output.push_str(&format!(
        "  Quantity:       {} wanted, {} bought, {} remaining\n",
        state.qty, state.bought, state.remaining
    ));
    output.push_str(&format!(
        "  Progress:       {} {}%\n",
        format_bar(state.bought, state.qty, 20),
        state.progress_percent()
    ));
    output.push_str(&format!(
        "  Line total:     {}\n",
        currency.format(state.line_total)
    ));
    output.push_str(&format!(
        "  Bought total:   {}\n",
        currency.format(state.bought_total)
    ));
    output.push_str(&format!(
        "  Remaining:      {}\n",
        currency.format(state.remaining_total)
    ));

    if !row.buy_url.is_empty() {
        output.push_str(&format!("  Buy at:         {}\n", row.buy_url));
    }

    output
}

/// Format the totals footer
pub fn format_totals(totals: &Totals, currency: &CurrencyFormat) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} items — {} bought, {} remaining ({}%)\n",
        totals.total_qty,
        totals.bought_qty,
        totals.remaining_qty,
        totals.progress_percent()
    ));
    output.push_str(&format!("  Total:     {:>16}\n", currency.format(totals.total)));
    output.push_str(&format!(
        "  Bought:    {:>16}\n",
        currency.format(totals.bought_total)
    ));
    output.push_str(&format!(
        "  Required:  {:>16}\n",
        currency.format(totals.remaining_total)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::WishlistReport;
    use crate::storage::Catalog;

    fn report() -> WishlistReport {
        WishlistReport::generate(&Catalog::embedded().unwrap(), "t")
    }

    #[test]
    fn test_table_lists_every_row() {
        let report = report();
        let table = format_item_table(&report.rows(), &CurrencyFormat::euro_nl());

        assert!(table.contains("ID"));
        assert!(table.contains("Intel Core i7-12700K"));
        assert!(table.contains("€ 399,00 each / € 3.192,00 remaining"));
        assert!(table.contains("8/16"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_item_table(&[], &CurrencyFormat::euro_nl()),
            "No items found."
        );
    }

    #[test]
    fn test_details() {
        let report = report();
        let details = format_item_details(&report.needed[0], &CurrencyFormat::euro_nl());

        assert!(details.contains("16 wanted, 8 bought, 8 remaining"));
        assert!(details.contains("50%"));
        assert!(details.contains("€ 6.384,00"));
        assert!(details.contains("Buy at:"));
    }

    #[test]
    fn test_totals() {
        let report = report();
        let text = format_totals(&report.totals, &CurrencyFormat::euro_nl());
        assert!(text.starts_with("30 items — 22 bought, 8 remaining (73%)"));
        assert!(text.contains("€ 7.971,29"));
    }
}
