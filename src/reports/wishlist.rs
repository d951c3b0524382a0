//! Wishlist Report
//!
//! Two sections (items still needed, items fully bought) followed by a
//! totals footer. Each row carries the derived state plus the presentation
//! choices that depend on which section it sits in.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{WishlistError, WishlistResult};
use crate::models::{CurrencyFormat, ItemState, Money, Totals};
use crate::services::{ListedItem, WishlistService};
use crate::storage::Catalog;

/// Text shown for items without a description
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Which list a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Needed,
    Bought,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Needed => "Needed",
            Self::Bought => "Bought",
        }
    }
}

/// Colour class of a progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressTone {
    /// Needed item, highlighted
    Remaining,
    /// Everything bought
    Complete,
    /// Some units bought
    Partial,
    /// Nothing bought
    Empty,
}

impl ProgressTone {
    fn for_state(section: Section, state: &ItemState) -> Self {
        match section {
            Section::Needed => Self::Remaining,
            Section::Bought if state.progress_percent() == 100 => Self::Complete,
            Section::Bought if state.bought > 0 => Self::Partial,
            Section::Bought => Self::Empty,
        }
    }
}

/// A row in the wishlist report for a single item
#[derive(Debug, Clone, Serialize)]
pub struct ItemReportRow {
    /// Render key (1-based sorted position)
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub buy_url: String,
    pub image: String,
    /// Unit price
    pub price: Money,
    pub state: ItemState,
    pub section: Section,
}

impl ItemReportRow {
    fn new(listed: &ListedItem, section: Section) -> Self {
        Self {
            id: listed.id.clone(),
            name: listed.item.name.clone(),
            description: listed.item.description.clone(),
            buy_url: listed.item.buy_url.clone(),
            image: listed.item.image.clone(),
            price: listed.item.price,
            state: listed.state(),
            section,
        }
    }

    /// Description, or the placeholder when missing
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }

    /// Quantity shown on the card badge
    pub fn badge_quantity(&self) -> u32 {
        match self.section {
            Section::Needed => self.state.bought,
            Section::Bought => self.state.qty,
        }
    }

    /// Amount shown next to the unit price
    pub fn display_total(&self) -> Money {
        match self.section {
            Section::Needed => self.state.remaining_total,
            Section::Bought => self.state.line_total,
        }
    }

    /// "€ 399,00 each / € 3.192,00 remaining"
    pub fn price_badge(&self, currency: &CurrencyFormat) -> String {
        let suffix = match self.section {
            Section::Needed => "remaining",
            Section::Bought => "total",
        };
        format!(
            "{} each / {} {}",
            currency.format(self.price),
            currency.format(self.display_total()),
            suffix
        )
    }

    /// Progress bar tone, or `None` when no bar is shown
    pub fn progress(&self) -> Option<ProgressTone> {
        let shown = match self.section {
            Section::Needed => self.state.remaining > 0,
            Section::Bought => self.state.bought > 0,
        };
        shown.then(|| ProgressTone::for_state(self.section, &self.state))
    }
}

/// Wishlist Report
#[derive(Debug, Clone, Serialize)]
pub struct WishlistReport {
    pub title: String,
    /// Items with units still to buy
    pub needed: Vec<ItemReportRow>,
    /// Fully bought items
    pub bought: Vec<ItemReportRow>,
    pub totals: Totals,
}

impl WishlistReport {
    /// Generate the report for a catalog
    pub fn generate(catalog: &Catalog, title: impl Into<String>) -> Self {
        let service = WishlistService::new(catalog);
        let view = service.view();

        Self {
            title: title.into(),
            needed: view
                .needed
                .iter()
                .map(|l| ItemReportRow::new(l, Section::Needed))
                .collect(),
            bought: view
                .bought
                .iter()
                .map(|l| ItemReportRow::new(l, Section::Bought))
                .collect(),
            totals: service.totals(),
        }
    }

    /// Number of items in both sections
    pub fn item_count(&self) -> usize {
        self.needed.len() + self.bought.len()
    }

    /// Rows of both sections in id order
    pub fn rows(&self) -> Vec<&ItemReportRow> {
        let mut rows: Vec<&ItemReportRow> = self.needed.iter().chain(&self.bought).collect();
        rows.sort_by_key(|r| r.id.parse::<usize>().unwrap_or(usize::MAX));
        rows
    }

    /// "Requested items (1)"
    pub fn needed_heading(&self) -> String {
        format!("Requested items ({})", self.needed.len())
    }

    /// "€ 3.192,00 remaining to upgrade"
    pub fn needed_summary(&self, currency: &CurrencyFormat) -> String {
        format!(
            "{} remaining to upgrade",
            currency.format(self.totals.remaining_total)
        )
    }

    /// "Bought items (7)"
    pub fn bought_heading(&self) -> String {
        format!("Bought items ({})", self.bought.len())
    }

    /// "22 bought — € 4.779,29"
    pub fn bought_summary(&self, currency: &CurrencyFormat) -> String {
        format!(
            "{} bought — {}",
            self.totals.bought_qty,
            currency.format(self.totals.bought_total)
        )
    }

    /// "30 items — 22 bought, 8 remaining"
    pub fn footer_counts(&self) -> String {
        format!(
            "{} items — {} bought, {} remaining",
            self.totals.total_qty, self.totals.bought_qty, self.totals.remaining_qty
        )
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &CurrencyFormat) -> String {
        let width = 80;
        let mut output = String::new();

        output.push_str(&format!("{}\n", self.title));
        output.push_str(&"=".repeat(width));
        output.push('\n');

        // Needed
        output.push_str(&format!(
            "\n{:<40}{:>40}\n",
            self.needed_heading(),
            self.needed_summary(currency)
        ));
        output.push_str(&"-".repeat(width));
        output.push('\n');
        if self.needed.is_empty() {
            output.push_str("All items are bought.\n");
        } else {
            for row in &self.needed {
                output.push_str(&format_row(row, currency));
            }
        }

        // Bought
        output.push_str(&format!(
            "\n{:<40}{:>40}\n",
            self.bought_heading(),
            self.bought_summary(currency)
        ));
        output.push_str(&"-".repeat(width));
        output.push('\n');
        for row in &self.bought {
            output.push_str(&format_row(row, currency));
        }

        // Footer
        output.push('\n');
        output.push_str(&"=".repeat(width));
        output.push('\n');
        output.push_str(&format!("{}\n", self.footer_counts()));
        output.push_str(&format!(
            "✓ Bought    {:>16}\n",
            currency.format(self.totals.bought_total)
        ));
        output.push_str(&format!(
            "⚠ Required  {:>16}\n",
            currency.format(self.totals.remaining_total)
        ));

        output
    }

    /// Export the report to CSV format
    ///
    /// Amounts are plain decimals so spreadsheets can sum them.
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> WishlistResult<()> {
        writeln!(
            writer,
            "Section,ID,Name,Price,Qty,Bought,Remaining,Line Total,Bought Total,Remaining Total"
        )
        .map_err(|e| WishlistError::Export(e.to_string()))?;

        for row in self.needed.iter().chain(&self.bought) {
            writeln!(
                writer,
                "{},{},{},{:.2},{},{},{},{:.2},{:.2},{:.2}",
                row.section.label(),
                row.id,
                escape_csv(&row.name),
                row.price.as_decimal(),
                row.state.qty,
                row.state.bought,
                row.state.remaining,
                row.state.line_total.as_decimal(),
                row.state.bought_total.as_decimal(),
                row.state.remaining_total.as_decimal(),
            )
            .map_err(|e| WishlistError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "TOTAL,,,,{},{},{},{:.2},{:.2},{:.2}",
            self.totals.total_qty,
            self.totals.bought_qty,
            self.totals.remaining_qty,
            self.totals.total.as_decimal(),
            self.totals.bought_total.as_decimal(),
            self.totals.remaining_total.as_decimal(),
        )
        .map_err(|e| WishlistError::Export(e.to_string()))?;

        Ok(())
    }
}

fn format_row(row: &ItemReportRow, currency: &CurrencyFormat) -> String {
    let progress = match row.progress() {
        Some(_) => format!(
            "{} {:>3}% {}/{}",
            crate::display::format_bar(row.state.bought, row.state.qty, 10),
            row.state.progress_percent(),
            row.state.bought,
            row.state.qty
        ),
        None => String::new(),
    };

    format!(
        "  [{:>2}] {:>3}x {}\n       {}\n       {}  {}\n",
        row.id,
        row.badge_quantity(),
        crate::display::truncate(&row.name, 66),
        crate::display::truncate(row.description_or_default(), 72),
        row.price_badge(currency),
        progress
    )
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn embedded_report() -> WishlistReport {
        let catalog = Catalog::embedded().unwrap();
        WishlistReport::generate(&catalog, "NAS build")
    }

    #[test]
    fn test_generate_from_embedded_catalog() {
        let report = embedded_report();

        assert_eq!(report.item_count(), 8);
        assert_eq!(report.needed.len(), 1);
        assert_eq!(report.bought.len(), 7);
        assert_eq!(report.needed[0].id, "7");
        assert!(report.needed[0].name.starts_with("Seagate"));
        assert_eq!(report.totals.total.cents(), 797129);
        assert_eq!(report.totals.remaining_total.cents(), 319200);
        assert_eq!(report.totals.bought_total.cents(), 477929);

        let ids: Vec<&str> = report.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert!(report.rows()[0].name.starts_with("10Gtek"));
    }

    #[test]
    fn test_headings_and_footer() {
        let report = embedded_report();
        let eur = CurrencyFormat::euro_nl();

        assert_eq!(report.needed_heading(), "Requested items (1)");
        assert_eq!(report.needed_summary(&eur), "€ 3.192,00 remaining to upgrade");
        assert_eq!(report.bought_heading(), "Bought items (7)");
        assert_eq!(report.bought_summary(&eur), "22 bought — € 4.779,29");
        assert_eq!(report.footer_counts(), "30 items — 22 bought, 8 remaining");
    }

    #[test]
    fn test_row_presentation_depends_on_section() {
        let report = embedded_report();
        let eur = CurrencyFormat::euro_nl();

        let seagate = &report.needed[0];
        assert_eq!(seagate.badge_quantity(), 8);
        assert_eq!(seagate.display_total().cents(), 319200);
        assert_eq!(
            seagate.price_badge(&eur),
            "€ 399,00 each / € 3.192,00 remaining"
        );
        assert_eq!(seagate.progress(), Some(ProgressTone::Remaining));

        let memory = report
            .bought
            .iter()
            .find(|r| r.name.starts_with("Corsair Vengeance"))
            .unwrap();
        assert_eq!(memory.badge_quantity(), 4);
        assert_eq!(memory.price_badge(&eur), "€ 141,99 each / € 567,96 total");
        assert_eq!(memory.progress(), Some(ProgressTone::Complete));
    }

    #[test]
    fn test_missing_description_placeholder() {
        let catalog = Catalog::from_items(vec![Item::new("Bare", Money::from_cents(100))]);
        let report = WishlistReport::generate(&catalog, "t");
        assert_eq!(report.needed[0].description_or_default(), NO_DESCRIPTION);
        assert_eq!(report.needed[0].badge_quantity(), 0);
    }

    #[test]
    fn test_all_bought_message() {
        let catalog = Catalog::from_items(vec![
            Item::new("Done", Money::from_cents(100)).with_bought(1)
        ]);
        let report = WishlistReport::generate(&catalog, "t");
        let text = report.format_terminal(&CurrencyFormat::euro_nl());
        assert!(text.contains("Requested items (0)"));
        assert!(text.contains("All items are bought."));
    }

    #[test]
    fn test_terminal_output_contains_sections() {
        let report = embedded_report();
        let text = report.format_terminal(&CurrencyFormat::euro_nl());
        assert!(text.starts_with("NAS build\n"));
        assert!(text.contains("Requested items (1)"));
        assert!(text.contains("Bought items (7)"));
        assert!(text.contains("30 items — 22 bought, 8 remaining"));
        assert!(!text.contains("All items are bought."));
    }

    #[test]
    fn test_csv_export() {
        let report = embedded_report();

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("Section,ID,Name,Price"));
        assert!(lines[1].starts_with("Needed,7,"));
        assert!(csv_string.contains("\"Corsair RM750x, 750 Watt PSU\""));
        assert_eq!(lines[9], "TOTAL,,,,30,22,8,7971.29,4779.29,3192.00");
    }
}
