//! CLI commands for browsing items
//!
//! Listing, single-item details, and the totals footer.

use clap::ValueEnum;

use crate::config::Settings;
use crate::display::{format_item_details, format_item_table, format_totals};
use crate::error::{WishlistError, WishlistResult};
use crate::reports::{ItemReportRow, WishlistReport};
use crate::services::WishlistService;
use crate::storage::Catalog;

/// Which items to list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFilter {
    /// Every item, in id order
    #[default]
    All,
    /// Items with units still to buy
    Needed,
    /// Fully bought items
    Bought,
}

/// Select the rows a listing shows
pub fn filter_rows(report: &WishlistReport, filter: ListFilter) -> Vec<&ItemReportRow> {
    match filter {
        ListFilter::All => report.rows(),
        ListFilter::Needed => report.needed.iter().collect(),
        ListFilter::Bought => report.bought.iter().collect(),
    }
}

/// Handle `list`
pub fn handle_list(catalog: &Catalog, settings: &Settings, filter: ListFilter) -> WishlistResult<()> {
    let report = WishlistReport::generate(catalog, settings.title.clone());
    let rows = filter_rows(&report, filter);

    let heading = match filter {
        ListFilter::All => format!("{} ({} items)", report.title, report.item_count()),
        ListFilter::Needed => report.needed_heading(),
        ListFilter::Bought => report.bought_heading(),
    };

    println!("{}", heading);
    if filter == ListFilter::Needed && rows.is_empty() {
        println!("All items are bought.");
    } else {
        println!("{}", format_item_table(&rows, &settings.currency));
    }

    Ok(())
}

/// Handle `show`
pub fn handle_show(catalog: &Catalog, settings: &Settings, query: &str) -> WishlistResult<()> {
    let listed = WishlistService::new(catalog).find(query)?;
    let report = WishlistReport::generate(catalog, settings.title.clone());

    let row = report
        .rows()
        .into_iter()
        .find(|r| r.id == listed.id)
        .ok_or_else(|| WishlistError::item_not_found(query))?;

    print!("{}", format_item_details(row, &settings.currency));
    Ok(())
}

/// Handle `totals`
pub fn handle_totals(catalog: &Catalog, settings: &Settings) -> WishlistResult<()> {
    let totals = WishlistService::new(catalog).totals();
    print!("{}", format_totals(&totals, &settings.currency));
    Ok(())
}
