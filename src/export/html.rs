//! Static HTML page export
//!
//! Renders the wishlist as a single self-contained page: the requested
//! items, the bought items, and a totals footer.

use crate::config::Settings;
use crate::error::{WishlistError, WishlistResult};
use crate::models::CurrencyFormat;
use crate::reports::{ItemReportRow, ProgressTone, Section, WishlistReport};
use crate::storage::Catalog;
use std::io::Write;

const STYLE: &str = "\
body{margin:0;background:#0f172a;color:#e2e8f0;font-family:system-ui,sans-serif}\
main{max-width:56rem;margin:0 auto;padding:1.5rem}\
h1{text-align:center}\
.donate{display:block;width:max-content;margin:0 auto 2rem;padding:.5rem 1rem;border-radius:.5rem;background:#f97316;color:#fff;text-decoration:none}\
section header{display:flex;justify-content:space-between;align-items:center}\
.needed h2,.needed header p{color:#fcd34d}\
.bought h2,.bought header p{color:#10b981}\
ul{list-style:none;padding:0;display:grid;grid-template-columns:repeat(auto-fill,minmax(22rem,1fr));gap:1.5rem}\
.item{display:flex;gap:.75rem;padding:.75rem;border-radius:.75rem;background:#1e293b}\
.item.highlight{outline:2px solid rgba(251,191,36,.4)}\
.item.fully-bought{opacity:.8}\
.thumb{position:relative;flex-shrink:0}\
.thumb img{width:80px;height:80px;object-fit:cover;border-radius:.375rem}\
.badge{position:absolute;top:-.25rem;right:-.25rem;padding:0 .5rem;border-radius:9999px;background:#4f46e5;font-size:.75rem}\
.item a{color:#fff}\
.price{margin-top:.5rem;padding:.25rem .75rem;border-radius:9999px;background:rgba(51,65,85,.6);font-weight:600;font-size:.875rem}\
.bar{height:.5rem;margin-top:.5rem;border-radius:9999px;background:#334155;overflow:hidden}\
.fill{height:100%}\
.remaining .fill,.partial .fill{background:#f59e0b}\
.complete .fill{background:#10b981}\
.empty .fill{background:#475569}\
.progress-label{display:flex;justify-content:space-between;font-size:.75rem;color:#94a3b8}\
.empty-list{padding:1rem;border-radius:.5rem;background:rgba(30,41,59,.5)}\
.totals{display:flex;flex-wrap:wrap;justify-content:space-between;gap:1rem;margin-top:1.5rem;padding:1rem;border-radius:.5rem;background:rgba(30,41,59,.5)}\
.totals .bought-total{color:#a7f3d0}\
.totals .required-total{color:#fef08a}";

/// Escape text for use in HTML content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the report as a complete HTML document
pub fn render_page(report: &WishlistReport, settings: &Settings) -> String {
    let currency = &settings.currency;
    let mut output = String::new();

    output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    output.push_str("<meta charset=\"utf-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    output.push_str(&format!("<title>{}</title>\n", escape_html(&report.title)));
    output.push_str(&format!("<style>{}</style>\n", STYLE));
    output.push_str("</head>\n<body>\n<main>\n");
    output.push_str(&format!("<h1>{}</h1>\n", escape_html(&report.title)));

    if let Some(url) = &settings.donate_url {
        output.push_str(&format!(
            "<a class=\"donate\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
            escape_html(url),
            escape_html(&settings.donate_label)
        ));
    }

    // Requested items
    output.push_str("<section class=\"needed\">\n<header>\n");
    output.push_str(&format!("<h2>{}</h2>\n", escape_html(&report.needed_heading())));
    output.push_str(&format!(
        "<p>{}</p>\n</header>\n",
        escape_html(&report.needed_summary(currency))
    ));
    if report.needed.is_empty() {
        output.push_str("<div class=\"empty-list\">All items are bought.</div>\n");
    } else {
        output.push_str("<ul>\n");
        for row in &report.needed {
            output.push_str(&render_card(row, currency));
        }
        output.push_str("</ul>\n");
    }
    output.push_str("</section>\n");

    // Bought items
    output.push_str("<section class=\"bought\">\n<header>\n");
    output.push_str(&format!("<h2>{}</h2>\n", escape_html(&report.bought_heading())));
    output.push_str(&format!(
        "<p>{}</p>\n</header>\n<ul>\n",
        escape_html(&report.bought_summary(currency))
    ));
    for row in &report.bought {
        output.push_str(&render_card(row, currency));
    }
    output.push_str("</ul>\n</section>\n");

    // Totals footer
    output.push_str("<footer class=\"totals\">\n");
    output.push_str(&format!(
        "<span>{}</span>\n",
        escape_html(&report.footer_counts())
    ));
    output.push_str(&format!(
        "<span class=\"bought-total\">✓ Bought {}</span>\n",
        escape_html(&currency.format(report.totals.bought_total))
    ));
    output.push_str(&format!(
        "<span class=\"required-total\">⚠ Required {}</span>\n",
        escape_html(&currency.format(report.totals.remaining_total))
    ));
    output.push_str("</footer>\n</main>\n</body>\n</html>\n");

    output
}

fn render_card(row: &ItemReportRow, currency: &CurrencyFormat) -> String {
    let mut classes = vec!["item"];
    if row.state.fully_bought {
        classes.push("fully-bought");
    }
    if row.section == Section::Needed {
        classes.push("highlight");
    }

    let mut card = String::new();
    card.push_str(&format!(
        "<li class=\"{}\" data-id=\"{}\">\n",
        classes.join(" "),
        escape_html(&row.id)
    ));
    card.push_str(&format!(
        "<div class=\"thumb\"><img src=\"{}\" alt=\"{}\" width=\"80\" height=\"80\"><span class=\"badge\">{}x</span></div>\n",
        escape_html(&row.image),
        escape_html(&row.name),
        row.badge_quantity()
    ));
    card.push_str("<div class=\"body\">\n");
    card.push_str(&format!(
        "<h3><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></h3>\n",
        escape_html(&row.buy_url),
        escape_html(&row.name)
    ));
    card.push_str(&format!(
        "<p>{}</p>\n",
        escape_html(row.description_or_default())
    ));
    card.push_str(&format!(
        "<div class=\"price\">{}</div>\n",
        escape_html(&row.price_badge(currency))
    ));

    if let Some(tone) = row.progress() {
        let pct = row.state.progress_percent();
        card.push_str(&format!(
            "<div class=\"bar {}\"><div class=\"fill\" style=\"width: {}%\"></div></div>\n",
            tone_class(tone),
            pct
        ));
        card.push_str(&format!(
            "<div class=\"progress-label\"><span>{}%</span><span>{}/{}</span></div>\n",
            pct, row.state.bought, row.state.qty
        ));
    }

    card.push_str("</div>\n</li>\n");
    card
}

fn tone_class(tone: ProgressTone) -> &'static str {
    match tone {
        ProgressTone::Remaining => "remaining",
        ProgressTone::Complete => "complete",
        ProgressTone::Partial => "partial",
        ProgressTone::Empty => "empty",
    }
}

/// Export the wishlist as a static HTML page
pub fn export_html<W: Write>(
    catalog: &Catalog,
    settings: &Settings,
    writer: &mut W,
) -> WishlistResult<()> {
    let report = WishlistReport::generate(catalog, settings.title.clone());
    let page = render_page(&report, settings);

    writer
        .write_all(page.as_bytes())
        .map_err(|e| WishlistError::Export(e.to_string()))?;

    tracing::debug!("Rendered page with {} items", report.item_count());
    Ok(())
}
