use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wishlist::cli::{
    handle_config, handle_export, handle_init, handle_list, handle_report, handle_show,
    handle_totals, handle_validate, ExportFormat, ListFilter,
};
use wishlist::config::{Settings, WishlistPaths};
use wishlist::storage::Catalog;

#[derive(Parser)]
#[command(
    name = "wishlist",
    version,
    about = "Donation wishlist: what is still needed and what is already bought",
    long_about = "Shows a list of wanted items, how many of each have been bought, \
                  and what is still needed. Renders the same data as a terminal \
                  report, CSV, JSON, YAML or a static HTML page."
)]
struct Cli {
    /// Item list to load (JSON or YAML) instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    items: Option<PathBuf>,

    /// Reject items whose bought quantity is outside 0..=qty
    #[arg(long, global = true)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List items in id order
    #[command(alias = "ls")]
    List {
        /// Only items with units still to buy
        #[arg(long, conflicts_with = "bought")]
        needed: bool,
        /// Only fully bought items
        #[arg(long)]
        bought: bool,
    },

    /// Show one item by id or name
    Show {
        /// Item id (position in the sorted list) or name
        item: String,
    },

    /// Show quantity and money totals
    Totals,

    /// Print the full wishlist report
    Report {
        /// Write the report as CSV to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the wishlist
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check an item file without rendering anything
    Validate {
        /// File to check (defaults to the configured item list)
        file: Option<PathBuf>,
    },

    /// Initialize the data directory with the default item list
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("wishlist={}", level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings; read-only commands still work without them
    let paths = WishlistPaths::new();
    let settings = match &paths {
        Ok(paths) => Settings::load_or_create(paths)?,
        Err(e) => {
            tracing::warn!("{}; using default settings", e);
            Settings::default()
        }
    };

    let items_file = match &paths {
        Ok(paths) => settings.resolve_items_file(paths, cli.items.clone()),
        Err(_) => cli.items.clone(),
    };
    let load = || Catalog::load_or_embedded(items_file.as_deref(), cli.strict);

    match cli.command {
        Some(Commands::List { needed, bought }) => {
            let filter = if needed {
                ListFilter::Needed
            } else if bought {
                ListFilter::Bought
            } else {
                ListFilter::All
            };
            handle_list(&load()?, &settings, filter)?;
        }
        Some(Commands::Show { item }) => {
            handle_show(&load()?, &settings, &item)?;
        }
        Some(Commands::Totals) => {
            handle_totals(&load()?, &settings)?;
        }
        Some(Commands::Report { output }) => {
            handle_report(&load()?, &settings, output)?;
        }
        Some(Commands::Export {
            format,
            output,
            compact,
        }) => {
            handle_export(&load()?, &settings, format, output, compact)?;
        }
        Some(Commands::Validate { file }) => {
            let target = file.or_else(|| items_file.clone());
            handle_validate(target.as_deref(), cli.strict)?;
        }
        Some(Commands::Init) => {
            handle_init(&paths?, &settings)?;
        }
        Some(Commands::Config) => {
            handle_config(&paths?, &settings)?;
        }
        None => {
            handle_report(&load()?, &settings, None)?;
        }
    }

    Ok(())
}
