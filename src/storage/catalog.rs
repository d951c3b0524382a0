//! Item catalog loading and validation
//!
//! The catalog is the source list every view is computed from. It is read
//! once, validated, and never modified afterwards. Structurally invalid
//! records are rejected here so the calculator only ever sees finite,
//! non-negative prices and positive quantities.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::file_io::{read_data, write_data_atomic};
use crate::error::{WishlistError, WishlistResult};
use crate::models::Item;

/// The built-in item list used when no item file is configured
pub const DEFAULT_ITEMS_YAML: &str = include_str!("default_items.yaml");

/// Where a catalog's items came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The list compiled into the binary
    Embedded,
    /// A JSON or YAML file on disk
    File(PathBuf),
    /// Items supplied directly by the caller
    Memory,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "built-in list"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Memory => write!(f, "in-memory list"),
        }
    }
}

/// Accepted top-level shapes of an item file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<Item>),
    Wrapped { items: Vec<Item> },
}

impl CatalogDocument {
    fn into_items(self) -> Vec<Item> {
        match self {
            Self::List(items) | Self::Wrapped { items } => items,
        }
    }
}

/// A tolerated inconsistency in one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIssue {
    /// Position in the source list (0-based)
    pub index: usize,
    pub name: String,
    pub message: String,
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item {} ({}): {}", self.index + 1, self.name, self.message)
    }
}

/// A validated, immutable item list
#[derive(Debug, Clone)]
pub struct Catalog {
    source: CatalogSource,
    items: Vec<Item>,
    issues: Vec<CatalogIssue>,
}

impl Catalog {
    /// Wrap items without validating them
    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            source: CatalogSource::Memory,
            items,
            issues: Vec::new(),
        }
    }

    /// Load the built-in item list
    pub fn embedded() -> WishlistResult<Self> {
        let document: CatalogDocument = serde_yaml::from_str(DEFAULT_ITEMS_YAML)?;
        Self::validated(CatalogSource::Embedded, document.into_items(), false)
    }

    /// Load and validate an item file
    ///
    /// With `strict`, a bought quantity outside `0..=qty` is an error instead
    /// of a warning.
    pub fn load(path: &Path, strict: bool) -> WishlistResult<Self> {
        let document: CatalogDocument = read_data(path)?;
        Self::validated(
            CatalogSource::File(path.to_path_buf()),
            document.into_items(),
            strict,
        )
    }

    /// Load a file if one is given, otherwise the built-in list
    pub fn load_or_embedded(path: Option<&Path>, strict: bool) -> WishlistResult<Self> {
        match path {
            Some(path) => Self::load(path, strict),
            None => {
                let catalog = Self::embedded()?;
                if strict {
                    reject_issues(&catalog.issues)?;
                }
                Ok(catalog)
            }
        }
    }

    fn validated(source: CatalogSource, items: Vec<Item>, strict: bool) -> WishlistResult<Self> {
        let issues = validate_items(&items)?;

        for issue in &issues {
            tracing::warn!("{}: {}", source, issue);
        }
        if strict {
            reject_issues(&issues)?;
        }

        tracing::info!("Loaded {} items from {}", items.len(), source);
        Ok(Self {
            source,
            items,
            issues,
        })
    }

    /// Write the items as a JSON or YAML list
    pub fn save(&self, path: &Path) -> WishlistResult<()> {
        write_data_atomic(path, &self.items)?;
        tracing::debug!("Wrote {} items to {}", self.items.len(), path.display());
        Ok(())
    }

    /// Where the items came from
    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Items in source order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Tolerated inconsistencies found while loading
    pub fn issues(&self) -> &[CatalogIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Check every record, failing on structural errors
///
/// Returns the tolerated issues (bought quantities that will be clamped).
pub fn validate_items(items: &[Item]) -> WishlistResult<Vec<CatalogIssue>> {
    let mut errors = Vec::new();
    let mut issues = Vec::new();

    for (index, item) in items.iter().enumerate() {
        if let Err(e) = item.validate() {
            errors.push(format!("item {} ({}): {}", index + 1, item.name, e));
            continue;
        }

        if item.bought_out_of_range() {
            issues.push(CatalogIssue {
                index,
                name: item.name.clone(),
                message: format!(
                    "bought quantity {} is outside 0..={} and will be clamped",
                    item.bought_qty,
                    item.desired_qty()
                ),
            });
        }
    }

    if errors.is_empty() {
        Ok(issues)
    } else {
        Err(WishlistError::Validation(errors.join("; ")))
    }
}

fn reject_issues(issues: &[CatalogIssue]) -> WishlistResult<()> {
    if issues.is_empty() {
        return Ok(());
    }
    let messages: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
    Err(WishlistError::Validation(messages.join("; ")))
}
