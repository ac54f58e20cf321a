//! Catalog filtering - text search, category narrowing, and the combined
//! query the storefront and admin views share.
//!
//! Filters are free functions over record sequences so the same narrowing
//! runs against the live store, a seed file, or a test fixture. Text
//! matching is a case-insensitive substring check against the record name
//! or category identifier; category narrowing is an exact match; the two
//! compose by conjunction.

use crate::errors::Error;
use crate::models::{Category, WallpaperRecord};
use std::fmt;
use std::str::FromStr;

/// Category narrowing: the "all wallpapers" view or a single category tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategorySelection {
    /// No narrowing; every record passes.
    #[default]
    All,
    /// Exact-match narrowing to one category.
    Only(Category),
}

impl CategorySelection {
    /// Whether `record` passes this selection.
    #[must_use]
    pub fn matches(self, record: &WallpaperRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => record.category == category,
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => f.write_str(category.id()),
        }
    }
}

impl FromStr for CategorySelection {
    type Err = Error;

    /// Parses the sentinel `all` or a category identifier.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            input.parse::<Category>().map(Self::Only)
        }
    }
}

/// Case-insensitive substring match against the record's name or category
/// identifier. The empty query matches every record.
#[must_use]
pub fn matches_text(record: &WallpaperRecord, query: &str) -> bool {
    let needle = query.to_lowercase();
    record.name.to_lowercase().contains(&needle) || record.category.id().contains(&needle)
}

/// Narrows `records` to those whose name or category identifier contains
/// `query`, preserving order. The empty query is the identity filter.
#[must_use]
pub fn filter_by_text<'a, I>(records: I, query: &str) -> Vec<&'a WallpaperRecord>
where
    I: IntoIterator<Item = &'a WallpaperRecord>,
{
    records
        .into_iter()
        .filter(|record| matches_text(record, query))
        .collect()
}

/// Narrows `records` to the given selection, preserving order.
/// [`CategorySelection::All`] is the identity filter.
#[must_use]
pub fn filter_by_category<'a, I>(
    records: I,
    selection: CategorySelection,
) -> Vec<&'a WallpaperRecord>
where
    I: IntoIterator<Item = &'a WallpaperRecord>,
{
    records
        .into_iter()
        .filter(|record| selection.matches(record))
        .collect()
}

/// The combined view state: free-text search plus the selected category
/// tab. A record must pass both to appear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    /// Free-text search; empty means no text narrowing.
    pub text: String,
    /// Category tab selection.
    pub category: CategorySelection,
}

impl CatalogQuery {
    /// Whether `record` passes both criteria.
    #[must_use]
    pub fn matches(&self, record: &WallpaperRecord) -> bool {
        matches_text(record, &self.text) && self.category.matches(record)
    }

    /// Whether this query narrows at all.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_empty() && self.category == CategorySelection::All
    }
}

/// Applies the combined query to `records`, preserving order.
#[must_use]
pub fn search<'a, I>(records: I, query: &CatalogQuery) -> Vec<&'a WallpaperRecord>
where
    I: IntoIterator<Item = &'a WallpaperRecord>,
{
    records
        .into_iter()
        .filter(|record| query.matches(record))
        .collect()
}
