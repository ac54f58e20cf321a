//! Seed catalog configuration.
//!
//! The wallpapers listed in `config.toml` populate the in-memory catalog
//! at startup; they are the records the storefront opens with before any
//! admin edits. Seed entries carry rating history and image URIs, which
//! admin drafts never do, so they get their own type here.

use crate::errors::{Error, Result};
use crate::models::{Category, WallpaperRecord};
use serde::Deserialize;
use std::{fs, path::Path};

/// The parsed `config.toml` contents.
#[derive(Deserialize, Debug)]
pub struct CatalogConfig {
    /// Seed catalog entries; an absent or empty list is an empty catalog.
    #[serde(default)]
    pub wallpapers: Vec<WallpaperSeed>,
}

impl CatalogConfig {
    /// Converts every seed entry into a catalog record, preserving file
    /// order.
    #[must_use]
    pub fn into_records(self) -> Vec<WallpaperRecord> {
        self.wallpapers
            .into_iter()
            .map(WallpaperRecord::from)
            .collect()
    }
}

/// One seeded catalog entry.
///
/// Only the identity fields are mandatory in the file; everything else
/// defaults to the quiet value so a seed entry can be as short as an id,
/// a name, a price, and a category.
#[derive(Deserialize, Debug, Clone)]
pub struct WallpaperSeed {
    /// Unique record id; duplicates are rejected when the store loads.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Asking price.
    pub price: f64,
    /// Optional strikethrough reference price.
    #[serde(default)]
    pub original_price: Option<f64>,
    /// Category identifier (`floral`, `geometric`, ...).
    pub category: Category,
    /// Display image URI.
    #[serde(default)]
    pub image: String,
    /// Accumulated customer rating, 0 to 5.
    #[serde(default)]
    pub rating: f64,
    /// Accumulated review count.
    #[serde(default)]
    pub reviews: u32,
    /// "New" storefront badge.
    #[serde(default)]
    pub is_new: bool,
    /// Promotional highlight badge.
    #[serde(default)]
    pub is_featured: bool,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

impl From<WallpaperSeed> for WallpaperRecord {
    fn from(seed: WallpaperSeed) -> Self {
        Self {
            id: seed.id,
            name: seed.name,
            price: seed.price,
            original_price: seed.original_price,
            category: seed.category,
            image: seed.image,
            rating: seed.rating,
            reviews: seed.reviews,
            is_new: seed.is_new,
            is_featured: seed.is_featured,
            description: seed.description,
        }
    }
}

/// Loads the seed catalog from a TOML file.
///
/// # Errors
/// Returns [`Error::Config`] if the file cannot be read, the TOML syntax
/// is invalid, or a seed entry is missing required fields.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading catalog configuration from {:?}", path_ref);
    let contents = fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("failed to read config file {:?}: {e}", path_ref),
    })?;
    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("failed to parse config file {:?}: {e}", path_ref),
    })
}

/// Loads the seed catalog from the default `config.toml` in the working
/// directory.
///
/// # Errors
/// Same failure modes as [`load_config`].
pub fn load_default_config() -> Result<CatalogConfig> {
    load_config("config.toml")
}
