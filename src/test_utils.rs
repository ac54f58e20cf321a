//! Shared test utilities for the catalog.
//!
//! This module provides the sample catalog used across module tests plus
//! builders for records and drafts with sensible defaults.

use crate::models::{Category, WallpaperDraft, WallpaperRecord};
use crate::store::CatalogStore;

/// Creates a test record with sensible defaults.
///
/// # Defaults
/// * `price`: 79.99, no `original_price`
/// * `rating`: 4.5 over 10 reviews
/// * no badges, no image
/// * `description`: `"<name> description"`
pub fn record(id: i64, name: &str, category: Category) -> WallpaperRecord {
    WallpaperRecord {
        id,
        name: name.to_string(),
        price: 79.99,
        original_price: None,
        category,
        image: String::new(),
        rating: 4.5,
        reviews: 10,
        is_new: false,
        is_featured: false,
        description: format!("{name} description"),
    }
}

/// The three-record sample catalog used across tests: a discounted new
/// floral, a featured geometric, and a plain vintage.
pub fn sample_records() -> Vec<WallpaperRecord> {
    let mut botanical = record(1, "Botanical Paradise", Category::Floral);
    botanical.price = 89.99;
    botanical.original_price = Some(119.99);
    botanical.rating = 4.8;
    botanical.reviews = 124;
    botanical.is_new = true;
    botanical.description = "Elegant botanical wallpaper with tropical leaves".to_string();

    let mut geometric = record(2, "Geometric Dreams", Category::Geometric);
    geometric.price = 75.99;
    geometric.rating = 4.9;
    geometric.reviews = 89;
    geometric.is_featured = true;
    geometric.description = "Modern geometric patterns in cool tones".to_string();

    let mut vintage = record(3, "Vintage Charm", Category::Vintage);
    vintage.price = 95.99;
    vintage.rating = 4.7;
    vintage.reviews = 156;
    vintage.description = "Classic vintage damask pattern".to_string();

    vec![botanical, geometric, vintage]
}

/// A store seeded with [`sample_records`].
pub fn sample_store() -> CatalogStore {
    CatalogStore::with_records(sample_records()).expect("sample catalog is valid")
}

/// A draft with every required field filled in.
///
/// # Defaults
/// * `price`: 49.99, no `original_price`
/// * `category`: modern
/// * no badges, no image
pub fn valid_draft(name: &str) -> WallpaperDraft {
    WallpaperDraft {
        name: name.to_string(),
        price: Some(49.99),
        original_price: None,
        category: Some(Category::Modern),
        image: String::new(),
        description: format!("{name} description"),
        is_new: false,
        is_featured: false,
    }
}
