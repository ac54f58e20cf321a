//! Catalog domain models.
//!
//! Plain data types shared by the store, the seed configuration, and the
//! console: the wallpaper record itself, the fixed category set, and the
//! draft type carrying an admin form submission before validation.

use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification tag assigned to every wallpaper.
///
/// The set is fixed at compile time; storefront tabs, admin form choices,
/// and seed files all draw from the same seven tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Floral,
    Geometric,
    Textured,
    Vintage,
    Modern,
    Abstract,
    Nature,
}

impl Category {
    /// Every known category, in display order.
    pub const ALL: [Self; 7] = [
        Self::Floral,
        Self::Geometric,
        Self::Textured,
        Self::Vintage,
        Self::Modern,
        Self::Abstract,
        Self::Nature,
    ];

    /// Stable identifier used in seed files, filters, and console input.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Floral => "floral",
            Self::Geometric => "geometric",
            Self::Textured => "textured",
            Self::Vintage => "vintage",
            Self::Modern => "modern",
            Self::Abstract => "abstract",
            Self::Nature => "nature",
        }
    }

    /// Human-readable label for storefront and admin displays.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Floral => "Floral",
            Self::Geometric => "Geometric",
            Self::Textured => "Textured",
            Self::Vintage => "Vintage",
            Self::Modern => "Modern",
            Self::Abstract => "Abstract",
            Self::Nature => "Nature",
        }
    }

    /// The identifier-to-label pairing for this category.
    #[must_use]
    pub const fn definition(self) -> CategoryDefinition {
        CategoryDefinition {
            id: self.id(),
            label: self.label(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Parses a category identifier, ignoring case and surrounding
    /// whitespace.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.id() == normalized)
            .ok_or_else(|| Error::UnknownCategory {
                input: input.trim().to_string(),
            })
    }
}

/// One entry of the fixed category listing shown to shoppers and admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDefinition {
    /// Stable identifier (`floral`, `geometric`, ...).
    pub id: &'static str,
    /// Display label ("Floral", "Geometric", ...).
    pub label: &'static str,
}

/// One catalog entry as displayed in the storefront and admin views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallpaperRecord {
    /// Unique identifier, assigned at creation and never reused.
    pub id: i64,
    /// Display name; non-empty, trimmed.
    pub name: String,
    /// Asking price; positive and finite.
    pub price: f64,
    /// Strikethrough reference price; when present, at least `price`.
    pub original_price: Option<f64>,
    /// Classification tag used for filtering.
    pub category: Category,
    /// Display image URI; empty when no image was provided.
    pub image: String,
    /// Customer rating in [0, 5]; review-derived, not admin-editable.
    pub rating: f64,
    /// Customer review count; not admin-editable.
    pub reviews: u32,
    /// "New" storefront badge.
    pub is_new: bool,
    /// Promotional highlight badge.
    pub is_featured: bool,
    /// Free-text description; non-empty, trimmed.
    pub description: String,
}

/// An add/edit form submission before validation.
///
/// Fields the admin form may leave blank are optional or empty here; store
/// validation decides whether the draft is acceptable and reports every
/// offending field at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WallpaperDraft {
    /// Display name; required.
    pub name: String,
    /// Asking price; required, positive.
    pub price: Option<f64>,
    /// Optional strikethrough reference price.
    pub original_price: Option<f64>,
    /// Category choice; required.
    pub category: Option<Category>,
    /// Display image URI; optional, usually produced by the image
    /// collaborator.
    #[serde(default)]
    pub image: String,
    /// Free-text description; required.
    pub description: String,
    /// "New" badge flag.
    #[serde(default)]
    pub is_new: bool,
    /// Featured badge flag.
    #[serde(default)]
    pub is_featured: bool,
}
