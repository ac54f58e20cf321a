//! Unified error types and result handling for the catalog.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Admin-form fields checked by draft validation, listed in form order so
/// validation failures read the way the form lays its inputs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Display name; required, non-empty.
    Name,
    /// Asking price; required, positive, finite.
    Price,
    /// Strikethrough reference price; optional, but must not undercut the
    /// asking price when present.
    OriginalPrice,
    /// Category choice; required.
    Category,
    /// Free-text description; required, non-empty.
    Description,
}

impl DraftField {
    /// Field name as the admin form labels it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::OriginalPrice => "original_price",
            Self::Category => "category",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joins offending field names for the `Validation` message.
fn field_list(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Everything that can go wrong inside the catalog crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A submitted draft was rejected; carries every offending field.
    #[error("invalid wallpaper submission, check fields: {}", field_list(.fields))]
    Validation {
        /// Offending fields, in form order.
        fields: Vec<DraftField>,
    },

    /// An operation referenced an id with no record in the catalog.
    #[error("no wallpaper with id {id}")]
    NotFound {
        /// The id the caller asked for.
        id: i64,
    },

    /// A category identifier outside the fixed category set.
    #[error("unknown category '{input}'")]
    UnknownCategory {
        /// The rejected identifier.
        input: String,
    },

    /// Configuration could not be loaded, or seed data violates a catalog
    /// invariant.
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of the problem.
        message: String,
    },

    /// The image collaborator could not produce a display URI.
    #[error("could not acquire image '{}': {message}", .path.display())]
    Image {
        /// The file the admin selected.
        path: PathBuf,
        /// Why acquisition failed.
        message: String,
    },

    /// Console or filesystem I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
