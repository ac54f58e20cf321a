//! The authoritative in-memory wallpaper catalog.
//!
//! `CatalogStore` owns the record collection and exposes every query and
//! mutation the storefront and admin views need. Records keep insertion
//! order, ids are never reused, and a failed mutation leaves the
//! collection untouched.

use crate::errors::{DraftField, Error, Result};
use crate::filter::{self, CatalogQuery};
use crate::models::{Category, WallpaperDraft, WallpaperRecord};
use std::collections::HashSet;
use tracing::{debug, info};

/// A draft that passed validation, with the required fields extracted.
struct ValidDraft {
    name: String,
    price: f64,
    original_price: Option<f64>,
    category: Category,
    image: String,
    description: String,
    is_new: bool,
    is_featured: bool,
}

/// Checks a submitted draft, collecting every offending field in form
/// order rather than stopping at the first.
///
/// `name` and `description` must be non-empty after trimming, `price` must
/// be present, positive, and finite, `category` must be chosen, and
/// `original_price`, when given, must be a finite amount of at least
/// `price` so the strikethrough reference never undercuts the asking
/// price.
fn validate(draft: WallpaperDraft) -> Result<ValidDraft> {
    let mut fields = Vec::new();

    let name = draft.name.trim().to_string();
    if name.is_empty() {
        fields.push(DraftField::Name);
    }

    let price = match draft.price {
        Some(price) if price > 0.0 && price.is_finite() => Some(price),
        _ => {
            fields.push(DraftField::Price);
            None
        }
    };

    if let Some(original) = draft.original_price {
        let undercuts = price.is_some_and(|price| original < price);
        if original <= 0.0 || !original.is_finite() || undercuts {
            fields.push(DraftField::OriginalPrice);
        }
    }

    let category = match draft.category {
        Some(category) => Some(category),
        None => {
            fields.push(DraftField::Category);
            None
        }
    };

    let description = draft.description.trim().to_string();
    if description.is_empty() {
        fields.push(DraftField::Description);
    }

    match (price, category) {
        (Some(price), Some(category)) if fields.is_empty() => Ok(ValidDraft {
            name,
            price,
            original_price: draft.original_price,
            category,
            image: draft.image,
            description,
            is_new: draft.is_new,
            is_featured: draft.is_featured,
        }),
        _ => Err(Error::Validation { fields }),
    }
}

/// The owned, in-memory collection of wallpaper records.
#[derive(Debug)]
pub struct CatalogStore {
    records: Vec<WallpaperRecord>,
    next_id: i64,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// Creates an empty catalog; the first added record receives id 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds a catalog from seed records, checking collection invariants.
    ///
    /// Newly added records will receive ids above every seeded id, so ids
    /// stay unique for the life of the store.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for duplicate ids, non-positive or
    /// non-finite prices, or ratings outside `[0, 5]`; the failing record
    /// is named in the message.
    pub fn with_records(records: Vec<WallpaperRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut next_id = 1;
        for record in &records {
            if !seen.insert(record.id) {
                return Err(Error::Config {
                    message: format!("duplicate wallpaper id {} in seed data", record.id),
                });
            }
            if record.price <= 0.0 || !record.price.is_finite() {
                return Err(Error::Config {
                    message: format!(
                        "wallpaper '{}' has unusable price {}",
                        record.name, record.price
                    ),
                });
            }
            if !(0.0..=5.0).contains(&record.rating) {
                return Err(Error::Config {
                    message: format!(
                        "wallpaper '{}' has rating {} outside 0-5",
                        record.name, record.rating
                    ),
                });
            }
            next_id = next_id.max(record.id + 1);
        }
        info!("Catalog initialized with {} wallpapers.", records.len());
        Ok(Self { records, next_id })
    }

    /// Current records, in insertion order.
    #[must_use]
    pub fn list(&self) -> &[WallpaperRecord] {
        &self.records
    }

    /// Number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up one record by id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&WallpaperRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Records matching the combined text and category query, in insertion
    /// order.
    #[must_use]
    pub fn search(&self, query: &CatalogQuery) -> Vec<&WallpaperRecord> {
        let matches = filter::search(&self.records, query);
        debug!(
            "Query matched {} of {} wallpapers.",
            matches.len(),
            self.records.len()
        );
        matches
    }

    /// Validates `draft` and appends it to the catalog under a fresh id.
    ///
    /// New records start with no rating history: `rating` 0, `reviews` 0.
    /// Returns the stored record.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] listing every unusable field; the
    /// catalog is unchanged on failure.
    pub fn add(&mut self, draft: WallpaperDraft) -> Result<WallpaperRecord> {
        let valid = validate(draft)?;
        let record = WallpaperRecord {
            id: self.next_id,
            name: valid.name,
            price: valid.price,
            original_price: valid.original_price,
            category: valid.category,
            image: valid.image,
            rating: 0.0,
            reviews: 0,
            is_new: valid.is_new,
            is_featured: valid.is_featured,
            description: valid.description,
        };
        self.next_id += 1;
        info!(
            "Added wallpaper '{}' (id {}) in category {}.",
            record.name, record.id, record.category
        );
        self.records.push(record.clone());
        Ok(record)
    }

    /// Validates `draft`, then replaces every form-backed field of the
    /// record with id `id` in one step.
    ///
    /// `id`, `rating`, and `reviews` are preserved; those are not form
    /// fields. Validation runs before the lookup, so an unusable draft is
    /// reported even when the id is also unknown. Returns the updated
    /// record.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] for an unusable draft and
    /// [`Error::NotFound`] when no record has the given id; the catalog is
    /// unchanged on failure.
    pub fn update(&mut self, id: i64, draft: WallpaperDraft) -> Result<WallpaperRecord> {
        let valid = validate(draft)?;
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(Error::NotFound { id })?;
        record.name = valid.name;
        record.price = valid.price;
        record.original_price = valid.original_price;
        record.category = valid.category;
        record.image = valid.image;
        record.description = valid.description;
        record.is_new = valid.is_new;
        record.is_featured = valid.is_featured;
        info!("Updated wallpaper '{}' (id {}).", record.name, record.id);
        Ok(record.clone())
    }

    /// Flips the featured flag of the record with id `id` and returns the
    /// updated record.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] when no record has the given id.
    pub fn toggle_featured(&mut self, id: i64) -> Result<WallpaperRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(Error::NotFound { id })?;
        record.is_featured = !record.is_featured;
        info!(
            "Wallpaper '{}' (id {}) featured: {}.",
            record.name, record.id, record.is_featured
        );
        Ok(record.clone())
    }

    /// Removes the record with id `id` from the catalog and returns it.
    ///
    /// Removal is permanent and not idempotent: a second call for the same
    /// id fails. The freed id is never handed out again.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] when no record has the given id.
    pub fn remove(&mut self, id: i64) -> Result<WallpaperRecord> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(Error::NotFound { id })?;
        let record = self.records.remove(index);
        info!(
            "Removed wallpaper '{}' (id {}) from the catalog.",
            record.name, record.id
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategorySelection;
    use crate::test_utils::{record, sample_records, sample_store, valid_draft};
    use pretty_assertions::assert_eq;

    #[test]
    fn new_store_is_empty_and_starts_ids_at_one() {
        let mut store = CatalogStore::new();
        assert!(store.is_empty());
        let added = store.add(valid_draft("First")).unwrap();
        assert_eq!(added.id, 1);
    }

    #[test]
    fn seeded_store_lists_records_in_insertion_order() {
        let store = sample_store();
        let ids: Vec<i64> = store.list().iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn seeding_rejects_duplicate_ids() {
        let mut records = sample_records();
        records.push(record(1, "Copycat", Category::Modern));
        let result = CatalogStore::with_records(records);
        assert!(matches!(
            result,
            Err(Error::Config { message }) if message.contains("duplicate wallpaper id 1")
        ));
    }

    #[test]
    fn seeding_rejects_non_positive_prices() {
        let mut bad = record(7, "Freebie", Category::Modern);
        bad.price = 0.0;
        assert!(CatalogStore::with_records(vec![bad]).is_err());
    }

    #[test]
    fn seeding_rejects_out_of_range_ratings() {
        let mut bad = record(7, "Overrated", Category::Modern);
        bad.rating = 5.5;
        assert!(CatalogStore::with_records(vec![bad]).is_err());
    }

    #[test]
    fn add_assigns_sequential_ids_above_the_seed() {
        let mut store = sample_store();
        let first = store.add(valid_draft("Fourth")).unwrap();
        let second = store.add(valid_draft("Fifth")).unwrap();
        assert_eq!(first.id, 4);
        assert_eq!(second.id, 5);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn add_trims_name_and_description() {
        let mut store = CatalogStore::new();
        let mut draft = valid_draft("Untrimmed");
        draft.name = "  Sunset Glow  ".to_string();
        draft.description = "  Warm gradient  ".to_string();
        let added = store.add(draft).unwrap();
        assert_eq!(added.name, "Sunset Glow");
        assert_eq!(added.description, "Warm gradient");
    }

    #[test]
    fn add_starts_records_without_rating_history() {
        let mut store = sample_store();
        let added = store.add(valid_draft("Fresh")).unwrap();
        assert_eq!(added.rating, 0.0);
        assert_eq!(added.reviews, 0);
    }

    #[test]
    fn add_rejects_missing_fields_and_names_all_of_them() {
        let mut store = sample_store();
        let before = store.list().to_vec();

        let result = store.add(WallpaperDraft::default());
        let Err(Error::Validation { fields }) = result else {
            panic!("expected a validation error");
        };
        assert_eq!(
            fields,
            vec![
                DraftField::Name,
                DraftField::Price,
                DraftField::Category,
                DraftField::Description,
            ]
        );
        assert_eq!(store.list(), &before[..]);
    }

    #[test]
    fn add_rejects_whitespace_only_name() {
        let mut store = CatalogStore::new();
        let mut draft = valid_draft("Blank");
        draft.name = "   ".to_string();
        let Err(Error::Validation { fields }) = store.add(draft) else {
            panic!("expected a validation error");
        };
        assert_eq!(fields, vec![DraftField::Name]);
    }

    #[test]
    fn add_rejects_non_positive_and_non_finite_prices() {
        for bad_price in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let mut store = CatalogStore::new();
            let mut draft = valid_draft("Unpriceable");
            draft.price = Some(bad_price);
            let Err(Error::Validation { fields }) = store.add(draft) else {
                panic!("price {bad_price} should be rejected");
            };
            assert_eq!(fields, vec![DraftField::Price]);
            assert!(store.is_empty());
        }
    }

    #[test]
    fn add_rejects_original_price_below_asking_price() {
        let mut store = CatalogStore::new();
        let mut draft = valid_draft("Fake Discount");
        draft.price = Some(80.0);
        draft.original_price = Some(50.0);
        let Err(Error::Validation { fields }) = store.add(draft) else {
            panic!("expected a validation error");
        };
        assert_eq!(fields, vec![DraftField::OriginalPrice]);
    }

    #[test]
    fn add_accepts_original_price_equal_to_asking_price() {
        let mut store = CatalogStore::new();
        let mut draft = valid_draft("Even");
        draft.price = Some(60.0);
        draft.original_price = Some(60.0);
        assert!(store.add(draft).is_ok());
    }

    #[test]
    fn added_records_are_immediately_searchable() {
        let mut store = sample_store();
        store.add(valid_draft("Sunset Glow")).unwrap();
        let query = CatalogQuery {
            text: "sunset".to_string(),
            category: CategorySelection::All,
        };
        let matches = store.search(&query);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Sunset Glow");
    }

    #[test]
    fn update_replaces_form_fields_and_preserves_identity() {
        let mut store = sample_store();
        let mut draft = valid_draft("Geometric Nights");
        draft.price = Some(82.50);
        draft.is_featured = true;
        let updated = store.update(2, draft).unwrap();

        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "Geometric Nights");
        assert_eq!(updated.price, 82.50);
        // Rating history survives the edit.
        assert_eq!(updated.rating, 4.9);
        assert_eq!(updated.reviews, 89);
        assert_eq!(store.get(2).unwrap(), &updated);
    }

    #[test]
    fn update_validates_before_looking_up_the_id() {
        let mut store = sample_store();
        let result = store.update(99, WallpaperDraft::default());
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = sample_store();
        let result = store.update(99, valid_draft("Ghost"));
        assert!(matches!(result, Err(Error::NotFound { id: 99 })));
    }

    #[test]
    fn rejected_update_leaves_the_record_untouched() {
        let mut store = sample_store();
        let before = store.get(2).unwrap().clone();
        let mut draft = valid_draft("Broken");
        draft.price = None;
        assert!(store.update(2, draft).is_err());
        assert_eq!(store.get(2).unwrap(), &before);
    }

    #[test]
    fn toggle_featured_flips_and_reports_the_new_state() {
        let mut store = sample_store();
        assert!(!store.get(1).unwrap().is_featured);

        let toggled = store.toggle_featured(1).unwrap();
        assert!(toggled.is_featured);

        let toggled = store.toggle_featured(1).unwrap();
        assert!(!toggled.is_featured);
    }

    #[test]
    fn toggle_featured_unknown_id_is_not_found() {
        let mut store = sample_store();
        assert!(matches!(
            store.toggle_featured(404),
            Err(Error::NotFound { id: 404 })
        ));
    }

    #[test]
    fn remove_deletes_exactly_one_record() {
        let mut store = sample_store();
        let removed = store.remove(2).unwrap();
        assert_eq!(removed.name, "Geometric Dreams");
        assert_eq!(store.len(), 2);
        assert!(store.get(2).is_none());
        let ids: Vec<i64> = store.list().iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remove_is_not_idempotent() {
        let mut store = sample_store();
        store.remove(3).unwrap();
        assert!(matches!(
            store.remove(3),
            Err(Error::NotFound { id: 3 })
        ));
    }

    #[test]
    fn removed_ids_are_never_reused() {
        let mut store = sample_store();
        store.remove(3).unwrap();
        let added = store.add(valid_draft("Replacement")).unwrap();
        assert_eq!(added.id, 4);
    }

    #[test]
    fn search_composes_text_and_category() {
        let store = sample_store();
        let query = CatalogQuery {
            text: "charm".to_string(),
            category: CategorySelection::Only(Category::Floral),
        };
        assert!(store.search(&query).is_empty());

        let query = CatalogQuery {
            text: "charm".to_string(),
            category: CategorySelection::Only(Category::Vintage),
        };
        assert_eq!(store.search(&query).len(), 1);
    }
}
