//! In-memory category store.
//!
//! Implements the persistence operations the request contracts rely on:
//! list all, find by id, find by slug, insert and update by id. Writers are
//! serialized by a single lock held across snapshot and commit, so slug and
//! id checks always see the state they commit against.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::debug;

use crate::catalog::{
    accept_create, accept_update, refresh_product_counts, validate, Category, CategoryMember,
    CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::error::CatalogError;
use crate::ids::CategoryId;
use crate::search::{CategoryQuery, Page};
use crate::seed::seed_snapshot;

/// Storage operations for categories.
pub trait CategoryStore {
    /// Every category, in insertion order, inactive ones included.
    fn list_all(&self) -> Vec<Category>;

    fn find_by_id(&self, id: &CategoryId) -> Option<Category>;

    fn find_by_slug(&self, slug: &str) -> Option<Category>;

    /// Store an already-built category, enforcing validity and uniqueness.
    fn insert(&self, category: Category) -> Result<Category, CatalogError>;

    /// Replace the category with the same id.
    fn update_by_id(&self, category: Category) -> Result<Category, CatalogError>;

    /// Accept a create request atomically.
    fn create(&self, request: CreateCategoryRequest) -> Result<Category, CatalogError>;

    /// Accept an update request atomically.
    fn update(&self, request: &UpdateCategoryRequest) -> Result<Category, CatalogError>;

    /// Hide a category from public listings without removing it.
    fn deactivate(&self, id: &CategoryId) -> Result<Category, CatalogError> {
        self.update(&UpdateCategoryRequest::new(id.clone()).with_active(false))
    }

    /// Run a listing query over the current categories.
    fn list(&self, query: &CategoryQuery) -> Page<Category> {
        query.apply(&self.list_all())
    }
}

/// Category store backed by a `Vec` behind a lock.
#[derive(Debug, Default)]
pub struct MemoryCategoryStore {
    categories: RwLock<Vec<Category>>,
}

impl MemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding a copy of the seed dataset.
    pub fn from_seed() -> Self {
        Self {
            categories: RwLock::new(seed_snapshot()),
        }
    }

    /// Load an existing dataset, rejecting invalid or duplicate records.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let store = Self::new();
        for category in categories {
            store.insert(category)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Recompute every cached product count from `products`.
    pub fn refresh_product_counts<P: CategoryMember>(&self, products: &[P]) {
        let mut guard = self.write();
        refresh_product_counts(&mut guard, products);
        debug!(categories = guard.len(), "refreshed product counts");
    }

    /// Take the categories out of the store.
    pub fn into_inner(self) -> Vec<Category> {
        self.categories
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // A panic while holding the lock cannot leave a half-merged record:
    // every write commits a fully validated value in one assignment.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Category>> {
        self.categories.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Category>> {
        self.categories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl CategoryStore for MemoryCategoryStore {
    fn list_all(&self) -> Vec<Category> {
        self.read().clone()
    }

    fn find_by_id(&self, id: &CategoryId) -> Option<Category> {
        self.read().iter().find(|c| &c.id == id).cloned()
    }

    fn find_by_slug(&self, slug: &str) -> Option<Category> {
        self.read().iter().find(|c| c.slug == slug).cloned()
    }

    fn insert(&self, category: Category) -> Result<Category, CatalogError> {
        let category = validate(category)?;
        let mut guard = self.write();

        if guard.iter().any(|c| c.id == category.id) {
            return Err(CatalogError::validation(
                "id",
                format!("'{}' is already assigned", category.id),
            ));
        }
        if guard.iter().any(|c| c.slug == category.slug) {
            return Err(CatalogError::DuplicateSlug {
                slug: category.slug,
            });
        }

        debug!(id = %category.id, slug = %category.slug, "inserted category");
        guard.push(category.clone());
        Ok(category)
    }

    fn update_by_id(&self, category: Category) -> Result<Category, CatalogError> {
        let category = validate(category)?;
        let mut guard = self.write();

        if guard
            .iter()
            .any(|c| c.id != category.id && c.slug == category.slug)
        {
            return Err(CatalogError::DuplicateSlug {
                slug: category.slug,
            });
        }

        let slot = guard
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| CatalogError::NotFound {
                id: category.id.to_string(),
            })?;

        if slot.created_at != category.created_at {
            return Err(CatalogError::validation("createdAt", "is immutable"));
        }

        *slot = category.clone();
        debug!(id = %category.id, "replaced category");
        Ok(category)
    }

    fn create(&self, request: CreateCategoryRequest) -> Result<Category, CatalogError> {
        let mut guard = self.write();
        let category = accept_create(&guard, request, CategoryId::generate(), Utc::now())?;

        debug!(id = %category.id, slug = %category.slug, "created category");
        guard.push(category.clone());
        Ok(category)
    }

    fn update(&self, request: &UpdateCategoryRequest) -> Result<Category, CatalogError> {
        let mut guard = self.write();
        let merged = accept_update(&guard, request, Utc::now())?;

        if let Some(slot) = guard.iter_mut().find(|c| c.id == merged.id) {
            *slot = merged.clone();
        }
        debug!(id = %merged.id, active = merged.is_active, "updated category");
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{seed_categories, seed_products};

    #[test]
    fn test_seeded_store() {
        let store = MemoryCategoryStore::from_seed();
        assert_eq!(store.len(), seed_categories().len());
        assert_eq!(
            store.find_by_slug("shoes").map(|c| c.id),
            Some(CategoryId::new("3"))
        );
        assert!(store.find_by_id(&CategoryId::new("404")).is_none());
    }

    #[test]
    fn test_create_then_lookup() {
        let store = MemoryCategoryStore::from_seed();
        let created = store
            .create(CreateCategoryRequest::new("Kính mắt", "eyewear"))
            .unwrap();

        assert_eq!(store.len(), 7);
        assert_eq!(store.find_by_id(&created.id), Some(created.clone()));
        assert_eq!(store.find_by_slug("eyewear"), Some(created));
    }

    #[test]
    fn test_create_duplicate_leaves_store_unchanged() {
        let store = MemoryCategoryStore::from_seed();
        let err = store
            .create(CreateCategoryRequest::new("Áo", "tops"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug { .. }));
        assert_eq!(store.list_all(), seed_categories());
    }

    #[test]
    fn test_rejected_update_leaves_store_unchanged() {
        let store = MemoryCategoryStore::from_seed();
        let req = UpdateCategoryRequest::new("1")
            .with_name("Áo mới")
            .with_slug("NOT VALID");
        assert!(store.update(&req).is_err());
        assert_eq!(store.find_by_id(&CategoryId::new("1")).unwrap().name, "Áo");
    }

    #[test]
    fn test_deactivate_keeps_record() {
        let store = MemoryCategoryStore::from_seed();
        let cat = store.deactivate(&CategoryId::new("2")).unwrap();
        assert!(!cat.is_active);
        assert_eq!(store.len(), 6);

        let public = store.list(&CategoryQuery::new());
        assert_eq!(public.pagination.total, 5);
        assert!(public.items.iter().all(|c| c.slug != "bottoms"));
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let store = MemoryCategoryStore::from_seed();
        let mut copy = seed_categories()[0].clone();
        assert_eq!(store.insert(copy.clone()).unwrap_err().field(), Some("id"));

        copy.id = CategoryId::new("99");
        assert_eq!(
            store.insert(copy).unwrap_err(),
            CatalogError::DuplicateSlug {
                slug: "tops".into()
            }
        );
    }

    #[test]
    fn test_from_categories_rejects_duplicate_slug() {
        let mut cats = seed_snapshot();
        cats[1].slug = "tops".into();
        assert!(MemoryCategoryStore::from_categories(cats).is_err());
    }

    #[test]
    fn test_update_by_id() {
        let store = MemoryCategoryStore::from_seed();
        let mut cat = store.find_by_id(&CategoryId::new("4")).unwrap();
        cat.image = None;
        store.update_by_id(cat.clone()).unwrap();
        assert_eq!(store.find_by_id(&cat.id).unwrap().image, None);

        cat.id = CategoryId::new("nonexistent");
        cat.slug = "brand-new".into();
        assert_eq!(
            store.update_by_id(cat).unwrap_err(),
            CatalogError::NotFound {
                id: "nonexistent".into()
            }
        );
    }

    #[test]
    fn test_update_by_id_keeps_created_at() {
        let store = MemoryCategoryStore::from_seed();
        let mut cat = store.find_by_id(&CategoryId::new("4")).unwrap();
        cat.created_at -= chrono::Duration::days(1);
        assert_eq!(
            store.update_by_id(cat).unwrap_err().field(),
            Some("createdAt")
        );
    }

    #[test]
    fn test_concurrent_creates_claim_slug_once() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(MemoryCategoryStore::from_seed());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store.create(CreateCategoryRequest::new(format!("Mũ {i}"), "same-slug"))
                })
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, CatalogError::DuplicateSlug { slug } if slug == "same-slug")));

        let store = Arc::try_unwrap(store).unwrap();
        let all = store.into_inner();
        assert_eq!(all.len(), seed_categories().len() + 1);
        let slugs: std::collections::HashSet<_> = all.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs.len(), all.len());
    }

    #[test]
    fn test_concurrent_updates_claim_slug_once() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(MemoryCategoryStore::from_seed());
        let handles: Vec<_> = ["1", "2", "3", "4", "5", "6"]
            .into_iter()
            .map(|id| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store.update(&UpdateCategoryRequest::new(id).with_slug("featured"))
                })
            })
            .collect();
        let ok = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|r| r.is_ok())
            .count();

        assert_eq!(ok, 1);
        let featured = store
            .list_all()
            .into_iter()
            .filter(|c| c.slug == "featured")
            .count();
        assert_eq!(featured, 1);
    }

    #[test]
    fn test_refresh_counts() {
        let store = MemoryCategoryStore::from_seed();
        store
            .create(CreateCategoryRequest::new("Kính", "glasses"))
            .unwrap();
        store.refresh_product_counts(seed_products());
        let glasses = store.find_by_slug("glasses").unwrap();
        assert_eq!(glasses.product_count, Some(0));
        assert_eq!(store.find_by_slug("tops").unwrap().product_count, Some(3));
    }
}
