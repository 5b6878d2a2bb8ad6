//! Category resource model for the storefront.
//!
//! - **Catalog**: the `Category` entity, its invariants, and the create and
//!   update request contracts
//! - **Seed**: a fixed dataset used when no live store is wired up
//! - **Search**: filtered, sorted, paginated listings
//! - **Store**: an in-memory store that serializes writers
//!
//! The catalog, seed and search modules are pure; only the store logs.
//!
//! # Example
//!
//! ```rust
//! use storefront_catalog::prelude::*;
//!
//! let store = MemoryCategoryStore::from_seed();
//!
//! let hats = store
//!     .create(CreateCategoryRequest::new("Mũ", "hats"))
//!     .unwrap();
//! assert_eq!(hats.product_count, Some(0));
//!
//! let err = store
//!     .create(CreateCategoryRequest::new("Áo", "tops"))
//!     .unwrap_err();
//! assert_eq!(err.status_code(), 409);
//!
//! store.deactivate(&hats.id).unwrap();
//! let page = store.list(&CategoryQuery::new());
//! assert!(page.items.iter().all(|c| c.slug != "hats"));
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod search;
pub mod seed;
pub mod store;

pub use error::{CatalogError, ErrorBody, ValidationError};
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, ErrorBody, ValidationError};
    pub use crate::ids::*;

    pub use crate::catalog::{
        accept_create, accept_update, is_visible, validate, validate_record, Category,
        CategoryMember, CreateCategoryRequest, Locale, ProductSummary, UpdateCategoryRequest,
    };

    pub use crate::search::{CategoryFilter, CategoryQuery, CategorySort, Page, Pagination};

    pub use crate::seed::{seed_categories, seed_products, seed_snapshot};

    pub use crate::store::{CategoryStore, MemoryCategoryStore};
}
