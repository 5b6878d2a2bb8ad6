//! Category resource model.
//!
//! Contains the Category entity, its request contracts and the product
//! count cache.

mod category;
mod product;
mod request;

pub use category::{
    is_valid_slug, is_visible, validate, validate_record, Category, Locale, PLACEHOLDER_IMAGE,
};
pub use product::{
    count_products, refresh_product_counts, stale_product_counts, CategoryMember, CountDrift,
    ProductSummary,
};
pub use request::{accept_create, accept_update, CreateCategoryRequest, UpdateCategoryRequest};
