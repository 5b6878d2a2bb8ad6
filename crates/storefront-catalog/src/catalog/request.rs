//! Create and update request contracts.
//!
//! Both handlers are pure: they check a request against a caller-supplied
//! snapshot of the current categories and return the record to commit. The
//! owning store serializes writers so the snapshot stays consistent between
//! the uniqueness checks and the commit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::category::{validate, Category};
use crate::error::CatalogError;
use crate::ids::CategoryId;

/// Fields a caller may supply when creating a category.
///
/// `id`, timestamps and `productCount` are server-assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ja: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_ja: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl CreateCategoryRequest {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = Some(false);
        self
    }
}

/// Partial update of an existing category. Only supplied fields change.
///
/// A JSON `null` reads the same as an absent field, so optional text cannot
/// be cleared through this contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    /// Target category.
    pub id: CategoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ja: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_ja: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateCategoryRequest {
    /// An update that changes nothing yet.
    pub fn new(id: impl Into<CategoryId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = Some(active);
        self
    }

    /// Overlay the supplied fields onto `target`, leaving the rest untouched.
    ///
    /// Does not touch `id`, `created_at`, `updated_at` or `product_count`.
    pub fn merge_into(&self, target: &mut Category) {
        fn overlay<T: Clone>(dst: &mut T, src: &Option<T>) {
            if let Some(v) = src {
                *dst = v.clone();
            }
        }
        fn overlay_opt<T: Clone>(dst: &mut Option<T>, src: &Option<T>) {
            if src.is_some() {
                *dst = src.clone();
            }
        }

        overlay(&mut target.name, &self.name);
        overlay(&mut target.slug, &self.slug);
        overlay(&mut target.is_active, &self.is_active);
        overlay_opt(&mut target.name_en, &self.name_en);
        overlay_opt(&mut target.name_ja, &self.name_ja);
        overlay_opt(&mut target.description, &self.description);
        overlay_opt(&mut target.description_en, &self.description_en);
        overlay_opt(&mut target.description_ja, &self.description_ja);
        overlay_opt(&mut target.image, &self.image);
    }
}

/// Build a new category from a create request.
///
/// The new record gets `id`, `createdAt = updatedAt = now` and a zero
/// product count, is validated, and is then checked for slug uniqueness
/// against `snapshot`.
pub fn accept_create(
    snapshot: &[Category],
    request: CreateCategoryRequest,
    id: CategoryId,
    now: DateTime<Utc>,
) -> Result<Category, CatalogError> {
    let category = validate(Category {
        id,
        name: request.name,
        name_en: request.name_en,
        name_ja: request.name_ja,
        description: request.description,
        description_en: request.description_en,
        description_ja: request.description_ja,
        image: request.image,
        slug: request.slug,
        is_active: request.is_active.unwrap_or(true),
        created_at: now,
        updated_at: now,
        product_count: Some(0),
    })?;

    if snapshot.iter().any(|c| c.slug == category.slug) {
        return Err(CatalogError::DuplicateSlug {
            slug: category.slug,
        });
    }
    if snapshot.iter().any(|c| c.id == category.id) {
        return Err(CatalogError::validation(
            "id",
            format!("'{}' is already assigned", category.id),
        ));
    }

    Ok(category)
}

/// Apply a partial update to the category it names.
///
/// Returns the merged record for the caller to commit. `snapshot` is never
/// modified, so a rejected update leaves nothing half-applied.
pub fn accept_update(
    snapshot: &[Category],
    request: &UpdateCategoryRequest,
    now: DateTime<Utc>,
) -> Result<Category, CatalogError> {
    let current = snapshot
        .iter()
        .find(|c| c.id == request.id)
        .ok_or_else(|| CatalogError::NotFound {
            id: request.id.to_string(),
        })?;

    if now < current.updated_at {
        return Err(CatalogError::validation(
            "updatedAt",
            "must not be earlier than the last update",
        ));
    }

    if let Some(slug) = request.slug.as_deref() {
        if slug != current.slug && snapshot.iter().any(|c| c.id != current.id && c.slug == slug) {
            return Err(CatalogError::DuplicateSlug {
                slug: slug.to_string(),
            });
        }
    }

    let mut merged = current.clone();
    request.merge_into(&mut merged);
    merged.updated_at = now;

    Ok(validate(merged)?)
}
