//! The Category entity and its invariants.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::ids::CategoryId;

/// Image shown for categories without one of their own.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder-category.png";

/// Display locale for localized category text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Vietnamese, the storefront's default locale.
    #[default]
    Vi,
    En,
    Ja,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Vi => "vi",
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vi" => Ok(Locale::Vi),
            "en" => Ok(Locale::En),
            "ja" => Ok(Locale::Ja),
            other => Err(ValidationError::new(
                "locale",
                format!("unsupported locale '{}'", other),
            )),
        }
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique, immutable identifier.
    pub id: CategoryId,
    /// Display name in the default locale.
    pub name: String,
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
    /// Image URI or path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Unique, URL-safe lookup key.
    pub slug: String,
    /// Inactive categories stay in the dataset but are hidden from public listings.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    /// Bumped on every mutation; never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
    /// Denormalized count of products in this category. A cache only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_count: Option<u64>,
}

impl Category {
    /// Create an active category with the given timestamps set to `now`.
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        slug: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            name_en: None,
            name_ja: None,
            description: None,
            description_en: None,
            description_ja: None,
            image: None,
            slug: slug.into(),
            is_active: true,
            created_at: now,
            updated_at: now,
            product_count: None,
        }
    }

    /// Check the entity invariants, stopping at the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_blank() {
            return Err(ValidationError::new("id", "must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "must not be empty"));
        }
        if self.slug.is_empty() {
            return Err(ValidationError::new("slug", "must not be empty"));
        }
        if !is_valid_slug(&self.slug) {
            return Err(ValidationError::new(
                "slug",
                format!(
                    "'{}' may only contain lowercase letters, digits and hyphens",
                    self.slug
                ),
            ));
        }
        if self.created_at > self.updated_at {
            return Err(ValidationError::new(
                "updatedAt",
                format!(
                    "{} is earlier than createdAt {}",
                    self.updated_at.to_rfc3339(),
                    self.created_at.to_rfc3339()
                ),
            ));
        }
        Ok(())
    }

    /// Whether the category shows up in public listings.
    pub fn is_visible(&self) -> bool {
        self.is_active
    }

    /// The category image, or the shared placeholder.
    pub fn image_or_placeholder(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Name in `locale`, falling back to the default-locale name.
    pub fn localized_name(&self, locale: Locale) -> &str {
        let localized = match locale {
            Locale::Vi => None,
            Locale::En => self.name_en.as_deref(),
            Locale::Ja => self.name_ja.as_deref(),
        };
        localized
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.name)
    }

    /// Description in `locale`, falling back to the default-locale description.
    pub fn localized_description(&self, locale: Locale) -> Option<&str> {
        let localized = match locale {
            Locale::Vi => None,
            Locale::En => self.description_en.as_deref(),
            Locale::Ja => self.description_ja.as_deref(),
        };
        localized
            .filter(|s| !s.trim().is_empty())
            .or(self.description.as_deref())
    }
}

/// Validate a category, handing it back on success.
pub fn validate(category: Category) -> Result<Category, ValidationError> {
    category.validate()?;
    Ok(category)
}

/// Whether the category shows up in public listings.
pub fn is_visible(category: &Category) -> bool {
    category.is_visible()
}

/// Slugs are non-empty and made of `a-z`, `0-9` and `-` only.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Validate a loosely-typed JSON record as received on the wire.
///
/// Checks presence and type of every field before the entity invariants, so
/// a missing `isActive` or an unparseable `createdAt` is reported against
/// that field rather than as a generic decode failure.
pub fn validate_record(record: &Value) -> Result<Category, ValidationError> {
    let obj = record
        .as_object()
        .ok_or_else(|| ValidationError::new("record", "expected a JSON object"))?;

    let id = required_str(obj, "id")?;
    let name = required_str(obj, "name")?;
    let slug = required_str(obj, "slug")?;
    let is_active = match obj.get("isActive") {
        Some(Value::Bool(b)) => *b,
        Some(_) => return Err(ValidationError::new("isActive", "must be a boolean")),
        None => return Err(ValidationError::new("isActive", "is required")),
    };
    let created_at = required_timestamp(obj, "createdAt")?;
    let updated_at = required_timestamp(obj, "updatedAt")?;

    let product_count = match obj.get("productCount") {
        None | Some(Value::Null) => None,
        Some(v) => Some(v.as_u64().ok_or_else(|| {
            ValidationError::new("productCount", "must be a non-negative integer")
        })?),
    };

    let category = Category {
        id: CategoryId::new(id),
        name: name.to_string(),
        name_en: optional_str(obj, "nameEn")?,
        name_ja: optional_str(obj, "nameJa")?,
        description: optional_str(obj, "description")?,
        description_en: optional_str(obj, "descriptionEn")?,
        description_ja: optional_str(obj, "descriptionJa")?,
        image: optional_str(obj, "image")?,
        slug: slug.to_string(),
        is_active,
        created_at,
        updated_at,
        product_count,
    };

    validate(category)
}

fn required_str<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a str, ValidationError> {
    match obj.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s),
        Some(Value::String(_)) => Err(ValidationError::new(field, "must not be empty")),
        Some(Value::Null) | None => Err(ValidationError::new(field, "is required")),
        Some(_) => Err(ValidationError::new(field, "must be a string")),
    }
}

fn optional_str(obj: &Map<String, Value>, field: &str) -> Result<Option<String>, ValidationError> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(ValidationError::new(field, "must be a string")),
    }
}

fn required_timestamp(
    obj: &Map<String, Value>,
    field: &str,
) -> Result<DateTime<Utc>, ValidationError> {
    let raw = required_str(obj, field)?;
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| ValidationError::new(field, format!("'{}' is not an ISO-8601 timestamp: {}", raw, e)))
}
