//! Catalog error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A record violates a required-field, type or format invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("Invalid {field}: {reason}")]
pub struct ValidationError {
    /// Name of the offending field, as it appears on the wire (`slug`, `createdAt`, ...).
    pub field: String,
    /// Human-readable reason.
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors returned by category create/update/lookup operations.
///
/// Every variant is recoverable; callers map them to user-facing responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The record failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Create/update would violate slug uniqueness.
    #[error("Slug already in use: {slug}")]
    DuplicateSlug { slug: String },

    /// No category has the given id.
    #[error("Category not found: {id}")]
    NotFound { id: String },
}

impl CatalogError {
    /// Shorthand for a validation failure.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::Validation(ValidationError::new(field, reason))
    }

    /// The offending field, when the error names one.
    pub fn field(&self) -> Option<&str> {
        match self {
            CatalogError::Validation(e) => Some(&e.field),
            CatalogError::DuplicateSlug { .. } => Some("slug"),
            CatalogError::NotFound { .. } => None,
        }
    }

    /// HTTP status an API layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Validation(_) => 422,
            CatalogError::DuplicateSlug { .. } => 409,
            CatalogError::NotFound { .. } => 404,
        }
    }
}

/// Structured error body: `{"message": ..., "field": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&CatalogError> for ErrorBody {
    fn from(e: &CatalogError) -> Self {
        let field = match e {
            CatalogError::Validation(v) => Some(v.field.clone()),
            _ => None,
        };
        Self {
            message: e.to_string(),
            field,
        }
    }
}

impl From<CatalogError> for ErrorBody {
    fn from(e: CatalogError) -> Self {
        ErrorBody::from(&e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = CatalogError::validation("slug", "must be lowercase");
        assert_eq!(err.to_string(), "Invalid slug: must be lowercase");
        assert_eq!(err.field(), Some("slug"));
        assert_eq!(err.status_code(), 422);
    }

    #[test]
    fn test_error_body_field_only_for_validation() {
        let body = ErrorBody::from(CatalogError::validation("name", "required"));
        assert_eq!(body.field.as_deref(), Some("name"));

        let body = ErrorBody::from(CatalogError::NotFound {
            id: "nonexistent".into(),
        });
        assert_eq!(body.field, None);
        assert_eq!(body.message, "Category not found: nonexistent");

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("field").is_none());
    }

    #[test]
    fn test_duplicate_slug_status() {
        let err = CatalogError::DuplicateSlug {
            slug: "tops".into(),
        };
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.to_string(), "Slug already in use: tops");
    }
}
