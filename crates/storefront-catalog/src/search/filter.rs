//! Category listing filters.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// A listing filter. A category must match every filter in a query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Only visible categories.
    Active,
    /// Only deactivated categories.
    Inactive,
    /// Case-insensitive substring match over slug and every localized name.
    Text(String),
    /// Any of the given slugs.
    Slugs(Vec<String>),
    /// Categories with a non-zero cached product count.
    HasProducts,
}

impl CategoryFilter {
    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        CategoryFilter::Text(query.into())
    }

    /// Create a slug filter.
    pub fn slugs<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CategoryFilter::Slugs(slugs.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::Active => category.is_visible(),
            CategoryFilter::Inactive => !category.is_visible(),
            CategoryFilter::Text(query) => {
                let needle = query.trim().to_lowercase();
                if needle.is_empty() {
                    return true;
                }
                std::iter::once(category.slug.as_str())
                    .chain(std::iter::once(category.name.as_str()))
                    .chain(category.name_en.as_deref())
                    .chain(category.name_ja.as_deref())
                    .any(|hay| hay.to_lowercase().contains(&needle))
            }
            CategoryFilter::Slugs(slugs) => slugs.iter().any(|s| *s == category.slug),
            CategoryFilter::HasProducts => category.product_count.unwrap_or(0) > 0,
        }
    }
}
