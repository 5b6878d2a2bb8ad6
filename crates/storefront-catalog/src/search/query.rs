//! Category listing query builder.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Locale};
use crate::search::{CategoryFilter, Page};

pub const DEFAULT_PER_PAGE: usize = 24;
pub const MAX_PER_PAGE: usize = 100;

/// Sort options for category listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategorySort {
    /// Dataset order.
    #[default]
    Position,
    /// Localized name A-Z.
    NameAsc,
    /// Localized name Z-A.
    NameDesc,
    /// Newest first.
    Newest,
    /// Oldest first.
    Oldest,
    /// Largest cached product count first.
    MostProducts,
}

impl CategorySort {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "position" => Some(CategorySort::Position),
            "name" | "name_asc" => Some(CategorySort::NameAsc),
            "name_desc" => Some(CategorySort::NameDesc),
            "newest" => Some(CategorySort::Newest),
            "oldest" => Some(CategorySort::Oldest),
            "most_products" | "products" => Some(CategorySort::MostProducts),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategorySort::Position => "Featured",
            CategorySort::NameAsc => "Name: A-Z",
            CategorySort::NameDesc => "Name: Z-A",
            CategorySort::Newest => "Newest",
            CategorySort::Oldest => "Oldest",
            CategorySort::MostProducts => "Most Products",
        }
    }
}

/// A category listing query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuery {
    pub filters: Vec<CategoryFilter>,
    pub sort: CategorySort,
    /// Locale used for name sorting.
    pub locale: Locale,
    /// Current page (1-indexed).
    pub page: usize,
    pub per_page: usize,
    /// Public listings leave this off so inactive categories stay hidden.
    pub include_inactive: bool,
}

impl Default for CategoryQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryQuery {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            sort: CategorySort::Position,
            locale: Locale::default(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            include_inactive: false,
        }
    }

    /// Add a text search; empty input is ignored.
    pub fn with_text(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        if !q.trim().is_empty() {
            self.filters.push(CategoryFilter::Text(q));
        }
        self
    }

    pub fn with_filter(mut self, filter: CategoryFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_sort(mut self, sort: CategorySort) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set pagination; `per_page` is clamped to `1..=MAX_PER_PAGE`.
    pub fn with_pagination(mut self, page: usize, per_page: usize) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    pub fn including_inactive(mut self) -> Self {
        self.include_inactive = true;
        self
    }

    /// Whether `category` passes visibility and every filter.
    pub fn matches(&self, category: &Category) -> bool {
        (self.include_inactive || category.is_visible())
            && self.filters.iter().all(|f| f.matches(category))
    }

    /// Filter, sort and paginate `categories`.
    pub fn apply(&self, categories: &[Category]) -> Page<Category> {
        let mut matched: Vec<Category> = categories
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect();

        let locale = self.locale;
        match self.sort {
            CategorySort::Position => {}
            CategorySort::NameAsc => {
                matched.sort_by_cached_key(|c| c.localized_name(locale).to_lowercase())
            }
            CategorySort::NameDesc => {
                matched.sort_by_cached_key(|c| Reverse(c.localized_name(locale).to_lowercase()))
            }
            CategorySort::Newest => matched.sort_by_key(|c| Reverse(c.created_at)),
            CategorySort::Oldest => matched.sort_by_key(|c| c.created_at),
            CategorySort::MostProducts => {
                matched.sort_by_key(|c| Reverse(c.product_count.unwrap_or(0)))
            }
        }

        Page::from_items(matched, self.page, self.per_page.clamp(1, MAX_PER_PAGE))
    }
}
