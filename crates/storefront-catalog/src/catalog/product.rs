//! Product references and the `productCount` cache.
//!
//! `Category::product_count` is denormalized data. The product catalog owns
//! the authoritative category reference; everything here recomputes from it.

use serde::{Deserialize, Serialize};

use crate::catalog::category::Category;
use crate::ids::{CategoryId, ProductId};

/// Anything that belongs to exactly one category.
pub trait CategoryMember {
    fn category_id(&self) -> &CategoryId;
}

/// The slice of a product the category model cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    /// Category this product is filed under.
    pub category_id: CategoryId,
}

impl ProductSummary {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        slug: impl Into<String>,
        category_id: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            category_id: category_id.into(),
        }
    }
}

impl CategoryMember for ProductSummary {
    fn category_id(&self) -> &CategoryId {
        &self.category_id
    }
}

/// Count products referencing `category_id`.
pub fn count_products<P: CategoryMember>(category_id: &CategoryId, products: &[P]) -> u64 {
    products
        .iter()
        .filter(|p| p.category_id() == category_id)
        .count() as u64
}

impl Category {
    /// Whether the cached `product_count` matches `products` exactly.
    ///
    /// An absent count is never stale.
    pub fn product_count_is_fresh<P: CategoryMember>(&self, products: &[P]) -> bool {
        match self.product_count {
            Some(cached) => cached == count_products(&self.id, products),
            None => true,
        }
    }
}

/// A category whose cached count disagrees with the product set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountDrift {
    pub id: CategoryId,
    pub slug: String,
    pub cached: u64,
    pub actual: u64,
}

/// List every category whose `product_count` has drifted from `products`.
pub fn stale_product_counts<P: CategoryMember>(
    categories: &[Category],
    products: &[P],
) -> Vec<CountDrift> {
    categories
        .iter()
        .filter_map(|c| {
            let cached = c.product_count?;
            let actual = count_products(&c.id, products);
            (cached != actual).then(|| CountDrift {
                id: c.id.clone(),
                slug: c.slug.clone(),
                cached,
                actual,
            })
        })
        .collect()
}

/// Rewrite every category's `product_count` from `products`.
///
/// Timestamps are left alone: the count is a cache, not a mutation of the
/// category itself.
pub fn refresh_product_counts<P: CategoryMember>(categories: &mut [Category], products: &[P]) {
    for category in categories.iter_mut() {
        category.product_count = Some(count_products(&category.id, products));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn products() -> Vec<ProductSummary> {
        vec![
            ProductSummary::new("p1", "Áo thun", "ao-thun", "tops"),
            ProductSummary::new("p2", "Áo sơ mi", "ao-so-mi", "tops"),
            ProductSummary::new("p3", "Quần jean", "quan-jean", "bottoms"),
        ]
    }

    #[test]
    fn test_count_products() {
        let products = products();
        assert_eq!(count_products(&CategoryId::new("tops"), &products), 2);
        assert_eq!(count_products(&CategoryId::new("bottoms"), &products), 1);
        assert_eq!(count_products(&CategoryId::new("shoes"), &products), 0);
    }

    #[test]
    fn test_fresh_and_stale() {
        let products = products();
        let mut cat = Category::new(CategoryId::new("tops"), "Áo", "tops", Utc::now());
        assert!(cat.product_count_is_fresh(&products));

        cat.product_count = Some(2);
        assert!(cat.product_count_is_fresh(&products));

        cat.product_count = Some(5);
        assert!(!cat.product_count_is_fresh(&products));

        let drift = stale_product_counts(std::slice::from_ref(&cat), &products);
        assert_eq!(drift.len(), 1);
        assert_eq!(drift[0].cached, 5);
        assert_eq!(drift[0].actual, 2);
    }

    #[test]
    fn test_refresh_counts() {
        let now = Utc::now();
        let mut cats = vec![
            Category::new(CategoryId::new("tops"), "Áo", "tops", now),
            Category::new(CategoryId::new("shoes"), "Giày", "shoes", now),
        ];
        cats[1].product_count = Some(7);

        refresh_product_counts(&mut cats, &products());
        assert_eq!(cats[0].product_count, Some(2));
        assert_eq!(cats[1].product_count, Some(0));
        assert_eq!(cats[0].updated_at, now);
        assert!(stale_product_counts(&cats, &products()).is_empty());
    }
}
