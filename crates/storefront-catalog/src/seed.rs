//! Fixed seed dataset for local development, prototyping and tests.
//!
//! The shared sequences are built once and never mutated. Anything that
//! needs to change categories takes a copy through [`seed_snapshot`].

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

use crate::catalog::{Category, ProductSummary};
use crate::ids::CategoryId;

static SEED_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(build_categories);
static SEED_PRODUCTS: Lazy<Vec<ProductSummary>> = Lazy::new(build_products);

/// The seed categories, in display order.
pub fn seed_categories() -> &'static [Category] {
    &SEED_CATEGORIES
}

/// An owned copy of the seed categories, safe to mutate.
pub fn seed_snapshot() -> Vec<Category> {
    SEED_CATEGORIES.clone()
}

/// Mock products whose category references back the seed `productCount`s.
pub fn seed_products() -> &'static [ProductSummary] {
    &SEED_PRODUCTS
}

/// 2024-01-01T00:00:00Z plus `hours`.
fn seed_time(hours: i64) -> DateTime<Utc> {
    const JAN_1_2024: i64 = 1_704_067_200;
    DateTime::<Utc>::default() + Duration::seconds(JAN_1_2024 + hours * 3600)
}

struct SeedRow {
    id: &'static str,
    slug: &'static str,
    name: [&'static str; 3],
    description: [&'static str; 3],
    image: Option<&'static str>,
    created: i64,
    updated: i64,
    products: u64,
}

const ROWS: &[SeedRow] = &[
    SeedRow {
        id: "1",
        slug: "tops",
        name: ["Áo", "Tops", "トップス"],
        description: [
            "Áo thun, áo sơ mi và áo khoác cho mọi dịp",
            "T-shirts, shirts and jackets for every occasion",
            "あらゆるシーンに合うTシャツ、シャツ、ジャケット",
        ],
        image: Some("/images/categories/tops.jpg"),
        created: 0,
        updated: 48,
        products: 3,
    },
    SeedRow {
        id: "2",
        slug: "bottoms",
        name: ["Quần", "Bottoms", "ボトムス"],
        description: [
            "Quần jean, quần tây và quần short",
            "Jeans, trousers and shorts",
            "ジーンズ、スラックス、ショートパンツ",
        ],
        image: Some("/images/categories/bottoms.jpg"),
        created: 1,
        updated: 1,
        products: 2,
    },
    SeedRow {
        id: "3",
        slug: "shoes",
        name: ["Giày dép", "Shoes", "シューズ"],
        description: [
            "Giày thể thao, giày da và dép",
            "Sneakers, leather shoes and sandals",
            "スニーカー、革靴、サンダル",
        ],
        image: Some("/images/categories/shoes.jpg"),
        created: 2,
        updated: 72,
        products: 2,
    },
    SeedRow {
        id: "4",
        slug: "bags",
        name: ["Túi xách", "Bags", "バッグ"],
        description: [
            "Balo, túi đeo chéo và túi tote",
            "Backpacks, crossbody bags and totes",
            "リュック、ショルダーバッグ、トートバッグ",
        ],
        image: Some("/images/categories/bags.jpg"),
        created: 3,
        updated: 3,
        products: 1,
    },
    SeedRow {
        id: "5",
        slug: "accessories",
        name: ["Phụ kiện", "Accessories", "アクセサリー"],
        description: [
            "Mũ, thắt lưng, khăn và trang sức",
            "Hats, belts, scarves and jewelry",
            "帽子、ベルト、スカーフ、ジュエリー",
        ],
        image: None,
        created: 4,
        updated: 30,
        products: 2,
    },
    SeedRow {
        id: "6",
        slug: "watches",
        name: ["Đồng hồ", "Watches", "腕時計"],
        description: [
            "Đồng hồ nam nữ chính hãng",
            "Genuine watches for men and women",
            "メンズ・レディースの正規品腕時計",
        ],
        image: Some("/images/categories/watches.jpg"),
        created: 5,
        updated: 5,
        products: 0,
    },
];

fn build_categories() -> Vec<Category> {
    ROWS.iter()
        .map(|row| Category {
            id: CategoryId::new(row.id),
            name: row.name[0].to_string(),
            name_en: Some(row.name[1].to_string()),
            name_ja: Some(row.name[2].to_string()),
            description: Some(row.description[0].to_string()),
            description_en: Some(row.description[1].to_string()),
            description_ja: Some(row.description[2].to_string()),
            image: row.image.map(str::to_string),
            slug: row.slug.to_string(),
            is_active: true,
            created_at: seed_time(row.created),
            updated_at: seed_time(row.updated),
            product_count: Some(row.products),
        })
        .collect()
}

fn build_products() -> Vec<ProductSummary> {
    [
        ("p-001", "Áo thun basic", "ao-thun-basic", "1"),
        ("p-002", "Áo sơ mi linen", "ao-so-mi-linen", "1"),
        ("p-003", "Áo khoác denim", "ao-khoac-denim", "1"),
        ("p-004", "Quần jean slim", "quan-jean-slim", "2"),
        ("p-005", "Quần short kaki", "quan-short-kaki", "2"),
        ("p-006", "Giày sneaker trắng", "giay-sneaker-trang", "3"),
        ("p-007", "Dép quai ngang", "dep-quai-ngang", "3"),
        ("p-008", "Balo canvas", "balo-canvas", "4"),
        ("p-009", "Mũ lưỡi trai", "mu-luoi-trai", "5"),
        ("p-010", "Thắt lưng da", "that-lung-da", "5"),
    ]
    .into_iter()
    .map(|(id, name, slug, category)| ProductSummary::new(id, name, slug, category))
    .collect()
}
