//! End-to-end checks of the category contracts through the public API.

use std::collections::HashSet;

use chrono::{Duration, TimeZone, Utc};
use serde_json::json;
use storefront_catalog::prelude::*;

fn t0() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn ao() -> Category {
    Category::new(CategoryId::new("1"), "Áo", "tops", t0())
}

#[test]
fn seed_records_validate() {
    for cat in seed_categories() {
        let validated = validate(cat.clone()).expect("seed category should validate");
        assert_eq!(&validated, cat);
        assert!(cat.created_at <= cat.updated_at);
    }
}

#[test]
fn seed_records_survive_wire_validation() {
    for cat in seed_categories() {
        let json = serde_json::to_value(cat).unwrap();
        assert_eq!(&validate_record(&json).unwrap(), cat);
    }
}

#[test]
fn ids_and_slugs_stay_unique_through_mutations() {
    let store = MemoryCategoryStore::from_seed();
    store
        .create(CreateCategoryRequest::new("Kính mắt", "eyewear"))
        .unwrap();
    store
        .update(&UpdateCategoryRequest::new("2").with_slug("pants"))
        .unwrap();
    assert!(matches!(
        store.create(CreateCategoryRequest::new("Quần", "pants")),
        Err(CatalogError::DuplicateSlug { .. })
    ));
    assert!(matches!(
        store.update(&UpdateCategoryRequest::new("3").with_slug("eyewear")),
        Err(CatalogError::DuplicateSlug { .. })
    ));

    let all = store.list_all();
    let ids: HashSet<_> = all.iter().map(|c| c.id.clone()).collect();
    let slugs: HashSet<_> = all.iter().map(|c| c.slug.clone()).collect();
    assert_eq!(ids.len(), all.len());
    assert_eq!(slugs.len(), all.len());
}

#[test]
fn validate_is_idempotent() {
    let mut bad = ao();
    bad.slug = "Bad!".into();
    assert_eq!(validate(ao()), validate(ao()));
    assert_eq!(validate(bad.clone()), validate(bad));
}

#[test]
fn partial_update_preserves_untouched_fields() {
    let snapshot = vec![ao()];
    let request: UpdateCategoryRequest =
        serde_json::from_value(json!({"id": "1", "description": "new desc"})).unwrap();
    let later = t0() + Duration::seconds(30);

    let updated = accept_update(&snapshot, &request, later).unwrap();

    let mut expected = ao();
    expected.description = Some("new desc".into());
    expected.updated_at = later;
    assert_eq!(updated, expected);
    assert!(updated.updated_at > snapshot[0].updated_at);
}

#[test]
fn duplicate_slug_on_create() {
    let err = accept_create(
        &[ao()],
        CreateCategoryRequest::new("Áo sơ mi", "tops"),
        CategoryId::generate(),
        t0(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        CatalogError::DuplicateSlug {
            slug: "tops".into()
        }
    );
}

#[test]
fn update_of_unknown_id() {
    let err = accept_update(
        &[ao()],
        &UpdateCategoryRequest::new("nonexistent"),
        t0(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        CatalogError::NotFound {
            id: "nonexistent".into()
        }
    );
}

#[test]
fn invalid_slug_on_create() {
    let err = accept_create(
        &[],
        CreateCategoryRequest::new("Áo", "Invalid Slug!"),
        CategoryId::generate(),
        t0(),
    )
    .unwrap_err();
    match err {
        CatalogError::Validation(e) => assert_eq!(e.field, "slug"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn deactivation_hides_but_keeps() {
    let mut dataset = seed_snapshot();
    let req = UpdateCategoryRequest::new("1").with_active(false);
    let updated = accept_update(&dataset, &req, Utc::now()).unwrap();
    let slot = dataset.iter_mut().find(|c| c.id == updated.id).unwrap();
    *slot = updated;

    assert_eq!(dataset.len(), seed_categories().len());
    assert!(dataset.iter().any(|c| c.slug == "tops"));

    let visible: Vec<_> = dataset.iter().filter(|c| is_visible(c)).collect();
    assert_eq!(visible.len(), dataset.len() - 1);
    assert!(visible.iter().all(|c| c.slug != "tops"));

    // the shared seed is untouched
    assert!(seed_categories()[0].is_active);
}

#[test]
fn error_bodies() {
    let err = accept_create(
        &[],
        CreateCategoryRequest::new("", "empty"),
        CategoryId::generate(),
        t0(),
    )
    .unwrap_err();
    let body = serde_json::to_value(ErrorBody::from(&err)).unwrap();
    assert_eq!(body["field"], "name");
    assert_eq!(body["message"], "Invalid name: must not be empty");
}
