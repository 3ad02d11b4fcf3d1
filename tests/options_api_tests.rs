use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::json;

mod common;
use common::{get_json, option_row, post_json, range_row, setup_app};

#[tokio::test]
async fn quality_options_come_back_sorted_with_label_equal_to_value() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            option_row("Common"),
            option_row("Epic"),
            option_row("Rare"),
        ]])
        .into_connection();
    let app = setup_app(db);

    let (status, body) = post_json(&app, "/api/options", json!({ "type": "quality" })).await;

    assert_eq!(status, 200);
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0], json!({ "label": "Common", "value": "Common" }));
    assert_eq!(entries[1], json!({ "label": "Epic", "value": "Epic" }));
    assert_eq!(entries[2], json!({ "label": "Rare", "value": "Rare" }));
}

#[tokio::test]
async fn missing_type_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let app = setup_app(db);

    let (status, body) = post_json(&app, "/api/options", json!({})).await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "Type is required");
}

#[tokio::test]
async fn unknown_type_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let app = setup_app(db);

    let (status, body) = post_json(&app, "/api/options", json!({ "type": "rarity" })).await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "Invalid option type");
}

#[tokio::test]
async fn non_categorical_kind_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let app = setup_app(db);

    let (status, _body) = post_json(&app, "/api/options", json!({ "type": "dps" })).await;

    assert_eq!(status, 400);
}

#[tokio::test]
async fn dps_range_returns_discovered_bounds() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![range_row(Some(3.2), Some(91.5))]])
        .into_connection();
    let app = setup_app(db);

    let (status, body) = get_json(&app, "/api/dps-range").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "min": 3.2, "max": 91.5 }));
}

#[tokio::test]
async fn range_is_zero_zero_when_no_row_has_the_field() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![range_row(None, None)]])
        .into_connection();
    let app = setup_app(db);

    let (status, body) = get_json(&app, "/api/speed-range").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "min": 0.0, "max": 0.0 }));
}

#[tokio::test]
async fn item_level_range_returns_both_bounds() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![range_row(Some(1.0), Some(60.0))]])
        .into_connection();
    let app = setup_app(db);

    let (status, body) = get_json(&app, "/api/item-level-range").await;

    assert_eq!(status, 200);
    assert_eq!(body["min"], 1.0);
    assert_eq!(body["max"], 60.0);
}

#[tokio::test]
async fn required_level_range_endpoint_is_exposed() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![range_row(Some(5.0), Some(58.0))]])
        .into_connection();
    let app = setup_app(db);

    let (status, body) = get_json(&app, "/api/required-level-range").await;

    assert_eq!(status, 200);
    assert_eq!(body["max"], 58.0);
}
