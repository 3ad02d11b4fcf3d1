use std::collections::BTreeMap;
use std::sync::Arc;

use armory::entity;
use armory::routes::{self, AppState};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use sea_orm::{DatabaseConnection, Value};
use serde_json::json;
use tower::ServiceExt;

pub fn setup_app(db: DatabaseConnection) -> Router {
    routes::app(AppState {
        db: Arc::new(db),
        embedder: None,
    })
}

pub fn item_row(id: i64, doc: serde_json::Value) -> entity::Model {
    entity::Model { id, data: doc }
}

/// Row shape produced by `PaginatorTrait::count`.
pub fn count_row(count: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::BigInt(Some(count)))])
}

pub fn option_row(name: &str) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("name", Value::String(Some(Box::new(name.to_string()))))])
}

pub fn range_row(min: Option<f64>, max: Option<f64>) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("min", Value::Double(min)), ("max", Value::Double(max))])
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        json!(null)
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
