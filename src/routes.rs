use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use sea_orm::DatabaseConnection;
use utoipa::OpenApi;

use crate::embedding::Embedder;
use crate::error::AppError;
use crate::models::{
    FieldKind, ItemsRequest, OptionEntry, OptionsRequest, PaginatedResponse, RangeBounds,
    RangeField,
};
use crate::query;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub embedder: Option<Arc<dyn Embedder>>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", post(list_items))
        .route("/options", post(list_options))
        .route("/item-level-range", get(item_level_range))
        .route("/required-level-range", get(required_level_range))
        .route("/dps-range", get(dps_range))
        .route("/speed-range", get(speed_range))
}

/// Full application router with the API nested under `/api`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", router())
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
}

/// Fetch one page of items.
///
/// Advanced mode searches item names lexically. Otherwise a non-empty search
/// string is embedded (client-supplied vectors take precedence) and results
/// are ordered by vector distance; with no embedding service configured the
/// search degrades to lexical matching.
#[utoipa::path(
    post,
    path = "/api/items",
    request_body = ItemsRequest,
    responses(
        (status = 200, description = "One page of matching items", body = PaginatedResponse),
        (status = 500, description = "Store unreachable or misconfigured"),
        (status = 502, description = "Embedding service unavailable"),
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    Json(request): Json<ItemsRequest>,
) -> Result<Json<PaginatedResponse>, AppError> {
    let page = request.page.max(1);
    let search = request.search_query.trim();

    if request.advanced_search {
        let result =
            query::fetch_items(&state.db, page, Some(search), None, &request.filters).await?;
        return Ok(Json(result));
    }

    let embedding = match request.embeddings {
        Some(vector) => Some(vector),
        None if !search.is_empty() => match &state.embedder {
            Some(embedder) => Some(embedder.embed(search).await?),
            None => None,
        },
        None => None,
    };

    let result = match embedding {
        Some(vector) => {
            query::fetch_items(&state.db, page, None, Some(&vector), &request.filters).await?
        }
        None => query::fetch_items(&state.db, page, Some(search), None, &request.filters).await?,
    };
    Ok(Json(result))
}

/// Distinct values of a categorical field, for filter controls.
#[utoipa::path(
    post,
    path = "/api/options",
    request_body = OptionsRequest,
    responses(
        (status = 200, description = "Sorted distinct values", body = [OptionEntry]),
        (status = 400, description = "Missing or unsupported option type"),
    )
)]
pub async fn list_options(
    State(state): State<AppState>,
    Json(request): Json<OptionsRequest>,
) -> Result<Json<Vec<OptionEntry>>, AppError> {
    let Some(raw) = request.option_type.filter(|value| !value.is_empty()) else {
        return Err(AppError::BadRequest("Type is required".to_string()));
    };
    let kind: FieldKind = serde_json::from_value(serde_json::Value::String(raw))
        .map_err(|_| AppError::BadRequest("Invalid option type".to_string()))?;
    let options = query::fetch_distinct_options(&state.db, kind).await?;
    Ok(Json(options))
}

#[utoipa::path(
    get,
    path = "/api/item-level-range",
    responses((status = 200, body = RangeBounds))
)]
pub async fn item_level_range(
    State(state): State<AppState>,
) -> Result<Json<RangeBounds>, AppError> {
    let bounds = query::fetch_field_range(&state.db, RangeField::ItemLevel).await?;
    Ok(Json(bounds))
}

#[utoipa::path(
    get,
    path = "/api/required-level-range",
    responses((status = 200, body = RangeBounds))
)]
pub async fn required_level_range(
    State(state): State<AppState>,
) -> Result<Json<RangeBounds>, AppError> {
    let bounds = query::fetch_field_range(&state.db, RangeField::RequiredLevel).await?;
    Ok(Json(bounds))
}

#[utoipa::path(get, path = "/api/dps-range", responses((status = 200, body = RangeBounds)))]
pub async fn dps_range(State(state): State<AppState>) -> Result<Json<RangeBounds>, AppError> {
    let bounds = query::fetch_field_range(&state.db, RangeField::Dps).await?;
    Ok(Json(bounds))
}

#[utoipa::path(get, path = "/api/speed-range", responses((status = 200, body = RangeBounds)))]
pub async fn speed_range(State(state): State<AppState>) -> Result<Json<RangeBounds>, AppError> {
    let bounds = query::fetch_field_range(&state.db, RangeField::Speed).await?;
    Ok(Json(bounds))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list_items,
        list_options,
        item_level_range,
        required_level_range,
        dps_range,
        speed_range
    ),
    components(schemas(
        crate::models::Item,
        crate::models::DamageInfo,
        crate::models::AbilityDescription,
        crate::models::Filter,
        crate::models::FieldKind,
        ItemsRequest,
        OptionsRequest,
        OptionEntry,
        RangeBounds,
        PaginatedResponse
    ))
)]
struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
