use sea_orm::sea_query::{Alias, Expr, Func, Query, SelectStatement};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityName, EntityTrait, FromQueryResult, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::entity;
use crate::error::AppError;
use crate::filter::{apply_filters, json_text};
use crate::models::{
    FieldKind, Filter, Item, OptionEntry, PaginatedResponse, RangeBounds, RangeField,
};
use crate::pagination::{PAGE_SIZE, page_window, total_pages};
use crate::sort;

/// Ordered, filtered, windowed page select. Public so tests can assert the
/// rendered SQL without a live store.
pub fn items_select(
    page: u64,
    search_query: Option<&str>,
    embedding: Option<&[f32]>,
    filters: &[Filter],
) -> Select<entity::Entity> {
    let (offset, limit) = page_window(page);
    let mut select = entity::Entity::find().filter(apply_filters(search_query, filters));
    for (expr, direction) in sort::order_keys(embedding) {
        select = select.order_by(expr, direction);
    }
    select.offset(offset).limit(limit)
}

/// Executes the query builder: one page fetch plus an independent count over
/// the same predicate. Both queries are read-only; no snapshot is shared
/// between them.
pub async fn fetch_items(
    db: &DatabaseConnection,
    page: u64,
    search_query: Option<&str>,
    embedding: Option<&[f32]>,
    filters: &[Filter],
) -> Result<PaginatedResponse, AppError> {
    let page = page.max(1);
    let rows = items_select(page, search_query, embedding, filters)
        .all(db)
        .await?;
    let total_count = entity::Entity::find()
        .filter(apply_filters(search_query, filters))
        .count(db)
        .await?;

    let items = rows
        .into_iter()
        .map(|row| serde_json::from_value::<Item>(row.data))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PaginatedResponse {
        items,
        total_count,
        page,
        page_size: PAGE_SIZE,
        total_pages: total_pages(total_count),
    })
}

/// Distinct non-null, non-empty values of a categorical field, ascending.
pub fn options_select(kind: FieldKind) -> Result<SelectStatement, AppError> {
    if !kind.is_categorical() {
        return Err(AppError::BadRequest(format!(
            "Unsupported option type: {kind}"
        )));
    }
    let key = kind.as_str();
    let mut stmt = Query::select();
    stmt.distinct()
        .expr_as(json_text(key), Alias::new("name"))
        .from(entity::Entity.table_ref())
        .and_where(Expr::expr(json_text(key)).is_not_null())
        .and_where(Expr::expr(json_text(key)).ne(""))
        .order_by(Alias::new("name"), Order::Asc);
    Ok(stmt)
}

#[derive(FromQueryResult)]
struct OptionRow {
    name: String,
}

pub async fn fetch_distinct_options(
    db: &DatabaseConnection,
    kind: FieldKind,
) -> Result<Vec<OptionEntry>, AppError> {
    let stmt = options_select(kind)?;
    let rows = OptionRow::find_by_statement(db.get_database_backend().build(&stmt))
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .map(|row| OptionEntry {
            label: row.name.clone(),
            value: row.name,
        })
        .collect())
}

/// MIN/MAX of a numeric field over rows where the field is present.
pub fn range_select(field: RangeField) -> SelectStatement {
    let mut stmt = Query::select();
    stmt.expr_as(Func::min(field.value_expr()), Alias::new("min"))
        .expr_as(Func::max(field.value_expr()), Alias::new("max"))
        .from(entity::Entity.table_ref())
        .and_where(Expr::expr(field.presence_expr()).is_not_null());
    stmt
}

#[derive(FromQueryResult)]
struct RangeRow {
    min: Option<f64>,
    max: Option<f64>,
}

pub async fn fetch_field_range(
    db: &DatabaseConnection,
    field: RangeField,
) -> Result<RangeBounds, AppError> {
    let stmt = range_select(field);
    let row = RangeRow::find_by_statement(db.get_database_backend().build(&stmt))
        .one(db)
        .await?;
    let bounds = match row {
        Some(row) => RangeBounds {
            min: row.min.unwrap_or(0.0),
            max: row.max.unwrap_or(0.0),
        },
        None => RangeBounds { min: 0.0, max: 0.0 },
    };
    Ok(bounds)
}
