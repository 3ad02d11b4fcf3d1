use sea_orm::Order;
use sea_orm::sea_query::{Expr, SimpleExpr};

use crate::filter::{int_field, json_text};

/// Sort keys for the item page, in priority order.
///
/// With an embedding present the primary key is ascending distance to the
/// row's precomputed vector (nearest first); name and item level always
/// follow, as sole ordering or as tie-breakers.
pub fn order_keys(embedding: Option<&[f32]>) -> Vec<(SimpleExpr, Order)> {
    let mut keys = Vec::with_capacity(3);
    if let Some(vector) = embedding {
        keys.push((distance_expr(vector), Order::Asc));
    }
    keys.push((json_text("name"), Order::Asc));
    keys.push((int_field("itemLevel"), Order::Asc));
    keys
}

/// pgvector distance between the stored embedding and the query vector.
/// The vector travels as a bound parameter, cast server-side.
fn distance_expr(vector: &[f32]) -> SimpleExpr {
    Expr::cust_with_values(r#""embedding" <-> ?::vector"#, [vector_literal(vector)])
}

fn vector_literal(vector: &[f32]) -> String {
    let parts: Vec<String> = vector.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(","))
}
