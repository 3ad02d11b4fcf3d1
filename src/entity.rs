use sea_orm::entity::prelude::*;

/// Row of the `items` document table. Each item is stored as an opaque JSONB
/// value; the query layer only reaches into it through JSON path expressions.
///
/// The `embedding` pgvector column is deliberately not mapped here. It is
/// only referenced by the distance ordering expression and never selected.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "JsonBinary")]
    pub data: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
