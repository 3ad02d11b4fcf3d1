use sea_orm::Condition;
use sea_orm::sea_query::extension::postgres::{PgBinOper, PgExpr};
use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};

use crate::entity;
use crate::models::{FieldKind, Filter, RangeField};

/// `data->>'key'`, the text value of a top-level document field.
pub(crate) fn json_text(key: &'static str) -> SimpleExpr {
    Expr::col(entity::Column::Data).binary(PgBinOper::CastJsonField, Expr::val(key))
}

/// `data->'key'`, the JSON value of a top-level document field.
pub(crate) fn json_get(key: &'static str) -> SimpleExpr {
    Expr::col(entity::Column::Data).binary(PgBinOper::GetJsonField, Expr::val(key))
}

/// `data->'damage'->>'key'`, a text value nested under the damage sub-record.
pub(crate) fn damage_text(key: &'static str) -> SimpleExpr {
    Expr::expr(json_get("damage")).binary(PgBinOper::CastJsonField, Expr::val(key))
}

/// `data->'damage'->'key'`, a JSON value nested under the damage sub-record.
fn damage_get(key: &'static str) -> SimpleExpr {
    Expr::expr(json_get("damage")).binary(PgBinOper::GetJsonField, Expr::val(key))
}

pub(crate) fn int_field(key: &'static str) -> SimpleExpr {
    Expr::expr(json_text(key)).cast_as(Alias::new("int4"))
}

pub(crate) fn float_field(key: &'static str) -> SimpleExpr {
    Expr::expr(json_text(key)).cast_as(Alias::new("float8"))
}

pub(crate) fn float_damage_field(key: &'static str) -> SimpleExpr {
    Expr::expr(damage_text(key)).cast_as(Alias::new("float8"))
}

/// Folds the search text and active filters into one AND-composed predicate.
///
/// Every present input contributes exactly one conjunctive clause; with no
/// inputs the condition is unconstrained and matches every row. Values are
/// always bound, never interpolated.
pub fn apply_filters(search_query: Option<&str>, filters: &[Filter]) -> Condition {
    let mut condition = Condition::all();

    if let Some(q) = search_query {
        let q = q.trim();
        if !q.is_empty() {
            condition = condition.add(Expr::expr(json_text("name")).ilike(format!("%{q}%")));
        }
    }

    for filter in filters {
        if let Some(clause) = filter_condition(filter) {
            condition = condition.add(clause);
        }
    }

    condition
}

/// Translates one filter into its predicate, or `None` when the filter is a
/// no-op: empty membership set, or a shape that does not fit the field kind.
fn filter_condition(filter: &Filter) -> Option<Condition> {
    match filter {
        Filter::Membership { field, values } => {
            if values.is_empty() {
                return None;
            }
            match field {
                FieldKind::Zone
                | FieldKind::Quality
                | FieldKind::SlotType
                | FieldKind::ItemType
                | FieldKind::Slot => Some(
                    Condition::all()
                        .add(Expr::expr(json_text(field.as_str())).is_in(values.clone())),
                ),
                FieldKind::PrimaryStats | FieldKind::SecondaryStats => {
                    Some(stat_key_condition(field.as_str(), values))
                }
                _ => None,
            }
        }
        Filter::Range { field, min, max } => {
            let range = match field {
                FieldKind::ItemLevel => RangeField::ItemLevel,
                FieldKind::RequiredLevel => RangeField::RequiredLevel,
                FieldKind::Dps => RangeField::Dps,
                FieldKind::Speed => RangeField::Speed,
                _ => return None,
            };
            Some(range_condition(range, *min, *max))
        }
    }
}

/// Matches documents whose stat map has any key from the accepted set.
fn stat_key_condition(map_key: &'static str, values: &[String]) -> Condition {
    let mut any = Condition::any();
    for value in values {
        let exists: SimpleExpr = Func::cust(Alias::new("jsonb_exists"))
            .arg(json_get(map_key))
            .arg(Expr::val(value.clone()))
            .into();
        any = any.add(exists);
    }
    any
}

/// Inclusive window on a numeric field. min > max is accepted as-is and
/// simply matches nothing. dps/speed additionally require the nested field
/// to be present.
fn range_condition(field: RangeField, min: f64, max: f64) -> Condition {
    match field {
        RangeField::ItemLevel => {
            Condition::all().add(Expr::expr(int_field("itemLevel")).between(min, max))
        }
        RangeField::RequiredLevel => {
            Condition::all().add(Expr::expr(int_field("requiredLevel")).between(min, max))
        }
        RangeField::Dps => Condition::all()
            .add(Expr::expr(float_damage_field("damagePerSecond")).between(min, max))
            .add(Expr::expr(damage_get("damagePerSecond")).is_not_null()),
        RangeField::Speed => Condition::all()
            .add(Expr::expr(float_damage_field("speed")).between(min, max))
            .add(Expr::expr(damage_get("speed")).is_not_null()),
    }
}

impl RangeField {
    /// Aggregate value expression, cast to float8 so MIN/MAX read as f64.
    pub(crate) fn value_expr(self) -> SimpleExpr {
        match self {
            RangeField::ItemLevel => float_field("itemLevel"),
            RangeField::RequiredLevel => float_field("requiredLevel"),
            RangeField::Dps => float_damage_field("damagePerSecond"),
            RangeField::Speed => float_damage_field("speed"),
        }
    }

    /// Raw text expression used for the presence guard.
    pub(crate) fn presence_expr(self) -> SimpleExpr {
        match self {
            RangeField::ItemLevel => json_text("itemLevel"),
            RangeField::RequiredLevel => json_text("requiredLevel"),
            RangeField::Dps => damage_text("damagePerSecond"),
            RangeField::Speed => damage_text("speed"),
        }
    }
}
