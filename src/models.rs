use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

/// A single equipment document as stored in the `data` column.
///
/// Items are immutable per query result; unknown document fields are dropped
/// on deserialization and absent optional fields are omitted on the way out.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub name: String,
    /// Spatial coordinates, unused by any query.
    pub coords: Vec<f64>,
    pub slot_type: String,
    pub item_type: String,
    pub slot: String,
    pub quality: String,
    pub required_level: i32,
    pub item_level: i32,
    pub binding: String,
    pub zone: String,
    pub damage: Option<DamageInfo>,
    pub primary_stats: Option<HashMap<String, i64>>,
    pub secondary_stats: Option<HashMap<String, serde_json::Value>>,
    pub class_restrictions: Option<Vec<String>>,
    pub descriptions: Option<Vec<AbilityDescription>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct DamageInfo {
    pub min: f64,
    pub max: f64,
    pub damage_type: String,
    pub speed: f64,
    pub damage_per_second: f64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AbilityDescription {
    pub name: Option<String>,
    pub cooldown: Option<String>,
    pub description: Option<String>,
}

/// Document field a filter can constrain. The kind decides which filter shape
/// is legal: the first seven take membership sets, the last four take ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Zone,
    Quality,
    SlotType,
    ItemType,
    Slot,
    PrimaryStats,
    SecondaryStats,
    ItemLevel,
    RequiredLevel,
    Dps,
    Speed,
}

impl FieldKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Zone => "zone",
            FieldKind::Quality => "quality",
            FieldKind::SlotType => "slotType",
            FieldKind::ItemType => "itemType",
            FieldKind::Slot => "slot",
            FieldKind::PrimaryStats => "primaryStats",
            FieldKind::SecondaryStats => "secondaryStats",
            FieldKind::ItemLevel => "itemLevel",
            FieldKind::RequiredLevel => "requiredLevel",
            FieldKind::Dps => "dps",
            FieldKind::Speed => "speed",
        }
    }

    /// Kinds the distinct-option lookup supports.
    #[must_use]
    pub fn is_categorical(self) -> bool {
        matches!(
            self,
            FieldKind::Zone
                | FieldKind::Quality
                | FieldKind::SlotType
                | FieldKind::ItemType
                | FieldKind::Slot
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed constraint narrowing the result set.
///
/// Membership filters match when the field value is one of the accepted set
/// (or, for the stat-map kinds, when the document has an intersecting key).
/// Range filters match when the numeric field lies within the inclusive
/// window. A filter whose shape does not fit its field kind contributes no
/// clause; so does an empty membership set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Filter {
    Membership {
        #[serde(rename = "type")]
        field: FieldKind,
        #[serde(rename = "in")]
        values: Vec<String>,
    },
    Range {
        #[serde(rename = "type")]
        field: FieldKind,
        min: f64,
        max: f64,
    },
}

/// Numeric field served by the aggregate range endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeField {
    ItemLevel,
    RequiredLevel,
    Dps,
    Speed,
}

/// Body of `POST /api/items`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemsRequest {
    /// 1-based page number; values below 1 are clamped to 1.
    pub page: u64,
    pub search_query: String,
    /// When set, the search text matches item names lexically and no
    /// embedding is involved.
    pub advanced_search: bool,
    pub filters: Vec<Filter>,
    /// Precomputed embedding vector; bypasses the embedding service.
    pub embeddings: Option<Vec<f32>>,
}

impl Default for ItemsRequest {
    fn default() -> Self {
        Self {
            page: 1,
            search_query: String::new(),
            advanced_search: false,
            filters: Vec::new(),
            embeddings: None,
        }
    }
}

/// Body of `POST /api/options`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct OptionsRequest {
    #[serde(rename = "type", default)]
    pub option_type: Option<String>,
}

/// One entry for a filter select control; label always equals value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OptionEntry {
    pub label: String,
    pub value: String,
}

/// Global min/max of a numeric field; `{0, 0}` when no row has the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RangeBounds {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse {
    pub items: Vec<Item>,
    pub total_count: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}
