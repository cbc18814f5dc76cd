//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Canonical menu item record
///
/// `max_portions_per_takeaway` present means the item belongs to a takeaway
/// category whose plates share a portion cap. Absent means the item is
/// capacity-exempt (drinks and the like) and never counts toward any cap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_portions_per_takeaway: Option<i32>,
}

impl MenuItem {
    /// Whether the item counts toward a takeaway portion cap
    #[inline]
    pub fn is_takeaway(&self) -> bool {
        self.max_portions_per_takeaway.is_some()
    }

    /// Clip a requested portion count to this item's own cap
    pub fn clip_to_own_cap(&self, portions: i32) -> i32 {
        match self.max_portions_per_takeaway {
            Some(cap) => portions.min(cap),
            None => portions,
        }
    }
}

/// Menu item as received from the REST collaborator
///
/// Category payloads sometimes reference items by bare id and sometimes
/// inline the full record. Both shapes are accepted here and normalized to
/// [`MenuItem`] at ingestion, never inside plate logic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawMenuItem {
    /// Reference to an item already known to the catalog
    Id(String),
    /// Full inline record
    Record(MenuItemRecord),
}

/// Inline menu item record (camelCase on the wire)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default, alias = "max_portions_per_takeaway")]
    pub max_portions_per_takeaway: Option<i64>,
}

fn default_available() -> bool {
    true
}

impl RawMenuItem {
    /// Id of the referenced or inlined item
    pub fn id(&self) -> &str {
        match self {
            RawMenuItem::Id(id) => id,
            RawMenuItem::Record(record) => &record.id,
        }
    }
}
