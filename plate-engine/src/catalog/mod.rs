//! Menu catalog - canonical menu items and boundary normalization
//!
//! Raw menu payloads (bare ids or inline records) are normalized into
//! [`MenuItem`] here. Plate logic only ever sees canonical items.

use std::path::Path;

use dashmap::DashMap;
use serde::Deserialize;

use crate::core::EngineConfig;
use crate::plate_money;
use crate::plates::{PlateError, PlateResult};
use crate::utils::validation::{self, MAX_ID_LEN, MAX_NAME_LEN};
use shared::models::{MenuItem, MenuItemRecord, RawMenuItem};

/// Read access to the current menu, plus availability updates
pub trait MenuCatalog: Send + Sync {
    fn get(&self, menu_item_id: &str) -> Option<MenuItem>;

    /// All items, ordered by id
    fn all(&self) -> Vec<MenuItem>;

    /// Record an availability change. Returns false for unknown items.
    fn set_availability(&self, menu_item_id: &str, available: bool) -> bool;
}

/// Concurrent in-memory catalog
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: DashMap<String, MenuItem>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: impl IntoIterator<Item = MenuItem>) -> Self {
        let catalog = Self::new();
        for item in items {
            catalog.upsert(item);
        }
        catalog
    }

    /// Insert or replace an item. Returns the previous version.
    pub fn upsert(&self, item: MenuItem) -> Option<MenuItem> {
        self.items.insert(item.id.clone(), item)
    }

    /// Normalize a raw payload and store the result.
    pub fn ingest(&self, raw: &RawMenuItem, config: &EngineConfig) -> PlateResult<MenuItem> {
        let item = normalize(raw, self, config)?;
        self.upsert(item.clone());
        Ok(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl MenuCatalog for InMemoryCatalog {
    fn get(&self, menu_item_id: &str) -> Option<MenuItem> {
        self.items.get(menu_item_id).map(|entry| entry.value().clone())
    }

    fn all(&self) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = self.items.iter().map(|e| e.value().clone()).collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        items
    }

    fn set_availability(&self, menu_item_id: &str, available: bool) -> bool {
        match self.items.get_mut(menu_item_id) {
            Some(mut entry) => {
                entry.available = available;
                true
            }
            None => false,
        }
    }
}

/// Convert a raw payload into a canonical [`MenuItem`].
///
/// A bare id must already be known to `catalog`. An inline record may omit
/// name or price when the catalog already holds the item; omitted fields are
/// taken from the known version.
pub fn normalize(
    raw: &RawMenuItem,
    catalog: &dyn MenuCatalog,
    config: &EngineConfig,
) -> PlateResult<MenuItem> {
    match raw {
        RawMenuItem::Id(id) => catalog
            .get(id)
            .ok_or_else(|| PlateError::MenuItemNotFound(id.clone())),
        RawMenuItem::Record(record) => normalize_record(record, catalog.get(&record.id), config),
    }
}

fn normalize_record(
    record: &MenuItemRecord,
    known: Option<MenuItem>,
    config: &EngineConfig,
) -> PlateResult<MenuItem> {
    validation::validate_required_text(&record.id, "id", MAX_ID_LEN)?;

    let name = match (&record.name, &known) {
        (Some(name), _) => name.trim().to_string(),
        (None, Some(known)) => known.name.clone(),
        (None, None) => record.id.clone(),
    };
    validation::validate_required_text(&name, "name", MAX_NAME_LEN)?;

    let price = match (record.price, &known) {
        (Some(price), _) => {
            plate_money::to_decimal(validation::validate_price(price, config.max_item_price)?)
        }
        (None, Some(known)) => known.price,
        (None, None) => {
            return Err(PlateError::InvalidMenuItem(format!(
                "price missing for {}",
                record.id
            )));
        }
    };

    let max_portions_per_takeaway = match record.max_portions_per_takeaway {
        None => None,
        Some(cap) if cap > 0 => Some(i32::try_from(cap).map_err(|_| {
            PlateError::InvalidMenuItem(format!("cap {cap} out of range for {}", record.id))
        })?),
        Some(cap) => {
            return Err(PlateError::InvalidMenuItem(format!(
                "cap must be positive for {}, got {cap}",
                record.id
            )));
        }
    };

    Ok(MenuItem {
        id: record.id.clone(),
        name,
        price,
        available: record.available,
        max_portions_per_takeaway,
    })
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Items(Vec<RawMenuItem>),
    Wrapped { items: Vec<RawMenuItem> },
}

/// Load a JSON catalog file: either an array of items or `{"items": [...]}`.
///
/// Every entry is normalized in order, so a bare id may refer to a record
/// defined earlier in the same file.
pub fn load_catalog_file(
    path: impl AsRef<Path>,
    config: &EngineConfig,
) -> anyhow::Result<InMemoryCatalog> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&content)?;
    let raw_items = match file {
        CatalogFile::Items(items) | CatalogFile::Wrapped { items } => items,
    };

    let catalog = InMemoryCatalog::new();
    for raw in &raw_items {
        catalog
            .ingest(raw, config)
            .map_err(|e| anyhow::anyhow!("{}: item {}: {}", path.display(), raw.id(), e))?;
    }
    tracing::info!(path = %path.display(), items = catalog.len(), "Catalog loaded");
    Ok(catalog)
}
