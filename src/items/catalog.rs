//! Item catalog lookup and a JSON-backed in-memory implementation.

use super::types::ItemDefinition;
use crate::core::errors::{GameError, GameResult};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Read-only item metadata source supplied by the caller.
pub trait ItemCatalog {
    fn lookup(&self, item_id: &str) -> Option<&ItemDefinition>;
}

impl ItemCatalog for HashMap<String, ItemDefinition> {
    fn lookup(&self, item_id: &str) -> Option<&ItemDefinition> {
        self.get(item_id)
    }
}

impl ItemCatalog for BTreeMap<String, ItemDefinition> {
    fn lookup(&self, item_id: &str) -> Option<&ItemDefinition> {
        self.get(item_id)
    }
}

pub(crate) fn resolve<'a, C: ItemCatalog + ?Sized>(
    catalog: &'a C,
    item_id: &str,
) -> GameResult<&'a ItemDefinition> {
    catalog
        .lookup(item_id)
        .ok_or_else(|| GameError::ItemNotFound(item_id.to_string()))
}

/// Item definitions keyed by item id.
///
/// JSON form is an object mapping ids to definitions:
/// `{"health_potion": {"type": "consumable", "effect": "health:20", "cost": 25, "name": "Health Potion"}}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: BTreeMap<String, ItemDefinition>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> GameResult<Self> {
        let items: BTreeMap<String, ItemDefinition> = serde_json::from_str(json)
            .map_err(|e| GameError::InvalidSaveData(format!("item catalog: {}", e)))?;
        Ok(Self { items })
    }

    pub fn from_path(path: &Path) -> GameResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn insert(&mut self, item_id: impl Into<String>, definition: ItemDefinition) {
        self.items.insert(item_id.into(), definition);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ItemDefinition)> {
        self.items.iter().map(|(id, def)| (id.as_str(), def))
    }
}

impl ItemCatalog for Catalog {
    fn lookup(&self, item_id: &str) -> Option<&ItemDefinition> {
        self.items.get(item_id)
    }
}
