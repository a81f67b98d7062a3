//! Inventory management: slot bookkeeping and consumable use

use super::catalog::{resolve, ItemCatalog};
use super::effect::{apply_effect, parse_effect};
use super::types::ItemType;
use crate::character::record::CharacterRecord;
use crate::core::constants::MAX_INVENTORY_SIZE;
use crate::core::errors::{GameError, GameResult};

// ============================================================================
// Inventory Operations
// ============================================================================

/// Add one item to the end of the inventory
pub fn add_item(record: &mut CharacterRecord, item_id: &str) -> GameResult<()> {
    ensure_space(record)?;
    record.inventory.push(item_id.to_string());
    Ok(())
}

/// Remove the first occurrence of an item
pub fn remove_item(record: &mut CharacterRecord, item_id: &str) -> GameResult<()> {
    let index = record
        .inventory
        .iter()
        .position(|id| id == item_id)
        .ok_or_else(|| GameError::ItemNotFound(item_id.to_string()))?;
    record.inventory.remove(index);
    Ok(())
}

pub fn has_item(record: &CharacterRecord, item_id: &str) -> bool {
    record.inventory.iter().any(|id| id == item_id)
}

pub fn count_item(record: &CharacterRecord, item_id: &str) -> usize {
    record.inventory.iter().filter(|id| *id == item_id).count()
}

pub fn space_remaining(record: &CharacterRecord) -> usize {
    MAX_INVENTORY_SIZE.saturating_sub(record.inventory.len())
}

/// Empty the inventory, handing back everything that was in it
pub fn clear_inventory(record: &mut CharacterRecord) -> Vec<String> {
    std::mem::take(&mut record.inventory)
}

pub(crate) fn ensure_space(record: &CharacterRecord) -> GameResult<()> {
    if space_remaining(record) == 0 {
        return Err(GameError::InventoryFull {
            capacity: MAX_INVENTORY_SIZE,
        });
    }
    Ok(())
}

pub(crate) fn ensure_has_item(record: &CharacterRecord, item_id: &str) -> GameResult<()> {
    if !has_item(record, item_id) {
        return Err(GameError::ItemNotFound(item_id.to_string()));
    }
    Ok(())
}

// ============================================================================
// Item Usage
// ============================================================================

/// Consume one consumable item, applying its effect.
/// Returns a description of what happened.
pub fn use_item<C: ItemCatalog + ?Sized>(
    record: &mut CharacterRecord,
    item_id: &str,
    catalog: &C,
) -> GameResult<String> {
    ensure_has_item(record, item_id)?;
    let definition = resolve(catalog, item_id)?;

    if definition.item_type != ItemType::Consumable {
        return Err(GameError::InvalidItemType {
            item_id: item_id.to_string(),
            expected: ItemType::Consumable.name(),
            found: definition.item_type.name(),
        });
    }

    let effect = parse_effect(&definition.effect)?;
    apply_effect(record, &effect);
    remove_item(record, item_id)?;

    Ok(format!("Used {}, {}", definition.name, effect))
}

// ============================================================================
// Inventory Summary
// ============================================================================

/// One line of an inventory listing: a distinct item and how many are held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    pub item_id: String,
    /// Catalog display name, or the item id when the catalog has no entry
    pub name: String,
    pub item_type: Option<ItemType>,
    pub count: usize,
}

/// Group the inventory by item id, in first-seen order
pub fn inventory_summary<C: ItemCatalog + ?Sized>(
    record: &CharacterRecord,
    catalog: &C,
) -> Vec<InventoryEntry> {
    let mut entries: Vec<InventoryEntry> = Vec::new();

    for item_id in &record.inventory {
        if let Some(entry) = entries.iter_mut().find(|e| &e.item_id == item_id) {
            entry.count += 1;
            continue;
        }

        let definition = catalog.lookup(item_id);
        entries.push(InventoryEntry {
            item_id: item_id.clone(),
            name: definition
                .map(|d| d.name.clone())
                .unwrap_or_else(|| item_id.clone()),
            item_type: definition.map(|d| d.item_type),
            count: 1,
        });
    }

    entries
}
