use super::catalog::{resolve, ItemCatalog};
use super::effect::{apply_effect, parse_effect};
use super::inventory::{ensure_has_item, ensure_space, remove_item};
use super::types::EquipmentSlot;
use crate::character::record::CharacterRecord;
use crate::core::errors::{GameError, GameResult};
use log::warn;
use serde::{Deserialize, Serialize};

/// Player equipment slots, each holding at most one item id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<String>,
    pub armor: Option<String>,
}

impl Equipment {
    pub fn new() -> Self {
        Self {
            weapon: None,
            armor: None,
        }
    }

    pub fn get(&self, slot: EquipmentSlot) -> &Option<String> {
        match slot {
            EquipmentSlot::Weapon => &self.weapon,
            EquipmentSlot::Armor => &self.armor,
        }
    }

    pub fn set(&mut self, slot: EquipmentSlot, item_id: Option<String>) {
        match slot {
            EquipmentSlot::Weapon => self.weapon = item_id,
            EquipmentSlot::Armor => self.armor = item_id,
        }
    }

    pub fn take(&mut self, slot: EquipmentSlot) -> Option<String> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.take(),
            EquipmentSlot::Armor => self.armor.take(),
        }
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &str> {
        [&self.weapon, &self.armor]
            .into_iter()
            .filter_map(|item| item.as_deref())
    }
}

/// Undo an equipped item's bonus. If the catalog no longer knows the item,
/// or its effect cannot be parsed, the stats are left as they are.
fn reverse_equip_bonus<C: ItemCatalog + ?Sized>(
    record: &mut CharacterRecord,
    item_id: &str,
    catalog: &C,
) {
    let effect = catalog
        .lookup(item_id)
        .ok_or_else(|| GameError::ItemNotFound(item_id.to_string()))
        .and_then(|definition| parse_effect(&definition.effect));

    match effect {
        Ok(effect) => {
            apply_effect(record, &effect.reversed());
        }
        Err(e) => {
            warn!(
                "{}: bonus of {} not reversed on unequip: {}",
                record.name, item_id, e
            );
        }
    }
}

/// Equip an item from the inventory into `slot`, swapping out whatever was
/// there. Returns a description of the change.
pub fn equip<C: ItemCatalog + ?Sized>(
    record: &mut CharacterRecord,
    slot: EquipmentSlot,
    item_id: &str,
    catalog: &C,
) -> GameResult<String> {
    ensure_has_item(record, item_id)?;
    let definition = resolve(catalog, item_id)?;

    let expected = slot.item_type();
    if definition.item_type != expected {
        return Err(GameError::InvalidItemType {
            item_id: item_id.to_string(),
            expected: expected.name(),
            found: definition.item_type.name(),
        });
    }
    let effect = parse_effect(&definition.effect)?;

    // Take the new item out first so the swap never overfills the inventory
    remove_item(record, item_id)?;

    let replaced = record.equipment.take(slot);
    if let Some(old_id) = &replaced {
        reverse_equip_bonus(record, old_id, catalog);
        record.inventory.push(old_id.clone());
    }

    apply_effect(record, &effect);
    record.equipment.set(slot, Some(item_id.to_string()));

    let mut message = format!("Equipped {}, {}", definition.name, effect);
    if let Some(old_id) = replaced {
        message.push_str(&format!(" (unequipped {})", old_id));
    }
    Ok(message)
}

/// Return the item in `slot` to the inventory.
/// Returns the item id, or None if the slot was empty.
pub fn unequip<C: ItemCatalog + ?Sized>(
    record: &mut CharacterRecord,
    slot: EquipmentSlot,
    catalog: &C,
) -> GameResult<Option<String>> {
    let item_id = match record.equipment.get(slot) {
        Some(item_id) => item_id.clone(),
        None => return Ok(None),
    };
    ensure_space(record)?;

    reverse_equip_bonus(record, &item_id, catalog);
    record.equipment.set(slot, None);
    record.inventory.push(item_id.clone());

    Ok(Some(item_id))
}

pub fn equip_weapon<C: ItemCatalog + ?Sized>(
    record: &mut CharacterRecord,
    item_id: &str,
    catalog: &C,
) -> GameResult<String> {
    equip(record, EquipmentSlot::Weapon, item_id, catalog)
}

pub fn equip_armor<C: ItemCatalog + ?Sized>(
    record: &mut CharacterRecord,
    item_id: &str,
    catalog: &C,
) -> GameResult<String> {
    equip(record, EquipmentSlot::Armor, item_id, catalog)
}

pub fn unequip_weapon<C: ItemCatalog + ?Sized>(
    record: &mut CharacterRecord,
    catalog: &C,
) -> GameResult<Option<String>> {
    unequip(record, EquipmentSlot::Weapon, catalog)
}

pub fn unequip_armor<C: ItemCatalog + ?Sized>(
    record: &mut CharacterRecord,
    catalog: &C,
) -> GameResult<Option<String>> {
    unequip(record, EquipmentSlot::Armor, catalog)
}
