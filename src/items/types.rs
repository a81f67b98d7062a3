use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Consumable,
    Weapon,
    Armor,
}

impl ItemType {
    pub fn name(&self) -> &'static str {
        match self {
            ItemType::Consumable => "consumable",
            ItemType::Weapon => "weapon",
            ItemType::Armor => "armor",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Catalog entry describing one kind of item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Effect descriptor in `stat:amount` form, e.g. `health:20`.
    pub effect: String,
    pub cost: u64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
}

impl EquipmentSlot {
    pub fn all() -> [EquipmentSlot; 2] {
        [EquipmentSlot::Weapon, EquipmentSlot::Armor]
    }

    /// The only item type that may occupy this slot.
    pub fn item_type(&self) -> ItemType {
        match self {
            EquipmentSlot::Weapon => ItemType::Weapon,
            EquipmentSlot::Armor => ItemType::Armor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_definition_json_shape() {
        let json = r#"{"type": "weapon", "effect": "strength:5", "cost": 40, "name": "Iron Sword"}"#;
        let def: ItemDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.item_type, ItemType::Weapon);
        assert_eq!(def.effect, "strength:5");
        assert_eq!(def.cost, 40);
        assert_eq!(def.name, "Iron Sword");
    }

    #[test]
    fn test_unknown_item_type_rejected() {
        let json = r#"{"type": "trinket", "effect": "magic:1", "cost": 1, "name": "Bauble"}"#;
        assert!(serde_json::from_str::<ItemDefinition>(json).is_err());
    }

    #[test]
    fn test_slot_item_types() {
        assert_eq!(EquipmentSlot::Weapon.item_type(), ItemType::Weapon);
        assert_eq!(EquipmentSlot::Armor.item_type(), ItemType::Armor);
        assert_eq!(ItemType::Consumable.to_string(), "consumable");
    }
}
