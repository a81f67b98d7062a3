use super::class::CharacterClass;
use super::validation::validate_name;
use crate::core::constants::{STARTING_GOLD, STARTING_LEVEL};
use crate::core::errors::GameResult;
use crate::items::equipment::Equipment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full persistent state of one player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub class: CharacterClass,
    pub level: u32,
    pub experience: u64,
    pub health: i64,
    pub max_health: i64,
    pub strength: i64,
    pub magic: i64,
    /// Stats named by item effects that have no dedicated field
    #[serde(default)]
    pub extra_stats: BTreeMap<String, i64>,
    pub gold: u64,
    /// Item ids in pickup order. Repeated ids stack.
    pub inventory: Vec<String>,
    pub equipment: Equipment,
    pub active_quests: Vec<String>,
    pub completed_quests: Vec<String>,
}

impl CharacterRecord {
    /// Creates a level 1 character with the class's base stats.
    pub fn new(name: String, class: CharacterClass) -> Self {
        let base = class.base_stats();

        Self {
            name,
            class,
            level: STARTING_LEVEL,
            experience: 0,
            health: base.health,
            max_health: base.health,
            strength: base.strength,
            magic: base.magic,
            extra_stats: BTreeMap::new(),
            gold: STARTING_GOLD,
            inventory: Vec::new(),
            equipment: Equipment::new(),
            active_quests: Vec::new(),
            completed_quests: Vec::new(),
        }
    }
}

/// Creates a new character from a class name as typed by the player.
pub fn create_character(name: &str, class_name: &str) -> GameResult<CharacterRecord> {
    let class: CharacterClass = class_name.parse()?;
    validate_name(name)?;
    Ok(CharacterRecord::new(name.to_string(), class))
}
