//! Line-oriented `KEY: value` save format.
//!
//! ```text
//! NAME: Aria
//! CLASS: Mage
//! LEVEL: 1
//! HEALTH: 80
//! MAX_HEALTH: 80
//! STRENGTH: 8
//! MAGIC: 20
//! EXPERIENCE: 0
//! GOLD: 100
//! EQUIPPED_WEAPON: oak_staff
//! EQUIPPED_ARMOR:
//! EXTRA_STATS: luck=3
//! INVENTORY: health_potion,health_potion
//! ACTIVE_QUESTS: find_the_orb
//! COMPLETED_QUESTS:
//! ```
//!
//! The equip and extra stat lines are optional when loading; older saves
//! without them load with empty slots and no extra stats.

use crate::character::class::CharacterClass;
use crate::character::record::CharacterRecord;
use crate::character::validation::validate_record;
use crate::core::errors::{GameError, GameResult};
use crate::items::equipment::Equipment;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::str::FromStr;

const KEY_SEPARATOR: &str = ": ";
const LIST_SEPARATOR: &str = ",";
const STAT_SEPARATOR: char = '=';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SaveKey {
    Name,
    Class,
    Level,
    Health,
    MaxHealth,
    Strength,
    Magic,
    Experience,
    Gold,
    EquippedWeapon,
    EquippedArmor,
    ExtraStats,
    Inventory,
    ActiveQuests,
    CompletedQuests,
}

const SAVE_KEYS: [SaveKey; 15] = [
    SaveKey::Name,
    SaveKey::Class,
    SaveKey::Level,
    SaveKey::Health,
    SaveKey::MaxHealth,
    SaveKey::Strength,
    SaveKey::Magic,
    SaveKey::Experience,
    SaveKey::Gold,
    SaveKey::EquippedWeapon,
    SaveKey::EquippedArmor,
    SaveKey::ExtraStats,
    SaveKey::Inventory,
    SaveKey::ActiveQuests,
    SaveKey::CompletedQuests,
];

impl SaveKey {
    fn as_str(&self) -> &'static str {
        match self {
            SaveKey::Name => "NAME",
            SaveKey::Class => "CLASS",
            SaveKey::Level => "LEVEL",
            SaveKey::Health => "HEALTH",
            SaveKey::MaxHealth => "MAX_HEALTH",
            SaveKey::Strength => "STRENGTH",
            SaveKey::Magic => "MAGIC",
            SaveKey::Experience => "EXPERIENCE",
            SaveKey::Gold => "GOLD",
            SaveKey::EquippedWeapon => "EQUIPPED_WEAPON",
            SaveKey::EquippedArmor => "EQUIPPED_ARMOR",
            SaveKey::ExtraStats => "EXTRA_STATS",
            SaveKey::Inventory => "INVENTORY",
            SaveKey::ActiveQuests => "ACTIVE_QUESTS",
            SaveKey::CompletedQuests => "COMPLETED_QUESTS",
        }
    }

    fn from_key(key: &str) -> Option<SaveKey> {
        SAVE_KEYS.into_iter().find(|k| k.as_str() == key)
    }
}

/// Serializes a record to save file text. The record is validated first.
pub fn encode(record: &CharacterRecord) -> GameResult<String> {
    validate_record(record)?;

    let values = [
        (SaveKey::Name, record.name.clone()),
        (SaveKey::Class, record.class.name().to_string()),
        (SaveKey::Level, record.level.to_string()),
        (SaveKey::Health, record.health.to_string()),
        (SaveKey::MaxHealth, record.max_health.to_string()),
        (SaveKey::Strength, record.strength.to_string()),
        (SaveKey::Magic, record.magic.to_string()),
        (SaveKey::Experience, record.experience.to_string()),
        (SaveKey::Gold, record.gold.to_string()),
        (
            SaveKey::EquippedWeapon,
            record.equipment.weapon.clone().unwrap_or_default(),
        ),
        (
            SaveKey::EquippedArmor,
            record.equipment.armor.clone().unwrap_or_default(),
        ),
        (SaveKey::ExtraStats, join_stats(&record.extra_stats)),
        (SaveKey::Inventory, join_list(&record.inventory)),
        (SaveKey::ActiveQuests, join_list(&record.active_quests)),
        (SaveKey::CompletedQuests, join_list(&record.completed_quests)),
    ];

    let mut output = String::new();
    for (key, value) in values {
        // Writing to a String cannot fail
        let _ = writeln!(output, "{}{}{}", key.as_str(), KEY_SEPARATOR, value);
    }
    Ok(output)
}

/// Parses save file text back into a record.
pub fn decode(data: &str) -> GameResult<CharacterRecord> {
    let fields = parse_lines(data)?;

    let record = CharacterRecord {
        name: require(&fields, SaveKey::Name)?.to_string(),
        class: parse_class(require(&fields, SaveKey::Class)?)?,
        level: parse_number(&fields, SaveKey::Level)?,
        health: parse_number(&fields, SaveKey::Health)?,
        max_health: parse_number(&fields, SaveKey::MaxHealth)?,
        strength: parse_number(&fields, SaveKey::Strength)?,
        magic: parse_number(&fields, SaveKey::Magic)?,
        experience: parse_number(&fields, SaveKey::Experience)?,
        gold: parse_number(&fields, SaveKey::Gold)?,
        equipment: Equipment {
            weapon: parse_slot(&fields, SaveKey::EquippedWeapon),
            armor: parse_slot(&fields, SaveKey::EquippedArmor),
        },
        extra_stats: parse_stats(&fields)?,
        inventory: split_list(require(&fields, SaveKey::Inventory)?),
        active_quests: split_list(require(&fields, SaveKey::ActiveQuests)?),
        completed_quests: split_list(require(&fields, SaveKey::CompletedQuests)?),
    };

    validate_record(&record)?;
    Ok(record)
}

fn parse_lines(data: &str) -> GameResult<BTreeMap<SaveKey, &str>> {
    let mut fields = BTreeMap::new();

    for (index, line) in data.lines().enumerate() {
        let line_number = index + 1;
        let (key, value) = split_line(line).ok_or_else(|| {
            GameError::InvalidSaveData(format!("line {}: expected 'KEY: value'", line_number))
        })?;

        let key = SaveKey::from_key(key).ok_or_else(|| {
            GameError::InvalidSaveData(format!("line {}: unknown key {}", line_number, key))
        })?;

        if fields.insert(key, value).is_some() {
            return Err(GameError::InvalidSaveData(format!(
                "line {}: duplicate key {}",
                line_number,
                key.as_str()
            )));
        }
    }

    Ok(fields)
}

/// Splits on the first separator. A bare `KEY:` carries an empty value.
fn split_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(KEY_SEPARATOR)
        .or_else(|| line.strip_suffix(':').map(|key| (key, "")))
}

fn require<'a>(fields: &BTreeMap<SaveKey, &'a str>, key: SaveKey) -> GameResult<&'a str> {
    fields.get(&key).copied().ok_or_else(|| {
        GameError::InvalidSaveData(format!("missing required field: {}", key.as_str()))
    })
}

fn parse_number<T: FromStr>(fields: &BTreeMap<SaveKey, &str>, key: SaveKey) -> GameResult<T> {
    let value = require(fields, key)?;
    value.parse::<T>().map_err(|_| {
        GameError::InvalidSaveData(format!(
            "field {}: {:?} is not a valid integer",
            key.as_str(),
            value
        ))
    })
}

fn parse_class(value: &str) -> GameResult<CharacterClass> {
    value.parse().map_err(|_| {
        GameError::InvalidSaveData(format!(
            "field {}: unknown class {:?}",
            SaveKey::Class.as_str(),
            value
        ))
    })
}

fn parse_slot(fields: &BTreeMap<SaveKey, &str>, key: SaveKey) -> Option<String> {
    fields
        .get(&key)
        .filter(|value| !value.is_empty())
        .map(|value| value.to_string())
}

fn parse_stats(fields: &BTreeMap<SaveKey, &str>) -> GameResult<BTreeMap<String, i64>> {
    let mut stats = BTreeMap::new();
    let value = match fields.get(&SaveKey::ExtraStats) {
        Some(value) => *value,
        None => return Ok(stats),
    };

    for entry in split_list(value) {
        let field = SaveKey::ExtraStats.as_str();
        let (name, amount) = entry.split_once(STAT_SEPARATOR).ok_or_else(|| {
            GameError::InvalidSaveData(format!(
                "field {}: expected 'stat=amount', got {:?}",
                field, entry
            ))
        })?;
        let amount = amount.parse::<i64>().map_err(|_| {
            GameError::InvalidSaveData(format!(
                "field {}: {:?} is not a valid integer",
                field, amount
            ))
        })?;
        if stats.insert(name.to_string(), amount).is_some() {
            return Err(GameError::InvalidSaveData(format!(
                "field {}: duplicate stat {}",
                field, name
            )));
        }
    }

    Ok(stats)
}

fn join_stats(stats: &BTreeMap<String, i64>) -> String {
    stats
        .iter()
        .map(|(name, amount)| format!("{}{}{}", name, STAT_SEPARATOR, amount))
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

fn join_list(entries: &[String]) -> String {
    entries.join(LIST_SEPARATOR)
}

fn split_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(LIST_SEPARATOR).map(str::to_string).collect()
}
