//! Checks applied to character records at the persistence boundary.

use super::record::CharacterRecord;
use crate::core::constants::MAX_INVENTORY_SIZE;
use crate::core::errors::{GameError, GameResult};

/// Validates a character name for use as a save file identity.
pub fn validate_name(name: &str) -> GameResult<()> {
    let reason = if name.trim().is_empty() {
        Some("name cannot be empty")
    } else if name.contains('/') || name.contains('\\') {
        Some("name cannot contain path separators")
    } else if name.chars().any(|c| c.is_control()) {
        Some("name cannot contain control characters")
    } else if name == "." || name == ".." {
        Some("name cannot be a relative path")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(GameError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Checks a record against the invariants the save format relies on.
///
/// Fields are visited in declaration order and the first failure is reported.
pub fn validate_record(record: &CharacterRecord) -> GameResult<()> {
    validate_name(&record.name)
        .map_err(|e| GameError::InvalidSaveData(format!("field NAME: {}", e)))?;

    if record.level < 1 {
        return Err(GameError::InvalidSaveData(
            "field LEVEL: level must be at least 1".to_string(),
        ));
    }

    for (field, slot) in [
        ("EQUIPPED_WEAPON", &record.equipment.weapon),
        ("EQUIPPED_ARMOR", &record.equipment.armor),
    ] {
        if let Some(item_id) = slot {
            check_list_entry(field, item_id)?;
        }
    }

    for name in record.extra_stats.keys() {
        check_list_entry("EXTRA_STATS", name)?;
        if name.contains('=') {
            return Err(GameError::InvalidSaveData(format!(
                "field EXTRA_STATS: stat name {:?} contains '='",
                name
            )));
        }
    }

    if record.inventory.len() > MAX_INVENTORY_SIZE {
        return Err(GameError::InvalidSaveData(format!(
            "field INVENTORY: {} items exceeds capacity {}",
            record.inventory.len(),
            MAX_INVENTORY_SIZE
        )));
    }

    for (field, entries) in [
        ("INVENTORY", &record.inventory),
        ("ACTIVE_QUESTS", &record.active_quests),
        ("COMPLETED_QUESTS", &record.completed_quests),
    ] {
        for entry in entries {
            check_list_entry(field, entry)?;
        }
    }

    Ok(())
}

/// List entries must survive a comma join and a line split.
fn check_list_entry(field: &str, entry: &str) -> GameResult<()> {
    if entry.is_empty() {
        return Err(GameError::InvalidSaveData(format!(
            "field {}: empty entry",
            field
        )));
    }
    if entry.contains(',') || entry.contains('\n') || entry.contains('\r') {
        return Err(GameError::InvalidSaveData(format!(
            "field {}: entry {:?} contains a separator",
            field, entry
        )));
    }
    Ok(())
}
