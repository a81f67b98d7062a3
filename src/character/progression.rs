use super::record::CharacterRecord;
use crate::core::constants::{LEVEL_UP_MAGIC, LEVEL_UP_MAX_HEALTH, LEVEL_UP_STRENGTH, XP_PER_LEVEL};
use crate::core::errors::{GameError, GameResult};
use log::debug;

/// Calculates the XP required to advance past `level`
pub fn xp_for_next_level(level: u32) -> u64 {
    level as u64 * XP_PER_LEVEL
}

pub fn is_dead(record: &CharacterRecord) -> bool {
    record.health <= 0
}

fn ensure_alive(record: &CharacterRecord) -> GameResult<()> {
    if is_dead(record) {
        return Err(GameError::CharacterDead(record.name.clone()));
    }
    Ok(())
}

/// Adds XP to the character and processes any level-ups.
/// Returns the number of levels gained.
pub fn gain_experience(record: &mut CharacterRecord, amount: u64) -> GameResult<u32> {
    ensure_alive(record)?;

    record.experience = record.experience.saturating_add(amount);

    let mut levelups = 0;
    loop {
        let xp_needed = xp_for_next_level(record.level);
        if record.experience < xp_needed {
            break;
        }
        // Level cap: leftover XP stays banked
        let Some(next_level) = record.level.checked_add(1) else {
            break;
        };

        record.experience -= xp_needed;
        record.level = next_level;
        record.max_health = record.max_health.saturating_add(LEVEL_UP_MAX_HEALTH);
        record.strength = record.strength.saturating_add(LEVEL_UP_STRENGTH);
        record.magic = record.magic.saturating_add(LEVEL_UP_MAGIC);
        record.health = record.max_health;
        levelups += 1;
    }

    if levelups > 0 {
        debug!(
            "{} gained {} level(s), now level {}",
            record.name, levelups, record.level
        );
    }

    Ok(levelups)
}

/// Restores health up to max_health. Returns the amount actually restored.
pub fn heal(record: &mut CharacterRecord, amount: u64) -> GameResult<i64> {
    ensure_alive(record)?;

    let missing = (record.max_health - record.health).max(0);
    let restored = i64::try_from(amount).unwrap_or(i64::MAX).min(missing);
    record.health += restored;

    Ok(restored)
}

/// Brings a dead character back at half health. Returns false if not dead.
pub fn revive(record: &mut CharacterRecord) -> bool {
    if !is_dead(record) {
        return false;
    }
    record.health = record.max_health / 2;
    true
}

/// Adjusts gold by a signed amount. Returns the new total.
pub fn add_gold(record: &mut CharacterRecord, amount: i64) -> GameResult<u64> {
    let total = if amount >= 0 {
        record.gold.saturating_add(amount.unsigned_abs())
    } else {
        let debit = amount.unsigned_abs();
        record
            .gold
            .checked_sub(debit)
            .ok_or(GameError::InsufficientResources {
                needed: debit,
                available: record.gold,
            })?
    };

    record.gold = total;
    Ok(total)
}
