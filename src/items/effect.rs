//! Effect descriptors (`stat:amount`) and their application to a record.

use crate::character::record::CharacterRecord;
use crate::core::errors::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target of an effect. Names outside the four record stats are kept as
/// `Other` and tracked in the record's extra stats.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Health,
    MaxHealth,
    Strength,
    Magic,
    Other(String),
}

impl Stat {
    /// The stats every record carries as fields.
    pub fn core() -> [Stat; 4] {
        [Stat::Health, Stat::MaxHealth, Stat::Strength, Stat::Magic]
    }

    pub fn from_key(key: &str) -> Stat {
        match key {
            "health" => Stat::Health,
            "max_health" => Stat::MaxHealth,
            "strength" => Stat::Strength,
            "magic" => Stat::Magic,
            other => Stat::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Stat::Health => "health",
            Stat::MaxHealth => "max_health",
            Stat::Strength => "strength",
            Stat::Magic => "magic",
            Stat::Other(name) => name,
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatEffect {
    pub stat: Stat,
    pub delta: i64,
}

impl StatEffect {
    /// The effect that undoes this one.
    pub fn reversed(&self) -> Self {
        Self {
            stat: self.stat.clone(),
            delta: self.delta.saturating_neg(),
        }
    }
}

impl fmt::Display for StatEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.delta >= 0 {
            write!(f, "{} increased by {}", self.stat, self.delta)
        } else {
            write!(f, "{} decreased by {}", self.stat, self.delta.unsigned_abs())
        }
    }
}

/// Parses an effect descriptor such as `health:20` or `strength:-5`.
///
/// Any stat name is accepted; only a missing colon, an empty stat name or a
/// non-integer amount is malformed.
pub fn parse_effect(descriptor: &str) -> GameResult<StatEffect> {
    let (stat, amount) = descriptor
        .split_once(':')
        .ok_or_else(|| GameError::malformed_effect(descriptor, "missing ':'"))?;

    let stat = stat.trim();
    if stat.is_empty() {
        return Err(GameError::malformed_effect(descriptor, "missing stat name"));
    }
    let delta = amount
        .trim()
        .parse::<i64>()
        .map_err(|_| GameError::malformed_effect(descriptor, "amount is not an integer"))?;

    Ok(StatEffect {
        stat: Stat::from_key(stat),
        delta,
    })
}

/// Adds `delta` to a stat and returns its new value.
///
/// Health is capped at max_health but not floored; dropping to zero or below
/// leaves the character dead. A stat the record has never seen starts at 0.
pub fn apply_stat_effect(record: &mut CharacterRecord, stat: Stat, delta: i64) -> i64 {
    match stat {
        Stat::Health => {
            record.health = record.health.saturating_add(delta).min(record.max_health);
            record.health
        }
        Stat::MaxHealth => {
            record.max_health = record.max_health.saturating_add(delta);
            record.max_health
        }
        Stat::Strength => {
            record.strength = record.strength.saturating_add(delta);
            record.strength
        }
        Stat::Magic => {
            record.magic = record.magic.saturating_add(delta);
            record.magic
        }
        Stat::Other(name) => {
            let value = record.extra_stats.entry(name).or_insert(0);
            *value = value.saturating_add(delta);
            *value
        }
    }
}

pub(crate) fn apply_effect(record: &mut CharacterRecord, effect: &StatEffect) -> i64 {
    apply_stat_effect(record, effect.stat.clone(), effect.delta)
}
