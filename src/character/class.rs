use crate::core::errors::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
    Cleric,
}

/// Starting stats granted by a class at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStats {
    pub health: i64,
    pub strength: i64,
    pub magic: i64,
}

impl CharacterClass {
    pub fn all() -> [CharacterClass; 4] {
        [
            CharacterClass::Warrior,
            CharacterClass::Mage,
            CharacterClass::Rogue,
            CharacterClass::Cleric,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Mage => "Mage",
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Cleric => "Cleric",
        }
    }

    pub fn base_stats(&self) -> BaseStats {
        match self {
            CharacterClass::Warrior => BaseStats {
                health: 120,
                strength: 15,
                magic: 5,
            },
            CharacterClass::Mage => BaseStats {
                health: 80,
                strength: 8,
                magic: 20,
            },
            CharacterClass::Rogue => BaseStats {
                health: 90,
                strength: 12,
                magic: 10,
            },
            CharacterClass::Cleric => BaseStats {
                health: 100,
                strength: 10,
                magic: 15,
            },
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterClass::all()
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| GameError::InvalidCharacterClass(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_classes() {
        for class in CharacterClass::all() {
            assert_eq!(class.name().parse::<CharacterClass>().unwrap(), class);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(
            "warrior".parse::<CharacterClass>(),
            Err(GameError::InvalidCharacterClass(ref s)) if s == "warrior"
        ));
        assert!("Necromancer".parse::<CharacterClass>().is_err());
        assert!("".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn test_base_stats_table() {
        assert_eq!(
            CharacterClass::Warrior.base_stats(),
            BaseStats {
                health: 120,
                strength: 15,
                magic: 5
            }
        );
        assert_eq!(CharacterClass::Mage.base_stats().magic, 20);
        assert_eq!(CharacterClass::Rogue.base_stats().health, 90);
        assert_eq!(CharacterClass::Cleric.base_stats().strength, 10);
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(CharacterClass::Cleric.to_string(), "Cleric");
    }
}
