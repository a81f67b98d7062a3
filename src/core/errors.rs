use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the character, inventory and save engines.
///
/// Every variant is recoverable by the caller. Operations that fail leave the
/// character record untouched unless documented otherwise.
#[derive(Debug, Error)]
pub enum GameError {
    /// Unknown class name passed at creation or found in a save file.
    #[error("invalid character class: {0}")]
    InvalidCharacterClass(String),

    /// Character name unusable as a save file identity.
    #[error("invalid character name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// No save file exists for the requested character.
    #[error("character not found: {0}")]
    CharacterNotFound(String),

    /// The operation requires a living character.
    #[error("{0} is dead")]
    CharacterDead(String),

    /// A save file exists but could not be read in full.
    #[error("save file corrupted: {path}: {reason}")]
    SaveFileCorrupted { path: PathBuf, reason: String },

    /// Save data is structurally valid text but does not describe a character.
    #[error("invalid save data: {0}")]
    InvalidSaveData(String),

    #[error("inventory is full ({capacity} items)")]
    InventoryFull { capacity: usize },

    #[error("item not found: {0}")]
    ItemNotFound(String),

    #[error("insufficient gold: need {needed}, have {available}")]
    InsufficientResources { needed: u64, available: u64 },

    #[error("item {item_id} is {found}, expected {expected}")]
    InvalidItemType {
        item_id: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("malformed effect {descriptor:?}: {reason}")]
    MalformedEffect { descriptor: String, reason: String },

    /// Wrapper around IO errors from the save directory (create, write, delete).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GameResult<T> = Result<T, GameError>;

impl GameError {
    pub(crate) fn malformed_effect(descriptor: &str, reason: impl Into<String>) -> Self {
        GameError::MalformedEffect {
            descriptor: descriptor.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InventoryFull { capacity: 20 };
        assert_eq!(err.to_string(), "inventory is full (20 items)");

        let err = GameError::InsufficientResources {
            needed: 40,
            available: 10,
        };
        assert_eq!(err.to_string(), "insufficient gold: need 40, have 10");

        let err = GameError::InvalidItemType {
            item_id: "iron_sword".to_string(),
            expected: "consumable",
            found: "weapon",
        };
        assert_eq!(err.to_string(), "item iron_sword is weapon, expected consumable");
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> GameResult<()> {
            let io: Result<(), std::io::Error> = Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "nope",
            ));
            io?;
            Ok(())
        }
        assert!(matches!(fails(), Err(GameError::Io(_))));
    }
}
