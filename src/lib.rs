//! Chronicles - character progression, inventory and save engine for a
//! turn-based RPG.
//!
//! Every engine operation takes the character record by mutable reference
//! and an [`items::ItemCatalog`] where item metadata is needed. Records are
//! persisted through [`persistence::CharacterManager`].

pub mod build_info;
pub mod character;
pub mod config;
pub mod core;
pub mod items;
pub mod persistence;

pub use character::{create_character, CharacterClass, CharacterRecord};
pub use config::SaveConfig;
pub use crate::core::errors::{GameError, GameResult};
pub use items::{Catalog, ItemCatalog, ItemDefinition, ItemType};
pub use persistence::CharacterManager;
