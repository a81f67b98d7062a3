//! Item system: types, catalog, effects, inventory, equipment, and shop.

pub mod catalog;
pub mod effect;
pub mod equipment;
pub mod inventory;
pub mod shop;
pub mod types;

pub use catalog::{Catalog, ItemCatalog};
pub use effect::*;
pub use equipment::*;
pub use inventory::*;
pub use shop::*;
pub use types::*;
