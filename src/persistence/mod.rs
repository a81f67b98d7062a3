//! Save file format and the on-disk character store.

pub mod codec;
pub mod manager;

pub use codec::{decode, encode};
pub use manager::CharacterManager;
