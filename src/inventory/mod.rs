//! Category-bounded inventory with stackable-item merging.

pub mod store;
pub mod types;

pub use store::InventoryStore;
pub use types::{ChestSource, ItemCategory, ItemDescriptor, ItemStack};
