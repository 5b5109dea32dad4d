use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Consumable,
    Scroll,
    Shard,
    Chest,
    Key,
    Gold,
}

impl ItemCategory {
    /// Categories stored as `{name, quantity}` stacks.
    pub fn is_stackable(&self) -> bool {
        matches!(
            self,
            ItemCategory::Consumable | ItemCategory::Scroll | ItemCategory::Shard
        )
    }
}

/// What a caller hands to the inventory. The category is an explicit tag
/// carried on the descriptor, never inferred from the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    pub name: String,
    pub category: ItemCategory,
}

impl ItemDescriptor {
    pub fn new(name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    /// Descriptor with no known category; such items land in consumables.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, ItemCategory::Consumable)
    }
}

/// One stackable entry: a name and how many the actor holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub name: String,
    pub quantity: u32,
}

/// How a chest arrived. The "take chest" path enforces a tighter bound
/// than chests awarded as loot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChestSource {
    Loot,
    Taken,
}
