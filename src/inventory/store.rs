use serde::{Deserialize, Serialize};

use crate::core::constants::{
    ARMOR_CAP, CHEST_CAP, CHEST_TAKE_CAP, KEY_CAP, STACKABLE_ENTRY_CAP, WEAPON_CAP,
};

use super::types::{ChestSource, ItemCategory, ItemDescriptor, ItemStack};

/// Category-bounded item collections for one actor.
///
/// Every "full" condition returns `false` and leaves state untouched; the
/// caller surfaces the failure to the player. Bounds are never exceeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStore {
    #[serde(default)]
    pub weapons: Vec<String>,
    #[serde(default)]
    pub armor: Vec<String>,
    #[serde(default)]
    pub chests: Vec<String>,
    #[serde(default)]
    pub consumables: Vec<ItemStack>,
    #[serde(default)]
    pub shards: Vec<ItemStack>,
    #[serde(default)]
    pub scrolls: Vec<ItemStack>,
    #[serde(default)]
    pub keys: u32,
    #[serde(default)]
    pub gold: u64,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a new entry fits under the category's general bound.
    /// The tighter take-chest bound is checked by [`Self::take_chest`].
    pub fn can_add(&self, category: ItemCategory) -> bool {
        match category {
            ItemCategory::Weapon => self.weapons.len() < WEAPON_CAP,
            ItemCategory::Armor => self.armor.len() < ARMOR_CAP,
            ItemCategory::Chest => self.chests.len() < CHEST_CAP,
            ItemCategory::Consumable => self.consumables.len() < STACKABLE_ENTRY_CAP,
            ItemCategory::Scroll => self.scrolls.len() < STACKABLE_ENTRY_CAP,
            ItemCategory::Shard => self.shards.len() < STACKABLE_ENTRY_CAP,
            ItemCategory::Key => self.keys < KEY_CAP,
            ItemCategory::Gold => true,
        }
    }

    /// Adds an item, merging stackables by name. Returns false when the
    /// category is full. A merge into an existing stack always succeeds,
    /// regardless of the distinct-entry bound, since no new slot is used.
    pub fn add(&mut self, item: &ItemDescriptor, quantity: u32) -> bool {
        match item.category {
            ItemCategory::Weapon => push_unique(&mut self.weapons, &item.name, WEAPON_CAP),
            ItemCategory::Armor => push_unique(&mut self.armor, &item.name, ARMOR_CAP),
            ItemCategory::Chest => push_unique(&mut self.chests, &item.name, CHEST_CAP),
            ItemCategory::Consumable => merge_stack(&mut self.consumables, &item.name, quantity),
            ItemCategory::Scroll => merge_stack(&mut self.scrolls, &item.name, quantity),
            ItemCategory::Shard => merge_stack(&mut self.shards, &item.name, quantity),
            ItemCategory::Key => {
                if self.keys >= KEY_CAP {
                    return false;
                }
                self.keys = self.keys.saturating_add(quantity).min(KEY_CAP);
                true
            }
            ItemCategory::Gold => {
                self.gold = self.gold.saturating_add(quantity as u64);
                true
            }
        }
    }

    /// Chest acquisition via the "take chest" path, capped at the tighter
    /// bound. Loot-path chests go through [`Self::add`].
    pub fn take_chest(&mut self, name: impl Into<String>) -> bool {
        self.add_chest(name, ChestSource::Taken)
    }

    pub fn add_chest(&mut self, name: impl Into<String>, source: ChestSource) -> bool {
        let cap = match source {
            ChestSource::Loot => CHEST_CAP,
            ChestSource::Taken => CHEST_TAKE_CAP,
        };
        push_unique(&mut self.chests, &name.into(), cap)
    }

    /// Quantity held of a stackable item, 0 when absent.
    pub fn count(&self, category: ItemCategory, name: &str) -> u32 {
        self.stacks(category)
            .and_then(|stacks| stacks.iter().find(|s| s.name == name))
            .map(|s| s.quantity)
            .unwrap_or(0)
    }

    /// Spends `quantity` from a stackable entry. Fails without mutation if
    /// the entry is missing or short; the entry is dropped when it hits 0.
    pub fn consume(&mut self, category: ItemCategory, name: &str, quantity: u32) -> bool {
        let Some(stacks) = self.stacks_mut(category) else {
            return false;
        };
        let Some(index) = stacks.iter().position(|s| s.name == name) else {
            return false;
        };
        if stacks[index].quantity < quantity {
            return false;
        }
        stacks[index].quantity -= quantity;
        if stacks[index].quantity == 0 {
            stacks.remove(index);
        }
        true
    }

    /// Spends one key. Fails when none are held.
    pub fn use_key(&mut self) -> bool {
        if self.keys == 0 {
            return false;
        }
        self.keys -= 1;
        true
    }

    fn stacks(&self, category: ItemCategory) -> Option<&Vec<ItemStack>> {
        match category {
            ItemCategory::Consumable => Some(&self.consumables),
            ItemCategory::Scroll => Some(&self.scrolls),
            ItemCategory::Shard => Some(&self.shards),
            _ => None,
        }
    }

    fn stacks_mut(&mut self, category: ItemCategory) -> Option<&mut Vec<ItemStack>> {
        match category {
            ItemCategory::Consumable => Some(&mut self.consumables),
            ItemCategory::Scroll => Some(&mut self.scrolls),
            ItemCategory::Shard => Some(&mut self.shards),
            _ => None,
        }
    }
}

fn push_unique(list: &mut Vec<String>, name: &str, cap: usize) -> bool {
    if list.len() >= cap {
        return false;
    }
    list.push(name.to_string());
    true
}

fn merge_stack(stacks: &mut Vec<ItemStack>, name: &str, quantity: u32) -> bool {
    debug_assert!(quantity > 0, "stackable add with zero quantity");
    if let Some(stack) = stacks.iter_mut().find(|s| s.name == name) {
        stack.quantity = stack.quantity.saturating_add(quantity);
        return true;
    }
    if stacks.len() >= STACKABLE_ENTRY_CAP {
        return false;
    }
    stacks.push(ItemStack {
        name: name.to_string(),
        quantity,
    });
    true
}
