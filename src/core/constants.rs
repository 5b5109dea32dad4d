//! Static tunables for the simulation core.

// Player pools
pub const BASE_HEALTH: u32 = 100;
pub const BASE_MANA: u32 = 50;

// Inventory category bounds
pub const WEAPON_CAP: usize = 20;
pub const ARMOR_CAP: usize = 20;
/// General chest bound (loot drops, rewards).
pub const CHEST_CAP: usize = 20;
/// Tighter bound enforced on the "take chest" path.
pub const CHEST_TAKE_CAP: usize = 10;
/// Max distinct entries per stackable category (consumables, shards, scrolls).
pub const STACKABLE_ENTRY_CAP: usize = 20;
pub const KEY_CAP: u32 = 100;

// Exploration quotas by floor band
pub const SHALLOW_FLOOR_EXPLORATIONS: u32 = 3;
pub const MID_FLOOR_EXPLORATIONS: u32 = 5;
pub const EXPLORATION_HARD_CAP: u32 = 10;
/// First floor of the 5-exploration band.
pub const MID_FLOOR_START: u32 = 10;
/// Last floor of the 5-exploration band; deeper floors gain +1 per 10 floors.
pub const MID_FLOOR_END: u32 = 20;
