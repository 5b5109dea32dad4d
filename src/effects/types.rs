use serde::{Deserialize, Serialize};

/// Duration sentinel: effect never expires through turn resolution.
pub const DURATION_PERMANENT: i32 = -1;
/// Duration sentinel: effect resolves once and expires immediately.
pub const DURATION_INSTANT: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectCategory {
    Positive,
    Negative,
    Neutral,
    Special,
}

/// Sparse modifier set attached to an effect definition.
///
/// Per-turn fields (`health_per_turn`, `mana_per_turn`, `damage_per_turn`)
/// are flat, unavoidable ticks applied during turn resolution. Everything
/// else is read by the combat layer when pricing a hit. Absent fields are
/// 0/false, except the multipliers which are the neutral 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectModifiers {
    pub health_per_turn: u32,
    pub mana_per_turn: u32,
    pub damage_per_turn: u32,
    pub damage_multiplier: f64,
    pub damage_bonus: u32,
    pub damage_reduction: u32,
    pub armor_reduction: u32,
    pub crit_bonus: f64,
    pub loot_bonus: f64,
    pub disable_weapons: bool,
    pub disable_magic: bool,
    pub disable_primary_weapon: bool,
    pub disable_all_actions: bool,
    pub untargetable: bool,
    pub effect_immunity: bool,
    pub ignore_armor: bool,
    pub drain_amount: u32,
    pub health_multiplier: f64,
    pub magic_punish_damage: u32,
}

impl Default for EffectModifiers {
    fn default() -> Self {
        Self {
            health_per_turn: 0,
            mana_per_turn: 0,
            damage_per_turn: 0,
            damage_multiplier: 1.0,
            damage_bonus: 0,
            damage_reduction: 0,
            armor_reduction: 0,
            crit_bonus: 0.0,
            loot_bonus: 0.0,
            disable_weapons: false,
            disable_magic: false,
            disable_primary_weapon: false,
            disable_all_actions: false,
            untargetable: false,
            effect_immunity: false,
            ignore_armor: false,
            drain_amount: 0,
            health_multiplier: 1.0,
            magic_punish_damage: 0,
        }
    }
}

/// Immutable catalog entry describing one effect's semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: EffectCategory,
    pub modifiers: EffectModifiers,
    /// Turns the effect lasts. `DURATION_INSTANT` resolves once,
    /// `DURATION_PERMANENT` only ends through an external event.
    pub duration: i32,
    pub stackable: bool,
    /// Consumed by the combat layer: at most one application per battle.
    pub once_per_battle: bool,
}

/// A concrete, time-bounded application of an effect to one actor.
///
/// Invariant: `turns_remaining <= duration` unless the effect is permanent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectInstance {
    pub effect_id: String,
    pub duration: i32,
    pub turns_remaining: i32,
    pub applied_at: i64,
    /// Scale on the per-turn deltas, e.g. boosted by item rarity.
    #[serde(default = "default_potency")]
    pub potency: f64,
}

fn default_potency() -> f64 {
    1.0
}

impl EffectInstance {
    pub fn is_permanent(&self) -> bool {
        self.duration == DURATION_PERMANENT
    }

    pub fn is_instant(&self) -> bool {
        self.duration == DURATION_INSTANT
    }
}

/// Outcome of resolving one instance for one turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub damage: u64,
    pub healing: u64,
    pub mana: u64,
    pub messages: Vec<String>,
    pub expired: bool,
}

/// Accumulated outcome of resolving every active instance for one turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnReport {
    pub damage: u64,
    pub healing: u64,
    pub mana: u64,
    pub messages: Vec<String>,
}
