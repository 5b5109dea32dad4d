//! Per-player aggregate: the unit external callers mutate and persist.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::constants::{BASE_HEALTH, BASE_MANA};
use crate::economy::{Currency, CurrencyLedger};
use crate::effects::types::EffectCategory;
use crate::effects::{EffectEngine, EffectInstance, TurnReport};
use crate::inventory::{InventoryStore, ItemDescriptor};
use crate::progression::ProgressionTracker;

/// Everything the simulation owns for one player. Mutated exclusively
/// through the operations below under single-writer access; the external
/// session layer guarantees at most one in-flight command per player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSimulationState {
    pub id: String,
    pub created_at: i64,
    pub health: u32,
    pub max_health: u32,
    pub mana: u32,
    pub max_mana: u32,
    #[serde(default)]
    pub ledger: CurrencyLedger,
    #[serde(default)]
    pub inventory: InventoryStore,
    #[serde(default)]
    pub progression: ProgressionTracker,
    /// Active effects in application order. Iteration order is stable so
    /// per-turn damage resolution is deterministic.
    #[serde(default)]
    pub effects: Vec<EffectInstance>,
}

impl PlayerSimulationState {
    pub fn new(now: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            health: BASE_HEALTH,
            max_health: BASE_HEALTH,
            mana: BASE_MANA,
            max_mana: BASE_MANA,
            ledger: CurrencyLedger::new(),
            inventory: InventoryStore::new(),
            progression: ProgressionTracker::new(),
            effects: Vec::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn has_active_effect(&self, id: &str) -> bool {
        self.effects.iter().any(|inst| inst.effect_id == id)
    }

    /// Applies an effect by id. Returns false when the id is unknown or an
    /// active immunity blocks the (negative) effect; both are no-ops. A
    /// non-stackable duplicate goes through the refresh-on-improvement rule
    /// instead of adding a second instance.
    pub fn apply_effect(
        &mut self,
        engine: &EffectEngine<'_>,
        id: &str,
        duration_override: Option<i32>,
    ) -> bool {
        let Some(instance) = engine.create_instance(id, duration_override) else {
            return false;
        };
        let category = engine
            .catalog()
            .get(id)
            .map(|def| def.category)
            .unwrap_or(EffectCategory::Neutral);
        if category == EffectCategory::Negative && engine.is_effect_immune(&self.effects) {
            return false;
        }
        if engine.can_stack(&self.effects, id) {
            self.effects.push(instance);
        } else {
            engine.apply_with_duration_rule(&mut self.effects, instance);
        }
        true
    }

    /// Resolves one turn of active effects and lands the totals on the
    /// health and mana pools: healing and mana clamp at their maxima,
    /// damage saturates at zero. Expired instances are removed.
    pub fn resolve_effects_for_turn(&mut self, engine: &EffectEngine<'_>) -> TurnReport {
        let report = engine.resolve_all(&mut self.effects);

        self.health = self
            .health
            .saturating_add(clamp_u32(report.healing))
            .min(self.max_health);
        self.health = self.health.saturating_sub(clamp_u32(report.damage));
        self.mana = self
            .mana
            .saturating_add(clamp_u32(report.mana))
            .min(self.max_mana);

        report
    }

    pub fn add_currency(&mut self, currency: Currency, amount: i64) {
        self.ledger.add(currency, amount);
    }

    pub fn exchange_currency(&mut self, from: Currency, to: Currency, amount: u64) -> bool {
        self.ledger.exchange(from, to, amount)
    }

    pub fn charge_division_cost(&mut self, currency: Currency) -> bool {
        self.ledger.charge_division_cost(currency)
    }

    pub fn add_item(&mut self, item: &ItemDescriptor, quantity: u32) -> bool {
        self.inventory.add(item, quantity)
    }

    pub fn take_chest(&mut self, name: impl Into<String>) -> bool {
        self.inventory.take_chest(name)
    }

    /// Descends one floor and resets the exploration counter.
    pub fn advance_floor(&mut self) {
        self.progression.advance_floor();
    }

    /// Spends one exploration on the current floor; false when the quota is
    /// exhausted or the player is still at the entrance.
    pub fn record_exploration(&mut self) -> bool {
        self.progression.record_exploration()
    }
}

fn clamp_u32(value: u64) -> u32 {
    value.min(u32::MAX as u64) as u32
}
