//! Effect instance lifecycle: creation, stacking, per-turn resolution.

use crate::clock::Clock;

use super::catalog::EffectCatalog;
use super::types::{
    EffectInstance, TickOutcome, TurnReport, DURATION_INSTANT, DURATION_PERMANENT,
};

/// Creates, stacks, and ticks effect instances against a shared catalog.
///
/// Holds no per-actor state; the actor's instance list is passed in by the
/// owning aggregate. Single-writer access is the caller's responsibility.
pub struct EffectEngine<'a> {
    catalog: &'a EffectCatalog,
    clock: &'a dyn Clock,
}

impl<'a> EffectEngine<'a> {
    pub fn new(catalog: &'a EffectCatalog, clock: &'a dyn Clock) -> Self {
        Self { catalog, clock }
    }

    pub fn catalog(&self) -> &EffectCatalog {
        self.catalog
    }

    /// Builds a fresh instance for `id`, or `None` if the id is unknown.
    /// Callers must treat `None` as a no-op, not an error.
    pub fn create_instance(
        &self,
        id: &str,
        duration_override: Option<i32>,
    ) -> Option<EffectInstance> {
        let def = self.catalog.get(id)?;
        let duration = duration_override.unwrap_or(def.duration);
        Some(EffectInstance {
            effect_id: def.id.to_string(),
            duration,
            turns_remaining: duration,
            applied_at: self.clock.now(),
            potency: 1.0,
        })
    }

    /// Whether a fresh instance of `id` may be appended to `active`.
    /// True if the definition stacks, or no instance with this id exists.
    pub fn can_stack(&self, active: &[EffectInstance], id: &str) -> bool {
        let stackable = self
            .catalog
            .get(id)
            .map(|def| def.stackable)
            .unwrap_or(false);
        stackable || !active.iter().any(|inst| inst.effect_id == id)
    }

    /// Refresh-on-improvement: if an instance with the same id exists and the
    /// new instance's duration beats its remaining turns, the existing
    /// instance's timer is overwritten and its timestamp refreshed; otherwise
    /// the new instance is discarded. Magnitudes never combine. With no
    /// existing instance the new one is appended.
    pub fn apply_with_duration_rule(
        &self,
        active: &mut Vec<EffectInstance>,
        new_instance: EffectInstance,
    ) {
        match active
            .iter_mut()
            .find(|inst| inst.effect_id == new_instance.effect_id)
        {
            Some(existing) => {
                if new_instance.duration > existing.turns_remaining {
                    existing.duration = new_instance.duration;
                    existing.turns_remaining = new_instance.duration;
                    existing.applied_at = new_instance.applied_at;
                }
            }
            None => active.push(new_instance),
        }
    }

    /// Applies one turn's worth of this instance: flat per-turn deltas, then
    /// timer bookkeeping. Instant effects resolve once and expire; permanent
    /// effects never expire here.
    pub fn resolve_turn(&self, instance: &mut EffectInstance) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        let Some(def) = self.catalog.get(&instance.effect_id) else {
            // Stale id from an old snapshot: drop it without touching state.
            outcome.expired = true;
            return outcome;
        };

        let mods = &def.modifiers;
        if mods.damage_per_turn > 0 {
            outcome.damage = scale(mods.damage_per_turn, instance.potency);
            outcome
                .messages
                .push(format!("{} deals {} damage", def.name, outcome.damage));
        }
        if mods.health_per_turn > 0 {
            outcome.healing = scale(mods.health_per_turn, instance.potency);
            outcome
                .messages
                .push(format!("{} restores {} health", def.name, outcome.healing));
        }
        if mods.mana_per_turn > 0 {
            outcome.mana = scale(mods.mana_per_turn, instance.potency);
            outcome
                .messages
                .push(format!("{} restores {} mana", def.name, outcome.mana));
        }

        match instance.duration {
            DURATION_PERMANENT => {}
            DURATION_INSTANT => {
                outcome.expired = true;
            }
            _ => {
                instance.turns_remaining -= 1;
                if instance.turns_remaining <= 0 {
                    outcome.expired = true;
                    outcome.messages.push(format!("{} wears off", def.name));
                }
            }
        }

        outcome
    }

    /// Resolves every instance in stable insertion order, accumulating totals
    /// and removing expired instances in the same pass.
    pub fn resolve_all(&self, active: &mut Vec<EffectInstance>) -> TurnReport {
        let mut report = TurnReport::default();
        let mut kept = Vec::with_capacity(active.len());

        for mut instance in active.drain(..) {
            let outcome = self.resolve_turn(&mut instance);
            report.damage += outcome.damage;
            report.healing += outcome.healing;
            report.mana += outcome.mana;
            report.messages.extend(outcome.messages);
            if !outcome.expired {
                kept.push(instance);
            }
        }

        *active = kept;
        report
    }

    // === Combat-stat reads over an active list ===
    // Pure helpers for the combat layer; none of these mutate instances.

    pub fn damage_multiplier(&self, active: &[EffectInstance]) -> f64 {
        self.definitions(active)
            .map(|m| m.damage_multiplier)
            .product()
    }

    pub fn damage_bonus(&self, active: &[EffectInstance]) -> u32 {
        self.definitions(active).map(|m| m.damage_bonus).sum()
    }

    pub fn damage_reduction(&self, active: &[EffectInstance]) -> u32 {
        self.definitions(active).map(|m| m.damage_reduction).sum()
    }

    pub fn armor_reduction(&self, active: &[EffectInstance]) -> u32 {
        self.definitions(active).map(|m| m.armor_reduction).sum()
    }

    pub fn crit_bonus(&self, active: &[EffectInstance]) -> f64 {
        self.definitions(active).map(|m| m.crit_bonus).sum()
    }

    pub fn loot_bonus(&self, active: &[EffectInstance]) -> f64 {
        self.definitions(active).map(|m| m.loot_bonus).sum()
    }

    pub fn drain_amount(&self, active: &[EffectInstance]) -> u32 {
        self.definitions(active).map(|m| m.drain_amount).sum()
    }

    pub fn magic_punish_damage(&self, active: &[EffectInstance]) -> u32 {
        self.definitions(active).map(|m| m.magic_punish_damage).sum()
    }

    pub fn health_multiplier(&self, active: &[EffectInstance]) -> f64 {
        self.definitions(active)
            .map(|m| m.health_multiplier)
            .product()
    }

    pub fn actions_disabled(&self, active: &[EffectInstance]) -> bool {
        self.definitions(active).any(|m| m.disable_all_actions)
    }

    pub fn weapons_disabled(&self, active: &[EffectInstance]) -> bool {
        self.definitions(active)
            .any(|m| m.disable_weapons || m.disable_all_actions)
    }

    pub fn primary_weapon_disabled(&self, active: &[EffectInstance]) -> bool {
        self.definitions(active)
            .any(|m| m.disable_primary_weapon || m.disable_weapons || m.disable_all_actions)
    }

    pub fn magic_disabled(&self, active: &[EffectInstance]) -> bool {
        self.definitions(active)
            .any(|m| m.disable_magic || m.disable_all_actions)
    }

    pub fn is_untargetable(&self, active: &[EffectInstance]) -> bool {
        self.definitions(active).any(|m| m.untargetable)
    }

    pub fn is_effect_immune(&self, active: &[EffectInstance]) -> bool {
        self.definitions(active).any(|m| m.effect_immunity)
    }

    pub fn ignores_armor(&self, active: &[EffectInstance]) -> bool {
        self.definitions(active).any(|m| m.ignore_armor)
    }

    fn definitions<'b>(
        &'b self,
        active: &'b [EffectInstance],
    ) -> impl Iterator<Item = &'b super::types::EffectModifiers> {
        active
            .iter()
            .filter_map(|inst| self.catalog.get(&inst.effect_id))
            .map(|def| &def.modifiers)
    }
}

fn scale(base: u32, potency: f64) -> u64 {
    (base as f64 * potency).round().max(0.0) as u64
}
