//! Built-in effect definitions.
//!
//! The catalog is an immutable registry constructed once at startup and
//! shared read-only across all actors. Callers receive it by reference;
//! nothing here is ambient global state.

use std::collections::HashMap;

use super::types::{
    EffectCategory, EffectDefinition, EffectModifiers, DURATION_INSTANT, DURATION_PERMANENT,
};

/// Immutable effect lookup table: id -> definition.
#[derive(Debug, Clone)]
pub struct EffectCatalog {
    defs: HashMap<&'static str, EffectDefinition>,
}

impl EffectCatalog {
    /// Builds a catalog from an explicit definition list.
    pub fn new(definitions: Vec<EffectDefinition>) -> Self {
        let mut defs = HashMap::with_capacity(definitions.len());
        for def in definitions {
            defs.insert(def.id, def);
        }
        Self { defs }
    }

    /// The standard effect table shipped with the game.
    pub fn builtin() -> Self {
        Self::new(builtin_definitions())
    }

    pub fn get(&self, id: &str) -> Option<&EffectDefinition> {
        self.defs.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.defs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

fn def(
    id: &'static str,
    name: &'static str,
    category: EffectCategory,
    duration: i32,
    modifiers: EffectModifiers,
) -> EffectDefinition {
    EffectDefinition {
        id,
        name,
        category,
        modifiers,
        duration,
        stackable: false,
        once_per_battle: false,
    }
}

fn builtin_definitions() -> Vec<EffectDefinition> {
    use EffectCategory::*;

    let mut defs = vec![
        def(
            "poisoned",
            "Poisoned",
            Negative,
            3,
            EffectModifiers {
                damage_per_turn: 1,
                ..Default::default()
            },
        ),
        def(
            "burning",
            "Burning",
            Negative,
            2,
            EffectModifiers {
                damage_per_turn: 3,
                ..Default::default()
            },
        ),
        def(
            "regeneration",
            "Regeneration",
            Positive,
            4,
            EffectModifiers {
                health_per_turn: 3,
                ..Default::default()
            },
        ),
        def(
            "focused",
            "Focused",
            Positive,
            4,
            EffectModifiers {
                mana_per_turn: 2,
                ..Default::default()
            },
        ),
        def(
            "stunned",
            "Stunned",
            Negative,
            1,
            EffectModifiers {
                disable_all_actions: true,
                ..Default::default()
            },
        ),
        def(
            "frozen",
            "Frozen",
            Negative,
            2,
            EffectModifiers {
                disable_weapons: true,
                ..Default::default()
            },
        ),
        def(
            "silenced",
            "Silenced",
            Negative,
            2,
            EffectModifiers {
                disable_magic: true,
                ..Default::default()
            },
        ),
        def(
            "disarmed",
            "Disarmed",
            Negative,
            2,
            EffectModifiers {
                disable_primary_weapon: true,
                ..Default::default()
            },
        ),
        def(
            "weakened",
            "Weakened",
            Negative,
            3,
            EffectModifiers {
                damage_multiplier: 0.75,
                ..Default::default()
            },
        ),
        def(
            "enraged",
            "Enraged",
            Special,
            3,
            EffectModifiers {
                damage_multiplier: 1.5,
                ..Default::default()
            },
        ),
        def(
            "blessed",
            "Blessed",
            Positive,
            5,
            EffectModifiers {
                damage_bonus: 2,
                crit_bonus: 0.05,
                ..Default::default()
            },
        ),
        def(
            "shielded",
            "Shielded",
            Positive,
            3,
            EffectModifiers {
                damage_reduction: 3,
                ..Default::default()
            },
        ),
        def(
            "sundered",
            "Sundered",
            Negative,
            3,
            EffectModifiers {
                armor_reduction: 2,
                ..Default::default()
            },
        ),
        def(
            "lucky",
            "Lucky",
            Positive,
            5,
            EffectModifiers {
                loot_bonus: 0.25,
                ..Default::default()
            },
        ),
        def(
            "shadow_veil",
            "Shadow Veil",
            Special,
            1,
            EffectModifiers {
                untargetable: true,
                ..Default::default()
            },
        ),
        def(
            "piercing",
            "Piercing",
            Positive,
            2,
            EffectModifiers {
                ignore_armor: true,
                ..Default::default()
            },
        ),
        def(
            "vampiric",
            "Vampiric",
            Special,
            DURATION_PERMANENT,
            EffectModifiers {
                drain_amount: 2,
                ..Default::default()
            },
        ),
        def(
            "titan_blood",
            "Titan Blood",
            Special,
            DURATION_PERMANENT,
            EffectModifiers {
                health_multiplier: 1.25,
                ..Default::default()
            },
        ),
        def(
            "mana_burn",
            "Mana Burn",
            Negative,
            3,
            EffectModifiers {
                magic_punish_damage: 4,
                ..Default::default()
            },
        ),
        def(
            "adrenaline",
            "Adrenaline",
            Neutral,
            DURATION_INSTANT,
            EffectModifiers {
                health_per_turn: 5,
                mana_per_turn: 5,
                ..Default::default()
            },
        ),
    ];

    // Bleeding stacks: each application is its own instance.
    let mut bleeding = def(
        "bleeding",
        "Bleeding",
        Negative,
        3,
        EffectModifiers {
            damage_per_turn: 2,
            ..Default::default()
        },
    );
    bleeding.stackable = true;
    defs.push(bleeding);

    // Purity wipes incoming effects and may only trigger once per battle.
    let mut purity = def(
        "purity",
        "Purity",
        Special,
        2,
        EffectModifiers {
            effect_immunity: true,
            ..Default::default()
        },
    );
    purity.once_per_battle = true;
    defs.push(purity);

    defs
}
