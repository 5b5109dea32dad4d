//! Status-effect engine: catalog definitions and per-actor instances.

pub mod catalog;
pub mod engine;
pub mod types;

pub use catalog::EffectCatalog;
pub use engine::EffectEngine;
pub use types::{
    EffectCategory, EffectDefinition, EffectInstance, EffectModifiers, TickOutcome, TurnReport,
    DURATION_INSTANT, DURATION_PERMANENT,
};
