//! Delve - turn-based dungeon crawler simulation core.
//!
//! The state machine behind a dungeon run: status effects, the multi-tier
//! currency economy, category-bounded inventory, and floor progression.
//! Rendering, transport, persistence I/O, and session lifecycle live in
//! external layers; this crate only defines state transitions and the
//! contracts callers must honor. Every operation is synchronous and
//! assumes single-writer access to one player's state.

pub mod clock;
pub mod core;
pub mod economy;
pub mod effects;
pub mod inventory;
pub mod player;
pub mod progression;
pub mod snapshot;

pub use clock::{Clock, FixedClock, SystemClock};
pub use economy::{Currency, CurrencyLedger};
pub use effects::{EffectCatalog, EffectEngine, EffectInstance, TurnReport};
pub use inventory::{InventoryStore, ItemCategory, ItemDescriptor};
pub use player::PlayerSimulationState;
pub use progression::ProgressionTracker;
