//! Floor depth and per-floor exploration quotas.

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    EXPLORATION_HARD_CAP, MID_FLOOR_END, MID_FLOOR_EXPLORATIONS, MID_FLOOR_START,
    SHALLOW_FLOOR_EXPLORATIONS,
};

/// Exploration quota for a floor.
///
/// Floors 1-9 allow 3 explorations, 10-20 allow 5, and deeper floors gain
/// one more per 10 floors up to a hard cap of 10. Floor 0 is the entrance
/// and is never explorable. The literal formula keeps floor 21 at 5
/// (`(21 - 20) / 10 == 0`); see the boundary test below.
pub fn max_explorations_for_floor(floor: u32) -> u32 {
    if floor == 0 {
        return 0;
    }
    if floor < MID_FLOOR_START {
        return SHALLOW_FLOOR_EXPLORATIONS;
    }
    if floor <= MID_FLOOR_END {
        return MID_FLOOR_EXPLORATIONS;
    }
    (MID_FLOOR_EXPLORATIONS + (floor - MID_FLOOR_END) / 10).min(EXPLORATION_HARD_CAP)
}

pub fn can_explore(floor: u32, current_count: u32) -> bool {
    current_count < max_explorations_for_floor(floor)
}

/// Current floor and how much of its quota has been spent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionTracker {
    /// 0 is the dungeon entrance.
    #[serde(default)]
    pub floor: u32,
    #[serde(default)]
    pub explorations: u32,
}

impl ProgressionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_explore(&self) -> bool {
        can_explore(self.floor, self.explorations)
    }

    /// Spends one exploration. Fails when the quota is exhausted (or at the
    /// entrance, which has no quota).
    pub fn record_exploration(&mut self) -> bool {
        if !self.can_explore() {
            return false;
        }
        self.explorations += 1;
        true
    }

    pub fn explorations_remaining(&self) -> u32 {
        max_explorations_for_floor(self.floor).saturating_sub(self.explorations)
    }

    /// Descends one floor and resets the exploration counter. The counter
    /// only resets on floor transitions, never on quota exhaustion.
    pub fn advance_floor(&mut self) {
        self.floor += 1;
        self.explorations = 0;
    }

    /// Warp-style jump to an arbitrary floor; also resets the counter.
    pub fn descend_to(&mut self, floor: u32) {
        self.floor = floor;
        self.explorations = 0;
    }

    pub fn reset_exploration(&mut self) {
        self.explorations = 0;
    }
}
