//! Village world state shared by all of a player's heroes.

pub mod event;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-player village resources.
///
/// Deltas from resolved events land here; resources floor at zero and carry
/// no upper caps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorldState {
    pub food: i64,
    pub supplies: i64,
    pub morale: i64,
    pub passed_tutorial: bool,
}

impl Default for WorldState {
    /// Starting resources seeded for a fresh village.
    fn default() -> Self {
        WorldState {
            food: 20,
            supplies: 50,
            morale: 100,
            passed_tutorial: false,
        }
    }
}

impl WorldState {
    pub fn apply_supplies_delta(&mut self, delta: i64) {
        self.supplies = (self.supplies + delta).max(0);
    }

    pub fn apply_food_delta(&mut self, delta: i64) {
        self.food = (self.food + delta).max(0);
    }

    pub fn apply_morale_delta(&mut self, delta: i64) {
        self.morale = (self.morale + delta).max(0);
    }
}
