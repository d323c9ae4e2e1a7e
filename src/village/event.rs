//! Event outcome model: the game-side schema narrative events resolve into.
//!
//! The narrative text itself comes from an external generator; this module
//! only owns the option/outcome shapes and how a chosen outcome lands on a
//! hero and the village.

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::WorldState;
use crate::hero::Hero;
use crate::sampler::sample_weighted;

/// Which flavour of away-mission event to narrate for a hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum HeroEventKind {
    /// The story ends in an enemy encounter.
    EnemyEncounter,
    /// A morally complex situation with no enemy.
    NoEnemy,
}

/// 50/50 split between enemy encounters and moral-dilemma events.
pub fn roll_event_kind<R: Rng>(rng: &mut R) -> HeroEventKind {
    let options = [HeroEventKind::EnemyEncounter, HeroEventKind::NoEnemy];
    *sample_weighted(rng, &options, &[0.5, 0.5]).expect("event kinds are fixed")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Enemy {
    pub name: String,
    pub hp: i64,
    pub attack: i64,
}

/// Opening narration; the enemy is present only for encounter events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventSetup {
    pub event_story: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enemy: Option<Enemy>,
}

/// Conclusion of one chosen option for a hero event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeResult {
    pub desc: String,
    pub hp_delta: i64,
    pub supplies_delta: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventOption {
    pub option: String,
    pub result: OutcomeResult,
}

/// A fully narrated hero event: setup plus the options offered to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroEvent {
    pub event_setup: EventSetup,
    pub options: Vec<EventOption>,
}

impl HeroEvent {
    /// Look up the chosen option by index.
    pub fn choose(&self, index: usize) -> Result<&EventOption, String> {
        self.options.get(index).ok_or_else(|| {
            format!(
                "event has {} options, index {index} is out of range",
                self.options.len()
            )
        })
    }
}

/// Conclusion of one chosen option for a village event; only supplies move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillageOutcome {
    pub desc: String,
    pub supplies_delta: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillageOption {
    pub option: String,
    pub result: VillageOutcome,
}

/// A village crisis event: setup plus the options offered to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillageEvent {
    pub event_setup: EventSetup,
    pub options: Vec<VillageOption>,
}

impl VillageEvent {
    /// Look up the chosen option by index.
    pub fn choose(&self, index: usize) -> Result<&VillageOption, String> {
        self.options.get(index).ok_or_else(|| {
            format!(
                "event has {} options, index {index} is out of range",
                self.options.len()
            )
        })
    }
}

/// Land a chosen hero-event outcome on the hero and the village stores.
pub fn resolve_outcome(hero: &mut Hero, world: &mut WorldState, outcome: &OutcomeResult) {
    hero.apply_hp_delta(outcome.hp_delta);
    world.apply_supplies_delta(outcome.supplies_delta);
}

/// Land a chosen village-event outcome on the village stores.
pub fn resolve_village_outcome(world: &mut WorldState, outcome: &VillageOutcome) {
    world.apply_supplies_delta(outcome.supplies_delta);
}
