use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Cosmetic attribute; sampled 50/50 and never touches stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All genders in declared order (the order the sampler walks).
    pub fn all() -> Vec<Gender> {
        vec![Gender::Male, Gender::Female]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Rarity grade. Selection probability and stat multiplier live in the
/// tier table, keyed by this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Tier {
    S,
    A,
    B,
}

impl Tier {
    /// All tiers in declared order (the order the sampler walks).
    pub fn all() -> Vec<Tier> {
        vec![Tier::S, Tier::A, Tier::B]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
        }
    }
}

/// Hero class. Base stat ranges live in the archetype table, keyed by
/// this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Archetype {
    Fighter,
    Assassin,
    Mage,
}

impl Archetype {
    /// All archetypes in declared order (the order the sampler walks).
    pub fn all() -> Vec<Archetype> {
        vec![Archetype::Fighter, Archetype::Assassin, Archetype::Mage]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Fighter => "Fighter",
            Archetype::Assassin => "Assassin",
            Archetype::Mage => "Mage",
        }
    }
}

/// Inclusive integer range a raw stat is rolled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StatRange {
    pub min: u32,
    pub max: u32,
}

/// Per-tier selection weight and stat scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TierProperties {
    /// Selection probability; rarities across all tiers sum to 1.0.
    pub rarity: f64,
    /// Applied to raw stats after the integer roll.
    pub multiplier: f64,
}

/// Per-archetype base stat ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ArchetypeProperties {
    pub hp: StatRange,
    pub attack: StatRange,
}
