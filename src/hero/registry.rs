use std::collections::HashMap;

use super::types::{Archetype, ArchetypeProperties, StatRange, Tier, TierProperties};
use crate::error::GeneratorError;

/// Fixed tier and archetype property tables.
///
/// Built once at process start and shared read-only afterwards; nothing
/// mutates a table once it is handed to callers.
#[derive(Debug, Default, Clone)]
pub struct HeroTables {
    tiers: HashMap<Tier, TierProperties>,
    archetypes: HashMap<Archetype, ArchetypeProperties>,
}

impl HeroTables {
    pub fn new() -> Self {
        Self {
            tiers: HashMap::new(),
            archetypes: HashMap::new(),
        }
    }

    pub fn register_tier(&mut self, tier: Tier, props: TierProperties) {
        self.tiers.insert(tier, props);
    }

    pub fn register_archetype(&mut self, archetype: Archetype, props: ArchetypeProperties) {
        self.archetypes.insert(archetype, props);
    }

    /// Canonical tables for the survival game balance.
    pub fn with_canonical() -> Self {
        let mut tables = Self::new();
        tables.register_tier(
            Tier::S,
            TierProperties {
                rarity: 0.05,
                multiplier: 2.0,
            },
        );
        tables.register_tier(
            Tier::A,
            TierProperties {
                rarity: 0.25,
                multiplier: 1.5,
            },
        );
        tables.register_tier(
            Tier::B,
            TierProperties {
                rarity: 0.70,
                multiplier: 1.0,
            },
        );
        tables.register_archetype(
            Archetype::Fighter,
            ArchetypeProperties {
                hp: StatRange {
                    min: 700,
                    max: 1000,
                },
                attack: StatRange { min: 30, max: 50 },
            },
        );
        tables.register_archetype(
            Archetype::Assassin,
            ArchetypeProperties {
                hp: StatRange { min: 500, max: 700 },
                attack: StatRange { min: 50, max: 70 },
            },
        );
        tables.register_archetype(
            Archetype::Mage,
            ArchetypeProperties {
                hp: StatRange { min: 350, max: 500 },
                attack: StatRange { min: 70, max: 100 },
            },
        );
        tables
    }

    pub fn tier(&self, tier: Tier) -> Result<&TierProperties, GeneratorError> {
        self.tiers
            .get(&tier)
            .ok_or(GeneratorError::UnknownTier(tier))
    }

    pub fn archetype(&self, archetype: Archetype) -> Result<&ArchetypeProperties, GeneratorError> {
        self.archetypes
            .get(&archetype)
            .ok_or(GeneratorError::UnknownArchetype(archetype))
    }

    /// Rarity weights in `Tier::all()` order, the order the sampler walks.
    pub fn tier_weights(&self) -> Result<Vec<f64>, GeneratorError> {
        Tier::all()
            .into_iter()
            .map(|tier| self.tier(tier).map(|props| props.rarity))
            .collect()
    }
}
