//! Hero rolls and the hero value factory.
//!
//! A hero is rolled in two steps: tier/gender/archetype selection from the
//! fixed probability tables, then stat resolution from the archetype's base
//! ranges scaled by the tier multiplier. Name and bio arrive from an
//! external narrative generator and pass through untouched.

pub mod registry;
pub mod types;

use log::debug;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;
use crate::sampler::{roll_in_range, sample_weighted};
use self::registry::HeroTables;
use self::types::{Archetype, Gender, Tier};

/// One generated survivor.
///
/// `max_hp` and `attack` are rolled once at creation and never change;
/// `current_hp` is the only field gameplay mutates. `id` stays `None` until
/// the storage layer assigns a durable identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: Option<String>,
    pub gender: Gender,
    pub tier: Tier,
    pub archetype: Archetype,
    pub max_hp: f64,
    pub current_hp: f64,
    pub attack: f64,
    pub name: String,
    pub bio: String,
}

/// Roll a gender, 50/50.
pub fn roll_gender<R: Rng>(rng: &mut R) -> Gender {
    let options = Gender::all();
    let weights = vec![0.5; options.len()];
    *sample_weighted(rng, &options, &weights).expect("gender options are fixed")
}

/// Roll a tier using the table's rarity weights, walked in S, A, B order.
pub fn roll_tier<R: Rng>(rng: &mut R, tables: &HeroTables) -> Result<Tier, GeneratorError> {
    let options = Tier::all();
    let weights = tables.tier_weights()?;
    sample_weighted(rng, &options, &weights).copied()
}

/// Roll an archetype with equal probability per variant.
///
/// The weight vector is computed from the variant count, so adding an
/// archetype needs no rebalancing here.
pub fn roll_archetype<R: Rng>(rng: &mut R) -> Archetype {
    let options = Archetype::all();
    let weights = vec![1.0 / options.len() as f64; options.len()];
    *sample_weighted(rng, &options, &weights).expect("archetype options are fixed")
}

impl Hero {
    /// Build a hero from explicit attributes, rolling stats from the tables.
    ///
    /// The raw stat is an inclusive integer roll from the archetype's range;
    /// the tier multiplier is applied afterwards and the product is kept
    /// as-is, so fractional multipliers yield fractional stats. Current HP
    /// starts equal to max HP.
    pub fn create<R: Rng>(
        rng: &mut R,
        tables: &HeroTables,
        gender: Gender,
        tier: Tier,
        archetype: Archetype,
        name: String,
        bio: String,
    ) -> Result<Hero, GeneratorError> {
        let tier_props = *tables.tier(tier)?;
        let props = *tables.archetype(archetype)?;

        let max_hp =
            f64::from(roll_in_range(rng, props.hp.min, props.hp.max)) * tier_props.multiplier;
        let attack = f64::from(roll_in_range(rng, props.attack.min, props.attack.max))
            * tier_props.multiplier;

        Ok(Hero {
            id: None,
            gender,
            tier,
            archetype,
            max_hp,
            current_hp: max_hp,
            attack,
            name,
            bio,
        })
    }

    /// Roll gender, tier and archetype, then build the hero.
    pub fn generate<R: Rng>(
        rng: &mut R,
        tables: &HeroTables,
        name: String,
        bio: String,
    ) -> Result<Hero, GeneratorError> {
        let gender = roll_gender(rng);
        let tier = roll_tier(rng, tables)?;
        let archetype = roll_archetype(rng);
        debug!(
            "generated attributes - gender: {}, tier: {}, archetype: {}",
            gender.name(),
            tier.name(),
            archetype.name()
        );
        Hero::create(rng, tables, gender, tier, archetype, name, bio)
    }

    /// Apply a signed HP change, clamped to `0..=max_hp`.
    pub fn apply_hp_delta(&mut self, delta: i64) {
        self.current_hp = (self.current_hp + delta as f64).clamp(0.0, self.max_hp);
    }

    /// A hero is alive while current HP is above zero.
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::rng_from_seed;

    fn test_hero(seed: u64) -> Hero {
        let tables = HeroTables::with_canonical();
        let mut rng = rng_from_seed(seed);
        Hero::create(
            &mut rng,
            &tables,
            Gender::Female,
            Tier::B,
            Archetype::Fighter,
            "Maren".to_string(),
            "A wall of scars.".to_string(),
        )
        .expect("canonical tables")
    }

    #[test]
    fn test_create_starts_at_full_health() {
        let hero = test_hero(11);
        assert_eq!(hero.current_hp, hero.max_hp);
        assert!(hero.id.is_none());
    }

    #[test]
    fn test_hp_delta_clamps_at_zero_and_max() {
        let mut hero = test_hero(11);
        hero.apply_hp_delta(-1_000_000);
        assert_eq!(hero.current_hp, 0.0);
        assert!(!hero.is_alive());

        hero.apply_hp_delta(50);
        assert_eq!(hero.current_hp, 50.0);
        assert!(hero.is_alive());

        hero.apply_hp_delta(1_000_000);
        assert_eq!(hero.current_hp, hero.max_hp);
    }

    #[test]
    fn test_create_rejects_unknown_tags() {
        let tables = HeroTables::new();
        let mut rng = rng_from_seed(1);
        let err = Hero::create(
            &mut rng,
            &tables,
            Gender::Male,
            Tier::A,
            Archetype::Mage,
            String::new(),
            String::new(),
        )
        .unwrap_err();
        assert_eq!(err, GeneratorError::UnknownTier(Tier::A));
    }
}
