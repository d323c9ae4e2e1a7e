//! # Grimvale Heroes
//!
//! Hero generation and village state for a text-based dark-fantasy
//! survival game.
//!
//! ## Overview
//!
//! Heroes are rolled from fixed probability tables: a rarity tier is
//! sampled by weight (S 5%, A 25%, B 70%), an archetype with equal
//! probability per class, and the stats from per-archetype ranges scaled
//! by the tier multiplier. The crate also carries the village world state
//! and the event-outcome model that resolved narrative events apply
//! against heroes and the village.
//!
//! ## Architecture
//!
//! Everything here is a pure value computation over an explicit `Rng`
//! handle, so calls are independent and safe to run concurrently with
//! per-caller generators. Persistence and narrative text generation are
//! external collaborators: callers persist the returned [`Hero`] (which is
//! when its `id` gets assigned) and supply `name`/`bio` strings from their
//! text generator.

pub mod error;
pub mod hero;
pub mod sampler;
pub mod village;

pub use error::GeneratorError;
pub use hero::registry::HeroTables;
pub use hero::types::{Archetype, Gender, Tier};
pub use hero::Hero;
pub use village::WorldState;
