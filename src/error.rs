use thiserror::Error;

use crate::hero::types::{Archetype, Tier};

/// Errors raised by the hero generator and its sampler.
///
/// Every variant is an invalid-argument condition; the generator performs no
/// I/O, so nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("cannot sample from an empty options list")]
    EmptyOptions,
    #[error("got {options} options but {weights} weights")]
    WeightCountMismatch { options: usize, weights: usize },
    #[error("tier {0:?} has no entry in the tier table")]
    UnknownTier(Tier),
    #[error("archetype {0:?} has no entry in the archetype table")]
    UnknownArchetype(Archetype),
}
