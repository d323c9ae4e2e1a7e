//! Seeded sampling primitives shared by hero generation and event rolls.
//!
//! Every draw goes through an explicit `Rng` handle so callers stay in
//! control of determinism; tests and replay tooling pass a seeded
//! `Lcg64Xsh32`, live callers can pass `thread_rng`.

use rand::Rng;
use rand_pcg::Lcg64Xsh32;

use crate::error::GeneratorError;

/// Pick one option according to per-option probabilities.
///
/// Walks `options` in order, accumulating weights, and returns the first
/// option whose cumulative weight reaches the uniform draw in `[0, 1)`.
/// When the weights sum to slightly less than 1.0 and the draw lands past
/// the final cumulative sum, the last option is returned instead of
/// failing; callers rely on that fallback for imprecise weight vectors.
pub fn sample_weighted<'a, T, R: Rng>(
    rng: &mut R,
    options: &'a [T],
    weights: &[f64],
) -> Result<&'a T, GeneratorError> {
    if options.is_empty() {
        return Err(GeneratorError::EmptyOptions);
    }
    if options.len() != weights.len() {
        return Err(GeneratorError::WeightCountMismatch {
            options: options.len(),
            weights: weights.len(),
        });
    }

    let draw: f64 = rng.gen();
    let mut sum = 0.0;
    for (option, &weight) in options.iter().zip(weights.iter()) {
        sum += weight;
        if draw <= sum {
            return Ok(option);
        }
    }
    Ok(options.last().expect("options checked non-empty"))
}

/// Uniform integer draw in `min..=max`; both endpoints are reachable.
pub fn roll_in_range<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    let width = f64::from(max - min + 1);
    (rng.gen::<f64>() * width).floor() as u32 + min
}

/// Build the deterministic PCG used across the crate from a single u64 seed.
pub fn rng_from_seed(seed: u64) -> Lcg64Xsh32 {
    use rand::SeedableRng;

    let s = seed.to_le_bytes();
    let mut seed_bytes = [0u8; 16];
    seed_bytes[0..8].copy_from_slice(&s);
    seed_bytes[8..16].copy_from_slice(&s);
    Lcg64Xsh32::from_seed(seed_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    /// Rng whose uniform f64 draw is the largest value below 1.0.
    struct MaxRng;

    impl RngCore for MaxRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }
        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0xff);
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn test_empty_options_is_an_error() {
        let mut rng = rng_from_seed(1);
        let options: Vec<u32> = vec![];
        let err = sample_weighted(&mut rng, &options, &[]).unwrap_err();
        assert_eq!(err, GeneratorError::EmptyOptions);
    }

    #[test]
    fn test_weight_count_mismatch_is_an_error() {
        let mut rng = rng_from_seed(1);
        let err = sample_weighted(&mut rng, &["a", "b"], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::WeightCountMismatch {
                options: 2,
                weights: 1
            }
        );
    }

    #[test]
    fn test_deficit_weights_fall_back_to_last_option() {
        // Weights sum to 0.999999 and the draw is just below 1.0, so the
        // cumulative walk never reaches the draw.
        let mut rng = MaxRng;
        let weights = [0.333_333, 0.333_333, 0.333_333];
        let picked = sample_weighted(&mut rng, &["a", "b", "c"], &weights).unwrap();
        assert_eq!(*picked, "c");
    }

    #[test]
    fn test_all_zero_weights_still_return_an_option() {
        let mut rng = rng_from_seed(7);
        for _ in 0..100 {
            let picked = sample_weighted(&mut rng, &[1, 2, 3], &[0.0, 0.0, 0.0]).unwrap();
            assert!([1, 2, 3].contains(picked));
        }
    }

    #[test]
    fn test_certain_option_always_wins() {
        let mut rng = rng_from_seed(42);
        for _ in 0..1000 {
            let picked = sample_weighted(&mut rng, &["never", "always"], &[0.0, 1.0]).unwrap();
            assert_eq!(*picked, "always");
        }
    }

    #[test]
    fn test_roll_in_range_stays_inside_and_hits_both_ends() {
        let mut rng = rng_from_seed(3);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..10_000 {
            let value = roll_in_range(&mut rng, 1, 3);
            assert!((1..=3).contains(&value));
            seen_min |= value == 1;
            seen_max |= value == 3;
        }
        assert!(seen_min);
        assert!(seen_max);
    }

    #[test]
    fn test_roll_in_range_degenerate_range() {
        let mut rng = rng_from_seed(9);
        for _ in 0..100 {
            assert_eq!(roll_in_range(&mut rng, 5, 5), 5);
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = rng_from_seed(1234);
        let mut b = rng_from_seed(1234);
        for _ in 0..100 {
            assert_eq!(roll_in_range(&mut a, 0, 1000), roll_in_range(&mut b, 0, 1000));
        }
    }
}
