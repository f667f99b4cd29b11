//! Weighted sampling with and without replacement.
//!
//! All functions draw from an injected [`Rng`], so a seeded RNG reproduces
//! the same picks.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::index;

use crate::generator::FakerError;
use crate::types::Choices;

/// Draw `length` values from `choices`.
///
/// - `length = None` draws a random count in `[1, N]`.
/// - `unique = true` samples without replacement and fails if `length > N`.
/// - `use_weighting = false` ignores weights and samples uniformly.
///
/// # Example
///
/// ```
/// use fakery::Choices;
/// use fakery::random::sample;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let letters = ["a", "b", "c"];
/// let picked = sample(Choices::uniform(&letters), Some(3), true, true, &mut rng).unwrap();
/// assert_eq!(picked.len(), 3);
/// ```
pub fn sample<T: Clone, R: Rng + ?Sized>(
    choices: Choices<'_, T>,
    length: Option<usize>,
    unique: bool,
    use_weighting: bool,
    rng: &mut R,
) -> Result<Vec<T>, FakerError> {
    let available = choices.len();
    if available == 0 {
        return Err(FakerError::EmptyChoices);
    }

    let length = match length {
        Some(length) => length,
        None => rng.random_range(1..=available),
    };
    if unique && length > available {
        return Err(FakerError::SampleTooLarge {
            requested: length,
            available,
        });
    }

    let values = choices.values();
    let weights = if use_weighting { choices.weights() } else { None };

    let picked = match (weights, unique) {
        (Some(weights), true) => choices_distribution_unique(&values, &weights, length, rng)?,
        (Some(weights), false) => choices_distribution(&values, Some(&weights), length, rng)?,
        (None, true) => index::sample(rng, available, length)
            .into_iter()
            .map(|i| values[i])
            .collect(),
        (None, false) => choices_distribution(&values, None, length, rng)?,
    };

    Ok(picked.into_iter().cloned().collect())
}

/// Draw `length` values with replacement, weighted when `weights` is given.
pub fn choices_distribution<T: Copy, R: Rng + ?Sized>(
    items: &[T],
    weights: Option<&[f64]>,
    length: usize,
    rng: &mut R,
) -> Result<Vec<T>, FakerError> {
    if items.is_empty() {
        return Err(FakerError::EmptyChoices);
    }
    match weights {
        None => Ok((0..length)
            .map(|_| items[rng.random_range(0..items.len())])
            .collect()),
        Some(weights) => {
            check_weights(items.len(), weights)?;
            let dist = WeightedIndex::new(weights).map_err(|e| FakerError::InvalidWeights {
                message: e.to_string(),
            })?;
            Ok((0..length).map(|_| items[dist.sample(rng)]).collect())
        }
    }
}

/// Draw `length` distinct values, respecting relative weights.
///
/// After each pick the chosen item and its weight are removed and the
/// cumulative distribution is rebuilt from what remains.
pub fn choices_distribution_unique<T: Copy, R: Rng + ?Sized>(
    items: &[T],
    weights: &[f64],
    length: usize,
    rng: &mut R,
) -> Result<Vec<T>, FakerError> {
    check_weights(items.len(), weights)?;
    if length > items.len() {
        return Err(FakerError::SampleTooLarge {
            requested: length,
            available: items.len(),
        });
    }

    let mut items = items.to_vec();
    let mut weights = weights.to_vec();
    let mut picked = Vec::with_capacity(length);

    for _ in 0..length {
        let cdf = cumulative(&weights);
        let total = cdf.last().copied().unwrap_or(0.0);
        let idx = if total > 0.0 {
            let uniform: f64 = rng.random();
            let point = uniform * total;
            cdf.partition_point(|&edge| edge <= point).min(items.len() - 1)
        } else {
            // only zero-weight items remain
            rng.random_range(0..items.len())
        };
        picked.push(items.remove(idx));
        weights.remove(idx);
    }

    Ok(picked)
}

fn cumulative(weights: &[f64]) -> Vec<f64> {
    weights
        .iter()
        .scan(0.0, |total, weight| {
            *total += weight;
            Some(*total)
        })
        .collect()
}

fn check_weights(count: usize, weights: &[f64]) -> Result<(), FakerError> {
    if weights.len() != count {
        return Err(FakerError::InvalidWeights {
            message: format!("expected {count} weights, got {}", weights.len()),
        });
    }
    if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(FakerError::InvalidWeights {
            message: format!("weights must be finite and non-negative, got {bad}"),
        });
    }
    if !weights.iter().any(|w| *w > 0.0) {
        return Err(FakerError::InvalidWeights {
            message: "at least one weight must be positive".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const LETTERS: &[&str] = &["a", "b", "c", "d", "e"];
    const WEIGHTED: &[(&str, f64)] = &[("common", 0.7), ("rare", 0.2), ("never", 0.0), ("odd", 0.1)];

    #[test]
    fn unique_uniform_sample_has_no_duplicates() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let picked = sample(Choices::uniform(LETTERS), Some(5), true, true, &mut rng).unwrap();
            let distinct: HashSet<_> = picked.iter().collect();
            assert_eq!(distinct.len(), 5);
        }
    }

    #[test]
    fn unique_weighted_sample_has_no_duplicates() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..200 {
            let picked = sample(Choices::weighted(WEIGHTED), Some(4), true, true, &mut rng).unwrap();
            let distinct: HashSet<_> = picked.iter().collect();
            assert_eq!(distinct.len(), 4);
        }
    }

    #[test]
    fn unique_sample_longer_than_choices_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = sample(Choices::uniform(LETTERS), Some(6), true, true, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            FakerError::SampleTooLarge {
                requested: 6,
                available: 5
            }
        ));
    }

    #[test]
    fn sampling_with_replacement_may_exceed_choice_count() {
        let mut rng = StdRng::seed_from_u64(0);
        let picked = sample(Choices::uniform(LETTERS), Some(50), false, true, &mut rng).unwrap();
        assert_eq!(picked.len(), 50);
    }

    #[test]
    fn default_length_is_within_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let picked = sample(Choices::uniform(LETTERS), None, false, true, &mut rng).unwrap();
            assert!((1..=LETTERS.len()).contains(&picked.len()));
        }
    }

    #[test]
    fn empty_choices_fail() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty: &[&str] = &[];
        let err = sample(Choices::uniform(empty), Some(1), false, true, &mut rng).unwrap_err();
        assert!(matches!(err, FakerError::EmptyChoices));
    }

    #[test]
    fn zero_weight_item_never_drawn_with_replacement() {
        let mut rng = StdRng::seed_from_u64(42);
        let picked = sample(Choices::weighted(WEIGHTED), Some(5000), false, true, &mut rng).unwrap();
        assert!(!picked.contains(&"never"));
    }

    #[test]
    fn weighted_frequencies_converge() {
        let mut rng = StdRng::seed_from_u64(1234);
        let draws = 20_000;
        let picked =
            sample(Choices::weighted(WEIGHTED), Some(draws), false, true, &mut rng).unwrap();
        let common = picked.iter().filter(|v| **v == "common").count() as f64 / draws as f64;
        let rare = picked.iter().filter(|v| **v == "rare").count() as f64 / draws as f64;
        assert!((common - 0.7).abs() < 0.03, "common frequency {common}");
        assert!((rare - 0.2).abs() < 0.03, "rare frequency {rare}");
    }

    #[test]
    fn unique_weighted_first_pick_respects_weights() {
        let mut rng = StdRng::seed_from_u64(77);
        let trials = 10_000;
        let mut common_first = 0;
        for _ in 0..trials {
            let picked =
                sample(Choices::weighted(WEIGHTED), Some(2), true, true, &mut rng).unwrap();
            if picked[0] == "common" {
                common_first += 1;
            }
        }
        let ratio = f64::from(common_first) / f64::from(trials);
        assert!((ratio - 0.7).abs() < 0.03, "first pick ratio {ratio}");
    }

    #[test]
    fn weighting_can_be_disabled() {
        let mut rng = StdRng::seed_from_u64(8);
        let picked = sample(Choices::weighted(WEIGHTED), Some(4000), false, false, &mut rng).unwrap();
        // uniform sampling reaches the zero-weight entry
        assert!(picked.contains(&"never"));
    }

    #[test]
    fn negative_weights_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let bad: &[(&str, f64)] = &[("a", 1.0), ("b", -0.5)];
        let err = sample(Choices::weighted(bad), Some(1), false, true, &mut rng).unwrap_err();
        assert!(matches!(err, FakerError::InvalidWeights { .. }));
    }

    #[test]
    fn same_seed_same_picks() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            sample(Choices::weighted(WEIGHTED), Some(30), false, true, &mut rng).unwrap()
        };
        assert_eq!(run(2024), run(2024));
    }
}
