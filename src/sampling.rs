//! # Weighted Sampling
//!
//! Draws indices from a discrete distribution defined by non-negative
//! weights. Every draw is independent and made with replacement, so repeated
//! indices are expected.
//!
//! Two interchangeable implementations are provided:
//!
//! - [`weighted_choice`] scans the running sum of weights for every draw.
//! - [`binary_weighted_choice`] builds the cumulative sums once and
//!   binary-searches them, which is cheaper for many draws over long inputs.
//!
//! Both return `None` for every draw when no weight is positive, which tells
//! the caller there is no distribution to draw from. Choosing a fallback is
//! the caller's job.
//!
//! ## Example
//!
//! ```rust
//! use genopt::rng::RandomNumberGenerator;
//! use genopt::sampling::weighted_choice;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! let choices = weighted_choice(&[1.0, 2.0, 0.0], 20, &mut rng).unwrap();
//! assert_eq!(choices.len(), 20);
//! assert!(choices.iter().all(|c| *c != Some(2)));
//!
//! let none = weighted_choice(&[0.0, 0.0], 3, &mut rng).unwrap();
//! assert_eq!(none, vec![None, None, None]);
//! ```

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Draws `n` indices proportionally to `weights`, using a linear scan over the
/// running sum for each draw.
///
/// # Errors
///
/// Returns `GeneticError::InvalidArgument` if `n` is zero, if any weight is
/// negative or NaN, or if the weights sum to infinity.
pub fn weighted_choice(
    weights: &[f64],
    n: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Option<usize>>> {
    let total = validate(weights, n)?;
    if total == 0.0 {
        return Ok(vec![None; n]);
    }

    let fallback = last_positive(weights);
    let choices = (0..n)
        .map(|_| {
            let r = rng.uniform(0.0, total);
            let mut cumulative = 0.0;
            for (i, &w) in weights.iter().enumerate() {
                cumulative += w;
                if cumulative > r {
                    return Some(i);
                }
            }
            // Rounding left r at the very top of the wheel.
            fallback
        })
        .collect();

    Ok(choices)
}

/// Draws `n` indices proportionally to `weights`, binary-searching the
/// cumulative sums for each draw.
///
/// Edge cases behave exactly like [`weighted_choice`].
///
/// # Errors
///
/// Returns `GeneticError::InvalidArgument` if `n` is zero, if any weight is
/// negative or NaN, or if the weights sum to infinity.
pub fn binary_weighted_choice(
    weights: &[f64],
    n: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Option<usize>>> {
    let total = validate(weights, n)?;
    if total == 0.0 {
        return Ok(vec![None; n]);
    }

    let cumulative: Vec<f64> = weights
        .iter()
        .scan(0.0, |sum, &w| {
            *sum += w;
            Some(*sum)
        })
        .collect();
    let fallback = last_positive(weights);

    let choices = (0..n)
        .map(|_| {
            let r = rng.uniform(0.0, total);
            let i = cumulative.partition_point(|&c| c <= r);
            if i < cumulative.len() {
                Some(i)
            } else {
                fallback
            }
        })
        .collect();

    Ok(choices)
}

/// Checks the sampler's arguments and returns the total weight.
fn validate(weights: &[f64], n: usize) -> Result<f64> {
    if n == 0 {
        return Err(GeneticError::InvalidArgument(
            "Number of draws must be positive".to_string(),
        ));
    }

    if let Some((i, w)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| w.is_nan() || **w < 0.0)
    {
        return Err(GeneticError::InvalidArgument(format!(
            "Weights must be non-negative numbers, got {} at index {}",
            w, i
        )));
    }

    let total: f64 = weights.iter().sum();
    if !total.is_finite() {
        return Err(GeneticError::InvalidArgument(
            "Weights must have a finite sum".to_string(),
        ));
    }

    Ok(total)
}

fn last_positive(weights: &[f64]) -> Option<usize> {
    weights.iter().rposition(|&w| w > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type Sampler = fn(&[f64], usize, &mut RandomNumberGenerator) -> Result<Vec<Option<usize>>>;

    const SAMPLERS: [(&str, Sampler); 2] = [
        ("linear", weighted_choice),
        ("binary", binary_weighted_choice),
    ];

    #[test]
    fn test_never_selects_zero_weight() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        for (name, sampler) in SAMPLERS {
            let choices = sampler(&[1.0, 2.0, 0.0], 20, &mut rng).unwrap();
            assert_eq!(choices.len(), 20, "{} sampler", name);
            for choice in choices {
                assert!(matches!(choice, Some(0) | Some(1)), "{} sampler returned {:?}", name, choice);
            }
        }
    }

    #[test]
    fn test_all_zero_weights_yield_none() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        for (name, sampler) in SAMPLERS {
            let choices = sampler(&[0.0, 0.0, 0.0], 20, &mut rng).unwrap();
            assert_eq!(choices, vec![None; 20], "{} sampler", name);
        }
    }

    #[test]
    fn test_empty_weights_yield_none() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        for (name, sampler) in SAMPLERS {
            assert_eq!(sampler(&[], 2, &mut rng).unwrap(), vec![None, None], "{} sampler", name);
        }
    }

    #[test]
    fn test_zero_draws_fail() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        for (name, sampler) in SAMPLERS {
            let result = sampler(&[0.0, 0.0, 0.0], 0, &mut rng);
            assert!(
                matches!(result, Err(GeneticError::InvalidArgument(_))),
                "{} sampler",
                name
            );
        }
    }

    #[test]
    fn test_invalid_weights_fail() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        for (name, sampler) in SAMPLERS {
            for weights in [vec![1.0, -0.5], vec![f64::NAN, 1.0], vec![f64::INFINITY]] {
                let result = sampler(&weights, 3, &mut rng);
                assert!(
                    matches!(result, Err(GeneticError::InvalidArgument(_))),
                    "{} sampler accepted {:?}",
                    name,
                    weights
                );
            }
        }
    }

    #[test]
    fn test_single_positive_weight_always_chosen() {
        let mut rng = RandomNumberGenerator::from_seed(7);
        for (name, sampler) in SAMPLERS {
            let choices = sampler(&[0.0, 0.0, 3.5, 0.0], 50, &mut rng).unwrap();
            assert!(choices.iter().all(|c| *c == Some(2)), "{} sampler", name);
        }
    }

    #[test]
    fn test_heavier_weight_drawn_more_often() {
        let mut rng = RandomNumberGenerator::from_seed(1234);
        for (name, sampler) in SAMPLERS {
            let choices = sampler(&[1.0, 9.0], 10_000, &mut rng).unwrap();
            let heavy = choices.iter().filter(|c| **c == Some(1)).count();
            // Expected 9000; the bound is many standard deviations wide.
            assert!((8500..=9500).contains(&heavy), "{} sampler drew {}", name, heavy);
        }
    }

    proptest! {
        #[test]
        fn prop_choices_point_at_positive_weights(
            weights in prop::collection::vec(prop_oneof![Just(0.0), 0.0f64..100.0], 1..20),
            n in 1usize..50,
            seed in any::<u64>(),
        ) {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            let all_zero = weights.iter().all(|&w| w == 0.0);
            for (_, sampler) in SAMPLERS {
                let choices = sampler(&weights, n, &mut rng).unwrap();
                prop_assert_eq!(choices.len(), n);
                for choice in choices {
                    match choice {
                        None => prop_assert!(all_zero),
                        Some(i) => prop_assert!(weights[i] > 0.0),
                    }
                }
            }
        }
    }
}
