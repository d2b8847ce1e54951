//! # Permutation Crossover
//!
//! Order-based crossover (OBX) for genomes encoded as permutations. The
//! operator copies a random segment from the first parent and fills the
//! remaining positions with the second parent's other values, in the second
//! parent's order.
//!
//! ```text
//! a = 1 2 3 4 5 6 7 8      segment [2, 6) of a:   _ _ 3 4 5 6 _ _
//! b = 2 6 3 7 1 4 8 5      untaken values of b:   2 7 1 8
//!                          child:                 2 7 3 4 5 6 1 8
//! ```
//!
//! Values are compared by equality, so elements are expected to be
//! distinguishable. Repeated values behave like a set over values.
//!
//! ## Example
//!
//! ```rust
//! use genopt::crossover::order_based_crossover;
//! use genopt::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(3);
//! let a = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let b = vec![2, 6, 3, 7, 1, 4, 8, 5];
//!
//! let mut child = order_based_crossover(&a, &b, &mut rng).unwrap();
//! child.sort();
//! assert_eq!(child, a);
//! ```

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Performs order-based crossover of `a` and `b` at two random cut points.
///
/// Both cut points are drawn uniformly from `0..=len` and ordered so that
/// `start <= end`. The output keeps `a[start..end]` in place.
///
/// # Errors
///
/// Returns `GeneticError::InvalidArgument` if the parents differ in length.
pub fn order_based_crossover<T>(a: &[T], b: &[T], rng: &mut RandomNumberGenerator) -> Result<Vec<T>>
where
    T: Clone + Eq + Hash,
{
    check_lengths(a, b)?;

    let first = rng.index_inclusive(a.len());
    let second = rng.index_inclusive(a.len());
    let (start, end) = if first <= second {
        (first, second)
    } else {
        (second, first)
    };

    order_based_crossover_at(a, b, start, end)
}

/// Performs order-based crossover of `a` and `b` with a fixed segment
/// `start..end` taken from `a`.
///
/// `start == end` copies nothing from `a`, and `0..len` copies all of `a`.
///
/// # Errors
///
/// Returns `GeneticError::InvalidArgument` if the parents differ in length,
/// if `start > end`, or if `end` exceeds the parents' length.
pub fn order_based_crossover_at<T>(a: &[T], b: &[T], start: usize, end: usize) -> Result<Vec<T>>
where
    T: Clone + Eq + Hash,
{
    check_lengths(a, b)?;
    if start > end || end > a.len() {
        return Err(GeneticError::InvalidArgument(format!(
            "Invalid crossover segment {}..{} for parents of length {}",
            start,
            end,
            a.len()
        )));
    }

    let mut taken: HashSet<&T> = a[start..end].iter().collect();
    let mut donors = b.iter();
    let mut child = Vec::with_capacity(a.len());

    for i in 0..a.len() {
        if (start..end).contains(&i) {
            child.push(a[i].clone());
            continue;
        }

        // Parents that are not permutations of each other can run out of
        // untaken donor values; the position then keeps a's value.
        let next = donors.by_ref().find(|value| !taken.contains(*value));
        match next {
            Some(value) => {
                taken.insert(value);
                child.push(value.clone());
            }
            None => child.push(a[i].clone()),
        }
    }

    Ok(child)
}

fn check_lengths<T>(a: &[T], b: &[T]) -> Result<()> {
    if a.len() != b.len() {
        return Err(GeneticError::InvalidArgument(format!(
            "Crossover parents must have the same length, got {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}
