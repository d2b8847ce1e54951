//! # Error Types
//!
//! This module defines the error types of the optimization engine. Every
//! fallible operation in the crate returns [`Result`], whose error side is
//! [`GeneticError`].
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genopt::error::{GeneticError, Result};
//!
//! fn check_rate(rate: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&rate) {
//!         return Err(GeneticError::InvalidConfiguration(format!(
//!             "rate must lie in [0, 1], got {}",
//!             rate
//!         )));
//!     }
//!     Ok(rate)
//! }
//!
//! assert!(check_rate(0.5).is_ok());
//! assert!(check_rate(1.5).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genopt::error::{GeneticError, OptionExt};
//!
//! fn first_score(scores: &[f64]) -> genopt::error::Result<f64> {
//!     scores.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(first_score(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur in the optimization engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// The settings of a run are internally inconsistent, or inconsistent
    /// with the population they are applied to.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A primitive was called with arguments that violate its contract.
    ///
    /// This signals a programming error in the caller and is never recovered
    /// from inside the engine.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when an evolution process fails.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use genopt::error::{GeneticError, OptionExt};
///
/// let best: Option<usize> = None;
/// let err = best
///     .ok_or_else_genetic(|| GeneticError::Evolution("no best candidate".to_string()))
///     .unwrap_err();
/// assert_eq!(err, GeneticError::Evolution("no best candidate".to_string()));
/// ```
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GeneticError::InvalidConfiguration("elitism too large".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: elitism too large");

        let err = GeneticError::InvalidArgument("n must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid argument: n must be positive");

        assert_eq!(
            GeneticError::EmptyPopulation.to_string(),
            "Empty population error: Cannot operate on an empty population"
        );
    }

    #[test]
    fn test_option_ext() {
        assert_eq!(Some(3).ok_or_else_genetic(|| GeneticError::EmptyPopulation), Ok(3));
        assert_eq!(
            None::<i32>.ok_or_else_genetic(|| GeneticError::EmptyPopulation),
            Err(GeneticError::EmptyPopulation)
        );
    }
}
