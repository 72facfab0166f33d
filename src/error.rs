//! # Error Types
//!
//! This module defines custom error types for the genetic algorithm engine.
//! Every variant is a local, synchronous failure raised at the point where a
//! contract is violated. Nothing is retried internally.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use foox::error::{GeneticError, Result};
//!
//! fn check_sizes(expected: usize, actual: usize) -> Result<()> {
//!     if expected != actual {
//!         return Err(GeneticError::PopulationSizeChanged { expected, actual });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_sizes(3, 3).is_ok());
//! assert!(check_sizes(3, 4).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use foox::error::{GeneticError, OptionExt};
//!
//! fn find_best_candidate(candidates: &[i32]) -> foox::error::Result<i32> {
//!     candidates.iter().max().cloned().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the genetic algorithm engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a genome without a fitness score is used where
    /// a score is required (selection, ranking).
    #[error("Unscored genome at position {position}: fitness must be evaluated first")]
    UnscoredGenome { position: usize },

    /// Error that occurs when two chromosomes of different length are recombined.
    #[error("Length mismatch: chromosomes of length {left} and {right} cannot be crossed over")]
    LengthMismatch { left: usize, right: usize },

    /// Error that occurs when a locus lies outside a chromosome or context.
    #[error("Index out of range: locus {locus} is not below length {length}")]
    IndexOutOfRange { locus: usize, length: usize },

    /// Error that occurs when a breeding strategy returns a population whose
    /// size differs from the population it was given.
    #[error("Population size changed: expected {expected} genomes, got {actual}")]
    PopulationSizeChanged { expected: usize, actual: usize },

    /// Error that occurs when a genome kind cannot offer any allele for a locus.
    #[error("No legal allele available at locus {locus}")]
    NoLegalAllele { locus: usize },

    /// Error that occurs when a fitness function returns a score that cannot be ranked.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),
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
/// use foox::error::{GeneticError, OptionExt};
///
/// let empty: Vec<u8> = Vec::new();
/// let first = empty.first().ok_or_else_genetic(|| GeneticError::EmptyPopulation);
/// assert_eq!(first, Err(GeneticError::EmptyPopulation));
/// ```
pub trait OptionExt<T> {
    /// Converts an Option to a Result using a closure to generate the error.
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
