//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for producing
//! the next generation from a ranked population. Any function or closure with the
//! matching signature is a breeding strategy too.
pub mod elitist;

use crate::{error::Result, genome::Genome, rng::RandomNumberGenerator};

/// # BreedStrategy
///
/// Produces the next generation from the current one.
///
/// The input is ranked fittest first. A strategy must return exactly as many
/// genomes as it receives; the evolution loop reports any other size as
/// `GeneticError::PopulationSizeChanged`. Genomes that keep their cached score
/// are not evaluated again.
pub trait BreedStrategy<A, S> {
    /// Breeds the next generation from `ranked`.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The ranked slice is empty
    /// - Selection, crossover or mutation fail
    fn breed(
        &self,
        ranked: &[Genome<A, S>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome<A, S>>>;
}

impl<A, S, F> BreedStrategy<A, S> for F
where
    F: Fn(&[Genome<A, S>], &mut RandomNumberGenerator) -> Result<Vec<Genome<A, S>>>,
{
    fn breed(
        &self,
        ranked: &[Genome<A, S>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome<A, S>>> {
        self(ranked, rng)
    }
}

pub use elitist::ElitistBreedStrategy;
