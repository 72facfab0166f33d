use std::fmt::Debug;

use crate::error::Result;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;
use crate::score::Score;

/// Trait for selection strategies in genetic algorithms.
///
/// A selection strategy picks one parent from a scored population. Parents
/// are sampled with replacement: the same genome may be returned by
/// consecutive calls.
///
/// # Examples
///
/// ```
/// use foox::genome::Genome;
/// use foox::rng::RandomNumberGenerator;
/// use foox::selection::{RouletteWheelSelection, SelectionStrategy};
///
/// let population: Vec<Genome<char, f64>> = vec![
///     Genome::scored(vec!['a'], 3.0),
///     Genome::scored(vec!['b'], 1.0),
/// ];
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// let parent = RouletteWheelSelection::new().select(&population, &mut rng).unwrap();
/// assert!(population.contains(parent));
/// ```
pub trait SelectionStrategy<A, S>: Debug + Send + Sync
where
    S: Score,
{
    /// Selects one genome from `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - A genome in the population has not been scored
    fn select<'p>(
        &self,
        population: &'p [Genome<A, S>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'p Genome<A, S>>;
}
