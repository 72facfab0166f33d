use tracing::trace;

use crate::error::{GeneticError, Result};
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;
use crate::score::Score;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) lays the
/// population out as contiguous arcs on a wheel, each arc as wide as the genome's
/// score weight, and spins it once. Negative scores have no arc.
///
/// When every weight is zero the wheel has no size; selection then falls back to
/// a uniform choice over the whole population so that breeding can still proceed.
///
/// # Examples
///
/// ```
/// use foox::genome::Genome;
/// use foox::rng::RandomNumberGenerator;
/// use foox::selection::roulette::RouletteWheelSelection;
/// use foox::error::Result;
///
/// fn main() -> Result<()> {
///     let population: Vec<Genome<u8, f64>> = vec![
///         Genome::scored(vec![1], 0.5),
///         Genome::scored(vec![2], 0.8),
///         Genome::scored(vec![3], 0.0),
///     ];
///     let mut rng = RandomNumberGenerator::new();
///
///     let index = RouletteWheelSelection::new().select_index(&population, &mut rng)?;
///
///     // A zero-weight genome is never picked while others have weight.
///     assert!(index < 2);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    /// Creates a new RouletteWheelSelection strategy.
    pub fn new() -> Self {
        Self
    }

    /// Spins the wheel and returns the position of the selected genome.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` for an empty population,
    /// `GeneticError::UnscoredGenome` if any genome lacks a score and
    /// `GeneticError::InvalidNumericValue` if the weights do not sum to a
    /// finite value.
    pub fn select_index<A, S: Score>(
        &self,
        population: &[Genome<A, S>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let weights = Self::calculate_weights(population)?;
        let total: f64 = weights.iter().sum();

        if !total.is_finite() {
            return Err(GeneticError::InvalidNumericValue(format!(
                "Roulette wheel total weight is not finite: {}",
                total
            )));
        }

        if total == 0.0 {
            trace!(
                population = population.len(),
                "no genome has positive fitness, selecting uniformly"
            );
            return Ok(rng.gen_index(population.len()));
        }

        Ok(Self::spin(&weights, total, rng))
    }

    /// Collects the wheel weight of every genome.
    fn calculate_weights<A, S: Score>(population: &[Genome<A, S>]) -> Result<Vec<f64>> {
        population
            .iter()
            .enumerate()
            .map(|(position, genome)| {
                genome
                    .score()
                    .map(|score| score.weight())
                    .ok_or(GeneticError::UnscoredGenome { position })
            })
            .collect()
    }

    /// Returns the first position whose running sum strictly exceeds a draw in `[0, total)`.
    fn spin(weights: &[f64], total: f64, rng: &mut RandomNumberGenerator) -> usize {
        let r = rng.gen_below(total);

        let mut cumulative = 0.0;
        for (i, &weight) in weights.iter().enumerate() {
            cumulative += weight;
            if cumulative > r {
                return i;
            }
        }

        // Rounding can leave the running sum a hair below `r`.
        weights
            .iter()
            .rposition(|&weight| weight > 0.0)
            .unwrap_or(weights.len() - 1)
    }
}

impl<A, S> SelectionStrategy<A, S> for RouletteWheelSelection
where
    S: Score,
{
    fn select<'p>(
        &self,
        population: &'p [Genome<A, S>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'p Genome<A, S>> {
        let index = self.select_index(population, rng)?;
        Ok(&population[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(scores: &[f64]) -> Vec<Genome<usize, f64>> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| Genome::scored(vec![i], score))
            .collect()
    }

    #[test]
    fn test_roulette_wheel_selection() {
        let population = population(&[0.5, 0.8, 0.3, 0.9, 0.1]);
        let mut rng = RandomNumberGenerator::from_seed(42); // Use fixed seed for deterministic testing

        let selection = RouletteWheelSelection::new();
        for _ in 0..100 {
            let selected = selection.select(&population, &mut rng).unwrap();
            assert!(population.contains(selected));
        }
    }

    #[test]
    fn test_roulette_wheel_favours_fitter_genomes() {
        let population = population(&[1.0, 9.0]);
        let mut rng = RandomNumberGenerator::from_seed(7);

        let selection = RouletteWheelSelection::new();
        let mut counts = [0usize; 2];
        for _ in 0..10_000 {
            counts[selection.select_index(&population, &mut rng).unwrap()] += 1;
        }

        // Expected split is 1000 / 9000.
        assert!(counts[1] > counts[0] * 4);
    }

    #[test]
    fn test_zero_weight_genomes_are_never_chosen() {
        let population = population(&[0.0, 2.0, 0.0, -1.0]);
        let mut rng = RandomNumberGenerator::from_seed(3);

        let selection = RouletteWheelSelection::new();
        for _ in 0..1000 {
            assert_eq!(selection.select_index(&population, &mut rng).unwrap(), 1);
        }
    }

    #[test]
    fn test_roulette_wheel_selection_zero_fitness() {
        let population = population(&[0.0, 0.0, 0.0]);
        let mut rng = RandomNumberGenerator::from_seed(5);

        let selection = RouletteWheelSelection::new();
        let mut seen = [false; 3];
        for _ in 0..300 {
            seen[selection.select_index(&population, &mut rng).unwrap()] = true;
        }

        // Uniform fallback reaches every genome.
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_roulette_wheel_selection_empty_population() {
        let population: Vec<Genome<usize, f64>> = Vec::new();
        let mut rng = RandomNumberGenerator::new();

        let selection = RouletteWheelSelection::new();
        let result = selection.select(&population, &mut rng);

        assert_eq!(result.unwrap_err(), GeneticError::EmptyPopulation);
    }

    #[test]
    fn test_roulette_wheel_selection_unscored_genome() {
        let mut population = population(&[0.5, 0.8]);
        population.push(Genome::new(vec![2]));
        let mut rng = RandomNumberGenerator::new();

        let selection = RouletteWheelSelection::new();
        let result = selection.select(&population, &mut rng);

        assert_eq!(
            result.unwrap_err(),
            GeneticError::UnscoredGenome { position: 2 }
        );
    }

    #[test]
    fn test_integer_scores() {
        let population: Vec<Genome<char, u32>> = vec![
            Genome::scored(vec!['x'], 0),
            Genome::scored(vec!['y'], 3),
        ];
        let mut rng = RandomNumberGenerator::from_seed(13);

        let selected = RouletteWheelSelection::new()
            .select(&population, &mut rng)
            .unwrap();
        assert_eq!(selected.chromosome(), &['y']);
    }

    #[test]
    fn test_spin_walks_cumulative_sum() {
        let weights = [0.2, 0.3, 0.5];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let idx = RouletteWheelSelection::spin(&weights, 1.0, &mut rng);
        assert!(idx < weights.len());
    }
}
