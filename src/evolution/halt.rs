//! # Halting strategies
//!
//! A halting strategy looks at the freshly ranked population and the number
//! of generations produced so far, and decides whether the run is over.

use crate::{evolution::options::EvolutionOptions, population::Population, score::Score};

/// Decides when an evolutionary run ends.
///
/// `generation` counts the populations produced so far, starting at 1 for
/// the initial population. Any closure with the matching signature is a
/// halting strategy.
pub trait Halt<A, S> {
    fn should_halt(&self, population: &Population<A, S>, generation: usize) -> bool;
}

impl<A, S, F> Halt<A, S> for F
where
    F: Fn(&Population<A, S>, usize) -> bool,
{
    fn should_halt(&self, population: &Population<A, S>, generation: usize) -> bool {
        self(population, generation)
    }
}

/// Halts once `generation` reaches the given count, so a run yields exactly
/// that many populations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxGenerations(pub usize);

impl<A, S> Halt<A, S> for MaxGenerations {
    fn should_halt(&self, _population: &Population<A, S>, generation: usize) -> bool {
        generation >= self.0
    }
}

/// Halts when the fittest genome reaches `target`, or at the generation cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetFitness<S> {
    target: S,
    max_generations: usize,
}

impl<S: Score> TargetFitness<S> {
    pub fn new(target: S, max_generations: usize) -> Self {
        Self {
            target,
            max_generations,
        }
    }

    /// Uses the generation cap from `options`.
    pub fn from_options(target: S, options: &EvolutionOptions) -> Self {
        Self::new(target, options.get_max_generations())
    }

    pub fn target(&self) -> S {
        self.target
    }
}

impl<A, S: Score> Halt<A, S> for TargetFitness<S> {
    fn should_halt(&self, population: &Population<A, S>, generation: usize) -> bool {
        let reached = population
            .best_score()
            .is_some_and(|best| best >= self.target);
        reached || generation >= self.max_generations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::Genome;

    fn population(scores: &[f64]) -> Population<u8, f64> {
        Population::ranked(scores.iter().map(|&s| Genome::scored(vec![0], s)).collect()).unwrap()
    }

    #[test]
    fn test_max_generations() {
        let halt = MaxGenerations(10);
        let population = population(&[1.0]);
        assert!(!halt.should_halt(&population, 9));
        assert!(halt.should_halt(&population, 10));
    }

    #[test]
    fn test_target_fitness_reached() {
        let halt = TargetFitness::new(5.0, 100);
        assert!(halt.should_halt(&population(&[5.0, 3.0, 2.0]), 1));
        assert!(!halt.should_halt(&population(&[4.9, 3.0, 2.0]), 1));
    }

    #[test]
    fn test_target_fitness_generation_cap() {
        let halt = TargetFitness::new(5.0, 100);
        assert!(halt.should_halt(&population(&[0.0]), 100));
    }

    #[test]
    fn test_closure_halt() {
        let halt = |population: &Population<u8, f64>, generation: usize| {
            population.len() > 1 && generation == 3
        };
        assert!(halt.should_halt(&population(&[1.0, 2.0]), 3));
        assert!(!halt.should_halt(&population(&[1.0]), 3));
    }
}
