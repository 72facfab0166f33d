//! # Population
//!
//! A ranked, ordered collection of scored genomes. A `Population` is only
//! ever built through [`Population::ranked`], so holding one means every
//! genome carries a valid score and the fittest genome comes first.

use std::cmp::Ordering;
use std::ops::Index;

use crate::{
    error::{GeneticError, Result},
    genome::Genome,
    score::Score,
};

/// A generation of genomes sorted by fitness, fittest first.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Population<A, S> {
    genomes: Vec<Genome<A, S>>,
}

impl<A, S: Score> Population<A, S> {
    /// Sorts `genomes` by descending score.
    ///
    /// The sort is stable: genomes with equal scores keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::UnscoredGenome` if a genome has no score and
    /// `GeneticError::InvalidNumericValue` if a score cannot be ranked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foox::genome::Genome;
    /// use foox::population::Population;
    ///
    /// let population = Population::ranked(vec![
    ///     Genome::scored(vec!['a'], 1),
    ///     Genome::scored(vec!['b'], 3),
    ///     Genome::scored(vec!['c'], 1),
    /// ]).unwrap();
    ///
    /// let order: Vec<char> = population.iter().map(|g| g.chromosome()[0]).collect();
    /// assert_eq!(order, vec!['b', 'a', 'c']);
    /// ```
    pub fn ranked(mut genomes: Vec<Genome<A, S>>) -> Result<Self> {
        for (position, genome) in genomes.iter().enumerate() {
            match genome.score() {
                None => return Err(GeneticError::UnscoredGenome { position }),
                Some(score) if !score.is_valid() => {
                    return Err(GeneticError::InvalidNumericValue(format!(
                        "Unrankable fitness score {:?} at position {}",
                        score, position
                    )))
                }
                Some(_) => {}
            }
        }

        genomes.sort_by(|a, b| {
            b.score()
                .partial_cmp(&a.score())
                .unwrap_or(Ordering::Equal)
        });

        Ok(Self { genomes })
    }

    /// The genome with the highest score.
    pub fn fittest(&self) -> Option<&Genome<A, S>> {
        self.genomes.first()
    }

    /// The highest score in the population.
    pub fn best_score(&self) -> Option<S> {
        self.fittest().and_then(Genome::score)
    }
}

impl<A, S> Population<A, S> {
    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    pub fn genomes(&self) -> &[Genome<A, S>] {
        &self.genomes
    }

    pub fn into_genomes(self) -> Vec<Genome<A, S>> {
        self.genomes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Genome<A, S>> {
        self.genomes.iter()
    }
}

impl<A, S> Index<usize> for Population<A, S> {
    type Output = Genome<A, S>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.genomes[index]
    }
}

impl<A, S> IntoIterator for Population<A, S> {
    type Item = Genome<A, S>;
    type IntoIter = std::vec::IntoIter<Genome<A, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.genomes.into_iter()
    }
}

impl<'a, A, S> IntoIterator for &'a Population<A, S> {
    type Item = &'a Genome<A, S>;
    type IntoIter = std::slice::Iter<'a, Genome<A, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.genomes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_sorts_descending() {
        let population = Population::ranked(vec![
            Genome::scored(vec![1], 1.0),
            Genome::scored(vec![2], 2.0),
            Genome::scored(vec![3], 3.0),
        ])
        .unwrap();

        let scores: Vec<f64> = population.iter().filter_map(Genome::score).collect();
        assert_eq!(scores, vec![3.0, 2.0, 1.0]);
        assert_eq!(population.fittest().unwrap().chromosome(), &[3]);
        assert_eq!(population.best_score(), Some(3.0));
    }

    #[test]
    fn test_ranked_is_stable() {
        let population = Population::ranked(vec![
            Genome::scored(vec!['a'], 0),
            Genome::scored(vec!['b'], 5),
            Genome::scored(vec!['c'], 0),
            Genome::scored(vec!['d'], 5),
        ])
        .unwrap();

        let order: Vec<char> = population.iter().map(|g| g.chromosome()[0]).collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn test_ranked_rejects_unscored() {
        let result = Population::<u8, f64>::ranked(vec![
            Genome::scored(vec![1], 1.0),
            Genome::new(vec![2]),
        ]);
        assert_eq!(result.unwrap_err(), GeneticError::UnscoredGenome { position: 1 });
    }

    #[test]
    fn test_ranked_rejects_nan() {
        let result = Population::<u8, f64>::ranked(vec![Genome::scored(vec![1], f64::NAN)]);
        assert!(matches!(result, Err(GeneticError::InvalidNumericValue(_))));
    }

    #[test]
    fn test_empty_population() {
        let population = Population::<u8, f64>::ranked(Vec::new()).unwrap();
        assert!(population.is_empty());
        assert!(population.fittest().is_none());
    }
}
