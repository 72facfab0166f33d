//! # Genome
//!
//! A `Genome` is a candidate solution: an ordered, fixed-length chromosome of
//! alleles plus a cached fitness value. The engine never looks inside an
//! allele beyond comparing it for equality, so the same type serves note
//! sequences, letters or anything else.
//!
//! ## Example
//!
//! ```rust
//! use foox::genome::{Fitness, Genome};
//!
//! let mut genome: Genome<i32, f64> = Genome::new(vec![5, 7, 6]);
//! assert_eq!(genome.fitness(), Fitness::Unscored);
//!
//! genome.set_fitness(1.5);
//! assert_eq!(genome.score(), Some(1.5));
//!
//! // Equality ignores fitness.
//! assert_eq!(genome, Genome::new(vec![5, 7, 6]));
//! ```

use crate::{
    breeding,
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// Cached fitness of a genome.
///
/// A genome starts `Unscored` and becomes `Scored` once a fitness function
/// has evaluated it. Mutation that alters an allele resets it to `Unscored`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fitness<S> {
    Unscored,
    Scored(S),
}

impl<S: Copy> Fitness<S> {
    pub fn is_scored(&self) -> bool {
        matches!(self, Fitness::Scored(_))
    }

    /// The score, if one has been computed.
    pub fn score(&self) -> Option<S> {
        match self {
            Fitness::Scored(score) => Some(*score),
            Fitness::Unscored => None,
        }
    }
}

impl<S> Default for Fitness<S> {
    fn default() -> Self {
        Fitness::Unscored
    }
}

/// A candidate solution made of a fixed-length chromosome and a cached score.
///
/// `A` is the allele type and `S` the score type. Two genomes are equal when
/// their chromosomes are equal element-wise; the cached fitness plays no part.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Genome<A, S> {
    chromosome: Vec<A>,
    fitness: Fitness<S>,
}

impl<A, S> Genome<A, S> {
    /// Creates an unscored genome.
    pub fn new(chromosome: Vec<A>) -> Self {
        Self {
            chromosome,
            fitness: Fitness::Unscored,
        }
    }

    /// Creates a genome whose fitness is already known.
    pub fn scored(chromosome: Vec<A>, score: S) -> Self {
        Self {
            chromosome,
            fitness: Fitness::Scored(score),
        }
    }

    /// Number of alleles in the chromosome.
    pub fn len(&self) -> usize {
        self.chromosome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosome.is_empty()
    }

    pub fn chromosome(&self) -> &[A] {
        &self.chromosome
    }

    pub fn into_chromosome(self) -> Vec<A> {
        self.chromosome
    }

    /// Reads the allele at `locus`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::IndexOutOfRange` if `locus >= self.len()`.
    pub fn allele_at(&self, locus: usize) -> Result<&A> {
        self.chromosome
            .get(locus)
            .ok_or(GeneticError::IndexOutOfRange {
                locus,
                length: self.chromosome.len(),
            })
    }

    pub fn set_fitness(&mut self, score: S) {
        self.fitness = Fitness::Scored(score);
    }

    /// Drops the cached score so the genome is evaluated again.
    pub fn invalidate_fitness(&mut self) {
        self.fitness = Fitness::Unscored;
    }
}

impl<A, S: Copy> Genome<A, S> {
    pub fn fitness(&self) -> Fitness<S> {
        self.fitness
    }

    pub fn score(&self) -> Option<S> {
        self.fitness.score()
    }

    pub fn is_scored(&self) -> bool {
        self.fitness.is_scored()
    }
}

impl<A: PartialEq, S> Genome<A, S> {
    /// Puts `allele` at `locus`.
    ///
    /// Returns whether the chromosome changed. A change invalidates the
    /// cached fitness; writing the allele already present leaves it intact.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::IndexOutOfRange` if `locus >= self.len()`.
    pub fn replace_allele(&mut self, locus: usize, allele: A) -> Result<bool> {
        let length = self.chromosome.len();
        let slot = self
            .chromosome
            .get_mut(locus)
            .ok_or(GeneticError::IndexOutOfRange { locus, length })?;

        if *slot == allele {
            return Ok(false);
        }

        *slot = allele;
        self.fitness = Fitness::Unscored;
        Ok(true)
    }
}

impl<A: Clone + PartialEq, S> Genome<A, S> {
    /// Recombines this genome with `other` by single-point crossover.
    ///
    /// See [`breeding::crossover`] for the exact semantics.
    pub fn breed(self, other: Self, rng: &mut RandomNumberGenerator) -> Result<(Self, Self)> {
        breeding::crossover(self, other, rng)
    }
}

impl<A: PartialEq, S> PartialEq for Genome<A, S> {
    fn eq(&self, other: &Self) -> bool {
        self.chromosome == other.chromosome
    }
}

impl<A: Eq, S> Eq for Genome<A, S> {}
