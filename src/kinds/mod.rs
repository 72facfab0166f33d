//! # GenomeKind Trait
//!
//! A genome kind supplies the domain rules for one family of candidate
//! solutions: which alleles may sit at each locus, given the context the
//! candidate is judged against. From those rules the trait derives random
//! seeding and per-locus mutation, so a new kind usually implements only
//! `chromosome_length` and `legal_alleles`.
//!
//! ## Example
//!
//! ```rust
//! use foox::error::Result;
//! use foox::genome::Genome;
//! use foox::kinds::{GenomeKind, MutationSettings};
//! use foox::rng::RandomNumberGenerator;
//!
//! /// Bits that must differ from the reference bit at the same locus.
//! #[derive(Debug)]
//! struct Complement;
//!
//! impl GenomeKind<bool> for Complement {
//!     type Context = Vec<bool>;
//!
//!     fn chromosome_length(&self, context: &Vec<bool>) -> usize {
//!         context.len()
//!     }
//!
//!     fn legal_alleles(&self, locus: usize, _range: Option<u32>, context: &Vec<bool>) -> Result<Vec<bool>> {
//!         Ok(vec![!context[locus]])
//!     }
//! }
//!
//! let mut rng = RandomNumberGenerator::from_seed(0);
//! let context = vec![true, false, true];
//! let mut genome: Genome<bool, f64> = Genome::new(vec![true, true, true]);
//! let settings = MutationSettings::new(1, 1.0).unwrap();
//!
//! Complement.mutate(&mut genome, &settings, &context, &mut rng).unwrap();
//! assert_eq!(genome.chromosome(), &[false, true, false]);
//! ```
pub mod interval;
pub mod symbol;

use std::fmt::Debug;

use crate::{
    error::{GeneticError, Result},
    genome::Genome,
    rng::RandomNumberGenerator,
};

pub use interval::{IntervalKind, CONSONANT_INTERVALS};
pub use symbol::SymbolKind;

/// Mutation parameters: how far an allele may move and how often.
///
/// `range` bounds the magnitude of a replacement allele in whatever unit the
/// genome kind uses. `rate` is the independent per-locus mutation probability.
///
/// Deserializing goes through [`MutationSettings::new`], so a rate outside
/// `[0, 1]` is rejected there too.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMutationSettings"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationSettings {
    range: u32,
    rate: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMutationSettings {
    range: u32,
    rate: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMutationSettings> for MutationSettings {
    type Error = GeneticError;

    fn try_from(raw: RawMutationSettings) -> Result<Self> {
        Self::new(raw.range, raw.rate)
    }
}

impl MutationSettings {
    /// Creates validated mutation settings.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `rate` is not within `[0, 1]`.
    pub fn new(range: u32, rate: f64) -> Result<Self> {
        let settings = Self { range, rate };
        settings.validate()?;
        Ok(settings)
    }

    pub fn range(&self) -> u32 {
        self.range
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must lie within [0, 1], got {}",
                self.rate
            )));
        }
        Ok(())
    }
}

impl Default for MutationSettings {
    fn default() -> Self {
        Self {
            range: 9,
            rate: 0.4,
        }
    }
}

/// Trait for the domain rules of a family of genomes.
///
/// Implementors are selected at construction time and passed by value into
/// breeding strategies; the engine never inspects a genome to find its kind.
pub trait GenomeKind<A>: Debug + Send + Sync
where
    A: Clone + PartialEq,
{
    /// The reference data a candidate is built and judged against.
    type Context: Debug + Send + Sync;

    /// Number of alleles in every genome of this kind for `context`.
    fn chromosome_length(&self, context: &Self::Context) -> usize;

    /// Alleles that may occupy `locus`.
    ///
    /// `range` is the mutation range when called during mutation and `None`
    /// when seeding a fresh genome.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::IndexOutOfRange` if `locus` has no counterpart in
    /// `context`.
    fn legal_alleles(
        &self,
        locus: usize,
        range: Option<u32>,
        context: &Self::Context,
    ) -> Result<Vec<A>>;

    /// Builds an unscored genome with a uniformly drawn legal allele at each locus.
    fn random_genome<S>(
        &self,
        context: &Self::Context,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Genome<A, S>> {
        let chromosome = (0..self.chromosome_length(context))
            .map(|locus| {
                let candidates = self.legal_alleles(locus, None, context)?;
                rng.choose(&candidates)
                    .cloned()
                    .ok_or(GeneticError::NoLegalAllele { locus })
            })
            .collect::<Result<Vec<A>>>()?;

        Ok(Genome::new(chromosome))
    }

    /// Builds `size` random genomes.
    fn create_population<S>(
        &self,
        size: usize,
        context: &Self::Context,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome<A, S>>> {
        (0..size)
            .map(|_| self.random_genome(context, rng))
            .collect()
    }

    /// Mutates `genome` in place.
    ///
    /// Every locus is replaced, with independent probability
    /// `settings.rate()`, by a legal allele drawn within `settings.range()`.
    /// Any actual change resets the genome's cached fitness. Returns whether
    /// the chromosome changed.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::NoLegalAllele` if a locus chosen for mutation has
    /// no legal allele within range, or the error of `legal_alleles`.
    fn mutate<S>(
        &self,
        genome: &mut Genome<A, S>,
        settings: &MutationSettings,
        context: &Self::Context,
        rng: &mut RandomNumberGenerator,
    ) -> Result<bool> {
        let mut altered = false;

        for locus in 0..genome.len() {
            if !rng.gen_bool(settings.rate()) {
                continue;
            }

            let candidates = self.legal_alleles(locus, Some(settings.range()), context)?;
            let allele = rng
                .choose(&candidates)
                .cloned()
                .ok_or(GeneticError::NoLegalAllele { locus })?;

            altered |= genome.replace_allele(locus, allele)?;
        }

        Ok(altered)
    }
}
