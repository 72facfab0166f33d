//! # ElitistBreedStrategy
//!
//! The fitter half of a ranked population survives unchanged. The other half
//! is refilled with offspring of parents drawn from the whole population,
//! recombined by single-point crossover and then mutated according to the
//! genome kind's rules.
use std::marker::PhantomData;

use crate::{
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    genome::Genome,
    kinds::{GenomeKind, MutationSettings},
    rng::RandomNumberGenerator,
    score::Score,
    selection::{RouletteWheelSelection, SelectionStrategy},
};

use super::BreedStrategy;

/// # ElitistBreedStrategy
///
/// For a ranked population of size `N`:
///
/// 1. the top `N / 2` genomes are carried over as they are, scores included;
/// 2. pairs of parents are selected (with replacement, from the full
///    population) and crossed over until at least `N - N / 2` offspring exist;
/// 3. surplus offspring from the last pair are dropped;
/// 4. every offspring is mutated against the strategy's context.
///
/// Setting `mutate_elite` also mutates the carried-over genomes, which trades
/// the guarantee that the best score never decreases for more exploration.
///
/// ## Example
///
/// ```rust
/// use foox::genome::Genome;
/// use foox::kinds::{IntervalKind, MutationSettings};
/// use foox::rng::RandomNumberGenerator;
/// use foox::strategy::{BreedStrategy, ElitistBreedStrategy};
///
/// let cantus_firmus = vec![5, 7, 6, 5];
/// let strategy: ElitistBreedStrategy<i32, IntervalKind> = ElitistBreedStrategy::new(
///     IntervalKind::consonant(),
///     cantus_firmus,
///     MutationSettings::new(7, 0.2).unwrap(),
/// );
///
/// let ranked: Vec<Genome<i32, f64>> = vec![
///     Genome::scored(vec![12, 14, 13, 12], 3.0),
///     Genome::scored(vec![7, 9, 8, 7], 1.0),
///     Genome::scored(vec![9, 11, 10, 9], 0.5),
/// ];
/// let mut rng = RandomNumberGenerator::from_seed(4);
///
/// let next = strategy.breed(&ranked, &mut rng).unwrap();
/// assert_eq!(next.len(), 3);
/// assert_eq!(next[0], ranked[0]);
/// ```
#[derive(Debug)]
pub struct ElitistBreedStrategy<A, K, Sel = RouletteWheelSelection>
where
    A: Clone + PartialEq,
    K: GenomeKind<A>,
{
    kind: K,
    context: K::Context,
    settings: MutationSettings,
    selection: Sel,
    mutate_elite: bool,
    _marker: PhantomData<fn() -> A>,
}

impl<A, K> ElitistBreedStrategy<A, K, RouletteWheelSelection>
where
    A: Clone + PartialEq,
    K: GenomeKind<A>,
{
    /// Creates a strategy using roulette wheel selection.
    pub fn new(kind: K, context: K::Context, settings: MutationSettings) -> Self {
        Self {
            kind,
            context,
            settings,
            selection: RouletteWheelSelection::new(),
            mutate_elite: false,
            _marker: PhantomData,
        }
    }

    /// Creates a strategy whose mutation settings come from `options`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the options hold an invalid mutation rate.
    pub fn from_options(kind: K, context: K::Context, options: &EvolutionOptions) -> Result<Self> {
        Ok(Self::new(kind, context, options.mutation_settings()?))
    }
}

impl<A, K, Sel> ElitistBreedStrategy<A, K, Sel>
where
    A: Clone + PartialEq,
    K: GenomeKind<A>,
{
    /// Replaces the parent selection strategy.
    pub fn with_selection<Other>(self, selection: Other) -> ElitistBreedStrategy<A, K, Other> {
        ElitistBreedStrategy {
            kind: self.kind,
            context: self.context,
            settings: self.settings,
            selection,
            mutate_elite: self.mutate_elite,
            _marker: PhantomData,
        }
    }

    /// Whether the carried-over elite is mutated along with the offspring.
    pub fn with_elite_mutation(mut self, mutate_elite: bool) -> Self {
        self.mutate_elite = mutate_elite;
        self
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn context(&self) -> &K::Context {
        &self.context
    }

    pub fn settings(&self) -> &MutationSettings {
        &self.settings
    }
}

impl<A, S, K, Sel> BreedStrategy<A, S> for ElitistBreedStrategy<A, K, Sel>
where
    A: Clone + PartialEq,
    S: Score,
    K: GenomeKind<A>,
    Sel: SelectionStrategy<A, S>,
{
    fn breed(
        &self,
        ranked: &[Genome<A, S>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome<A, S>>> {
        if ranked.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let elite_count = ranked.len() / 2;
        let needed = ranked.len() - elite_count;

        let mut offspring = Vec::with_capacity(needed + 1);
        while offspring.len() < needed {
            let mum = self.selection.select(ranked, rng)?.clone();
            let dad = self.selection.select(ranked, rng)?.clone();
            let (first, second) = mum.breed(dad, rng)?;
            offspring.push(first);
            offspring.push(second);
        }
        offspring.truncate(needed);

        for child in &mut offspring {
            self.kind
                .mutate(child, &self.settings, &self.context, rng)?;
        }

        let mut next_generation = ranked[..elite_count].to_vec();
        if self.mutate_elite {
            for genome in &mut next_generation {
                self.kind
                    .mutate(genome, &self.settings, &self.context, rng)?;
            }
        }
        next_generation.extend(offspring);

        Ok(next_generation)
    }
}
