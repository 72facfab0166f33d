use std::{fmt::Debug, iter::FusedIterator, marker::PhantomData, mem};

use tracing::{debug, error, info, trace};

use super::{
    challenge::Challenge,
    halt::Halt,
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    error::{GeneticError, OptionExt, Result},
    genome::Genome,
    population::Population,
    rng::RandomNumberGenerator,
    score::Score,
    strategy::BreedStrategy,
};

/// Represents the result of an evolution: the fittest genome of the last
/// generation, its score, and how many generations were produced.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<A, S> {
    /// The fittest genome of the final population.
    pub genome: Genome<A, S>,
    /// The fitness score of that genome.
    pub score: S,
    /// Number of populations produced, the initial one included.
    pub generations: usize,
}

/// Manages the evolution process using a breeding strategy, a challenge and a
/// halting strategy.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<A, S, Strategy, Chall, H> {
    strategy: Strategy,
    challenge: Chall,
    halt: H,
    _marker: PhantomData<fn() -> (A, S)>,
}

impl<A, S, Strategy, Chall, H> EvolutionLauncher<A, S, Strategy, Chall, H>
where
    A: Clone + Debug,
    S: Score,
    Strategy: BreedStrategy<A, S>,
    Chall: Challenge<A, S>,
    H: Halt<A, S>,
{
    /// Creates a new `EvolutionLauncher` instance.
    ///
    /// # Arguments
    ///
    /// * `strategy` - Produces each next generation from the ranked current one.
    /// * `challenge` - The fitness function used to score genomes.
    /// * `halt` - Decides after each ranked generation whether the run is over.
    pub fn new(strategy: Strategy, challenge: Chall, halt: H) -> Self {
        Self {
            strategy,
            challenge,
            halt,
            _marker: PhantomData,
        }
    }

    /// Starts an evolution from `initial`.
    ///
    /// Returns a lazy, finite sequence of ranked populations. The first item is
    /// the scored and ranked initial population; every later item is produced
    /// only when requested, after the halting strategy has declined to stop.
    /// Re-running with the same inputs and an identically seeded `rng`
    /// reproduces the same sequence.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the options are invalid or if a
    /// non-empty `initial` population does not hold exactly
    /// `options.get_population_size()` genomes. Errors raised while the
    /// sequence is consumed are yielded as its final item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foox::evolution::{EvolutionLauncher, EvolutionOptions, MaxGenerations};
    /// use foox::genome::Genome;
    /// use foox::rng::RandomNumberGenerator;
    ///
    /// let generate = |ranked: &[Genome<i32, i32>], _: &mut RandomNumberGenerator| Ok(ranked.to_vec());
    /// let fitness = |genome: &Genome<i32, i32>| genome.chromosome()[0];
    /// let launcher = EvolutionLauncher::new(generate, fitness, MaxGenerations(10));
    ///
    /// let initial = vec![Genome::new(vec![1]), Genome::new(vec![2]), Genome::new(vec![3])];
    /// let options = EvolutionOptions::builder().population_size(3).build();
    /// let mut rng = RandomNumberGenerator::from_seed(0);
    /// let populations: Vec<_> = launcher
    ///     .evolve(&options, initial, &mut rng)
    ///     .unwrap()
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    ///
    /// assert_eq!(populations.len(), 10);
    /// ```
    pub fn evolve<'a>(
        &'a self,
        options: &EvolutionOptions,
        initial: Vec<Genome<A, S>>,
        rng: &'a mut RandomNumberGenerator,
    ) -> Result<Evolution<'a, A, S, Strategy, Chall, H>> {
        options.validate()?;

        if !initial.is_empty() && initial.len() != options.get_population_size() {
            return Err(GeneticError::Configuration(format!(
                "Initial population has {} genomes, options expect {}",
                initial.len(),
                options.get_population_size()
            )));
        }

        Ok(Evolution {
            launcher: self,
            rng,
            log_level: options.get_log_level(),
            generation: 0,
            phase: Phase::Seed(initial),
        })
    }

    /// Runs an evolution to completion.
    ///
    /// # Returns
    ///
    /// The fittest genome of the last population, its score and the number of
    /// generations produced.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid
    /// - The initial population is empty or does not match the configured size
    /// - Scoring, breeding or ranking fails in any generation
    pub fn run(
        &self,
        options: &EvolutionOptions,
        initial: Vec<Genome<A, S>>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<A, S>> {
        let mut evolution = self.evolve(options, initial, rng)?;

        let mut last = None;
        for population in &mut evolution {
            last = Some(population?);
        }
        let generations = evolution.generation();

        let genome = last
            .and_then(|population| population.into_genomes().into_iter().next())
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let score = genome
            .score()
            .ok_or_else_genetic(|| GeneticError::UnscoredGenome { position: 0 })?;

        Ok(EvolutionResult {
            genome,
            score,
            generations,
        })
    }
}

enum Phase<A, S> {
    Seed(Vec<Genome<A, S>>),
    Ranked(Population<A, S>),
    Terminal,
}

/// The lazy sequence of generations returned by [`EvolutionLauncher::evolve`].
///
/// Each item is a snapshot owned by the caller; the engine keeps its own copy
/// to breed from and never touches a population once it has been yielded.
/// After the halting strategy fires, or after an error has been yielded, the
/// iterator only returns `None`.
pub struct Evolution<'a, A, S, Strategy, Chall, H> {
    launcher: &'a EvolutionLauncher<A, S, Strategy, Chall, H>,
    rng: &'a mut RandomNumberGenerator,
    log_level: LogLevel,
    generation: usize,
    phase: Phase<A, S>,
}

impl<A, S, Strategy, Chall, H> Evolution<'_, A, S, Strategy, Chall, H>
where
    A: Clone + Debug,
    S: Score,
    Strategy: BreedStrategy<A, S>,
    Chall: Challenge<A, S>,
    H: Halt<A, S>,
{
    /// Number of populations produced so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Scores every genome lacking a cached score, then ranks the lot.
    fn score_and_rank(&self, mut genomes: Vec<Genome<A, S>>) -> Result<Population<A, S>> {
        let mut evaluated = 0usize;
        for genome in genomes.iter_mut().filter(|genome| !genome.is_scored()) {
            let score = self.launcher.challenge.score(genome);
            genome.set_fitness(score);
            evaluated += 1;
        }

        trace!(
            generation = self.generation,
            evaluated,
            cached = genomes.len() - evaluated,
            "scored generation"
        );

        Population::ranked(genomes)
    }

    fn breed_next(&mut self, current: &Population<A, S>) -> Result<Population<A, S>> {
        let bred = self
            .launcher
            .strategy
            .breed(current.genomes(), &mut *self.rng)?;

        if bred.len() != current.len() {
            error!(
                generation = self.generation,
                expected = current.len(),
                actual = bred.len(),
                "breeding strategy changed the population size"
            );
            return Err(GeneticError::PopulationSizeChanged {
                expected: current.len(),
                actual: bred.len(),
            });
        }

        self.score_and_rank(bred)
    }

    /// Records `ranked` as the current generation and hands out a snapshot.
    fn emit(&mut self, ranked: Result<Population<A, S>>) -> Result<Population<A, S>> {
        let population = ranked.map_err(|e| {
            debug!(generation = self.generation, error = %e, "evolution stopped on error");
            e
        })?;

        match self.log_level {
            LogLevel::None => {}
            LogLevel::Minimal => {
                info!(generation = self.generation, best = ?population.best_score(), "generation ranked");
            }
            LogLevel::Verbose => {
                info!(generation = self.generation, best = ?population.best_score(), "generation ranked");
                for genome in &population {
                    debug!(
                        generation = self.generation,
                        chromosome = ?genome.chromosome(),
                        score = ?genome.score(),
                        "ranked genome"
                    );
                }
            }
        }

        self.phase = Phase::Ranked(population.clone());
        Ok(population)
    }
}

impl<A, S, Strategy, Chall, H> Iterator for Evolution<'_, A, S, Strategy, Chall, H>
where
    A: Clone + Debug,
    S: Score,
    Strategy: BreedStrategy<A, S>,
    Chall: Challenge<A, S>,
    H: Halt<A, S>,
{
    type Item = Result<Population<A, S>>;

    fn next(&mut self) -> Option<Self::Item> {
        match mem::replace(&mut self.phase, Phase::Terminal) {
            Phase::Seed(genomes) => {
                self.generation = 1;
                if genomes.is_empty() {
                    return Some(Err(GeneticError::EmptyPopulation));
                }
                let ranked = self.score_and_rank(genomes);
                Some(self.emit(ranked))
            }
            Phase::Ranked(current) => {
                if self.launcher.halt.should_halt(&current, self.generation) {
                    debug!(
                        generation = self.generation,
                        best = ?current.best_score(),
                        "halting condition met"
                    );
                    return None;
                }

                self.generation += 1;
                let ranked = self.breed_next(&current);
                Some(self.emit(ranked))
            }
            Phase::Terminal => None,
        }
    }
}

impl<A, S, Strategy, Chall, H> FusedIterator for Evolution<'_, A, S, Strategy, Chall, H>
where
    A: Clone + Debug,
    S: Score,
    Strategy: BreedStrategy<A, S>,
    Chall: Challenge<A, S>,
    H: Halt<A, S>,
{
}
