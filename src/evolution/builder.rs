use std::fmt::Debug;

use crate::{
    error::{GeneticError, Result},
    score::Score,
    strategy::BreedStrategy,
};

use super::{Challenge, EvolutionLauncher, Halt};

/// Assembles an [`EvolutionLauncher`] piece by piece.
///
/// All three parts are required; `build` reports the first one missing.
pub struct EvolutionLauncherBuilder<A, S, Strategy, Chall, H> {
    breed_strategy: Option<Strategy>,
    challenge: Option<Chall>,
    halt: Option<H>,
    _marker: std::marker::PhantomData<fn() -> (A, S)>,
}

impl<A, S, Strategy, Chall, H> EvolutionLauncherBuilder<A, S, Strategy, Chall, H>
where
    A: Clone + Debug,
    S: Score,
    Strategy: BreedStrategy<A, S>,
    Chall: Challenge<A, S>,
    H: Halt<A, S>,
{
    pub fn new() -> Self {
        Self {
            breed_strategy: None,
            challenge: None,
            halt: None,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn with_breed_strategy(mut self, breed_strategy: Strategy) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: Chall) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn with_halt(mut self, halt: H) -> Self {
        self.halt = Some(halt);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<A, S, Strategy, Chall, H>> {
        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            GeneticError::Configuration("Breeding strategy not specified".to_string())
        })?;

        let challenge = self
            .challenge
            .ok_or_else(|| GeneticError::Configuration("Challenge not specified".to_string()))?;

        let halt = self
            .halt
            .ok_or_else(|| GeneticError::Configuration("Halting strategy not specified".to_string()))?;

        Ok(EvolutionLauncher::new(breed_strategy, challenge, halt))
    }
}

impl<A, S, Strategy, Chall, H> Default for EvolutionLauncherBuilder<A, S, Strategy, Chall, H>
where
    A: Clone + Debug,
    S: Score,
    Strategy: BreedStrategy<A, S>,
    Chall: Challenge<A, S>,
    H: Halt<A, S>,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        evolution::{EvolutionOptions, MaxGenerations},
        genome::Genome,
        kinds::{MutationSettings, SymbolKind},
        rng::RandomNumberGenerator,
        strategy::ElitistBreedStrategy,
    };

    type Strategy = ElitistBreedStrategy<char, SymbolKind<char>>;
    type Builder = EvolutionLauncherBuilder<char, usize, Strategy, fn(&Genome<char, usize>) -> usize, MaxGenerations>;

    fn vowels(genome: &Genome<char, usize>) -> usize {
        genome
            .chromosome()
            .iter()
            .filter(|c| "aeiou".contains(**c))
            .count()
    }

    fn strategy() -> Strategy {
        ElitistBreedStrategy::new(
            SymbolKind::lowercase_ascii(),
            vec!['z'; 4],
            MutationSettings::default(),
        )
    }

    #[test]
    fn test_build_complete() {
        let launcher = Builder::new()
            .with_breed_strategy(strategy())
            .with_challenge(vowels)
            .with_halt(MaxGenerations(3))
            .build()
            .unwrap();

        let initial = vec![Genome::new(vec!['b'; 4]), Genome::new(vec!['a'; 4])];
        let mut rng = RandomNumberGenerator::from_seed(8);
        let result = launcher
            .run(&EvolutionOptions::builder().population_size(2).build(), initial, &mut rng)
            .unwrap();

        assert_eq!(result.generations, 3);
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_missing_breed_strategy() {
        let result = Builder::default()
            .with_challenge(vowels)
            .with_halt(MaxGenerations(3))
            .build();

        match result {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Breeding strategy")),
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_missing_challenge() {
        let result = Builder::new()
            .with_breed_strategy(strategy())
            .with_halt(MaxGenerations(3))
            .build();

        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_missing_halt() {
        let result = Builder::new()
            .with_breed_strategy(strategy())
            .with_challenge(vowels)
            .build();

        match result {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Halting strategy")),
            _ => panic!("Expected Configuration error"),
        }
    }
}
