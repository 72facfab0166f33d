pub mod breeding;
pub mod error;
pub mod evolution;
pub mod genome;
pub mod kinds;
pub mod population;
pub mod rng;
pub mod score;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{
    Challenge, EvolutionLauncher, EvolutionOptions, EvolutionResult, Halt, LogLevel,
    MaxGenerations, TargetFitness,
};
pub use genome::{Fitness, Genome};
pub use kinds::{GenomeKind, MutationSettings};
pub use population::Population;
pub use rng::RandomNumberGenerator;
pub use score::Score;
pub use selection::{RouletteWheelSelection, SelectionStrategy};
pub use strategy::{BreedStrategy, ElitistBreedStrategy};
