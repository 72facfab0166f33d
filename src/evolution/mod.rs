pub mod builder;
pub mod challenge;
pub mod halt;
pub mod launcher;
pub mod options;

pub use builder::EvolutionLauncherBuilder;
pub use challenge::Challenge;
pub use halt::{Halt, MaxGenerations, TargetFitness};
pub use launcher::{Evolution, EvolutionLauncher, EvolutionResult};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
