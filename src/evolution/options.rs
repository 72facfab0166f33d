//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration options for an evolutionary
//! run: how many genomes to seed, the generation cap used by the provided halting
//! strategies, the mutation parameters used by the provided breeding strategy, and the
//! logging level of the evolution loop.
//!
//! ## Example
//!
//! ```rust
//! use foox::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(200, LogLevel::Minimal, 50, 7, 0.2);
//! assert!(custom_options.validate().is_ok());
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 1000);
//! ```
//!
//! ## Structs
//!
//! ### `EvolutionOptions`
//!
//! #### Fields
//!
//! - `max_generations`: The most generations a run may produce.
//! - `log_level`: How much the evolution loop reports, see `LogLevel`.
//! - `population_size`: The number of genomes in every generation.
//! - `mutation_range`: The largest allele change a mutation may make.
//! - `mutation_rate`: The per-locus mutation probability.
//!
//! ### `LogLevel`
//!
//! - `Verbose`: One event per generation plus one per ranked genome.
//! - `Minimal`: One event per generation.
//! - `None`: No per-generation events.

use crate::{
    error::{GeneticError, Result},
    kinds::MutationSettings,
};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    max_generations: usize,
    log_level: LogLevel,
    population_size: usize,
    mutation_range: u32,
    mutation_rate: f64,
}

impl EvolutionOptions {
    pub fn new(
        max_generations: usize,
        log_level: LogLevel,
        population_size: usize,
        mutation_range: u32,
        mutation_rate: f64,
    ) -> Self {
        Self {
            max_generations,
            log_level,
            population_size,
            mutation_range,
            mutation_rate,
        }
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_mutation_range(&self) -> u32 {
        self.mutation_range
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Sets the generation cap.
    pub fn set_max_generations(&mut self, max_generations: usize) {
        self.max_generations = max_generations;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the mutation range.
    pub fn set_mutation_range(&mut self, mutation_range: u32) {
        self.mutation_range = mutation_range;
    }

    /// Sets the mutation rate.
    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    /// The mutation range and rate as validated `MutationSettings`.
    pub fn mutation_settings(&self) -> Result<MutationSettings> {
        MutationSettings::new(self.mutation_range, self.mutation_rate)
    }

    /// Checks that the options describe a runnable evolution.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the population size or the
    /// generation cap is zero, or if the mutation rate lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.max_generations == 0 {
            return Err(GeneticError::Configuration(
                "Maximum number of generations cannot be zero".to_string(),
            ));
        }

        self.mutation_settings().map(|_| ())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use foox::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .max_generations(200)
    ///     .log_level(LogLevel::Minimal)
    ///     .population_size(50)
    ///     .mutation_range(7)
    ///     .mutation_rate(0.1)
    ///     .build();
    ///
    /// assert_eq!(options.get_max_generations(), 200);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        let mutation = MutationSettings::default();
        Self {
            max_generations: 100,
            log_level: LogLevel::None,
            population_size: 1000,
            mutation_range: mutation.range(),
            mutation_rate: mutation.rate(),
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    max_generations: Option<usize>,
    log_level: Option<LogLevel>,
    population_size: Option<usize>,
    mutation_range: Option<u32>,
    mutation_rate: Option<f64>,
}

impl EvolutionOptionsBuilder {
    /// Sets the generation cap.
    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the mutation range.
    pub fn mutation_range(mut self, value: u32) -> Self {
        self.mutation_range = Some(value);
        self
    }

    /// Sets the mutation rate.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            mutation_range: self.mutation_range.unwrap_or(defaults.mutation_range),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
        }
    }
}
