//! # Breeding
//!
//! Recombination operators that turn two parent genomes into two offspring.
pub mod crossover;

pub use crossover::{crossover, crossover_at};
