//! # IntervalKind
//!
//! Genomes whose alleles are notes placed a fixed interval above a reference
//! melody (the cantus firmus). The allele at each locus is always
//! `context[locus] + interval` for one of the kind's intervals, so mutation
//! can never produce a note that is not an allowed interval away from the
//! reference note beneath it.

use crate::error::{GeneticError, Result};

use super::GenomeKind;

/// Consonant intervals above the cantus firmus, in scale steps.
pub const CONSONANT_INTERVALS: [i32; 6] = [2, 4, 5, 7, 9, 11];

/// Genome kind for melodies built from intervals above a reference melody.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalKind {
    intervals: Vec<i32>,
    /// Exclusive upper bound on produced notes.
    ceiling: Option<i32>,
}

impl IntervalKind {
    /// Creates a kind drawing from `intervals`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `intervals` is empty.
    pub fn new(intervals: Vec<i32>) -> Result<Self> {
        if intervals.is_empty() {
            return Err(GeneticError::Configuration(
                "Interval kind needs at least one interval".to_string(),
            ));
        }
        Ok(Self {
            intervals,
            ceiling: None,
        })
    }

    /// Creates a kind drawing from [`CONSONANT_INTERVALS`].
    pub fn consonant() -> Self {
        Self {
            intervals: CONSONANT_INTERVALS.to_vec(),
            ceiling: None,
        }
    }

    /// Rejects any note at or above `ceiling`.
    pub fn with_ceiling(mut self, ceiling: i32) -> Self {
        self.ceiling = Some(ceiling);
        self
    }

    pub fn intervals(&self) -> &[i32] {
        &self.intervals
    }

    pub fn ceiling(&self) -> Option<i32> {
        self.ceiling
    }
}

impl Default for IntervalKind {
    fn default() -> Self {
        Self::consonant()
    }
}

impl GenomeKind<i32> for IntervalKind {
    type Context = Vec<i32>;

    fn chromosome_length(&self, context: &Vec<i32>) -> usize {
        context.len()
    }

    fn legal_alleles(&self, locus: usize, range: Option<u32>, context: &Vec<i32>) -> Result<Vec<i32>> {
        let note = *context.get(locus).ok_or(GeneticError::IndexOutOfRange {
            locus,
            length: context.len(),
        })?;

        Ok(self
            .intervals
            .iter()
            .filter(|&&interval| range.map_or(true, |r| i64::from(interval) <= i64::from(r)))
            .map(|&interval| note + interval)
            .filter(|&allele| self.ceiling.map_or(true, |ceiling| allele < ceiling))
            .collect())
    }
}
