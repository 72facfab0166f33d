//! # SymbolKind
//!
//! Genomes whose alleles are symbols from a fixed alphabet, such as letters of
//! a word being evolved towards a target. Every locus accepts every symbol.

use std::fmt::Debug;

use crate::error::{GeneticError, Result};

use super::GenomeKind;

/// Genome kind for sequences over a fixed alphabet.
///
/// The context is the target sequence; it fixes the chromosome length and
/// nothing else. The mutation range does not apply to unordered symbols and
/// is ignored.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolKind<A> {
    alphabet: Vec<A>,
}

impl<A> SymbolKind<A> {
    /// Creates a kind drawing from `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `alphabet` is empty.
    pub fn new(alphabet: Vec<A>) -> Result<Self> {
        if alphabet.is_empty() {
            return Err(GeneticError::Configuration(
                "Symbol kind needs a non-empty alphabet".to_string(),
            ));
        }
        Ok(Self { alphabet })
    }

    pub fn alphabet(&self) -> &[A] {
        &self.alphabet
    }
}

impl SymbolKind<char> {
    /// The 26 lowercase ASCII letters.
    pub fn lowercase_ascii() -> Self {
        Self {
            alphabet: ('a'..='z').collect(),
        }
    }
}

impl<A> GenomeKind<A> for SymbolKind<A>
where
    A: Clone + PartialEq + Debug + Send + Sync,
{
    type Context = Vec<A>;

    fn chromosome_length(&self, context: &Vec<A>) -> usize {
        context.len()
    }

    fn legal_alleles(&self, locus: usize, _range: Option<u32>, context: &Vec<A>) -> Result<Vec<A>> {
        if locus >= context.len() {
            return Err(GeneticError::IndexOutOfRange {
                locus,
                length: context.len(),
            });
        }
        Ok(self.alphabet.clone())
    }
}
