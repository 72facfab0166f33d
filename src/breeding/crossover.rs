//! # Single-point crossover
//!
//! Two parents exchange the tails of their chromosomes at one randomly chosen
//! point, producing two unscored children.

use crate::{
    error::{GeneticError, Result},
    genome::Genome,
    rng::RandomNumberGenerator,
};

/// Recombines two parents at a uniformly chosen point in `[0, len]`.
///
/// Parents with identical chromosomes are handed back as they are, cached
/// fitness included. Otherwise both children are fresh, unscored genomes:
///
/// - `child_a = parent_a[..p] ++ parent_b[p..]`
/// - `child_b = parent_b[..p] ++ parent_a[p..]`
///
/// A point of `0` or `len` is legal and yields children equal to the parents
/// with roles swapped or kept.
///
/// # Errors
///
/// Returns `GeneticError::LengthMismatch` if the chromosomes differ in length.
///
/// # Examples
///
/// ```rust
/// use foox::breeding::crossover;
/// use foox::genome::Genome;
/// use foox::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(11);
/// let mum: Genome<u8, f64> = Genome::new(vec![1, 1, 1, 1]);
/// let dad: Genome<u8, f64> = Genome::new(vec![2, 2, 2, 2]);
///
/// let (a, b) = crossover(mum, dad, &mut rng).unwrap();
/// assert_eq!(a.len(), 4);
/// assert!(!a.is_scored() && !b.is_scored());
/// ```
pub fn crossover<A, S>(
    parent_a: Genome<A, S>,
    parent_b: Genome<A, S>,
    rng: &mut RandomNumberGenerator,
) -> Result<(Genome<A, S>, Genome<A, S>)>
where
    A: Clone + PartialEq,
{
    ensure_same_length(&parent_a, &parent_b)?;

    if parent_a == parent_b {
        return Ok((parent_a, parent_b));
    }

    let point = rng.gen_point(parent_a.len());
    crossover_at(&parent_a, &parent_b, point)
}

/// Recombines two parents at a fixed `point`.
///
/// Unlike [`crossover`] this always builds two new unscored genomes, even for
/// identical parents.
///
/// # Errors
///
/// Returns `GeneticError::LengthMismatch` if the chromosomes differ in length
/// and `GeneticError::IndexOutOfRange` if `point > len`.
pub fn crossover_at<A, S>(
    parent_a: &Genome<A, S>,
    parent_b: &Genome<A, S>,
    point: usize,
) -> Result<(Genome<A, S>, Genome<A, S>)>
where
    A: Clone,
{
    ensure_same_length(parent_a, parent_b)?;

    let length = parent_a.len();
    if point > length {
        return Err(GeneticError::IndexOutOfRange {
            locus: point,
            length: length + 1,
        });
    }

    let (a_head, a_tail) = parent_a.chromosome().split_at(point);
    let (b_head, b_tail) = parent_b.chromosome().split_at(point);

    let child_a = a_head.iter().chain(b_tail).cloned().collect();
    let child_b = b_head.iter().chain(a_tail).cloned().collect();

    Ok((Genome::new(child_a), Genome::new(child_b)))
}

fn ensure_same_length<A, S>(parent_a: &Genome<A, S>, parent_b: &Genome<A, S>) -> Result<()> {
    if parent_a.len() != parent_b.len() {
        return Err(GeneticError::LengthMismatch {
            left: parent_a.len(),
            right: parent_b.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genome(alleles: &[i32]) -> Genome<i32, f64> {
        Genome::new(alleles.to_vec())
    }

    #[test]
    fn test_identical_parents_are_returned_unchanged() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let a = Genome::scored(vec![1, 2, 3], 0.5);
        let b = Genome::scored(vec![1, 2, 3], 0.5);

        let (x, y) = crossover(a.clone(), b.clone(), &mut rng).unwrap();

        assert_eq!((x.clone(), y.clone()), (a, b));
        assert!(x.is_scored());
        assert!(y.is_scored());
    }

    #[test]
    fn test_crossover_at_middle() {
        let (a, b) = crossover_at(&genome(&[1, 2, 3, 4]), &genome(&[5, 6, 7, 8]), 2).unwrap();
        assert_eq!(a.chromosome(), &[1, 2, 7, 8]);
        assert_eq!(b.chromosome(), &[5, 6, 3, 4]);
    }

    #[test]
    fn test_crossover_at_ends() {
        let mum = genome(&[1, 2, 3]);
        let dad = genome(&[4, 5, 6]);

        let (a, b) = crossover_at(&mum, &dad, 0).unwrap();
        assert_eq!(a, dad);
        assert_eq!(b, mum);

        let (a, b) = crossover_at(&mum, &dad, 3).unwrap();
        assert_eq!(a, mum);
        assert_eq!(b, dad);
    }

    #[test]
    fn test_crossover_at_past_end() {
        let result = crossover_at(&genome(&[1, 2]), &genome(&[3, 4]), 3);
        assert!(matches!(result, Err(GeneticError::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_children_are_unscored() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        let a = Genome::scored(vec![1, 1, 1, 1], 3.0);
        let b = Genome::scored(vec![2, 2, 2, 2], 4.0);

        let (x, y) = crossover(a, b, &mut rng).unwrap();

        assert_eq!(x.len(), 4);
        assert_eq!(y.len(), 4);
        assert!(!x.is_scored());
        assert!(!y.is_scored());
    }

    #[test]
    fn test_length_mismatch() {
        let mut rng = RandomNumberGenerator::new();
        let result = crossover(genome(&[1, 2]), genome(&[1, 2, 3]), &mut rng);
        assert_eq!(
            result.unwrap_err(),
            GeneticError::LengthMismatch { left: 2, right: 3 }
        );
    }

    #[test]
    fn test_children_draw_from_both_parents() {
        let mut rng = RandomNumberGenerator::from_seed(21);
        for _ in 0..100 {
            let (x, y) = crossover(genome(&[0; 6]), genome(&[1; 6]), &mut rng).unwrap();
            for locus in 0..6 {
                // Each locus holds one allele from each parent between the two children.
                assert_eq!(x.chromosome()[locus] + y.chromosome()[locus], 1);
            }
        }
    }
}
