use crate::genome::Genome;

/// A fitness function.
///
/// `score` may be called more than once for the same genome; the evolution
/// loop only calls it for genomes without a cached score. Any closure taking
/// a `&Genome` and returning a score is a challenge.
pub trait Challenge<A, S> {
    fn score(&self, genome: &Genome<A, S>) -> S;
}

impl<A, S, F> Challenge<A, S> for F
where
    F: Fn(&Genome<A, S>) -> S,
{
    fn score(&self, genome: &Genome<A, S>) -> S {
        self(genome)
    }
}
