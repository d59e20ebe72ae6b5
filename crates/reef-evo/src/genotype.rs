use rand::Rng;

use crate::fitness::FitnessValue;

/// A candidate solution the search engine can evolve.
///
/// `Clone` must produce an independent copy: the engine clones an elite and mutates the clone,
/// and the elite itself has to come out of that unchanged. Types holding shared handles
/// (`Rc`, `Arc`) to mutable state break this.
pub trait Genotype: Clone {
    /// Mutates `self` in place.
    fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R);

    /// Scores `self`. Must not mutate anything the engine observes.
    fn fitness(&self) -> FitnessValue;
}
