//! Core type definitions for the GA engine.
//!
//! The central trait — [`Problem`] — defines the contract between the
//! generic engine and a domain-specific problem implementation.

use super::error::GaError;
use rand::Rng;

/// A candidate solution: one bit per decision variable.
///
/// For the knapsack problem, position `i` encodes whether item `i` is
/// included. Every genome is an independently owned value; operators
/// never alias storage between population members.
pub type Genome = Vec<bool>;

/// An ordered collection of genomes, rebuilt each generation.
pub type Population = Vec<Genome>;

/// Defines an optimization problem for the engine.
///
/// Implementations supply the genome dimension and the fitness
/// function; the engine supplies the operators and the loop. Higher
/// fitness is better, and infeasible solutions are expected to score 0
/// rather than fail.
///
/// # Implementing
///
/// ```ignore
/// struct BitCount { length: usize }
///
/// impl Problem for BitCount {
///     fn genome_length(&self) -> usize { self.length }
///     fn evaluate(&self, genome: &Genome) -> Result<u64, GaError> {
///         Ok(genome.iter().filter(|&&bit| bit).count() as u64)
///     }
/// }
/// ```
pub trait Problem {
    /// Number of bits in every genome of this problem.
    fn genome_length(&self) -> usize;

    /// Scores a genome. Higher is better; 0 is the floor.
    ///
    /// # Errors
    ///
    /// [`GaError::DimensionMismatch`] if the genome's length does not
    /// match [`genome_length`](Problem::genome_length).
    fn evaluate(&self, genome: &Genome) -> Result<u64, GaError>;

    /// Creates one random genome during population initialization.
    ///
    /// The default draws each bit with probability 0.5.
    fn create_genome<R: Rng>(&self, rng: &mut R) -> Genome {
        random_genome(self.genome_length(), rng)
    }

    /// Called once per generation with the current best fitness.
    ///
    /// Useful for progress reporting. The default implementation is a
    /// no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: u64) {}
}

/// Generates a genome of `length` uniformly random bits.
pub fn random_genome<R: Rng>(length: usize, rng: &mut R) -> Genome {
    (0..length).map(|_| rng.random_bool(0.5)).collect()
}

/// Generates `size` random genomes of `length` bits each.
pub fn random_population<R: Rng>(size: usize, length: usize, rng: &mut R) -> Population {
    (0..size).map(|_| random_genome(length, rng)).collect()
}
