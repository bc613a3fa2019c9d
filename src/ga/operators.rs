//! Genetic operators for binary genomes.
//!
//! Single-point crossover and stochastic flip mutation. Both take the
//! caller's RNG so the whole random stream stays seedable.

use super::error::GaError;
use super::types::Genome;
use rand::Rng;

/// Single-point crossover.
///
/// Picks a point `p` uniformly from `[1, length - 1]` and splices the
/// parents into `a[..p] + b[p..]` and `b[..p] + a[p..]`. The point is
/// never 0 or `length`, so each child carries material from both
/// parents. Parents shorter than 2 bits have no interior point and are
/// returned unchanged.
///
/// Children are always freshly owned vectors; no storage is shared with
/// the parents.
///
/// # Errors
///
/// [`GaError::LengthMismatch`] if the parents differ in length.
pub fn single_point_crossover<R: Rng>(
    a: &Genome,
    b: &Genome,
    rng: &mut R,
) -> Result<(Genome, Genome), GaError> {
    if a.len() != b.len() {
        return Err(GaError::LengthMismatch {
            a: a.len(),
            b: b.len(),
        });
    }

    let length = a.len();
    if length < 2 {
        return Ok((a.clone(), b.clone()));
    }

    let p = rng.random_range(1..length);

    let mut child_a = Vec::with_capacity(length);
    child_a.extend_from_slice(&a[..p]);
    child_a.extend_from_slice(&b[p..]);

    let mut child_b = Vec::with_capacity(length);
    child_b.extend_from_slice(&b[..p]);
    child_b.extend_from_slice(&a[p..]);

    Ok((child_a, child_b))
}

/// Stochastic flip mutation, in place.
///
/// Repeats `num_flips` times: pick a uniformly random position, then
/// flip it with probability `probability`. The same position may be
/// drawn more than once across iterations, so the net flip count is not
/// simply `num_flips`. An empty genome or `num_flips == 0` leaves the
/// genome untouched.
///
/// The genome must be exclusively owned by the caller; the engine only
/// mutates freshly created offspring.
///
/// # Panics
///
/// Panics if `probability` is outside `[0, 1]`
/// ([`GaConfig`](super::GaConfig) clamps its own field).
pub fn flip_mutation<R: Rng>(
    genome: &mut Genome,
    num_flips: usize,
    probability: f64,
    rng: &mut R,
) {
    if genome.is_empty() {
        return;
    }

    for _ in 0..num_flips {
        let index = rng.random_range(0..genome.len());
        if rng.random_bool(probability) {
            genome[index] = !genome[index];
        }
    }
}
