//! Parent selection.
//!
//! Fitness-proportionate (roulette wheel) sampling with replacement:
//! each draw picks a population member with probability proportional to
//! its fitness, and the same member may fill both slots of a pair.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::error::GaError;
use super::types::{Genome, Problem};
use rand::Rng;

/// Draws a breeding pair from the population.
///
/// Every genome is re-evaluated on each call — scores are not cached,
/// so repeated calls against an unchanged population are deterministic
/// apart from the draw itself.
///
/// When every genome scores 0 the weighted draw is undefined; the
/// sampling then degenerates to a uniform-random choice instead of
/// failing, so a fully infeasible population keeps evolving.
///
/// # Errors
///
/// Propagates [`GaError`] from [`Problem::evaluate`].
///
/// # Panics
///
/// Panics if `population` is empty.
pub fn select_pair<P: Problem, R: Rng>(
    population: &[Genome],
    problem: &P,
    rng: &mut R,
) -> Result<(Genome, Genome), GaError> {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let weights: Vec<u64> = population
        .iter()
        .map(|genome| problem.evaluate(genome))
        .collect::<Result<_, _>>()?;

    let first = weighted_choice(&weights, rng);
    let second = weighted_choice(&weights, rng);
    Ok((population[first].clone(), population[second].clone()))
}

/// Fitness-proportionate draw over integer weights.
///
/// Walks the cumulative sum until it passes a uniform threshold in
/// `[0, total)`. A zero total falls back to a uniform index.
fn weighted_choice<R: Rng>(weights: &[u64], rng: &mut R) -> usize {
    let n = weights.len();
    let total: u64 = weights.iter().sum();
    if total == 0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0..total);
    let mut cumulative = 0u64;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // threshold < total, so the scan has already returned
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Fitness = number of set bits, with the dimension check of a real
    /// problem.
    struct BitCount {
        length: usize,
    }

    impl Problem for BitCount {
        fn genome_length(&self) -> usize {
            self.length
        }

        fn evaluate(&self, genome: &Genome) -> Result<u64, GaError> {
            if genome.len() != self.length {
                return Err(GaError::DimensionMismatch {
                    genome: genome.len(),
                    items: self.length,
                });
            }
            Ok(genome.iter().filter(|&&bit| bit).count() as u64)
        }
    }

    fn genome_with_ones(length: usize, ones: usize) -> Genome {
        (0..length).map(|i| i < ones).collect()
    }

    #[test]
    fn test_selection_favors_fitter_genomes() {
        let problem = BitCount { length: 8 };
        // Fitness 1 vs fitness 7: the heavy genome should dominate.
        let population = vec![genome_with_ones(8, 1), genome_with_ones(8, 7)];
        let mut rng = StdRng::seed_from_u64(42);

        let mut heavy = 0u32;
        let n = 10000;
        for _ in 0..n {
            let (a, b) = select_pair(&population, &problem, &mut rng).unwrap();
            heavy += [a, b]
                .iter()
                .filter(|genome| **genome == population[1])
                .count() as u32;
        }
        // Expected share is 7/8 of 2n draws.
        assert!(
            heavy > 16000,
            "expected the fit genome in ~87% of draws, got {heavy}/20000"
        );
    }

    #[test]
    fn test_all_zero_fitness_falls_back_to_uniform() {
        let problem = BitCount { length: 8 };
        // All-false genomes all score 0.
        let population = vec![genome_with_ones(8, 0); 4];
        let mut rng = StdRng::seed_from_u64(42);

        // Must not fail, and every slot stays reachable.
        for _ in 0..100 {
            let (a, b) = select_pair(&population, &problem, &mut rng).unwrap();
            assert_eq!(a.len(), 8);
            assert_eq!(b.len(), 8);
        }
    }

    #[test]
    fn test_zero_weights_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let weights = [0u64; 4];

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[weighted_choice(&weights, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform fallback, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_same_member_may_fill_both_slots() {
        let problem = BitCount { length: 4 };
        // Only one genome has nonzero fitness; it must take both slots.
        let population = vec![genome_with_ones(4, 0), genome_with_ones(4, 3)];
        let mut rng = StdRng::seed_from_u64(42);

        let (a, b) = select_pair(&population, &problem, &mut rng).unwrap();
        assert_eq!(a, population[1]);
        assert_eq!(b, population[1]);
    }

    #[test]
    fn test_single_member_population() {
        let problem = BitCount { length: 4 };
        let population = vec![genome_with_ones(4, 2)];
        let mut rng = StdRng::seed_from_u64(42);

        let (a, b) = select_pair(&population, &problem, &mut rng).unwrap();
        assert_eq!(a, population[0]);
        assert_eq!(b, population[0]);
    }

    #[test]
    fn test_evaluation_error_propagates() {
        let problem = BitCount { length: 5 };
        let population = vec![genome_with_ones(4, 2)];
        let mut rng = StdRng::seed_from_u64(42);

        let err = select_pair(&population, &problem, &mut rng).unwrap_err();
        assert_eq!(err, GaError::DimensionMismatch { genome: 4, items: 5 });
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let problem = BitCount { length: 4 };
        let population: Vec<Genome> = vec![];
        let mut rng = StdRng::seed_from_u64(42);
        let _ = select_pair(&population, &problem, &mut rng);
    }
}
