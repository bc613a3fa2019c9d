//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → rank → elitism → selection → crossover → mutation →
//! replacement, until the fitness threshold or the generation limit is
//! reached.

use super::config::GaConfig;
use super::error::GaError;
use super::operators::{flip_mutation, single_point_crossover};
use super::selection::select_pair;
use super::types::{Population, Problem};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The best genome reached the configured fitness threshold.
    Converged,
    /// The generation limit passed without meeting the threshold.
    Exhausted,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Final population, best genome first.
    pub population: Population,

    /// Fitness of the best genome in the final population.
    pub best_fitness: u64,

    /// Index of the last generation entered: a run converging at
    /// generation `g` reports `g`, and an exhausted run with limit `N`
    /// reports `N - 1`.
    pub generations: usize,

    /// How the run ended.
    pub termination: Termination,

    /// Best fitness at the start of each executed generation (one entry
    /// per generation entered).
    pub fitness_history: Vec<u64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let knapsack = Knapsack::new(items, 30);
/// let config = GaConfig::default().with_population_size(10).with_seed(42);
/// let result = GaRunner::run(&knapsack, &config)?;
/// println!("number of generations: {}", result.generations);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA until the fitness threshold or the generation limit.
    ///
    /// Each generation ranks the population by fitness (stable,
    /// descending), carries the top two genomes forward unchanged, and
    /// fills the rest with mutated crossover offspring of
    /// fitness-weighted parent pairs. The convergence check happens
    /// after ranking and before breeding, so a converged generation
    /// never breeds.
    ///
    /// The population is rebuilt as `2 + 2 * (len / 2 - 1)` members
    /// from the current length: an odd configured size drops by one on
    /// the first generation and holds there. The drift is intentional.
    ///
    /// # Errors
    ///
    /// Propagates [`GaError`] from evaluation or crossover; the run
    /// aborts on the first violation.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call
    /// [`GaConfig::validate`] first to get a descriptive error).
    pub fn run<P: Problem>(problem: &P, config: &GaConfig) -> Result<GaResult, GaError> {
        config.validate().expect("invalid GaConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut population: Population = (0..config.population_size)
            .map(|_| problem.create_genome(&mut rng))
            .collect();

        let mut fitness_history = Vec::with_capacity(config.generation_limit);
        let mut generation = 0;
        let mut termination = Termination::Exhausted;

        for gen in 0..config.generation_limit {
            generation = gen;
            population = rank_by_fitness(problem, population)?;

            let best_fitness = problem.evaluate(&population[0])?;
            fitness_history.push(best_fitness);
            log::trace!("generation {gen}: best fitness {best_fitness}");
            problem.on_generation(gen, best_fitness);

            if best_fitness >= config.fitness_limit {
                termination = Termination::Converged;
                break;
            }

            // Top two carried forward unchanged; the rest bred in pairs.
            let mut next_generation: Population = population[..2].to_vec();
            for _ in 0..population.len() / 2 - 1 {
                let (parent_a, parent_b) = select_pair(&population, problem, &mut rng)?;
                let (mut child_a, mut child_b) =
                    single_point_crossover(&parent_a, &parent_b, &mut rng)?;
                flip_mutation(
                    &mut child_a,
                    config.mutation_flips,
                    config.mutation_probability,
                    &mut rng,
                );
                flip_mutation(
                    &mut child_b,
                    config.mutation_flips,
                    config.mutation_probability,
                    &mut rng,
                );
                next_generation.push(child_a);
                next_generation.push(child_b);
            }
            population = next_generation;
        }

        population = rank_by_fitness(problem, population)?;
        let best_fitness = problem.evaluate(&population[0])?;
        log::debug!(
            "run ended ({termination:?}) at generation {generation} with best fitness {best_fitness}"
        );

        Ok(GaResult {
            population,
            best_fitness,
            generations: generation,
            termination,
            fitness_history,
        })
    }
}

/// Sorts the population by fitness, best first.
///
/// The sort is stable: genomes with equal fitness keep their prior
/// relative order.
fn rank_by_fitness<P: Problem>(
    problem: &P,
    population: Population,
) -> Result<Population, GaError> {
    let mut scored = population
        .into_iter()
        .map(|genome| problem.evaluate(&genome).map(|fitness| (genome, fitness)))
        .collect::<Result<Vec<_>, _>>()?;
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(scored.into_iter().map(|(genome, _)| genome).collect())
}

// ============================================================================
// Tests
// ============================================================================
