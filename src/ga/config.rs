//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, termination conditions, mutation settings,
/// and the random seed. The genome dimension is not configured here —
/// it belongs to the [`Problem`](super::Problem) being solved.
///
/// # Defaults
///
/// ```
/// use evosack::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generation_limit, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evosack::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_fitness_limit(1000)
///     .with_generation_limit(100)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of genomes in the initial population.
    ///
    /// Must be at least 2 (the two elites). Odd sizes drift down by one
    /// after the first generation; see
    /// [`GaRunner::run`](super::GaRunner::run).
    pub population_size: usize,

    /// Fitness threshold for early termination.
    ///
    /// The run converges as soon as the best genome scores at least
    /// this much. The default of `u64::MAX` disables early termination.
    pub fitness_limit: u64,

    /// Hard cap on the number of generations.
    pub generation_limit: usize,

    /// Number of flip attempts per offspring.
    ///
    /// Each attempt picks a fresh random position, so attempts may
    /// land on the same bit.
    pub mutation_flips: usize,

    /// Probability that an attempted flip is applied (0.0–1.0).
    pub mutation_probability: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            fitness_limit: u64::MAX,
            generation_limit: 100,
            mutation_flips: 1,
            mutation_probability: 0.5,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the fitness threshold for early termination.
    pub fn with_fitness_limit(mut self, limit: u64) -> Self {
        self.fitness_limit = limit;
        self
    }

    /// Sets the generation limit.
    pub fn with_generation_limit(mut self, n: usize) -> Self {
        self.generation_limit = n;
        self
    }

    /// Sets the number of flip attempts per offspring.
    pub fn with_mutation_flips(mut self, flips: usize) -> Self {
        self.mutation_flips = flips;
        self
    }

    /// Sets the flip probability, clamped to `[0, 1]`.
    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.generation_limit == 0 {
            return Err("generation_limit must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err("mutation_probability must be within [0, 1]".into());
        }
        Ok(())
    }
}
