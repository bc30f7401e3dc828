//! NSGA-II configuration.
//!
//! [`Nsga2Config`] holds all parameters that control the generational loop.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the NSGA-II engine.
///
/// # Defaults
///
/// ```
/// use moea::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use moea::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default()
///     .with_population_size(200)
///     .with_generations(250)
///     .with_crossover_rate(0.9)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Nsga2Config {
    /// Number of candidates in the population.
    ///
    /// Must be at least 2: tournament selection and crowding boundary
    /// logic degenerate below that. Typical range: 50–500.
    pub population_size: usize,

    /// Number of generations to run. The sole stopping condition.
    ///
    /// 0 is allowed: the run returns the first front of the initial
    /// evaluated population.
    pub generations: usize,

    /// Probability of applying SBX to a selected parent pair (0.0–1.0).
    ///
    /// Gates the crossover once per pair; SBX additionally skips each
    /// gene with probability 0.5 internally.
    pub crossover_rate: f64,

    /// Per-gene probability of polynomial mutation (0.0–1.0).
    ///
    /// Mutation itself is attempted on every offspring; this rate is the
    /// independent per-gene gate.
    pub mutation_rate: f64,

    /// Whether to evaluate candidates in parallel using rayon.
    ///
    /// Evaluation is the only data-independent step in a generation, so
    /// enabling this does not change results for a deterministic problem.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for Nsga2Config {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            parallel: false,
            seed: None,
        }
    }
}

impl Nsga2Config {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
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
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err("crossover_rate must be within [0, 1]".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within [0, 1]".into());
        }
        Ok(())
    }
}
