//! GA configuration.
//!
//! [`TspGaConfig`] holds all parameters that control the generational loop.

use super::evaluation::PathPolicy;
use super::operators::MUTATE_SCALE;
use crate::city::MAX_CITIES;
use crate::error::{Result, TspError};

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// The defaults reproduce the classic setup: 36 cities, 50 000 tours, the
/// top 25 000 used as parents, 50% mutation, 150 generations.
///
/// ```
/// use u_tsp_ga::ga::TspGaConfig;
///
/// let config = TspGaConfig::default();
/// assert_eq!(config.cities, 36);
/// assert_eq!(config.top_x, 25_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp_ga::ga::{PathPolicy, TspGaConfig};
///
/// let config = TspGaConfig::default()
///     .with_population_size(200)
///     .with_top_x(100)
///     .with_mutate_rate(30)
///     .with_path_policy(PathPolicy::Closed)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspGaConfig {
    /// Number of cities (alphabet prefix length), 1..=36.
    pub cities: usize,

    /// Number of tours in the population.
    pub population_size: usize,

    /// Number of top-ranked tours used as parents each generation.
    ///
    /// Must be even: parents are crossed in adjacent pairs. The same number
    /// of worst tours is replaced by offspring.
    pub top_x: usize,

    /// Percent chance (0–100) that an offspring gets a swap mutation.
    pub mutate_rate: u32,

    /// Maximum number of generations.
    pub max_generations: usize,

    /// Number of generations without improvement before stopping.
    ///
    /// Set to 0 to disable stagnation-based termination.
    pub stagnation_limit: usize,

    /// Whether fitness includes the closing edge back to the first city.
    pub path_policy: PathPolicy,

    /// Whether to evaluate, cross over and mutate in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed. The generator is created once per run.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each generation.
    pub time_limit_ms: Option<u64>,
}

impl Default for TspGaConfig {
    fn default() -> Self {
        Self {
            cities: MAX_CITIES,
            population_size: 50_000,
            top_x: 25_000,
            mutate_rate: 50,
            max_generations: 150,
            stagnation_limit: 0,
            path_policy: PathPolicy::Open,
            parallel: true,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl TspGaConfig {
    /// Sets the number of cities.
    pub fn with_cities(mut self, n: usize) -> Self {
        self.cities = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the parent count.
    pub fn with_top_x(mut self, n: usize) -> Self {
        self.top_x = n;
        self
    }

    /// Sets the mutation rate in percent, clamped to 100.
    pub fn with_mutate_rate(mut self, percent: u32) -> Self {
        self.mutate_rate = percent.min(MUTATE_SCALE);
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the path-length policy.
    pub fn with_path_policy(mut self, policy: PathPolicy) -> Self {
        self.path_policy = policy;
        self
    }

    /// Enables or disables parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Preset for quick experiments: 1 000 tours, top 500, 100 generations,
    /// stop after 20 stagnant generations.
    pub fn fast() -> Self {
        Self {
            population_size: 1_000,
            top_x: 500,
            max_generations: 100,
            stagnation_limit: 20,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(TspError::InvalidConfig(msg));

        if self.cities == 0 || self.cities > MAX_CITIES {
            return invalid(format!(
                "cities must be in 1..={MAX_CITIES}, got {}",
                self.cities
            ));
        }
        if self.population_size < 2 {
            return invalid("population_size must be at least 2".into());
        }
        if self.top_x == 0 {
            return invalid("top_x must be at least 2".into());
        }
        if self.top_x % 2 != 0 {
            return Err(TspError::OddParentCount(self.top_x));
        }
        if self.top_x > self.population_size {
            return invalid(format!(
                "top_x ({}) exceeds population_size ({})",
                self.top_x, self.population_size
            ));
        }
        if self.mutate_rate > MUTATE_SCALE {
            return invalid(format!(
                "mutate_rate must be at most {MUTATE_SCALE}, got {}",
                self.mutate_rate
            ));
        }
        if self.max_generations == 0 {
            return invalid("max_generations must be at least 1".into());
        }
        if self.time_limit_ms == Some(0) {
            return invalid("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
