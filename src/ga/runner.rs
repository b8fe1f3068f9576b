//! Generational loop execution.
//!
//! [`TspGaRunner`] drives the operators once per generation:
//! evaluate → select top_x → crossover → mutate → replace worst top_x → repeat.

use super::config::TspGaConfig;
use super::evaluation::evaluate;
use super::operators::{crossover, mutate, mutate_parallel};
use super::population::{random_population, replace_worst};
use super::selection::select_parents;
use super::types::{Individual, Tour};
use crate::city::CityCodec;
use crate::coordinates::CoordinateTable;
use crate::error::{Result, TspError};
use crate::random::create_rng;
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct TspGaResult {
    /// The shortest tour found during the entire run.
    pub best: Tour,

    /// Length of `best`.
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run stopped because of stagnation.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run stopped at the wall-clock limit.
    pub timed_out: bool,

    /// Best fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use u_tsp_ga::{CityCodec, CoordinateTable};
/// use u_tsp_ga::ga::{TspGaConfig, TspGaRunner};
///
/// let codec = CityCodec::new(6).unwrap();
/// let points = vec![[0, 0], [2, 0], [4, 1], [4, 3], [2, 4], [0, 3]];
/// let table = CoordinateTable::new(points, &codec).unwrap();
/// let config = TspGaConfig::default()
///     .with_cities(6)
///     .with_population_size(40)
///     .with_top_x(20)
///     .with_max_generations(20)
///     .with_seed(42);
///
/// let result = TspGaRunner::run(&table, &config).unwrap();
/// assert!(result.best.is_permutation(&codec));
/// ```
pub struct TspGaRunner;

impl TspGaRunner {
    /// Runs the GA.
    pub fn run(table: &CoordinateTable, config: &TspGaConfig) -> Result<TspGaResult> {
        Self::run_with_cancel(table, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is set to `true`, the run stops before the next
    /// generation and returns the best tour found so far.
    pub fn run_with_cancel(
        table: &CoordinateTable,
        config: &TspGaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TspGaResult> {
        config.validate()?;
        let codec = CityCodec::new(config.cities)?;
        if table.len() != codec.cities() {
            return Err(TspError::CoordinateCount {
                expected: codec.cities(),
                actual: table.len(),
            });
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        let started = Instant::now();
        let time_limit = config.time_limit_ms.map(Duration::from_millis);

        info!(
            "starting GA: {} cities, population {}, top_x {}, mutate {}%, seed {}",
            config.cities, config.population_size, config.top_x, config.mutate_rate, seed
        );

        // 1. Initialize and rank
        let mut population = random_population(config.population_size, &codec, &mut rng);
        evaluate(&mut population, table, config.path_policy, config.parallel);

        let mut best = population[0].clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness());

        let mut stagnation_counter = 0usize;
        let mut generations = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;
        let mut timed_out = false;

        // 2. Generational loop
        for gen in 0..config.max_generations {
            if cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                break;
            }
            if time_limit.is_some_and(|limit| started.elapsed() >= limit) {
                timed_out = true;
                break;
            }

            let parents = select_parents(&population, config.top_x)?;
            let mut offspring = crossover(parents, table, &codec, config.parallel)?;

            let mutated = if config.parallel {
                mutate_parallel(&mut offspring, config.mutate_rate, &mut rng)
            } else {
                mutate(&mut offspring, config.mutate_rate, &mut rng)
            };

            replace_worst(&mut population, offspring);
            evaluate(&mut population, table, config.path_policy, config.parallel);
            generations = gen + 1;

            let gen_best = &population[0];
            if gen_best.fitness() < best.fitness() {
                best = gen_best.clone();
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            fitness_history.push(best.fitness());

            debug!(
                "generation {}: best {:.4} ({}), {} mutated",
                generations,
                best.fitness(),
                best,
                mutated
            );

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        info!(
            "GA finished after {} generations in {:?}: best {:.4} ({})",
            generations,
            started.elapsed(),
            best.fitness(),
            best
        );

        Ok(TspGaResult {
            best_fitness: best.fitness(),
            best,
            generations,
            stagnated,
            cancelled,
            timed_out,
            fitness_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
