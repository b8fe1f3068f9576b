//! Genetic algorithm for the TSP.
//!
//! Tours are permutations of a city alphabet; fitness is total travel
//! distance (lower is better). One generation is:
//!
//! 1. [`evaluate`]: compute every tour's length and sort best-first
//! 2. [`select_parents`]: take the top `top_x` tours
//! 3. [`crossover`]: greedy successor recombination plus complementary child
//! 4. [`mutate`]: random swap with probability `mutate_rate` percent
//! 5. [`replace_worst`]: offspring overwrite the bottom `top_x` tours
//!
//! [`TspGaRunner`] repeats this under a [`TspGaConfig`]. Each step is also
//! public so callers can drive generations themselves.
//!
//! # Key Types
//!
//! - [`Tour`]: a chromosome (itinerary + fitness)
//! - [`TspGaConfig`]: population size, parent count, mutation rate, termination
//! - [`TspGaRunner`] / [`TspGaResult`]: the generational loop and its outcome
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Grefenstette et al. (1985), "Genetic Algorithms for the Traveling Salesman Problem"

mod config;
mod evaluation;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::TspGaConfig;
pub use evaluation::{evaluate, sort_by_fitness, tour_length, PathPolicy};
pub use operators::{crossover, crossover_pair, mutate, mutate_parallel, swap_mutate};
pub use population::{best, random_population, replace_worst};
pub use runner::{TspGaResult, TspGaRunner};
pub use selection::select_parents;
pub use types::{Individual, Tour};
