//! Genetic-algorithm operator set for the symmetric Traveling Salesman
//! Problem over a small city alphabet (up to 36 cities named `A`–`Z`,
//! `0`–`9`).
//!
//! - **City codec** ([`city`]): symbol ↔ dense index, complementary cities
//! - **Distances** ([`coordinates`]): immutable coordinate table, Euclidean
//!   distance
//! - **GA** ([`ga`]): fitness evaluation with ranking, complementary
//!   crossover, swap mutation, top-K selection and a generational runner
//!
//! # Example
//!
//! ```
//! use u_tsp_ga::{CityCodec, CoordinateTable};
//! use u_tsp_ga::ga::{crossover_pair, evaluate, PathPolicy, Tour};
//!
//! let codec = CityCodec::new(4).unwrap();
//! let table = CoordinateTable::new(vec![[0, 0], [1, 0], [1, 1], [0, 1]], &codec).unwrap();
//!
//! let mut population = vec![
//!     Tour::parse("ACBD", &codec).unwrap(),
//!     Tour::parse("ABCD", &codec).unwrap(),
//! ];
//! evaluate(&mut population, &table, PathPolicy::Open, false);
//! assert_eq!(population[0].to_string(), "ABCD");
//!
//! let (c1, c2) = crossover_pair(&population[0], &population[1], &table, &codec);
//! assert!(c1.is_permutation(&codec) && c2.is_permutation(&codec));
//! ```
//!
//! # Logging
//!
//! The runner reports progress through the [`log`] facade; no logger is
//! installed by this crate.

pub mod city;
pub mod coordinates;
pub mod error;
pub mod ga;
pub mod random;

pub use city::{City, CityCodec, MAX_CITIES};
pub use coordinates::{distance, CoordinateTable};
pub use error::{Result, TspError};
