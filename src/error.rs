//! Error types.
//!
//! The operators themselves are total over well-formed inputs; errors arise
//! only when inputs are built (city symbols, coordinate tables, tours) or when
//! a configuration is validated.

use thiserror::Error;

/// Errors reported by constructors and configuration checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TspError {
    #[error("invalid city symbol {0:?}: expected A-Z or 0-9")]
    InvalidCity(char),

    #[error("city {city:?} is outside a {cities}-city alphabet")]
    CityOutOfRange { city: char, cities: usize },

    #[error("city index {0} is outside the 36-symbol alphabet")]
    IndexOutOfRange(usize),

    #[error("coordinate table has {actual} entries, expected {expected}")]
    CoordinateCount { expected: usize, actual: usize },

    #[error("malformed tour: {0}")]
    MalformedTour(String),

    #[error("crossover needs an even number of parents, got {0}")]
    OddParentCount(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TspError>;
