//! Parent selection.
//!
//! The parent set is the top `top_x` tours of a population already sorted by
//! [`evaluate`](super::evaluate). Parents are consumed in adjacent pairs, so
//! `top_x` must be even.

use super::types::Tour;
use crate::error::{Result, TspError};

/// Returns the first `top_x` tours of a sorted population.
///
/// Rejects odd `top_x` and `top_x` larger than the population.
pub fn select_parents(population: &[Tour], top_x: usize) -> Result<&[Tour]> {
    if top_x % 2 != 0 {
        return Err(TspError::OddParentCount(top_x));
    }
    if top_x > population.len() {
        return Err(TspError::InvalidConfig(format!(
            "top_x ({top_x}) exceeds population size ({})",
            population.len()
        )));
    }
    Ok(&population[..top_x])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::CityCodec;

    fn population() -> Vec<Tour> {
        let codec = CityCodec::new(3).unwrap();
        ["ABC", "BCA", "CAB", "ACB", "CBA"]
            .iter()
            .map(|s| Tour::parse(s, &codec).unwrap())
            .collect()
    }

    #[test]
    fn test_selects_prefix() {
        let pop = population();
        let parents = select_parents(&pop, 4).unwrap();
        assert_eq!(parents.len(), 4);
        assert_eq!(parents[0], pop[0]);
        assert_eq!(parents[3], pop[3]);
    }

    #[test]
    fn test_rejects_odd_top_x() {
        let pop = population();
        assert_eq!(select_parents(&pop, 3), Err(TspError::OddParentCount(3)));
    }

    #[test]
    fn test_rejects_top_x_above_population() {
        let pop = population();
        assert!(matches!(
            select_parents(&pop, 6),
            Err(TspError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_parents() {
        let pop = population();
        assert!(select_parents(&pop, 0).unwrap().is_empty());
    }
}
