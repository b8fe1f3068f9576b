//! Fitness evaluation and ranking.
//!
//! Fitness is the total travel distance along a tour. Each tour is evaluated
//! independently (one rayon task per tour when parallel); the edge sum inside
//! a tour is always sequential, so parallel and sequential evaluation produce
//! bit-identical fitness values.

use super::types::{Individual, Tour};
use crate::city::City;
use crate::coordinates::{distance, CoordinateTable};
use rayon::prelude::*;
use std::cmp::Ordering;

/// How a tour's length is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathPolicy {
    /// Sum of consecutive edges; no edge back to the first city.
    #[default]
    Open,
    /// Open path plus the closing edge from the last city to the first.
    Closed,
}

/// Length of `itinerary` under `policy`.
pub fn tour_length(itinerary: &[City], table: &CoordinateTable, policy: PathPolicy) -> f64 {
    let open: f64 = itinerary
        .windows(2)
        .map(|edge| distance(edge[0], edge[1], table))
        .sum();

    match (policy, itinerary.first(), itinerary.last()) {
        (PathPolicy::Closed, Some(&first), Some(&last)) => open + distance(last, first, table),
        _ => open,
    }
}

/// Writes every tour's fitness, then sorts the population ascending by
/// fitness (best first).
///
/// Order among tours with equal fitness is unspecified.
pub fn evaluate(
    population: &mut [Tour],
    table: &CoordinateTable,
    policy: PathPolicy,
    parallel: bool,
) {
    if parallel {
        population.par_iter_mut().for_each(|tour| {
            let f = tour_length(tour.itinerary(), table, policy);
            tour.set_fitness(f);
        });
    } else {
        for tour in population.iter_mut() {
            let f = tour_length(tour.itinerary(), table, policy);
            tour.set_fitness(f);
        }
    }

    sort_by_fitness(population);
}

/// Sorts ascending by fitness (lower = better).
pub fn sort_by_fitness<I: Individual>(population: &mut [I]) {
    population.sort_unstable_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(Ordering::Equal)
    });
}
