//! Crossover and mutation operators for city tours.
//!
//! # Crossover
//!
//! [`crossover_pair`] builds the first child greedily: starting from the first
//! parent's first city, it repeatedly looks at the successor of the current
//! city in each parent (parents are read cyclically) and takes the nearer
//! unused one. When both successors are already used it scans both parents
//! from a fixed offset for the first unused city. The second child is the
//! city-wise complement of the first (see [`CityCodec::complement`]), which is
//! always a valid permutation.
//!
//! [`crossover`] applies this to disjoint adjacent parent pairs, one rayon
//! task per pair.
//!
//! # Mutation
//!
//! [`mutate`] swaps two random positions of each offspring with probability
//! `mutate_rate` percent. [`mutate_parallel`] does the same across threads with
//! per-offspring generators derived from the caller's generator.

use super::types::Tour;
use crate::city::{City, CityCodec};
use crate::coordinates::{distance, CoordinateTable};
use crate::error::{Result, TspError};
use crate::random::create_rng;
use rand::Rng;
use rayon::prelude::*;

/// Mutation rates are expressed on this scale (percent).
pub const MUTATE_SCALE: u32 = 100;

// ============================================================================
// Crossover
// ============================================================================

/// Crosses `parents` in adjacent pairs `(0, 1), (2, 3), …`.
///
/// Offspring `2i` is the recombined child of pair `i` and offspring `2i + 1`
/// is its complement, so the result has as many tours as `parents`.
///
/// Returns [`TspError::OddParentCount`] if `parents` has odd length.
///
/// # Panics
/// Panics if a parent's length differs from `codec.cities()`.
pub fn crossover(
    parents: &[Tour],
    table: &CoordinateTable,
    codec: &CityCodec,
    parallel: bool,
) -> Result<Vec<Tour>> {
    if parents.len() % 2 != 0 {
        return Err(TspError::OddParentCount(parents.len()));
    }

    let pairs: Vec<(Tour, Tour)> = if parallel {
        parents
            .par_chunks_exact(2)
            .map(|pair| crossover_pair(&pair[0], &pair[1], table, codec))
            .collect()
    } else {
        parents
            .chunks_exact(2)
            .map(|pair| crossover_pair(&pair[0], &pair[1], table, codec))
            .collect()
    };

    Ok(pairs.into_iter().flat_map(|(c1, c2)| [c1, c2]).collect())
}

/// Recombines two parents into a child and its complement.
///
/// Ties in successor distance go to `parent2`'s successor.
///
/// # Panics
/// Panics if the parents' lengths differ from each other or from
/// `codec.cities()`.
pub fn crossover_pair(
    parent1: &Tour,
    parent2: &Tour,
    table: &CoordinateTable,
    codec: &CityCodec,
) -> (Tour, Tour) {
    let p1 = parent1.itinerary();
    let p2 = parent2.itinerary();
    let n = p1.len();
    assert_eq!(n, p2.len(), "parents must have equal length");
    assert_eq!(n, codec.cities(), "parent length must match the codec");

    let pos_in_p1 = position_index(p1);
    let pos_in_p2 = position_index(p2);

    let mut child: Vec<City> = Vec::with_capacity(n);
    let mut used = vec![false; n];
    child.push(p1[0]);
    used[p1[0].index()] = true;

    let mut prev = p1[0];
    for _ in 1..n {
        let pos1 = pos_in_p1[prev.index()];
        let pos2 = pos_in_p2[prev.index()];
        let city1 = p1[(pos1 + 1) % n];
        let city2 = p2[(pos2 + 1) % n];

        let next = match (used[city1.index()], used[city2.index()]) {
            (false, false) => {
                if distance(prev, city1, table) < distance(prev, city2, table) {
                    city1
                } else {
                    city2
                }
            }
            (true, false) => city2,
            (false, true) => city1,
            (true, true) => first_unused(p1, p2, &used, pos1),
        };

        used[next.index()] = true;
        child.push(next);
        prev = next;
    }

    let complement: Vec<City> = child.iter().map(|&c| codec.complement(c)).collect();

    (
        Tour::from_permutation(child),
        Tour::from_permutation(complement),
    )
}

/// Position of every city in `itinerary`, indexed by dense city index.
fn position_index(itinerary: &[City]) -> Vec<usize> {
    let mut pos = vec![usize::MAX; itinerary.len()];
    for (i, city) in itinerary.iter().enumerate() {
        pos[city.index()] = i;
    }
    pos
}

/// Scans both parents from `pos1 + 2` (or 0 near the end), wrapping, and
/// returns the first city not yet used: parent1's city at a position before
/// parent2's.
fn first_unused(p1: &[City], p2: &[City], used: &[bool], pos1: usize) -> City {
    let n = p1.len();
    let start = if pos1 + 2 < n { pos1 + 2 } else { 0 };
    (0..n)
        .map(|k| (start + k) % n)
        .find_map(|pos| {
            if !used[p1[pos].index()] {
                Some(p1[pos])
            } else if !used[p2[pos].index()] {
                Some(p2[pos])
            } else {
                None
            }
        })
        .expect("partially built child always has an unused city left")
}

// ============================================================================
// Mutation
// ============================================================================

/// Swaps two uniformly drawn positions (no-op if both draws coincide).
pub fn swap_mutate<R: Rng>(itinerary: &mut [City], rng: &mut R) {
    let n = itinerary.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    itinerary.swap(i, j);
}

/// Mutates each offspring with probability `mutate_rate` percent.
///
/// A mutated tour's fitness is reset until the next evaluation. Returns the
/// number of tours mutated.
pub fn mutate<R: Rng>(offspring: &mut [Tour], mutate_rate: u32, rng: &mut R) -> usize {
    offspring
        .iter_mut()
        .map(|tour| mutate_one(tour, mutate_rate, rng) as usize)
        .sum()
}

/// Parallel [`mutate`].
///
/// One seed per offspring is drawn from `rng` up front, so the outcome depends
/// only on `rng`'s state, not on thread scheduling.
pub fn mutate_parallel<R: Rng>(offspring: &mut [Tour], mutate_rate: u32, rng: &mut R) -> usize {
    let seeds: Vec<u64> = (0..offspring.len()).map(|_| rng.random()).collect();
    offspring
        .par_iter_mut()
        .zip(seeds.par_iter())
        .map(|(tour, &seed)| {
            let mut local = create_rng(seed);
            mutate_one(tour, mutate_rate, &mut local) as usize
        })
        .sum()
}

fn mutate_one<R: Rng>(tour: &mut Tour, mutate_rate: u32, rng: &mut R) -> bool {
    if rng.random_range(0..MUTATE_SCALE) >= mutate_rate {
        return false;
    }
    swap_mutate(tour.itinerary_mut(), rng);
    tour.invalidate();
    true
}

// ============================================================================
// Tests
// ============================================================================
