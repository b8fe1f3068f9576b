//! Population initialization and generational replacement.

use super::types::{Individual, Tour};
use crate::city::CityCodec;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

/// Creates `size` tours, each a uniform shuffle of the codec's alphabet.
///
/// Tours are unevaluated.
pub fn random_population<R: Rng>(size: usize, codec: &CityCodec, rng: &mut R) -> Vec<Tour> {
    (0..size)
        .map(|_| {
            let mut cities = codec.alphabet();
            cities.shuffle(rng);
            Tour::from_permutation(cities)
        })
        .collect()
}

/// Overwrites the last `offspring.len()` tours of a sorted population.
///
/// # Panics
/// Panics if there are more offspring than tours.
pub fn replace_worst(population: &mut [Tour], offspring: Vec<Tour>) {
    assert!(
        offspring.len() <= population.len(),
        "more offspring ({}) than population slots ({})",
        offspring.len(),
        population.len()
    );
    let start = population.len() - offspring.len();
    for (slot, child) in population[start..].iter_mut().zip(offspring) {
        *slot = child;
    }
}

/// The lowest-fitness individual, or `None` for an empty population.
pub fn best<I: Individual>(population: &[I]) -> Option<&I> {
    population.iter().min_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(Ordering::Equal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_population_is_valid() {
        let codec = CityCodec::default();
        let mut rng = create_rng(42);
        let population = random_population(100, &codec, &mut rng);

        assert_eq!(population.len(), 100);
        assert!(population.iter().all(|t| t.is_permutation(&codec)));
        assert!(population.iter().all(|t| !t.is_evaluated()));
        // 36! orderings: collisions mean the shuffle is broken
        assert_ne!(population[0], population[1]);
    }

    #[test]
    fn test_random_population_reproducible() {
        let codec = CityCodec::new(12).unwrap();
        let a = random_population(10, &codec, &mut create_rng(5));
        let b = random_population(10, &codec, &mut create_rng(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_replace_worst_keeps_best() {
        let codec = CityCodec::new(3).unwrap();
        let mut population: Vec<Tour> = ["ABC", "BCA", "CAB", "ACB"]
            .iter()
            .map(|s| Tour::parse(s, &codec).unwrap())
            .collect();
        let offspring = vec![
            Tour::parse("CBA", &codec).unwrap(),
            Tour::parse("BAC", &codec).unwrap(),
        ];

        replace_worst(&mut population, offspring);

        let shown: Vec<String> = population.iter().map(|t| t.to_string()).collect();
        assert_eq!(shown, ["ABC", "BCA", "CBA", "BAC"]);
    }

    #[test]
    #[should_panic(expected = "more offspring")]
    fn test_replace_worst_too_many_offspring() {
        let codec = CityCodec::new(2).unwrap();
        let mut population = vec![Tour::parse("AB", &codec).unwrap()];
        let offspring = vec![
            Tour::parse("AB", &codec).unwrap(),
            Tour::parse("BA", &codec).unwrap(),
        ];
        replace_worst(&mut population, offspring);
    }

    #[test]
    fn test_best() {
        let codec = CityCodec::new(2).unwrap();
        let mut a = Tour::parse("AB", &codec).unwrap();
        let mut b = Tour::parse("BA", &codec).unwrap();
        a.set_fitness(2.0);
        b.set_fitness(1.0);
        let population = vec![a, b];
        assert_eq!(best(&population).unwrap().to_string(), "BA");
        assert!(best::<Tour>(&[]).is_none());
    }
}
