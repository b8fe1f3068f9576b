//! Core types: the [`Individual`] contract and the [`Tour`] chromosome.

use crate::city::{City, CityCodec};
use crate::error::{Result, TspError};
use std::fmt;

/// A candidate solution carrying its own fitness value.
///
/// Lower fitness is better.
pub trait Individual: Clone + Send + Sync {
    /// Returns the current fitness of this individual.
    fn fitness(&self) -> f64;

    /// Sets the fitness of this individual.
    fn set_fitness(&mut self, fitness: f64);
}

/// A tour (chromosome): every city of the alphabet visited exactly once.
///
/// `fitness` holds the tour length from the last evaluation, or
/// `f64::INFINITY` if the tour has not been evaluated since it was built or
/// modified.
///
/// With the `serde` feature a tour is (de)serialized as its itinerary only;
/// deserialization goes through `TryFrom<Vec<City>>` and yields an
/// unevaluated tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<City>", into = "Vec<City>")
)]
pub struct Tour {
    itinerary: Vec<City>,
    fitness: f64,
}

impl Tour {
    /// Builds a tour, checking that `itinerary` is a permutation of the
    /// codec's alphabet.
    pub fn new(itinerary: Vec<City>, codec: &CityCodec) -> Result<Self> {
        check_permutation(&itinerary, codec)?;
        Ok(Self::from_permutation(itinerary))
    }

    /// Parses a tour from its symbols, e.g. `"ABCD"`.
    pub fn parse(symbols: &str, codec: &CityCodec) -> Result<Self> {
        Self::new(codec.parse(symbols)?, codec)
    }

    /// Wraps an itinerary already known to be a valid permutation.
    pub(crate) fn from_permutation(itinerary: Vec<City>) -> Self {
        Self {
            itinerary,
            fitness: f64::INFINITY,
        }
    }

    /// The ordered cities of this tour.
    pub fn itinerary(&self) -> &[City] {
        &self.itinerary
    }

    /// Mutable access for in-place swaps.
    ///
    /// Exposed as a slice so the length stays fixed.
    pub(crate) fn itinerary_mut(&mut self) -> &mut [City] {
        &mut self.itinerary
    }

    /// Whether the tour has been evaluated since it was last changed.
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_finite()
    }

    pub(crate) fn invalidate(&mut self) {
        self.fitness = f64::INFINITY;
    }

    /// Whether the itinerary is a permutation of the codec's alphabet.
    pub fn is_permutation(&self, codec: &CityCodec) -> bool {
        check_permutation(&self.itinerary, codec).is_ok()
    }
}

impl Individual for Tour {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Validates against the alphabet of the first `itinerary.len()` cities.
impl TryFrom<Vec<City>> for Tour {
    type Error = TspError;

    fn try_from(itinerary: Vec<City>) -> Result<Self> {
        let codec = CityCodec::new(itinerary.len())?;
        Tour::new(itinerary, &codec)
    }
}

impl From<Tour> for Vec<City> {
    fn from(tour: Tour) -> Self {
        tour.itinerary
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for city in &self.itinerary {
            write!(f, "{city}")?;
        }
        Ok(())
    }
}

fn check_permutation(itinerary: &[City], codec: &CityCodec) -> Result<()> {
    let n = codec.cities();
    if itinerary.len() != n {
        return Err(TspError::MalformedTour(format!(
            "expected {n} cities, got {}",
            itinerary.len()
        )));
    }
    let mut seen = vec![false; n];
    for &city in itinerary {
        if !codec.contains(city) {
            return Err(TspError::CityOutOfRange {
                city: city.symbol(),
                cities: n,
            });
        }
        if std::mem::replace(&mut seen[city.index()], true) {
            return Err(TspError::MalformedTour(format!("city {city} visited twice")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_tour() {
        let codec = CityCodec::new(4).unwrap();
        let tour = Tour::parse("CADB", &codec).unwrap();
        assert_eq!(tour.to_string(), "CADB");
        assert!(!tour.is_evaluated());
        assert_eq!(tour.fitness(), f64::INFINITY);
        assert!(tour.is_permutation(&codec));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let codec = CityCodec::new(4).unwrap();
        assert!(matches!(
            Tour::parse("ABC", &codec),
            Err(TspError::MalformedTour(_))
        ));
        assert!(matches!(
            Tour::parse("ABCDA", &codec),
            Err(TspError::MalformedTour(_))
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let codec = CityCodec::new(4).unwrap();
        let err = Tour::parse("ABCA", &codec).unwrap_err();
        assert!(err.to_string().contains("visited twice"), "{err}");
    }

    #[test]
    fn test_rejects_city_outside_alphabet() {
        let codec = CityCodec::new(4).unwrap();
        let itinerary = CityCodec::default().parse("ABCZ").unwrap();
        assert_eq!(
            Tour::new(itinerary, &codec),
            Err(TspError::CityOutOfRange { city: 'Z', cities: 4 })
        );
    }

    #[test]
    fn test_fitness_roundtrip_and_invalidate() {
        let codec = CityCodec::new(3).unwrap();
        let mut tour = Tour::parse("BAC", &codec).unwrap();
        tour.set_fitness(12.5);
        assert!(tour.is_evaluated());
        assert_eq!(tour.fitness(), 12.5);
        tour.invalidate();
        assert!(!tour.is_evaluated());
    }

    #[test]
    fn test_try_from_itinerary_validates() {
        let full = CityCodec::default();
        let tour = Tour::try_from(full.parse("CABD").unwrap()).unwrap();
        assert_eq!(tour.to_string(), "CABD");
        assert!(!tour.is_evaluated());

        // 'E' lies outside the 4-city alphabet implied by the length
        assert_eq!(
            Tour::try_from(full.parse("ABCE").unwrap()),
            Err(TspError::CityOutOfRange { city: 'E', cities: 4 })
        );
        assert!(Tour::try_from(full.parse("ABBC").unwrap()).is_err());
        assert!(Tour::try_from(Vec::<City>::new()).is_err());

        let cities: Vec<City> = tour.into();
        assert_eq!(cities, full.parse("CABD").unwrap());
    }

    #[test]
    fn test_full_alphabet_tour() {
        let codec = CityCodec::default();
        let tour = Tour::parse("ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789", &codec).unwrap();
        assert_eq!(tour.itinerary().len(), 36);
        assert_eq!(tour.itinerary()[26].symbol(), '0');
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_deserialize_rejects_non_permutation() {
        let codec = CityCodec::new(3).unwrap();
        let tour = Tour::parse("CAB", &codec).unwrap();
        let json = serde_json::to_string(&tour).unwrap();
        let back: Tour = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tour);

        // city indices 0, 0, 1: duplicate
        assert!(serde_json::from_str::<Tour>("[0,0,1]").is_err());
        // index 5 is outside a 3-city alphabet
        assert!(serde_json::from_str::<Tour>("[0,1,5]").is_err());
    }
}
