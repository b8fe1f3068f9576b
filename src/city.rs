//! City identifiers and the complementary-city codec.
//!
//! Cities are named by one of 36 symbols: `A`–`Z` followed by `0`–`9`.
//! Each symbol has a dense index (`A` = 0 … `Z` = 25, `0` = 26 … `9` = 35)
//! used to address the coordinate table.
//!
//! A [`CityCodec`] restricts the alphabet to the first `cities` symbols and
//! defines the complement pairing: index `n` pairs with `cities - 1 - n`.
//! Applying the complement to every city of a tour yields another valid tour,
//! which the crossover uses to produce its second offspring.

use crate::error::{Result, TspError};
use std::fmt;

/// Number of symbols in the full city alphabet.
pub const MAX_CITIES: usize = 36;

const LETTERS: usize = 26;

/// A city, stored as its dense index in the 36-symbol alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City(u8);

impl City {
    /// Parses a city symbol.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            'A'..='Z' => Ok(City(symbol as u8 - b'A')),
            '0'..='9' => Ok(City(symbol as u8 - b'0' + LETTERS as u8)),
            _ => Err(TspError::InvalidCity(symbol)),
        }
    }

    /// Builds a city from its dense index.
    pub fn from_index(index: usize) -> Result<Self> {
        if index < MAX_CITIES {
            Ok(City(index as u8))
        } else {
            Err(TspError::IndexOutOfRange(index))
        }
    }

    /// Dense index: letters 0..25, digits 26..35.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The symbol naming this city.
    pub fn symbol(self) -> char {
        let n = self.0;
        if (n as usize) < LETTERS {
            (b'A' + n) as char
        } else {
            (b'0' + n - LETTERS as u8) as char
        }
    }
}

impl TryFrom<char> for City {
    type Error = TspError;

    fn try_from(symbol: char) -> Result<Self> {
        City::from_symbol(symbol)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Maps symbols to indices within a `cities`-sized alphabet and computes
/// complementary cities.
///
/// # Examples
///
/// ```
/// use u_tsp_ga::{City, CityCodec};
///
/// let codec = CityCodec::default();
/// let a = City::from_symbol('A').unwrap();
/// assert_eq!(codec.complement(a).symbol(), '9');
/// assert_eq!(codec.index('0').unwrap(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityCodec {
    cities: usize,
}

impl Default for CityCodec {
    fn default() -> Self {
        Self { cities: MAX_CITIES }
    }
}

impl CityCodec {
    /// Creates a codec over the first `cities` symbols of the alphabet.
    pub fn new(cities: usize) -> Result<Self> {
        if cities == 0 || cities > MAX_CITIES {
            return Err(TspError::InvalidConfig(format!(
                "cities must be in 1..={MAX_CITIES}, got {cities}"
            )));
        }
        Ok(Self { cities })
    }

    /// Number of cities in this alphabet.
    #[inline]
    pub fn cities(&self) -> usize {
        self.cities
    }

    /// Dense index of a symbol, rejecting symbols outside this alphabet.
    pub fn index(&self, symbol: char) -> Result<usize> {
        self.city(symbol).map(City::index)
    }

    /// Parses a symbol into a city of this alphabet.
    pub fn city(&self, symbol: char) -> Result<City> {
        let city = City::from_symbol(symbol)?;
        if self.contains(city) {
            Ok(city)
        } else {
            Err(TspError::CityOutOfRange {
                city: symbol,
                cities: self.cities,
            })
        }
    }

    /// Whether `city` belongs to this alphabet.
    #[inline]
    pub fn contains(&self, city: City) -> bool {
        city.index() < self.cities
    }

    /// Complementary city: index `n` maps to `|n - (cities - 1)|`.
    ///
    /// The pairing is an involution, so it is a bijection over the alphabet.
    ///
    /// # Panics
    /// Panics if `city` is outside this alphabet.
    pub fn complement(&self, city: City) -> City {
        assert!(
            self.contains(city),
            "city {city} is outside a {}-city alphabet",
            self.cities
        );
        City((self.cities - 1 - city.index()) as u8)
    }

    /// All cities of this alphabet in index order.
    pub fn alphabet(&self) -> Vec<City> {
        (0..self.cities).map(|i| City(i as u8)).collect()
    }

    /// Parses a string of symbols into cities, e.g. `"ABCD"`.
    pub fn parse(&self, symbols: &str) -> Result<Vec<City>> {
        symbols.chars().map(|c| self.city(c)).collect()
    }
}
