//! City coordinates and Euclidean distance.

use crate::city::{City, CityCodec};
use crate::error::{Result, TspError};

/// Immutable table of integer `(x, y)` coordinates, one per city, indexed by
/// the city's dense index.
///
/// The table is read-only after construction and is shared by reference
/// across parallel evaluation and crossover work.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<[i32; 2]>", into = "Vec<[i32; 2]>")
)]
pub struct CoordinateTable {
    points: Vec<[i32; 2]>,
}

impl CoordinateTable {
    /// Builds a table with exactly one point per city of `codec`.
    pub fn new(points: Vec<[i32; 2]>, codec: &CityCodec) -> Result<Self> {
        if points.len() != codec.cities() {
            return Err(TspError::CoordinateCount {
                expected: codec.cities(),
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Number of cities covered.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the table has no points (never true for a constructed table).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Coordinates of `city`.
    ///
    /// # Panics
    /// Panics if the city lies beyond the table.
    #[inline]
    pub fn point(&self, city: City) -> [i32; 2] {
        self.points[city.index()]
    }

    /// Euclidean distance between two cities.
    #[inline]
    pub fn distance(&self, a: City, b: City) -> f64 {
        let [ax, ay] = self.point(a);
        let [bx, by] = self.point(b);
        let dx = f64::from(ax) - f64::from(bx);
        let dy = f64::from(ay) - f64::from(by);
        (dx * dx + dy * dy).sqrt()
    }
}

/// A table for the first `points.len()` cities of the alphabet.
impl TryFrom<Vec<[i32; 2]>> for CoordinateTable {
    type Error = TspError;

    fn try_from(points: Vec<[i32; 2]>) -> Result<Self> {
        let codec = CityCodec::new(points.len())?;
        Self::new(points, &codec)
    }
}

impl From<CoordinateTable> for Vec<[i32; 2]> {
    fn from(table: CoordinateTable) -> Self {
        table.points
    }
}

/// Euclidean distance between `a` and `b` looked up in `table`.
///
/// Recomputed on every call.
#[inline]
pub fn distance(a: City, b: City, table: &CoordinateTable) -> f64 {
    table.distance(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> (CityCodec, CoordinateTable) {
        let codec = CityCodec::new(4).unwrap();
        let table = CoordinateTable::new(vec![[0, 0], [1, 0], [1, 1], [0, 1]], &codec).unwrap();
        (codec, table)
    }

    #[test]
    fn test_wrong_point_count_rejected() {
        let codec = CityCodec::new(4).unwrap();
        let err = CoordinateTable::new(vec![[0, 0]; 3], &codec).unwrap_err();
        assert_eq!(
            err,
            TspError::CoordinateCount {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_unit_square_distances() {
        let (codec, table) = square();
        let c = |s: char| codec.city(s).unwrap();
        assert!((distance(c('A'), c('B'), &table) - 1.0).abs() < 1e-12);
        assert!((distance(c('A'), c('C'), &table) - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(distance(c('D'), c('D'), &table), 0.0);
    }

    #[test]
    fn test_symmetric_and_non_negative() {
        let (codec, table) = square();
        for a in codec.alphabet() {
            for b in codec.alphabet() {
                let d = distance(a, b, &table);
                assert!(d >= 0.0);
                assert_eq!(d, distance(b, a, &table));
            }
        }
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let codec = CityCodec::new(2).unwrap();
        let table =
            CoordinateTable::new(vec![[i32::MIN, 0], [i32::MAX, i32::MIN]], &codec).unwrap();
        let a = codec.city('A').unwrap();
        let b = codec.city('B').unwrap();
        let span = u32::MAX as f64;
        let expected = (span * span + (i32::MIN as f64).powi(2)).sqrt();
        assert!((table.distance(a, b) - expected).abs() < 1e-3);

        let flat = CoordinateTable::new(vec![[i32::MIN, 0], [i32::MAX, 0]], &codec).unwrap();
        assert_eq!(flat.distance(a, b), 4_294_967_295.0);
    }

    #[test]
    fn test_try_from_points_checks_alphabet_size() {
        let table = CoordinateTable::try_from(vec![[0i32, 0], [3, 4]]).unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert!(CoordinateTable::try_from(Vec::<[i32; 2]>::new()).is_err());
        assert!(CoordinateTable::try_from(vec![[0i32, 0]; 37]).is_err());

        let points: Vec<[i32; 2]> = table.clone().into();
        assert_eq!(points, vec![[0, 0], [3, 4]]);
    }

    #[test]
    fn test_negative_coordinates() {
        let codec = CityCodec::new(2).unwrap();
        let table = CoordinateTable::new(vec![[-3, -4], [0, 0]], &codec).unwrap();
        let a = codec.city('A').unwrap();
        let b = codec.city('B').unwrap();
        assert!((table.distance(a, b) - 5.0).abs() < 1e-12);
    }
}
