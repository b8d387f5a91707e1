//! Dense haversine distance matrix.

use super::city::City;
use super::distance::haversine;

/// A dense n×n distance matrix stored in row-major order.
///
/// # Examples
///
/// ```
/// use u_tsp_anneal::geo::{City, DistanceMatrix};
///
/// let cities = vec![
///     City::new("a", 0.0, 0.0),
///     City::new("b", 1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert_eq!(dm.size(), 2);
/// assert_eq!(dm.get(0, 1), dm.get(1, 0));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a zero matrix of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes great-circle distances between every pair of cities.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine(&cities[i], &cities[j]);
                dm.data[i * n + j] = d;
                dm.data[j * n + i] = d;
            }
        }
        dm
    }

    /// Distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Open-path length of `tour`; same result as
    /// [`path_length`](super::path_length) without recomputing trigonometry.
    pub fn path_length(&self, tour: &[usize]) -> f64 {
        tour.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::path_length;

    fn cities() -> Vec<City> {
        vec![
            City::new("Seattle", 47.6062, -122.3321),
            City::new("Portland", 45.5152, -122.6784),
            City::new("Boise", 43.6150, -116.2023),
            City::new("Spokane", 47.6588, -117.4260),
        ]
    }

    #[test]
    fn test_matrix_symmetric_zero_diagonal() {
        let dm = DistanceMatrix::from_cities(&cities());
        for i in 0..dm.size() {
            assert_eq!(dm.get(i, i), 0.0);
            for j in 0..dm.size() {
                assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
    }

    #[test]
    fn test_matrix_path_matches_direct() {
        let cities = cities();
        let dm = DistanceMatrix::from_cities(&cities);
        let tour = [2, 0, 3, 1];
        assert!((dm.path_length(&tour) - path_length(&tour, &cities)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_matrix() {
        let dm = DistanceMatrix::from_cities(&[]);
        assert_eq!(dm.size(), 0);
        assert_eq!(dm.path_length(&[]), 0.0);
    }
}
