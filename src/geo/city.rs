//! Named geographic points.

use super::distance::haversine;

/// A named point on the globe, coordinates in degrees.
///
/// # Examples
///
/// ```
/// use u_tsp_anneal::geo::City;
///
/// let a = City::new("Denver", 39.7392, -104.9903);
/// assert_eq!(a.name(), "Denver");
/// assert_eq!(a.distance_to(&a), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl City {
    /// Creates a city. Coordinates are not re-validated here.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// City name as given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other` in miles.
    pub fn distance_to(&self, other: &City) -> f64 {
        haversine(self, other)
    }
}
