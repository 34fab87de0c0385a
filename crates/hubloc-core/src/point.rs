use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HubError;

/// Settlement category of a place.
///
/// Cities and towns differ in two places: the cost surface may weight cities
/// more heavily (see [`crate::CityWeighting`]), and the spanning tree halves
/// the length of any edge that ends in a city.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    City,
    Town,
}

impl Category {
    /// Factor applied to an edge length when this category is the edge's destination.
    #[inline(always)]
    pub fn tree_discount(self) -> f64 {
        match self {
            Self::City => 0.5,
            Self::Town => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::City => "City",
            Self::Town => "Town",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("city") {
            Ok(Self::City)
        } else if trimmed.eq_ignore_ascii_case("town") {
            Ok(Self::Town)
        } else {
            Err(HubError::invalid_data(format!(
                "unknown category '{trimmed}' (expected City or Town)"
            )))
        }
    }
}

/// A position on the sphere. Both angles are in radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            lat: lat_deg.to_radians(),
            lon: lon_deg.to_radians(),
        }
    }

    pub fn to_degrees(self) -> LatLonDegrees {
        LatLonDegrees {
            latitude: self.lat.to_degrees(),
            longitude: self.lon.to_degrees(),
        }
    }
}

/// Presentation form of a coordinate, in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLonDegrees {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for LatLonDegrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

/// A named, population-weighted place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedPoint {
    pub name: String,
    pub category: Category,
    pub weight: u64,
    pub position: Coordinate,
}

impl WeightedPoint {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        weight: u64,
        position: Coordinate,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            weight,
            position,
        }
    }

    /// Builds a point from decimal degrees; the stored position is in radians.
    pub fn from_degrees(
        name: impl Into<String>,
        category: Category,
        weight: u64,
        lat_deg: f64,
        lon_deg: f64,
    ) -> Self {
        Self::new(name, category, weight, Coordinate::from_degrees(lat_deg, lon_deg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("City".parse::<Category>().unwrap(), Category::City);
        assert_eq!(" town ".parse::<Category>().unwrap(), Category::Town);
        assert!("Village".parse::<Category>().is_err());
    }

    #[test]
    fn degrees_round_trip_through_radians() {
        let p = WeightedPoint::from_degrees("Leeds", Category::City, 1, 53.8, -1.55);
        assert!((p.position.lat - 53.8_f64.to_radians()).abs() < 1e-15);
        let deg = p.position.to_degrees();
        assert!((deg.latitude - 53.8).abs() < 1e-12);
        assert!((deg.longitude + 1.55).abs() < 1e-12);
    }

    #[test]
    fn only_cities_get_the_tree_discount() {
        assert_eq!(Category::City.tree_discount(), 0.5);
        assert_eq!(Category::Town.tree_discount(), 1.0);
    }
}
