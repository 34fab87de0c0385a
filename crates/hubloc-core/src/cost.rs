use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HubError;
use crate::geo::great_circle_distance;
use crate::point::{Category, Coordinate, WeightedPoint};

/// How a place's category scales its population in the cost sum.
///
/// The modelling assumption is that cities carry twice the demand of towns
/// (`Doubled`). The reference program never applies that rule: both branches
/// of its category check test for towns, so cities drop out of the sum
/// entirely (`TownsOnly`). `Uniform` ignores the category altogether.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CityWeighting {
    #[default]
    Doubled,
    Uniform,
    TownsOnly,
}

impl CityWeighting {
    #[inline(always)]
    pub fn multiplier(self, category: Category) -> f64 {
        match (self, category) {
            (_, Category::Town) => 1.0,
            (Self::Doubled, Category::City) => 2.0,
            (Self::Uniform, Category::City) => 1.0,
            (Self::TownsOnly, Category::City) => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Doubled => "doubled",
            Self::Uniform => "uniform",
            Self::TownsOnly => "towns-only",
        }
    }
}

impl fmt::Display for CityWeighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CityWeighting {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "doubled" => Ok(Self::Doubled),
            "uniform" => Ok(Self::Uniform),
            "towns-only" | "towns_only" => Ok(Self::TownsOnly),
            other => Err(HubError::invalid_input(format!(
                "unknown city weighting '{other}' (expected doubled, uniform or towns-only)"
            ))),
        }
    }
}

/// Population-weighted sum of great-circle distances from `at` to every point.
pub fn weighted_distance_sum(
    at: &Coordinate,
    points: &[WeightedPoint],
    weighting: CityWeighting,
) -> f64 {
    points.iter().fold(0.0, |acc, p| {
        let distance = great_circle_distance(at, &p.position);
        acc + p.weight as f64 * weighting.multiplier(p.category) * distance
    })
}

/// The cost surface a climber walks on: a fixed point set plus a weighting policy.
#[derive(Clone, Copy, Debug)]
pub struct CostSurface<'a> {
    points: &'a [WeightedPoint],
    weighting: CityWeighting,
}

impl<'a> CostSurface<'a> {
    pub fn new(points: &'a [WeightedPoint], weighting: CityWeighting) -> Self {
        Self { points, weighting }
    }

    #[inline]
    pub fn cost_at(&self, at: &Coordinate) -> f64 {
        weighted_distance_sum(at, self.points, self.weighting)
    }

    pub fn points(&self) -> &'a [WeightedPoint] {
        self.points
    }

    pub fn weighting(&self) -> CityWeighting {
        self.weighting
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> Vec<WeightedPoint> {
        vec![
            WeightedPoint::from_degrees("Town", Category::Town, 100, 52.0, -1.0),
            WeightedPoint::from_degrees("City", Category::City, 100, 53.0, -1.0),
        ]
    }

    #[test]
    fn empty_point_set_costs_nothing() {
        let at = Coordinate::from_degrees(54.0, -2.0);
        let policies = [CityWeighting::Doubled, CityWeighting::Uniform, CityWeighting::TownsOnly];
        for weighting in policies {
            assert_eq!(weighted_distance_sum(&at, &[], weighting), 0.0);
        }
    }

    #[test]
    fn cost_is_non_negative() {
        let points = pair();
        let surface = CostSurface::new(&points, CityWeighting::Doubled);
        for (lat, lon) in [(50.0, -6.0), (52.5, -1.0), (58.0, 2.0), (-30.0, 120.0)] {
            assert!(surface.cost_at(&Coordinate::from_degrees(lat, lon)) >= 0.0);
        }
    }

    #[test]
    fn doubled_counts_cities_twice() {
        let points = pair();
        let at = points[0].position;
        let d = great_circle_distance(&at, &points[1].position);
        let cost = weighted_distance_sum(&at, &points, CityWeighting::Doubled);
        assert!((cost - 200.0 * d).abs() < 1e-9);
    }

    #[test]
    fn uniform_ignores_category() {
        let points = pair();
        let at = points[0].position;
        let d = great_circle_distance(&at, &points[1].position);
        let cost = weighted_distance_sum(&at, &points, CityWeighting::Uniform);
        assert!((cost - 100.0 * d).abs() < 1e-9);
    }

    // Reproduces the reference program, whose duplicated "Town" test means
    // cities never contribute. Standing on the town makes the cost exactly zero.
    #[test]
    fn towns_only_drops_cities_from_the_sum() {
        let points = pair();
        let cost = weighted_distance_sum(&points[0].position, &points, CityWeighting::TownsOnly);
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn weighting_parses_from_kebab_case() {
        assert_eq!("towns-only".parse::<CityWeighting>().unwrap(), CityWeighting::TownsOnly);
        assert_eq!("Doubled".parse::<CityWeighting>().unwrap(), CityWeighting::Doubled);
        assert!("triple".parse::<CityWeighting>().is_err());
    }
}
