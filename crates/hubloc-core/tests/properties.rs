use std::f64::consts::PI;

use hubloc_core::{
    great_circle_distance, parse_places, weighted_distance_sum, Category, CityWeighting, Coordinate,
    CostSurface, WeightedPoint, EARTH_RADIUS_KM,
};

const GB_SAMPLE: &str = include_str!("../../../data/gb_sample.csv");

fn grid() -> Vec<Coordinate> {
    let mut out = Vec::new();
    let mut lat = -90.0;
    while lat <= 90.0 {
        let mut lon = -180.0;
        while lon <= 180.0 {
            out.push(Coordinate::from_degrees(lat, lon));
            lon += 37.5;
        }
        lat += 22.5;
    }
    out
}

#[test]
fn distance_is_zero_symmetric_and_bounded_on_a_global_grid() {
    let points = grid();
    let max = PI * EARTH_RADIUS_KM;
    for a in &points {
        assert_eq!(great_circle_distance(a, a), 0.0);
        for b in &points {
            let ab = great_circle_distance(a, b);
            let ba = great_circle_distance(b, a);
            assert!(ab >= 0.0);
            assert!(ab <= max + 1e-9, "{ab} > {max}");
            assert!((ab - ba).abs() < 1e-9);
        }
    }
}

#[test]
fn sample_dataset_loads_in_radians() {
    let places = parse_places(GB_SAMPLE).unwrap();
    assert_eq!(places.len(), 22);
    assert!(places.iter().all(|p| p.position.lat.abs() < PI / 2.0));
    assert!(places.iter().all(|p| p.position.lat > 0.8 && p.position.lat < 1.0));
    let cities = places.iter().filter(|p| p.category == Category::City).count();
    assert_eq!(cities, 14);
}

#[test]
fn cost_over_sample_is_positive_and_weighting_ordered() {
    let places = parse_places(GB_SAMPLE).unwrap();
    let at = Coordinate::from_degrees(52.3, -1.2);
    let doubled = weighted_distance_sum(&at, &places, CityWeighting::Doubled);
    let uniform = weighted_distance_sum(&at, &places, CityWeighting::Uniform);
    let towns_only = weighted_distance_sum(&at, &places, CityWeighting::TownsOnly);
    assert!(doubled > uniform);
    assert!(uniform > towns_only);
    assert!(towns_only > 0.0);
}

// The three policies are the documented resolution of the reference
// program's category check; this pins down how far apart they are.
#[test]
fn policies_differ_only_in_city_terms() {
    let places = parse_places(GB_SAMPLE).unwrap();
    let at = Coordinate::from_degrees(53.0, -2.0);
    let city_part: f64 = places
        .iter()
        .filter(|p| p.category == Category::City)
        .map(|p| p.weight as f64 * great_circle_distance(&at, &p.position))
        .sum();
    let doubled = weighted_distance_sum(&at, &places, CityWeighting::Doubled);
    let towns_only = weighted_distance_sum(&at, &places, CityWeighting::TownsOnly);
    let rel = ((doubled - towns_only) - 2.0 * city_part).abs() / doubled;
    assert!(rel < 1e-12, "relative error {rel}");
}

#[test]
fn empty_surface_is_flat_zero() {
    let surface = CostSurface::new(&[], CityWeighting::Doubled);
    for c in grid() {
        assert_eq!(surface.cost_at(&c), 0.0);
    }
}

#[test]
fn single_point_surface_is_minimal_at_the_point() {
    let points = vec![WeightedPoint::from_degrees("A", Category::Town, 100, 54.0, -2.0)];
    let surface = CostSurface::new(&points, CityWeighting::Doubled);
    let at_point = surface.cost_at(&points[0].position);
    assert_eq!(at_point, 0.0);
    for c in grid() {
        assert!(surface.cost_at(&c) >= at_point);
    }
}
