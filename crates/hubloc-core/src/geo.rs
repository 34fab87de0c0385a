use crate::point::Coordinate;

/// Sphere radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6378.1;

#[inline(always)]
fn haversine(theta: f64) -> f64 {
    let s = (theta / 2.0).sin();
    s * s
}

/// Great-circle distance in kilometres between two coordinates given in radians.
#[inline(always)]
pub fn great_circle_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let hav = haversine(from.lat - to.lat)
        + from.lat.cos() * to.lat.cos() * haversine(from.lon - to.lon);
    // rounding can push antipodal pairs a hair past 1.0
    let clamped = hav.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * clamped.sqrt().asin()
}
