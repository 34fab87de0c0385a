//! Shared model for single-hub placement over weighted places.
//!
//! Every angle inside this crate and its dependents is in radians; degrees
//! only exist at the loader boundary and in [`LatLonDegrees`] for output.

mod config;
mod cost;
mod error;
mod geo;
mod loader;
mod point;

pub use config::PlacementConfig;
pub use cost::{weighted_distance_sum, CityWeighting, CostSurface};
pub use error::{HubError, HubResult};
pub use geo::{great_circle_distance, EARTH_RADIUS_KM};
pub use loader::{load_places, parse_places};
pub use point::{Category, Coordinate, LatLonDegrees, WeightedPoint};
