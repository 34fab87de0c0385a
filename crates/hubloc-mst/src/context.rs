use hubloc_core::{great_circle_distance, Coordinate, WeightedPoint};

use crate::tree::Vertex;

/// Distances needed by one tree build, computed once up front.
pub struct DistanceContext {
    // Flattened place-to-place matrix for cache locality
    pub dist_mat: Vec<f64>,
    pub num_points: usize,
    // Hub-to-place row
    pub hub_row: Vec<f64>,
}

impl DistanceContext {
    pub fn new(hub: &Coordinate, points: &[WeightedPoint]) -> Self {
        let num_points = points.len();

        let mut dist_mat = vec![0.0; num_points * num_points];
        for i in 0..num_points {
            for j in 0..num_points {
                if i != j {
                    dist_mat[i * num_points + j] =
                        great_circle_distance(&points[i].position, &points[j].position);
                }
            }
        }

        let hub_row = points
            .iter()
            .map(|p| great_circle_distance(hub, &p.position))
            .collect();

        Self {
            dist_mat,
            num_points,
            hub_row,
        }
    }

    #[inline(always)]
    pub fn distance(&self, from: Vertex, to: usize) -> f64 {
        match from {
            Vertex::Hub => self.hub_row[to],
            Vertex::Place(i) => self.dist_mat[i * self.num_points + to],
        }
    }
}
