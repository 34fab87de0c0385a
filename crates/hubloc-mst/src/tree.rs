use hubloc_core::{Coordinate, WeightedPoint};
use serde::Serialize;

pub const HUB_NAME: &str = "Hub";

/// A tree vertex: the synthetic hub or an index into the place list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Vertex {
    Hub,
    Place(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Edge {
    pub from: Vertex,
    pub to: usize,
    pub weight: f64,
}

/// Spanning tree rooted at the hub. Vertices and edges are kept in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    pub root: Coordinate,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub weight: f64,
}

impl Tree {
    pub fn rooted(root: Coordinate) -> Self {
        Self {
            root,
            vertices: vec![Vertex::Hub],
            edges: Vec::new(),
            weight: 0.0,
        }
    }

    pub(crate) fn push(&mut self, edge: Edge) {
        self.vertices.push(Vertex::Place(edge.to));
        self.weight += edge.weight;
        self.edges.push(edge);
    }

    /// True when the tree covers `num_points` places exactly once each and
    /// every edge starts at a vertex that was added before its destination.
    pub fn is_spanning(&self, num_points: usize) -> bool {
        if self.edges.len() != num_points || self.vertices.len() != num_points + 1 {
            return false;
        }
        if self.vertices.first() != Some(&Vertex::Hub) {
            return false;
        }

        let mut seen = vec![false; num_points];
        for (slot, edge) in self.edges.iter().enumerate() {
            if edge.to >= num_points || seen[edge.to] {
                return false;
            }
            // vertices[slot + 1] is this edge's destination
            if self.vertices[slot + 1] != Vertex::Place(edge.to) {
                return false;
            }
            let source_known = match edge.from {
                Vertex::Hub => true,
                Vertex::Place(i) => i < num_points && seen[i],
            };
            if !source_known {
                return false;
            }
            seen[edge.to] = true;
        }
        true
    }

    pub fn vertex_name<'p>(&self, vertex: Vertex, points: &'p [WeightedPoint]) -> &'p str {
        match vertex {
            Vertex::Hub => HUB_NAME,
            Vertex::Place(i) => points.get(i).map_or("?", |p| p.name.as_str()),
        }
    }

    pub fn report(&self, points: &[WeightedPoint]) -> TreeReport {
        TreeReport {
            vertices: self
                .vertices
                .iter()
                .map(|&v| self.vertex_name(v, points).to_string())
                .collect(),
            edges: self
                .edges
                .iter()
                .map(|e| NamedEdge {
                    source: self.vertex_name(e.from, points).to_string(),
                    destination: self.vertex_name(Vertex::Place(e.to), points).to_string(),
                    weight: e.weight,
                })
                .collect(),
            total_weight: self.weight,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NamedEdge {
    pub source: String,
    pub destination: String,
    pub weight: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TreeReport {
    pub vertices: Vec<String>,
    pub edges: Vec<NamedEdge>,
    pub total_weight: f64,
}
