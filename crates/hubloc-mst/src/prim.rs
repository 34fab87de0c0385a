use hubloc_core::{Coordinate, WeightedPoint};
use log::{debug, trace, warn};

use crate::context::DistanceContext;
use crate::tree::{Edge, Tree};

/// Places not yet in the tree, tracked by index.
#[derive(Clone, Debug)]
pub struct UnspannedSet {
    spanned: Vec<bool>,
    remaining: usize,
}

impl UnspannedSet {
    pub fn new(len: usize) -> Self {
        Self {
            spanned: vec![false; len],
            remaining: len,
        }
    }

    pub fn is_spanned(&self, index: usize) -> bool {
        self.spanned[index]
    }

    pub fn mark(&mut self, index: usize) {
        if !self.spanned[index] {
            self.spanned[index] = true;
            self.remaining -= 1;
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Unspanned indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.spanned
            .iter()
            .enumerate()
            .filter_map(|(i, &done)| (!done).then_some(i))
    }
}

/// Grows a spanning tree from `hub` over every place, one cheapest edge per round.
///
/// An edge into a city costs half its great-circle length. Each round scans
/// every (tree vertex, unspanned place) pair, tree vertices in insertion order
/// and places in index order, and keeps the first edge of minimal weight.
pub fn build_tree(hub: Coordinate, points: &[WeightedPoint]) -> Tree {
    let mut tree = Tree::rooted(hub);
    if points.is_empty() {
        warn!("no places given: tree holds only the hub");
        return tree;
    }

    let ctx = DistanceContext::new(&hub, points);
    let mut unspanned = UnspannedSet::new(points.len());
    debug!("growing spanning tree over {} places", points.len());

    while unspanned.remaining() > 0 {
        let Some(edge) = cheapest_crossing_edge(&tree, &unspanned, &ctx, points) else {
            break;
        };
        trace!(
            "round {}: {} -> {} ({:.3})",
            tree.edges.len() + 1,
            tree.vertex_name(edge.from, points),
            points[edge.to].name,
            edge.weight
        );
        unspanned.mark(edge.to);
        tree.push(edge);
    }

    debug!(
        "spanning tree done: {} edges, total weight {:.3}",
        tree.edges.len(),
        tree.weight
    );
    tree
}

fn cheapest_crossing_edge(
    tree: &Tree,
    unspanned: &UnspannedSet,
    ctx: &DistanceContext,
    points: &[WeightedPoint],
) -> Option<Edge> {
    let mut best: Option<Edge> = None;
    for &from in &tree.vertices {
        for to in unspanned.iter() {
            let weight = ctx.distance(from, to) * points[to].category.tree_discount();
            if best.map_or(true, |b| weight < b.weight) {
                best = Some(Edge { from, to, weight });
            }
        }
    }
    best
}
