//! Hub-rooted spanning tree for route planning.

mod context;
mod prim;
mod tree;

pub use context::DistanceContext;
pub use prim::{build_tree, UnspannedSet};
pub use tree::{Edge, NamedEdge, Tree, TreeReport, Vertex, HUB_NAME};
