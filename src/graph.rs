//! Immutable graph values.
//!
//! Every operation that changes a graph returns a new graph and leaves the
//! receiver untouched, so callers can keep earlier graphs around and compare
//! them structurally.

mod cycle;
mod directed;
mod undirected;

use std::collections::{HashMap, HashSet, VecDeque};

pub use cycle::{Cycle, CycleDetection};
pub use directed::DirectedGraph;
pub use undirected::{UndirectedGraph, is_same_undirected_graph};

/// Vertex label. The graph layer treats it as an opaque token.
pub type Vertex = String;

/// An ordered vertex pair.
pub type Edge = (Vertex, Vertex);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Vertex not in graph: {0}")]
    MissingVertex(String),
    #[error("Self edge is not allowed: {0}")]
    SelfEdge(String),
}

/// Vertices connected to `start` when edge direction is ignored, `start` included.
fn connected_component<'a>(
    start: &'a str,
    edges: impl Iterator<Item = (&'a str, &'a str)>,
) -> HashSet<&'a str> {
    let mut neighbours: HashMap<&str, Vec<&str>> = HashMap::new();
    for (a, b) in edges {
        neighbours.entry(a).or_default().push(b);
        neighbours.entry(b).or_default().push(a);
    }

    let mut seen: HashSet<&str> = HashSet::from([start]);
    let mut queue: VecDeque<&str> = VecDeque::from([start]);
    while let Some(v) = queue.pop_front() {
        for &next in neighbours.get(v).into_iter().flatten() {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connected_component_ignores_direction() {
        let edges = [("a", "b"), ("c", "b"), ("d", "e")];
        let component = connected_component("a", edges.into_iter());
        assert_eq!(component, HashSet::from(["a", "b", "c"]));
    }

    #[test]
    fn test_connected_component_of_isolated_vertex() {
        let component = connected_component("z", std::iter::empty());
        assert_eq!(component, HashSet::from(["z"]));
    }
}
