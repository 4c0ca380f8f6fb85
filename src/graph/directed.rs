//! Directed graph value type.

use std::collections::{HashMap, HashSet, VecDeque};

use indexmap::{IndexMap, IndexSet};

use super::cycle::{CycleDetection, detect_cycles};
use super::{Edge, GraphError, Vertex, connected_component};

/// A directed graph. Vertices and edges keep insertion order, which makes
/// every query below deterministic.
///
/// Equality is structural: two graphs are equal when they hold the same
/// vertex set and the same edge set, regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    vertices: IndexSet<Vertex>,
    edges: IndexSet<Edge>,
}

impl DirectedGraph {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a graph containing `label`. Adding an existing vertex is a no-op.
    pub fn add_vertex(&self, label: &str) -> Self {
        let mut graph = self.clone();
        if !graph.vertices.contains(label) {
            graph.vertices.insert(label.to_string());
        }
        graph
    }

    /// Adds several vertices at once. Blank labels are ignored.
    pub fn add_vertices<I, S>(&self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = self.clone();
        for label in labels {
            let label = label.as_ref();
            if label.trim().is_empty() || graph.vertices.contains(label) {
                continue;
            }
            graph.vertices.insert(label.to_string());
        }
        graph
    }

    /// Returns a graph with the edge `from -> to`. Both vertices must already be present.
    pub fn direct_to(&self, from: &str, to: &str) -> Result<Self, GraphError> {
        for v in [from, to] {
            if !self.contains(v) {
                return Err(GraphError::MissingVertex(v.to_string()));
            }
        }

        let mut graph = self.clone();
        graph.edges.insert((from.to_string(), to.to_string()));
        Ok(graph)
    }

    /// Returns a graph without the edge `from -> to`. Missing edges are a no-op.
    pub fn remove_direction(&self, from: &str, to: &str) -> Self {
        let mut graph = self.clone();
        graph
            .edges
            .shift_remove(&(from.to_string(), to.to_string()));
        graph
    }

    /// Returns a graph holding the vertices and edges of both graphs.
    pub fn union(&self, other: &DirectedGraph) -> Self {
        let mut graph = self.clone();
        graph.vertices.extend(other.vertices.iter().cloned());
        graph.edges.extend(other.edges.iter().cloned());
        graph
    }

    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(String::as_str)
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().map(|(a, b)| (a.as_str(), b.as_str()))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, vertex: &str) -> bool {
        self.vertices.contains(vertex)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.contains(&(from.to_string(), to.to_string()))
    }

    /// Out-neighbours of `vertex`, sorted.
    pub fn adjacent(&self, vertex: &str) -> Vec<&str> {
        let mut next: Vec<&str> = self
            .edges()
            .filter(|(from, _)| *from == vertex)
            .map(|(_, to)| to)
            .collect();
        next.sort_unstable();
        next
    }

    /// Sorted out-neighbours of every vertex.
    pub(crate) fn adjacency(&self) -> HashMap<&str, Vec<&str>> {
        let mut adjacency: HashMap<&str, Vec<&str>> =
            self.vertices().map(|v| (v, Vec::new())).collect();
        for (from, to) in self.edges() {
            adjacency.entry(from).or_default().push(to);
        }
        for next in adjacency.values_mut() {
            next.sort_unstable();
        }
        adjacency
    }

    /// The weakly-connected component containing `vertex`, with the cycles
    /// found inside it. An unknown vertex yields an empty graph.
    pub fn subgraph_of(&self, vertex: &str) -> (DirectedGraph, CycleDetection) {
        if !self.contains(vertex) {
            return (DirectedGraph::empty(), CycleDetection::NotHaveCycle);
        }

        let component = connected_component(vertex, self.edges());
        let subgraph = self.induced(&component);

        // Start at the requested vertex so the reported paths begin there.
        let starts = std::iter::once(vertex).chain(subgraph.vertices());
        let detection = detect_cycles(&subgraph, starts);

        (subgraph, detection)
    }

    /// Vertices reachable from `vertex` along edge direction, `vertex` included.
    pub fn reachable_from(&self, vertex: &str) -> DirectedGraph {
        if !self.contains(vertex) {
            return DirectedGraph::empty();
        }

        let adjacency = self.adjacency();
        let mut seen: HashSet<&str> = HashSet::from([vertex]);
        let mut queue: VecDeque<&str> = VecDeque::from([vertex]);
        while let Some(v) = queue.pop_front() {
            for &next in adjacency.get(v).into_iter().flatten() {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        self.induced(&seen)
    }

    /// Cycles of the whole graph.
    pub fn cycles(&self) -> CycleDetection {
        detect_cycles(self, self.vertices())
    }

    /// Longest distance of each vertex from a root (a vertex with no incoming edge).
    ///
    /// Vertices on a cycle, or downstream of one, have no depth and are left out.
    pub fn depths(&self) -> IndexMap<&str, usize> {
        let mut in_degree: HashMap<&str, usize> = self.vertices().map(|v| (v, 0)).collect();
        for (_, to) in self.edges() {
            *in_degree.entry(to).or_insert(0) += 1;
        }

        let adjacency = self.adjacency();
        let mut candidate: HashMap<&str, usize> = HashMap::new();
        let mut settled: HashMap<&str, usize> = HashMap::new();
        let mut queue: VecDeque<&str> = self
            .vertices()
            .filter(|v| in_degree.get(v).copied() == Some(0))
            .collect();

        while let Some(v) = queue.pop_front() {
            let depth = candidate.get(v).copied().unwrap_or(0);
            settled.insert(v, depth);

            for &next in adjacency.get(v).into_iter().flatten() {
                let entry = candidate.entry(next).or_insert(0);
                *entry = (*entry).max(depth + 1);

                if let Some(degree) = in_degree.get_mut(next) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(next);
                    }
                }
            }
        }

        self.vertices()
            .filter_map(|v| settled.get(v).map(|&depth| (v, depth)))
            .collect()
    }

    pub fn depth_of(&self, vertex: &str) -> Option<usize> {
        self.depths().get(vertex).copied()
    }

    /// Vertices whose depth equals `depth`, in insertion order.
    pub fn level_at(&self, depth: usize) -> Vec<&str> {
        self.depths()
            .into_iter()
            .filter(|&(_, d)| d == depth)
            .map(|(v, _)| v)
            .collect()
    }

    /// Number of depth levels, 0 for an empty graph.
    pub fn max_depth(&self) -> usize {
        self.depths().values().max().map_or(0, |d| d + 1)
    }

    /// The subgraph on `keep`, with every edge between kept vertices.
    fn induced(&self, keep: &HashSet<&str>) -> DirectedGraph {
        DirectedGraph {
            vertices: self
                .vertices
                .iter()
                .filter(|v| keep.contains(v.as_str()))
                .cloned()
                .collect(),
            edges: self
                .edges
                .iter()
                .filter(|(a, b)| keep.contains(a.as_str()) && keep.contains(b.as_str()))
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(labels: &[&str]) -> DirectedGraph {
        let mut graph = DirectedGraph::empty().add_vertices(labels);
        for pair in labels.windows(2) {
            graph = graph.direct_to(pair[0], pair[1]).unwrap();
        }
        graph
    }

    #[test]
    fn test_empty_graph() {
        let graph = DirectedGraph::empty();
        assert!(graph.is_empty());
        assert_eq!(graph.max_depth(), 0);
        assert!(graph.level_at(0).is_empty());
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let graph = DirectedGraph::empty().add_vertex("a").add_vertex("a");
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_add_vertices_skips_blank_labels() {
        let graph = DirectedGraph::empty().add_vertices(["a", " ", "b", "a", ""]);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_operations_do_not_mutate_receiver() {
        let base = DirectedGraph::empty().add_vertices(["a", "b"]);
        let linked = base.direct_to("a", "b").unwrap();
        let unlinked = linked.remove_direction("a", "b");
        let bigger = base.add_vertex("c");

        assert_eq!(base.edge_count(), 0);
        assert_eq!(base.vertex_count(), 2);
        assert!(linked.has_edge("a", "b"));
        assert!(!unlinked.has_edge("a", "b"));
        assert_eq!(bigger.vertex_count(), 3);
        assert_eq!(unlinked, base);
    }

    #[test]
    fn test_direct_to_missing_vertex_fails() {
        let graph = DirectedGraph::empty().add_vertex("a");
        assert_eq!(
            graph.direct_to("a", "b"),
            Err(GraphError::MissingVertex("b".to_string()))
        );
        assert_eq!(
            graph.direct_to("x", "a"),
            Err(GraphError::MissingVertex("x".to_string()))
        );
    }

    #[test]
    fn test_remove_missing_direction_is_noop() {
        let graph = chain(&["a", "b"]);
        assert_eq!(graph.remove_direction("b", "a"), graph);
    }

    #[test]
    fn test_union() {
        let left = chain(&["a", "b"]);
        let right = chain(&["b", "c"]).add_vertex("d");
        let union = left.union(&right);

        assert_eq!(union.vertices().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
        assert!(union.has_edge("a", "b"));
        assert!(union.has_edge("b", "c"));
        assert_eq!(union.edge_count(), 2);
    }

    #[test]
    fn test_structural_equality_ignores_order() {
        let g1 = DirectedGraph::empty().add_vertices(["a", "b"]);
        let g2 = DirectedGraph::empty().add_vertices(["b", "a"]);
        assert_eq!(g1, g2);
    }

    #[test]
    fn test_adjacent_is_sorted() {
        let graph = DirectedGraph::empty()
            .add_vertices(["a", "c", "b"])
            .direct_to("a", "c")
            .unwrap()
            .direct_to("a", "b")
            .unwrap();
        assert_eq!(graph.adjacent("a"), vec!["b", "c"]);
        assert!(graph.adjacent("b").is_empty());
    }

    #[test]
    fn test_levels_of_chain() {
        let graph = chain(&["a", "b", "c"]);
        assert_eq!(graph.level_at(0), vec!["a"]);
        assert_eq!(graph.level_at(1), vec!["b"]);
        assert_eq!(graph.level_at(2), vec!["c"]);
        assert_eq!(graph.max_depth(), 3);
    }

    #[test]
    fn test_depth_is_longest_path() {
        // a -> b -> c and a -> c: c sits below b, not beside it.
        let graph = chain(&["a", "b", "c"]).direct_to("a", "c").unwrap();
        assert_eq!(graph.depth_of("c"), Some(2));
        assert_eq!(graph.level_at(1), vec!["b"]);
    }

    #[test]
    fn test_isolated_vertices_are_roots() {
        let graph = chain(&["a", "b"]).add_vertex("z");
        assert_eq!(graph.level_at(0), vec!["a", "z"]);
        assert_eq!(graph.max_depth(), 2);
    }

    #[test]
    fn test_subgraph_of_returns_weak_component() {
        let graph = DirectedGraph::empty()
            .add_vertices(["a", "b", "c", "x", "y"])
            .direct_to("a", "b")
            .unwrap()
            .direct_to("c", "b")
            .unwrap()
            .direct_to("x", "y")
            .unwrap();

        let (subgraph, detection) = graph.subgraph_of("c");
        assert_eq!(subgraph.vertices().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(subgraph.edge_count(), 2);
        assert_eq!(detection, CycleDetection::NotHaveCycle);
    }

    #[test]
    fn test_subgraph_of_unknown_vertex() {
        let (subgraph, detection) = chain(&["a", "b"]).subgraph_of("q");
        assert!(subgraph.is_empty());
        assert!(!detection.has_cycle());
    }

    #[test]
    fn test_subgraph_of_reports_cycle() {
        let graph = chain(&["a", "b", "c"]).direct_to("c", "a").unwrap();
        let (_, detection) = graph.subgraph_of("a");

        let cycles = detection.cycles();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].cycle, vec!["a", "b", "c"]);
        assert_eq!(cycles[0].next, "a");
        assert_eq!(cycles[0].back_edge(), Some(("c", "a")));
    }

    #[test]
    fn test_reachable_from_follows_direction() {
        let graph = chain(&["a", "b", "c"]).add_vertex("z").direct_to("z", "b").unwrap();
        let reachable = graph.reachable_from("b");
        assert_eq!(reachable.vertices().collect::<Vec<_>>(), vec!["b", "c"]);
        assert!(reachable.has_edge("b", "c"));
        assert_eq!(reachable.edge_count(), 1);
    }

    #[test]
    fn test_cyclic_vertices_have_no_depth() {
        let graph = chain(&["a", "b", "c"]).direct_to("c", "b").unwrap();
        assert_eq!(graph.depth_of("a"), Some(0));
        assert_eq!(graph.depth_of("b"), None);
        assert_eq!(graph.depth_of("c"), None);
    }
}
