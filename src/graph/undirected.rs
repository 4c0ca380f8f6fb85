//! Undirected projection used to decide which vertices belong together.

use indexmap::IndexSet;

use super::{DirectedGraph, Edge, GraphError, Vertex, connected_component};

/// An undirected graph. Edges are stored with their endpoints sorted, so
/// `(a, b)` and `(b, a)` are the same edge and derived equality compares
/// vertex and edge sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    vertices: IndexSet<Vertex>,
    edges: IndexSet<Edge>,
}

fn normalize(a: &str, b: &str) -> Edge {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl UndirectedGraph {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The undirected projection of `graph`.
    pub fn from_directed(graph: &DirectedGraph) -> Self {
        Self {
            vertices: graph.vertices().map(str::to_string).collect(),
            edges: graph.edges().map(|(a, b)| normalize(a, b)).collect(),
        }
    }

    pub fn add_vertex(&self, label: &str) -> Self {
        let mut graph = self.clone();
        if !graph.vertices.contains(label) {
            graph.vertices.insert(label.to_string());
        }
        graph
    }

    pub fn add_vertices<I, S>(&self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .fold(self.clone(), |graph, label| graph.add_vertex(label.as_ref()))
    }

    /// Returns a graph with an edge between `a` and `b`. Both must be present and distinct.
    pub fn edge(&self, a: &str, b: &str) -> Result<Self, GraphError> {
        for v in [a, b] {
            if !self.vertices.contains(v) {
                return Err(GraphError::MissingVertex(v.to_string()));
            }
        }
        if a == b {
            return Err(GraphError::SelfEdge(a.to_string()));
        }

        let mut graph = self.clone();
        graph.edges.insert(normalize(a, b));
        Ok(graph)
    }

    /// The connected component containing `vertex`.
    pub fn subgraph_of(&self, vertex: &str) -> Self {
        if !self.vertices.contains(vertex) {
            return Self::empty();
        }

        let component = connected_component(vertex, self.edges());
        Self {
            vertices: self
                .vertices
                .iter()
                .filter(|v| component.contains(v.as_str()))
                .cloned()
                .collect(),
            edges: self
                .edges
                .iter()
                .filter(|(a, _)| component.contains(a.as_str()))
                .cloned()
                .collect(),
        }
    }

    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(String::as_str)
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().map(|(a, b)| (a.as_str(), b.as_str()))
    }

    pub fn contains(&self, vertex: &str) -> bool {
        self.vertices.contains(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Same vertices and same unordered edges.
pub fn is_same_undirected_graph(g1: &UndirectedGraph, g2: &UndirectedGraph) -> bool {
    g1 == g2
}
