//! Grouping of the acyclic graph into islands.

use std::cmp::Reverse;

use tracing::debug;

use crate::graph::{DirectedGraph, UndirectedGraph, is_same_undirected_graph};

/// Splits `graph` into islands laid out as one block each, largest first.
///
/// Every root contributes the vertices reachable from it. Roots whose
/// undirected components are the same graph share an island, so two roots
/// converging on a common vertex end up together. Ties keep the order in
/// which the islands were first met.
pub fn group_islands(graph: &DirectedGraph) -> Vec<DirectedGraph> {
    let undirected = UndirectedGraph::from_directed(graph);
    let mut groups: Vec<(UndirectedGraph, DirectedGraph)> = Vec::new();

    for root in graph.level_at(0) {
        let reachable = graph.reachable_from(root);
        let component = undirected.subgraph_of(root);

        match groups
            .iter_mut()
            .find(|(other, _)| is_same_undirected_graph(other, &component))
        {
            Some((_, island)) => *island = island.union(&reachable),
            None => groups.push((component, reachable)),
        }
    }

    let mut islands: Vec<DirectedGraph> = groups.into_iter().map(|(_, island)| island).collect();
    islands.sort_by_key(|island| Reverse(island.vertex_count()));

    debug!(
        islands = islands.len(),
        sizes = ?islands.iter().map(DirectedGraph::vertex_count).collect::<Vec<_>>(),
        "grouped islands"
    );
    islands
}
