//! Builds the acyclic issue graph from issues and relations.

use std::collections::HashSet;

use tracing::debug;

use crate::graph::{CycleDetection, DirectedGraph, GraphError};
use crate::model::{Issue, Relation};

/// One vertex per issue and one edge per relation whose endpoints are both
/// known issues. Relations to unknown issues are dropped.
pub fn build_issue_graph(
    issues: &[Issue],
    relations: &[Relation],
) -> Result<DirectedGraph, GraphError> {
    let graph = issues
        .iter()
        .fold(DirectedGraph::empty(), |graph, issue| graph.add_vertex(&issue.key));
    let keys: HashSet<&str> = graph.vertices().collect();

    let mut linked = graph.clone();
    for relation in relations {
        let (inward, outward) = (relation.inward_issue.as_str(), relation.outward_issue.as_str());
        if !keys.contains(inward) || !keys.contains(outward) {
            debug!(relation = %relation.id, inward, outward, "dropping relation to unknown issue");
            continue;
        }
        linked = linked.direct_to(inward, outward)?;
    }

    Ok(linked)
}

/// Cuts the back edge of every reported cycle. A record without a back edge is ignored.
pub fn correct_subgraph(subgraph: DirectedGraph, detection: &CycleDetection) -> DirectedGraph {
    detection
        .cycles()
        .iter()
        .fold(subgraph, |graph, cycle| match cycle.back_edge() {
            Some((from, to)) => {
                debug!(from, to, "cutting back edge");
                graph.remove_direction(from, to)
            }
            None => graph,
        })
}

/// Makes `graph` acyclic, keeping every vertex and removing only cycle-closing edges.
pub fn remove_cycles(graph: &DirectedGraph) -> DirectedGraph {
    graph.vertices().fold(DirectedGraph::empty(), |acyclic, vertex| {
        if acyclic.contains(vertex) {
            return acyclic;
        }
        let (subgraph, detection) = graph.subgraph_of(vertex);
        acyclic.union(&correct_subgraph(subgraph, &detection))
    })
}

/// Graph construction followed by cycle removal.
pub fn make_issue_graph(
    issues: &[Issue],
    relations: &[Relation],
) -> Result<DirectedGraph, GraphError> {
    let graph = build_issue_graph(issues, relations)?;
    let acyclic = remove_cycles(&graph);
    debug!(
        vertices = acyclic.vertex_count(),
        edges = acyclic.edge_count(),
        removed = graph.edge_count() - acyclic.edge_count(),
        "issue graph ready"
    );
    Ok(acyclic)
}
