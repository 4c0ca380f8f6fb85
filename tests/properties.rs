//! Property-based invariant tests for the layout pipeline.
//!
//! Verifies:
//! 1. Cycle breaking leaves no cycle and keeps every issue
//! 2. Cycle breaking only removes edges
//! 3. Depth grows along every surviving edge
//! 4. Every issue is placed exactly once
//! 5. No two issues share a grid cell
//! 6. Same input produces the same output

use std::collections::HashSet;

use issue_graph_layout::issue_graph::{build_issue_graph, make_issue_graph};
use issue_graph_layout::layout::LayoutEngine;
use issue_graph_layout::model::{Issue, Relation};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_snapshot() -> impl Strategy<Value = (Vec<Issue>, Vec<Relation>)> {
    (1usize..12).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..24).prop_map(move |pairs| {
            let issues: Vec<Issue> = (0..n).map(|i| Issue::new(format!("I-{i}"))).collect();
            let relations: Vec<Relation> = pairs
                .into_iter()
                .enumerate()
                .map(|(id, (a, b))| Relation::new(id.to_string(), format!("I-{a}"), format!("I-{b}")))
                .collect();
            (issues, relations)
        })
    })
}

proptest! {
    #[test]
    fn acyclic_and_complete((issues, relations) in arb_snapshot()) {
        let graph = make_issue_graph(&issues, &relations).unwrap();

        prop_assert_eq!(graph.vertex_count(), issues.len());
        prop_assert!(!graph.cycles().has_cycle());
        for v in graph.vertices() {
            let (_, detection) = graph.subgraph_of(v);
            prop_assert!(!detection.has_cycle());
        }
    }

    #[test]
    fn only_edges_are_removed((issues, relations) in arb_snapshot()) {
        let original = build_issue_graph(&issues, &relations).unwrap();
        let acyclic = make_issue_graph(&issues, &relations).unwrap();

        for (from, to) in acyclic.edges() {
            prop_assert!(original.has_edge(from, to));
        }
    }

    #[test]
    fn depth_grows_along_edges((issues, relations) in arb_snapshot()) {
        let graph = make_issue_graph(&issues, &relations).unwrap();
        let depths = graph.depths();

        prop_assert_eq!(depths.len(), graph.vertex_count());
        for (from, to) in graph.edges() {
            prop_assert!(depths[to] > depths[from]);
        }
    }

    #[test]
    fn every_issue_placed_once((issues, relations) in arb_snapshot()) {
        let layout = LayoutEngine::default().run(&issues, &relations).unwrap();

        let placed: Vec<&str> = layout.issues.iter().map(|v| v.key()).collect();
        let unique: HashSet<&str> = placed.iter().copied().collect();
        prop_assert_eq!(placed.len(), issues.len());
        prop_assert_eq!(unique.len(), issues.len());
        prop_assert_eq!(layout.links.len(), relations.len());
    }

    #[test]
    fn no_shared_cells((issues, relations) in arb_snapshot()) {
        let layout = LayoutEngine::default().run(&issues, &relations).unwrap();

        let mut cells = HashSet::new();
        for v in &layout.issues {
            prop_assert!(cells.insert((v.meta.col_index, v.meta.row_index)));
        }
    }

    #[test]
    fn deterministic((issues, relations) in arb_snapshot()) {
        let engine = LayoutEngine::default();
        let first = engine.run(&issues, &relations).unwrap();
        let second = engine.run(&issues.clone(), &relations.clone()).unwrap();
        prop_assert_eq!(first, second);
    }
}
