//! Cycle detection over a directed graph.

use std::collections::HashMap;

use tracing::trace;

use super::{DirectedGraph, Vertex};

/// One detected cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    /// Path of the depth-first walk when the repeat was found, root first.
    pub cycle: Vec<Vertex>,
    /// The vertex the last element of `cycle` points back to.
    pub next: Vertex,
}

impl Cycle {
    /// The edge that closes this cycle, or `None` when the path is empty.
    pub fn back_edge(&self) -> Option<(&str, &str)> {
        self.cycle
            .last()
            .map(|last| (last.as_str(), self.next.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CycleDetection {
    #[default]
    NotHaveCycle,
    HasCycle(Vec<Cycle>),
}

impl CycleDetection {
    pub fn has_cycle(&self) -> bool {
        matches!(self, Self::HasCycle(_))
    }

    pub fn cycles(&self) -> &[Cycle] {
        match self {
            Self::NotHaveCycle => &[],
            Self::HasCycle(cycles) => cycles,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    OnPath,
    Done,
}

/// Depth-first walk from each start vertex in turn, recording every edge
/// that points back into the current path. Removing all recorded back edges
/// leaves the graph acyclic.
pub(super) fn detect_cycles<'a>(
    graph: &'a DirectedGraph,
    starts: impl IntoIterator<Item = &'a str>,
) -> CycleDetection {
    let adjacency = graph.adjacency();
    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut cycles = Vec::new();

    for start in starts {
        if marks.contains_key(start) || !graph.contains(start) {
            continue;
        }

        marks.insert(start, Mark::OnPath);
        let mut frames: Vec<(&str, usize)> = vec![(start, 0)];

        while let Some((node, cursor)) = frames.last_mut() {
            let node = *node;
            let Some(&next) = adjacency.get(node).and_then(|n| n.get(*cursor)) else {
                marks.insert(node, Mark::Done);
                frames.pop();
                continue;
            };
            *cursor += 1;

            match marks.get(next) {
                Some(Mark::OnPath) => {
                    trace!(from = node, to = next, "back edge");
                    cycles.push(Cycle {
                        cycle: frames.iter().map(|(v, _)| v.to_string()).collect(),
                        next: next.to_string(),
                    });
                }
                Some(Mark::Done) => {}
                None => {
                    marks.insert(next, Mark::OnPath);
                    frames.push((next, 0));
                }
            }
        }
    }

    if cycles.is_empty() {
        CycleDetection::NotHaveCycle
    } else {
        CycleDetection::HasCycle(cycles)
    }
}
