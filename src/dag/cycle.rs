// src/dag/cycle.rs

//! Reporting of courses that cannot be ordered.

use std::collections::BTreeSet;

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use thiserror::Error;

use crate::dag::graph::CourseGraph;
use crate::types::{CourseId, join_ids};

/// The course set contains a prerequisite cycle.
///
/// `remaining` is everything the scheduler could not place: the courses on a
/// cycle plus anything downstream of one. `cycles` narrows that down to the
/// groups of courses that are mutually prerequisite.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "cyclic prerequisites: {} course(s) could not be ordered: {}",
    .remaining.len(),
    join_ids(.remaining)
)]
pub struct CyclicDependencyError {
    pub remaining: BTreeSet<CourseId>,
    pub cycles: Vec<Vec<CourseId>>,
}

impl CyclicDependencyError {
    /// Build the report from whatever is left in the graph once no vertex
    /// has in-degree zero.
    pub fn from_remainder(graph: &CourseGraph) -> Self {
        let remaining: BTreeSet<CourseId> = graph.vertices().into_iter().cloned().collect();

        // Edge direction: prerequisite -> dependent, same as CourseGraph.
        let mut view: DiGraphMap<&str, ()> = DiGraphMap::new();
        for v in graph.vertices() {
            view.add_node(v.as_str());
        }
        for (u, v) in graph.edges() {
            view.add_edge(u.as_str(), v.as_str(), ());
        }

        let mut cycles: Vec<Vec<CourseId>> = tarjan_scc(&view)
            .into_iter()
            .filter(|component| match component.as_slice() {
                [single] => view.contains_edge(*single, *single),
                _ => true,
            })
            .map(|component| {
                let mut members: Vec<CourseId> =
                    component.into_iter().map(CourseId::new).collect();
                members.sort();
                members
            })
            .collect();
        cycles.sort();

        Self { remaining, cycles }
    }

    /// Cycle groups rendered as `a, b`.
    pub fn describe_cycles(&self) -> Vec<String> {
        self.cycles.iter().map(|c| join_ids(c)).collect()
    }
}
