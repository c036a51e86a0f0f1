#![allow(dead_code)]

use std::collections::HashMap;

use courseplan::dag::{CourseGraph, Schedule};
use courseplan::types::CourseId;

pub use courseplan_test_utils::{ids, init_tracing};

/// Assert that every edge of `edges` is respected by `schedule`.
pub fn assert_respects_edges(schedule: &Schedule, edges: &[(CourseId, CourseId)]) {
    let rank: HashMap<&CourseId, usize> = schedule
        .order
        .iter()
        .map(|s| (&s.course, s.rank))
        .collect();

    for (u, v) in edges {
        let (ru, rv) = (rank[u], rank[v]);
        assert!(ru < rv, "{u} (rank {ru}) must come before {v} (rank {rv})");
    }
}

/// Owned copy of a graph's edge list.
pub fn owned_edges(graph: &CourseGraph) -> Vec<(CourseId, CourseId)> {
    graph
        .edges()
        .into_iter()
        .map(|(u, v)| (u.clone(), v.clone()))
        .collect()
}
