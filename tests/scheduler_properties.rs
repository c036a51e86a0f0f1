mod common;

use std::collections::{BTreeSet, HashMap, HashSet};

use common::assert_respects_edges;
use courseplan::dag::{CourseGraph, Scheduler};
use courseplan::errors::CourseplanError;
use courseplan::prereq::PrerequisiteExpression;
use courseplan::types::CourseId;
use proptest::prelude::*;

fn course(i: usize) -> CourseId {
    CourseId::new(format!("DEPT {i}"))
}

// Acyclic by construction: an edge always runs from a lower to a higher
// index. The insertion order of vertices is shuffled independently.
fn dag_strategy(max_courses: usize) -> impl Strategy<Value = (Vec<usize>, Vec<(usize, usize)>)> {
    (1..=max_courses).prop_flat_map(|n| {
        let order = Just((0..n).collect::<Vec<_>>()).prop_shuffle();
        let edges = proptest::collection::vec((0..n, 0..n), 0..n * 2).prop_map(|pairs| {
            pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.min(b), a.max(b)))
                .collect::<Vec<_>>()
        });
        (order, edges)
    })
}

fn digraph_strategy(max_courses: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max_courses).prop_flat_map(|n| {
        (Just(n), proptest::collection::vec((0..n, 0..n), 0..n * 2))
    })
}

fn graph_of(order: &[usize], edges: &[(usize, usize)]) -> CourseGraph {
    let mut graph = CourseGraph::new(order.iter().map(|&i| course(i)));
    for &(a, b) in edges {
        graph.add_edge(&course(a), &course(b)).unwrap();
    }
    graph
}

fn no_expressions() -> HashMap<CourseId, PrerequisiteExpression> {
    HashMap::new()
}

proptest! {
    #[test]
    fn acyclic_graphs_schedule_every_course((order, edges) in dag_strategy(12)) {
        let graph = graph_of(&order, &edges);
        let working_set: Vec<CourseId> = order.iter().map(|&i| course(i)).collect();

        let schedule = Scheduler::new(graph, &working_set)
            .run(&mut no_expressions())
            .unwrap();

        prop_assert_eq!(schedule.order.len(), order.len());
        let ranks: Vec<usize> = schedule.order.iter().map(|s| s.rank).collect();
        prop_assert_eq!(ranks, (1..=order.len()).collect::<Vec<_>>());

        let distinct: HashSet<&CourseId> = schedule.courses().into_iter().collect();
        prop_assert_eq!(distinct.len(), order.len());

        let owned: Vec<(CourseId, CourseId)> =
            edges.iter().map(|&(a, b)| (course(a), course(b))).collect();
        assert_respects_edges(&schedule, &owned);
        prop_assert!(schedule.warnings.is_empty());
    }

    #[test]
    fn scheduling_fails_exactly_when_a_cycle_exists((n, edges) in digraph_strategy(8)) {
        let order: Vec<usize> = (0..n).collect();
        let graph = graph_of(&order, &edges);
        let working_set: Vec<CourseId> = order.iter().map(|&i| course(i)).collect();

        let mut reference = petgraph::graphmap::DiGraphMap::<usize, ()>::new();
        for i in 0..n {
            reference.add_node(i);
        }
        for &(a, b) in &edges {
            reference.add_edge(a, b, ());
        }
        let acyclic = petgraph::algo::toposort(&reference, None).is_ok();

        match Scheduler::new(graph, &working_set).run(&mut no_expressions()) {
            Ok(schedule) => {
                prop_assert!(acyclic);
                prop_assert_eq!(schedule.order.len(), n);
            }
            Err(CourseplanError::CyclicDependency(err)) => {
                prop_assert!(!acyclic);
                prop_assert!(!err.remaining.is_empty());
                prop_assert!(!err.cycles.is_empty());
                for cycle in &err.cycles {
                    for member in cycle {
                        prop_assert!(err.remaining.contains(member));
                    }
                }
            }
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }

    #[test]
    fn degrees_track_edge_mutations(
        n in 1..8usize,
        ops in proptest::collection::vec((any::<bool>(), 0..8usize, 0..8usize), 0..40),
    ) {
        let mut graph = CourseGraph::new((0..n).map(course));
        let mut model: BTreeSet<(usize, usize)> = BTreeSet::new();

        for (add, a, b) in ops {
            let (a, b) = (a % n, b % n);
            if add {
                graph.add_edge(&course(a), &course(b)).unwrap();
                model.insert((a, b));
            } else {
                let removed = graph.remove_edge(&course(a), &course(b));
                prop_assert_eq!(removed.is_ok(), model.remove(&(a, b)));
            }
        }

        prop_assert_eq!(graph.edge_count(), model.len());
        for i in 0..n {
            let out = model.iter().filter(|(a, _)| *a == i).count();
            let inn = model.iter().filter(|(_, b)| *b == i).count();
            prop_assert_eq!(graph.out_degree_of(&course(i)).unwrap(), out);
            prop_assert_eq!(graph.in_degree_of(&course(i)).unwrap(), inn);
        }
    }

    #[test]
    fn edgeless_graph_has_zero_degrees(n in 0..20usize) {
        let graph = CourseGraph::new((0..n).map(course));

        prop_assert_eq!(graph.vertex_count(), n);
        prop_assert_eq!(graph.edge_count(), 0);
        for i in 0..n {
            prop_assert_eq!(graph.in_degree_of(&course(i)).unwrap(), 0);
            prop_assert_eq!(graph.out_degree_of(&course(i)).unwrap(), 0);
        }
    }
}
