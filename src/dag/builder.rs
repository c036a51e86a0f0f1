// src/dag/builder.rs

//! Populating the course graph from pairwise prerequisite questions.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::catalogue::{Catalogue, PrerequisiteCache};
use crate::dag::graph::CourseGraph;
use crate::types::CourseId;

/// Builds a [`CourseGraph`] by asking, for every ordered pair `(c, d)` with
/// `c != d`, whether `c` is a prerequisite of `d`.
///
/// Answers go through a [`PrerequisiteCache`], so each course's catalogue
/// entry is fetched once no matter how many pairs mention it. A lookup that
/// fails counts as "not a prerequisite"; the build never aborts.
pub struct DependencyBuilder<'a, C: Catalogue + ?Sized> {
    catalogue: &'a C,
    cache: &'a mut PrerequisiteCache,
}

impl<'a, C: Catalogue + ?Sized> DependencyBuilder<'a, C> {
    pub fn new(catalogue: &'a C, cache: &'a mut PrerequisiteCache) -> Self {
        Self { catalogue, cache }
    }

    pub fn build(&mut self, courses: &[CourseId]) -> CourseGraph {
        let catalogue = self.catalogue;
        let cache = &mut *self.cache;
        apply_edges(courses, |c, d| cache.is_prerequisite(catalogue, c, d))
    }
}

/// Concurrent variant of [`DependencyBuilder::build`].
///
/// Catalogue lookups for courses not yet in `cache` run on the blocking pool,
/// at most `max_in_flight` at a time. All results are gathered into the cache
/// first; edges are then applied sequentially, so the graph itself is never
/// shared. Dropping the returned future cancels lookups still waiting for a
/// permit or a blocking thread; lookups already running finish and their
/// results are discarded.
pub async fn build_concurrent<C>(
    catalogue: Arc<C>,
    cache: &mut PrerequisiteCache,
    courses: &[CourseId],
    max_in_flight: usize,
) -> CourseGraph
where
    C: Catalogue + Send + Sync + 'static,
{
    let pending: Vec<CourseId> = unique(courses)
        .into_iter()
        .filter(|c| !cache.contains(c))
        .collect();

    info!(
        courses = courses.len(),
        lookups = pending.len(),
        max_in_flight,
        "fetching prerequisite text"
    );

    let limit = Arc::new(Semaphore::new(max_in_flight.max(1)));
    let mut lookups = JoinSet::new();

    for course in pending.iter().cloned() {
        let permit = match Arc::clone(&limit).acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => break,
        };
        let catalogue = Arc::clone(&catalogue);
        lookups.spawn_blocking(move || {
            let _permit = permit;
            let result = catalogue.raw_prerequisites(&course);
            (course, result)
        });
    }

    while let Some(joined) = lookups.join_next().await {
        match joined {
            Ok((course, result)) => cache.record(course, result),
            Err(err) => warn!(error = %err, "prerequisite lookup task did not complete"),
        }
    }

    for course in pending {
        if !cache.contains(&course) {
            cache.record_lost(course);
        }
    }

    // Every course is cached now, so no further catalogue calls happen here.
    apply_edges(courses, |c, d| cache.is_prerequisite(&*catalogue, c, d))
}

fn apply_edges<F>(courses: &[CourseId], mut is_prerequisite: F) -> CourseGraph
where
    F: FnMut(&CourseId, &CourseId) -> bool,
{
    let mut graph = CourseGraph::new(courses.iter().cloned());
    let courses = unique(courses);

    for c in &courses {
        for d in &courses {
            if c == d {
                continue;
            }
            if !is_prerequisite(c, d) {
                continue;
            }
            debug!(prerequisite = %c, course = %d, "adding prerequisite edge");
            if let Err(err) = graph.add_edge(c, d) {
                warn!(error = %err, "failed to add prerequisite edge; skipping");
            }
        }
    }

    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "dependency graph built"
    );
    graph
}

/// First occurrence of each course, order preserved.
fn unique(courses: &[CourseId]) -> Vec<CourseId> {
    let mut seen = HashSet::new();
    courses
        .iter()
        .filter(|c| seen.insert(*c))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{CatalogueRecord, StaticCatalogue};

    fn id(s: &str) -> CourseId {
        CourseId::new(s)
    }

    fn trilogy() -> StaticCatalogue {
        [
            (id("I&C SCI 31"), CatalogueRecord::offered("")),
            (id("I&C SCI 32"), CatalogueRecord::offered("I&C SCI 31")),
            (id("I&C SCI 33"), CatalogueRecord::offered("I&C SCI 32")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn chain_produces_two_edges() {
        let catalogue = trilogy();
        let mut cache = PrerequisiteCache::new();
        let courses = vec![id("I&C SCI 33"), id("I&C SCI 31"), id("I&C SCI 32")];

        let graph = DependencyBuilder::new(&catalogue, &mut cache).build(&courses);

        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains_edge(&id("I&C SCI 31"), &id("I&C SCI 32")));
        assert!(graph.contains_edge(&id("I&C SCI 32"), &id("I&C SCI 33")));
        assert!(!graph.contains_edge(&id("I&C SCI 31"), &id("I&C SCI 33")));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn unknown_courses_fail_open() {
        let catalogue = trilogy();
        let mut cache = PrerequisiteCache::new();
        let courses = vec![id("I&C SCI 31"), id("NOT REAL 1")];

        let graph = DependencyBuilder::new(&catalogue, &mut cache).build(&courses);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn empty_course_list_builds_empty_graph() {
        let catalogue = trilogy();
        let mut cache = PrerequisiteCache::new();
        let graph = DependencyBuilder::new(&catalogue, &mut cache).build(&[]);
        assert_eq!(graph.vertex_count(), 0);
    }

    #[tokio::test]
    async fn concurrent_build_matches_sequential_build() {
        let catalogue = Arc::new(trilogy());
        let courses = vec![id("I&C SCI 31"), id("I&C SCI 32"), id("I&C SCI 33")];

        let mut seq_cache = PrerequisiteCache::new();
        let sequential = DependencyBuilder::new(&*catalogue, &mut seq_cache).build(&courses);

        let mut par_cache = PrerequisiteCache::new();
        let concurrent = build_concurrent(Arc::clone(&catalogue), &mut par_cache, &courses, 2).await;

        assert_eq!(sequential.edges(), concurrent.edges());
        assert_eq!(par_cache.len(), 3);
    }
}
