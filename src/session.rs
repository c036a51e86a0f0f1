// src/session.rs

//! One planning run: the user's course list plus everything cached while
//! building and scheduling it.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalogue::{Catalogue, PrerequisiteCache};
use crate::dag::{CourseGraph, DependencyBuilder, Schedule, Scheduler, build_concurrent};
use crate::errors::{CourseplanError, Result};
use crate::prereq::{ExpressionSource, PrerequisiteExpression};
use crate::types::CourseId;

/// Explicit context for a single build → schedule run.
///
/// Holds the course list and the per-run caches (raw prerequisite text and
/// parsed expressions). Nothing outlives the session, so discarding it at
/// any point releases everything.
#[derive(Debug)]
pub struct PlanSession<C> {
    catalogue: Arc<C>,
    courses: Vec<CourseId>,
    prerequisites: PrerequisiteCache,
    expressions: HashMap<CourseId, PrerequisiteExpression>,
}

impl<C: Catalogue> PlanSession<C> {
    /// Start a session. A course listed twice is rejected.
    pub fn new<I>(catalogue: Arc<C>, courses: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<CourseId>,
    {
        let mut seen = HashSet::new();
        let mut list = Vec::new();
        for course in courses {
            let course = course.into();
            if !seen.insert(course.clone()) {
                return Err(CourseplanError::DuplicateCourse(course));
            }
            list.push(course);
        }

        debug!(courses = ?list, "plan session created");

        Ok(Self {
            catalogue,
            courses: list,
            prerequisites: PrerequisiteCache::new(),
            expressions: HashMap::new(),
        })
    }

    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    pub fn catalogue(&self) -> &C {
        &self.catalogue
    }

    /// Check every course against the catalogue. A failed lookup counts as
    /// invalid. All offenders are reported together.
    pub fn validate_courses(&self) -> Result<()> {
        let invalid: Vec<CourseId> = self
            .courses
            .iter()
            .filter(|course| match self.catalogue.is_valid_course(course) {
                Ok(valid) => !valid,
                Err(err) => {
                    warn!(course = %course, error = %err, "validity lookup failed; treating as invalid");
                    true
                }
            })
            .cloned()
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(CourseplanError::InvalidCourses(invalid))
        }
    }

    pub fn build_dependency_graph(&mut self) -> CourseGraph {
        DependencyBuilder::new(&*self.catalogue, &mut self.prerequisites).build(&self.courses)
    }

    /// Same graph as [`build_dependency_graph`](Self::build_dependency_graph),
    /// with catalogue lookups spread over at most `max_in_flight` workers.
    pub async fn build_dependency_graph_concurrent(&mut self, max_in_flight: usize) -> CourseGraph
    where
        C: Send + Sync + 'static,
    {
        build_concurrent(
            Arc::clone(&self.catalogue),
            &mut self.prerequisites,
            &self.courses,
            max_in_flight,
        )
        .await
    }

    /// Order the courses of `graph`, warning about unlisted prerequisites.
    pub fn schedule_courses(&mut self, graph: CourseGraph) -> Result<Schedule> {
        info!(courses = graph.vertex_count(), "scheduling courses");
        let scheduler = Scheduler::new(graph, &self.courses);
        let mut source = CatalogueExpressions {
            catalogue: &*self.catalogue,
            prerequisites: &mut self.prerequisites,
            parsed: &mut self.expressions,
        };
        scheduler.run(&mut source)
    }

    /// Parsed expression for `course`, fetched and parsed on first use.
    pub fn expression_of(&mut self, course: &CourseId) -> &PrerequisiteExpression {
        let mut source = CatalogueExpressions {
            catalogue: &*self.catalogue,
            prerequisites: &mut self.prerequisites,
            parsed: &mut self.expressions,
        };
        source.ensure_parsed(course);
        &self.expressions[course]
    }
}

/// Lazily parsed expressions backed by the session caches.
struct CatalogueExpressions<'s, C: ?Sized> {
    catalogue: &'s C,
    prerequisites: &'s mut PrerequisiteCache,
    parsed: &'s mut HashMap<CourseId, PrerequisiteExpression>,
}

impl<C: Catalogue + ?Sized> CatalogueExpressions<'_, C> {
    fn ensure_parsed(&mut self, course: &CourseId) {
        if self.parsed.contains_key(course) {
            return;
        }
        let raw = self
            .prerequisites
            .raw_prerequisites(self.catalogue, course)
            .unwrap_or("");
        let expr = PrerequisiteExpression::parse(course, raw);
        self.parsed.insert(course.clone(), expr);
    }
}

impl<C: Catalogue + ?Sized> ExpressionSource for CatalogueExpressions<'_, C> {
    fn expression_of(&mut self, course: &CourseId) -> &PrerequisiteExpression {
        self.ensure_parsed(course);
        &self.parsed[course]
    }
}
