use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use courseplan::catalogue::{Catalogue, CatalogueError, StaticCatalogue};
use courseplan::types::CourseId;
use tracing::debug;

/// A catalogue wrapper that:
/// - records every raw-prerequisite lookup it serves
/// - fails lookups for a configurable set of courses, like a flaky network.
pub struct FakeCatalogue {
    inner: StaticCatalogue,
    failing: HashSet<CourseId>,
    lookups: Arc<Mutex<Vec<CourseId>>>,
}

impl FakeCatalogue {
    pub fn new(inner: StaticCatalogue, lookups: Arc<Mutex<Vec<CourseId>>>) -> Self {
        Self {
            inner,
            failing: HashSet::new(),
            lookups,
        }
    }

    /// Make every lookup of `course` fail.
    pub fn failing(mut self, course: &str) -> Self {
        self.failing.insert(CourseId::new(course));
        self
    }
}

impl Catalogue for FakeCatalogue {
    fn is_valid_course(&self, course: &CourseId) -> Result<bool, CatalogueError> {
        if self.failing.contains(course) {
            return Err(CatalogueError::Unavailable {
                course: course.clone(),
                reason: "simulated outage".to_string(),
            });
        }
        self.inner.is_valid_course(course)
    }

    fn raw_prerequisites(&self, course: &CourseId) -> Result<String, CatalogueError> {
        {
            let mut guard = self.lookups.lock().unwrap();
            guard.push(course.clone());
        }
        debug!(course = %course, "fake catalogue lookup");

        if self.failing.contains(course) {
            return Err(CatalogueError::Unavailable {
                course: course.clone(),
                reason: "simulated outage".to_string(),
            });
        }
        self.inner.raw_prerequisites(course)
    }
}
