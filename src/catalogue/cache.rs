// src/catalogue/cache.rs

//! Per-run memoization of raw prerequisite text.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::catalogue::{Catalogue, CatalogueError};
use crate::types::{CourseId, collapse_whitespace};

/// Raw prerequisite strings fetched during one planning run.
///
/// A course is looked up at most once. Failed lookups are remembered as
/// failures so they are not retried, and read back as "no prerequisites".
#[derive(Debug, Default, Clone)]
pub struct PrerequisiteCache {
    /// `None` marks a failed lookup.
    raw: HashMap<CourseId, Option<String>>,
}

impl PrerequisiteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, course: &CourseId) -> bool {
        self.raw.contains_key(course)
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Store the outcome of a lookup made elsewhere (e.g. on a worker).
    ///
    /// Text is stored whitespace-collapsed, the same form as `CourseId`.
    pub fn record(&mut self, course: CourseId, result: Result<String, CatalogueError>) {
        let entry = match result {
            Ok(raw) => {
                let text = collapse_whitespace(&raw);
                debug!(course = %course, raw = %text, "cached prerequisite text");
                Some(text)
            }
            Err(err) => {
                warn!(
                    course = %course,
                    error = %err,
                    "prerequisite lookup failed; assuming no prerequisites"
                );
                None
            }
        };
        self.raw.insert(course, entry);
    }

    /// Mark a course whose lookup never produced a result.
    pub fn record_lost(&mut self, course: CourseId) {
        warn!(course = %course, "prerequisite lookup lost; assuming no prerequisites");
        self.raw.insert(course, None);
    }

    /// Cached text for `course`, fetching it on first use. `None` when the
    /// lookup failed.
    pub fn raw_prerequisites<C>(&mut self, catalogue: &C, course: &CourseId) -> Option<&str>
    where
        C: Catalogue + ?Sized,
    {
        if !self.raw.contains_key(course) {
            let result = catalogue.raw_prerequisites(course);
            self.record(course.clone(), result);
        }
        self.raw.get(course).and_then(|entry| entry.as_deref())
    }

    /// Is `a` a prerequisite of `b`? True iff `a` appears in `b`'s raw
    /// prerequisite text. Lookup failures answer `false`.
    pub fn is_prerequisite<C>(&mut self, catalogue: &C, a: &CourseId, b: &CourseId) -> bool
    where
        C: Catalogue + ?Sized,
    {
        self.raw_prerequisites(catalogue, b)
            .is_some_and(|raw| raw.contains(a.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Counts lookups and fails for one course.
    struct Recording {
        calls: RefCell<Vec<CourseId>>,
        broken: CourseId,
    }

    impl Catalogue for Recording {
        fn is_valid_course(&self, _course: &CourseId) -> Result<bool, CatalogueError> {
            Ok(true)
        }

        fn raw_prerequisites(&self, course: &CourseId) -> Result<String, CatalogueError> {
            self.calls.borrow_mut().push(course.clone());
            if *course == self.broken {
                return Err(CatalogueError::Unavailable {
                    course: course.clone(),
                    reason: "timeout".into(),
                });
            }
            Ok(format!("{} PREREQ", course))
        }
    }

    #[test]
    fn each_course_is_fetched_once() {
        let catalogue = Recording {
            calls: RefCell::new(Vec::new()),
            broken: CourseId::new("BROKEN 1"),
        };
        let mut cache = PrerequisiteCache::new();
        let b = CourseId::new("B 1");

        assert!(cache.is_prerequisite(&catalogue, &CourseId::new("B 1 PREREQ"), &b));
        assert!(!cache.is_prerequisite(&catalogue, &CourseId::new("C 1"), &b));
        assert_eq!(cache.raw_prerequisites(&catalogue, &b), Some("B 1 PREREQ"));

        assert_eq!(catalogue.calls.borrow().len(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failed_lookup_fails_open_and_is_not_retried() {
        let broken = CourseId::new("BROKEN 1");
        let catalogue = Recording {
            calls: RefCell::new(Vec::new()),
            broken: broken.clone(),
        };
        let mut cache = PrerequisiteCache::new();

        assert!(!cache.is_prerequisite(&catalogue, &CourseId::new("A 1"), &broken));
        assert!(!cache.is_prerequisite(&catalogue, &CourseId::new("B 1"), &broken));
        assert_eq!(cache.raw_prerequisites(&catalogue, &broken), None);

        assert_eq!(catalogue.calls.borrow().len(), 1);
        assert!(cache.contains(&broken));
    }

    #[test]
    fn stored_text_matches_ids_across_line_breaks() {
        let mut cache = PrerequisiteCache::new();
        let b = CourseId::new("I&C SCI 32");
        cache.record(b.clone(), Ok("I&C  SCI\n31 or\tMATH 2A ".to_string()));

        let catalogue = Recording {
            calls: RefCell::new(Vec::new()),
            broken: CourseId::new("BROKEN 1"),
        };
        assert!(cache.is_prerequisite(&catalogue, &CourseId::new("I&C SCI 31"), &b));
        assert!(cache.is_prerequisite(&catalogue, &CourseId::new("MATH 2A"), &b));
        assert_eq!(
            cache.raw_prerequisites(&catalogue, &b),
            Some("I&C SCI 31 or MATH 2A")
        );
        assert!(catalogue.calls.borrow().is_empty());
    }
}
