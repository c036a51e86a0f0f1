// src/catalogue/static_catalogue.rs

//! In-memory catalogue, typically filled from the `[catalogue.*]` tables of
//! a plan file.

use std::collections::HashMap;

use crate::catalogue::{Catalogue, CatalogueError};
use crate::types::CourseId;

/// What the catalogue knows about one course.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogueRecord {
    pub title: Option<String>,
    /// Raw prerequisite text, e.g. `"I&C SCI 32 or I&C SCI 31"`.
    pub prerequisites: String,
    /// Courses not offered recently are rejected by validation.
    pub offered: bool,
}

impl CatalogueRecord {
    pub fn offered(prerequisites: impl Into<String>) -> Self {
        Self {
            title: None,
            prerequisites: prerequisites.into(),
            offered: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticCatalogue {
    records: HashMap<CourseId, CatalogueRecord>,
}

impl StaticCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, course: CourseId, record: CatalogueRecord) {
        self.records.insert(course, record);
    }

    pub fn record(&self, course: &CourseId) -> Option<&CatalogueRecord> {
        self.records.get(course)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(CourseId, CatalogueRecord)> for StaticCatalogue {
    fn from_iter<T: IntoIterator<Item = (CourseId, CatalogueRecord)>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Catalogue for StaticCatalogue {
    fn is_valid_course(&self, course: &CourseId) -> Result<bool, CatalogueError> {
        Ok(self.records.get(course).is_some_and(|r| r.offered))
    }

    fn raw_prerequisites(&self, course: &CourseId) -> Result<String, CatalogueError> {
        self.records
            .get(course)
            .map(|r| r.prerequisites.clone())
            .ok_or_else(|| CatalogueError::UnknownCourse(course.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_courses_are_invalid_and_fail_lookup() {
        let catalogue: StaticCatalogue = [(
            CourseId::new("I&C SCI 32"),
            CatalogueRecord::offered("I&C SCI 31"),
        )]
        .into_iter()
        .collect();

        let known = CourseId::new("I&C SCI 32");
        let unknown = CourseId::new("I&C SCI 99");

        assert_eq!(catalogue.is_valid_course(&known), Ok(true));
        assert_eq!(catalogue.is_valid_course(&unknown), Ok(false));
        assert_eq!(catalogue.raw_prerequisites(&known).unwrap(), "I&C SCI 31");
        assert_eq!(
            catalogue.raw_prerequisites(&unknown),
            Err(CatalogueError::UnknownCourse(unknown.clone()))
        );
    }

    #[test]
    fn unoffered_courses_are_invalid() {
        let mut catalogue = StaticCatalogue::new();
        let course = CourseId::new("MATH 1A");
        catalogue.insert(
            course.clone(),
            CatalogueRecord {
                offered: false,
                ..CatalogueRecord::offered("")
            },
        );
        assert_eq!(catalogue.is_valid_course(&course), Ok(false));
    }
}
