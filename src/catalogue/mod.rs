// src/catalogue/mod.rs

//! Course catalogue boundary.
//!
//! The planner never talks to the network itself. It asks a [`Catalogue`]
//! whether a course exists and what its raw prerequisite text is; every
//! failure there is absorbed by [`cache::PrerequisiteCache`] so graph and
//! scheduler errors never carry catalogue problems.

pub mod cache;
pub mod static_catalogue;

use thiserror::Error;

pub use cache::PrerequisiteCache;
pub use static_catalogue::{CatalogueRecord, StaticCatalogue};

use crate::types::CourseId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("course not in catalogue: {0}")]
    UnknownCourse(CourseId),

    #[error("catalogue lookup for {course} failed: {reason}")]
    Unavailable { course: CourseId, reason: String },
}

/// Source of course facts.
///
/// Implementations may block (network, disk); the planner calls them from a
/// blocking context and memoizes per run.
pub trait Catalogue {
    fn is_valid_course(&self, course: &CourseId) -> Result<bool, CatalogueError>;

    /// Raw prerequisite text. An empty string means "no prerequisites".
    fn raw_prerequisites(&self, course: &CourseId) -> Result<String, CatalogueError>;
}
