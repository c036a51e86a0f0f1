// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::dag::cycle::CyclicDependencyError;
use crate::types::{CourseId, join_ids};

#[derive(Error, Debug)]
pub enum CourseplanError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unknown vertex: {0}")]
    UnknownVertex(CourseId),

    #[error("Unknown edge: {from} -> {to}")]
    UnknownEdge { from: CourseId, to: CourseId },

    #[error("Course already added: {0}")]
    DuplicateCourse(CourseId),

    #[error("Invalid or not recently offered course(s): {}", join_ids(.0))]
    InvalidCourses(Vec<CourseId>),

    #[error(transparent)]
    CyclicDependency(#[from] CyclicDependencyError),
}

pub type Result<T> = std::result::Result<T, CourseplanError>;
