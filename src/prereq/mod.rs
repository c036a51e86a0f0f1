// src/prereq/mod.rs

//! Prerequisite text handling.
//!
//! - [`expression`] parses raw catalogue text into AND-of-OR groups.
//! - [`detector`] reports groups the user's plan leaves unsatisfied.

pub mod detector;
pub mod expression;

use std::collections::HashMap;

pub use detector::{ScheduleWarning, UnlistedPrerequisiteDetector};
pub use expression::{ExpressionError, OrGroup, PrerequisiteExpression};

use crate::types::CourseId;

/// Something that can hand the scheduler the parsed expression of a course.
pub trait ExpressionSource {
    fn expression_of(&mut self, course: &CourseId) -> &PrerequisiteExpression;
}

/// Fixed, pre-parsed expressions. Unknown courses have no prerequisites.
impl ExpressionSource for HashMap<CourseId, PrerequisiteExpression> {
    fn expression_of(&mut self, course: &CourseId) -> &PrerequisiteExpression {
        self.get(course)
            .unwrap_or_else(|| PrerequisiteExpression::empty_ref())
    }
}
