// src/dag/scheduler_step.rs

//! Step-by-step result types for the scheduler.

use crate::prereq::ScheduleWarning;
use crate::types::CourseId;

/// A course placed in the final order, with its 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledCourse {
    pub rank: usize,
    pub course: CourseId,
}

/// Structured result of a single scheduler step.
///
/// Useful for tests that drive the scheduler manually and want to see what
/// each removal unblocked.
#[derive(Debug, Clone)]
pub struct SchedulerStep {
    pub scheduled: ScheduledCourse,
    /// Unlisted-prerequisite warning for the scheduled course, if any.
    pub warning: Option<ScheduleWarning>,
    /// Courses whose last prerequisite was the scheduled course, in the order
    /// they were pushed onto the available stack.
    pub newly_available: Vec<CourseId>,
}

/// A complete ordering plus any warnings raised along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub order: Vec<ScheduledCourse>,
    pub warnings: Vec<ScheduleWarning>,
}

impl Schedule {
    /// Courses in scheduled order, without ranks.
    pub fn courses(&self) -> Vec<&CourseId> {
        self.order.iter().map(|s| &s.course).collect()
    }

    pub fn rank_of(&self, course: &CourseId) -> Option<usize> {
        self.order
            .iter()
            .find(|s| &s.course == course)
            .map(|s| s.rank)
    }
}
