// src/dag/scheduler.rs

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::dag::cycle::CyclicDependencyError;
use crate::dag::graph::CourseGraph;
use crate::dag::scheduler_step::{Schedule, ScheduledCourse, SchedulerStep};
use crate::errors::Result;
use crate::prereq::{ExpressionSource, UnlistedPrerequisiteDetector};
use crate::types::CourseId;

/// Drains a [`CourseGraph`] into a prerequisite-respecting order.
///
/// Courses with no remaining prerequisites sit on an *available* stack. Each
/// step pops the most recently unblocked course (LIFO), removes it from the
/// graph, records it, and pushes whatever that removal unblocked. Ties are
/// therefore broken by "most recently unblocked first", then by reverse
/// insertion order among courses unblocked together. The choice is arbitrary
/// but stable for a fixed input order, and callers may rely on it.
///
/// If the stack empties while courses remain, the remainder contains a
/// cycle and [`run`](Self::run) fails with [`CyclicDependencyError`].
#[derive(Debug)]
pub struct Scheduler<'w> {
    graph: CourseGraph,
    detector: UnlistedPrerequisiteDetector<'w>,
    available: Vec<CourseId>,
    queued: HashSet<CourseId>,
    next_rank: usize,
}

impl<'w> Scheduler<'w> {
    /// `working_set` is the user's full course list, used for warnings.
    pub fn new(graph: CourseGraph, working_set: &'w [CourseId]) -> Self {
        let available: Vec<CourseId> = graph
            .vertices()
            .into_iter()
            .filter(|v| graph.in_degree_of(v).is_ok_and(|d| d == 0))
            .cloned()
            .collect();
        let queued = available.iter().cloned().collect();

        debug!(?available, "scheduler: initial available courses");

        Self {
            graph,
            detector: UnlistedPrerequisiteDetector::new(working_set),
            available,
            queued,
            next_rank: 1,
        }
    }

    /// Courses not yet scheduled.
    pub fn remaining(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Snapshot of the available stack, bottom first.
    pub fn available(&self) -> &[CourseId] {
        &self.available
    }

    /// Schedule one course. Returns `Ok(None)` once the available stack is
    /// empty, whether or not courses remain.
    pub fn step(&mut self, expressions: &mut dyn ExpressionSource) -> Result<Option<SchedulerStep>> {
        let Some(course) = self.available.pop() else {
            return Ok(None);
        };
        self.queued.remove(&course);

        let successors: Vec<CourseId> = self.graph.edges_from(&course)?.iter().cloned().collect();
        self.graph.remove_vertex(&course)?;

        let scheduled = ScheduledCourse {
            rank: self.next_rank,
            course,
        };
        self.next_rank += 1;

        let warning = self
            .detector
            .check(&scheduled.course, expressions.expression_of(&scheduled.course));
        if let Some(ref w) = warning {
            debug!(
                course = %w.course,
                unsatisfied = ?w.rendered_groups(),
                "unlisted prerequisites"
            );
        }

        let mut newly_available: Vec<CourseId> = successors
            .into_iter()
            .filter(|s| self.graph.in_degree_of(s).is_ok_and(|d| d == 0))
            .filter(|s| !self.queued.contains(s))
            .collect();
        newly_available.sort_by_key(|s| self.graph.position_of(s));

        for s in &newly_available {
            self.queued.insert(s.clone());
            self.available.push(s.clone());
        }

        debug!(
            rank = scheduled.rank,
            course = %scheduled.course,
            ?newly_available,
            "scheduler: course scheduled"
        );

        Ok(Some(SchedulerStep {
            scheduled,
            warning,
            newly_available,
        }))
    }

    /// Drain the graph completely.
    pub fn run(mut self, expressions: &mut dyn ExpressionSource) -> Result<Schedule> {
        let mut schedule = Schedule::default();

        while let Some(step) = self.step(expressions)? {
            schedule.order.push(step.scheduled);
            if let Some(w) = step.warning {
                schedule.warnings.push(w);
            }
        }

        if self.graph.vertex_count() > 0 {
            let err = CyclicDependencyError::from_remainder(&self.graph);
            warn!(
                scheduled = schedule.order.len(),
                remaining = err.remaining.len(),
                cycles = ?err.describe_cycles(),
                "scheduler: prerequisite cycle; cannot order remaining courses"
            );
            return Err(err.into());
        }

        info!(
            courses = schedule.order.len(),
            warnings = schedule.warnings.len(),
            "scheduler: ordering complete"
        );
        Ok(schedule)
    }
}
