// src/dag/mod.rs

//! Prerequisite graph and scheduling.
//!
//! - [`graph`] holds the adjacency-list course graph with degree counters.
//! - [`builder`] fills a graph from pairwise catalogue questions.
//! - [`scheduler`] drains a graph into an order, detecting cycles.
//! - [`scheduler_step`] defines the step and result types.
//! - [`cycle`] describes courses that could not be ordered.

pub mod builder;
pub mod cycle;
pub mod graph;
pub mod scheduler;
pub mod scheduler_step;

pub use builder::{DependencyBuilder, build_concurrent};
pub use cycle::CyclicDependencyError;
pub use graph::CourseGraph;
pub use scheduler::Scheduler;
pub use scheduler_step::{Schedule, ScheduledCourse, SchedulerStep};
