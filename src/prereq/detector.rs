// src/prereq/detector.rs

//! Warnings for prerequisites the user never listed.
//!
//! Example: the user plans `I&C SCI 33` and `I&C SCI 6B`. The catalogue says
//! 33 needs `I&C SCI 32 or I&C SCI 31`, neither of which was listed, so the
//! planner cannot vouch for that requirement and says so.

use std::fmt;

use crate::prereq::expression::{OrGroup, PrerequisiteExpression};
use crate::types::CourseId;

/// A scheduled course with OR-groups nothing in the plan satisfies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleWarning {
    pub course: CourseId,
    pub unsatisfied: Vec<OrGroup>,
}

impl ScheduleWarning {
    /// Each unsatisfied group as `"alt1 OR alt2"`.
    pub fn rendered_groups(&self) -> Vec<String> {
        self.unsatisfied.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ScheduleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WARNING: Unlisted Prerequisites For {}:", self.course)?;
        for (i, group) in self.unsatisfied.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "- {group}")?;
        }
        Ok(())
    }
}

/// Checks expressions against the user's full course set.
#[derive(Debug, Clone, Copy)]
pub struct UnlistedPrerequisiteDetector<'w> {
    working_set: &'w [CourseId],
}

impl<'w> UnlistedPrerequisiteDetector<'w> {
    pub fn new(working_set: &'w [CourseId]) -> Self {
        Self { working_set }
    }

    /// A group is satisfied when one of its alternatives mentions some
    /// course of the working set.
    pub fn is_satisfied(&self, group: &OrGroup) -> bool {
        self.working_set.iter().any(|course| group.mentions(course))
    }

    pub fn check(
        &self,
        course: &CourseId,
        expression: &PrerequisiteExpression,
    ) -> Option<ScheduleWarning> {
        let unsatisfied: Vec<OrGroup> = expression
            .groups()
            .iter()
            .filter(|group| !self.is_satisfied(group))
            .cloned()
            .collect();

        if unsatisfied.is_empty() {
            None
        } else {
            Some(ScheduleWarning {
                course: course.clone(),
                unsatisfied,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<CourseId> {
        raw.iter().copied().map(CourseId::new).collect()
    }

    #[test]
    fn warns_about_unlisted_or_group() {
        let plan = ids(&["I&C SCI 33", "I&C SCI 6B"]);
        let detector = UnlistedPrerequisiteDetector::new(&plan);
        let expr = PrerequisiteExpression::try_parse("I&C SCI 32 or I&C SCI 31").unwrap();

        let warning = detector.check(&plan[0], &expr).expect("warning expected");

        assert_eq!(warning.course, plan[0]);
        assert_eq!(warning.rendered_groups(), vec!["I&C SCI 32 OR I&C SCI 31"]);
        assert_eq!(
            warning.to_string(),
            "WARNING: Unlisted Prerequisites For I&C SCI 33:\n- I&C SCI 32 OR I&C SCI 31"
        );
    }

    #[test]
    fn only_unsatisfied_groups_are_reported() {
        let plan = ids(&["MATH 2B", "STATS 67"]);
        let detector = UnlistedPrerequisiteDetector::new(&plan);
        let expr = PrerequisiteExpression::try_parse("MATH 2B and STATS 7 or STATS 8").unwrap();

        let warning = detector.check(&plan[1], &expr).unwrap();
        assert_eq!(warning.rendered_groups(), vec!["STATS 7 OR STATS 8"]);
    }

    #[test]
    fn satisfied_or_empty_expressions_do_not_warn() {
        let plan = ids(&["I&C SCI 31", "I&C SCI 32"]);
        let detector = UnlistedPrerequisiteDetector::new(&plan);

        let expr = PrerequisiteExpression::try_parse("I&C SCI 31").unwrap();
        assert!(detector.check(&plan[1], &expr).is_none());
        assert!(detector.check(&plan[0], &PrerequisiteExpression::empty()).is_none());
    }
}
