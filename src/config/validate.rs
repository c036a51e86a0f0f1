// src/config/validate.rs

use std::collections::{BTreeMap, HashSet};

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::{CourseplanError, Result};
use crate::types::CourseId;

impl TryFrom<RawPlanFile> for PlanFile {
    type Error = CourseplanError;

    fn try_from(raw: RawPlanFile) -> std::result::Result<Self, Self::Error> {
        validate_global_config(&raw)?;
        let courses = parse_courses(&raw.plan.courses)?;
        validate_course_list(&courses)?;

        let mut catalogue = BTreeMap::new();
        for (key, entry) in raw.catalogue {
            let id = CourseId::parse(&key)
                .map_err(|e| CourseplanError::ConfigError(format!("[catalogue] {e}")))?;
            if catalogue.insert(id.clone(), entry).is_some() {
                return Err(CourseplanError::ConfigError(format!(
                    "[catalogue] course '{id}' is defined more than once"
                )));
            }
        }

        Ok(PlanFile::new_unchecked(raw.config, courses, catalogue))
    }
}

fn validate_global_config(cfg: &RawPlanFile) -> Result<()> {
    if cfg.config.max_concurrent_lookups == 0 {
        return Err(CourseplanError::ConfigError(
            "[config].max_concurrent_lookups must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn parse_courses(raw: &[String]) -> Result<Vec<CourseId>> {
    raw.iter()
        .map(|c| {
            CourseId::parse(c).map_err(|e| CourseplanError::ConfigError(format!("[plan].courses: {e}")))
        })
        .collect()
}

/// Non-empty, no course listed twice.
pub(crate) fn validate_course_list(courses: &[CourseId]) -> Result<()> {
    if courses.is_empty() {
        return Err(CourseplanError::ConfigError(
            "plan must list at least one course".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for course in courses {
        if !seen.insert(course) {
            return Err(CourseplanError::ConfigError(format!(
                "course '{course}' is listed more than once"
            )));
        }
    }
    Ok(())
}
