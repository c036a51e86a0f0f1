// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalogue::{CatalogueRecord, StaticCatalogue};
use crate::types::CourseId;

/// Plan file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// max_concurrent_lookups = 8
/// concurrent_build = true
///
/// [plan]
/// courses = ["I&C SCI 31", "I&C SCI 32"]
///
/// [catalogue."I&C SCI 32"]
/// title = "Programming with Software Libraries"
/// prerequisites = "I&C SCI 31"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlanFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default)]
    pub plan: PlanSection,

    /// Keys are course ids, e.g. `"I&C SCI 32"`.
    #[serde(default)]
    pub catalogue: BTreeMap<String, CatalogueEntry>,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Upper bound on catalogue lookups in flight during a concurrent build.
    #[serde(default = "default_max_concurrent_lookups")]
    pub max_concurrent_lookups: usize,

    /// Build the graph with the concurrent builder (default) or sequentially.
    #[serde(default = "default_concurrent_build")]
    pub concurrent_build: bool,
}

fn default_max_concurrent_lookups() -> usize {
    8
}

fn default_concurrent_build() -> bool {
    true
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: default_max_concurrent_lookups(),
            concurrent_build: default_concurrent_build(),
        }
    }
}

/// `[plan]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanSection {
    /// Courses to order, as the user listed them.
    #[serde(default)]
    pub courses: Vec<String>,
}

/// `[catalogue."<course id>"]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogueEntry {
    #[serde(default)]
    pub title: Option<String>,

    /// Raw prerequisite text; empty means none.
    #[serde(default)]
    pub prerequisites: String,

    /// Whether the course has been offered recently.
    #[serde(default = "default_offered")]
    pub offered: bool,
}

fn default_offered() -> bool {
    true
}

/// A validated plan file.
///
/// Construct via `PlanFile::try_from(raw)`; see `config::validate`.
#[derive(Debug, Clone)]
pub struct PlanFile {
    pub config: ConfigSection,
    pub courses: Vec<CourseId>,
    pub catalogue: BTreeMap<CourseId, CatalogueEntry>,
}

impl PlanFile {
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        courses: Vec<CourseId>,
        catalogue: BTreeMap<CourseId, CatalogueEntry>,
    ) -> Self {
        Self {
            config,
            courses,
            catalogue,
        }
    }

    /// Catalogue backed by the `[catalogue.*]` tables.
    pub fn static_catalogue(&self) -> StaticCatalogue {
        self.catalogue
            .iter()
            .map(|(id, entry)| {
                (
                    id.clone(),
                    CatalogueRecord {
                        title: entry.title.clone(),
                        prerequisites: entry.prerequisites.clone(),
                        offered: entry.offered,
                    },
                )
            })
            .collect()
    }

    /// Replace the course list (e.g. from `--course` flags), keeping the
    /// same validation rules.
    pub fn with_courses(self, courses: Vec<CourseId>) -> crate::errors::Result<Self> {
        super::validate::validate_course_list(&courses)?;
        Ok(Self { courses, ..self })
    }
}
