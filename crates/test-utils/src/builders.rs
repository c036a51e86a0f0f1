#![allow(dead_code)]

use courseplan::catalogue::{CatalogueRecord, StaticCatalogue};
use courseplan::config::{PlanFile, RawPlanFile};
use courseplan::types::CourseId;

/// Builder for `StaticCatalogue` to simplify test setup.
pub struct CatalogueBuilder {
    catalogue: StaticCatalogue,
}

impl CatalogueBuilder {
    pub fn new() -> Self {
        Self {
            catalogue: StaticCatalogue::new(),
        }
    }

    /// Offered course with raw prerequisite text (`""` for none).
    pub fn course(mut self, id: &str, prerequisites: &str) -> Self {
        self.catalogue
            .insert(CourseId::new(id), CatalogueRecord::offered(prerequisites));
        self
    }

    /// Course that exists but has not been offered recently.
    pub fn retired(mut self, id: &str) -> Self {
        self.catalogue.insert(
            CourseId::new(id),
            CatalogueRecord {
                offered: false,
                ..CatalogueRecord::offered("")
            },
        );
        self
    }

    pub fn build(self) -> StaticCatalogue {
        self.catalogue
    }
}

impl Default for CatalogueBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The I&C SCI 31 -> 32 -> 33 chain plus a couple of neighbours.
pub fn ics_catalogue() -> StaticCatalogue {
    CatalogueBuilder::new()
        .course("I&C SCI 31", "")
        .course("I&C SCI 32", "I&C SCI 31")
        .course("I&C SCI 33", "I&C SCI 32 or I&C SCI 31")
        .course("I&C SCI 6B", "")
        .course("I&C SCI 6D", "I&C SCI 6B")
        .course("I&C SCI 46", "I&C SCI 45C or I&C SCI 33")
        .course("MATH 2B", "MATH 2A")
        .course(
            "COMPSCI 161",
            "I&C SCI 46 and I&C SCI 6B and I&C SCI 6D and MATH 2B",
        )
        .build()
}

/// Builder for validated `PlanFile`s.
pub struct PlanFileBuilder {
    raw: RawPlanFile,
}

impl PlanFileBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawPlanFile::default(),
        }
    }

    pub fn course(mut self, id: &str) -> Self {
        self.raw.plan.courses.push(id.to_string());
        self
    }

    pub fn max_concurrent_lookups(mut self, n: usize) -> Self {
        self.raw.config.max_concurrent_lookups = n;
        self
    }

    pub fn concurrent_build(mut self, val: bool) -> Self {
        self.raw.config.concurrent_build = val;
        self
    }

    pub fn build(self) -> PlanFile {
        PlanFile::try_from(self.raw).expect("Failed to build valid plan from builder")
    }
}

impl Default for PlanFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
