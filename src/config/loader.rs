// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::Result;

/// Read a plan file and deserialize it without semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawPlanFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    load_from_str(&contents)
}

pub fn load_from_str(contents: &str) -> Result<RawPlanFile> {
    let raw: RawPlanFile = toml::from_str(contents)?;
    Ok(raw)
}

/// Read, deserialize and validate a plan file.
///
/// Checks for:
/// - an empty or duplicated course list,
/// - malformed course ids in `[plan]` and `[catalogue]`,
/// - `max_concurrent_lookups == 0`.
///
/// Whether the listed courses exist in the catalogue is checked later by
/// `PlanSession::validate_courses`.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<PlanFile> {
    let raw = load_from_path(&path)?;
    PlanFile::try_from(raw)
}
