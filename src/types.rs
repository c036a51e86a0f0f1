// src/types.rs

//! Shared value types.

use std::borrow::Borrow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Department tokens (`I&C`, `SCI`, `CRM/LAW`) followed by a course number
/// token such as `6B`, `161`, `H40`.
static STRICT_COURSE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z&/]+(?: [A-Z&/]+)* [A-Z]?[0-9]+[A-Z]*$").expect("valid regex")
});

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(raw: &str) -> String {
    WHITESPACE.replace_all(raw.trim(), " ").into_owned()
}

/// Normalized course identifier, e.g. `"I&C SCI 33"`.
///
/// Equality is exact string equality of the normalized form. Case is kept
/// as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(String);

impl CourseId {
    /// Normalize whitespace without validating the shape of the identifier.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(collapse_whitespace(raw.as_ref()))
    }

    /// Strict constructor for user-supplied identifiers.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let id = Self::new(raw);
        if STRICT_COURSE_ID.is_match(&id.0) {
            Ok(id)
        } else {
            Err(format!(
                "malformed course id '{}' (expected e.g. \"I&C SCI 33\" or \"MATH 2B\")",
                raw.trim()
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CourseId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for CourseId {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Render a list of course ids as `a, b, c`.
pub fn join_ids<'a>(ids: impl IntoIterator<Item = &'a CourseId>) -> String {
    ids.into_iter()
        .map(CourseId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
