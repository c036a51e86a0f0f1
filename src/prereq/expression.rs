// src/prereq/expression.rs

//! AND-of-OR prerequisite expressions.
//!
//! Catalogue text looks like `"I&C SCI 32 or I&C SCI 31 and MATH 2B"`:
//! `" and "` separates groups that must all be satisfied and `" or "`
//! separates interchangeable alternatives inside a group. Nothing else is
//! understood; anything that does not fit is treated as "no constraints".

use std::fmt;

use thiserror::Error;
use tracing::warn;

use crate::types::{CourseId, collapse_whitespace};

pub const GROUP_SEPARATOR: &str = " and ";
pub const ALTERNATIVE_SEPARATOR: &str = " or ";

const UNSUPPORTED_CHARS: [char; 6] = ['(', ')', '[', ']', '{', '}'];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("unsupported character '{ch}' at byte {position}")]
    UnsupportedCharacter { ch: char, position: usize },

    #[error("dangling 'or' in group {group}")]
    DanglingAlternative { group: usize },
}

/// Interchangeable alternatives; any one satisfies the group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrGroup {
    alternatives: Vec<String>,
}

impl OrGroup {
    pub fn new<I, S>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            alternatives: alternatives.into_iter().map(Into::into).collect(),
        }
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// True if some alternative mentions `course` anywhere in its text.
    pub fn mentions(&self, course: &CourseId) -> bool {
        self.alternatives
            .iter()
            .any(|alt| alt.contains(course.as_str()))
    }
}

impl fmt::Display for OrGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.alternatives.join(" OR "))
    }
}

/// Ordered OR-groups, all of which must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerequisiteExpression {
    groups: Vec<OrGroup>,
}

static EMPTY: PrerequisiteExpression = PrerequisiteExpression::empty();

impl PrerequisiteExpression {
    pub const fn empty() -> Self {
        Self { groups: Vec::new() }
    }

    /// Shared empty expression, handy for lookups that miss.
    pub fn empty_ref() -> &'static Self {
        &EMPTY
    }

    /// Parse `raw`, recovering from malformed text with an empty expression.
    pub fn parse(course: &CourseId, raw: &str) -> Self {
        match Self::try_parse(raw) {
            Ok(expr) => expr,
            Err(err) => {
                warn!(
                    course = %course,
                    error = %err,
                    raw,
                    "unparseable prerequisite text; treating as no prerequisites"
                );
                Self::empty()
            }
        }
    }

    pub fn try_parse(raw: &str) -> Result<Self, ExpressionError> {
        if let Some((position, ch)) = raw.char_indices().find(|(_, c)| UNSUPPORTED_CHARS.contains(c)) {
            return Err(ExpressionError::UnsupportedCharacter { ch, position });
        }

        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::empty());
        }

        let mut groups = Vec::new();
        for (index, group) in raw.split(GROUP_SEPARATOR).enumerate() {
            let alternatives: Vec<String> = group
                .split(ALTERNATIVE_SEPARATOR)
                .map(collapse_whitespace)
                .collect();

            let empty = alternatives.iter().filter(|a| a.is_empty()).count();
            if empty == alternatives.len() {
                continue;
            }
            if empty > 0 {
                return Err(ExpressionError::DanglingAlternative { group: index });
            }
            groups.push(OrGroup { alternatives });
        }

        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[OrGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
