//! Requirement entry structures

use super::Constraint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents one parsed requirement entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Package name
    pub name: String,
    /// Version constraint; absent means any version is acceptable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<Constraint>,
    /// Free-text annotation from surrounding comment lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Requirement {
    /// Creates a new requirement with no constraint
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
            comment: None,
        }
    }

    /// Sets the version constraint (builder pattern)
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    /// Sets the comment annotation (builder pattern)
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Returns true if this requirement is pinned to an exact version
    pub fn is_pinned(&self) -> bool {
        self.constraint
            .as_ref()
            .map(|c| c.is_pinned())
            .unwrap_or(false)
    }

    /// Returns the constrained version string, if any
    pub fn version(&self) -> Option<&str> {
        self.constraint.as_ref().map(|c| c.version.as_str())
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.constraint {
            Some(constraint) => write!(f, "{} {}", self.name, constraint),
            None => write!(f, "{}", self.name),
        }
    }
}
