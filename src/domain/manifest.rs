//! The ordered manifest container

use super::Requirement;
use serde::{Deserialize, Serialize};

/// An ordered collection of requirements parsed from one manifest
///
/// Entry order matches the source text; install precedence downstream
/// may depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Requirement entries in declaration order
    pub requirements: Vec<Requirement>,
    /// Comment blocks that did not attach to any requirement
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Manifest {
    /// Creates a manifest from a list of requirements
    pub fn new(requirements: Vec<Requirement>) -> Self {
        Self {
            requirements,
            notes: Vec::new(),
        }
    }

    /// Attaches standalone notes (builder pattern)
    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Number of requirement entries
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Returns true if the manifest holds no requirements
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// First entry declared with the given name
    pub fn get(&self, name: &str) -> Option<&Requirement> {
        self.requirements.iter().find(|r| r.name == name)
    }

    /// Returns true if any entry declares the given name
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates requirements in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Requirement> {
        self.requirements.iter()
    }
}
