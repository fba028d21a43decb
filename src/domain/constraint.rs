//! Version constraint types for requirement entries
//!
//! Handles constraint expressions like:
//! - Exact: `== 1.5.6`
//! - Compatible release: `~= 1.1.1` (PEP 440)
//! - Comparison: `>= 2.0`, `> 2.0`, `<= 3.0`, `< 3.0`, `!= 2.1`

use serde::{Deserialize, Serialize};
use std::fmt;

/// The comparison operator of a version constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Exact version match (`==`)
    Exact,
    /// Compatible release (`~=`) - same release series, patch may move
    Compatible,
    /// Greater than or equal (`>=`)
    GreaterOrEqual,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessOrEqual,
    /// Less than (`<`)
    Less,
    /// Excluded version (`!=`)
    NotEqual,
}

impl Operator {
    /// Parses an operator symbol
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "==" => Some(Operator::Exact),
            "~=" => Some(Operator::Compatible),
            ">=" => Some(Operator::GreaterOrEqual),
            ">" => Some(Operator::Greater),
            "<=" => Some(Operator::LessOrEqual),
            "<" => Some(Operator::Less),
            "!=" => Some(Operator::NotEqual),
            _ => None,
        }
    }

    /// Returns the textual symbol for this operator
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Exact => "==",
            Operator::Compatible => "~=",
            Operator::GreaterOrEqual => ">=",
            Operator::Greater => ">",
            Operator::LessOrEqual => "<=",
            Operator::Less => "<",
            Operator::NotEqual => "!=",
        }
    }

    /// Returns true if this operator pins the requirement to a single version
    pub fn is_pinned(&self) -> bool {
        matches!(self, Operator::Exact)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A version constraint: an operator and the version it compares against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// The comparison operator
    pub op: Operator,
    /// The version string the operator compares against
    pub version: String,
}

impl Constraint {
    /// Creates a new Constraint
    pub fn new(op: Operator, version: impl Into<String>) -> Self {
        Self {
            op,
            version: version.into(),
        }
    }

    /// Returns true if this constraint pins a single acceptable version
    pub fn is_pinned(&self) -> bool {
        self.op.is_pinned()
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.op, self.version)
    }
}
