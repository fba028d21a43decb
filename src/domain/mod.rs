//! Core domain models for reqparse
//!
//! This module contains the fundamental types used throughout the library:
//! - Constraint operators and version constraints
//! - Requirement entry structures
//! - The ordered manifest container

mod constraint;
mod manifest;
mod requirement;

pub use constraint::{Constraint, Operator};
pub use manifest::Manifest;
pub use requirement::Requirement;
