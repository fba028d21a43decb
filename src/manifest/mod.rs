//! Requirements manifest parsing
//!
//! This module turns raw requirements text into a validated [`Manifest`]:
//! - One requirement per line: `name [operator version]`
//! - `#` comment lines accumulate onto the next requirement
//! - Strict mode rejects duplicate package declarations

mod writer;

pub use writer::{read_manifest, render, write_manifest};

use crate::domain::{Manifest, Requirement};
use crate::error::{AppError, ParseError};
use crate::parser::{parse_constraint, split_spec};
use std::collections::HashMap;
use std::path::Path;

/// Parser for requirements manifests
///
/// The default mode tolerates re-declared packages and leaves the
/// policy to the consumer; strict mode rejects them.
pub struct RequirementsParser {
    strict: bool,
}

impl RequirementsParser {
    /// Creates a parser that permits duplicate declarations
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// Creates a parser that rejects duplicate declarations
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Check if this parser is in strict mode
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Parse requirements text into a manifest
    ///
    /// Fails fast on the first bad line; no partial manifest is returned.
    pub fn parse(&self, content: &str) -> Result<Manifest, ParseError> {
        let mut requirements: Vec<Requirement> = Vec::new();
        let mut notes: Vec<String> = Vec::new();
        let mut pending: Vec<String> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (idx, line) in content.lines().enumerate() {
            let lineno = idx + 1;
            let trimmed = line.trim();

            // A blank line closes a comment block without a requirement
            if trimmed.is_empty() {
                flush_notes(&mut pending, &mut notes);
                continue;
            }

            if let Some(text) = trimmed.strip_prefix('#') {
                pending.push(text.trim().to_string());
                continue;
            }

            // Strip a trailing comment before splitting name from constraint
            let (spec, trailing) = match trimmed.split_once('#') {
                Some((code, comment)) => (code.trim(), Some(comment.trim())),
                None => (trimmed, None),
            };

            let (name, expr) = split_spec(spec);
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(ParseError::malformed_line(lineno, trimmed));
            }

            let constraint = match expr {
                Some(expr) => match parse_constraint(expr) {
                    Some(constraint) => Some(constraint),
                    None => return Err(ParseError::malformed_line(lineno, trimmed)),
                },
                None => None,
            };

            if self.strict {
                if let Some(first_line) = seen.get(name) {
                    return Err(ParseError::duplicate(name, lineno, *first_line));
                }
                seen.insert(name.to_string(), lineno);
            }

            let mut requirement = Requirement::new(name);
            if let Some(constraint) = constraint {
                requirement = requirement.with_constraint(constraint);
            }
            if let Some(comment) = take_comment(&mut pending, trailing) {
                requirement = requirement.with_comment(comment);
            }
            requirements.push(requirement);
        }

        flush_notes(&mut pending, &mut notes);

        Ok(Manifest::new(requirements).with_notes(notes))
    }
}

impl Default for RequirementsParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse requirements text with the default lenient parser
pub fn parse_str(content: &str) -> Result<Manifest, ParseError> {
    RequirementsParser::new().parse(content)
}

/// Read and parse a requirements manifest from a file path
pub fn parse_manifest(path: &Path) -> Result<Manifest, AppError> {
    let content = read_manifest(path)?;
    Ok(parse_str(&content)?)
}

fn flush_notes(pending: &mut Vec<String>, notes: &mut Vec<String>) {
    if pending.is_empty() {
        return;
    }
    let text = pending.join("\n");
    pending.clear();
    if !text.trim().is_empty() {
        notes.push(text);
    }
}

fn take_comment(pending: &mut Vec<String>, trailing: Option<&str>) -> Option<String> {
    let mut lines = std::mem::take(pending);
    if let Some(text) = trailing {
        if !text.is_empty() {
            lines.push(text.to_string());
        }
    }
    let text = lines.join("\n");
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
