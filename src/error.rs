//! Library error types using thiserror
//!
//! Error hierarchy:
//! - ParseError: malformed or conflicting requirement lines
//! - ManifestError: manifest file access failures

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Requirement parsing errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Manifest file access errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Errors raised while parsing requirements text
///
/// Parsing is fail-fast: the first error aborts the parse and no
/// partial manifest is returned.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A non-comment line with no parseable requirement name
    #[error("malformed requirement on line {line}: '{content}'")]
    MalformedLine { line: usize, content: String },

    /// The same package declared twice in strict mode
    #[error("duplicate requirement '{name}' on line {line} (first declared on line {first_line})")]
    DuplicateRequirement {
        name: String,
        line: usize,
        first_line: usize,
    },
}

impl ParseError {
    /// Creates a new MalformedLine error
    pub fn malformed_line(line: usize, content: impl Into<String>) -> Self {
        ParseError::MalformedLine {
            line,
            content: content.into(),
        }
    }

    /// Creates a new DuplicateRequirement error
    pub fn duplicate(name: impl Into<String>, line: usize, first_line: usize) -> Self {
        ParseError::DuplicateRequirement {
            name: name.into(),
            line,
            first_line,
        }
    }

    /// The 1-based line number the error was raised on
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedLine { line, .. } => *line,
            ParseError::DuplicateRequirement { line, .. } => *line,
        }
    }
}

/// Errors related to manifest file access
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }
}
