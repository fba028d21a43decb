//! Manifest rendering and file access
//!
//! This module provides:
//! - Rendering a parsed manifest back to requirements text
//! - Safe read/write helpers for manifest files

use crate::domain::Manifest;
use crate::error::ManifestError;
use std::fs;
use std::path::Path;

/// Render a manifest back to requirements text
///
/// Each entry's comment is emitted as `# ` lines directly above it, so
/// re-parsing the output yields an equal manifest; trailing comments come
/// back as preceding ones. Standalone notes are emitted at the end as
/// comment blocks separated by blank lines.
pub fn render(manifest: &Manifest) -> String {
    let mut out = String::new();

    for requirement in manifest.iter() {
        if let Some(ref comment) = requirement.comment {
            push_comment_block(&mut out, comment);
        }
        out.push_str(&requirement.to_string());
        out.push('\n');
    }

    for note in &manifest.notes {
        if !out.is_empty() {
            out.push('\n');
        }
        push_comment_block(&mut out, note);
    }

    out
}

fn push_comment_block(out: &mut String, text: &str) {
    for line in text.lines() {
        if line.is_empty() {
            out.push_str("#\n");
        } else {
            out.push_str("# ");
            out.push_str(line);
            out.push('\n');
        }
    }
}

/// Read a manifest file's content safely
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::not_found(path)
        } else {
            ManifestError::read_error(path, e)
        }
    })
}

/// Write content to a manifest file
pub fn write_manifest(path: &Path, content: &str) -> Result<(), ManifestError> {
    fs::write(path, content).map_err(|e| ManifestError::write_error(path, e))
}
