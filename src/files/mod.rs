//! File collaborators
//!
//! The dictionary source and the solution sink. The search core only ever
//! sees plain line collections; everything filesystem-shaped stays here.

use crate::core::SolveError;
use anyhow::{Context, Result, ensure};
use std::fs;
use std::path::Path;

/// Reject blank or extension-less paths before touching the filesystem
fn guard_path(path: &Path) -> Result<(), SolveError> {
    let display = path.display().to_string();

    if display.trim().is_empty() || path.extension().is_none() {
        return Err(SolveError::InvalidPath(display));
    }

    Ok(())
}

/// Read candidate words from a file, one per line
///
/// Lines are trimmed and blank lines dropped; no other interpretation
/// happens here. Normalization and filtering belong to dictionary
/// preparation.
///
/// # Errors
/// Returns `SolveError::InvalidPath` for a malformed path, or an I/O error
/// with context if the file cannot be read.
pub fn read_word_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    guard_path(path)?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read dictionary file {}", path.display()))?;

    let lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect();

    Ok(lines)
}

/// Write a found ladder to a file, one word per line
///
/// Invoked at most once per successful solve; callers must not hand over an
/// empty ladder.
///
/// # Errors
/// Returns `SolveError::InvalidPath` for a malformed path, an error for an
/// empty ladder, or an I/O error with context if the file cannot be written.
pub fn write_solution<P: AsRef<Path>>(path: P, ladder: &[String]) -> Result<()> {
    let path = path.as_ref();
    guard_path(path)?;

    ensure!(!ladder.is_empty(), "refusing to write an empty solution");

    let mut content = ladder.join("\n");
    content.push('\n');

    fs::write(path, content)
        .with_context(|| format!("failed to write solution file {}", path.display()))
}
