//! Output path defaulting and collision checks for the file operations.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HuffmanError, Result};

/// Replaces the last extension of `input` with `extension`, or appends it
/// when there is none: `notes.txt` becomes `notes.huf`, `notes` becomes
/// `notes.huf`.
pub fn default_output(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

/// Fails with `PathCollision` if two of `paths` name the same file.
///
/// Existing files are compared by canonical path, so `./a` and `a` collide.
/// Paths that do not exist yet are compared as written.
pub fn ensure_distinct(paths: &[&Path]) -> Result<()> {
    let resolved: Vec<PathBuf> = paths.iter().map(|p| resolve(p)).collect();
    for i in 0..paths.len() {
        for j in (i + 1)..paths.len() {
            if resolved[i] == resolved[j] {
                return Err(HuffmanError::PathCollision {
                    first: paths[i].to_path_buf(),
                    second: paths[j].to_path_buf(),
                });
            }
        }
    }
    Ok(())
}

fn resolve(path: &Path) -> PathBuf {
    if let Ok(full) = fs::canonicalize(path) {
        return full;
    }
    // not created yet: resolve the directory it will be created in
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (fs::canonicalize(parent), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}
