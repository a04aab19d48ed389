//! A set of helpers for working with the file system.

use std::io;
use std::path::Path;

use crate::constants::ALLOWED_EXISTING_ENTRY;
use crate::error::{Error, Result};

/// Writes `content` to `dest_path`, creating parent directories first.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> io::Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content)
}

/// Copies `source_path` byte for byte, creating parent directories first.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source_path: P, dest_path: Q) -> io::Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::copy(source_path, dest_path).map(|_| ())
}

/// Whether a directory is absent, empty, or holds nothing but `.git`.
pub fn is_empty_dir<P: AsRef<Path>>(dir: P) -> io::Result<bool> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Ok(true);
    }
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        names.push(entry?.file_name());
        if names.len() > 1 {
            return Ok(false);
        }
    }
    Ok(names.is_empty() || names[0] == ALLOWED_EXISTING_ENTRY)
}

/// Ensures the output directory is safe to generate into.
///
/// # Errors
/// * `Error::OutputDirectoryNotEmptyError` if the path exists and is not empty
///   (a lone `.git` entry is allowed) or is not a directory
pub fn check_output_dir<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let output_dir = output_dir.as_ref();
    let empty = output_dir.is_dir() && is_empty_dir(output_dir)?;
    if output_dir.exists() && !empty {
        return Err(Error::OutputDirectoryNotEmptyError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(())
}

/// Returns the name of the current user, falling back to `default`.
pub fn current_user(default: &str) -> String {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| default.to_string())
}
