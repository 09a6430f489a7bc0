//! Predicate-driven directory listing

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// List the direct children of `dir` accepted by `filter`.
///
/// Entries are returned in the order the filesystem yields them. Any error
/// while reading the directory or one of its entries aborts the listing.
pub fn list_entries<F>(dir: &Path, filter: F) -> Result<Vec<PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if filter(&path) {
            entries.push(path);
        }
    }
    Ok(entries)
}

/// Accepts directories (following symlinks).
pub fn is_directory(path: &Path) -> bool {
    path.is_dir()
}

/// Accepts regular files whose name ends with `.{extension}`, ignoring case.
pub fn has_extension(extension: &str) -> impl Fn(&Path) -> bool + use<> {
    let suffix = format!(".{}", extension.to_lowercase());
    move |path: &Path| {
        path.is_file()
            && path
                .file_name()
                .map(|name| name.to_string_lossy().to_lowercase().ends_with(&suffix))
                .unwrap_or(false)
    }
}
