//! Classpath construction

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use boot_fs::{absolutize, list_entries, to_file_url};
use serde::Serialize;
use url::Url;

use crate::Result;

/// Ordered, duplicate-free list of loadable-code locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassPath {
    entries: Vec<Url>,
}

impl ClassPath {
    /// Build from module archives followed by every entry of `lib_dir`.
    ///
    /// Module archives keep the order the extractor reported. Library entries
    /// follow in directory listing order, unfiltered and without recursion.
    /// Relative archive paths are resolved against `cwd`.
    ///
    /// # Errors
    ///
    /// Fails if `lib_dir` cannot be listed or a location cannot be expressed
    /// as a file URL. No partial classpath is returned.
    pub fn build(module_archives: &[PathBuf], lib_dir: &Path, cwd: &Path) -> Result<Self> {
        let mut class_path = Self::default();
        let mut seen = HashSet::new();

        let archives = module_archives.iter().map(|path| absolutize(path, cwd));
        let lib_entries = list_entries(lib_dir, |_| true)?;
        for path in archives.chain(lib_entries) {
            let url = to_file_url(&path)?;
            if seen.insert(url.clone()) {
                class_path.entries.push(url);
            }
        }

        Ok(class_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Url> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Url] {
        &self.entries
    }

    /// Join the entries into a platform search path (`:` or `;` separated).
    ///
    /// Returns `None` if an entry contains the platform separator.
    pub fn to_search_path(&self) -> Option<OsString> {
        let paths: Vec<PathBuf> = self
            .entries
            .iter()
            .filter_map(|url| url.to_file_path().ok())
            .collect();
        std::env::join_paths(paths).ok()
    }
}

impl<'a> IntoIterator for &'a ClassPath {
    type Item = &'a Url;
    type IntoIter = std::slice::Iter<'a, Url>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
