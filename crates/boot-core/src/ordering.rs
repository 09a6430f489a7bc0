//! Configuration ordering
//!
//! Configuration belonging to the priority subsystem loads first within each
//! group, everything else follows in lexicographic URI order. Module-provided
//! configuration always precedes user-provided configuration.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use boot_fs::{absolutize, to_file_url};

use crate::Result;

/// Total order over configuration URIs.
#[derive(Debug, Clone)]
pub struct PriorityComparator {
    keyword: String,
}

impl PriorityComparator {
    /// `keyword` is matched against the lowercased URI.
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
        }
    }

    pub fn is_priority(&self, uri: &str) -> bool {
        uri.to_lowercase().contains(&self.keyword)
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.is_priority(b)
            .cmp(&self.is_priority(a))
            .then_with(|| a.cmp(b))
    }

    pub fn sort(&self, uris: &mut [String]) {
        uris.sort_by(|a, b| self.compare(a, b));
    }
}

/// Convert paths to absolute `file://` URI strings, resolving relative paths
/// against `cwd`.
pub fn to_config_uris(paths: &[PathBuf], cwd: &Path) -> Result<Vec<String>> {
    paths
        .iter()
        .map(|path| -> Result<String> { Ok(to_file_url(&absolutize(path, cwd))?.to_string()) })
        .collect()
}

/// Merge module-provided and user-provided configuration into load order.
///
/// Each group is sorted on its own with [`PriorityComparator`]; the module
/// group comes first.
pub fn order_config_uris(
    mut module_uris: Vec<String>,
    mut user_uris: Vec<String>,
    comparator: &PriorityComparator,
) -> Vec<String> {
    comparator.sort(&mut module_uris);
    comparator.sort(&mut user_uris);
    module_uris.extend(user_uris);
    module_uris
}
