//! Absolute path and file URI helpers

use std::path::{Path, PathBuf};

use url::Url;

use crate::{Error, Result};

/// Make `path` absolute against `base` without touching the filesystem.
///
/// Absolute inputs are returned unchanged. No `.`/`..` cleanup is done and
/// symlinks are not resolved.
pub fn absolutize(path: impl AsRef<Path>, base: &Path) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Convert an absolute path into a `file://` URL.
///
/// Existing directories get a trailing `/` so class loaders treat them as
/// directory roots rather than archives.
///
/// # Errors
///
/// Returns [`Error::InvalidUri`] if the path is relative or cannot be
/// represented as a URL on this platform.
pub fn to_file_url(path: &Path) -> Result<Url> {
    let url = if path.is_dir() {
        Url::from_directory_path(path)
    } else {
        Url::from_file_path(path)
    };
    url.map_err(|()| Error::InvalidUri {
        path: path.to_path_buf(),
    })
}
