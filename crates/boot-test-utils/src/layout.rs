//! [`TestLayout`] builder for installed application trees.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary application root with helpers to lay out modules, webapp,
/// library and configuration directories.
///
/// The root is canonicalized so that paths derived from it compare equal to
/// paths the resolver derives from canonical forms.
///
/// # Example
///
/// ```rust,no_run
/// use boot_test_utils::layout::TestLayout;
///
/// let app = TestLayout::new();
/// app.standard("labkeywebapp");
/// app.file("labkeywebapp/WEB-INF/lib/a.jar");
/// app.file("cfg/a/pipeline-config.xml");
/// ```
pub struct TestLayout {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLayout {
    /// Create an empty temporary application root.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = dunce::canonicalize(temp_dir.path()).unwrap();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Return the (canonical) root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of `relative` under the root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Create a directory (and its parents) under the root.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Create an empty file (and its parent directories) under the root.
    pub fn file(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "").unwrap();
        path
    }

    /// Create `modules/` and `<webapp>/WEB-INF/lib/` under the root.
    pub fn standard(&self, webapp: &str) {
        self.dir("modules");
        self.dir(&format!("{webapp}/WEB-INF/lib"));
    }

    /// Create an exploded module `modules/<name>` with the given archives in
    /// `lib/` and configuration files in `config/`.
    pub fn module(&self, name: &str, archives: &[&str], configs: &[&str]) -> PathBuf {
        let module = self.dir(&format!("modules/{name}"));
        for archive in archives {
            self.file(&format!("modules/{name}/lib/{archive}"));
        }
        for config in configs {
            self.file(&format!("modules/{name}/config/{config}"));
        }
        module
    }
}
