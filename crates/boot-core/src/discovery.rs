//! User configuration discovery

use std::path::{Path, PathBuf};

use boot_fs::{has_extension, is_directory, list_entries};

use crate::Result;

/// Collect every file under `config_dir` whose name ends with `.{extension}`
/// (case-insensitive), at any depth.
///
/// Subdirectories are visited before the files of the directory containing
/// them. Listing order is whatever the filesystem yields; callers that need a
/// stable sequence sort afterwards. Without a configuration directory the
/// result is empty.
pub fn discover_config_files(config_dir: Option<&Path>, extension: &str) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    if let Some(dir) = config_dir {
        collect(dir, extension, &mut found)?;
    }
    Ok(found)
}

fn collect(dir: &Path, extension: &str, found: &mut Vec<PathBuf>) -> Result<()> {
    for sub_dir in list_entries(dir, is_directory)? {
        collect(&sub_dir, extension, found)?;
    }

    let files = list_entries(dir, has_extension(extension))?;
    for file in &files {
        tracing::debug!(?file, "Discovered configuration file");
    }
    found.extend(files);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use boot_test_utils::layout::TestLayout;
    use std::collections::BTreeSet;

    #[test]
    fn no_config_dir_yields_nothing() {
        assert!(discover_config_files(None, "xml").unwrap().is_empty());
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let app = TestLayout::new();
        app.dir("cfg/empty/deeper");
        let found = discover_config_files(Some(&app.path("cfg")), "xml").unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn nested_files_are_found_before_parent_files() {
        let app = TestLayout::new();
        let top = app.file("cfg/top.xml");
        let nested = app.file("cfg/sub/nested.xml");

        let found = discover_config_files(Some(&app.path("cfg")), "xml").unwrap();
        assert_eq!(found, vec![nested, top]);
    }

    #[test]
    fn only_matching_extension_is_collected() {
        let app = TestLayout::new();
        let a = app.file("cfg/a/pipeline-config.xml");
        let b = app.file("cfg/b/other.XML");
        app.file("cfg/b/readme.txt");
        app.file("cfg/b/beans.xml.bak");

        let found: BTreeSet<_> = discover_config_files(Some(&app.path("cfg")), "xml")
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(found, BTreeSet::from([a, b]));
    }
}
