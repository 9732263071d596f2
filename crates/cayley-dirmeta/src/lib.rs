//! # cayley-dirmeta
//!
//! Directory manifest generation. Walking a tree writes a manifest file
//! into every directory naming its immediate subdirectories, one per line
//! in sorted order, so static file servers can enumerate content without
//! listing support.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// The manifest file written into each directory.
pub const MANIFEST_NAME: &str = "dir.lst";

/// Writes a [`MANIFEST_NAME`] file into `root` and every directory below
/// it, each listing the directory's immediate subdirectory names joined by
/// newlines. Names are sorted so regeneration is deterministic.
///
/// # Errors
///
/// Fails on the first traversal or write error.
pub fn generate(root: &Path) -> io::Result<()> {
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let mut names: Vec<String> = fs::read_dir(entry.path())?
            .collect::<io::Result<Vec<_>>>()?
            .into_iter()
            .filter(|e| e.path().is_dir())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        fs::write(entry.path().join(MANIFEST_NAME), names.join("\n"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_tree(tag: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("cayley-dirmeta-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("b/nested")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("file.txt"), "not a directory").unwrap();
        root
    }

    #[test]
    fn writes_sorted_manifests_recursively() {
        let root = scratch_tree("recursive");
        generate(&root).unwrap();

        assert_eq!(fs::read_to_string(root.join(MANIFEST_NAME)).unwrap(), "a\nb");
        assert_eq!(
            fs::read_to_string(root.join("b").join(MANIFEST_NAME)).unwrap(),
            "nested"
        );
        assert_eq!(
            fs::read_to_string(root.join("b/nested").join(MANIFEST_NAME)).unwrap(),
            ""
        );

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn files_are_excluded_from_manifests() {
        let root = scratch_tree("files");
        generate(&root).unwrap();

        let manifest = fs::read_to_string(root.join(MANIFEST_NAME)).unwrap();
        assert!(!manifest.contains("file.txt"));

        fs::remove_dir_all(&root).unwrap();
    }
}
