//! Test utilities for building directory trees in a temporary directory.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Pre-order of [`TestTree::nested_sample`] with siblings sorted by name.
    pub const NESTED_SAMPLE_ORDER: [&'static str; 15] = [
        "bar.txt",
        "buz.txt",
        "foo.txt",
        "testDir2_1",
        "testDir2_1/foo_bar.txt",
        "testDir2_1/foo_buzz.txt",
        "testDir2_1/testDir3",
        "testDir2_1/testDir3/foo_bar_buzz.txt",
        "testDir2_2",
        "testDir2_2/abcDir",
        "testDir2_2/abcDir/aaaDir",
        "testDir2_2/abcDir/aaaDir/aaa.txt",
        "testDir2_2/abcDir/bbb.txt",
        "testDir2_2/abcDir/ccc.txt",
        "testDir2_2/bar3.txt",
    ];

    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// A four-level tree of files and directories.
    ///
    /// Every file's first line is `"<stem> contents"`.
    pub fn nested_sample() -> Self {
        let tree = Self::new();
        for rel in Self::NESTED_SAMPLE_ORDER {
            if rel.ends_with(".txt") {
                let stem = Path::new(rel)
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                tree.add_file(rel, &format!("{stem} contents\n"));
            } else {
                tree.add_dir(rel);
            }
        }
        tree
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a directory (and its parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create a symlink at `link` pointing to `target` (taken as written).
    #[cfg(unix)]
    pub fn add_symlink(&self, target: &str, link: &str) -> PathBuf {
        let link_path = self.dir.path().join(link);
        let target_path = if Path::new(target).is_absolute() || target.starts_with("..") {
            PathBuf::from(target)
        } else {
            self.dir.path().join(target)
        };
        std::os::unix::fs::symlink(target_path, &link_path).expect("Failed to create symlink");
        link_path
    }

    /// `path` relative to the tree root, `/`-separated.
    pub fn rel(&self, path: &Path) -> String {
        path.strip_prefix(self.dir.path())
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
