//! Entries handed to visitors

use std::ffi::OsStr;
use std::fs::{self, FileType};
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Other,
}

impl EntryKind {
    fn from_file_type(ft: FileType) -> Self {
        if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        }
    }
}

/// A file-system entry found during a dive.
///
/// Entries are snapshots taken at listing time; nothing is cached and the
/// file system is never modified through them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    path: PathBuf,
    kind: EntryKind,
    depth: usize,
}

impl Entry {
    /// Classify `path` and wrap it as an entry at `depth`.
    ///
    /// With `follow_links` a symlink takes the kind of its target. Only a
    /// dangling link (target not found) stays a `Symlink`; any other failure
    /// to resolve the target, such as a link loop, is returned as an error.
    pub fn from_path(path: PathBuf, depth: usize, follow_links: bool) -> io::Result<Self> {
        let meta = fs::symlink_metadata(&path)?;
        let mut kind = EntryKind::from_file_type(meta.file_type());
        if follow_links && kind == EntryKind::Symlink {
            match fs::metadata(&path) {
                Ok(target) => kind = EntryKind::from_file_type(target.file_type()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }
        Ok(Self { path, kind, depth })
    }

    pub(crate) fn from_dir_entry(
        entry: &fs::DirEntry,
        depth: usize,
        follow_links: bool,
    ) -> io::Result<Self> {
        let file_type = entry.file_type()?;
        if follow_links && file_type.is_symlink() {
            return Self::from_path(entry.path(), depth, true);
        }
        Ok(Self {
            path: entry.path(),
            kind: EntryKind::from_file_type(file_type),
            depth,
        })
    }

    /// Absolute path of the entry.
    ///
    /// Built by joining names onto the absolute form of the dive root, which
    /// is not canonicalized: `.` and `..` components in the root are kept and
    /// symlinks are not resolved.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }

    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }

    /// Distance from the dive root; direct children are at depth 1.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// List the direct children of this entry, in listing order.
    ///
    /// Fails for anything that is not a readable directory. Symlinks are not
    /// followed when classifying the children.
    pub fn read_children(&self) -> io::Result<Vec<Entry>> {
        read_dir_entries(&self.path, self.depth + 1, false)
    }
}

/// Read one directory into entries at `depth`, keeping the listing order.
pub(crate) fn read_dir_entries(
    dir: &Path,
    depth: usize,
    follow_links: bool,
) -> io::Result<Vec<Entry>> {
    fs::read_dir(dir)?
        .map(|entry| entry.and_then(|e| Entry::from_dir_entry(&e, depth, follow_links)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    #[test]
    fn test_classifies_files_and_dirs() {
        let tree = TestTree::new();
        let file = tree.add_file("a.txt", "a");
        let dir = tree.add_dir("sub");

        let file_entry = Entry::from_path(file.clone(), 1, false).unwrap();
        assert!(file_entry.is_file());
        assert_eq!(file_entry.path(), file);
        assert_eq!(file_entry.file_name(), Some(OsStr::new("a.txt")));

        let dir_entry = Entry::from_path(dir, 1, false).unwrap();
        assert!(dir_entry.is_dir());
        assert_eq!(dir_entry.kind(), EntryKind::Dir);
    }

    #[test]
    fn test_read_children_lists_direct_children_only() {
        let tree = TestTree::new();
        tree.add_file("sub/one.txt", "1");
        tree.add_file("sub/two.txt", "2");
        tree.add_file("sub/deeper/three.txt", "3");

        let sub = Entry::from_path(tree.path().join("sub"), 1, false).unwrap();
        let mut names: Vec<_> = sub
            .read_children()
            .unwrap()
            .into_iter()
            .map(|e| {
                assert_eq!(e.depth(), 2);
                e.file_name().unwrap().to_string_lossy().into_owned()
            })
            .collect();
        names.sort();
        assert_eq!(names, ["deeper", "one.txt", "two.txt"]);
    }

    #[test]
    fn test_read_children_of_file_fails() {
        let tree = TestTree::new();
        let file = tree.add_file("plain.txt", "x");
        let entry = Entry::from_path(file, 1, false).unwrap();
        assert!(entry.read_children().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_kind_depends_on_follow_links() {
        let tree = TestTree::new();
        tree.add_dir("real");
        let link = tree.add_symlink("real", "link");

        let unfollowed = Entry::from_path(link.clone(), 1, false).unwrap();
        assert!(unfollowed.is_symlink());

        let followed = Entry::from_path(link, 1, true).unwrap();
        assert!(followed.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_stays_symlink() {
        let tree = TestTree::new();
        let link = tree.add_symlink("missing", "dangling");
        let entry = Entry::from_path(link, 1, true).unwrap();
        assert!(entry.is_symlink());
    }

    #[cfg(unix)]
    #[test]
    fn test_looping_symlink_fails_when_followed() {
        let tree = TestTree::new();
        let link = tree.add_symlink("self_loop", "self_loop");

        let unfollowed = Entry::from_path(link.clone(), 1, false).unwrap();
        assert!(unfollowed.is_symlink());

        let err = Entry::from_path(link, 1, true).unwrap_err();
        assert_ne!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_serializes_kind_lowercase() {
        let tree = TestTree::new();
        let file = tree.add_file("a.txt", "a");
        let entry = Entry::from_path(file, 3, false).unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "file");
        assert_eq!(json["depth"], 3);
    }
}
