//! Collecting every entry of a dive into a list

use std::convert::Infallible;
use std::path::Path;

use super::config::DepthLimit;
use super::entry::Entry;
use super::traversal::Diver;
use crate::error::DiveError;

impl Diver {
    /// Every entry below `root`, in the order [`Diver::dive`] visits them.
    pub fn collect_all(&self, root: &Path) -> Result<Vec<Entry>, DiveError<Infallible>> {
        let mut entries = Vec::new();
        self.dive(root, |entry| {
            entries.push(entry.clone());
            Ok::<_, Infallible>(true)
        })?;
        Ok(entries)
    }
}

/// Collect every descendant of `root` with unlimited depth.
pub fn collect_all(root: impl AsRef<Path>) -> Result<Vec<Entry>, DiveError<Infallible>> {
    Diver::default().collect_all(root.as_ref())
}

/// Collect descendants of `root` at most `depth_limit` levels deep.
pub fn collect_all_with_depth(
    root: impl AsRef<Path>,
    depth_limit: i64,
) -> Result<Vec<Entry>, DiveError<Infallible>> {
    let depth_limit = DepthLimit::try_from(depth_limit)?;
    Diver::with_depth_limit(depth_limit).collect_all(root.as_ref())
}
