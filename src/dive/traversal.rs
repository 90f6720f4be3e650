//! The dive engine: pre-order, depth-bounded, stoppable.
//!
//! The walk keeps an explicit stack of per-directory child iterators instead
//! of recursing, so tree depth is bounded by heap rather than call stack.
//! Each directory is listed once, right after the directory itself has been
//! visited; the top of the stack is always the directory being drained.
//!
//! The file system is only read. If another process changes the tree during a
//! dive, the walk sees whatever each `read_dir` call returns at that moment.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::config::{DepthLimit, DiveConfig};
use super::entry::{Entry, read_dir_entries};
use crate::error::{ArgumentError, DiveError};

/// How a dive that did not fail ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiveOutcome {
    /// Entries handed to the visitor, including the one that asked to stop.
    pub visited: usize,
    /// The visitor returned `false`.
    pub stopped: bool,
}

/// Directory walker. Holds only configuration, so one value can drive any
/// number of dives, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Diver {
    config: DiveConfig,
}

impl Diver {
    pub fn new(config: DiveConfig) -> Self {
        Self { config }
    }

    /// Walker with default settings but the given depth limit.
    pub fn with_depth_limit(depth_limit: DepthLimit) -> Self {
        Self::new(DiveConfig::default().with_depth_limit(depth_limit))
    }

    pub fn config(&self) -> &DiveConfig {
        &self.config
    }

    /// Visit every descendant of `root` in pre-order.
    ///
    /// The root itself is never visited. The visitor returns `Ok(true)` to
    /// continue or `Ok(false)` to end the whole dive at once; an `Err` aborts
    /// the dive with [`DiveError::Traversal`] naming the entry being visited.
    pub fn dive<F, E>(&self, root: &Path, mut visitor: F) -> Result<DiveOutcome, DiveError<E>>
    where
        F: FnMut(&Entry) -> Result<bool, E>,
    {
        let root = validate_root(root)?;
        debug!(
            root = %root.display(),
            depth_limit = ?self.config.depth_limit,
            "starting dive"
        );

        let mut outcome = DiveOutcome::default();
        let mut pending = vec![self.list(&root, 1)?.into_iter()];

        while let Some(siblings) = pending.last_mut() {
            let Some(child) = siblings.next() else {
                pending.pop();
                continue;
            };

            outcome.visited += 1;
            let keep_going = visitor(&child).map_err(|e| DiveError::visitor(child.path(), e))?;
            if !keep_going {
                outcome.stopped = true;
                debug!(
                    at = %child.path().display(),
                    visited = outcome.visited,
                    "dive stopped by visitor"
                );
                return Ok(outcome);
            }

            if child.is_dir() && self.config.depth_limit.allows_descent_from(child.depth()) {
                let children = self.list(child.path(), child.depth() + 1)?;
                pending.push(children.into_iter());
            }
        }

        debug!(visited = outcome.visited, "dive complete");
        Ok(outcome)
    }

    fn list<E>(&self, dir: &Path, depth: usize) -> Result<Vec<Entry>, DiveError<E>> {
        trace!(dir = %dir.display(), depth, "listing directory");
        let mut entries = read_dir_entries(dir, depth, self.config.follow_links)
            .map_err(|e| DiveError::io(dir, e))?;
        if self.config.sort_entries {
            entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        Ok(entries)
    }
}

/// Make `root` absolute and confirm it is a directory (following links).
fn validate_root(root: &Path) -> Result<PathBuf, ArgumentError> {
    let not_a_dir = || ArgumentError::NotADirectory(root.to_path_buf());
    let absolute = std::path::absolute(root).map_err(|_| not_a_dir())?;
    if absolute.is_dir() {
        Ok(absolute)
    } else {
        Err(not_a_dir())
    }
}

/// Dive with unlimited depth and default settings.
pub fn dive<F, E>(root: impl AsRef<Path>, visitor: F) -> Result<DiveOutcome, DiveError<E>>
where
    F: FnMut(&Entry) -> Result<bool, E>,
{
    Diver::default().dive(root.as_ref(), visitor)
}

/// Dive at most `depth_limit` levels deep.
///
/// `depth_limit` is [`UNLIMITED_DEPTH`](super::UNLIMITED_DEPTH) or at least 1;
/// anything else fails before the file system is touched.
pub fn dive_with_depth<F, E>(
    root: impl AsRef<Path>,
    depth_limit: i64,
    visitor: F,
) -> Result<DiveOutcome, DiveError<E>>
where
    F: FnMut(&Entry) -> Result<bool, E>,
{
    let depth_limit = DepthLimit::try_from(depth_limit)?;
    Diver::with_depth_limit(depth_limit).dive(root.as_ref(), visitor)
}
