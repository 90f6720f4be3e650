//! Directory diving
//!
//! A dive walks a directory tree depth-first and hands every descendant of
//! the root to a visitor before descending into it:
//!
//! - `Diver::dive` / [`dive`]: drive a visitor that may stop the walk
//! - `Diver::collect_all` / [`collect_all`]: gather every entry into a list

mod collect;
mod config;
mod entry;
mod traversal;

pub use collect::{collect_all, collect_all_with_depth};
pub use config::{DepthLimit, DiveConfig, UNLIMITED_DEPTH};
pub use entry::{Entry, EntryKind};
pub use traversal::{DiveOutcome, Diver, dive, dive_with_depth};
