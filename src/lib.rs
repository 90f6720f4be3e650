//! Diver - depth-bounded, pre-order directory traversal with early stop
//!
//! ```no_run
//! use std::convert::Infallible;
//!
//! let mut found = None;
//! diver::dive("src", |entry| {
//!     if entry.is_file() && entry.path().ends_with("lib.rs") {
//!         found = Some(entry.path().to_path_buf());
//!         return Ok::<_, Infallible>(false);
//!     }
//!     Ok(true)
//! })?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod dive;
pub mod error;
pub mod logging;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use dive::{
    DepthLimit, DiveConfig, DiveOutcome, Diver, Entry, EntryKind, UNLIMITED_DEPTH, collect_all,
    collect_all_with_depth, dive, dive_with_depth,
};
pub use error::{ArgumentError, DiveError, TraversalCause};
