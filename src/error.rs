//! Error types for diver
//!
//! Two kinds of failure exist:
//! - `InvalidArgument`: raised before anything on disk is listed
//! - `Traversal`: raised mid-walk, always carrying the path being processed
//!
//! A visitor returning `false` is not an error; it shows up as
//! `DiveOutcome::stopped` instead.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Rejected inputs to a dive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The root is missing or is not a directory
    #[error("root must be a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Depth limit is neither the unlimited sentinel nor >= 1
    #[error("depth limit must be -1 (unlimited) or a positive integer, got {0}")]
    InvalidDepth(i64),
}

/// What went wrong while processing an entry.
#[derive(Error, Debug)]
pub enum TraversalCause<E> {
    /// Listing a directory or reading an entry's type failed
    #[error("I/O failure")]
    Io(#[source] io::Error),

    /// The caller's visitor returned an error
    #[error("visitor failed")]
    Visitor(#[source] E),
}

/// Error returned by [`dive`](crate::dive) and friends.
///
/// `E` is the visitor's own error type.
#[derive(Error, Debug)]
pub enum DiveError<E> {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    #[error("error occurred at {}", .path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        cause: TraversalCause<E>,
    },
}

impl<E> DiveError<E> {
    pub(crate) fn io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        DiveError::Traversal {
            path: path.into(),
            cause: TraversalCause::Io(err),
        }
    }

    pub(crate) fn visitor(path: impl Into<PathBuf>, err: E) -> Self {
        DiveError::Traversal {
            path: path.into(),
            cause: TraversalCause::Visitor(err),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DiveError::InvalidArgument(_))
    }

    /// Path of the entry being processed when the walk failed.
    pub fn path(&self) -> Option<&Path> {
        match self {
            DiveError::InvalidArgument(ArgumentError::NotADirectory(path)) => Some(path),
            DiveError::InvalidArgument(ArgumentError::InvalidDepth(_)) => None,
            DiveError::Traversal { path, .. } => Some(path),
        }
    }

    /// The visitor's error, if that is what stopped the walk.
    pub fn visitor_error(&self) -> Option<&E> {
        match self {
            DiveError::Traversal {
                cause: TraversalCause::Visitor(e),
                ..
            } => Some(e),
            _ => None,
        }
    }

    /// The underlying I/O error, if listing or stat failed.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            DiveError::Traversal {
                cause: TraversalCause::Io(e),
                ..
            } => Some(e),
            _ => None,
        }
    }

    /// Unwrap the visitor's error, discarding the path.
    pub fn into_visitor_error(self) -> Option<E> {
        match self {
            DiveError::Traversal {
                cause: TraversalCause::Visitor(e),
                ..
            } => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::error::Error as _;

    #[derive(Error, Debug, PartialEq)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn test_invalid_depth_message() {
        let err: DiveError<Infallible> = ArgumentError::InvalidDepth(-2).into();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("-2"));
        assert!(err.path().is_none());
    }

    #[test]
    fn test_not_a_directory_carries_path() {
        let err: DiveError<Infallible> =
            ArgumentError::NotADirectory(PathBuf::from("/tmp/file.txt")).into();
        assert_eq!(err.path(), Some(Path::new("/tmp/file.txt")));
    }

    #[test]
    fn test_visitor_error_is_wrapped_with_path() {
        let err = DiveError::visitor("/data/a.txt", Boom);
        assert_eq!(err.to_string(), "error occurred at /data/a.txt");
        assert_eq!(err.path(), Some(Path::new("/data/a.txt")));
        assert_eq!(err.visitor_error(), Some(&Boom));
        assert!(err.io_error().is_none());

        // Source chain: DiveError -> TraversalCause -> Boom
        let cause = err.source().expect("cause");
        assert_eq!(cause.to_string(), "visitor failed");
        assert_eq!(cause.source().map(|e| e.to_string()), Some("boom".into()));

        assert_eq!(err.into_visitor_error(), Some(Boom));
    }

    #[test]
    fn test_io_error_is_wrapped_with_path() {
        let err: DiveError<Boom> = DiveError::io(
            "/data/locked",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.io_error().map(|e| e.kind()),
            Some(io::ErrorKind::PermissionDenied)
        );
        assert!(err.visitor_error().is_none());
    }
}
