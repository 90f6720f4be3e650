//! Configuration types for dives

use std::num::NonZeroUsize;

use crate::error::ArgumentError;

/// Sentinel accepted wherever an integer depth limit is taken.
pub const UNLIMITED_DEPTH: i64 = -1;

/// How many levels below the root a dive may reach.
///
/// Direct children of the root sit at depth 1. With `Levels(n)`, entries at
/// depth `n` are still visited but directories there are not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DepthLimit {
    #[default]
    Unlimited,
    Levels(NonZeroUsize),
}

impl DepthLimit {
    /// Build a bounded limit; `0` is rejected.
    pub fn levels(n: usize) -> Result<Self, ArgumentError> {
        NonZeroUsize::new(n)
            .map(DepthLimit::Levels)
            .ok_or(ArgumentError::InvalidDepth(0))
    }

    /// Whether a directory at `depth` may have its children listed.
    pub fn allows_descent_from(&self, depth: usize) -> bool {
        match self {
            DepthLimit::Unlimited => true,
            DepthLimit::Levels(max) => depth < max.get(),
        }
    }
}

impl TryFrom<i64> for DepthLimit {
    type Error = ArgumentError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value == UNLIMITED_DEPTH {
            return Ok(DepthLimit::Unlimited);
        }
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(DepthLimit::Levels)
            .ok_or(ArgumentError::InvalidDepth(value))
    }
}

impl From<NonZeroUsize> for DepthLimit {
    fn from(n: NonZeroUsize) -> Self {
        DepthLimit::Levels(n)
    }
}

/// Configuration for dive behavior.
#[derive(Debug, Clone, Default)]
pub struct DiveConfig {
    pub depth_limit: DepthLimit,
    /// Classify symlinks by their target, descending into linked directories.
    /// Off by default so link cycles cannot occur.
    pub follow_links: bool,
    /// Visit siblings in file-name order instead of listing order.
    pub sort_entries: bool,
}

impl DiveConfig {
    pub fn with_depth_limit(mut self, depth_limit: DepthLimit) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    pub fn sort_entries(mut self, yes: bool) -> Self {
        self.sort_entries = yes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_unlimited() {
        assert_eq!(DepthLimit::try_from(UNLIMITED_DEPTH), Ok(DepthLimit::Unlimited));
    }

    #[test]
    fn test_positive_depths_accepted() {
        assert_eq!(DepthLimit::try_from(1), DepthLimit::levels(1));
        assert_eq!(
            DepthLimit::try_from(7),
            Ok(DepthLimit::Levels(NonZeroUsize::new(7).unwrap()))
        );
    }

    #[test]
    fn test_zero_and_other_negatives_rejected() {
        for bad in [0, -2, -100, i64::MIN] {
            assert_eq!(
                DepthLimit::try_from(bad),
                Err(ArgumentError::InvalidDepth(bad)),
                "depth {bad} should be rejected"
            );
        }
        assert_eq!(DepthLimit::levels(0), Err(ArgumentError::InvalidDepth(0)));
    }

    #[test]
    fn test_descent_rules() {
        let one = DepthLimit::levels(1).unwrap();
        assert!(!one.allows_descent_from(1));

        let two = DepthLimit::levels(2).unwrap();
        assert!(two.allows_descent_from(1));
        assert!(!two.allows_descent_from(2));

        assert!(DepthLimit::Unlimited.allows_descent_from(10_000));
    }

    #[test]
    fn test_default_config() {
        let config = DiveConfig::default();
        assert_eq!(config.depth_limit, DepthLimit::Unlimited);
        assert!(!config.follow_links);
        assert!(!config.sort_entries);

        let config = DiveConfig::default().sort_entries(true).follow_links(true);
        assert!(config.sort_entries && config.follow_links);
    }
}
