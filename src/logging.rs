//! Log setup for the `diver` binary
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the host program. This is the one the CLI uses.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("diver=debug,warn")
    } else {
        EnvFilter::new("diver=info,warn")
    }
}

/// Install a plain-text subscriber on stderr.
///
/// `RUST_LOG` takes precedence over `verbose`. Calling this twice is harmless;
/// the second call leaves the first subscriber in place.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert!(default_filter(false).to_string().contains("diver=info"));
        assert!(default_filter(true).to_string().contains("diver=debug"));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(false);
        init_logging(true);
        tracing::debug!("still alive");
    }
}
