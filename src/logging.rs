//! Tracing subscriber setup for the binary
//!
//! The library only emits events; installing a subscriber is left to the
//! application so embedding front ends can route logs their own way.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "finance_tracker=warn";

/// Install a stderr subscriber filtered by `RUST_LOG`
///
/// `verbose` raises the crate's level to debug. Safe to call more than once.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let default = if verbose {
            "finance_tracker=debug"
        } else {
            DEFAULT_FILTER
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        // A subscriber may already be installed by an embedding application
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
