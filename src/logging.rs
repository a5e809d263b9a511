//! `tracing` setup for the binaries.
//!
//! Events go to stderr so stdout stays clean for the poem or JSON output.
//! `RUST_LOG` overrides the default filter.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Later calls are no-ops.
///
/// `verbose` raises the default filter to `debug` for this crate.
pub fn init_logging(verbose: bool) {
    if INITIALIZED.get().is_some() {
        return;
    }

    let default_filter = if verbose {
        "warn,urdu_verse=debug"
    } else {
        DEFAULT_FILTER
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // try_init fails only if another subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
    let _ = INITIALIZED.set(());
}
