//! Structured logging setup for programs embedding the sorter.
//!
//! The library only emits `tracing` events; nothing is printed unless the
//! host installs a subscriber, either its own or the one from [`init`].

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor the debug flag is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the filter. Priority: `RUST_LOG` > `debug` > [`DEFAULT_LOG_LEVEL`].
fn build_filter(debug: bool) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    }
}

/// Install a compact stderr subscriber.
///
/// Returns `false` if a global subscriber was already set, in which case
/// the existing one is left alone.
pub fn init(debug: bool) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(debug))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Logging initialised");
    }
    installed
}
