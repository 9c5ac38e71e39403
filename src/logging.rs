// src/logging.rs
//! Subscriber setup for the binary. Library code only emits events.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "lineage_core=debug,lineage=debug"
    } else {
        "lineage_core=warn,lineage=warn"
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `verbose`.
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
