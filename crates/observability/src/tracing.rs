//! Process-wide log subscriber for the stockroom binaries.
//!
//! Events are written as one JSON object per line. `RUST_LOG` overrides
//! [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

/// Stockroom crates log at `info`; third-party crates only at `warn`.
pub const DEFAULT_FILTER: &str = "warn,stockroom_core=info,stockroom_inventory=info,stockroom_suppliers=info,\
stockroom_ai=info,stockroom_dashboard=info,stockroom_demo=info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the JSON subscriber. Later calls leave the first one in place.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init();
}
