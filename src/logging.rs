//! Tracing subscriber setup
//!
//! The library itself only emits `tracing` events; binaries and tests call
//! [`init_tracing`] to see them.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stdout subscriber filtered by `directives` (e.g.
/// `"outreach_metrics=debug"`).
///
/// Invalid directives fall back to `info`. Returns `false` if a global
/// subscriber was already installed, so repeated calls are harmless.
pub fn init_tracing(directives: &str) -> bool {
    let env_filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}
