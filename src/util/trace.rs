//! Installs a `tracing_subscriber` which prints spans emitted by the
//! planner (see the `tracing::instrument` attributes on the search entry
//! points) and forwards `log` records through the same formatter.
//!
//! Filtering follows the standard environment variable:
//! ```bash
//! RUST_LOG=route_planner=debug
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// This is optional, not calling this function will simply
/// not log traces.
///
/// Returns `false` if a global subscriber was already installed.
pub fn initialize_tracer() -> bool {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .try_init()
        .is_ok()
}
