//! Logging setup
//!
//! Diagnostic logs go to stderr through `tracing`; user-facing output is the
//! CLI's business and never goes through here.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "MPSCAFFOLD_LOG";

/// Initialize the tracing subscriber
///
/// The filter comes from `MPSCAFFOLD_LOG` when set. Otherwise only warnings
/// are shown, or everything from this workspace at `debug` when `verbose`.
/// Calling this twice is harmless; the second call is ignored.
///
/// # Example
///
/// ```rust
/// mpscaffold::observability::init(false);
/// tracing::info!("ready");
/// ```
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,mpscaffold=debug,mpscaffold_cli=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
