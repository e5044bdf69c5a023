use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a global fmt subscriber. `RUST_LOG` wins over `log_level` when
/// set. Returns `false` when a global subscriber was already installed, in
/// which case the existing one is kept.
pub fn init_tracing(log_level: &str) -> bool {
    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
    match result {
        Ok(()) => true,
        Err(error) => {
            debug!(%error, "tracing subscriber already installed");
            false
        }
    }
}
