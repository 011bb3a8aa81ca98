//! Process-wide `tracing` setup for the binary.

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or cannot be parsed.
pub const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn,sea_orm=warn";

/// Builds the log filter from a raw `RUST_LOG` value, falling back to
/// [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn resolve_filter(raw: Option<&str>) -> EnvFilter {
    raw.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Loads `.env`, then installs the `fmt` subscriber.
///
/// `.env` is read first so a `RUST_LOG` set there reaches the filter. Variables
/// already present in the environment take precedence over the file.
pub fn init() {
    dotenv().ok();
    let raw = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(raw.as_deref()))
        .init();
}
