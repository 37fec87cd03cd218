//! Shared tracing/logging initialisation.
//!
//! Apps embedding the framework call [`init_tracing`] once at startup. The
//! filter comes from `RUST_LOG` when set, otherwise from the caller's
//! default (e.g. `"colloquy=info"`).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Text,
    /// Structured JSON lines.
    Json,
}

/// Initialise the global tracing subscriber.
pub fn init_tracing(default_filter: &str, format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
    );
    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}
