//! Structured logging.
//!
//! `RUST_LOG` wins over the configured level, so operators can raise verbosity without
//! touching the config file.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `default_level` is used when `RUST_LOG` is unset.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(default_level).into());

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if let Err(e) = result {
        eprintln!("logging already initialized: {e}");
    }
}

/// Filter directives for our crate and the HTTP middleware at `level`.
pub fn default_filter(level: &str) -> String {
    format!("subconv={level},subconv_local={level},tower_http={level}")
}
