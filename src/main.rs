//! Clash subscription converter.
//!
//! # Architecture Overview
//!
//! ```text
//!   GET /convert?subscription_url=...
//!        │
//!        ▼
//!   ┌──────────┐   ┌──────────────┐   ┌──────────────┐   ┌────────────┐
//!   │   http   │──▶│ upstream::url│──▶│upstream::    │──▶│ transform  │──▶ text/plain YAML
//!   │  server  │   │  validation  │   │fetch (GET)   │   │ + mixin    │
//!   └──────────┘   └──────────────┘   └──────────────┘   └────────────┘
//!                                                              ▲
//!                                     mixin.yaml ── loaded once at startup
//! ```

use std::path::PathBuf;

use clap::Parser;

use subconv::config::{load_config, validate_config, SubconvConfig};
use subconv::lifecycle::{prepare, Shutdown};
use subconv::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "subconv")]
#[command(about = "Serve Clash subscriptions merged with a local mixin", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override mixin.path.
    #[arg(short, long)]
    mixin: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SubconvConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(mixin) = cli.mixin {
        config.mixin.path = mixin.display().to_string();
    }
    validate_config(&config).map_err(subconv::config::ConfigError::Validation)?;

    logging::init(&config.observability.log_level);
    tracing::info!("subconv v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        mixin_path = %config.mixin.path,
        upstream_timeout_secs = config.upstream.timeout_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // validated above
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let prepared = prepare(config).await?;
    if !prepared.injector.is_loaded() {
        tracing::warn!("Serving without a mixin: every conversion will fail until restart");
    }

    let shutdown = Shutdown::new();
    prepared
        .server
        .run(prepared.listener, shutdown.subscribe())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
