//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the mixin (degrading, never failing, on error)
//! - Build the HTTP server and its upstream client
//! - Bind the listener last, so traffic arrives only when ready
//!
//! # Design Decisions
//! - Fail fast on anything except the mixin: a bad bind address is fatal
//! - A missing mixin keeps the process up and every conversion fails closed

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::SubconvConfig;
use crate::http::HttpServer;
use crate::transform::Injector;

/// Error type for startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// A server ready to run on its bound listener.
pub struct Prepared {
    pub server: HttpServer,
    pub listener: TcpListener,
    pub injector: Arc<Injector>,
}

/// Initialize subsystems in dependency order and bind the listener.
pub async fn prepare(config: SubconvConfig) -> Result<Prepared, StartupError> {
    let injector = Arc::new(Injector::load(Path::new(&config.mixin.path)));
    let bind_address = config.listener.bind_address.clone();

    let server = HttpServer::new(config, injector.clone())?;

    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: bind_address,
            source,
        })?;

    Ok(Prepared {
        server,
        listener,
        injector,
    })
}
