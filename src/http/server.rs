//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the conversion handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Stop on OS signal or internal shutdown trigger

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::SubconvConfig;
use crate::http::convert::convert;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::signals::shutdown_signal;
use crate::transform::Injector;
use crate::upstream::SubscriptionFetcher;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub injector: Arc<Injector>,
    pub fetcher: SubscriptionFetcher,
}

/// HTTP server for the subscription converter.
pub struct HttpServer {
    router: Router,
    config: SubconvConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and injector.
    pub fn new(config: SubconvConfig, injector: Arc<Injector>) -> Result<Self, reqwest::Error> {
        let fetcher = SubscriptionFetcher::new(&config.upstream)?;
        let state = AppState { injector, fetcher };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SubconvConfig, state: AppState) -> Router {
        Router::new()
            .route("/convert", get(convert))
            .with_state(state)
            .layer(propagate_request_id_layer())
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops on an OS signal, when `shutdown` fires, or when its sender is dropped.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown triggered");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
