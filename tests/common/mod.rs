//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use subconv::config::SubconvConfig;
use subconv::{HttpServer, Injector, Mixin, Shutdown};
use tokio::net::TcpListener;

pub const SUBSCRIPTION: &str = r#"
port: 7890
proxies:
  - {name: hk-01, type: ss, server: hk.example.com, port: 443, cipher: aes-128-gcm, password: pw}
proxy-groups:
  - name: auto
    type: url-test
    proxies: [hk-01]
  - name: 代理
    type: select
    proxies: [auto, hk-01]
rules:
  - MATCH,代理
"#;

pub const MIXIN: &str = r#"
mode: rule
dns:
  enable: true
proxies:
  - {name: local, type: socks5, server: 127.0.0.1, port: 1080}
"#;

/// Start a mock subscription provider and return its address.
///
/// - `/sub` serves [`SUBSCRIPTION`]
/// - `/missing` returns 404
/// - `/broken` serves text that is not a YAML mapping
/// - `/slow` answers after five seconds
/// - `/latin1` serves a mapping containing a byte that is not valid UTF-8
pub async fn start_mock_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/sub", get(|| async { SUBSCRIPTION }))
        .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "no such subscription") }))
        .route("/broken", get(|| async { "proxies: [unclosed" }))
        .route("/latin1", get(|| async { b"port: 7890\nname: caf\xe9\n".to_vec() }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                SUBSCRIPTION
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

/// Configuration suitable for local tests: no system proxy, short deadlines.
pub fn test_config() -> SubconvConfig {
    let mut config = SubconvConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.upstream.use_system_proxy = false;
    config.upstream.timeout_secs = 2;
    config.upstream.connect_timeout_secs = 1;
    config.timeouts.request_secs = 10;
    config
}

pub fn loaded_injector() -> Arc<Injector> {
    Arc::new(Injector::new(Mixin::from_yaml(MIXIN).unwrap()))
}

/// Run the converter on an ephemeral port. Keep the returned [`Shutdown`] alive.
pub async fn start_converter(config: SubconvConfig, injector: Arc<Injector>) -> (SocketAddr, Shutdown) {
    let server = HttpServer::new(config, injector).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });
    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
