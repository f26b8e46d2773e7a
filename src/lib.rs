//! Clash subscription converter library.
//!
//! Fetches a remote subscription, collapses its proxy groups to one selector, drops its
//! rules, merges a local mixin document into it and serves the result over HTTP.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod mixin;
pub mod observability;
pub mod offline;
pub mod transform;
pub mod upstream;
pub mod yaml;

pub use config::SubconvConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use mixin::Mixin;
pub use transform::{inject, Injector, TransformError};
