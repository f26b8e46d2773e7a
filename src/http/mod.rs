//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign & propagate request ID)
//!     → convert.rs (validate → fetch → transform)
//!     → error.rs (map failures to status codes)
//!     → Send to client
//! ```

pub mod convert;
pub mod error;
pub mod request;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
