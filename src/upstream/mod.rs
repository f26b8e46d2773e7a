//! Upstream subscription subsystem.
//!
//! # Data Flow
//! ```text
//! subscription_url query value
//!     → url.rs (decode, structural parse, strict pattern)
//!     → fetch.rs (GET with deadlines and a body limit)
//!     → raw subscription text for the transform
//! ```

pub mod fetch;
pub mod url;

pub use fetch::{FetchError, SubscriptionFetcher};
pub use self::url::{decode_subscription_url, validate_subscription_url, InvalidUrl};
