//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and value ranges (timeouts > 0, limits > 0)
//! - Keep the inbound deadline above the upstream deadline
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SubconvConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::SubconvConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("timeouts.request_secs ({request}) must be at least upstream.timeout_secs ({upstream})")]
    RequestShorterThanUpstream { request: u64, upstream: u64 },

    #[error("mixin.path must not be empty")]
    EmptyMixinPath,
}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &SubconvConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.mixin.path.trim().is_empty() {
        errors.push(ValidationError::EmptyMixinPath);
    }

    let upstream = &config.upstream;
    if upstream.timeout_secs == 0 {
        errors.push(ValidationError::Zero { field: "upstream.timeout_secs" });
    }
    if upstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::Zero { field: "upstream.connect_timeout_secs" });
    }
    if upstream.max_body_bytes == 0 {
        errors.push(ValidationError::Zero { field: "upstream.max_body_bytes" });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero { field: "timeouts.request_secs" });
    } else if config.timeouts.request_secs < upstream.timeout_secs {
        errors.push(ValidationError::RequestShorterThanUpstream {
            request: config.timeouts.request_secs,
            upstream: upstream.timeout_secs,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
