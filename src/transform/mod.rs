//! Subscription transform subsystem.
//!
//! # Data Flow
//! ```text
//! raw subscription text
//!     → parse into a mapping (duplicate keys: last wins; `<<` merges applied)
//!     → groups.rs (collapse proxy-groups to the renamed selector)
//!     → drop `rules`
//!     → merge.rs (union / overwrite mixin keys)
//!     → serialize back to YAML
//! ```
//!
//! # Design Decisions
//! - Pure function of (text, mixin); no I/O, no HTTP concerns
//! - All-or-nothing: any failure yields an error, never partial output
//! - The injector makes "mixin not loaded" an explicit state, checked first

pub mod groups;
pub mod injector;
pub mod merge;

use serde_yaml::Mapping;
use thiserror::Error;

use crate::mixin::Mixin;
use crate::yaml::parse_mapping;

pub use groups::{collapse_proxy_groups, CANONICAL_LABEL, SELECTOR_LABELS};
pub use injector::Injector;
pub use merge::merge_mixin;

/// Document key holding the routing rules, removed from every output.
pub const RULES_KEY: &str = "rules";

/// Error type for subscription transforms.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("mixin data was not loaded successfully, cannot inject mixin ({0})")]
    NotLoaded(String),

    #[error("invalid subscription document: {0}")]
    Parse(String),

    #[error("failed to serialize subscription: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

/// Apply proxy-group collapsing, rule removal and the mixin merge to `raw`.
pub fn inject(raw: &str, mixin: &Mixin) -> Result<String, TransformError> {
    let mut doc = parse_document(raw)?;

    match collapse_proxy_groups(&mut doc) {
        Some(name) => tracing::debug!(group = %name, "Selector group collapsed"),
        None => tracing::debug!("No selector group found, proxy-groups left as-is"),
    }

    doc.shift_remove(RULES_KEY);
    merge_mixin(&mut doc, mixin);

    serde_yaml::to_string(&doc).map_err(TransformError::Serialize)
}

fn parse_document(raw: &str) -> Result<Mapping, TransformError> {
    parse_mapping(raw).map_err(TransformError::Parse)
}
