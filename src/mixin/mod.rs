//! Mixin document subsystem.
//!
//! # Data Flow
//! ```text
//! mixin.yaml (read once at startup)
//!     → loader.rs (read & parse into a mapping)
//!     → Mixin (immutable for the process lifetime)
//!     → Injector (transform::injector), shared via Arc to every request
//! ```
//!
//! # Design Decisions
//! - Load either fully succeeds or fully fails; no partial mixin
//! - A failed load never crashes the process; it degrades injection instead

pub mod loader;

pub use loader::{Mixin, MixinError};
