//! Load-once injection state shared by every request.

use std::path::Path;

use crate::mixin::{Mixin, MixinError};
use crate::transform::{inject, TransformError};

/// The startup outcome of mixin loading, plus the transform that depends on it.
///
/// Built once, then shared read-only. When the mixin failed to load, every call to
/// [`Injector::inject`] fails with [`TransformError::NotLoaded`] instead of passing the
/// subscription through unmodified.
#[derive(Debug)]
pub struct Injector {
    mixin: Result<Mixin, String>,
}

impl Injector {
    /// Load the mixin at `path`. A failure is logged and yields an unavailable injector.
    pub fn load(path: &Path) -> Self {
        match Mixin::load(path) {
            Ok(mixin) => {
                if mixin.is_empty() {
                    tracing::warn!(
                        path = %path.display(),
                        "Mixin has no keys, only groups and rules change"
                    );
                } else {
                    tracing::info!(path = %path.display(), keys = mixin.len(), "Mixin loaded");
                }
                Self::new(mixin)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load mixin data, injection disabled");
                Self::unavailable(e)
            }
        }
    }

    pub fn new(mixin: Mixin) -> Self {
        Self { mixin: Ok(mixin) }
    }

    pub fn unavailable(error: MixinError) -> Self {
        Self {
            mixin: Err(error.to_string()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.mixin.is_ok()
    }

    /// Transform `raw` with the loaded mixin.
    pub fn inject(&self, raw: &str) -> Result<String, TransformError> {
        match &self.mixin {
            Ok(mixin) => inject(raw, mixin),
            Err(reason) => Err(TransformError::NotLoaded(reason.clone())),
        }
    }
}
