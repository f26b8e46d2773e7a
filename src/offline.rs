//! Offline conversion of a subscription file on disk.
//!
//! Same transform as the HTTP path, minus the fetch: read the input file, inject the
//! mixin, write the output file. Nothing is written unless the conversion succeeds.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::transform::{Injector, TransformError};

/// Error type for offline conversion.
#[derive(Debug, Error)]
pub enum OfflineError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convert `input` with the mixin at `mixin` and write the result to `output`.
///
/// Returns the number of bytes written.
pub fn convert_file(input: &Path, mixin: &Path, output: &Path) -> Result<usize, OfflineError> {
    let injector = Injector::load(mixin);

    let raw = fs::read_to_string(input).map_err(|source| OfflineError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let converted = injector.inject(&raw)?;

    fs::write(output, &converted).map_err(|source| OfflineError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        bytes = converted.len(),
        "Conversion written"
    );
    Ok(converted.len())
}
