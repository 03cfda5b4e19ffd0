//! Error types for catalog-core

use std::path::PathBuf;

/// Result type for catalog-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scanning and parsing definition files.
///
/// The whole pipeline is fail-fast: the first error aborts the run and no
/// output file is written.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A field marker appeared on the last line of a definition file, so no
    /// value line follows it.
    #[error("marker {marker} on last line ({line}) of {path} has no value line")]
    TrailingMarker {
        path: PathBuf,
        marker: &'static str,
        line: usize,
    },

    /// An extension version could not be parsed as a number.
    #[error("invalid version '{version}' in {path}: {source}")]
    InvalidVersion {
        path: PathBuf,
        version: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Failed to serialize the catalog to JSON.
    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
