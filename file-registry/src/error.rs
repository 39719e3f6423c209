//! Registry error types.
//!
//! Returned by [`crate::RegistryStore`] implementations. [`crate::FileRegistry`] logs them
//! instead of propagating, so callers only see these when using a store directly.

use thiserror::Error;

/// Errors that can occur when loading or saving the registry cache.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed cache file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize registry: {0}")]
    Serialize(#[from] serde_json::Error),
}
