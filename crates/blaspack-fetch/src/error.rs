//! Fetch error types.
//!
//! Integrity failures are deliberately distinct from transport failures so
//! callers can tell "server reachable but content untrusted" from "server
//! unreachable". Nothing here is retried.

use thiserror::Error;

/// Errors that can occur while acquiring remote inputs.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered, but not with the resource.
    #[error("unexpected HTTP status {status} fetching {url}")]
    HttpStatus { url: String, status: u16 },

    /// Fetched content does not match the pinned digest.
    #[error("integrity check failed for {url}: expected {expected}, got {actual}")]
    IntegrityMismatch {
        url: String,
        expected: String,
        actual: String,
    },

    /// The unpacked archive does not have the expected single top-level
    /// source directory.
    #[error("unexpected archive layout: {detail}")]
    ArchiveLayout { detail: String },

    /// I/O error while writing or unpacking.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
