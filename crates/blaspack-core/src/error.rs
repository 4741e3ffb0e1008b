//! Core error types.

use thiserror::Error;

/// Errors from constructing or validating the recipe data model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Requested target is not in the set of valid microarchitectures.
    #[error("unknown target '{target}' (not in the upstream target list)")]
    UnknownTarget { target: String },

    /// The target set is empty, so no default target can be chosen.
    #[error("target list is empty")]
    EmptyTargetSet,
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
