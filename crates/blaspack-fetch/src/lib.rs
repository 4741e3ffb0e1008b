//! Remote acquisition for the blaspack recipe.
//!
//! Two downloads, both sequential and performed once per invocation:
//!
//! - the upstream `TargetList.txt` manifest, integrity-checked against a
//!   fixed SHA-256 digest and parsed into a [`TargetSet`];
//! - the versioned release archive, unpacked into the work directory with
//!   its top-level directory renamed to `sources`.
//!
//! Verification and parsing are pure functions over the fetched bytes, so
//! tests run against fixtures without touching the network.
//!
//! [`TargetSet`]: blaspack_core::TargetSet

pub mod archive;
pub mod error;
pub mod http;
pub mod integrity;
pub mod manifest;

// Re-exports for convenience.
pub use archive::{fetch_source, source_url, unpack_source, SOURCES_DIR};
pub use error::{FetchError, Result};
pub use integrity::Digest;
pub use manifest::{
    fetch_target_set, parse_targets, parse_verified, target_list_url, TARGET_LIST_DIGEST,
};
