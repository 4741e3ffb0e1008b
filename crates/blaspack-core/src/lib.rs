//! Core data model for the blaspack recipe.
//!
//! Everything here is pure and I/O-free: the declarative option set, the
//! snapshot of the build platform, the toolchain environment overrides, and
//! the set of valid target microarchitecture identifiers. Acquisition of the
//! target set over the network lives in `blaspack-fetch`; translation into
//! external build-tool invocations lives in `blaspack-build`.

pub mod error;
pub mod options;
pub mod platform;
pub mod targets;
pub mod toolchain;

// Re-exports for convenience.
pub use error::{CoreError, Result};
pub use options::BuildOptions;
pub use platform::{Arch, BuildType, Compiler, Os, PlatformFacts};
pub use targets::TargetSet;
pub use toolchain::ToolchainEnv;
