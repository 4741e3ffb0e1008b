//! Build configurator for the blaspack recipe.
//!
//! Translates the declarative option set plus platform facts into an
//! invocation of OpenBLAS's own build system and packages the result:
//!
//! - **plan** — pure: validate the option combination, apply the Windows
//!   NOFORTRAN normalization, and select Make or CMake by compiler
//!   identity (Visual-Studio-class toolchains require CMake because the
//!   upstream Makefiles do not support them).
//! - **execute** — effectful: run the selected tool's phases in sequence,
//!   copy the license, scan the installed libraries, and report consumer
//!   metadata.
//!
//! Splitting the two keeps every configuration decision observable in a
//! [`BuildPlan`] before anything touches the filesystem or spawns a
//! process.

pub mod cmake;
pub mod error;
pub mod execute;
pub mod invoke;
pub mod make;
pub mod package;
pub mod plan;
pub mod report;

// Re-exports for convenience.
pub use cmake::CmakePlan;
pub use error::{BuildError, Result};
pub use execute::{configure_and_build, execute};
pub use make::MakePlan;
pub use plan::{plan, BuildPlan, Toolchain};
pub use report::BuildReport;
