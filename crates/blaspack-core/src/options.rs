//! The declarative recipe option set.
//!
//! Six options, fixed at recipe-authoring time, translated by
//! `blaspack-build` into either Make arguments or CMake cache definitions.
//! The upstream option names (`USE_MASS`, `NO_LAPACKE`, ...) are kept in the
//! translated output; field names here follow Rust convention.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::targets::TargetSet;

/// The recipe's option set.
///
/// Constructed once per invocation from user overrides layered onto
/// defaults, then treated as immutable. The one exception is the
/// Windows/NOFORTRAN normalization, which the planner applies to its own
/// effective copy and reports via a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Produce shared libraries (`NO_STATIC=1`) instead of static
    /// (`NO_SHARED=1`).
    pub shared: bool,
    /// Link against the IBM MASS library.
    pub use_mass: bool,
    /// Thread with OpenMP instead of the internal pthreads pool.
    pub use_openmp: bool,
    /// Skip building the LAPACKE C interface.
    pub no_lapacke: bool,
    /// Build without a Fortran compiler (drops LAPACK).
    pub nofortran: bool,
    /// Target microarchitecture; `None` means upstream auto-detection
    /// default (the first entry of the target list).
    pub target: Option<String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            shared: true,
            use_mass: false,
            use_openmp: false,
            no_lapacke: true,
            nofortran: false,
            target: None,
        }
    }
}

impl BuildOptions {
    /// Defaults with the target pinned to the first entry of `targets`,
    /// mirroring the upstream recipe's default option string.
    pub fn with_default_target(targets: &TargetSet) -> Result<Self> {
        Ok(BuildOptions {
            target: Some(targets.first()?.to_string()),
            ..BuildOptions::default()
        })
    }

    /// Check the requested target against the set of valid names.
    ///
    /// This is the only validation the option set gets; everything else is
    /// a free boolean choice.
    pub fn validate_target(&self, targets: &TargetSet) -> Result<()> {
        match &self.target {
            Some(t) if !targets.contains(t) => Err(CoreError::UnknownTarget { target: t.clone() }),
            _ => Ok(()),
        }
    }
}

/// Stringify a boolean option for the Make path.
pub fn make_flag(option: bool) -> &'static str {
    if option {
        "1"
    } else {
        "0"
    }
}

/// Stringify a boolean option for a CMake cache definition.
pub fn cmake_flag(option: bool) -> &'static str {
    if option {
        "ON"
    } else {
        "OFF"
    }
}
