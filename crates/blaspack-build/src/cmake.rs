//! CMake-path cache definitions and invocation arguments.
//!
//! Known limitation, preserved from the upstream recipe: only the four
//! boolean options below are forwarded as cache variables. `shared`,
//! `TARGET`, the bitness flag, and the debug flag are NOT propagated on
//! this path, so CMake-path builds silently use upstream defaults for them.
//! Every CMake plan carries a warning saying so; the planner refuses the
//! one combination the upstream tree cannot build (MSVC static) before
//! this module is ever reached.

use std::path::Path;

use blaspack_core::options::cmake_flag;
use blaspack_core::BuildOptions;

/// Build directory created inside the source tree for the CMake path.
pub const BUILD_DIR: &str = "build";

/// The cache definitions and phase arguments for a CMake-path build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmakePlan {
    definitions: Vec<(String, String)>,
}

impl CmakePlan {
    /// Translate the four forwarded options into cache definitions, in the
    /// upstream recipe's order.
    pub fn new(options: &BuildOptions) -> Self {
        let definitions = [
            ("USE_MASS", options.use_mass),
            ("USE_OPENMP", options.use_openmp),
            ("NO_LAPACKE", options.no_lapacke),
            ("NOFORTRAN", options.nofortran),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), cmake_flag(value).to_string()))
        .collect();
        CmakePlan { definitions }
    }

    /// The cache-variable set: exactly the four forwarded options.
    pub fn definitions(&self) -> &[(String, String)] {
        &self.definitions
    }

    /// Arguments for the configure phase, run from the source tree.
    pub fn configure_args(&self, install_prefix: &Path) -> Vec<String> {
        let mut args = vec![
            "-S".to_string(),
            ".".to_string(),
            "-B".to_string(),
            BUILD_DIR.to_string(),
            format!("-DCMAKE_INSTALL_PREFIX={}", install_prefix.display()),
        ];
        for (name, value) in &self.definitions {
            args.push(format!("-D{name}={value}"));
        }
        args
    }

    /// Arguments for the build phase.
    pub fn build_args(&self) -> Vec<String> {
        vec!["--build".to_string(), BUILD_DIR.to_string()]
    }

    /// Arguments for the install phase.
    pub fn install_args(&self) -> Vec<String> {
        vec!["--install".to_string(), BUILD_DIR.to_string()]
    }
}
