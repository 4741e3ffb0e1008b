//! Make-path argument construction.
//!
//! OpenBLAS's Makefiles take the whole configuration as `KEY=value`
//! arguments on the command line. The relative order is fixed: the six
//! option flags, the static/shared switch, then the conditional
//! `HOSTCC`/`TARGET`/`CC`/`AR` entries, then whatever the caller appends
//! (the install phase adds `PREFIX=<dir> install`).

use std::path::Path;

use blaspack_core::options::make_flag;
use blaspack_core::{BuildOptions, PlatformFacts, ToolchainEnv};

use crate::error::{BuildError, Result};

/// The fully resolved argument list for a Make-path build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakePlan {
    args: Vec<String>,
}

impl MakePlan {
    /// Translate options, platform facts, and toolchain overrides into the
    /// ordered Make argument list.
    ///
    /// Fails only when a cross build cannot resolve a host C compiler.
    pub fn new(
        options: &BuildOptions,
        platform: &PlatformFacts,
        env: &ToolchainEnv,
    ) -> Result<Self> {
        let mut args = vec![
            format!("DEBUG={}", platform.build_type.debug_flag()),
            format!("BINARY={}", platform.arch.bitness()),
            format!("NO_LAPACKE={}", make_flag(options.no_lapacke)),
            format!("USE_MASS={}", make_flag(options.use_mass)),
            format!("USE_OPENMP={}", make_flag(options.use_openmp)),
            format!("NOFORTRAN={}", make_flag(options.nofortran)),
        ];

        if options.shared {
            args.push("NO_STATIC=1".to_string());
        } else {
            args.push("NO_SHARED=1".to_string());
        }

        if platform.cross_build {
            let hostcc = env
                .resolve_host_cc()
                .ok_or(BuildError::HostCompilerNotFound)?;
            args.push(format!("HOSTCC={}", hostcc.display()));
        }

        if let Some(target) = &options.target {
            args.push(format!("TARGET={target}"));
        }

        if let Some(cc) = &env.cc {
            args.push(format!("CC={cc}"));
        }
        if let Some(ar) = &env.ar {
            args.push(format!("AR={ar}"));
        }

        Ok(MakePlan { args })
    }

    /// Arguments for the build phase.
    pub fn build_args(&self) -> &[String] {
        &self.args
    }

    /// The build arguments with trailing caller-supplied extras appended.
    pub fn args_with(&self, extra: &[String]) -> Vec<String> {
        let mut args = self.args.clone();
        args.extend_from_slice(extra);
        args
    }

    /// Arguments for the install phase: the build arguments plus
    /// `PREFIX=<package dir>` and the `install` goal.
    pub fn install_args(&self, prefix: &Path) -> Vec<String> {
        self.args_with(&[format!("PREFIX={}", prefix.display()), "install".to_string()])
    }
}
