//! The planning stage: validate, normalize, dispatch.
//!
//! Planning is pure: no environment reads, no filesystem, no subprocess.
//! Everything the execution stage will do is decided here and visible in
//! the returned [`BuildPlan`], so the configurator's behavior is checkable
//! in tests without running the external tool.

use blaspack_core::{BuildOptions, Os, PlatformFacts, ToolchainEnv};

use crate::cmake::CmakePlan;
use crate::error::{BuildError, Result};
use crate::make::MakePlan;

/// Warning recorded on every CMake-path plan.
pub const CMAKE_DROPPED_OPTIONS: &str =
    "building with CMake: shared, TARGET, BINARY, and DEBUG take no effect on this path";

/// Warning recorded when the Windows normalization overrides NOFORTRAN.
pub const WINDOWS_NOFORTRAN: &str = "NOFORTRAN is not honored on Windows; forcing to false";

/// The selected toolchain, decided exactly once at planning time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toolchain {
    Make(MakePlan),
    Cmake(CmakePlan),
}

impl Toolchain {
    /// Name of the external tool this plan invokes.
    pub fn tool(&self) -> &'static str {
        match self {
            Toolchain::Make(_) => "make",
            Toolchain::Cmake(_) => "cmake",
        }
    }
}

/// A fully decided build: effective options, selected toolchain, warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    /// Options after normalization, i.e. what the build will actually see.
    pub options: BuildOptions,
    /// The platform facts the plan was made for.
    pub platform: PlatformFacts,
    /// Toolchain selected by compiler identity.
    pub toolchain: Toolchain,
    /// Warnings accumulated during planning, for the caller to surface.
    pub warnings: Vec<String>,
}

/// Validate the option set against the platform, normalize it, and select
/// the toolchain.
///
/// Visual-Studio-class toolchains must go through CMake (the upstream
/// Makefiles do not support them) and cannot produce static output there,
/// so that combination is rejected before anything runs. On Windows the
/// effective `nofortran` is forced to `false` regardless of the request,
/// with a warning recorded once.
pub fn plan(
    options: &BuildOptions,
    platform: &PlatformFacts,
    env: &ToolchainEnv,
) -> Result<BuildPlan> {
    if platform.compiler.is_msvc() && !options.shared {
        return Err(BuildError::UnsupportedConfiguration {
            detail: "static build is not supported with the Visual Studio toolchain".to_string(),
        });
    }

    let mut effective = options.clone();
    let mut warnings = Vec::new();

    if platform.os == Os::Windows && effective.nofortran {
        effective.nofortran = false;
        warnings.push(WINDOWS_NOFORTRAN.to_string());
    }

    let toolchain = if platform.compiler.is_msvc() {
        warnings.push(CMAKE_DROPPED_OPTIONS.to_string());
        Toolchain::Cmake(CmakePlan::new(&effective))
    } else {
        Toolchain::Make(MakePlan::new(&effective, platform, env)?)
    };

    Ok(BuildPlan {
        options: effective,
        platform: *platform,
        toolchain,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use blaspack_core::{Arch, BuildType, Compiler};

    fn windows_mingw() -> PlatformFacts {
        PlatformFacts {
            compiler: Compiler::Gcc,
            ..PlatformFacts::windows_msvc()
        }
    }

    #[test]
    fn msvc_static_rejected_before_anything_runs() {
        let options = BuildOptions {
            shared: false,
            ..BuildOptions::default()
        };
        let err = plan(
            &options,
            &PlatformFacts::windows_msvc(),
            &ToolchainEnv::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BuildError::UnsupportedConfiguration { .. }));
    }

    #[test]
    fn msvc_selects_cmake() {
        let built = plan(
            &BuildOptions::default(),
            &PlatformFacts::windows_msvc(),
            &ToolchainEnv::default(),
        )
        .unwrap();
        assert!(matches!(built.toolchain, Toolchain::Cmake(_)));
        assert_eq!(built.toolchain.tool(), "cmake");
        assert!(built.warnings.contains(&CMAKE_DROPPED_OPTIONS.to_string()));
    }

    #[test]
    fn non_msvc_selects_make() {
        let built = plan(
            &BuildOptions::default(),
            &PlatformFacts::linux_x86_64(),
            &ToolchainEnv::default(),
        )
        .unwrap();
        assert!(matches!(built.toolchain, Toolchain::Make(_)));
        assert_eq!(built.toolchain.tool(), "make");
        assert!(built.warnings.is_empty());
    }

    #[test]
    fn windows_forces_nofortran_false_with_one_warning() {
        let options = BuildOptions {
            nofortran: true,
            ..BuildOptions::default()
        };
        let built = plan(&options, &windows_mingw(), &ToolchainEnv::default()).unwrap();
        assert!(!built.options.nofortran);
        let count = built
            .warnings
            .iter()
            .filter(|w| *w == WINDOWS_NOFORTRAN)
            .count();
        assert_eq!(count, 1);

        // The effective value is what reaches the argument list.
        match &built.toolchain {
            Toolchain::Make(make) => {
                assert!(make.build_args().contains(&"NOFORTRAN=0".to_string()));
            }
            Toolchain::Cmake(_) => panic!("mingw build should take the Make path"),
        }
    }

    #[test]
    fn windows_nofortran_already_false_is_silent() {
        let built = plan(
            &BuildOptions::default(),
            &windows_mingw(),
            &ToolchainEnv::default(),
        )
        .unwrap();
        assert!(!built.options.nofortran);
        assert!(built.warnings.is_empty());
    }

    #[test]
    fn non_windows_keeps_nofortran() {
        let options = BuildOptions {
            nofortran: true,
            ..BuildOptions::default()
        };
        let built = plan(
            &options,
            &PlatformFacts::linux_x86_64(),
            &ToolchainEnv::default(),
        )
        .unwrap();
        assert!(built.options.nofortran);
        assert!(built.warnings.is_empty());
    }

    #[test]
    fn end_to_end_linux_gcc_scenario() {
        let options = BuildOptions {
            target: Some("NEHALEM".to_string()),
            ..BuildOptions::default()
        };
        let platform = PlatformFacts {
            os: Os::Linux,
            arch: Arch::X86_64,
            compiler: Compiler::Gcc,
            build_type: BuildType::Release,
            cross_build: false,
        };
        let built = plan(&options, &platform, &ToolchainEnv::default()).unwrap();
        match &built.toolchain {
            Toolchain::Make(make) => assert_eq!(
                make.build_args(),
                &[
                    "DEBUG=0",
                    "BINARY=64",
                    "NO_LAPACKE=1",
                    "USE_MASS=0",
                    "USE_OPENMP=0",
                    "NOFORTRAN=0",
                    "NO_STATIC=1",
                    "TARGET=NEHALEM",
                ]
            ),
            Toolchain::Cmake(_) => panic!("gcc build should take the Make path"),
        }
    }
}
