//! The execution stage: run the planned phases and package the result.

use std::path::Path;

use blaspack_core::{BuildOptions, PlatformFacts, ToolchainEnv};

use crate::error::Result;
use crate::invoke::run_tool;
use crate::package;
use crate::plan::{plan, BuildPlan, Toolchain};
use crate::report::BuildReport;

/// Execute a build plan against an unpacked source tree.
///
/// Phases run strictly in sequence (build, install, license copy, artifact
/// collection) with no retry. A failure leaves the source tree and any
/// partial package output in place for inspection.
pub fn execute(plan: &BuildPlan, source_dir: &Path, package_dir: &Path) -> Result<BuildReport> {
    std::fs::create_dir_all(package_dir)?;

    match &plan.toolchain {
        Toolchain::Make(make) => {
            run_tool("make", make.build_args(), source_dir)?;
            run_tool("make", &make.install_args(package_dir), source_dir)?;
        }
        Toolchain::Cmake(cmake) => {
            run_tool("cmake", &cmake.configure_args(package_dir), source_dir)?;
            run_tool("cmake", &cmake.build_args(), source_dir)?;
            run_tool("cmake", &cmake.install_args(), source_dir)?;
        }
    }

    package::copy_license(source_dir, package_dir)?;
    package::collect(plan, package_dir)
}

/// The recipe's single entry point: plan, then execute.
///
/// Configuration problems surface before any subprocess is started.
pub fn configure_and_build(
    options: &BuildOptions,
    platform: &PlatformFacts,
    env: &ToolchainEnv,
    source_dir: &Path,
    package_dir: &Path,
) -> Result<BuildReport> {
    let built = plan(options, platform, env)?;
    execute(&built, source_dir, package_dir)
}
