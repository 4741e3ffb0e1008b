//! `blaspack build` — plan, run the external build, package, report.

use std::path::Path;

use anyhow::{bail, Result};
use blaspack_build::{execute, plan};
use blaspack_core::{BuildOptions, BuildType, PlatformFacts, ToolchainEnv};

use crate::manifest::RecipeManifest;
use crate::workdir::{self, Layout};

/// Option overrides from the command line, layered over the manifest.
#[derive(Debug, Default)]
pub struct BuildOverrides {
    pub target: Option<String>,
    pub static_build: bool,
    pub debug: bool,
}

/// Run the full configure/build/package sequence.
///
/// The source tree must already be unpacked (`blaspack fetch`); the target
/// list comes from the work-dir cache, fetched on first use.
pub fn run(
    project_dir: &Path,
    manifest: &RecipeManifest,
    overrides: &BuildOverrides,
    json_report: bool,
) -> Result<()> {
    let version = manifest.version()?;
    let layout = Layout::resolve(project_dir, manifest);

    let sources = layout.sources_dir();
    if !sources.is_dir() {
        bail!(
            "no unpacked source tree at {} (run `blaspack fetch` first)",
            sources.display()
        );
    }

    let targets = workdir::load_target_set(&layout, &version.to_string(), false)?;

    let options = effective_options(manifest, overrides);
    options.validate_target(&targets)?;

    let mut platform = PlatformFacts::host();
    if overrides.debug {
        platform.build_type = BuildType::Debug;
    }
    let env = ToolchainEnv::from_process_env();

    let built = plan(&options, &platform, &env)?;
    for warning in &built.warnings {
        eprintln!("warning: {warning}");
    }

    let report = execute(&built, &sources, &layout.package_dir)?;

    if json_report {
        println!("{}", report.to_json()?);
    } else {
        println!("Packaged into {}", report.package_dir.display());
        println!("Libraries: {}", report.libraries.join(", "));
        if !report.extra_link_libs.is_empty() {
            println!("Extra link deps: {}", report.extra_link_libs.join(", "));
        }
    }
    Ok(())
}

/// Layer command-line overrides onto the manifest's option set.
pub fn effective_options(
    manifest: &RecipeManifest,
    overrides: &BuildOverrides,
) -> BuildOptions {
    let mut options = manifest.options.clone();
    if let Some(target) = &overrides.target {
        options.target = Some(target.clone());
    }
    if overrides.static_build {
        options.shared = false;
    }
    options
}
