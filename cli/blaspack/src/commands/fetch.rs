//! `blaspack fetch` — acquire the target manifest and the source archive.

use std::path::Path;

use anyhow::Result;

use crate::manifest::RecipeManifest;
use crate::workdir::{self, Layout};

/// Fetch and verify the target list, then download and unpack the source
/// archive into the work directory.
pub fn run(project_dir: &Path, manifest: &RecipeManifest, targets_only: bool) -> Result<()> {
    let version = manifest.version()?;
    let layout = Layout::resolve(project_dir, manifest);

    let targets = workdir::load_target_set(&layout, &version.to_string(), true)?;
    println!(
        "Fetched target list for v{version}: {} targets (default {})",
        targets.len(),
        targets.first()?
    );

    if targets_only {
        return Ok(());
    }

    println!("Downloading OpenBLAS {version} ...");
    let sources = blaspack_fetch::fetch_source(&version.to_string(), &layout.work_dir)?;
    println!("Unpacked source tree at {}", sources.display());
    Ok(())
}
