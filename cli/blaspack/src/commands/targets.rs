//! `blaspack targets` — list valid target microarchitectures.

use std::path::Path;

use anyhow::Result;

use crate::manifest::RecipeManifest;
use crate::workdir::{self, Layout};

/// Print the verified target list, marking the default entry.
pub fn run(project_dir: &Path, manifest: &RecipeManifest, refresh: bool) -> Result<()> {
    let version = manifest.version()?;
    let layout = Layout::resolve(project_dir, manifest);
    let targets = workdir::load_target_set(&layout, &version.to_string(), refresh)?;

    println!("Valid targets for OpenBLAS {version} ({} entries):", targets.len());
    println!();
    for (i, name) in targets.iter().enumerate() {
        if i == 0 {
            println!("  {name}   (default)");
        } else {
            println!("  {name}");
        }
    }
    Ok(())
}
