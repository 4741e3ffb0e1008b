//! `blaspack clean` — remove the work tree and/or package output.

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::manifest::RecipeManifest;
use crate::workdir::Layout;

/// Remove the work directory; with `package` also the package output.
pub fn run(project_dir: &Path, manifest: &RecipeManifest, package: bool) -> Result<()> {
    let layout = Layout::resolve(project_dir, manifest);

    remove(&layout.work_dir)?;
    if package {
        remove(&layout.package_dir)?;
    }
    Ok(())
}

fn remove(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
        println!("Removed {}", dir.display());
    } else {
        println!("Already clean: {} does not exist", dir.display());
    }
    Ok(())
}
