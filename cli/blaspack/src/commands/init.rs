//! `blaspack init` — write a starter recipe manifest.

use std::path::Path;

use anyhow::{bail, Result};

use crate::manifest::RecipeManifest;

/// Write the default `blaspack.toml` into the given directory.
pub fn run(dir: &Path) -> Result<()> {
    let path = dir.join("blaspack.toml");
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    std::fs::write(&path, RecipeManifest::template())?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_valid_template() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path()).unwrap();

        let (manifest, _) = RecipeManifest::find_and_load(dir.path()).unwrap().unwrap();
        assert!(manifest.options.shared);
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path()).unwrap();
        assert!(run(dir.path()).is_err());
    }
}
