//! `blaspack.toml` recipe manifest parsing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blaspack_core::BuildOptions;
use serde::{Deserialize, Serialize};

/// Upstream release this recipe is pinned to. The target-list digest in
/// `blaspack-fetch` is pinned to the same release.
pub const DEFAULT_VERSION: &str = "0.3.5";

/// The top-level recipe manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeManifest {
    /// Recipe metadata.
    #[serde(default)]
    pub recipe: RecipeConfig,
    /// The six build options, defaulted as the upstream recipe defaults
    /// them.
    #[serde(default)]
    pub options: BuildOptions,
    /// Directory layout overrides.
    #[serde(default)]
    pub package: PackageConfig,
}

/// `[recipe]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeConfig {
    /// Upstream OpenBLAS version to fetch and build.
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        RecipeConfig {
            version: default_version(),
        }
    }
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

/// `[package]` section: where the work tree and package output live,
/// relative to the manifest directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    #[serde(default = "default_work_dir")]
    pub work_dir: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        PackageConfig {
            work_dir: default_work_dir(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_work_dir() -> String {
    "work".to_string()
}

fn default_output_dir() -> String {
    "package".to_string()
}

impl RecipeManifest {
    /// Search upward from `start_dir` for a `blaspack.toml`, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join("blaspack.toml");
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: RecipeManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing blaspack.toml")
    }

    /// The pinned upstream version, parsed.
    pub fn version(&self) -> Result<semver::Version> {
        semver::Version::parse(&self.recipe.version)
            .with_context(|| format!("invalid recipe version '{}'", self.recipe.version))
    }

    /// Generate the default template for `blaspack init`.
    pub fn template() -> String {
        format!(
            r#"[recipe]
version = "{DEFAULT_VERSION}"

[options]
shared = true
use_mass = false
use_openmp = false
no_lapacke = true
nofortran = false

[package]
work_dir = "work"
output_dir = "package"
"#
        )
    }
}
