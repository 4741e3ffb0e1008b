//! Work-directory layout and the cached target manifest.
//!
//! The work directory holds everything a build invocation acquires:
//! the cached `TargetList.txt` and the unpacked `sources/` tree. The
//! cached manifest goes through the same digest verification as a fresh
//! download, so a tampered cache is rejected, not trusted.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blaspack_core::TargetSet;
use blaspack_fetch::SOURCES_DIR;

use crate::manifest::RecipeManifest;

/// Cached copy of the upstream target manifest inside the work dir.
pub const TARGET_LIST_FILE: &str = "TargetList.txt";

/// Resolved directory layout for one invocation.
#[derive(Debug, Clone)]
pub struct Layout {
    pub work_dir: PathBuf,
    pub package_dir: PathBuf,
}

impl Layout {
    /// Resolve the layout from the manifest, relative to the project dir.
    pub fn resolve(project_dir: &Path, manifest: &RecipeManifest) -> Self {
        Layout {
            work_dir: project_dir.join(&manifest.package.work_dir),
            package_dir: project_dir.join(&manifest.package.output_dir),
        }
    }

    pub fn sources_dir(&self) -> PathBuf {
        self.work_dir.join(SOURCES_DIR)
    }

    pub fn target_list_path(&self) -> PathBuf {
        self.work_dir.join(TARGET_LIST_FILE)
    }
}

/// Load the target set from the cached manifest, fetching it first when
/// absent or when `refresh` is set. Either way the bytes are verified
/// against the pinned digest before any entry is accepted.
pub fn load_target_set(layout: &Layout, version: &str, refresh: bool) -> Result<TargetSet> {
    let cache_path = layout.target_list_path();
    let url = blaspack_fetch::target_list_url(version);

    if refresh || !cache_path.is_file() {
        let client = blaspack_fetch::http::client()?;
        let body = blaspack_fetch::http::get_bytes(&client, &url)?;
        // Verify before caching so a bad download never lands on disk.
        let set = blaspack_fetch::parse_verified(&body, &url)?;
        std::fs::create_dir_all(&layout.work_dir)?;
        std::fs::write(&cache_path, &body)
            .with_context(|| format!("caching {}", cache_path.display()))?;
        return Ok(set);
    }

    let body = std::fs::read(&cache_path)
        .with_context(|| format!("reading {}", cache_path.display()))?;
    Ok(blaspack_fetch::parse_verified(&body, &url)?)
}
