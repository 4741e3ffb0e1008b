//! Build report for downstream consumers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What a consumer of the package needs to know: where the artifacts are,
/// which libraries were produced, and what else must be on the link line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// The package output directory.
    pub package_dir: PathBuf,
    /// Library base names, platform prefix/extension stripped.
    pub libraries: Vec<String>,
    /// Extra link-time dependencies, in link order.
    pub extra_link_libs: Vec<String>,
    /// Include directories relative to the package root.
    pub include_dirs: Vec<String>,
    /// Warnings carried over from planning.
    pub warnings: Vec<String>,
}

impl BuildReport {
    /// Render the report as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
