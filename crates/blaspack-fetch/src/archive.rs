//! Source archive download and unpack.
//!
//! The release tarball comes off the SourceForge mirror under a file name
//! with embedded spaces (`OpenBLAS <version> version.tar.gz`). Inside it the
//! tree sits under a single `xianyi-OpenBLAS-<sha>` directory, which gets
//! renamed to the fixed [`SOURCES_DIR`] so every later phase addresses the
//! tree by a known name.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::{FetchError, Result};
use crate::http;

/// Fixed name of the unpacked source tree inside the work directory.
pub const SOURCES_DIR: &str = "sources";

/// Prefix of the tarball's top-level directory.
const UPSTREAM_DIR_PREFIX: &str = "xianyi-OpenBLAS-";

/// Release archive URL for a given upstream version.
pub fn source_url(version: &str) -> String {
    format!(
        "https://sourceforge.net/projects/openblas/files/v{version}/OpenBLAS%20{version}%20version.tar.gz"
    )
}

/// Download the release archive and unpack it into `work_dir/sources`.
///
/// Returns the path of the unpacked source tree. The downloaded tarball is
/// removed after a successful unpack; on failure both the tarball and any
/// partially unpacked tree are left in place for inspection.
pub fn fetch_source(version: &str, work_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(work_dir)?;
    let url = source_url(version);
    let archive_path = work_dir.join(format!("OpenBLAS-{version}.tar.gz"));

    let client = http::client()?;
    let mut response = client.get(&url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            url,
            status: status.as_u16(),
        });
    }
    let mut file = File::create(&archive_path)?;
    std::io::copy(&mut response, &mut file)?;
    drop(file);

    let sources = unpack_source(&archive_path, work_dir)?;
    std::fs::remove_file(&archive_path)?;
    Ok(sources)
}

/// Unpack a downloaded tarball into `work_dir` and rename its single
/// `xianyi-OpenBLAS-*` top-level directory to [`SOURCES_DIR`].
///
/// Any pre-existing `sources` tree is discarded first; each invocation
/// operates on a freshly unpacked tree.
pub fn unpack_source(archive_path: &Path, work_dir: &Path) -> Result<PathBuf> {
    let file = File::open(archive_path)?;
    let decoder = GzDecoder::new(BufReader::new(file));
    let mut archive = tar::Archive::new(decoder);
    archive.unpack(work_dir)?;

    let extracted = find_upstream_dir(work_dir)?;
    let sources = work_dir.join(SOURCES_DIR);
    if sources.exists() {
        std::fs::remove_dir_all(&sources)?;
    }
    std::fs::rename(&extracted, &sources)?;
    Ok(sources)
}

/// Locate the single `xianyi-OpenBLAS-*` directory the tarball produced.
fn find_upstream_dir(work_dir: &Path) -> Result<PathBuf> {
    let mut matches = Vec::new();
    for entry in std::fs::read_dir(work_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if entry.path().is_dir() && name.starts_with(UPSTREAM_DIR_PREFIX) {
            matches.push(entry.path());
        }
    }
    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(FetchError::ArchiveLayout {
            detail: format!("no '{UPSTREAM_DIR_PREFIX}*' directory in unpacked archive"),
        }),
        n => Err(FetchError::ArchiveLayout {
            detail: format!("{n} '{UPSTREAM_DIR_PREFIX}*' directories in unpacked archive"),
        }),
    }
}
