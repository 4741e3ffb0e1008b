//! Package layout: license copy, library collection, consumer metadata.
//!
//! After the external tool's install phase the package directory holds the
//! built libraries. This module finishes the layout (license under
//! `licenses/`) and derives what downstream consumers need to link: library
//! base names with the platform prefix/extension stripped, plus the extra
//! link dependencies OpenBLAS picks up on Linux.

use std::path::{Path, PathBuf};

use blaspack_core::{Compiler, Os};

use crate::error::{BuildError, Result};
use crate::plan::BuildPlan;
use crate::report::BuildReport;

/// Subdirectory of the package that receives the license file.
pub const LICENSES_DIR: &str = "licenses";

/// Copy the source tree's license file into `<package>/licenses/`.
///
/// The file name is matched case-insensitively (`LICENSE`, `License`, ...),
/// per the upstream recipe.
pub fn copy_license(source_dir: &Path, package_dir: &Path) -> Result<PathBuf> {
    let (license, file_name) = find_license(source_dir)?;
    let dest_dir = package_dir.join(LICENSES_DIR);
    std::fs::create_dir_all(&dest_dir)?;
    let dest = dest_dir.join(file_name);
    std::fs::copy(&license, &dest)?;
    Ok(dest)
}

fn find_license(source_dir: &Path) -> Result<(PathBuf, std::ffi::OsString)> {
    for entry in std::fs::read_dir(source_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().eq_ignore_ascii_case("license") && entry.path().is_file() {
            return Ok((entry.path(), name));
        }
    }
    Err(BuildError::MissingSourceFile {
        name: "LICENSE".to_string(),
        dir: source_dir.display().to_string(),
    })
}

/// Scan the installed package for libraries and assemble the report.
pub fn collect(plan: &BuildPlan, package_dir: &Path) -> Result<BuildReport> {
    let libraries = collect_libraries(package_dir)?;

    let mut include_dirs = vec!["include".to_string()];
    if plan.platform.compiler == Compiler::VisualStudio {
        include_dirs.push(format!("include{}openblas", std::path::MAIN_SEPARATOR));
    }

    let mut extra_link_libs = Vec::new();
    if plan.platform.os == Os::Linux {
        extra_link_libs.push("pthread".to_string());
        if !plan.options.nofortran {
            extra_link_libs.push("gfortran".to_string());
        }
    }

    Ok(BuildReport {
        package_dir: package_dir.to_path_buf(),
        libraries,
        extra_link_libs,
        include_dirs,
        warnings: plan.warnings.clone(),
    })
}

/// Collect library base names from `<package>/lib`, sorted and deduplicated
/// (a shared+static pair reports one name).
pub fn collect_libraries(package_dir: &Path) -> Result<Vec<String>> {
    let lib_dir = package_dir.join("lib");
    if !lib_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(&lib_dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let file_name = entry.file_name();
        if let Some(name) = library_base_name(&file_name.to_string_lossy()) {
            names.push(name);
        }
    }
    names.sort();
    names.dedup();
    Ok(names)
}

/// Strip the platform library prefix and extension from a file name.
///
/// `libopenblas.so.0.3` -> `openblas`; `openblas.lib` -> `openblas`;
/// non-library files yield `None`.
fn library_base_name(file_name: &str) -> Option<String> {
    if let Some(stem) = file_name.strip_suffix(".lib") {
        return Some(stem.to_string());
    }
    if let Some(stem) = file_name.strip_suffix(".dll") {
        return Some(stem.strip_prefix("lib").unwrap_or(stem).to_string());
    }
    for suffix in [".a", ".dylib"] {
        if let Some(stem) = file_name.strip_suffix(suffix) {
            let stem = stem.strip_prefix("lib").unwrap_or(stem);
            return Some(stem.to_string());
        }
    }
    // Versioned shared objects: everything before the first ".so".
    if let Some(idx) = file_name.find(".so") {
        let rest = &file_name[idx + 3..];
        if rest.is_empty() || rest.starts_with('.') {
            let stem = &file_name[..idx];
            let stem = stem.strip_prefix("lib").unwrap_or(stem);
            return Some(stem.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use blaspack_core::{BuildOptions, PlatformFacts, ToolchainEnv};

    fn linux_plan(nofortran: bool) -> BuildPlan {
        let options = BuildOptions {
            nofortran,
            ..BuildOptions::default()
        };
        crate::plan::plan(&options, &PlatformFacts::linux_x86_64(), &ToolchainEnv::default())
            .unwrap()
    }

    #[test]
    fn base_name_stripping() {
        assert_eq!(library_base_name("libopenblas.so"), Some("openblas".into()));
        assert_eq!(
            library_base_name("libopenblas.so.0.3"),
            Some("openblas".into())
        );
        assert_eq!(library_base_name("libopenblas.a"), Some("openblas".into()));
        assert_eq!(
            library_base_name("libopenblas.dylib"),
            Some("openblas".into())
        );
        assert_eq!(library_base_name("openblas.lib"), Some("openblas".into()));
        assert_eq!(library_base_name("openblas.dll"), Some("openblas".into()));
        assert_eq!(library_base_name("cmake_install.cmake"), None);
        assert_eq!(library_base_name("pkgconfig"), None);
    }

    #[test]
    fn collect_dedups_shared_and_static() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().join("lib");
        std::fs::create_dir_all(&lib).unwrap();
        std::fs::write(lib.join("libopenblas.so"), b"").unwrap();
        std::fs::write(lib.join("libopenblas.so.0"), b"").unwrap();
        std::fs::write(lib.join("libopenblas.a"), b"").unwrap();
        std::fs::write(lib.join("openblas.pc"), b"").unwrap();

        let names = collect_libraries(dir.path()).unwrap();
        assert_eq!(names, vec!["openblas"]);
    }

    #[test]
    fn collect_without_lib_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_libraries(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn linux_link_deps_include_pthread_and_gfortran() {
        let dir = tempfile::tempdir().unwrap();
        let report = collect(&linux_plan(false), dir.path()).unwrap();
        assert_eq!(report.extra_link_libs, vec!["pthread", "gfortran"]);
    }

    #[test]
    fn nofortran_drops_gfortran() {
        let dir = tempfile::tempdir().unwrap();
        let report = collect(&linux_plan(true), dir.path()).unwrap();
        assert_eq!(report.extra_link_libs, vec!["pthread"]);
    }

    #[test]
    fn msvc_reports_openblas_include_dir() {
        let dir = tempfile::tempdir().unwrap();
        let plan = crate::plan::plan(
            &BuildOptions::default(),
            &PlatformFacts::windows_msvc(),
            &ToolchainEnv::default(),
        )
        .unwrap();
        let report = collect(&plan, dir.path()).unwrap();
        assert_eq!(report.include_dirs.len(), 2);
        assert!(report.include_dirs[1].contains("openblas"));
        assert!(report.extra_link_libs.is_empty());
    }

    #[test]
    fn license_copied_case_insensitively() {
        let source = tempfile::tempdir().unwrap();
        let package = tempfile::tempdir().unwrap();
        std::fs::write(source.path().join("License"), b"BSD 3-Clause").unwrap();

        let dest = copy_license(source.path(), package.path()).unwrap();
        assert_eq!(dest, package.path().join("licenses").join("License"));
        assert_eq!(std::fs::read(dest).unwrap(), b"BSD 3-Clause");
    }

    #[test]
    fn missing_license_is_an_error() {
        let source = tempfile::tempdir().unwrap();
        let package = tempfile::tempdir().unwrap();
        let err = copy_license(source.path(), package.path()).unwrap_err();
        assert!(matches!(err, BuildError::MissingSourceFile { .. }));
    }
}
