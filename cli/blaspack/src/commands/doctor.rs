//! `blaspack doctor` — toolchain and project diagnostics.

use std::path::Path;
use std::process::Command;

use anyhow::Result;
use blaspack_core::{Os, PlatformFacts};

use crate::manifest::RecipeManifest;
use crate::workdir::Layout;

/// Print diagnostic information about the build environment.
pub fn run(project_dir: &Path) -> Result<()> {
    println!("=== blaspack doctor ===");
    println!();
    println!("blaspack version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    let platform = PlatformFacts::host();
    println!("--- Platform ---");
    println!("  OS:       {:?}", platform.os);
    println!("  Arch:     {:?}", platform.arch);
    println!("  Compiler: {:?}", platform.compiler);
    println!();

    println!("--- Build Tools ---");
    print_tool_status("make", &["--version"]);
    print_tool_status("cmake", &["--version"]);
    print_tool_status("cc", &["--version"]);
    if platform.os == Os::Windows {
        // OpenBLAS's Windows build needs perl (upstream ships Strawberry
        // Perl as a build requirement).
        print_tool_status("perl", &["--version"]);
    }
    println!();

    println!("--- Project Status ---");
    match RecipeManifest::find_and_load(project_dir) {
        Ok(Some((manifest, dir))) => {
            println!("  blaspack.toml: found at {}", dir.display());
            println!("  Version:       {}", manifest.recipe.version);
            let layout = Layout::resolve(&dir, &manifest);
            println!(
                "  Target list:   {}",
                if layout.target_list_path().is_file() {
                    "cached"
                } else {
                    "not fetched"
                }
            );
            println!(
                "  Source tree:   {}",
                if layout.sources_dir().is_dir() {
                    "unpacked"
                } else {
                    "not fetched"
                }
            );
        }
        Ok(None) => {
            println!("  blaspack.toml: not found (run `blaspack init`)");
        }
        Err(e) => {
            println!("  blaspack.toml: error — {e}");
        }
    }

    Ok(())
}

fn print_tool_status(name: &str, args: &[&str]) {
    match Command::new(name).args(args).output() {
        Ok(output) => {
            let version = String::from_utf8_lossy(&output.stdout);
            let first_line = version.lines().next().unwrap_or("(unknown version)");
            println!("  {name}: {first_line}");
        }
        Err(_) => {
            println!("  {name}: not found");
        }
    }
}
