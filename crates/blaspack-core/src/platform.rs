//! Build platform facts.
//!
//! A read-only snapshot of the environment the build runs in: operating
//! system, CPU architecture, compiler identity, build type, and whether the
//! build is a cross-compilation. The planner in `blaspack-build` consumes
//! these; it never inspects the environment itself.

use serde::{Deserialize, Serialize};

/// Target operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Os {
    Linux,
    Windows,
    MacOs,
    Other,
}

/// Target CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Arch {
    X86,
    X86_64,
    Aarch64,
    Other,
}

impl Arch {
    /// The `BINARY=` bitness flag for the Make path. Only plain x86 is a
    /// 32-bit build; everything else OpenBLAS treats as 64-bit.
    pub fn bitness(self) -> &'static str {
        match self {
            Arch::X86 => "32",
            _ => "64",
        }
    }
}

/// Compiler identity, as far as the recipe cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Compiler {
    Gcc,
    Clang,
    /// Visual-Studio-class toolchain (cl.exe). OpenBLAS's Makefiles do not
    /// support it, which forces the CMake path.
    VisualStudio,
    Other,
}

impl Compiler {
    pub fn is_msvc(self) -> bool {
        matches!(self, Compiler::VisualStudio)
    }
}

/// Release vs. debug build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildType {
    Release,
    Debug,
}

impl BuildType {
    /// The `DEBUG=` flag for the Make path.
    pub fn debug_flag(self) -> &'static str {
        match self {
            BuildType::Release => "0",
            BuildType::Debug => "1",
        }
    }
}

/// Snapshot of the build environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFacts {
    pub os: Os,
    pub arch: Arch,
    pub compiler: Compiler,
    pub build_type: BuildType,
    /// Host toolchain differs from target toolchain.
    pub cross_build: bool,
}

impl PlatformFacts {
    /// Snapshot the machine this process runs on, assuming a native
    /// (non-cross) release build with the conventional compiler for the OS.
    pub fn host() -> Self {
        let os = match std::env::consts::OS {
            "linux" => Os::Linux,
            "windows" => Os::Windows,
            "macos" => Os::MacOs,
            _ => Os::Other,
        };
        let arch = match std::env::consts::ARCH {
            "x86" => Arch::X86,
            "x86_64" => Arch::X86_64,
            "aarch64" => Arch::Aarch64,
            _ => Arch::Other,
        };
        let compiler = match os {
            Os::Windows => Compiler::VisualStudio,
            Os::MacOs => Compiler::Clang,
            _ => Compiler::Gcc,
        };
        PlatformFacts {
            os,
            arch,
            compiler,
            build_type: BuildType::Release,
            cross_build: false,
        }
    }

    /// A Linux/gcc/x86-64 release platform. Handy default for tests and the
    /// common CI case.
    pub fn linux_x86_64() -> Self {
        PlatformFacts {
            os: Os::Linux,
            arch: Arch::X86_64,
            compiler: Compiler::Gcc,
            build_type: BuildType::Release,
            cross_build: false,
        }
    }

    /// A Windows/MSVC/x86-64 release platform.
    pub fn windows_msvc() -> Self {
        PlatformFacts {
            os: Os::Windows,
            arch: Arch::X86_64,
            compiler: Compiler::VisualStudio,
            build_type: BuildType::Release,
            cross_build: false,
        }
    }
}
