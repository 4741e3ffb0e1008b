//! Toolchain environment overrides.
//!
//! The upstream build honors `CC`, `AR`, and (for cross builds) a host C
//! compiler. Rather than reading the process environment ad hoc inside the
//! planner, the overrides are snapshotted once into a `ToolchainEnv` value
//! and passed in, so planning is deterministic given its inputs.

use std::path::PathBuf;

/// Explicit toolchain overrides for the external build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolchainEnv {
    /// `CC` override forwarded to the Make invocation.
    pub cc: Option<String>,
    /// `AR` override forwarded to the Make invocation.
    pub ar: Option<String>,
    /// `CC_FOR_BUILD`: host C compiler for cross builds, checked before
    /// probing `PATH`.
    pub cc_for_build: Option<String>,
}

impl ToolchainEnv {
    /// Snapshot the overrides from the process environment. Call once, at
    /// the CLI boundary.
    pub fn from_process_env() -> Self {
        ToolchainEnv {
            cc: std::env::var("CC").ok(),
            ar: std::env::var("AR").ok(),
            cc_for_build: std::env::var("CC_FOR_BUILD").ok(),
        }
    }

    /// Resolve the host C compiler for a cross build: the explicit
    /// `CC_FOR_BUILD` override if present, otherwise the first of `cc`,
    /// `gcc`, `clang` found on `PATH`, in that priority order.
    pub fn resolve_host_cc(&self) -> Option<PathBuf> {
        if let Some(cc) = &self.cc_for_build {
            return Some(PathBuf::from(cc));
        }
        ["cc", "gcc", "clang"]
            .iter()
            .find_map(|name| which::which(name).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let env = ToolchainEnv {
            cc_for_build: Some("/opt/cross/bin/host-cc".to_string()),
            ..ToolchainEnv::default()
        };
        assert_eq!(
            env.resolve_host_cc(),
            Some(PathBuf::from("/opt/cross/bin/host-cc"))
        );
    }

    #[test]
    fn path_probe_without_override() {
        let env = ToolchainEnv::default();
        // On any machine with a C toolchain this finds cc/gcc/clang; without
        // one it must return None rather than panic. Either way no error.
        let resolved = env.resolve_host_cc();
        if let Some(path) = resolved {
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn default_is_empty() {
        let env = ToolchainEnv::default();
        assert!(env.cc.is_none());
        assert!(env.ar.is_none());
        assert!(env.cc_for_build.is_none());
    }
}
