//! Build configurator errors.

use std::process::ExitStatus;

use thiserror::Error;

/// Errors from planning or executing the external build.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Invalid or unsupported option combination, detected before any
    /// external invocation.
    #[error("unsupported configuration: {detail}")]
    UnsupportedConfiguration { detail: String },

    /// Cross build with no resolvable host C compiler.
    #[error("no host C compiler found (set CC_FOR_BUILD or install cc, gcc, or clang)")]
    HostCompilerNotFound,

    /// The external tool could not be started at all.
    #[error("failed to invoke {tool}: {source}")]
    ToolUnavailable {
        tool: String,
        source: std::io::Error,
    },

    /// Non-zero exit from the external build tool. The tool's own
    /// diagnostic output is carried verbatim, never interpreted.
    #[error("{tool} failed ({status}):\n{stderr}")]
    ToolFailed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The source tree is missing an expected file (e.g. the license).
    #[error("source tree is missing {name} under {dir}")]
    MissingSourceFile { name: String, dir: String },

    /// I/O error while packaging artifacts.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;
