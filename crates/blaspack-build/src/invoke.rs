//! Subprocess boundary to the external build tool.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{BuildError, Result};

/// Run an external tool to completion in the given working directory.
///
/// A non-zero exit becomes [`BuildError::ToolFailed`] carrying the tool's
/// stderr verbatim. Nothing is retried; the tool's stdout is inherited so
/// build progress stays visible.
pub fn run_tool(tool: &str, args: &[String], cwd: &Path) -> Result<()> {
    let output = Command::new(tool)
        .args(args)
        .current_dir(cwd)
        .stdout(Stdio::inherit())
        .output()
        .map_err(|source| BuildError::ToolUnavailable {
            tool: tool.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(BuildError::ToolFailed {
            tool: tool.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_tool_run() {
        let dir = tempfile::tempdir().unwrap();
        run_tool("sh", &["-c".to_string(), "exit 0".to_string()], dir.path()).unwrap();
    }

    #[test]
    fn failure_carries_stderr_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_tool(
            "sh",
            &["-c".to_string(), "echo 'no rule to make target' >&2; exit 2".to_string()],
            dir.path(),
        )
        .unwrap_err();
        match err {
            BuildError::ToolFailed { tool, status, stderr } => {
                assert_eq!(tool, "sh");
                assert_eq!(status.code(), Some(2));
                assert!(stderr.contains("no rule to make target"));
            }
            other => panic!("expected ToolFailed, got {other:?}"),
        }
    }

    #[test]
    fn missing_tool_is_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_tool("definitely-not-a-real-tool", &[], dir.path()).unwrap_err();
        assert!(matches!(err, BuildError::ToolUnavailable { .. }));
    }

    #[test]
    fn runs_in_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        run_tool(
            "sh",
            &["-c".to_string(), "touch here.txt".to_string()],
            dir.path(),
        )
        .unwrap();
        assert!(dir.path().join("here.txt").is_file());
    }
}
