//! Headless execution inside a pseudo-terminal.
//!
//! The agent CLIs detect a missing controlling terminal and can block
//! waiting for confirmation even with the trust flags set. Wrapping the
//! invocation in script(1) forces PTY allocation; the typescript goes
//! to /dev/null.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{debug, warn};

/// Run an argument vector synchronously, under script(1) when it can be
/// found, directly otherwise. The child's exit status is returned
/// unchanged; only a failure to spawn is an error.
pub async fn run_with_pty(argv: &[String], cwd: Option<&Path>) -> Result<i32> {
    let Ok(script_bin) = which::which("script") else {
        warn!("script(1) not found, running without a pty");
        return run_direct(argv, cwd).await;
    };

    let cmd_str = shell_words::join(argv);
    debug!(command = %cmd_str, "running under script(1)");

    let mut cmd = Command::new(script_bin);
    cmd.args(["-q", "-c", &cmd_str, "/dev/null"]);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let status = cmd.status().await.context("failed to spawn script(1)")?;
    Ok(status.code().unwrap_or(1))
}

async fn run_direct(argv: &[String], cwd: Option<&Path>) -> Result<i32> {
    let (bin, rest) = argv.split_first().context("empty command")?;

    let mut cmd = Command::new(bin);
    cmd.args(rest);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let status = cmd
        .status()
        .await
        .with_context(|| format!("failed to spawn {bin}"))?;
    Ok(status.code().unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_direct_execution_passes_status_through() {
        let argv = vec!["sh".to_string(), "-c".to_string(), "exit 7".to_string()];
        let code = run_direct(&argv, None).await.unwrap();
        assert_eq!(code, 7);
    }

    #[tokio::test]
    async fn test_direct_execution_zero_exit() {
        let argv = vec!["true".to_string()];
        assert_eq!(run_direct(&argv, None).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_spawn_failure_propagates() {
        let argv = vec!["/definitely/not/a/real/binary".to_string()];
        assert!(run_direct(&argv, None).await.is_err());
    }

    #[tokio::test]
    async fn test_respects_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let canonical = dir.path().canonicalize().unwrap();
        let argv = vec![
            "sh".to_string(),
            "-c".to_string(),
            format!("test \"$(pwd)\" = \"{}\"", canonical.display()),
        ];
        assert_eq!(run_direct(&argv, Some(dir.path())).await.unwrap(), 0);
    }
}
