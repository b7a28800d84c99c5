use std::path::PathBuf;
use std::process::Stdio;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::process::Command;

use super::{Multiplexer, SessionAddress};

/// Check whether tmux can be found on the search path.
pub fn tmux_available() -> bool {
    which::which("tmux").is_ok()
}

/// Client for driving one isolated tmux server via its CLI.
///
/// Every invocation passes `-S <socket>` so the run never talks to the
/// user's default server or to another dispatch's.
pub struct TmuxClient {
    /// Path to tmux binary
    tmux_path: String,
    socket_path: PathBuf,
}

impl TmuxClient {
    pub fn new(address: &SessionAddress) -> Self {
        Self {
            tmux_path: "tmux".to_string(),
            socket_path: address.socket_path.clone(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.tmux_path);
        cmd.arg("-S").arg(&self.socket_path).args(args);
        cmd
    }

    async fn run_checked(&self, args: &[&str], what: &str) -> Result<()> {
        let output = self
            .command(args)
            .output()
            .await
            .with_context(|| format!("failed to execute tmux {what}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("tmux {what} failed: {}", stderr.trim());
        }
        Ok(())
    }
}

#[async_trait]
impl Multiplexer for TmuxClient {
    async fn kill_session(&self, session: &str) -> Result<()> {
        let status = self
            .command(&["kill-session", "-t", session])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .context("failed to execute tmux kill-session")?;

        if !status.success() {
            anyhow::bail!("tmux kill-session exited with {status}");
        }
        Ok(())
    }

    /// Create a session with isolated shell history, so launch commands
    /// typed into the pane never leak into the user's own history file.
    async fn new_session(&self, session: &str, window: &str) -> Result<()> {
        let history_dir = dirs::home_dir()
            .unwrap_or_default()
            .join(".agent-dispatch")
            .join("history");
        tokio::fs::create_dir_all(&history_dir).await?;
        let history_file = history_dir.join(format!("{session}.hist"));

        let output = self
            .command(&["new-session", "-d", "-s", session, "-n", window])
            .env("HISTFILE", &history_file)
            .output()
            .await
            .context("failed to execute tmux new-session")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("failed to create session: {}", stderr.trim());
        }
        Ok(())
    }

    async fn send_literal(&self, target: &str, text: &str) -> Result<()> {
        self.run_checked(&["send-keys", "-t", target, "-l", "--", text], "send-keys")
            .await
    }

    async fn send_key(&self, target: &str, key: &str) -> Result<()> {
        self.run_checked(&["send-keys", "-t", target, key], "send-keys")
            .await
    }

    async fn capture_last(&self, target: &str, lines: u32) -> Result<String> {
        let scroll = format!("-{lines}");
        let output = self
            .command(&["capture-pane", "-p", "-J", "-t", target, "-S", &scroll])
            .output()
            .await
            .context("failed to execute tmux capture-pane")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("tmux capture-pane failed: {}", stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
