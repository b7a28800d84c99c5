mod client;
mod controller;
mod heuristics;

pub use client::{tmux_available, TmuxClient};
pub use controller::launch_interactive;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;

/// Pane lines considered when capturing or scanning output.
pub const CAPTURE_LINES: u32 = 200;

/// Environment variable overriding the socket directory.
pub const SOCKET_DIR_ENV: &str = "AGENT_DISPATCH_TMUX_SOCKET_DIR";

/// Location of one isolated tmux server plus the session living on it.
///
/// Runs always address their own socket file, never the server's
/// default socket, so concurrent dispatches cannot collide unless given
/// the same directory and name on purpose.
#[derive(Debug, Clone)]
pub struct SessionAddress {
    pub socket_path: PathBuf,
    pub session: String,
}

impl SessionAddress {
    /// Resolve the socket directory (explicit override, then the
    /// environment, then a temp-dir default), create it if absent, and
    /// join the socket file name.
    pub async fn resolve(
        socket_dir: Option<&Path>,
        socket_name: &str,
        session: &str,
    ) -> Result<Self> {
        let dir = match socket_dir {
            Some(dir) => dir.to_path_buf(),
            None => match std::env::var_os(SOCKET_DIR_ENV) {
                Some(dir) => PathBuf::from(dir),
                None => std::env::temp_dir().join("agent-dispatch-tmux"),
            },
        };

        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("failed to create socket directory {}", dir.display()))?;

        Ok(Self {
            socket_path: dir.join(socket_name),
            session: session.to_string(),
        })
    }

    /// Pane coordinate of the session's only window.
    pub fn target(&self) -> String {
        format!("{}:0.0", self.session)
    }

    /// Copy-pasteable command that attaches to the session.
    pub fn attach_command(&self) -> String {
        let socket = self.socket_path.to_string_lossy();
        shell_words::join(["tmux", "-S", socket.as_ref(), "attach", "-t", self.session.as_str()])
    }

    /// Copy-pasteable command that prints a pane snapshot.
    pub fn snapshot_command(&self) -> String {
        let socket = self.socket_path.to_string_lossy();
        let target = self.target();
        let scroll = format!("-{CAPTURE_LINES}");
        shell_words::join([
            "tmux",
            "-S",
            socket.as_ref(),
            "capture-pane",
            "-p",
            "-J",
            "-t",
            target.as_str(),
            "-S",
            scroll.as_str(),
        ])
    }
}

/// Terminal-multiplexer operations the launch sequence needs.
///
/// Implemented by [`TmuxClient`]; controller tests substitute a
/// scripted fake so the sequence runs without a live server.
#[async_trait]
pub trait Multiplexer: Send + Sync {
    /// Tear down a session. Callers discard the result when a missing
    /// session is the expected case.
    async fn kill_session(&self, session: &str) -> Result<()>;

    /// Create a detached session with the given window name.
    async fn new_session(&self, session: &str, window: &str) -> Result<()>;

    /// Type literal text into a pane.
    async fn send_literal(&self, target: &str, text: &str) -> Result<()>;

    /// Press a named key (e.g. "Enter") in a pane.
    async fn send_key(&self, target: &str, key: &str) -> Result<()>;

    /// Capture the last `lines` lines of a pane, wrapped lines joined.
    async fn capture_last(&self, target: &str, lines: u32) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_creates_socket_dir() {
        let dir = tempfile::tempdir().unwrap();
        let socket_dir = dir.path().join("sockets");

        let address = SessionAddress::resolve(Some(&socket_dir), "run.sock", "dispatch")
            .await
            .unwrap();

        assert!(socket_dir.is_dir());
        assert_eq!(address.socket_path, socket_dir.join("run.sock"));
        assert_eq!(address.target(), "dispatch:0.0");
    }

    #[test]
    fn test_guidance_commands_are_copy_pasteable() {
        let address = SessionAddress {
            socket_path: PathBuf::from("/tmp/agent dispatch/run.sock"),
            session: "dispatch".to_string(),
        };

        // The path containing a space must come out quoted.
        let attach = address.attach_command();
        assert!(attach.starts_with("tmux -S "));
        assert!(attach.contains("'/tmp/agent dispatch/run.sock'"));
        assert!(attach.ends_with("attach -t dispatch"));

        let snapshot = address.snapshot_command();
        assert!(snapshot.contains("capture-pane -p -J -t dispatch:0.0 -S -200"));
    }
}
