//! Normalized launch configuration, fixed before execution begins.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;
use tracing::error;

use crate::cli::Args;
use crate::dialect::Dialect;
use crate::error::DispatchError;

/// Agent execution sub-mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SubMode {
    Plan,
    Ask,
}

impl SubMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SubMode::Plan => "plan",
            SubMode::Ask => "ask",
        }
    }
}

/// Output format requested from the agent in headless mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    StreamJson,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::StreamJson => "stream-json",
        }
    }
}

/// Everything the command builder and runners need for one invocation.
#[derive(Debug)]
pub struct LaunchConfig {
    pub dialect: &'static Dialect,
    /// Resolved agent binary (name on PATH or explicit path).
    pub agent_bin: String,
    pub prompt: Option<String>,
    pub model: Option<String>,
    pub force_all: bool,
    pub submode: Option<SubMode>,
    pub output_format: OutputFormat,
    pub workspace: Option<PathBuf>,
    pub cwd: Option<PathBuf>,
    pub extra: Vec<String>,
}

/// Interactive-session knobs, separate from what the agent itself sees.
#[derive(Debug)]
pub struct SessionConfig {
    pub session: String,
    pub socket_dir: Option<PathBuf>,
    pub socket_name: String,
    /// How long to linger after the launch before printing a snapshot.
    pub wait: Duration,
    /// Pacing between prompt lines typed into the session.
    pub send_delay: Duration,
}

impl LaunchConfig {
    /// Normalize CLI arguments, resolving the agent binary as explicit
    /// flag, then the dialect's env var, then the dialect default. Fails
    /// when the binary is neither on PATH nor an existing file.
    pub fn from_args(args: Args) -> Result<(Self, SessionConfig), DispatchError> {
        let dialect = args.tool.dialect();
        let agent_bin = args
            .agent_bin
            .or_else(|| std::env::var(dialect.bin_env).ok())
            .unwrap_or_else(|| dialect.default_bin.to_string());

        if which::which(&agent_bin).is_err() && !Path::new(&agent_bin).exists() {
            error!("{} binary not found: {agent_bin}", dialect.name);
            for hint in dialect.install_hint {
                error!("{hint}");
            }
            return Err(DispatchError::AgentBinaryMissing {
                tool: dialect.name,
                bin: agent_bin,
            });
        }

        let launch = LaunchConfig {
            dialect,
            agent_bin,
            prompt: args.prompt,
            model: args.model,
            force_all: args.yolo,
            submode: args.submode,
            output_format: args.output_format,
            workspace: args.workspace,
            cwd: args.cwd,
            extra: args.extra,
        };

        let session = SessionConfig {
            session: args.tmux_session,
            socket_dir: args.tmux_socket_dir,
            socket_name: args.tmux_socket_name,
            wait: Duration::from_secs(args.interactive_wait_s),
            send_delay: Duration::from_millis(args.interactive_send_delay_ms),
        };

        Ok((launch, session))
    }
}
