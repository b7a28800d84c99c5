//! CLI argument parsing via clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{OutputFormat, SubMode};
use crate::dialect::ToolKind;
use crate::mode::RequestedMode;

/// Launch a coding-agent CLI reliably, headless or interactive via tmux.
#[derive(Debug, Parser)]
#[command(name = "agent-dispatch", version)]
pub struct Args {
    /// Task prompt text.
    #[arg(short = 'p', long = "prompt")]
    pub prompt: Option<String>,

    /// Agent CLI variant to drive.
    #[arg(long = "tool", value_enum, default_value_t = ToolKind::Cursor)]
    pub tool: ToolKind,

    /// Execution mode. auto = interactive when the prompt contains slash commands.
    #[arg(long = "run-mode", value_enum, default_value_t = RequestedMode::Auto)]
    pub run_mode: RequestedMode,

    /// Agent execution sub-mode (plan / ask). Default is full agent mode.
    #[arg(long = "mode", value_enum)]
    pub submode: Option<SubMode>,

    /// Model override (e.g. gpt-5, sonnet-4).
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,

    /// Force-allow all commands.
    #[arg(long = "yolo")]
    pub yolo: bool,

    /// Output format for headless mode.
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Workspace directory handed to the agent.
    #[arg(long = "workspace")]
    pub workspace: Option<PathBuf>,

    /// Path to the agent binary. Overrides the per-tool env var
    /// (AGENT_BIN / CLAUDE_BIN).
    #[arg(long = "agent-bin")]
    pub agent_bin: Option<String>,

    /// Working directory (defaults to the current directory).
    #[arg(long = "cwd")]
    pub cwd: Option<PathBuf>,

    /// tmux session name for interactive mode.
    #[arg(long = "tmux-session", default_value = "agent-dispatch")]
    pub tmux_session: String,

    /// tmux socket directory. Also settable via AGENT_DISPATCH_TMUX_SOCKET_DIR.
    #[arg(long = "tmux-socket-dir")]
    pub tmux_socket_dir: Option<PathBuf>,

    /// tmux socket file name.
    #[arg(long = "tmux-socket-name", default_value = "agent-dispatch.sock")]
    pub tmux_socket_name: String,

    /// Wait N seconds after the interactive launch, then print a pane snapshot.
    #[arg(long = "interactive-wait-s", default_value_t = 0)]
    pub interactive_wait_s: u64,

    /// Delay between prompt lines sent to the interactive session, in milliseconds.
    #[arg(long = "interactive-send-delay-ms", default_value_t = 800)]
    pub interactive_send_delay_ms: u64,

    /// Extra arguments passed through to the agent CLI (after `--`).
    #[arg(last = true)]
    pub extra: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use crate::dialect::ToolKind;
    use crate::mode::RequestedMode;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["agent-dispatch"]);
        assert_eq!(args.tool, ToolKind::Cursor);
        assert_eq!(args.run_mode, RequestedMode::Auto);
        assert_eq!(args.tmux_session, "agent-dispatch");
        assert_eq!(args.tmux_socket_name, "agent-dispatch.sock");
        assert_eq!(args.interactive_send_delay_ms, 800);
        assert_eq!(args.interactive_wait_s, 0);
        assert!(args.extra.is_empty());
    }

    #[test]
    fn test_extra_args_after_double_dash() {
        let args = Args::parse_from(["agent-dispatch", "-p", "hi", "--", "--resume", "abc"]);
        assert_eq!(args.prompt.as_deref(), Some("hi"));
        assert_eq!(args.extra, vec!["--resume".to_string(), "abc".to_string()]);
    }

    #[test]
    fn test_tool_and_mode_selection() {
        let args = Args::parse_from([
            "agent-dispatch",
            "--tool",
            "claude",
            "--run-mode",
            "interactive",
            "--mode",
            "plan",
        ]);
        assert_eq!(args.tool, ToolKind::Claude);
        assert_eq!(args.run_mode, RequestedMode::Interactive);
        assert_eq!(args.submode.map(|m| m.as_str()), Some("plan"));
    }
}
