//! Per-tool launch conventions.
//!
//! The supported agent CLIs want the same coordination but disagree on
//! flag spellings, on how the workspace is selected, and on which
//! keystroke accepts their trust dialog. Everything variant-specific
//! lives in a [`Dialect`] so the launch logic is written once.

use clap::ValueEnum;

/// Keystroke sequence that accepts a workspace-trust dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustConfirm {
    /// Type a literal `y`, then press Enter.
    YesThenEnter,
    /// The dialog's default answer accepts; Enter alone is enough.
    EnterOnly,
}

/// Flag names and launch conventions for one agent CLI variant.
#[derive(Debug)]
pub struct Dialect {
    pub name: &'static str,
    /// Binary looked up on PATH when no override is given.
    pub default_bin: &'static str,
    /// Environment variable overriding the binary path.
    pub bin_env: &'static str,
    /// Remediation lines logged when the binary cannot be found.
    pub install_hint: &'static [&'static str],
    /// Non-interactive flag (`-p` / `--print`).
    pub print_flag: &'static str,
    /// Flag that suppresses the workspace-trust dialog in headless runs.
    pub trust_flag: &'static str,
    pub output_format_flag: &'static str,
    pub model_flag: &'static str,
    /// Workspace selector flag. Dialects without one rely on the process
    /// working directory, and their interactive launch line gets a
    /// `cd <dir> && ` prefix instead.
    pub workspace_flag: Option<&'static str>,
    /// Force-allow-all-commands flag, where the variant has one.
    pub force_flag: Option<&'static str>,
    /// Execution sub-mode flag (plan / ask).
    pub submode_flag: Option<&'static str>,
    /// Subcommand between the binary and its flags when launching the
    /// interactive UI. Neither shipped dialect needs one.
    pub interactive_subcommand: Option<&'static str>,
    pub trust_confirm: TrustConfirm,
}

pub static CURSOR: Dialect = Dialect {
    name: "cursor-agent",
    default_bin: "agent",
    bin_env: "AGENT_BIN",
    install_hint: &[
        "Tip: install via `curl https://cursor.com/install -fsS | bash`",
        "  or set AGENT_BIN=/path/to/agent",
    ],
    print_flag: "-p",
    trust_flag: "--trust",
    output_format_flag: "--output-format",
    model_flag: "--model",
    workspace_flag: Some("--workspace"),
    force_flag: Some("--yolo"),
    submode_flag: Some("--mode"),
    interactive_subcommand: None,
    trust_confirm: TrustConfirm::YesThenEnter,
};

pub static CLAUDE: Dialect = Dialect {
    name: "claude-code",
    default_bin: "claude",
    bin_env: "CLAUDE_BIN",
    install_hint: &[
        "Tip: install via `npm install -g @anthropic-ai/claude-code`",
        "  or set CLAUDE_BIN=/path/to/claude",
    ],
    print_flag: "--print",
    trust_flag: "--dangerously-skip-permissions",
    output_format_flag: "--output-format",
    model_flag: "--model",
    workspace_flag: None,
    force_flag: None,
    submode_flag: Some("--permission-mode"),
    interactive_subcommand: None,
    trust_confirm: TrustConfirm::EnterOnly,
};

/// CLI selector for the shipped dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ToolKind {
    Cursor,
    Claude,
}

impl ToolKind {
    pub fn dialect(self) -> &'static Dialect {
        match self {
            ToolKind::Cursor => &CURSOR,
            ToolKind::Claude => &CLAUDE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialects_disagree_on_trust_confirm() {
        assert_eq!(CURSOR.trust_confirm, TrustConfirm::YesThenEnter);
        assert_eq!(CLAUDE.trust_confirm, TrustConfirm::EnterOnly);
    }

    #[test]
    fn test_claude_selects_workspace_via_cwd() {
        assert!(CLAUDE.workspace_flag.is_none());
        assert_eq!(CURSOR.workspace_flag, Some("--workspace"));
    }

    #[test]
    fn test_tool_kind_maps_to_dialect() {
        assert_eq!(ToolKind::Cursor.dialect().name, "cursor-agent");
        assert_eq!(ToolKind::Claude.dialect().name, "claude-code");
    }
}
