use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// What the agent in a pane appears to be doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaneStatus {
    /// Actively processing (spinner glyphs, streaming output)
    Busy,
    /// Sitting at its input prompt
    Idle,
    /// Blocked on a confirmation or question
    WaitingForInput,
    /// Printed an error
    Error,
    /// Status cannot be determined
    #[default]
    Unknown,
}

/// Compiled regex patterns for status detection
static RE_WAITING_INPUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mi)(\[y/n\]|\(y/N\)|\(Y/n\)|Do you trust|press enter to (confirm|continue)|waiting for (your )?input)").unwrap()
});

static RE_BUSY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mi)(Thinking|Generating|Running tool|esc to interrupt|⠋|⠙|⠹|⠸|⠼|⠴|⠦|⠧|⠇|⠏)").unwrap()
});

static RE_ERROR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)(^\s*(Error|error):|rate limit reached|connection (refused|reset)|panicked at)").unwrap()
});

static RE_IDLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)(^\s*[>❯]\s*$|\? for shortcuts|Type a message)").unwrap()
});

impl PaneStatus {
    /// Classify recent pane content. Only the trailing ~20 lines matter;
    /// priority order: Error > WaitingForInput > Busy > Idle > Unknown.
    pub fn infer(content: &str) -> Self {
        let lines: Vec<&str> = content.lines().rev().take(20).collect();
        let recent = lines.into_iter().rev().collect::<Vec<_>>().join("\n");

        if RE_ERROR.is_match(&recent) {
            return PaneStatus::Error;
        }

        if RE_WAITING_INPUT.is_match(&recent) {
            return PaneStatus::WaitingForInput;
        }

        if RE_BUSY.is_match(&recent) {
            return PaneStatus::Busy;
        }

        if RE_IDLE.is_match(&recent) {
            return PaneStatus::Idle;
        }

        PaneStatus::Unknown
    }

    /// Short operator-facing label.
    pub fn label(self) -> &'static str {
        match self {
            PaneStatus::Busy => "busy",
            PaneStatus::Idle => "idle",
            PaneStatus::WaitingForInput => "waiting for input",
            PaneStatus::Error => "error",
            PaneStatus::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_waiting_for_input() {
        let content = "Do you trust the files in this workspace? (Y/n)";
        assert_eq!(PaneStatus::infer(content), PaneStatus::WaitingForInput);
    }

    #[test]
    fn test_detect_busy() {
        let content = "⠹ Thinking about the parser bug (esc to interrupt)";
        assert_eq!(PaneStatus::infer(content), PaneStatus::Busy);
    }

    #[test]
    fn test_detect_error() {
        let content = "Something went wrong\nError: connection refused";
        assert_eq!(PaneStatus::infer(content), PaneStatus::Error);
    }

    #[test]
    fn test_detect_idle() {
        let content = "Previous output\n> \n  ? for shortcuts";
        assert_eq!(PaneStatus::infer(content), PaneStatus::Idle);
    }

    #[test]
    fn test_old_lines_are_ignored() {
        // An error far in the scrollback should not mask a live prompt.
        let mut content = "Error: transient failure\n".to_string();
        content.push_str(&"tool output line\n".repeat(25));
        content.push_str("> ");
        assert_eq!(PaneStatus::infer(&content), PaneStatus::Idle);
    }
}
