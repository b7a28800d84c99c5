//! Execution-mode selection.

use clap::ValueEnum;

/// Requested execution mode, before prompt heuristics are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RequestedMode {
    Auto,
    Headless,
    Interactive,
}

/// Concrete execution shape for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Headless,
    Interactive,
}

/// Detect prompts that carry interactive slash commands.
///
/// A line counts when it starts with a single `/` after trimming;
/// `//`-style comment lines do not.
pub fn looks_like_slash_commands(prompt: &str) -> bool {
    prompt.lines().any(|line| {
        let stripped = line.trim();
        stripped.starts_with('/') && !stripped.starts_with("//")
    })
}

/// Resolve the requested mode against the prompt content. Explicit
/// requests always win; only `auto` consults the prompt.
pub fn select(requested: RequestedMode, prompt: Option<&str>) -> RunMode {
    match requested {
        RequestedMode::Headless => RunMode::Headless,
        RequestedMode::Interactive => RunMode::Interactive,
        RequestedMode::Auto => {
            if prompt.is_some_and(looks_like_slash_commands) {
                RunMode::Interactive
            } else {
                RunMode::Headless
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_slash_command() {
        assert!(looks_like_slash_commands("/plan refactor module"));
        assert!(looks_like_slash_commands("fix this\n  /review\nthanks"));
    }

    #[test]
    fn test_plain_prompt_is_not_slash() {
        assert!(!looks_like_slash_commands("fix the bug in parser.go"));
        assert!(!looks_like_slash_commands(""));
        assert!(!looks_like_slash_commands("see a/b/c for details"));
    }

    #[test]
    fn test_double_slash_comment_does_not_count() {
        assert!(!looks_like_slash_commands("// just a comment"));
        assert!(looks_like_slash_commands("// comment\n/compact"));
    }

    #[test]
    fn test_auto_resolves_from_prompt() {
        assert_eq!(
            select(RequestedMode::Auto, Some("/plan refactor module")),
            RunMode::Interactive
        );
        assert_eq!(
            select(RequestedMode::Auto, Some("fix the bug in parser.go")),
            RunMode::Headless
        );
        assert_eq!(select(RequestedMode::Auto, None), RunMode::Headless);
    }

    #[test]
    fn test_explicit_mode_overrides_prompt() {
        assert_eq!(
            select(RequestedMode::Headless, Some("/plan something")),
            RunMode::Headless
        );
        assert_eq!(
            select(RequestedMode::Interactive, Some("no slashes here")),
            RunMode::Interactive
        );
    }
}
