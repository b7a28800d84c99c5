use thiserror::Error;

/// Exit code reported when a required external binary is missing.
pub const EXIT_MISSING_DEPENDENCY: i32 = 2;

/// Hard failures detected before any real work starts.
///
/// Everything else propagates as a plain `anyhow::Error` and exits 1;
/// these carry a dedicated exit code so callers in CI can tell "the
/// environment is missing a tool" apart from "the run failed".
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{tool} binary not found: {bin}")]
    AgentBinaryMissing { tool: &'static str, bin: String },

    #[error("tmux not found in PATH")]
    MultiplexerMissing,
}

impl DispatchError {
    /// Process exit code this error maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::AgentBinaryMissing { .. } | DispatchError::MultiplexerMissing => {
                EXIT_MISSING_DEPENDENCY
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dependency_exit_codes() {
        let err = DispatchError::AgentBinaryMissing {
            tool: "cursor-agent",
            bin: "agent".to_string(),
        };
        assert_eq!(err.exit_code(), EXIT_MISSING_DEPENDENCY);
        assert_eq!(DispatchError::MultiplexerMissing.exit_code(), EXIT_MISSING_DEPENDENCY);
    }

    #[test]
    fn test_agent_binary_missing_names_the_binary() {
        let err = DispatchError::AgentBinaryMissing {
            tool: "cursor-agent",
            bin: "/opt/agent".to_string(),
        };
        assert_eq!(err.to_string(), "cursor-agent binary not found: /opt/agent");
    }
}
