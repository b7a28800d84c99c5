//! Interactive launch sequence against an isolated tmux server.
//!
//! Stands up a fresh session, types the launch command, answers the
//! workspace-trust dialog when it shows up, then types the prompt one
//! line at a time the way a user would.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::command;
use crate::config::{LaunchConfig, SessionConfig};
use crate::dialect::TrustConfirm;
use crate::error::DispatchError;

use super::heuristics::PaneStatus;
use super::{tmux_available, Multiplexer, SessionAddress, TmuxClient, CAPTURE_LINES};

/// Window name given to the session's single window.
const WINDOW_NAME: &str = "shell";

/// How long the trust dialog is given to appear.
const TRUST_TIMEOUT: Duration = Duration::from_secs(20);
/// Poll interval while watching for the trust dialog.
const TRUST_POLL: Duration = Duration::from_millis(500);
/// Settle time after answering the trust dialog.
const CONFIRM_PAUSE: Duration = Duration::from_millis(800);
/// Time the agent gets to finish initializing before the prompt is typed.
const INIT_PAUSE: Duration = Duration::from_secs(2);

/// Time source and sleeper, injectable so the launch sequence and its
/// polling are testable without real waiting.
#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
    async fn sleep(&self, duration: Duration);
}

/// Wall-clock implementation used outside tests.
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Entry point for interactive mode. Checks for tmux before any session
/// work, then runs the launch sequence against a real client. Returns
/// the process exit code.
pub async fn launch_interactive(cfg: &LaunchConfig, session: &SessionConfig) -> Result<i32> {
    if !tmux_available() {
        error!("tmux not found in PATH");
        return Err(DispatchError::MultiplexerMissing.into());
    }

    let address = SessionAddress::resolve(
        session.socket_dir.as_deref(),
        &session.socket_name,
        &session.session,
    )
    .await?;

    let client = TmuxClient::new(&address);
    run_sequence(&client, &SystemClock, cfg, session, &address).await?;
    Ok(0)
}

/// The launch sequence, written against the multiplexer and clock seams.
async fn run_sequence(
    mux: &dyn Multiplexer,
    clock: &dyn Clock,
    cfg: &LaunchConfig,
    session: &SessionConfig,
    address: &SessionAddress,
) -> Result<()> {
    // Idempotent reset; a leftover session of the same name is expected.
    let _ = mux.kill_session(&address.session).await;

    mux.new_session(&address.session, WINDOW_NAME).await?;

    let target = address.target();
    let cwd = working_dir(cfg);

    let argv = command::interactive_argv(cfg, &cwd);
    let mut launch = shell_words::join(&argv);
    if cfg.dialect.workspace_flag.is_none() {
        let dir = cwd.to_string_lossy();
        launch = format!("cd {} && {launch}", shell_words::quote(&dir));
    }

    mux.send_literal(&target, &launch).await?;
    mux.send_key(&target, "Enter").await?;

    if wait_for_text(mux, clock, &target, "trust", TRUST_TIMEOUT, TRUST_POLL).await {
        match cfg.dialect.trust_confirm {
            TrustConfirm::YesThenEnter => {
                let _ = mux.send_literal(&target, "y").await;
                let _ = mux.send_key(&target, "Enter").await;
            }
            TrustConfirm::EnterOnly => {
                let _ = mux.send_key(&target, "Enter").await;
            }
        }
        clock.sleep(CONFIRM_PAUSE).await;
    } else {
        debug!("trust dialog not seen within {}s", TRUST_TIMEOUT.as_secs());
    }

    if let Some(prompt) = cfg.prompt.as_deref() {
        clock.sleep(INIT_PAUSE).await;
        for line in prompt.lines().filter(|line| !line.trim().is_empty()) {
            mux.send_literal(&target, line).await?;
            mux.send_key(&target, "Enter").await?;
            clock.sleep(session.send_delay).await;
        }
    }

    info!(session = %address.session, "started interactive agent session");
    println!("Started interactive agent session in tmux.");
    println!("  Monitor:  {}", address.attach_command());
    println!("  Snapshot: {}", address.snapshot_command());

    if !session.wait.is_zero() {
        clock.sleep(session.wait).await;
        // Best-effort; a failed capture is simply skipped.
        if let Ok(snapshot) = mux.capture_last(&target, CAPTURE_LINES).await {
            let status = PaneStatus::infer(&snapshot);
            println!(
                "\n--- tmux snapshot (last {CAPTURE_LINES} lines, agent {}) ---\n",
                status.label()
            );
            println!("{snapshot}");
        }
    }

    Ok(())
}

fn working_dir(cfg: &LaunchConfig) -> PathBuf {
    cfg.workspace
        .clone()
        .or_else(|| cfg.cwd.clone())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Poll the pane until `pattern` shows up in its recent output or the
/// deadline passes. Capture errors are retried, not fatal.
async fn wait_for_text(
    mux: &dyn Multiplexer,
    clock: &dyn Clock,
    target: &str,
    pattern: &str,
    timeout: Duration,
    poll: Duration,
) -> bool {
    let deadline = clock.now() + timeout;
    while clock.now() < deadline {
        if let Ok(buf) = mux.capture_last(target, CAPTURE_LINES).await {
            if buf.contains(pattern) {
                return true;
            }
        }
        clock.sleep(poll).await;
    }
    false
}
