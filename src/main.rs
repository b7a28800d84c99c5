use std::process::ExitCode;

use clap::Parser;
use tracing::error;

mod cli;
mod command;
mod config;
mod dialect;
mod error;
mod mode;
mod pty;
mod tmux;

use cli::Args;
use config::LaunchConfig;
use error::DispatchError;
use mode::RunMode;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging. Diagnostics go to stderr so operator guidance
    // and snapshots on stdout stay copy-pasteable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(code) => exit_code(code),
        // Missing dependencies were already reported where detected.
        Err(err) => match err.downcast_ref::<DispatchError>() {
            Some(dep) => exit_code(dep.exit_code()),
            None => {
                error!("{err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

async fn run(args: Args) -> anyhow::Result<i32> {
    let requested = args.run_mode;
    let (launch, session) = LaunchConfig::from_args(args)?;

    match mode::select(requested, launch.prompt.as_deref()) {
        RunMode::Interactive => tmux::launch_interactive(&launch, &session).await,
        RunMode::Headless => {
            let argv = command::headless_argv(&launch);
            // Dialects without a workspace flag select the workspace
            // through the process working directory instead.
            let cwd = if launch.dialect.workspace_flag.is_none() {
                launch.workspace.as_deref().or(launch.cwd.as_deref())
            } else {
                launch.cwd.as_deref()
            };
            pty::run_with_pty(&argv, cwd).await
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(code.clamp(0, 255) as u8)
}
