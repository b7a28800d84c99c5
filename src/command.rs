//! Argument-vector assembly for both execution shapes.

use std::path::Path;

use crate::config::LaunchConfig;

/// Headless invocation: print and trust flags always present, then the
/// option flags, the prompt as the trailing positional, and finally the
/// passthrough extras.
pub fn headless_argv(cfg: &LaunchConfig) -> Vec<String> {
    let d = cfg.dialect;
    let mut cmd = vec![
        cfg.agent_bin.clone(),
        d.print_flag.to_string(),
        d.trust_flag.to_string(),
        d.output_format_flag.to_string(),
        cfg.output_format.as_str().to_string(),
    ];

    if let Some(model) = &cfg.model {
        cmd.push(d.model_flag.to_string());
        cmd.push(model.clone());
    }

    if let Some(flag) = d.workspace_flag {
        if let Some(dir) = cfg.workspace.as_deref().or(cfg.cwd.as_deref()) {
            cmd.push(flag.to_string());
            cmd.push(dir.to_string_lossy().into_owned());
        }
    }

    if cfg.force_all {
        if let Some(flag) = d.force_flag {
            cmd.push(flag.to_string());
        }
    }

    if let Some(submode) = cfg.submode {
        if let Some(flag) = d.submode_flag {
            cmd.push(flag.to_string());
            cmd.push(submode.as_str().to_string());
        }
    }

    if let Some(prompt) = &cfg.prompt {
        cmd.push(prompt.clone());
    }

    cmd.extend(cfg.extra.iter().cloned());
    cmd
}

/// Interactive launch line. The prompt is never part of this vector;
/// it is typed into the session afterwards, line by line.
pub fn interactive_argv(cfg: &LaunchConfig, cwd: &Path) -> Vec<String> {
    let d = cfg.dialect;
    let mut cmd = vec![cfg.agent_bin.clone()];

    if let Some(sub) = d.interactive_subcommand {
        cmd.push(sub.to_string());
    }

    if let Some(model) = &cfg.model {
        cmd.push(d.model_flag.to_string());
        cmd.push(model.clone());
    }

    if cfg.force_all {
        if let Some(flag) = d.force_flag {
            cmd.push(flag.to_string());
        }
    }

    if let Some(submode) = cfg.submode {
        if let Some(flag) = d.submode_flag {
            cmd.push(flag.to_string());
            cmd.push(submode.as_str().to_string());
        }
    }

    if let Some(flag) = d.workspace_flag {
        cmd.push(flag.to_string());
        cmd.push(cwd.to_string_lossy().into_owned());
    }

    cmd.extend(cfg.extra.iter().cloned());
    cmd
}
