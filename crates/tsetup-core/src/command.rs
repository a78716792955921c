//! Child-process helpers for the editor CLI and package managers

use std::process::{Command, Stdio};

use crate::error::{SetupError, SetupResult};

/// The editor CLI command for the host OS.
#[must_use]
pub fn editor_command() -> &'static str {
    if cfg!(windows) {
        "code.cmd"
    } else {
        "code"
    }
}

/// Check whether the editor CLI responds to `--version`. Any spawn
/// failure or non-zero exit counts as not installed.
#[must_use]
pub fn editor_installed(command: &str) -> bool {
    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Run a mandatory command with stdio inherited from the parent and
/// wait for it to finish.
///
/// # Errors
/// Returns `CommandFailure` if the process cannot be spawned or exits
/// non-zero. Callers treat this as fatal; nothing is retried.
pub fn run_command(program: &str, args: &[&str]) -> SetupResult<()> {
    let rendered = render(program, args);

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|err| SetupError::CommandFailure {
            command: rendered.clone(),
            reason: err.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        let reason = match status.code() {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_string(),
        };
        Err(SetupError::CommandFailure {
            command: rendered,
            reason,
        })
    }
}

fn render(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}
