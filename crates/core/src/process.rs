//! Launching one invocation and classifying how it ended.
//!
//! A run moves from *spawned* to *exited*, *signalled* or *spawn error* and
//! resolves to success or failure in a single step. Exit codes
//! `0..=SUCCESS_CEILING` are successes no matter which informational bits
//! they carry.

use std::ffi::OsStr;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::error::MirrorError;
use crate::exit_code::RobocopyExit;
use crate::invocation::Invocation;

/// Runs `invocation` to completion and returns its trimmed standard output.
///
/// Standard input is closed, standard output is collected and standard error
/// is inherited from the host. The child is not killed when the returned
/// future is dropped; once started, a run always finishes on its own.
pub async fn run_invocation(invocation: &Invocation) -> Result<String, MirrorError> {
    let program = invocation.program();
    debug!(target: "robomirror::process", command = %invocation, "spawning");

    let child = build_command(invocation)
        .spawn()
        .map_err(|error| MirrorError::spawn(program, error))?;

    let output = child
        .wait_with_output()
        .await
        .map_err(|error| MirrorError::io(program, error))?;

    if let Err(error) = classify_exit(program, output.status) {
        warn!(
            target: "robomirror::process",
            destination = invocation.destination().unwrap_or_default(),
            %error,
            "run failed"
        );
        return Err(error);
    }

    if let Some(code) = output.status.code() {
        let exit = RobocopyExit::from_code(code);
        info!(
            target: "robomirror::process",
            destination = invocation.destination().unwrap_or_default(),
            code,
            outcome = %exit.description(),
            "run finished"
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}

/// Maps a process exit status to success or [`MirrorError::Failed`].
pub fn classify_exit(program: &OsStr, status: ExitStatus) -> Result<(), MirrorError> {
    match status.code() {
        Some(code) if RobocopyExit::from_code(code).is_success() => Ok(()),
        Some(code) => Err(MirrorError::Failed {
            program: program.to_owned(),
            code: Some(code),
            signal: None,
        }),
        None => Err(MirrorError::Failed {
            program: program.to_owned(),
            code: None,
            signal: terminating_signal(status),
        }),
    }
}

#[cfg(unix)]
fn terminating_signal(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;

    status.signal()
}

#[cfg(not(unix))]
fn terminating_signal(_status: ExitStatus) -> Option<i32> {
    None
}

/// Prepares the command. Arguments are already quoted, so on Windows they are
/// appended raw to keep the runtime from quoting them a second time.
fn build_command(invocation: &Invocation) -> Command {
    let mut command = Command::new(invocation.program());

    #[cfg(windows)]
    {
        for arg in invocation.args() {
            command.raw_arg(arg);
        }
    }

    #[cfg(not(windows))]
    {
        command.args(invocation.args());
    }

    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .kill_on_drop(false);
    command
}
