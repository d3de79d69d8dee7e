//! Running external programs.

use std::ffi::OsString;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use super::args::display_command;
use crate::commands::{CommandError, Result};

/// Runs `program` to completion and returns its standard output.
///
/// Standard output and error are captured concurrently. A non-zero exit
/// is a [`CommandError::Process`] carrying the captured standard error.
pub async fn run_capture(program: &str, args: &[OsString]) -> Result<String> {
    debug!(command = %display_command(program, args), "spawning");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| CommandError::Process {
            program: program.to_string(),
            stderr: format!("failed to start: {e}"),
        })?;

    debug!(program, status = ?output.status, "process exited");

    if !output.status.success() {
        return Err(CommandError::Process {
            program: program.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
