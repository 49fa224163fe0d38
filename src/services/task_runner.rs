// Generic shell-command execution facility

use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

use crate::utils::error::Result;

/// Build a command that runs `command_line` through the platform shell
pub fn shell_command(command_line: &str) -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command_line]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command_line]);
        cmd
    }
}

/// Run one shell command in `cwd` with inherited stdio, suspending until the
/// child exits. The exit status is returned untouched; interpreting it is the
/// caller's job.
pub async fn run_command(command_line: &str, cwd: &Path) -> Result<ExitStatus> {
    let status = shell_command(command_line)
        .current_dir(cwd)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await?;

    Ok(status)
}
