// Publishes locally-built packages into the ephemeral registry

use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::info;

use crate::models::publish::PublishOptions;
use crate::services::task_runner::shell_command;

/// Marker verdaccio prints when a version is already published. Substring
/// matching on tool output is brittle; keep the wording in exactly one place.
pub const ALREADY_PRESENT_MARKER: &str = "this package is already present";

/// Publish step errors
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// Could not spawn the publish script
    #[error("failed to spawn publish script: {0}")]
    Spawn(std::io::Error),

    /// Reading the script's output (or reaping it) failed
    #[error("failed reading publish script output: {0}")]
    Output(std::io::Error),

    /// The script exited non-zero for a reason other than a benign republish
    #[error("publish script exited with code {0}")]
    ScriptFailed(i32),

    /// The script was killed by a signal
    #[error("publish script terminated by signal")]
    Terminated,
}

/// Classify a failed publish: a non-zero exit whose output only complains
/// that the version already exists is a no-op success.
pub fn is_benign_republish(output: &str) -> bool {
    output.contains(ALREADY_PRESENT_MARKER)
}

/// Run the publish script once, suspending until it exits.
///
/// Verbose mode streams the child's output straight through; quiet mode
/// buffers it (up to `max_buffer` bytes) and only surfaces it on a genuine
/// failure. Exactly one child process is spawned per call.
pub async fn publish_local_packages(options: &PublishOptions) -> Result<(), PublishError> {
    let command_line = format!("{} {}", options.script, options.version);
    let mut command = shell_command(&command_line);

    if options.verbose {
        command.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    } else {
        command.stdout(Stdio::piped()).stderr(Stdio::piped());
    }

    let mut child = command.spawn().map_err(PublishError::Spawn)?;

    let (status, logs) = if options.verbose {
        let status = child.wait().await.map_err(PublishError::Output)?;
        (status, String::new())
    } else {
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let cap = options.max_buffer;

        let (status, out, err) = tokio::try_join!(
            async { child.wait().await.map_err(PublishError::Output) },
            drain_capped(stdout, cap),
            drain_capped(stderr, cap),
        )?;

        let mut combined = String::from_utf8_lossy(&out).into_owned();
        combined.push_str(&String::from_utf8_lossy(&err));
        (status, combined)
    };

    if status.success() {
        return Ok(());
    }

    if is_benign_republish(&logs) {
        info!("packages already published to the local registry, continuing");
        return Ok(());
    }

    if !options.verbose {
        // Surface the buffered output exactly once before failing.
        println!("{}", logs);
    }

    match status.code() {
        Some(code) => Err(PublishError::ScriptFailed(code)),
        None => Err(PublishError::Terminated),
    }
}

/// Read a child stream to the end, keeping at most `cap` bytes
async fn drain_capped<R>(reader: Option<R>, cap: usize) -> Result<Vec<u8>, PublishError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    let Some(mut reader) = reader else {
        return Ok(buf);
    };

    let mut chunk = [0u8; 8192];
    loop {
        let n = reader.read(&mut chunk).await.map_err(PublishError::Output)?;
        if n == 0 {
            break;
        }
        if buf.len() < cap {
            let take = n.min(cap - buf.len());
            buf.extend_from_slice(&chunk[..take]);
        }
    }

    Ok(buf)
}
