// Test-suite executor: one structured options record in, one shell command out

use std::process::ExitStatus;

use crate::models::executor::ExecutorOptions;
use crate::services::task_runner;
use crate::utils::error::Result;

/// Build the single test-runner invocation for one suite file.
///
/// Suites run serially (`--runInBand`); the only variation is the optional
/// update-snapshots flag.
pub fn build_command(options: &ExecutorOptions) -> String {
    let mut command = format!("npx jest --runInBand {}", options.test_file_path.display());
    if options.update_snapshots {
        command.push_str(" -u");
    }
    command
}

/// Run the suite command in the configured working directory.
///
/// Execution, cwd handling and output streaming are entirely the generic
/// runner's job; the resulting exit status is returned uninterpreted, with no
/// retries.
pub async fn run(options: &ExecutorOptions) -> Result<ExitStatus> {
    task_runner::run_command(&build_command(options), &options.cwd).await
}
