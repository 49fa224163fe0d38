// Run command: bootstrap, execute one suite, tear down

use std::path::PathBuf;

use serde_json::json;

use crate::cli::bootstrap::{bootstrap, load_config};
use crate::models::executor::ExecutorOptions;
use crate::models::registry::LOCAL_VERSION;
use crate::services::executor;
use crate::utils::error::{HarnessError, Result};

/// Run one integration-test suite against a freshly bootstrapped registry
pub struct RunCommand {
    pub cwd: PathBuf,
    pub test_file_path: PathBuf,
    pub update_snapshots: bool,
    pub json: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}

impl RunCommand {
    /// Execute the run command
    pub async fn execute(&self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let verbose = config.resolve_verbose(self.verbose);

        let handle = bootstrap(&config, LOCAL_VERSION, verbose).await?;

        let options = ExecutorOptions::new(&self.cwd, &self.test_file_path)
            .update_snapshots(self.update_snapshots);

        // Tear the registry down whether or not the suite ran; only then look
        // at either result.
        let suite_result = executor::run(&options).await;
        let teardown_result = handle.teardown().await;

        let status = suite_result?;
        teardown_result?;

        let exit_code = status.code().unwrap_or(-1);

        if self.json {
            let response = json!({
                "status": if exit_code == 0 { "success" } else { "failure" },
                "command": executor::build_command(&options),
                "exit_code": exit_code,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&response).map_err(|e| {
                    HarnessError::ConfigError(format!("JSON serialization error: {}", e))
                })?
            );
        }

        if exit_code != 0 {
            return Err(HarnessError::ExecutionError {
                message: format!(
                    "suite '{}' failed with exit code {}",
                    self.test_file_path.display(),
                    exit_code
                ),
                exit_code,
            });
        }

        Ok(())
    }
}
