// Ephemeral local registry lifecycle

use std::process::Stdio;
use std::time::Duration;

use tokio::process::{Child, Command};
use tracing::{debug, info};

use crate::models::registry::RegistryConfig;
use crate::utils::validation;

const READINESS_ATTEMPTS: u32 = 120;
const READINESS_DELAY: Duration = Duration::from_millis(500);

/// Registry lifecycle errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The configured target is not a local-registry target
    #[error("invalid registry target: {0}")]
    InvalidTarget(String),

    /// Could not spawn the registry runner
    #[error("failed to spawn registry runner: {0}")]
    Spawn(std::io::Error),

    /// The runner died before the registry ever answered
    #[error("registry runner exited before the registry came up (exit code {code:?})")]
    ExitedEarly { code: Option<i32> },

    /// The registry never answered the readiness probe
    #[error("registry at {url} did not become ready within {waited:?}")]
    NotReady { url: String, waited: Duration },

    /// Stopping the runner failed
    #[error("failed to stop registry runner: {0}")]
    Shutdown(std::io::Error),
}

/// Owned teardown capability for a running local registry.
///
/// Hold this for the whole suite and call [`RegistryHandle::teardown`] at the
/// end; dropping it kills the runner as a backstop so a failed bootstrap
/// cannot leak the process.
#[derive(Debug)]
pub struct RegistryHandle {
    child: Child,
    url: String,
}

impl RegistryHandle {
    /// URL the registry is serving on
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Stop the registry runner and reap it
    pub async fn teardown(mut self) -> Result<(), RegistryError> {
        debug!(url = %self.url, "tearing down local registry");
        self.child.kill().await.map_err(RegistryError::Shutdown)?;
        Ok(())
    }
}

/// Start the local registry runner and wait until the registry answers.
///
/// Exactly one registry per test run: starting a second one against the same
/// URL is unsupported.
pub async fn start_registry(config: &RegistryConfig) -> Result<RegistryHandle, RegistryError> {
    validation::validate_registry_target(&config.target)
        .map_err(|e| RegistryError::InvalidTarget(e.to_string()))?;

    let mut command = Command::new("npx");
    command.args(["nx", "run", &config.target]);
    if config.verbose {
        command
            .arg("--verbose")
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
    } else {
        command.stdout(Stdio::null()).stderr(Stdio::null());
    }
    command.kill_on_drop(true);

    info!(registry_target = %config.target, "starting local registry");
    let mut child = command.spawn().map_err(RegistryError::Spawn)?;

    let client = reqwest::Client::new();
    for _ in 0..READINESS_ATTEMPTS {
        if let Some(status) = child.try_wait().map_err(RegistryError::Spawn)? {
            return Err(RegistryError::ExitedEarly {
                code: status.code(),
            });
        }

        if registry_is_up(&client, &config.url).await {
            info!(url = %config.url, "local registry ready");
            return Ok(RegistryHandle {
                child,
                url: config.url.clone(),
            });
        }

        tokio::time::sleep(READINESS_DELAY).await;
    }

    let _ = child.kill().await;
    Err(RegistryError::NotReady {
        url: config.url.clone(),
        waited: READINESS_DELAY * READINESS_ATTEMPTS,
    })
}

/// One readiness probe: does the registry answer at all?
pub async fn registry_is_up(client: &reqwest::Client, url: &str) -> bool {
    match client.get(url).send().await {
        Ok(response) => response.status().is_success() || response.status().is_redirection(),
        Err(_) => false,
    }
}
