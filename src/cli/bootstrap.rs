// Bootstrap command: reset fixtures, start the registry, publish packages

use std::path::PathBuf;

use crate::models::publish::PublishOptions;
use crate::models::registry::{RegistryConfig, LOCAL_VERSION};
use crate::services::registry_manager::{self, RegistryHandle};
use crate::services::{fixtures, publisher};
use crate::utils::config::{ConfigParser, HarnessConfig, DEFAULT_CONFIG_FILE};
use crate::utils::error::Result;
use crate::utils::validation;

/// Bring up a clean local-registry environment
pub struct BootstrapCommand {
    pub version: Option<String>,
    pub hold: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}

impl BootstrapCommand {
    /// Execute the bootstrap command
    pub async fn execute(&self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let verbose = config.resolve_verbose(self.verbose);

        let version = self
            .version
            .clone()
            .unwrap_or_else(|| LOCAL_VERSION.to_string());
        validation::validate_version(&version)?;

        let handle = bootstrap(&config, &version, verbose).await?;

        if self.hold {
            println!(
                "Local registry ready at {} - press Ctrl-C to stop",
                handle.url()
            );
            tokio::signal::ctrl_c().await?;
        }

        handle.teardown().await?;
        Ok(())
    }
}

/// Load harness configuration from an explicit path or the default location
pub fn load_config(path: Option<&std::path::Path>) -> Result<HarnessConfig> {
    match path {
        Some(path) => ConfigParser::load_config(path),
        None => ConfigParser::load_config(DEFAULT_CONFIG_FILE),
    }
}

/// The full bootstrap sequence, strictly in order: clear fixtures, start the
/// registry, publish the workspace packages.
///
/// The registry handle is returned to the caller, who owns teardown. A failed
/// publish tears the registry down here before the error propagates, so no
/// exit path leaks the process.
pub async fn bootstrap(
    config: &HarnessConfig,
    version: &str,
    verbose: bool,
) -> Result<RegistryHandle> {
    fixtures::reset_fixtures(&config.fixtures_dir).await?;

    let registry_config = RegistryConfig {
        target: config.registry_target.clone(),
        url: config.registry_url.clone(),
        verbose,
    };
    let handle = registry_manager::start_registry(&registry_config).await?;

    let publish_options = PublishOptions::new(version)
        .script(&config.publish_script)
        .verbose(verbose);

    if let Err(err) = publisher::publish_local_packages(&publish_options).await {
        let _ = handle.teardown().await;
        return Err(err.into());
    }

    Ok(handle)
}
