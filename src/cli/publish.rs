// Publish command: run the publish step against an already-running registry

use std::path::PathBuf;

use crate::cli::bootstrap::load_config;
use crate::models::publish::PublishOptions;
use crate::models::registry::LOCAL_VERSION;
use crate::services::publisher;
use crate::utils::error::Result;
use crate::utils::validation;

/// Publish the workspace packages to the local registry
pub struct PublishCommand {
    pub version: Option<String>,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}

impl PublishCommand {
    /// Execute the publish command
    pub async fn execute(&self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let verbose = config.resolve_verbose(self.verbose);

        let version = self
            .version
            .clone()
            .unwrap_or_else(|| LOCAL_VERSION.to_string());
        validation::validate_version(&version)?;

        let options = PublishOptions::new(version)
            .script(&config.publish_script)
            .verbose(verbose);

        publisher::publish_local_packages(&options).await?;
        Ok(())
    }
}
