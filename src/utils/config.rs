// Harness configuration loading and TOML parsing

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::models::registry::{DEFAULT_REGISTRY_TARGET, DEFAULT_REGISTRY_URL};
use crate::utils::error::{HarnessError, Result};
use crate::utils::validation;

/// Default location of the publish script, relative to the harness cwd
pub const DEFAULT_PUBLISH_SCRIPT: &str = "./publish-to-verdaccio.sh";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "regfix.toml";

/// Default fixtures directory, recreated on every bootstrap
pub const DEFAULT_FIXTURES_DIR: &str = "fixtures";

/// Environment variable that forces verbose child-process output
pub const VERBOSE_ENV_VAR: &str = "REGFIX_VERBOSE";

/// Top-level harness configuration, usually read from regfix.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Directory holding generated workspace fixtures
    pub fixtures_dir: PathBuf,
    /// Project target that starts the local registry
    pub registry_target: String,
    /// URL the local registry listens on once started
    pub registry_url: String,
    /// Script that publishes workspace packages into the local registry
    pub publish_script: String,
    /// Stream child-process output instead of buffering it
    pub verbose: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            fixtures_dir: PathBuf::from(DEFAULT_FIXTURES_DIR),
            registry_target: DEFAULT_REGISTRY_TARGET.to_string(),
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            publish_script: DEFAULT_PUBLISH_SCRIPT.to_string(),
            verbose: false,
        }
    }
}

impl HarnessConfig {
    /// Resolve the effective verbosity: CLI flag, then environment, then config
    pub fn resolve_verbose(&self, cli_flag: bool) -> bool {
        if cli_flag {
            return true;
        }
        if std::env::var(VERBOSE_ENV_VAR).map(|v| v == "true").unwrap_or(false) {
            return true;
        }
        self.verbose
    }
}

/// Configuration parsing and validation utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Load harness configuration from a TOML file.
    ///
    /// A missing file is not an error; the defaults cover the common layout
    /// where the harness runs from the workspace root.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<HarnessConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(HarnessConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            HarnessError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse_config(&content)
    }

    /// Parse harness configuration from a TOML string
    pub fn parse_config(content: &str) -> Result<HarnessConfig> {
        let config: HarnessConfig = toml::from_str(content)
            .map_err(|e| HarnessError::ConfigError(format!("Invalid TOML syntax: {}", e)))?;

        Self::validate_config(&config)?;

        Ok(config)
    }

    fn validate_config(config: &HarnessConfig) -> Result<()> {
        validation::validate_registry_target(&config.registry_target)?;

        if config.publish_script.trim().is_empty() {
            return Err(HarnessError::ConfigError(
                "publish_script cannot be empty".to_string(),
            ));
        }

        if !config.registry_url.contains("localhost") && !config.registry_url.contains("127.0.0.1")
        {
            return Err(HarnessError::ConfigError(format!(
                "registry_url '{}' does not point at a local registry",
                config.registry_url
            )));
        }

        Ok(())
    }
}
