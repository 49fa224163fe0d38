// Registry configuration types shared across the harness

use std::time::Duration;

/// Version every locally published/installed package carries, chosen so it can
/// never collide with a real release.
pub const LOCAL_VERSION: &str = "9999.0.1-local-integration-tests";

/// URL the ephemeral registry listens on by default (verdaccio's default port)
pub const DEFAULT_REGISTRY_URL: &str = "http://localhost:4873";

/// Project target whose runner starts the local registry
pub const DEFAULT_REGISTRY_TARGET: &str = "@angular-eslint/angular-eslint:local-registry";

/// Suite-level backstop documented for callers; the harness itself applies no
/// per-subprocess timeout.
pub const LONG_TIMEOUT: Duration = Duration::from_secs(600);

/// How to start the local registry for one test run
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Target identifier in `<scope>:<name>:local-registry` form
    pub target: String,
    /// URL to probe for readiness once the runner is spawned
    pub url: String,
    /// Stream the registry runner's output instead of discarding it
    pub verbose: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            target: DEFAULT_REGISTRY_TARGET.to_string(),
            url: DEFAULT_REGISTRY_URL.to_string(),
            verbose: false,
        }
    }
}

/// The active package-manager registry setting, injected into every guarded
/// command wrapper instead of read ad hoc from the environment.
#[derive(Debug, Clone, Default)]
pub struct RegistrySettings {
    /// Value of `NPM_CONFIG_REGISTRY` (or its lowercase npm-internal twin)
    pub npm_config_registry: Option<String>,
}

impl RegistrySettings {
    /// Capture the ambient npm registry setting from the environment
    pub fn from_env() -> Self {
        let value = std::env::var("NPM_CONFIG_REGISTRY")
            .or_else(|_| std::env::var("npm_config_registry"))
            .ok();
        RegistrySettings {
            npm_config_registry: value,
        }
    }

    /// Settings that point at an explicit local registry URL
    pub fn local(url: &str) -> Self {
        RegistrySettings {
            npm_config_registry: Some(url.to_string()),
        }
    }

    /// Whether the active registry points at this machine
    pub fn is_local(&self) -> bool {
        self.npm_config_registry
            .as_deref()
            .map(|value| value.contains("localhost"))
            .unwrap_or(false)
    }
}
