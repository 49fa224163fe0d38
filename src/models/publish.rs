// Options consumed by the publish step

use crate::models::registry::LOCAL_VERSION;
use crate::utils::config::DEFAULT_PUBLISH_SCRIPT;

/// Upper bound on buffered publish output. Verbose publishes from a large
/// workspace can emit a lot of text; cap it rather than grow without bound.
pub const MAX_PUBLISH_BUFFER: usize = 1_024_000_000;

/// How to run the publish script for one bootstrap
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Version string passed to the publish script
    pub version: String,
    /// Script invoked through the shell with the current environment
    pub script: String,
    /// Stream output live instead of buffering it for failure reporting
    pub verbose: bool,
    /// Cap on the in-memory output buffer, in bytes
    pub max_buffer: usize,
}

impl PublishOptions {
    pub fn new(version: impl Into<String>) -> Self {
        PublishOptions {
            version: version.into(),
            script: DEFAULT_PUBLISH_SCRIPT.to_string(),
            verbose: false,
            max_buffer: MAX_PUBLISH_BUFFER,
        }
    }

    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.script = script.into();
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for PublishOptions {
    fn default() -> Self {
        PublishOptions::new(LOCAL_VERSION)
    }
}
