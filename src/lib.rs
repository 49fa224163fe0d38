// regfix - local registry integration-test harness
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export the pieces test suites reach for most often
pub use models::executor::ExecutorOptions;
pub use models::publish::PublishOptions;
pub use models::registry::{RegistryConfig, RegistrySettings, LOCAL_VERSION};
pub use services::registry_manager::RegistryHandle;
