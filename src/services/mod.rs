// Services module: registry lifecycle, publishing, guarded CLI drivers
pub mod driver;
pub mod executor;
pub mod fixtures;
pub mod publisher;
pub mod registry_manager;
pub mod task_runner;
