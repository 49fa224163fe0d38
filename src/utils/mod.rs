// Shared utilities: errors, configuration, validation

pub mod config;
pub mod error;
pub mod validation;
