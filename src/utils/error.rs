// Common error types for the regfix harness

use std::error::Error;
use std::fmt;

use crate::services::driver::DriverError;
use crate::services::publisher::PublishError;
use crate::services::registry_manager::RegistryError;

#[derive(Debug)]
pub enum HarnessError {
    IoError(std::io::Error),
    ConfigError(String),
    ValidationError(String),
    RegistryError(String),
    PublishError(String),
    ExecutionError { message: String, exit_code: i32 },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::IoError(err) => write!(f, "IO error: {}", err),
            HarnessError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            HarnessError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            HarnessError::RegistryError(msg) => write!(f, "Registry error: {}", msg),
            HarnessError::PublishError(msg) => write!(f, "Publish error: {}", msg),
            HarnessError::ExecutionError { message, .. } => write!(f, "Execution error: {}", message),
        }
    }
}

impl Error for HarnessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HarnessError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HarnessError {
    fn from(err: std::io::Error) -> Self {
        HarnessError::IoError(err)
    }
}

impl From<PublishError> for HarnessError {
    fn from(err: PublishError) -> Self {
        match err {
            PublishError::ScriptFailed(code) => HarnessError::ExecutionError {
                message: format!("publish script failed with exit code {}", code),
                exit_code: code,
            },
            other => HarnessError::PublishError(other.to_string()),
        }
    }
}

impl From<RegistryError> for HarnessError {
    fn from(err: RegistryError) -> Self {
        HarnessError::RegistryError(err.to_string())
    }
}

impl From<DriverError> for HarnessError {
    fn from(err: DriverError) -> Self {
        match err {
            DriverError::RegistryNotLocal(_) | DriverError::InvalidArgument(_) => {
                HarnessError::ValidationError(err.to_string())
            }
            DriverError::NonZeroExit { code, .. } => HarnessError::ExecutionError {
                message: err.to_string(),
                exit_code: code,
            },
            other => HarnessError::ExecutionError {
                message: other.to_string(),
                exit_code: 1,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;

/// User-facing error presentation with a process exit code
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    /// Map an internal error to a printable message plus an exit code
    pub fn from_harness_error(err: &HarnessError) -> Self {
        let exit_code = match err {
            HarnessError::IoError(_) => 1,
            HarnessError::ValidationError(_) => 2,
            HarnessError::ConfigError(_) => 3,
            HarnessError::RegistryError(_) => 4,
            HarnessError::PublishError(_) => 5,
            HarnessError::ExecutionError { exit_code, .. } => {
                if *exit_code > 0 {
                    *exit_code
                } else {
                    1
                }
            }
        };

        UserError {
            message: err.to_string(),
            exit_code,
        }
    }

    /// Print the error to stderr
    pub fn print(&self) {
        eprintln!("error: {}", self.message);
    }
}
