// Registry-guarded wrappers around external scaffolding CLIs

use std::process::Stdio;

use tokio::process::{Child, Command};
use tracing::debug;

use crate::models::registry::{RegistrySettings, LOCAL_VERSION};
use crate::utils::validation;

/// Schematics package installed by the framework `add` command, pinned to the
/// locally published version
pub const SCHEMATICS_PACKAGE: &str = "@angular-eslint/schematics";

// `ng new` runs the workspace-local binary from inside a fixture directory so
// the freshly installed CLI is exercised rather than a globally cached one.
const NG_LOCAL_BIN: &str = "../../../node_modules/.bin/ng";

/// Guarded-command errors
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// The active registry setting does not point at this machine
    #[error("active npm registry {0:?} does not look like a local registry; refusing to run")]
    RegistryNotLocal(Option<String>),

    /// A wrapper argument failed validation before spawning
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Could not spawn the external command
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// Reaping the child failed
    #[error("waiting on `{command}` failed: {source}")]
    Wait {
        command: String,
        source: std::io::Error,
    },

    /// The command ran and exited non-zero
    #[error("`{command}` exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// The command was killed by a signal
    #[error("`{command}` terminated by signal")]
    Terminated { command: String },
}

/// A spawned external command whose output is already flowing to the caller's
/// stdio. Await [`CommandHandle::join`] for completion; a non-zero exit comes
/// back as an error, uninterpreted.
#[derive(Debug)]
pub struct CommandHandle {
    child: Child,
    command: String,
}

impl CommandHandle {
    /// The command line this handle tracks, for diagnostics
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Wait for the child to exit, converting a non-zero status into an error
    pub async fn join(mut self) -> Result<(), DriverError> {
        let status = self.child.wait().await.map_err(|source| DriverError::Wait {
            command: self.command.clone(),
            source,
        })?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(DriverError::NonZeroExit {
                command: self.command,
                code,
            }),
            None => Err(DriverError::Terminated {
                command: self.command,
            }),
        }
    }
}

/// `npm install` against the local registry
pub fn run_npm_install(settings: &RegistrySettings) -> Result<CommandHandle, DriverError> {
    spawn_guarded(settings, "npm", &["install"])
}

/// `yarn install` against the local registry
pub fn run_yarn_install(settings: &RegistrySettings) -> Result<CommandHandle, DriverError> {
    spawn_guarded(settings, "yarn", &["install"])
}

/// `ng add` of the schematics package at the local integration version
pub fn run_ng_add(settings: &RegistrySettings) -> Result<CommandHandle, DriverError> {
    let package_spec = format!("{}@{}", SCHEMATICS_PACKAGE, LOCAL_VERSION);
    spawn_guarded(settings, "npx", &["ng", "add", &package_spec])
}

/// `ng new` with fixed strictness, package-manager and non-interactive flags
pub fn run_ng_new(
    settings: &RegistrySettings,
    workspace_name: &str,
    create_application: bool,
) -> Result<CommandHandle, DriverError> {
    validation::validate_workspace_name(workspace_name)
        .map_err(|e| DriverError::InvalidArgument(e.to_string()))?;

    let mut args = vec![
        "new",
        "--strict=true",
        "--package-manager=npm",
        "--interactive=false",
    ];
    if !create_application {
        args.push("--create-application=false");
    }
    args.push(workspace_name);

    spawn_guarded(settings, NG_LOCAL_BIN, &args)
}

/// `ng generate` with pass-through generator arguments
pub fn run_ng_generate(
    settings: &RegistrySettings,
    args: &[String],
) -> Result<CommandHandle, DriverError> {
    let mut full_args = vec!["ng", "generate"];
    full_args.extend(args.iter().map(String::as_str));
    spawn_guarded(settings, "npx", &full_args)
}

/// Check the local-registry precondition, then spawn with inherited stdio.
///
/// The guard runs before any process is created: a test pointed at a real
/// registry must fail without side effects.
fn spawn_guarded(
    settings: &RegistrySettings,
    program: &str,
    args: &[&str],
) -> Result<CommandHandle, DriverError> {
    if !settings.is_local() {
        return Err(DriverError::RegistryNotLocal(
            settings.npm_config_registry.clone(),
        ));
    }

    let command = format!("{} {}", program, args.join(" "));
    debug!(%command, "spawning guarded command");

    let child = Command::new(program)
        .args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| DriverError::Spawn {
            command: command.clone(),
            source,
        })?;

    Ok(CommandHandle { child, command })
}
