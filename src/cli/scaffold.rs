// Scaffold commands: registry-guarded drivers for fixture authoring

use clap::Subcommand;

use crate::models::registry::RegistrySettings;
use crate::services::driver;
use crate::utils::error::Result;

/// Scaffolding subcommands, each one a guarded external CLI invocation
#[derive(Debug, Subcommand)]
pub enum ScaffoldCommands {
    /// Install dependencies in the current fixture workspace
    Install {
        /// Use yarn instead of npm
        #[arg(long)]
        yarn: bool,
    },

    /// Add the locally published schematics package to the workspace
    Add,

    /// Scaffold a new framework workspace
    New {
        /// Name of the workspace to create
        workspace_name: String,

        /// Create the workspace shell only, without an initial application
        #[arg(long)]
        skip_application: bool,
    },

    /// Run a framework generator with pass-through arguments
    Generate {
        /// Arguments forwarded verbatim to the generator
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

/// Dispatches scaffold subcommands to the guarded drivers
pub struct ScaffoldHandler {
    pub command: ScaffoldCommands,
}

impl ScaffoldHandler {
    /// Execute the selected scaffold command and wait for it to finish
    pub async fn execute(&self) -> Result<()> {
        let settings = RegistrySettings::from_env();

        let handle = match &self.command {
            ScaffoldCommands::Install { yarn } => {
                if *yarn {
                    driver::run_yarn_install(&settings)?
                } else {
                    driver::run_npm_install(&settings)?
                }
            }
            ScaffoldCommands::Add => driver::run_ng_add(&settings)?,
            ScaffoldCommands::New {
                workspace_name,
                skip_application,
            } => driver::run_ng_new(&settings, workspace_name, !skip_application)?,
            ScaffoldCommands::Generate { args } => driver::run_ng_generate(&settings, args)?,
        };

        handle.join().await?;
        Ok(())
    }
}
