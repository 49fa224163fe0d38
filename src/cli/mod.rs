// CLI module for command-line interface

pub mod bootstrap;
pub mod publish;
pub mod run;
pub mod scaffold;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::utils::error::Result;

use self::bootstrap::BootstrapCommand;
use self::publish::PublishCommand;
use self::run::RunCommand;
use self::scaffold::{ScaffoldCommands, ScaffoldHandler};

/// Main CLI structure
#[derive(Parser)]
#[command(name = "regfix")]
#[command(about = "Local-registry harness for lint plugin integration suites")]
#[command(long_about = r#"regfix bootstraps an ephemeral local package registry, publishes the
workspace's locally-built packages into it, and drives external scaffolding
CLIs against disposable fixture workspaces.

Features:
  • Fixtures directory reset on every bootstrap
  • Local registry lifecycle with guaranteed teardown
  • Idempotent publish (a benign republish is a no-op success)
  • Registry-guarded npm/yarn/ng wrappers that refuse to touch a real registry
  • One-shot suite execution via the test runner

Examples:
  regfix run suites/installs.spec.ts       Bootstrap, run one suite, tear down
  regfix bootstrap --hold                  Keep the registry up for manual use
  regfix publish --verbose                 Publish packages, streaming output
  regfix scaffold new fixture-workspace    Scaffold a workspace fixture"#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Reset fixtures, start the local registry and publish packages
    #[command(long_about = r#"Reset the fixtures directory, start the ephemeral local registry and
publish the workspace packages into it, strictly in that order.

Without --hold the registry is torn down again immediately, which makes this
a smoke test of the whole pipeline. With --hold the registry stays up until
Ctrl-C, for running suites or scaffolding fixtures by hand.

Examples:
  regfix bootstrap                      Exercise the pipeline once
  regfix bootstrap --hold               Keep the registry up until Ctrl-C
  regfix bootstrap --verbose            Stream publish output live"#)]
    Bootstrap {
        /// Version to publish (default: the local integration-test version)
        #[arg(long)]
        version: Option<String>,

        /// Keep the registry running until Ctrl-C
        #[arg(long)]
        hold: bool,

        /// Stream child-process output instead of buffering it
        #[arg(long)]
        verbose: bool,

        /// Path to the harness configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Bootstrap, execute one test suite, then tear everything down
    #[command(long_about = r#"Run one integration-test suite against a freshly bootstrapped local
registry. The suite runs serially through the test runner; the registry is
torn down on every exit path, pass or fail.

Examples:
  regfix run suites/installs.spec.ts              Run one suite
  regfix run suites/rules.spec.ts -u              Update snapshots
  regfix run suites/rules.spec.ts --cwd e2e       Run from a subdirectory
  regfix run suites/rules.spec.ts --json          Machine-readable summary"#)]
    Run {
        /// Path of the suite file, relative to the working directory
        test_file_path: PathBuf,

        /// Working directory for the test runner
        #[arg(long, default_value = ".")]
        cwd: PathBuf,

        /// Tell the test runner to update snapshots
        #[arg(short = 'u', long)]
        update_snapshots: bool,

        /// Output a JSON result summary
        #[arg(long)]
        json: bool,

        /// Stream child-process output instead of buffering it
        #[arg(long)]
        verbose: bool,

        /// Path to the harness configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Publish workspace packages to an already-running local registry
    #[command(long_about = r#"Run the publish script against an already-running local registry.

A republish of an existing version is treated as a no-op success, so repeated
invocations are safe.

Examples:
  regfix publish                        Publish at the integration-test version
  regfix publish --version 9999.0.2-x   Publish at an explicit version
  regfix publish --verbose              Stream the script's output live"#)]
    Publish {
        /// Version to publish (default: the local integration-test version)
        #[arg(long)]
        version: Option<String>,

        /// Stream the publish script's output instead of buffering it
        #[arg(long)]
        verbose: bool,

        /// Path to the harness configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Drive external scaffolding CLIs against the local registry
    #[command(long_about = r#"Run one of the registry-guarded scaffolding commands. Every variant first
checks that NPM_CONFIG_REGISTRY points at localhost and refuses to spawn
anything otherwise, so a misconfigured shell cannot touch a real registry.

Examples:
  regfix scaffold install               npm install in the current fixture
  regfix scaffold install --yarn        yarn install instead
  regfix scaffold add                   ng add the local schematics package
  regfix scaffold new my-workspace      ng new with the fixed harness flags
  regfix scaffold generate app my-app   Pass-through ng generate"#)]
    Scaffold {
        /// Scaffold subcommand
        #[command(subcommand)]
        command: ScaffoldCommands,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub async fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::Bootstrap {
                version,
                hold,
                verbose,
                config,
            } => {
                let cmd = BootstrapCommand {
                    version,
                    hold,
                    verbose,
                    config,
                };
                cmd.execute().await
            }

            Commands::Run {
                test_file_path,
                cwd,
                update_snapshots,
                json,
                verbose,
                config,
            } => {
                let cmd = RunCommand {
                    cwd,
                    test_file_path,
                    update_snapshots,
                    json,
                    verbose,
                    config,
                };
                cmd.execute().await
            }

            Commands::Publish {
                version,
                verbose,
                config,
            } => {
                let cmd = PublishCommand {
                    version,
                    verbose,
                    config,
                };
                cmd.execute().await
            }

            Commands::Scaffold { command } => {
                let handler = ScaffoldHandler { command };
                handler.execute().await
            }
        }
    }
}
