//! Command-line interface definitions for gridctl.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;

/// Command-line interface for the `gridctl` binary.
#[derive(Parser, Debug)]
#[command(
    name = "gridctl",
    about = "Seed a cell grid from a scenario and replay drag gestures against it",
    version
)]
pub struct Cli {
    /// Logging controls shared across cellgrid binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// What to do with the scenario.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed the grid and print its layout.
    Show(ScenarioArgs),
    /// Seed the grid, replay the scripted gestures, and print each outcome.
    Replay(ReplayArgs),
}

/// Scenario selection shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ScenarioArgs {
    /// Path to a `.ron` scenario file. The built-in demo is used when omitted.
    #[arg(value_name = "PATH")]
    pub scenario: Option<PathBuf>,
}

/// Arguments for the `replay` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Scenario to replay.
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Print the full layout after every drop or cancel.
    #[arg(long)]
    pub frames: bool,
}
