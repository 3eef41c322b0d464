#![warn(missing_docs)]

//! Entry point for the `gridctl` binary.

mod cli;
mod error;
mod render;
mod replay;

use std::{
    io::{self, Write},
    process,
};

use clap::Parser;
use config::Scenario;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, registry};

use crate::{
    cli::{Cli, Commands, ScenarioArgs},
    error::Result,
};

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli { log, command } = Cli::parse();
    let log_spec = log.spec();
    let env_filter = logging::env_filter_from_spec(&log_spec);
    registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr).without_time())
        .try_init()
        .ok();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Commands::Show(args) => {
            let scenario = load(&args)?;
            replay::show(&mut out, &scenario)?;
        }
        Commands::Replay(args) => {
            let scenario = load(&args.scenario)?;
            replay::replay(&mut out, &scenario, args.frames)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Load the scenario named on the command line, or the built-in demo.
fn load(args: &ScenarioArgs) -> Result<Scenario> {
    let scenario = match &args.scenario {
        Some(path) => config::load_from_path(path)?,
        None => config::demo()?,
    };
    info!(
        source = %args
            .scenario
            .as_ref()
            .map_or_else(|| "demo".to_string(), |p| p.display().to_string()),
        items = scenario.items.len(),
        events = scenario.events.len(),
        "Scenario loaded"
    );
    Ok(scenario)
}
