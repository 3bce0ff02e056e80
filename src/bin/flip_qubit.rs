// src/bin/flip_qubit.rs
//! Resets, flips and measures a simulated qubit N times, printing each outcome.

use anyhow::Context;
use clap::Parser;
use qflip::cli::FlipQubitCli;
use qflip::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = FlipQubitCli::parse();
    init_tracing(&cli.logging_config()).context("setting up logging")?;

    let config = cli.driver_config();
    let results = config
        .run()
        .with_context(|| format!("running {} trials", config.trials))?;

    print!("{}", results);
    Ok(())
}
