use clap::Parser;

use crate::core::{DEFAULT_TRIALS, QubitError, Seed};
use crate::logging::LoggingConfig;
use crate::simulation::DriverConfig;

/// Flip a simulated qubit and measure it, repeatedly.
#[derive(Debug, Parser)]
#[command(name = "flip-qubit", version, about)]
pub struct FlipQubitCli {
    /// Number of reset → flip → measure trials
    #[arg(short = 'n', long = "trials", value_name = "N", default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Seed for reproducible sampling (non-negative integer)
    #[arg(
        short = 's',
        long = "seed",
        value_name = "SEED",
        value_parser = parse_seed,
        allow_hyphen_values = true
    )]
    pub seed: Option<Seed>,

    /// Log simulator events at debug level (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

fn parse_seed(raw: &str) -> Result<Seed, QubitError> {
    raw.parse()
}

impl FlipQubitCli {
    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig { trials: self.trials, seed: self.seed }
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::for_verbosity(self.verbose)
    }
}
