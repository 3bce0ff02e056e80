// src/simulation/driver.rs

use super::QubitSimulator;
use super::results::TrialResults;
use crate::core::{DEFAULT_TRIALS, QubitError, Seed};
use tracing::{debug, info_span};

/// Settings for a driver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Number of reset → flip → measure trials.
    pub trials: usize,
    /// Seed for the simulator. `None` draws one from the OS.
    pub seed: Option<Seed>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self { trials: DEFAULT_TRIALS, seed: None }
    }
}

impl DriverConfig {
    /// Builds a simulator for this configuration and runs all trials on it.
    pub fn run(&self) -> Result<TrialResults, QubitError> {
        let mut simulator = match self.seed {
            Some(seed) => QubitSimulator::with_seed(seed),
            None => QubitSimulator::new(),
        };
        run_trials(&mut simulator, self.trials)
    }
}

/// Runs `trials` rounds of reset → flip → measure on `simulator`.
///
/// # Returns
/// * `Ok(TrialResults)` with one record per trial, indexed from 1.
/// * `Err(QubitError)` from the first measurement that fails.
pub fn run_trials(
    simulator: &mut QubitSimulator,
    trials: usize,
) -> Result<TrialResults, QubitError> {
    let _span = info_span!("run_trials", trials, seed = ?simulator.seed()).entered();
    let mut results = TrialResults::with_capacity(trials);
    for _ in 0..trials {
        simulator.reset();
        simulator.flip();
        let outcome = simulator.measure()?;
        let record = results.record(outcome);
        debug!(index = record.index, %outcome, "trial complete");
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;

    #[test]
    fn test_default_config() {
        let config = DriverConfig::default();
        assert_eq!(config.trials, 10);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_seeded_run_yields_all_ones() -> Result<(), QubitError> {
        let config = DriverConfig { trials: 10, seed: Some(Seed::new(42)) };
        let results = config.run()?;
        assert_eq!(results.bits(), vec![1u8; 10]);
        assert_eq!(results.count(Outcome::One), 10);
        Ok(())
    }

    #[test]
    fn test_zero_trials() -> Result<(), QubitError> {
        let mut simulator = QubitSimulator::with_seed(Seed::new(1));
        let results = run_trials(&mut simulator, 0)?;
        assert!(results.is_empty());
        assert_eq!(results.to_string(), "");
        Ok(())
    }

    #[test]
    fn test_records_are_one_based_and_formatted() -> Result<(), QubitError> {
        let results = DriverConfig { trials: 3, seed: Some(Seed::new(9)) }.run()?;
        let indices: Vec<usize> = results.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(
            results.to_string(),
            "Run 1: We got One\nRun 2: We got One\nRun 3: We got One\n"
        );
        Ok(())
    }
}
