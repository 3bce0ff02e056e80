// src/simulation/mod.rs

//! Single-qubit simulation.
//! This module contains the `QubitSimulator`, which owns one qubit's state and
//! its random source, and the bounded trial driver built on top of it.

mod driver;
mod results;

pub use driver::{DriverConfig, run_trials};
pub use results::{TrialRecord, TrialResults};

use crate::core::{NORM_TOLERANCE, Outcome, QubitError, QubitState, Seed};
use crate::validation::{check_normalization, check_tolerance};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

/// Settings used to build a `QubitSimulator`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatorConfig {
    /// Seed for measurement sampling. `None` draws a seed from the OS.
    pub seed: Option<Seed>,
    /// Allowed deviation from 1.0 when checking normalization before a measurement.
    /// Must be finite and within `[0, MAX_NORM_TOLERANCE]`.
    pub norm_tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self { seed: None, norm_tolerance: NORM_TOLERANCE }
    }
}

impl SimulatorConfig {
    pub fn with_seed(seed: Seed) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }
}

/// Simulates a single qubit.
///
/// The qubit starts in |0>. `reset` and `flip` are pure state transitions;
/// `measure` samples an `Outcome` and collapses the state onto it.
///
/// A simulator is exclusively owned by its caller. Running trials in parallel
/// requires one simulator per trial, each with its own seed.
#[derive(Debug)]
pub struct QubitSimulator {
    state: QubitState,
    rng: StdRng,
    seed: Option<Seed>,
    norm_tolerance: f64,
}

impl Default for QubitSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl QubitSimulator {
    /// Creates an unseeded simulator. Outcomes of superposed states are not reproducible.
    pub fn new() -> Self {
        Self::build(None, NORM_TOLERANCE)
    }

    /// Creates a simulator whose measurement sampling is fully reproducible.
    pub fn with_seed(seed: Seed) -> Self {
        Self::build(Some(seed), NORM_TOLERANCE)
    }

    /// Creates a simulator from explicit settings.
    ///
    /// # Errors
    /// `QubitError::InvalidTolerance` if `config.norm_tolerance` is negative,
    /// non-finite or above `MAX_NORM_TOLERANCE`.
    pub fn from_config(config: &SimulatorConfig) -> Result<Self, QubitError> {
        let norm_tolerance = check_tolerance(config.norm_tolerance)?;
        Ok(Self::build(config.seed, norm_tolerance))
    }

    fn build(seed: Option<Seed>, norm_tolerance: f64) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.value()),
            None => StdRng::from_os_rng(),
        };
        debug!(?seed, norm_tolerance, "qubit simulator created");
        Self { state: QubitState::zero(), rng, seed, norm_tolerance }
    }

    /// The seed this simulator was built with, if any.
    pub fn seed(&self) -> Option<Seed> {
        self.seed
    }

    /// Read-only access to the current state.
    pub fn state(&self) -> &QubitState {
        &self.state
    }

    /// Replaces the current state with an externally prepared one.
    /// The state is not validated until the next measurement.
    pub fn set_state(&mut self, state: QubitState) {
        trace!(%state, "state loaded");
        self.state = state;
    }

    /// Sets the qubit to |0>.
    pub fn reset(&mut self) {
        self.state = QubitState::zero();
        trace!("reset to |0>");
    }

    /// Applies the bit-flip (NOT) gate by exchanging the two amplitudes.
    pub fn flip(&mut self) {
        self.state.swap_amplitudes();
        trace!(state = %self.state, "flip applied");
    }

    /// Measures the qubit using the simulator's own random source.
    pub fn measure(&mut self) -> Result<Outcome, QubitError> {
        collapse(&mut self.state, self.norm_tolerance, &mut self.rng)
    }

    /// Measures the qubit using an injected random source.
    ///
    /// Draws `u` uniformly from [0, 1) and returns `Outcome::One` when
    /// `u < |beta|^2`, else `Outcome::Zero`. The state then collapses to the
    /// observed basis state.
    ///
    /// # Errors
    /// `QubitError::InvalidState` if the state is not normalized. The state is
    /// left untouched and no random value is consumed.
    pub fn measure_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Outcome, QubitError> {
        collapse(&mut self.state, self.norm_tolerance, rng)
    }
}

fn collapse<R: Rng + ?Sized>(
    state: &mut QubitState,
    norm_tolerance: f64,
    rng: &mut R,
) -> Result<Outcome, QubitError> {
    if let Err(err) = check_normalization(state, Some(norm_tolerance)) {
        warn!(%state, "refusing to measure unnormalized state");
        return Err(err);
    }

    let sample: f64 = rng.random::<f64>();
    let outcome = Outcome::from(sample < state.probability_of_one());
    *state = QubitState::basis(outcome);
    debug!(sample, %outcome, "qubit measured");
    Ok(outcome)
}
