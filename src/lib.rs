// src/lib.rs

//! `qflip` - A seeded single-qubit simulator
//!
//! Models one qubit as a normalized pair of complex amplitudes, applies the
//! bit-flip (NOT) gate, and samples measurements with an explicit random
//! source so runs can be made reproducible.

pub mod cli;
pub mod core;
pub mod logging;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{Outcome, QubitError, QubitState, Seed};
pub use crate::simulation::{
    DriverConfig, QubitSimulator, SimulatorConfig, TrialRecord, TrialResults, run_trials,
};
pub use crate::validation::{check_normalization, check_tolerance, is_normalized};

// Example 1: Flip and Measure
// Flipping |0> yields |1>, which measures as One no matter what the random draw is.
/// ```
/// use qflip::{Outcome, QubitError, QubitSimulator, QubitState, Seed};
///
/// let mut sim = QubitSimulator::with_seed(Seed::new(42));
/// sim.reset();
/// sim.flip();
/// assert_eq!(*sim.state(), QubitState::one());
///
/// let outcome = sim.measure()?;
/// assert_eq!(outcome, Outcome::One);
/// assert_eq!(outcome.bit(), 1);
/// # Ok::<(), QubitError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Driver Run
// Ten seeded trials of reset → flip → measure, printed the way the CLI prints them.
/// ```
/// use qflip::{DriverConfig, QubitError, Seed};
///
/// let results = DriverConfig { trials: 10, seed: Some(Seed::new(42)) }.run()?;
/// assert_eq!(results.bits(), vec![1; 10]);
/// println!("{}", results); // "Run 1: We got One" ...
/// # Ok::<(), QubitError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
