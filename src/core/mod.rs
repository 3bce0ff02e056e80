// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod seed;
pub mod state;

pub use error::QubitError;
pub use seed::Seed;
pub use state::{Outcome, QubitState};

pub mod constants;
pub use constants::qubit_constants::{DEFAULT_TRIALS, MAX_NORM_TOLERANCE, NORM_TOLERANCE};
