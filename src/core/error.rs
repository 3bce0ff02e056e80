//! Error handling logic

use thiserror::Error;

/// Failures surfaced by the simulator and its driver.
///
/// Gate application (`reset`, `flip`) is total and never produces one of
/// these; only measurement, seed validation and logging setup can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QubitError {
    /// The stored amplitudes do not satisfy `|alpha|^2 + |beta|^2 = 1`.
    /// Raised before a measurement samples from the state.
    #[error("Invalid State: {message} (|alpha|^2 + |beta|^2 = {norm_sqr})")]
    InvalidState {
        /// Observed sum of squared magnitudes
        norm_sqr: f64,
        /// InvalidState failure message
        message: String,
    },

    /// A normalization tolerance was negative, non-finite or too loose to
    /// tell a normalized state from an unnormalized one.
    #[error("Invalid Tolerance: {message} (got {tolerance})")]
    InvalidTolerance {
        /// Rejected tolerance
        tolerance: f64,
        /// InvalidTolerance failure message
        message: String,
    },

    /// A seed was negative, fractional, non-finite or could not be parsed.
    #[error("Invalid Seed: {message}")]
    InvalidSeed {
        /// InvalidSeed failure message
        message: String,
    },

    /// Installing the tracing subscriber failed.
    #[error("Logging Setup Error: {message}")]
    Logging {
        /// Logging failure message
        message: String,
    },
}

impl QubitError {
    pub(crate) fn invalid_seed(message: impl Into<String>) -> Self {
        QubitError::InvalidSeed { message: message.into() }
    }
}
