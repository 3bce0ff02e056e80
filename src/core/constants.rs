//! Numeric constants shared by the state, validation and simulation modules.

/// Tolerances used when checking amplitudes.
pub mod qubit_constants {
    /// Allowed deviation of `|alpha|^2 + |beta|^2` from 1.0.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Loosest tolerance a caller may configure.
    pub const MAX_NORM_TOLERANCE: f64 = 1e-3;
    /// Trial count used by the driver when none is given.
    pub const DEFAULT_TRIALS: usize = 10;
}
