// src/validation/mod.rs

//! Provides functions to validate a `QubitState` before it is sampled.

use crate::core::{MAX_NORM_TOLERANCE, NORM_TOLERANCE, QubitError, QubitState};

/// Checks that a normalization tolerance is finite and within `[0, MAX_NORM_TOLERANCE]`.
///
/// # Returns
/// * `Ok(tolerance)` if usable.
/// * `Err(QubitError::InvalidTolerance)` otherwise.
pub fn check_tolerance(tolerance: f64) -> Result<f64, QubitError> {
    if !tolerance.is_finite() {
        return Err(QubitError::InvalidTolerance {
            tolerance,
            message: "tolerance must be finite".to_string(),
        });
    }
    if !(0.0..=MAX_NORM_TOLERANCE).contains(&tolerance) {
        return Err(QubitError::InvalidTolerance {
            tolerance,
            message: format!("tolerance must lie in [0, {}]", MAX_NORM_TOLERANCE),
        });
    }
    Ok(tolerance)
}

/// Checks if the state is normalized (`|alpha|^2 + |beta|^2 ≈ 1.0`).
///
/// # Arguments
/// * `state` - The `QubitState` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to `NORM_TOLERANCE` (1e-9).
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QubitError::InvalidState)` otherwise, including when an amplitude is NaN.
/// * `Err(QubitError::InvalidTolerance)` if `tolerance` fails `check_tolerance`.
pub fn check_normalization(
    state: &QubitState,
    tolerance: Option<f64>,
) -> Result<(), QubitError> {
    let effective_tolerance = check_tolerance(tolerance.unwrap_or(NORM_TOLERANCE))?;
    let norm_sqr = state.norm_sqr();
    // Written so that a NaN norm fails the check.
    if (norm_sqr - 1.0).abs() <= effective_tolerance {
        Ok(())
    } else {
        Err(QubitError::InvalidState {
            norm_sqr,
            message: format!("state normalization failed (deviation > {})", effective_tolerance),
        })
    }
}

/// Returns true when `state` passes `check_normalization` with the default tolerance.
pub fn is_normalized(state: &QubitState) -> bool {
    check_normalization(state, None).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_basis_and_superposition_pass() {
        assert!(is_normalized(&QubitState::zero()));
        assert!(is_normalized(&QubitState::one()));
        let plus =
            QubitState::new(Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(0.0, -FRAC_1_SQRT_2));
        assert!(is_normalized(&plus));
    }

    #[test]
    fn test_unnormalized_state_fails() {
        let state = QubitState::new(Complex::new(1.0, 0.0), Complex::new(1.0, 0.0));
        match check_normalization(&state, None) {
            Err(QubitError::InvalidState { norm_sqr, .. }) => {
                assert!((norm_sqr - 2.0).abs() < 1e-12)
            }
            other => panic!("expected InvalidState, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_amplitude_fails() {
        let state = QubitState::new(Complex::new(f64::NAN, 0.0), Complex::new(0.0, 0.0));
        assert!(!is_normalized(&state));
    }

    #[test]
    fn test_custom_tolerance() {
        let state = QubitState::new(Complex::new(0.9995, 0.0), Complex::new(0.0, 0.0));
        assert!(check_normalization(&state, None).is_err());
        assert!(check_normalization(&state, Some(1e-3)).is_ok());
    }

    #[test]
    fn test_loose_tolerance_is_rejected() {
        // A tolerance this wide would accept the all-zero and (2, 2) states.
        for state in [
            QubitState::new(Complex::new(0.0, 0.0), Complex::new(0.0, 0.0)),
            QubitState::new(Complex::new(2.0, 0.0), Complex::new(2.0, 0.0)),
        ] {
            assert!(matches!(
                check_normalization(&state, Some(10.0)),
                Err(QubitError::InvalidTolerance { .. })
            ));
        }
    }

    #[test]
    fn test_non_finite_and_negative_tolerances_are_rejected() {
        for tolerance in [f64::NAN, f64::INFINITY, -1e-9] {
            assert!(
                matches!(check_tolerance(tolerance), Err(QubitError::InvalidTolerance { .. })),
                "tolerance {} should be rejected",
                tolerance
            );
        }
        assert_eq!(check_tolerance(0.0), Ok(0.0));
        assert_eq!(check_tolerance(MAX_NORM_TOLERANCE), Ok(MAX_NORM_TOLERANCE));
    }
}
