// src/core/state.rs

use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;

/// The state of a single qubit before measurement.
///
/// Holds the complex amplitudes `alpha` (basis |0>) and `beta` (basis |1>).
/// A physical state satisfies `|alpha|^2 + |beta|^2 = 1`; this type does not
/// enforce that on construction; the simulator checks it before sampling.
#[derive(Debug, Clone, Copy, PartialEq)] // No Eq for floating-point amplitudes
pub struct QubitState {
    alpha: Complex<f64>,
    beta: Complex<f64>,
}

impl QubitState {
    /// Creates a state from raw amplitudes. The pair is not validated here.
    pub fn new(alpha: Complex<f64>, beta: Complex<f64>) -> Self {
        Self { alpha, beta }
    }

    /// The basis state |0>.
    pub fn zero() -> Self {
        Self::new(Complex::one(), Complex::zero())
    }

    /// The basis state |1>.
    pub fn one() -> Self {
        Self::new(Complex::zero(), Complex::one())
    }

    /// The basis state matching a measurement outcome.
    pub fn basis(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Zero => Self::zero(),
            Outcome::One => Self::one(),
        }
    }

    /// Amplitude of |0>.
    pub fn alpha(&self) -> Complex<f64> {
        self.alpha
    }

    /// Amplitude of |1>.
    pub fn beta(&self) -> Complex<f64> {
        self.beta
    }

    /// `|alpha|^2`
    pub fn probability_of_zero(&self) -> f64 {
        self.alpha.norm_sqr()
    }

    /// `|beta|^2`
    pub fn probability_of_one(&self) -> f64 {
        self.beta.norm_sqr()
    }

    /// Sum of squared magnitudes; 1.0 for a normalized state.
    pub fn norm_sqr(&self) -> f64 {
        self.probability_of_zero() + self.probability_of_one()
    }

    /// Exchanges the two amplitudes (Pauli-X).
    pub(crate) fn swap_amplitudes(&mut self) {
        std::mem::swap(&mut self.alpha, &mut self.beta);
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|ψ> = ({:.4})|0> + ({:.4})|1>", self.alpha, self.beta)
    }
}

/// Classical result of measuring a qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    /// Observed |0>.
    Zero,
    /// Observed |1>.
    One,
}

impl Outcome {
    /// The outcome as a classical bit.
    pub fn bit(self) -> u8 {
        match self {
            Outcome::Zero => 0,
            Outcome::One => 1,
        }
    }
}

impl From<Outcome> for bool {
    fn from(outcome: Outcome) -> bool {
        outcome == Outcome::One
    }
}

impl From<bool> for Outcome {
    fn from(bit: bool) -> Outcome {
        if bit { Outcome::One } else { Outcome::Zero }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Zero => write!(f, "Zero"),
            Outcome::One => write!(f, "One"),
        }
    }
}
