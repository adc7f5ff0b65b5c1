//! Single-qubit statevectors
//!
//! A statevector holds the two amplitudes of |ψ⟩ = a0|0⟩ + a1|1⟩.
//! Normalization (|a0|² + |a1|² = 1) is assumed and never checked:
//! an unnormalized vector still maps to a well-defined Bloch point.

use crate::density::DensityMatrix2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// Amplitudes of a single qubit in the computational basis
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Statevector {
    amplitudes: [Complex64; 2],
}

impl Statevector {
    /// Create a statevector from its two amplitudes
    pub fn new(a0: Complex64, a1: Complex64) -> Self {
        Self {
            amplitudes: [a0, a1],
        }
    }

    /// Create a statevector from real amplitudes
    pub fn from_real(a0: f64, a1: f64) -> Self {
        Self::new(Complex64::new(a0, 0.0), Complex64::new(a1, 0.0))
    }

    /// |0⟩
    pub fn zero() -> Self {
        Self::from_real(1.0, 0.0)
    }

    /// |1⟩
    pub fn one() -> Self {
        Self::from_real(0.0, 1.0)
    }

    /// |+⟩ = (|0⟩ + |1⟩)/√2
    pub fn plus() -> Self {
        Self::from_real(FRAC_1_SQRT_2, FRAC_1_SQRT_2)
    }

    /// |−⟩ = (|0⟩ − |1⟩)/√2
    pub fn minus() -> Self {
        Self::from_real(FRAC_1_SQRT_2, -FRAC_1_SQRT_2)
    }

    /// |+i⟩ = (|0⟩ + i|1⟩)/√2
    pub fn plus_i() -> Self {
        Self::new(Complex64::new(FRAC_1_SQRT_2, 0.0), Complex64::new(0.0, FRAC_1_SQRT_2))
    }

    /// |−i⟩ = (|0⟩ − i|1⟩)/√2
    pub fn minus_i() -> Self {
        Self::new(Complex64::new(FRAC_1_SQRT_2, 0.0), Complex64::new(0.0, -FRAC_1_SQRT_2))
    }

    /// Canonical state cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩
    pub fn from_angles(theta: f64, phi: f64) -> Self {
        let half = theta / 2.0;
        Self::new(
            Complex64::new(half.cos(), 0.0),
            Complex64::from_polar(half.sin(), phi),
        )
    }

    /// Amplitude of |0⟩
    pub fn a0(&self) -> Complex64 {
        self.amplitudes[0]
    }

    /// Amplitude of |1⟩
    pub fn a1(&self) -> Complex64 {
        self.amplitudes[1]
    }

    /// Borrow both amplitudes
    pub fn amplitudes(&self) -> &[Complex64; 2] {
        &self.amplitudes
    }

    /// |a0|² + |a1|²
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes[0].norm_sqr() + self.amplitudes[1].norm_sqr()
    }

    /// Multiply both amplitudes by `factor`
    ///
    /// A unit-modulus factor is a global phase and leaves the Bloch point unchanged.
    pub fn scale(&self, factor: Complex64) -> Self {
        Self::new(self.amplitudes[0] * factor, self.amplitudes[1] * factor)
    }

    /// Multiply the |1⟩ amplitude by e^(iφ), a rotation about Z by φ
    pub fn with_relative_phase(&self, phi: f64) -> Self {
        Self::new(
            self.amplitudes[0],
            self.amplitudes[1] * Complex64::from_polar(1.0, phi),
        )
    }

    /// Outer product ρ = s·sᴴ
    pub fn density_matrix(&self) -> DensityMatrix2 {
        DensityMatrix2::from_statevector(self)
    }
}

impl From<[Complex64; 2]> for Statevector {
    fn from(amplitudes: [Complex64; 2]) -> Self {
        Self { amplitudes }
    }
}

impl From<&[Complex64; 2]> for Statevector {
    fn from(amplitudes: &[Complex64; 2]) -> Self {
        Self {
            amplitudes: *amplitudes,
        }
    }
}

impl fmt::Display for Statevector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a0, a1] = self.amplitudes;
        write!(
            f,
            "({:.4}{:+.4}i)|0⟩ + ({:.4}{:+.4}i)|1⟩",
            a0.re, a0.im, a1.re, a1.im
        )
    }
}
