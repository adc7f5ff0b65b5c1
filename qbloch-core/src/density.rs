//! 2x2 density matrices
//!
//! For a pure state ρ = |ψ⟩⟨ψ|. Convex combinations of pure-state density
//! matrices describe mixed states, whose Bloch points lie strictly inside
//! the unit ball.

use crate::statevector::Statevector;
use num_complex::Complex64;
use std::fmt;

/// Single-qubit density matrix, row-major
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityMatrix2 {
    elements: [[Complex64; 2]; 2],
}

impl DensityMatrix2 {
    /// Build from raw elements `[[ρ00, ρ01], [ρ10, ρ11]]`
    ///
    /// No check is made that the matrix is Hermitian, positive or unit-trace.
    pub fn from_elements(elements: [[Complex64; 2]; 2]) -> Self {
        Self { elements }
    }

    /// Outer product s·sᴴ, i.e. ρ[r][c] = s[r]·conj(s[c])
    pub fn from_statevector(state: &Statevector) -> Self {
        let s = state.amplitudes();
        let mut elements = [[Complex64::new(0.0, 0.0); 2]; 2];
        for (r, row) in elements.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = s[r] * s[c].conj();
            }
        }
        Self { elements }
    }

    /// I/2, the state at the center of the Bloch ball
    pub fn maximally_mixed() -> Self {
        let half = Complex64::new(0.5, 0.0);
        let zero = Complex64::new(0.0, 0.0);
        Self {
            elements: [[half, zero], [zero, half]],
        }
    }

    /// Element at row `r`, column `c`
    ///
    /// # Panics
    /// Panics if `r` or `c` is not 0 or 1.
    pub fn get(&self, r: usize, c: usize) -> Complex64 {
        self.elements[r][c]
    }

    /// Borrow the raw elements
    pub fn elements(&self) -> &[[Complex64; 2]; 2] {
        &self.elements
    }

    /// Tr(ρ)
    pub fn trace(&self) -> Complex64 {
        self.elements[0][0] + self.elements[1][1]
    }

    /// Tr(ρ²): 1 for pure states, 1/2 for the maximally mixed state
    pub fn purity(&self) -> f64 {
        let mut sum = Complex64::new(0.0, 0.0);
        for i in 0..2 {
            for k in 0..2 {
                sum += self.elements[i][k] * self.elements[k][i];
            }
        }
        sum.re
    }

    /// Convex combination `p·self + (1 − p)·other`
    pub fn mix(&self, p: f64, other: &DensityMatrix2) -> Self {
        let mut elements = self.elements;
        for (r, row) in elements.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = *value * p + other.elements[r][c] * (1.0 - p);
            }
        }
        Self { elements }
    }
}

impl fmt::Display for DensityMatrix2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.elements {
            writeln!(
                f,
                "[{:8.4}{:+.4}i  {:8.4}{:+.4}i]",
                row[0].re, row[0].im, row[1].re, row[1].im
            )?;
        }
        Ok(())
    }
}
