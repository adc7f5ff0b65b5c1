//! Points on the Bloch sphere
//!
//! Any pure single-qubit state can be written as
//!
//! |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩
//!
//! where θ ∈ [0, π] and φ ∈ [0, 2π) define a point on the unit sphere.
//! Mixed states map to points strictly inside the ball.
//!
//! # Example
//!
//! ```
//! use qbloch_core::{BlochVector, Statevector};
//!
//! // |0⟩ points to the north pole
//! let bloch = BlochVector::from(&Statevector::zero());
//! assert!((bloch.z - 1.0).abs() < 1e-10);
//!
//! // |+⟩ points along +x
//! let bloch = BlochVector::from(&Statevector::plus());
//! assert!((bloch.x - 1.0).abs() < 1e-10);
//! ```

use crate::statevector::Statevector;
use crate::transform::to_bloch_coords;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Tolerance used by [`BlochVector::describe`] to name cardinal states
const CARDINAL_TOLERANCE: f64 = 0.01;

/// A Bloch coordinate (u, v, w) = (⟨X⟩, ⟨Y⟩, ⟨Z⟩)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    /// X coordinate (-1 to 1)
    pub x: f64,
    /// Y coordinate (-1 to 1)
    pub y: f64,
    /// Z coordinate (-1 to 1), where +Z is |0⟩ and -Z is |1⟩
    pub z: f64,
}

/// Bloch sphere angles (spherical coordinates)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π]
    pub theta: f64,
    /// Azimuthal angle φ ∈ [0, 2π)
    pub phi: f64,
}

impl BlochVector {
    /// Create a Bloch vector from Cartesian coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The center of the ball
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Convert a single-qubit state `[α, β]` to a Bloch vector
    ///
    /// # Example
    /// ```
    /// use qbloch_core::BlochVector;
    /// use num_complex::Complex64;
    ///
    /// let state = [Complex64::new(0.0, 0.0), Complex64::new(0.0, 1.0)];
    /// let bloch = BlochVector::from_state(&state);
    /// assert!((bloch.z + 1.0).abs() < 1e-10);
    /// ```
    pub fn from_state(state: &[Complex64; 2]) -> Self {
        to_bloch_coords(&Statevector::from(state))
    }

    /// `[x, y, z]`
    pub fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Convert Bloch vector to spherical coordinates
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();

        if r < 1e-10 {
            return BlochAngles {
                theta: 0.0,
                phi: 0.0,
            };
        }

        let theta = (self.z / r).clamp(-1.0, 1.0).acos();

        let phi = self.y.atan2(self.x);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };

        BlochAngles { theta, phi }
    }

    /// Euclidean length: 1 for pure states, less than 1 for mixed states
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Check if this represents a pure state (magnitude ≈ 1.0)
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }

    /// Scale by `factor`
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Get a description of the state
    pub fn describe(&self) -> String {
        let mag = self.magnitude();
        let angles = self.to_angles();

        let mut desc = String::new();
        desc.push_str(&format!("Bloch Vector: ({:.4}, {:.4}, {:.4})\n", self.x, self.y, self.z));
        desc.push_str(&format!("Magnitude: {:.4}\n", mag));
        desc.push_str(&format!("Angles: θ={:.4}, φ={:.4}\n", angles.theta, angles.phi));

        if let Some(name) = self.cardinal_name() {
            desc.push_str(&format!("State: {}\n", name));
        } else if mag < 0.9 {
            desc.push_str("Mixed state (inside sphere)\n");
        }

        desc
    }

    fn cardinal_name(&self) -> Option<&'static str> {
        let near = |a: f64, b: f64| (a - b).abs() < CARDINAL_TOLERANCE;
        let on_equator = near(self.z, 0.0);

        if near(self.z, 1.0) {
            Some("|0⟩ (north pole)")
        } else if near(self.z, -1.0) {
            Some("|1⟩ (south pole)")
        } else if on_equator && near(self.x, 1.0) {
            Some("|+⟩ (+x axis)")
        } else if on_equator && near(self.x, -1.0) {
            Some("|−⟩ (-x axis)")
        } else if on_equator && near(self.y, 1.0) {
            Some("|+i⟩ (+y axis)")
        } else if on_equator && near(self.y, -1.0) {
            Some("|−i⟩ (-y axis)")
        } else {
            None
        }
    }
}

impl From<&Statevector> for BlochVector {
    fn from(state: &Statevector) -> Self {
        to_bloch_coords(state)
    }
}

impl From<[f64; 3]> for BlochVector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlochVector({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

impl BlochAngles {
    /// Convert spherical coordinates to a unit Bloch vector
    pub fn to_vector(&self) -> BlochVector {
        let x = self.theta.sin() * self.phi.cos();
        let y = self.theta.sin() * self.phi.sin();
        let z = self.theta.cos();
        BlochVector { x, y, z }
    }

    /// Canonical statevector with a real, non-negative |0⟩ amplitude
    pub fn to_state(&self) -> Statevector {
        Statevector::from_angles(self.theta, self.phi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angles_conversion() {
        let angles = BlochAngles {
            theta: PI / 2.0,
            phi: 0.0,
        };
        let vector = angles.to_vector();

        assert_relative_eq!(vector.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(vector.y, 0.0, epsilon = 1e-10);
        assert_relative_eq!(vector.z, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_roundtrip_through_state() {
        let angles = BlochAngles {
            theta: 1.1,
            phi: 4.0,
        };
        let bloch = BlochVector::from(&angles.to_state());
        let back = bloch.to_angles();

        assert_relative_eq!(back.theta, angles.theta, epsilon = 1e-10);
        assert_relative_eq!(back.phi, angles.phi, epsilon = 1e-10);
    }

    #[test]
    fn test_origin_angles() {
        let angles = BlochVector::origin().to_angles();
        assert_eq!(angles.theta, 0.0);
        assert_eq!(angles.phi, 0.0);
    }

    #[test]
    fn test_describe_names_poles() {
        assert!(BlochVector::new(0.0, 0.0, 1.0).describe().contains("|0⟩"));
        assert!(BlochVector::new(0.0, 0.0, -1.0).describe().contains("|1⟩"));
        assert!(BlochVector::new(0.0, -1.0, 0.0).describe().contains("|−i⟩"));
        assert!(BlochVector::new(0.1, 0.2, 0.1).describe().contains("Mixed"));
    }

    #[test]
    fn test_is_pure() {
        assert!(BlochVector::new(0.0, 0.6, 0.8).is_pure(1e-10));
        assert!(!BlochVector::new(0.0, 0.3, 0.4).is_pure(1e-3));
    }

    #[test]
    fn test_display() {
        let text = format!("{}", BlochVector::new(1.0, 0.0, -0.5));
        assert_eq!(text, "BlochVector(1.0000, 0.0000, -0.5000)");
    }
}
