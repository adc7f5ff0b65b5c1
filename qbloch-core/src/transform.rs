//! Statevector → Bloch coordinate transform
//!
//! The transform goes through the density matrix ρ = s·sᴴ and reads the
//! Pauli expectation values off its elements:
//!
//! - u = ρ[1,0] + ρ[0,1] = ⟨X⟩
//! - v = i·(ρ[0,1] − ρ[1,0]) = ⟨Y⟩
//! - w = ρ[0,0] − ρ[1,1] = ⟨Z⟩
//!
//! Only the real parts are kept. Input is not validated: the zero vector
//! maps to the origin and unnormalized vectors map off the unit sphere.

use crate::bloch_sphere::BlochVector;
use crate::density::DensityMatrix2;
use crate::statevector::Statevector;
use num_complex::Complex64;

const I: Complex64 = Complex64::new(0.0, 1.0);

/// Convert a statevector to its (u, v, w) Bloch coordinate
pub fn to_bloch_coords(state: &Statevector) -> BlochVector {
    bloch_from_density(&state.density_matrix())
}

/// Convert an arbitrary 2x2 density matrix to a Bloch coordinate
///
/// Mixed states land strictly inside the unit ball.
pub fn bloch_from_density(rho: &DensityMatrix2) -> BlochVector {
    let u = rho.get(1, 0) + rho.get(0, 1);
    let v = I * (rho.get(0, 1) - rho.get(1, 0));
    let w = rho.get(0, 0) - rho.get(1, 1);

    BlochVector::new(u.re, v.re, w.re)
}

/// Convert a sequence of statevectors, preserving order
pub fn to_bloch_series(states: &[Statevector]) -> Vec<BlochVector> {
    states.iter().map(to_bloch_coords).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn assert_coords(bloch: BlochVector, expected: [f64; 3]) {
        assert_relative_eq!(bloch.x, expected[0], epsilon = 1e-10);
        assert_relative_eq!(bloch.y, expected[1], epsilon = 1e-10);
        assert_relative_eq!(bloch.z, expected[2], epsilon = 1e-10);
    }

    #[test]
    fn test_zero_state() {
        let bloch = to_bloch_coords(&Statevector::from_real(1.0, 0.0));
        assert_coords(bloch, [0.0, 0.0, 1.0]);
        assert!(bloch.is_pure(1e-10));
    }

    #[test]
    fn test_one_state() {
        let bloch = to_bloch_coords(&Statevector::from_real(0.0, 1.0));
        assert_coords(bloch, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_global_phase_invariance() {
        let state = Statevector::new(Complex64::new(0.0, 0.0), Complex64::new(0.0, 1.0));
        assert_coords(to_bloch_coords(&state), [0.0, 0.0, -1.0]);

        let plus = Statevector::plus();
        let phased = plus.scale(Complex64::from_polar(1.0, 0.77));
        assert_coords(to_bloch_coords(&phased), to_bloch_coords(&plus).as_array());
    }

    #[test]
    fn test_plus_state() {
        let bloch = to_bloch_coords(&Statevector::from_real(FRAC_1_SQRT_2, FRAC_1_SQRT_2));
        assert_coords(bloch, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_minus_state() {
        assert_coords(to_bloch_coords(&Statevector::minus()), [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_plus_i_state() {
        assert_coords(to_bloch_coords(&Statevector::plus_i()), [0.0, 1.0, 0.0]);
        assert_coords(to_bloch_coords(&Statevector::minus_i()), [0.0, -1.0, 0.0]);
    }

    #[test]
    fn test_zero_vector_maps_to_origin() {
        let bloch = to_bloch_coords(&Statevector::from_real(0.0, 0.0));
        assert_eq!(bloch.magnitude(), 0.0);
    }

    #[test]
    fn test_unnormalized_input_is_not_rejected() {
        // |ψ|² = 4, so the point sits at radius 4
        let bloch = to_bloch_coords(&Statevector::from_real(2.0, 0.0));
        assert_coords(bloch, [0.0, 0.0, 4.0]);
    }

    #[test]
    fn test_maximally_mixed_maps_to_origin() {
        let bloch = bloch_from_density(&DensityMatrix2::maximally_mixed());
        assert_coords(bloch, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_partially_mixed_shrinks_vector() {
        let rho = Statevector::plus()
            .density_matrix()
            .mix(0.6, &DensityMatrix2::maximally_mixed());
        let bloch = bloch_from_density(&rho);
        assert_coords(bloch, [0.6, 0.0, 0.0]);
        assert!(!bloch.is_pure(1e-3));
    }

    #[test]
    fn test_pure_states_land_on_sphere() {
        for step in 0..50 {
            let theta = step as f64 * 0.0641;
            let phi = step as f64 * 0.377;
            let bloch = to_bloch_coords(&Statevector::from_angles(theta, phi));
            assert_relative_eq!(bloch.magnitude(), 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_series_preserves_order() {
        let coords = to_bloch_series(&[Statevector::zero(), Statevector::one()]);
        assert_eq!(coords.len(), 2);
        assert_coords(coords[0], [0.0, 0.0, 1.0]);
        assert_coords(coords[1], [0.0, 0.0, -1.0]);
    }
}
