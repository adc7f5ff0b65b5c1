//! Describe cardinal and arbitrary single-qubit states
//!
//! Run with: cargo run --example describe_states -p qbloch-core

use qbloch_core::{bloch_from_density, phase_rotation, to_bloch_coords, DensityMatrix2, Statevector};

fn main() {
    println!("=== Bloch Coordinates ===\n");

    let named = [
        ("|0⟩", Statevector::zero()),
        ("|1⟩", Statevector::one()),
        ("|+⟩", Statevector::plus()),
        ("|−⟩", Statevector::minus()),
        ("|+i⟩", Statevector::plus_i()),
        ("|−i⟩", Statevector::minus_i()),
    ];
    for (name, state) in named {
        println!("{} = {}", name, state);
        println!("{}", to_bloch_coords(&state).describe());
    }

    println!("Arbitrary pure state (θ = π/3, φ = π/4):");
    let state = Statevector::from_angles(std::f64::consts::PI / 3.0, std::f64::consts::PI / 4.0);
    println!("{}", to_bloch_coords(&state).describe());

    println!("Mixed state 0.5·|+⟩⟨+| + 0.5·I/2:");
    let rho = Statevector::plus()
        .density_matrix()
        .mix(0.5, &DensityMatrix2::maximally_mixed());
    print!("{}", rho);
    println!("{}", bloch_from_density(&rho).describe());

    println!("Phase rotation of |+⟩ (5 samples):");
    for (step, point) in phase_rotation(&Statevector::plus(), 5).iter().enumerate() {
        println!("  Step {}: {}", step, point);
    }
}
