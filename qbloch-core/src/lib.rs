//! Statevector to Bloch-sphere coordinate transform
//!
//! This crate provides the data model behind qbloch's plots:
//! - [`Statevector`]: the two amplitudes of a single qubit
//! - [`DensityMatrix2`]: the 2x2 density matrix ρ = s·sᴴ, or a mixed state
//! - [`BlochVector`]: the (u, v, w) = (⟨X⟩, ⟨Y⟩, ⟨Z⟩) coordinate
//! - [`CoordinateSeries`]: N traces × T steps of coordinates for animation
//!
//! # Example
//! ```
//! use qbloch_core::{to_bloch_coords, Statevector};
//!
//! let bloch = to_bloch_coords(&Statevector::one());
//! assert!((bloch.z + 1.0).abs() < 1e-10);
//! ```

pub mod bloch_sphere;
pub mod density;
pub mod error;
pub mod series;
pub mod statevector;
pub mod transform;

// Re-exports for convenience
pub use bloch_sphere::{BlochAngles, BlochVector};
pub use density::DensityMatrix2;
pub use error::{BlochError, Result};
pub use num_complex::Complex64;
pub use series::{linspace, phase_rotation, CoordinateSeries};
pub use statevector::Statevector;
pub use transform::{bloch_from_density, to_bloch_coords, to_bloch_series};
