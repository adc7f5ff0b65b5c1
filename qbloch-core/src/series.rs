//! Coordinate series: N traces × T time steps of Bloch vectors
//!
//! A series is the input of an animation. Frame `t` of the animation shows
//! the coordinate at step `t` of every trace.
//!
//! # Example
//!
//! ```
//! use qbloch_core::{phase_rotation, CoordinateSeries, Statevector};
//!
//! let trace = phase_rotation(&Statevector::plus(), 100);
//! let series = CoordinateSeries::new(vec![trace]).unwrap();
//! assert_eq!(series.num_traces(), 1);
//! assert_eq!(series.num_steps(), 100);
//! ```

use crate::bloch_sphere::BlochVector;
use crate::error::{BlochError, Result};
use crate::statevector::Statevector;
use crate::transform::to_bloch_coords;
use std::f64::consts::PI;

/// Rectangular collection of Bloch trajectories
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateSeries {
    traces: Vec<Vec<BlochVector>>,
    steps: usize,
}

impl CoordinateSeries {
    /// Build a series, checking that every trace has the same non-zero length
    pub fn new(traces: Vec<Vec<BlochVector>>) -> Result<Self> {
        let steps = traces.first().map(Vec::len).ok_or(BlochError::EmptySeries)?;
        if steps == 0 {
            return Err(BlochError::EmptySeries);
        }

        for (index, trace) in traces.iter().enumerate() {
            if trace.len() != steps {
                return Err(BlochError::ragged(index, steps, trace.len()));
            }
        }

        Ok(Self { traces, steps })
    }

    /// Build a series from statevector trajectories
    pub fn from_statevectors(traces: &[Vec<Statevector>]) -> Result<Self> {
        Self::new(
            traces
                .iter()
                .map(|trace| trace.iter().map(to_bloch_coords).collect())
                .collect(),
        )
    }

    /// Build a series from raw `[x, y, z]` triples shaped (N, T, 3)
    pub fn from_arrays(traces: Vec<Vec<[f64; 3]>>) -> Result<Self> {
        Self::new(
            traces
                .into_iter()
                .map(|trace| trace.into_iter().map(BlochVector::from).collect())
                .collect(),
        )
    }

    /// Parse a JSON array shaped (N, T, 3)
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<Vec<[f64; 3]>> = serde_json::from_str(json)?;
        Self::from_arrays(raw)
    }

    /// Serialize as a JSON array shaped (N, T, 3)
    pub fn to_json(&self) -> Result<String> {
        let raw: Vec<Vec<[f64; 3]>> = self
            .traces
            .iter()
            .map(|trace| trace.iter().map(BlochVector::as_array).collect())
            .collect();
        Ok(serde_json::to_string(&raw)?)
    }

    /// Number of traces (N)
    pub fn num_traces(&self) -> usize {
        self.traces.len()
    }

    /// Number of time steps (T)
    pub fn num_steps(&self) -> usize {
        self.steps
    }

    /// Coordinates of every trace at step `step`
    pub fn frame(&self, step: usize) -> Result<Vec<BlochVector>> {
        if step >= self.steps {
            return Err(BlochError::StepOutOfRange {
                step,
                steps: self.steps,
            });
        }
        Ok(self.traces.iter().map(|trace| trace[step]).collect())
    }

    /// Coordinates at step 0
    pub fn initial(&self) -> Vec<BlochVector> {
        self.traces.iter().map(|trace| trace[0]).collect()
    }

    /// All steps of trace `index`
    pub fn trace(&self, index: usize) -> Result<&[BlochVector]> {
        self.traces
            .get(index)
            .map(Vec::as_slice)
            .ok_or(BlochError::TraceOutOfRange {
                trace: index,
                traces: self.traces.len(),
            })
    }

    /// Iterate over traces
    pub fn traces(&self) -> impl Iterator<Item = &[BlochVector]> {
        self.traces.iter().map(Vec::as_slice)
    }
}

/// Evenly spaced angles over [start, end], both ends included
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Rotate `initial` about Z by a relative phase sweeping [0, 2π] in `steps`
/// samples and return the Bloch trajectory
pub fn phase_rotation(initial: &Statevector, steps: usize) -> Vec<BlochVector> {
    linspace(0.0, 2.0 * PI, steps)
        .into_iter()
        .map(|theta| to_bloch_coords(&initial.with_relative_phase(theta)))
        .collect()
}
