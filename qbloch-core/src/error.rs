//! Error types for qbloch-core

use thiserror::Error;

/// Errors raised while building coordinate series
///
/// The coordinate transform itself never fails: statevectors are not
/// validated and malformed input maps to a well-defined point.
#[derive(Debug, Error)]
pub enum BlochError {
    /// Series has no traces or no time steps
    #[error("Coordinate series must have at least one trace and one time step")]
    EmptySeries,

    /// Traces of differing length
    #[error("Trace {trace} has {actual} steps, expected {expected}")]
    RaggedSeries {
        trace: usize,
        expected: usize,
        actual: usize,
    },

    /// Time step outside the series
    #[error("Step {step} out of range for series with {steps} steps")]
    StepOutOfRange { step: usize, steps: usize },

    /// Trace index outside the series
    #[error("Trace {trace} out of range for series with {traces} traces")]
    TraceOutOfRange { trace: usize, traces: usize },

    /// Malformed JSON input
    #[error("Failed to parse coordinate series: {0}")]
    Json(#[from] serde_json::Error),
}

impl BlochError {
    /// Create a ragged series error
    pub fn ragged(trace: usize, expected: usize, actual: usize) -> Self {
        Self::RaggedSeries {
            trace,
            expected,
            actual,
        }
    }
}

/// Result type for series operations
pub type Result<T> = std::result::Result<T, BlochError>;
