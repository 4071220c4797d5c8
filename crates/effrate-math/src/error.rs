//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    ///
    /// Carries no partial iterate: callers that want to retry do so with a
    /// different start value, not by resuming a failed solve.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value (may be non-finite if the iteration diverged).
        residual: f64,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(64, 1e-6);
        assert!(err.to_string().contains("64 iterations"));
    }

    #[test]
    fn test_non_finite_residual_display() {
        let err = MathError::convergence_failed(8, f64::NAN);
        assert!(err.to_string().contains("8 iterations"));
    }
}
