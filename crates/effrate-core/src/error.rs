//! Error types for the Effrate library.
//!
//! This module defines the error types used throughout Effrate,
//! providing structured error handling with context.

use effrate_math::MathError;
use thiserror::Error;

/// A specialized Result type for Effrate operations.
pub type RateResult<T> = Result<T, RateError>;

/// The main error type for Effrate operations.
#[derive(Error, Debug, Clone)]
pub enum RateError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A payment stream was empty where at least one payment is required.
    #[error("Payment stream is empty")]
    EmptyPaymentStream,

    /// Numerical solver failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// The solver left the domain of the present value function.
    ///
    /// Discounting evaluates `(1 + x)^(-t)`, which is only defined for
    /// rates above -100%. A non-finite or sub-domain result is rejected
    /// rather than returned as a nonsensical rate.
    #[error("Rate out of domain: {rate}")]
    RateOutOfDomain {
        /// The rejected rate value.
        rate: f64,
    },
}

impl RateError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a convergence failure error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }
}

impl From<MathError> for RateError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => Self::ConvergenceFailed {
                iterations,
                residual,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RateError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_convergence_error() {
        let err = RateError::convergence_failed(64, 1e-6);
        assert!(err.to_string().contains("64 iterations"));
    }

    #[test]
    fn test_from_math_error() {
        let math = MathError::convergence_failed(64, 0.5);
        let err = RateError::from(math);
        assert!(matches!(
            err,
            RateError::ConvergenceFailed { iterations: 64, .. }
        ));
    }
}
