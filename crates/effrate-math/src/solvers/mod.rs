//! Root-finding algorithms.
//!
//! This module provides the numerical solver used to back out an effective
//! interest rate from a net present value function:
//!
//! - [`newton_raphson`]: quadratic convergence near the root, requires the
//!   analytical derivative
//!
//! Convergence is judged on the step size `|x_{n+1} - x_n|`, not on the
//! residual `|f(x_n)|`. For NPV functions the residual is denominated in
//! currency units while the root is a rate, so a step-based criterion keeps
//! the tolerance meaningful regardless of the size of the payment stream.
//!
//! # Example: rate backed out of a discount factor
//!
//! ```rust
//! use effrate_math::solvers::{newton_raphson, SolverConfig};
//!
//! // 100 today versus 110 in one year: f(x) = 100 - 110 / (1 + x)
//! let f = |x: f64| 100.0 - 110.0 / (1.0 + x);
//! let df = |x: f64| 110.0 / ((1.0 + x) * (1.0 + x));
//!
//! let result = newton_raphson(f, df, 0.05, &SolverConfig::default()).unwrap();
//! assert!((result.root - 0.10).abs() < 1e-9);
//! ```

mod newton;

pub use newton::newton_raphson;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance on the step size for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of Newton updates performed.
    pub iterations: u32,
    /// Final residual (function value at the root).
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-9)
            .with_max_iterations(64);

        assert!((config.tolerance - 1e-9).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 64);
    }

    #[test]
    fn test_solver_config_default() {
        let config = SolverConfig::default();
        assert!((config.tolerance - DEFAULT_TOLERANCE).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
    }
}
