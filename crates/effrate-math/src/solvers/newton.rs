//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// The solve succeeds as soon as a step satisfies
/// `|x_{n+1} - x_n| <= tolerance`, and the returned root is that last
/// iterate. The iteration counter starts at zero and increments once per
/// update; the budget check is `count > max_iterations`, so at most
/// `max_iterations + 1` updates are attempted before the solve fails.
///
/// A zero derivative is not detected specially: the resulting infinite or
/// NaN step can never satisfy the convergence check, so the iteration
/// budget exhausts and the solve fails with a non-finite residual.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root and iteration statistics, or an error if convergence fails.
///
/// # Example
///
/// ```rust
/// use effrate_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..=config.max_iterations {
        // Newton step
        let step = f(x) / df(x);
        let next = x - step;

        // Check for step convergence
        if step.abs() <= config.tolerance {
            return Ok(SolverResult {
                root: next,
                iterations: iteration + 1,
                residual: f(next),
            });
        }

        x = next;
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}
