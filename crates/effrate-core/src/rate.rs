//! Effective interest rate computation.
//!
//! The single entry point of the library: wire the NPV function of a
//! payment stream into the Newton solver and return the rate at which
//! the stream's net present value is zero.

use effrate_math::solvers::{newton_raphson, SolverConfig};
use log::debug;

use crate::error::{RateError, RateResult};
use crate::stream::{net_present_value, net_present_value_derivative, to_relative_stream};
use crate::types::Payment;

/// Fixed start value for the Newton iteration.
///
/// Empirically tuned for typical loan and investment cash-flow shapes;
/// streams whose true rate lies far from it may fail to converge. There
/// is no retry with a different start value.
pub const NEWTON_START_VALUE: f64 = -0.75;

/// Convergence tolerance on the Newton step.
pub const RATE_TOLERANCE: f64 = 1e-9;

/// Iteration budget for the Newton solve.
pub const MAX_ITERATIONS: u32 = 64;

/// Computes the effective interest rate of a payment stream.
///
/// The effective rate is the `x` for which
/// `Σ amount_k * (1 + x)^(-offset_k) = 0`, with offsets measured in
/// years from the earliest payment. Payments may be given in any order.
///
/// # Errors
///
/// - `RateError::EmptyPaymentStream` if `payments` is empty
/// - `RateError::ConvergenceFailed` if Newton's method does not converge
///   within the iteration budget
/// - `RateError::RateOutOfDomain` if the solve converges to a non-finite
///   value or a rate at or below -100%
///
/// # Example
///
/// ```rust
/// use effrate_core::rate::effective_interest_rate;
/// use effrate_core::types::{Date, Payment};
///
/// let payments = vec![
///     Payment::new(Date::from_ymd(2020, 1, 1).unwrap(), 1000.0),
///     Payment::new(Date::from_ymd(2021, 1, 1).unwrap(), -1100.0),
/// ];
///
/// let rate = effective_interest_rate(&payments).unwrap();
/// assert!((rate - 0.10).abs() < 1e-9);
/// ```
pub fn effective_interest_rate(payments: &[Payment]) -> RateResult<f64> {
    let stream = to_relative_stream(payments)?;

    let npv = net_present_value(&stream);
    let npv_prime = net_present_value_derivative(&stream);

    let config = SolverConfig::new(RATE_TOLERANCE, MAX_ITERATIONS);
    let result = newton_raphson(npv, npv_prime, NEWTON_START_VALUE, &config)?;

    debug!(
        "effective rate solve: {} payments, {} iterations, residual {:.2e}",
        payments.len(),
        result.iterations,
        result.residual
    );

    if !result.root.is_finite() || result.root <= -1.0 {
        return Err(RateError::RateOutOfDomain { rate: result.root });
    }

    Ok(result.root)
}
