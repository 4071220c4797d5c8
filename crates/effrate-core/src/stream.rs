//! Relative payment streams and the net present value function.
//!
//! A payment stream enters as a list of dated payments and leaves as a
//! *relative* stream: the same amounts, with each date replaced by its
//! elapsed time in years since the earliest payment. The offset is
//! computed per calendar year, using each date's own year length:
//!
//! ```text
//! offset_k = (year_k - year_f) + (yf(date_k) - yf(date_f))
//! ```
//!
//! where `f` is the earliest payment and `yf` is the zero-based
//! day-of-year divided by 365 or 366. This is deliberately not a
//! Julian-day difference over 365.25: the same day gap contributes
//! slightly different fractions depending on which year it falls in,
//! and that behavior is load-bearing for leap-year boundaries.
//!
//! The relative stream is the only representation the NPV machinery
//! consumes; dates play no further role after the conversion.

use serde::{Deserialize, Serialize};

use crate::error::{RateError, RateResult};
use crate::types::{Date, Payment};

/// Returns the fraction of the date's year elapsed before the date.
///
/// Zero-based day-of-year over the year's own day count, so January 1
/// maps to exactly `0.0` and December 31 to `364/365` (or `365/366` in
/// a leap year). The result is always in `[0, 1)`.
#[must_use]
pub fn year_fraction(date: Date) -> f64 {
    f64::from(date.day_of_year()) / f64::from(date.days_in_year())
}

/// A payment with its date replaced by a year-fraction offset.
///
/// The offset is elapsed time in years since the earliest payment of
/// the stream the payment came from; the earliest payment itself has
/// offset `0.0` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativePayment {
    /// Payment amount (positive = inflow, negative = outflow)
    amount: f64,
    /// Elapsed time in years since the earliest payment
    offset: f64,
}

impl RelativePayment {
    /// Creates a new relative payment.
    #[must_use]
    pub fn new(amount: f64, offset: f64) -> Self {
        Self { amount, offset }
    }

    /// Returns the payment amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the year-fraction offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

/// Returns the payment with the minimum date.
///
/// When several payments share the minimum date, the first of them in
/// input order is returned. Which one wins does not matter downstream:
/// any tied payment yields the same offsets.
///
/// # Errors
///
/// Returns `RateError::EmptyPaymentStream` for an empty input.
pub fn earliest_payment(payments: &[Payment]) -> RateResult<Payment> {
    payments
        .iter()
        .copied()
        .min_by_key(Payment::date)
        .ok_or(RateError::EmptyPaymentStream)
}

/// Converts a payment stream into a relative payment stream.
///
/// The output has the same length and order as the input. The
/// conversion is pure: converting the same input twice yields identical
/// output.
///
/// # Errors
///
/// Returns `RateError::EmptyPaymentStream` for an empty input.
pub fn to_relative_stream(payments: &[Payment]) -> RateResult<Vec<RelativePayment>> {
    let first = earliest_payment(payments)?;
    let base_year = first.date().year();
    let base_fraction = year_fraction(first.date());

    Ok(payments
        .iter()
        .map(|payment| {
            let years = f64::from(payment.date().year() - base_year);
            let offset = years + (year_fraction(payment.date()) - base_fraction);
            RelativePayment::new(payment.amount(), offset)
        })
        .collect())
}

/// Evaluates the net present value of a relative stream at rate `x`.
///
/// `npv(x) = Σ amount_k * (1 + x)^(-offset_k)`
///
/// The rate must stay above `-1`: at and below it the discount base is
/// non-positive and `powf` returns NaN for fractional offsets.
#[must_use]
pub fn npv_at(stream: &[RelativePayment], x: f64) -> f64 {
    stream
        .iter()
        .map(|p| p.amount() * (1.0 + x).powf(-p.offset()))
        .sum()
}

/// Evaluates the derivative of the net present value at rate `x`.
///
/// `npv'(x) = Σ amount_k * (-offset_k) * (1 + x)^(-offset_k - 1)`
#[must_use]
pub fn npv_derivative_at(stream: &[RelativePayment], x: f64) -> f64 {
    stream
        .iter()
        .map(|p| p.amount() * -p.offset() * (1.0 + x).powf(-p.offset() - 1.0))
        .sum()
}

/// Returns the net present value function of a relative stream.
///
/// The returned closure borrows the stream and implements
/// [`npv_at`] over it.
pub fn net_present_value(stream: &[RelativePayment]) -> impl Fn(f64) -> f64 + '_ {
    move |x| npv_at(stream, x)
}

/// Returns the derivative of the net present value function.
pub fn net_present_value_derivative(stream: &[RelativePayment]) -> impl Fn(f64) -> f64 + '_ {
    move |x| npv_derivative_at(stream, x)
}
