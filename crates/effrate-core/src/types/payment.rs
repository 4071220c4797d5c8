//! Payment type for effective interest rate calculations.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// A single dated cash payment.
///
/// The amount carries no currency semantics: positive values are inflows,
/// negative values are outflows, from the perspective of whichever party
/// the stream is written for. Multiple payments may share a date, and
/// payment lists carry no ordering invariant — the earliest payment is
/// always derived where needed, never assumed.
///
/// # Example
///
/// ```rust
/// use effrate_core::types::{Date, Payment};
///
/// let payment = Payment::new(Date::from_ymd(2020, 1, 1).unwrap(), -1200.0);
/// assert!(payment.is_outflow());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Payment date
    date: Date,
    /// Payment amount (positive = inflow, negative = outflow)
    amount: f64,
}

impl Payment {
    /// Creates a new payment.
    #[must_use]
    pub fn new(date: Date, amount: f64) -> Self {
        Self { date, amount }
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the payment amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_inflow(&self) -> bool {
        self.amount > 0.0
    }

    /// Returns true if the amount is strictly negative.
    #[must_use]
    pub fn is_outflow(&self) -> bool {
        self.amount < 0.0
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_creation() {
        let date = Date::from_ymd(2020, 1, 1).unwrap();
        let payment = Payment::new(date, 1000.0);

        assert_eq!(payment.date(), date);
        assert!((payment.amount() - 1000.0).abs() < f64::EPSILON);
        assert!(payment.is_inflow());
        assert!(!payment.is_outflow());
    }

    #[test]
    fn test_display() {
        let payment = Payment::new(Date::from_ymd(2020, 1, 1).unwrap(), -1200.0);
        assert_eq!(format!("{}", payment), "2020-01-01: -1200");
    }

    #[test]
    fn test_serde_roundtrip() {
        let payment = Payment::new(Date::from_ymd(2020, 1, 1).unwrap(), 240_000.0);
        let json = serde_json::to_string(&payment).unwrap();
        let parsed: Payment = serde_json::from_str(&json).unwrap();
        assert_eq!(payment, parsed);
    }
}
