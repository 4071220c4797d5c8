//! Core value types for payment stream calculations.

mod date;
mod payment;

pub use date::Date;
pub use payment::Payment;
