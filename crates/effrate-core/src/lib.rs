//! # Effrate Core
//!
//! Payment stream types and effective interest rate computation.
//!
//! This crate computes the effective (internal) interest rate of an
//! arbitrary stream of dated cash payments: the rate at which the net
//! present value of the stream is zero. Payment dates may be irregular
//! and amounts may have either sign, which generalizes the XIRR
//! calculation found in spreadsheets.
//!
//! - **Types**: [`types::Date`] and [`types::Payment`] value types
//! - **Stream model**: conversion of dated payments into year-fraction
//!   offsets and the NPV function built over them ([`stream`])
//! - **Rate façade**: the single [`rate::effective_interest_rate`]
//!   entry point
//!
//! ## Example
//!
//! ```rust
//! use effrate_core::prelude::*;
//!
//! // Lend 1000, get 1100 back a year later: the effective rate is 10%.
//! let payments = vec![
//!     Payment::new(Date::from_ymd(2020, 1, 1).unwrap(), 1000.0),
//!     Payment::new(Date::from_ymd(2021, 1, 1).unwrap(), -1100.0),
//! ];
//!
//! let rate = effective_interest_rate(&payments).unwrap();
//! assert!((rate - 0.10).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod rate;
pub mod stream;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{RateError, RateResult};
    pub use crate::rate::effective_interest_rate;
    pub use crate::stream::{
        earliest_payment, net_present_value, net_present_value_derivative, to_relative_stream,
        RelativePayment,
    };
    pub use crate::types::{Date, Payment};
}

// Re-export commonly used items at crate root
pub use error::{RateError, RateResult};
pub use rate::effective_interest_rate;
pub use types::{Date, Payment};
