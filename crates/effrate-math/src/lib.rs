//! # Effrate Math
//!
//! Root-finding utilities for the Effrate effective interest rate library.
//!
//! This crate provides:
//!
//! - **Solvers**: Newton-Raphson root finding with explicit convergence
//!   and failure semantics
//!
//! ## Design Philosophy
//!
//! - **Explicit Failure**: non-convergence is a value, never a panic
//! - **Bounded Work**: every solve is capped by an iteration budget
//! - **Generic**: functions and derivatives are plain `Fn(f64) -> f64` closures

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{newton_raphson, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
