//! # Paleoclim Math
//!
//! Numerical interpolation routines for the Paleoclim reconstruction engine.
//!
//! This crate provides:
//!
//! - **Interpolation**: Linear, natural cubic spline, and
//!   monotonicity-preserving (Fritsch-Carlson) interpolation
//! - **Linear Algebra**: The tridiagonal (Thomas) solver backing the
//!   cubic spline construction
//!
//! ## Design Philosophy
//!
//! - **Build once, evaluate anywhere**: all fallibility lives in
//!   construction; evaluation clamps out-of-range queries and is total
//! - **Immutable after construction**: every interpolator is `Send + Sync`
//!   and safe to share across threads without locking

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod interpolation;
pub mod linear_algebra;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{
        CubicSpline, Interpolator, LinearInterpolator, MonotonicInterpolator,
    };
    pub use crate::linear_algebra::solve_tridiagonal;
}

pub use error::{MathError, MathResult};
