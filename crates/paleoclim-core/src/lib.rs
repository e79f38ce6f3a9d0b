//! # Paleoclim Core
//!
//! Multi-variable climate state reconstruction for the Paleoclim engine.
//!
//! This crate reconstructs a continuous function of Earth's climate
//! state (sea level, temperature, ice coverage, atmospheric CO2) from
//! a sparse, irregularly-spaced set of known historical time periods,
//! keyed by year.
//!
//! - **Dataset**: [`TimePeriod`](dataset::TimePeriod) records and JSON
//!   document loading
//! - **Interpolation**: [`ClimateInterpolator`](interpolator::ClimateInterpolator)
//!   composes one interpolator per variable under a fixed per-variable
//!   scheme policy
//! - **Rates**: per-year and per-century rate-of-change queries
//! - **Timeline**: sampling interpolated states across a year range
//!
//! ## Quick Start
//!
//! ```rust
//! use paleoclim_core::prelude::*;
//!
//! let periods = vec![
//!     TimePeriod::new(0, 0.0, 0.0, 10.0).with_co2(415.0),
//!     TimePeriod::new(-20000, -120.0, -6.0, 30.0).with_co2(190.0),
//!     TimePeriod::new(-130000, 6.0, 2.0, 8.0).with_co2(280.0),
//! ];
//!
//! let interp =
//!     ClimateInterpolator::new(&periods, InterpolationMethod::CubicSpline).unwrap();
//!
//! let state = interp.interpolate(-10000);
//! let rates = interp.rate_of_change(-10000).per_century();
//! let timeline = interp.timeline(-130000, 0, 5000).unwrap();
//! ```
//!
//! Once built, an interpolator is immutable and `Send + Sync`;
//! evaluation only reads pre-computed coefficient arrays, so a single
//! instance may serve concurrent queries without locking. A new
//! dataset or method requires a new instance.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::unreadable_literal)]

pub mod dataset;
pub mod error;
pub mod interpolator;
pub mod method;
pub mod rate;
pub mod state;
pub mod timeline;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dataset::{TimePeriod, TimePeriodData};
    pub use crate::error::{ClimateError, ClimateResult};
    pub use crate::interpolator::{scheme_for, ClimateInterpolator, Variable, VariableScheme};
    pub use crate::method::InterpolationMethod;
    pub use crate::rate::{CenturyRates, RateOfChange};
    pub use crate::state::ClimateState;
}

pub use error::{ClimateError, ClimateResult};
