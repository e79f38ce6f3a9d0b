//! Interpolation methods for climate time-series reconstruction.
//!
//! This module provides the single-variable interpolation algorithms
//! used to reconstruct continuous climate curves from sparse knots.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: Simple piecewise-linear interpolation
//! - [`CubicSpline`]: Natural cubic spline interpolation (C2 smooth)
//! - [`MonotonicInterpolator`]: Fritsch-Carlson shape-preserving cubic (PCHIP)
//!
//! # Choosing an Interpolation Method
//!
//! | Method | Smoothness | Overshoot | Use Case |
//! |--------|------------|-----------|----------|
//! | Linear | C0 | None | Baseline, quick prototyping |
//! | Cubic Spline | C2 | Possible | Smooth unbounded quantities |
//! | Monotonic | C1 | **None** | Bounded quantities (percentages) |
//!
//! # Overshoot Considerations
//!
//! A cubic spline through sparse knots can swing well outside the local
//! data range between knots. For quantities with a hard physical bound,
//! such as ice coverage in [0, 100] percent, use [`MonotonicInterpolator`]:
//! it guarantees the interpolant stays within the min/max of the
//! bracketing knot values.

mod cubic_spline;
mod linear;
mod monotonic;

pub use cubic_spline::CubicSpline;
pub use linear::LinearInterpolator;
pub use monotonic::MonotonicInterpolator;

use crate::error::{MathError, MathResult};

/// Trait for single-variable interpolation methods.
///
/// All interpolation methods implement this trait, providing a unified
/// interface for multi-variable composition.
///
/// Out-of-range queries are defined behavior: `value` clamps to the
/// nearest boundary knot rather than extrapolating or erroring, so
/// evaluation is total once construction has succeeded.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x, clamped to the data range.
    fn value(&self, x: f64) -> f64;

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Validates knot arrays shared by every interpolator constructor.
///
/// Requires at least `min_points` knots, equal lengths, and strictly
/// increasing x values.
pub(crate) fn validate_knots(xs: &[f64], ys: &[f64], min_points: usize) -> MathResult<()> {
    if xs.len() < min_points {
        return Err(MathError::insufficient_data(min_points, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    for i in 1..xs.len() {
        if xs[i] <= xs[i - 1] {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }
    }
    Ok(())
}

/// Finds the index i such that xs[i] <= x < xs[i+1].
///
/// Assumes `xs` is sorted with at least two entries; callers clamp x
/// to the data range before evaluating the returned segment.
pub(crate) fn segment_index(xs: &[f64], x: f64) -> usize {
    match xs.binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)) {
        Ok(i) => i.min(xs.len() - 2),
        Err(i) => (i.saturating_sub(1)).min(xs.len() - 2),
    }
}
