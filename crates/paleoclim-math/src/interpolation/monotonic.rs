//! Monotonicity-preserving cubic interpolation (Fritsch-Carlson / PCHIP).
//!
//! Shape-preserving interpolation that:
//! - Passes through all data points
//! - Never overshoots the local range of the bracketing knots
//! - Has a continuous first derivative (C1)
//!
//! Reference: Fritsch, F. N. & Carlson, R. E. (1980) "Monotone Piecewise
//! Cubic Interpolation"

use crate::error::MathResult;
use crate::interpolation::{segment_index, validate_knots, Interpolator};

/// Monotonicity-preserving cubic Hermite interpolator.
///
/// Tangents at each knot follow the Fritsch-Carlson rule: zero whenever
/// the adjacent secant slopes disagree in sign (a local extremum at the
/// knot), otherwise a weighted harmonic mean of the two secants.
/// Boundary tangents equal the adjacent secant slope. Evaluation uses
/// the four cubic Hermite basis functions.
///
/// Used for quantities with a hard physical bound, such as ice coverage
/// in [0, 100] percent, where a cubic spline could overshoot.
///
/// # Example
///
/// ```rust
/// use paleoclim_math::interpolation::{Interpolator, MonotonicInterpolator};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 40.0, 90.0, 100.0];
///
/// let interp = MonotonicInterpolator::new(xs, ys).unwrap();
/// let y = interp.value(2.5);
/// assert!(y >= 90.0 && y <= 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct MonotonicInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Tangent (first derivative) at each knot.
    m: Vec<f64>,
}

impl MonotonicInterpolator {
    /// Creates a monotonicity-preserving interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be sorted in ascending order)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, lengths
    /// differ, or the x values are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys, 2)?;

        let m = compute_tangents(&xs, &ys);

        Ok(Self { xs, ys, m })
    }

    /// Returns the analytic Hermite first derivative at x.
    ///
    /// Returns 0.0 at or beyond either boundary, where the clamped
    /// curve is flat. Exposed for callers that want C1 rate estimates;
    /// the climate layer deliberately does not use it (see
    /// `ClimateInterpolator::rate_of_change`).
    #[must_use]
    pub fn tangent(&self, x: f64) -> f64 {
        if x <= self.xs[0] || x >= self.xs[self.xs.len() - 1] {
            return 0.0;
        }

        let i = segment_index(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;

        // Derivatives of the Hermite basis functions w.r.t. t, scaled by 1/h
        let dh00 = 6.0 * t * t - 6.0 * t;
        let dh10 = 3.0 * t * t - 4.0 * t + 1.0;
        let dh01 = -6.0 * t * t + 6.0 * t;
        let dh11 = 3.0 * t * t - 2.0 * t;

        (dh00 * self.ys[i] + dh01 * self.ys[i + 1]) / h + dh10 * self.m[i] + dh11 * self.m[i + 1]
    }
}

impl Interpolator for MonotonicInterpolator {
    fn value(&self, x: f64) -> f64 {
        // Clamp to boundary values outside the data range
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[self.xs.len() - 1] {
            return self.ys[self.ys.len() - 1];
        }

        let i = segment_index(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;

        // Cubic Hermite basis functions
        let h00 = 2.0 * t * t * t - 3.0 * t * t + 1.0;
        let h10 = t * t * t - 2.0 * t * t + t;
        let h01 = -2.0 * t * t * t + 3.0 * t * t;
        let h11 = t * t * t - t * t;

        h00 * self.ys[i] + h10 * h * self.m[i] + h01 * self.ys[i + 1] + h11 * h * self.m[i + 1]
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

/// Computes Fritsch-Carlson tangents at each knot.
fn compute_tangents(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let delta: Vec<f64> = ys
        .windows(2)
        .zip(h.iter())
        .map(|(w, hi)| (w[1] - w[0]) / hi)
        .collect();

    let mut m = vec![0.0; n];

    for i in 1..n - 1 {
        if delta[i - 1] * delta[i] > 0.0 {
            // Secants agree in sign: weighted harmonic mean keeps the
            // tangent inside the monotone region
            let w1 = 2.0 * h[i] + h[i - 1];
            let w2 = h[i] + 2.0 * h[i - 1];
            m[i] = (w1 + w2) / (w1 / delta[i - 1] + w2 / delta[i]);
        }
        // Local extremum at the knot: tangent stays zero
    }

    m[0] = delta[0];
    m[n - 1] = delta[n - 2];

    m
}
