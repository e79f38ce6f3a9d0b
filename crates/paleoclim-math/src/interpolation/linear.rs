//! Linear interpolation.

use crate::error::MathResult;
use crate::interpolation::{segment_index, validate_knots, Interpolator};

/// Linear interpolation between data points.
///
/// The simplest form of interpolation, connecting consecutive knots
/// with straight lines. Included as a baseline and as the scheme used
/// when a caller explicitly requests linear reconstruction.
///
/// # Example
///
/// ```rust
/// use paleoclim_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 4.0, 9.0];
///
/// let interp = LinearInterpolator::new(xs, ys).unwrap();
/// let y = interp.value(1.5);
/// // y = 2.5 (linear interpolation between (1, 1) and (2, 4))
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
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
        Ok(Self { xs, ys })
    }

    /// Returns the first derivative at x.
    ///
    /// The derivative of a linear segment is its constant slope.
    /// Returns 0.0 at or beyond either boundary, matching the clamped
    /// evaluation there.
    #[must_use]
    pub fn derivative(&self, x: f64) -> f64 {
        if x <= self.xs[0] || x >= self.xs[self.xs.len() - 1] {
            return 0.0;
        }

        let i = segment_index(&self.xs, x);
        (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i])
    }
}

impl Interpolator for LinearInterpolator {
    fn value(&self, x: f64) -> f64 {
        // Clamp to boundary values outside the data range
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[self.xs.len() - 1] {
            return self.ys[self.ys.len() - 1];
        }

        let i = segment_index(&self.xs, x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        let t = (x - x0) / (x1 - x0);
        y0 + t * (y1 - y0)
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
