//! Natural cubic spline interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{segment_index, validate_knots, Interpolator};
use crate::linear_algebra::solve_tridiagonal;

/// Natural cubic spline interpolation.
///
/// Constructs a smooth curve through data points using piecewise cubic
/// polynomials with continuous first and second derivatives (C2).
///
/// "Natural" means the second derivative is zero at both endpoints.
///
/// Each segment `[x_i, x_{i+1}]` stores coefficients `(a, b, c, d)` of
/// the local polynomial `a + b*dx + c*dx^2 + d*dx^3` with
/// `dx = x - x_i`. With only two knots the spline degenerates to a
/// single linear segment and no system is solved.
///
/// # Example
///
/// ```rust
/// use paleoclim_math::interpolation::{CubicSpline, Interpolator};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 4.0, 9.0];
///
/// let spline = CubicSpline::new(xs, ys).unwrap();
/// let y = spline.value(1.5);
/// let slope = spline.derivative(1.5, 1).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Per-segment polynomial coefficients, one entry per knot pair.
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
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

        let (a, b, c, d) = compute_coefficients(&xs, &ys)?;

        Ok(Self { xs, ys, a, b, c, d })
    }

    /// Returns the spline derivative at x.
    ///
    /// Returns 0.0 at or beyond either boundary, where the clamped
    /// curve is flat.
    ///
    /// # Arguments
    ///
    /// * `x` - Point to evaluate
    /// * `order` - Derivative order, 1 or 2
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidDerivativeOrder`] for any order
    /// other than 1 or 2.
    pub fn derivative(&self, x: f64, order: u32) -> MathResult<f64> {
        if order != 1 && order != 2 {
            return Err(MathError::invalid_derivative_order(order));
        }

        if x <= self.xs[0] || x >= self.xs[self.xs.len() - 1] {
            return Ok(0.0);
        }

        let i = segment_index(&self.xs, x);
        let dx = x - self.xs[i];

        let value = match order {
            1 => self.b[i] + 2.0 * self.c[i] * dx + 3.0 * self.d[i] * dx * dx,
            _ => 2.0 * self.c[i] + 6.0 * self.d[i] * dx,
        };
        Ok(value)
    }
}

impl Interpolator for CubicSpline {
    fn value(&self, x: f64) -> f64 {
        // Clamp to boundary values outside the data range
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[self.xs.len() - 1] {
            return self.ys[self.ys.len() - 1];
        }

        let i = segment_index(&self.xs, x);
        let dx = x - self.xs[i];

        self.a[i] + self.b[i] * dx + self.c[i] * dx * dx + self.d[i] * dx * dx * dx
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

/// Computes per-segment coefficients for the natural cubic spline.
///
/// Builds the tridiagonal system for the unknown second derivatives
/// `M_i` with natural boundary rows `M_0 = M_{n-1} = 0` and interior
/// rows
///
/// ```text
/// h_{i-1} M_{i-1} + 2(h_{i-1} + h_i) M_i + h_i M_{i+1}
///     = 3 ((y_{i+1} - y_i)/h_i - (y_i - y_{i-1})/h_{i-1})
/// ```
///
/// then derives `(a, b, c, d)` per segment from the solved `M`.
#[allow(clippy::type_complexity)]
fn compute_coefficients(
    xs: &[f64],
    ys: &[f64],
) -> MathResult<(Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>)> {
    let n = xs.len();
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

    if n == 2 {
        // Two knots: a single linear segment, no system to solve
        return Ok((
            vec![ys[0]],
            vec![(ys[1] - ys[0]) / h[0]],
            vec![0.0],
            vec![0.0],
        ));
    }

    let mut lower = vec![0.0; n - 1];
    let mut diag = vec![1.0; n];
    let mut upper = vec![0.0; n - 1];
    let mut rhs = vec![0.0; n];

    for i in 1..n - 1 {
        lower[i - 1] = h[i - 1];
        diag[i] = 2.0 * (h[i - 1] + h[i]);
        upper[i] = h[i];
        rhs[i] = 3.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
    }
    // Rows 0 and n-1 keep diag = 1 with zero off-diagonals and zero
    // right-hand side, enforcing the natural condition M = 0 there.

    let m = solve_tridiagonal(&lower, &diag, &upper, &rhs)?;

    let mut a = vec![0.0; n - 1];
    let mut b = vec![0.0; n - 1];
    let mut c = vec![0.0; n - 1];
    let mut d = vec![0.0; n - 1];

    for i in 0..n - 1 {
        a[i] = ys[i];
        b[i] = (ys[i + 1] - ys[i]) / h[i] - h[i] * (2.0 * m[i] + m[i + 1]) / 3.0;
        c[i] = m[i];
        d[i] = (m[i + 1] - m[i]) / (3.0 * h[i]);
    }

    Ok((a, b, c, d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_spline_through_points() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![0.0, 1.0, 4.0, 9.0];

        let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(spline.value(*x), *y, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_spline_clamps_out_of_range() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![0.0, 1.0, 4.0, 9.0];

        let spline = CubicSpline::new(xs, ys).unwrap();

        assert_relative_eq!(spline.value(-5.0), 0.0, epsilon = 1e-10);
        assert_relative_eq!(spline.value(10.0), 9.0, epsilon = 1e-10);
    }

    #[test]
    fn test_two_knots_degenerate_to_line() {
        let xs = vec![-100000.0, 0.0];
        let ys = vec![-50.0, 0.0];

        let spline = CubicSpline::new(xs, ys).unwrap();

        assert_relative_eq!(spline.value(-50000.0), -25.0, epsilon = 1e-10);
        assert_relative_eq!(spline.value(-25000.0), -12.5, epsilon = 1e-10);
        assert_relative_eq!(spline.derivative(-50000.0, 1).unwrap(), 0.0005, epsilon = 1e-12);
        assert_relative_eq!(spline.derivative(-50000.0, 2).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_c2_continuity_at_interior_knots() {
        let xs = vec![0.0, 1.0, 2.5, 4.0, 5.0];
        let ys = vec![0.0, 2.0, -1.0, 3.0, 1.0];

        let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();

        let eps = 1e-7;
        for x in &xs[1..xs.len() - 1] {
            // Value continuity
            assert_relative_eq!(spline.value(x - eps), spline.value(x + eps), epsilon = 1e-4);
            // First and second derivative continuity
            assert_relative_eq!(
                spline.derivative(x - eps, 1).unwrap(),
                spline.derivative(x + eps, 1).unwrap(),
                epsilon = 1e-4
            );
            assert_relative_eq!(
                spline.derivative(x - eps, 2).unwrap(),
                spline.derivative(x + eps, 2).unwrap(),
                epsilon = 1e-4
            );
        }
    }

    #[test]
    fn test_natural_boundary_condition() {
        let xs = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = vec![0.0, 1.0, 0.0, 1.0, 0.0];

        let spline = CubicSpline::new(xs, ys).unwrap();

        // Second derivative approaches zero at the endpoints
        let eps = 1e-8;
        assert_relative_eq!(spline.derivative(0.0 + eps, 2).unwrap(), 0.0, epsilon = 1e-5);
        assert_relative_eq!(spline.derivative(4.0 - eps, 2).unwrap(), 0.0, epsilon = 1e-5);

        // At and beyond the boundary the derivative is defined as zero
        assert_relative_eq!(spline.derivative(0.0, 2).unwrap(), 0.0);
        assert_relative_eq!(spline.derivative(4.0, 2).unwrap(), 0.0);
        assert_relative_eq!(spline.derivative(-1.0, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let xs = vec![0.0, 1.0, 2.0, 3.0, 5.0];
        let ys = vec![0.0, 1.5, 0.5, 2.0, -1.0];

        let spline = CubicSpline::new(xs, ys).unwrap();

        let h = 1e-6;
        for x in [0.5, 1.3, 2.7, 4.0] {
            let numerical = (spline.value(x + h) - spline.value(x - h)) / (2.0 * h);
            let analytical = spline.derivative(x, 1).unwrap();
            assert_relative_eq!(analytical, numerical, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_invalid_derivative_order() {
        let xs = vec![0.0, 1.0, 2.0];
        let ys = vec![0.0, 1.0, 0.0];

        let spline = CubicSpline::new(xs, ys).unwrap();

        assert!(matches!(
            spline.derivative(1.5, 0),
            Err(MathError::InvalidDerivativeOrder { order: 0 })
        ));
        assert!(matches!(
            spline.derivative(1.5, 3),
            Err(MathError::InvalidDerivativeOrder { order: 3 })
        ));
    }

    #[test]
    fn test_insufficient_points() {
        let xs = vec![0.0];
        let ys = vec![1.0];

        assert!(CubicSpline::new(xs, ys).is_err());
    }
}
