//! Multi-variable climate state interpolation.
//!
//! [`ClimateInterpolator`] composes one single-variable interpolator
//! per climate variable, chosen by a fixed per-variable policy, and
//! post-processes outputs (clamping, rounding). It is the public entry
//! point of the reconstruction engine.

use paleoclim_math::interpolation::{
    CubicSpline, Interpolator, LinearInterpolator, MonotonicInterpolator,
};

use crate::dataset::TimePeriod;
use crate::error::{ClimateError, ClimateResult};
use crate::method::InterpolationMethod;
use crate::rate::RateOfChange;
use crate::state::{round_to, ClimateState};

/// The climate variables carried by a reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    /// Sea level relative to present (meters).
    SeaLevel,
    /// Global temperature anomaly (Celsius).
    Temperature,
    /// Ice coverage percentage, bounded in [0, 100].
    IceCoverage,
    /// Atmospheric CO2 (ppm), bounded below by 0.
    Co2,
}

/// The interpolation scheme backing one variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableScheme {
    /// Piecewise linear.
    Linear,
    /// Natural cubic spline.
    CubicSpline,
    /// Monotonicity-preserving cubic Hermite.
    Monotonic,
}

/// Maps a requested method to the scheme used for one variable.
///
/// The policy is fixed regardless of the caller-requested method where
/// physical plausibility demands it: ice coverage is bounded in
/// [0, 100] and always uses the monotonic scheme under the cubic
/// family, since a spline could overshoot the bound between knots.
#[must_use]
pub fn scheme_for(method: InterpolationMethod, variable: Variable) -> VariableScheme {
    match method {
        InterpolationMethod::Linear => VariableScheme::Linear,
        InterpolationMethod::Pchip => VariableScheme::Monotonic,
        InterpolationMethod::CubicSpline | InterpolationMethod::Akima => match variable {
            Variable::IceCoverage => VariableScheme::Monotonic,
            _ => VariableScheme::CubicSpline,
        },
    }
}

/// A single-variable interpolator, tagged by scheme.
///
/// Whether a variant supports analytic derivatives is resolved by the
/// match in [`Self::analytic_derivative`], not by a runtime type test.
#[derive(Debug, Clone)]
enum VariableInterpolator {
    Linear(LinearInterpolator),
    CubicSpline(CubicSpline),
    Monotonic(MonotonicInterpolator),
}

impl VariableInterpolator {
    fn build(scheme: VariableScheme, xs: Vec<f64>, ys: Vec<f64>) -> ClimateResult<Self> {
        let built = match scheme {
            VariableScheme::Linear => Self::Linear(LinearInterpolator::new(xs, ys)?),
            VariableScheme::CubicSpline => Self::CubicSpline(CubicSpline::new(xs, ys)?),
            VariableScheme::Monotonic => Self::Monotonic(MonotonicInterpolator::new(xs, ys)?),
        };
        Ok(built)
    }

    fn value(&self, x: f64) -> f64 {
        match self {
            Self::Linear(interp) => interp.value(x),
            Self::CubicSpline(interp) => interp.value(x),
            Self::Monotonic(interp) => interp.value(x),
        }
    }

    /// Returns the analytic first derivative at x, for variants that
    /// expose one.
    fn analytic_derivative(&self, x: f64) -> Option<f64> {
        match self {
            // Order 1 is always a valid derivative order
            Self::CubicSpline(interp) => interp.derivative(x, 1).ok(),
            Self::Linear(_) | Self::Monotonic(_) => None,
        }
    }
}

/// Multi-variable climate state interpolator.
///
/// Built once per (dataset, method) pair; immutable afterwards, so
/// `interpolate` and `rate_of_change` may run concurrently on a shared
/// reference from any number of threads without locking. Rebuilding is
/// required when the dataset or method changes.
///
/// # Example
///
/// ```rust
/// use paleoclim_core::prelude::*;
///
/// let periods = vec![
///     TimePeriod::new(0, 0.0, 0.0, 10.0),
///     TimePeriod::new(-20000, -120.0, -6.0, 30.0),
///     TimePeriod::new(-130000, 6.0, 2.0, 8.0),
/// ];
///
/// let interp =
///     ClimateInterpolator::new(&periods, InterpolationMethod::CubicSpline).unwrap();
///
/// let state = interp.interpolate(-10000);
/// assert!(state.ice_coverage_pct >= 0.0 && state.ice_coverage_pct <= 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct ClimateInterpolator {
    method: InterpolationMethod,
    min_year: i32,
    max_year: i32,
    sea_level: VariableInterpolator,
    temperature: VariableInterpolator,
    ice_coverage: VariableInterpolator,
    co2: Option<VariableInterpolator>,
}

impl ClimateInterpolator {
    /// Builds an interpolator from time period records.
    ///
    /// Records need not be pre-sorted. The CO2 interpolator is built
    /// only when every record supplies `co2_ppm`; otherwise CO2 is
    /// absent from interpolated states.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::InsufficientData`] for fewer than 2
    /// records and [`ClimateError::DuplicateYear`] when two records
    /// share a year.
    pub fn new(periods: &[TimePeriod], method: InterpolationMethod) -> ClimateResult<Self> {
        let years: Vec<i32> = periods.iter().map(|p| p.year).collect();
        let sea_levels: Vec<f64> = periods.iter().map(|p| p.sea_level_m).collect();
        let temps: Vec<f64> = periods.iter().map(|p| p.global_temp_c).collect();
        let ice: Vec<f64> = periods.iter().map(|p| p.ice_coverage_pct).collect();
        let co2: Option<Vec<f64>> = periods.iter().map(|p| p.co2_ppm).collect();

        Self::from_series(years, sea_levels, temps, ice, co2, method)
    }

    /// Builds an interpolator from per-variable series.
    ///
    /// Lower-level entry point for callers that hold columnar data.
    /// All series must cover exactly the same years, in the same
    /// order; `years` need not be sorted.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::ShapeMismatch`] when a series length
    /// disagrees with `years`, [`ClimateError::InsufficientData`] for
    /// fewer than 2 years, and [`ClimateError::DuplicateYear`] for a
    /// repeated year.
    pub fn from_series(
        years: Vec<i32>,
        sea_levels: Vec<f64>,
        temps: Vec<f64>,
        ice: Vec<f64>,
        co2: Option<Vec<f64>>,
        method: InterpolationMethod,
    ) -> ClimateResult<Self> {
        let n = years.len();
        if n < 2 {
            return Err(ClimateError::insufficient_data(2, n));
        }
        for (name, len) in [
            ("sea_level_m", sea_levels.len()),
            ("global_temp_c", temps.len()),
            ("ice_coverage_pct", ice.len()),
        ] {
            if len != n {
                return Err(ClimateError::shape_mismatch(name, n, len));
            }
        }
        if let Some(co2) = &co2 {
            if co2.len() != n {
                return Err(ClimateError::shape_mismatch("co2_ppm", n, co2.len()));
            }
        }

        // Sort all series by year and reject duplicates
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by_key(|&i| years[i]);
        for w in order.windows(2) {
            if years[w[0]] == years[w[1]] {
                return Err(ClimateError::duplicate_year(years[w[0]]));
            }
        }

        let xs: Vec<f64> = order.iter().map(|&i| f64::from(years[i])).collect();
        let pick = |series: &[f64]| -> Vec<f64> { order.iter().map(|&i| series[i]).collect() };

        let sea_level = VariableInterpolator::build(
            scheme_for(method, Variable::SeaLevel),
            xs.clone(),
            pick(&sea_levels),
        )?;
        let temperature = VariableInterpolator::build(
            scheme_for(method, Variable::Temperature),
            xs.clone(),
            pick(&temps),
        )?;
        let ice_coverage = VariableInterpolator::build(
            scheme_for(method, Variable::IceCoverage),
            xs.clone(),
            pick(&ice),
        )?;
        let co2 = co2
            .map(|series| {
                VariableInterpolator::build(scheme_for(method, Variable::Co2), xs, pick(&series))
            })
            .transpose()?;

        Ok(Self {
            method,
            min_year: years[order[0]],
            max_year: years[order[n - 1]],
            sea_level,
            temperature,
            ice_coverage,
            co2,
        })
    }

    /// Returns the requested interpolation method.
    #[must_use]
    pub fn method(&self) -> InterpolationMethod {
        self.method
    }

    /// Returns the earliest year covered by the dataset.
    #[must_use]
    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    /// Returns the latest year covered by the dataset.
    #[must_use]
    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Interpolates the climate state for a given year.
    ///
    /// Years outside `[min_year, max_year]` saturate to the boundary
    /// rather than extrapolating or erroring. Ice coverage is clamped
    /// to [0, 100] and CO2 to >= 0; values are rounded to 2 decimal
    /// places (1 for CO2) for presentation stability.
    #[must_use]
    pub fn interpolate(&self, year: i32) -> ClimateState {
        let year = year.clamp(self.min_year, self.max_year);
        let x = f64::from(year);

        let ice = self.ice_coverage.value(x).clamp(0.0, 100.0);
        let co2 = self.co2.as_ref().map(|interp| interp.value(x).max(0.0));

        ClimateState {
            year,
            sea_level_m: round_to(self.sea_level.value(x), 2),
            global_temp_c: round_to(self.temperature.value(x), 2),
            ice_coverage_pct: round_to(ice, 2),
            co2_ppm: co2.map(|v| round_to(v, 1)),
        }
    }

    /// Returns the per-year rate of change of the climate variables.
    ///
    /// When the backing variable interpolators expose an analytic
    /// first derivative (the cubic spline family), it is used directly;
    /// ice coverage is then reported as 0, matching the reference
    /// behavior of not exposing the monotonic scheme's tangent here.
    /// Otherwise the rate falls back to a symmetric finite difference
    /// over a fixed step of 100 years on interpolated states.
    #[must_use]
    pub fn rate_of_change(&self, year: i32) -> RateOfChange {
        let x = f64::from(year);

        if let Some(sea_level_rate) = self.sea_level.analytic_derivative(x) {
            return RateOfChange {
                year,
                sea_level_m_per_year: sea_level_rate,
                temp_c_per_year: self.temperature.analytic_derivative(x).unwrap_or(0.0),
                ice_pct_per_year: 0.0,
            };
        }

        const STEP: i32 = 100;
        // Saturating keeps extreme years panic-free; the sample years
        // clamp to the dataset bounds either way.
        let before = self.interpolate(year.saturating_sub(STEP));
        let after = self.interpolate(year.saturating_add(STEP));
        let span = f64::from(2 * STEP);

        RateOfChange {
            year,
            sea_level_m_per_year: (after.sea_level_m - before.sea_level_m) / span,
            temp_c_per_year: (after.global_temp_c - before.global_temp_c) / span,
            ice_pct_per_year: (after.ice_coverage_pct - before.ice_coverage_pct) / span,
        }
    }
}
