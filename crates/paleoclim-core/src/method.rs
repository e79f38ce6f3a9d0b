//! Interpolation method selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClimateError;

/// Interpolation methods a caller may request.
///
/// The requested method does not bind every variable directly: the
/// per-variable scheme policy in
/// [`crate::interpolator::ClimateInterpolator`] always reconstructs ice
/// coverage with the monotonic scheme under `CubicSpline`/`Akima`,
/// because that quantity is bounded in [0, 100] and must not overshoot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMethod {
    /// Piecewise-linear interpolation for all variables.
    Linear,

    /// Natural cubic spline (C2 smooth). The default.
    #[default]
    CubicSpline,

    /// Monotonicity-preserving cubic Hermite (PCHIP) for all variables.
    Pchip,

    /// Akima spline. Treated as an alias of [`Self::CubicSpline`].
    Akima,
}

impl InterpolationMethod {
    /// Returns the wire name of this method.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::CubicSpline => "cubic_spline",
            Self::Pchip => "pchip",
            Self::Akima => "akima",
        }
    }

    /// Returns every recognized method.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Linear, Self::CubicSpline, Self::Pchip, Self::Akima]
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterpolationMethod {
    type Err = ClimateError;

    /// Parses a method selector.
    ///
    /// Unrecognized selectors fail fast with
    /// [`ClimateError::UnknownMethod`]; there is no silent fallback to
    /// a default method.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "cubic_spline" => Ok(Self::CubicSpline),
            "pchip" => Ok(Self::Pchip),
            "akima" => Ok(Self::Akima),
            other => Err(ClimateError::unknown_method(other)),
        }
    }
}
