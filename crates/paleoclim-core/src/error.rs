//! Error types for climate reconstruction operations.
//!
//! All errors are detected at the construction or parsing boundary and
//! surfaced synchronously; nothing here is transient or retried.
//! Out-of-range year queries are *not* errors: evaluation clamps to the
//! dataset boundary by contract.

use paleoclim_math::MathError;
use thiserror::Error;

/// A specialized Result type for climate reconstruction operations.
pub type ClimateResult<T> = Result<T, ClimateError>;

/// Errors that can occur during climate reconstruction.
#[derive(Error, Debug, Clone)]
pub enum ClimateError {
    /// Not enough time periods to build an interpolator.
    #[error("Insufficient data: need at least {required} time periods, got {got}")]
    InsufficientData {
        /// Minimum required time periods.
        required: usize,
        /// Actual number of time periods provided.
        got: usize,
    },

    /// Variable series disagree on the years they cover.
    #[error("Shape mismatch for {variable}: expected {expected} values, got {got}")]
    ShapeMismatch {
        /// Name of the offending variable series.
        variable: String,
        /// Expected series length (number of years).
        expected: usize,
        /// Actual series length.
        got: usize,
    },

    /// The dataset contains the same year more than once.
    #[error("Duplicate year {year} in dataset: years must be unique")]
    DuplicateYear {
        /// The duplicated year.
        year: i32,
    },

    /// Unrecognized interpolation method selector.
    #[error("Unknown interpolation method '{name}': expected one of linear, cubic_spline, pchip, akima")]
    UnknownMethod {
        /// The unrecognized selector string.
        name: String,
    },

    /// Timeline step must be positive.
    #[error("Invalid timeline step {step}: must be positive")]
    InvalidStep {
        /// The rejected step.
        step: i32,
    },

    /// Timeline range is inverted.
    #[error("Invalid timeline range: start_year {start} is after end_year {end}")]
    InvalidRange {
        /// Requested start year.
        start: i32,
        /// Requested end year.
        end: i32,
    },

    /// Dataset document could not be parsed.
    #[error("Dataset error: {reason}")]
    Dataset {
        /// Description of the parse failure.
        reason: String,
    },

    /// Numerical error from the interpolation layer.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl ClimateError {
    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, got: usize) -> Self {
        Self::InsufficientData { required, got }
    }

    /// Creates a shape mismatch error.
    #[must_use]
    pub fn shape_mismatch(variable: impl Into<String>, expected: usize, got: usize) -> Self {
        Self::ShapeMismatch {
            variable: variable.into(),
            expected,
            got,
        }
    }

    /// Creates a duplicate year error.
    #[must_use]
    pub fn duplicate_year(year: i32) -> Self {
        Self::DuplicateYear { year }
    }

    /// Creates an unknown method error.
    #[must_use]
    pub fn unknown_method(name: impl Into<String>) -> Self {
        Self::UnknownMethod { name: name.into() }
    }

    /// Creates a dataset error.
    #[must_use]
    pub fn dataset(reason: impl Into<String>) -> Self {
        Self::Dataset {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClimateError::insufficient_data(2, 1);
        assert!(err.to_string().contains("at least 2"));

        let err = ClimateError::unknown_method("quintic");
        assert!(err.to_string().contains("quintic"));

        let err = ClimateError::duplicate_year(-20000);
        assert!(err.to_string().contains("-20000"));
    }

    #[test]
    fn test_math_error_propagates() {
        let math = MathError::insufficient_data(2, 0);
        let err: ClimateError = math.clone().into();
        assert_eq!(err.to_string(), math.to_string());
    }
}
