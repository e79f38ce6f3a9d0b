//! Timeline sampling across a year range.

use crate::error::{ClimateError, ClimateResult};
use crate::interpolator::ClimateInterpolator;
use crate::state::ClimateState;

impl ClimateInterpolator {
    /// Samples interpolated climate states across `[start_year,
    /// end_year]` at a fixed step.
    ///
    /// The first sample is at `start_year` and sampling continues while
    /// the year is <= `end_year`. Years outside the dataset saturate to
    /// the boundary like any other query. Limiting the sample count is
    /// the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::InvalidStep`] for a non-positive step
    /// and [`ClimateError::InvalidRange`] when `start_year` is after
    /// `end_year`.
    pub fn timeline(
        &self,
        start_year: i32,
        end_year: i32,
        step: i32,
    ) -> ClimateResult<Vec<ClimateState>> {
        if step <= 0 {
            return Err(ClimateError::InvalidStep { step });
        }
        if start_year > end_year {
            return Err(ClimateError::InvalidRange {
                start: start_year,
                end: end_year,
            });
        }

        // Widen to i64: a full i32 year range overflows both the
        // sample count and the `year + step` increment.
        let end = i64::from(end_year);
        let step = i64::from(step);
        let samples = (end - i64::from(start_year)) / step + 1;

        let mut timeline = Vec::with_capacity(usize::try_from(samples).unwrap_or(0));
        let mut year = i64::from(start_year);
        while year <= end {
            timeline.push(self.interpolate(year as i32));
            year += step;
        }

        Ok(timeline)
    }
}
