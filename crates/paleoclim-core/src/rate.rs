//! Rate-of-change value types.

use serde::{Deserialize, Serialize};

use crate::state::round_to;

/// Instantaneous rate of change of the climate variables, per year.
///
/// Produced by `ClimateInterpolator::rate_of_change`. Callers may
/// rescale to any period; [`Self::per_century`] provides the per-100
/// -year presentation the reconstruction API reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateOfChange {
    /// Year the rate was evaluated at.
    pub year: i32,

    /// Sea level change in meters per year.
    pub sea_level_m_per_year: f64,

    /// Temperature change in Celsius per year.
    pub temp_c_per_year: f64,

    /// Ice coverage change in percentage points per year.
    pub ice_pct_per_year: f64,
}

impl RateOfChange {
    /// Rescales the per-year rates to per-century, rounded to 4
    /// decimal places.
    #[must_use]
    pub fn per_century(&self) -> CenturyRates {
        CenturyRates {
            year: self.year,
            sea_level_m_per_century: round_to(self.sea_level_m_per_year * 100.0, 4),
            temp_c_per_century: round_to(self.temp_c_per_year * 100.0, 4),
            ice_pct_per_century: round_to(self.ice_pct_per_year * 100.0, 4),
        }
    }
}

/// Rate of change rescaled to a century, for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenturyRates {
    /// Year the rate was evaluated at.
    pub year: i32,

    /// Sea level change in meters per century.
    pub sea_level_m_per_century: f64,

    /// Temperature change in Celsius per century.
    pub temp_c_per_century: f64,

    /// Ice coverage change in percentage points per century.
    pub ice_pct_per_century: f64,
}
