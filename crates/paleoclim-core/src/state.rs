//! Climate state value type.

use serde::{Deserialize, Serialize};

/// Earth's climate state at a point in time.
///
/// Produced fresh on every query; immutable value type. Sea level and
/// temperature are anomalies relative to present. `ice_coverage_pct`
/// is always within [0, 100] and `co2_ppm`, when present, is >= 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateState {
    /// Year (0 = present, negative = years before present).
    pub year: i32,

    /// Sea level relative to present, in meters.
    pub sea_level_m: f64,

    /// Global temperature anomaly relative to present, in Celsius.
    pub global_temp_c: f64,

    /// Percentage of Earth covered by ice, in [0, 100].
    pub ice_coverage_pct: f64,

    /// Atmospheric CO2 in parts per million. Absent when the source
    /// dataset did not supply CO2 for every time period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co2_ppm: Option<f64>,
}

/// Rounds a value to a fixed number of decimal places.
///
/// Presentation stability: interpolated outputs are rounded so repeated
/// queries serialize identically.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
