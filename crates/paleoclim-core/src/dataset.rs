//! Time period records and dataset loading.
//!
//! The reconstruction engine is fed by a `time_periods.json` document
//! holding sparse, irregularly-spaced snapshots of Earth's climate
//! state. Records need not be pre-sorted; duplicate years are rejected
//! at interpolator construction.

use serde::{Deserialize, Serialize};

use crate::error::{ClimateError, ClimateResult};

/// A known historical snapshot of Earth's climate state.
///
/// One knot per climate variable, keyed by year (0 = present,
/// negative = years before present). Descriptive fields are carried
/// through from the source dataset but play no part in interpolation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePeriod {
    /// Year (negative for past).
    pub year: i32,

    /// Human-readable period name (e.g. "Last Glacial Maximum").
    #[serde(default)]
    pub name: String,

    /// Longer description of the period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Geological epoch (e.g. "Pleistocene").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch: Option<String>,

    /// Geological era (e.g. "Cenozoic").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,

    /// Sea level relative to present, in meters.
    pub sea_level_m: f64,

    /// Global temperature anomaly relative to present, in Celsius.
    pub global_temp_c: f64,

    /// Percentage of Earth covered by ice.
    pub ice_coverage_pct: f64,

    /// Atmospheric CO2 in parts per million, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co2_ppm: Option<f64>,

    /// Key of the Earth texture associated with this period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture_key: Option<String>,

    /// Notable geological or climatic features of the period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notable_features: Option<Vec<String>>,
}

impl TimePeriod {
    /// Creates a bare time period with just the interpolated variables.
    #[must_use]
    pub fn new(year: i32, sea_level_m: f64, global_temp_c: f64, ice_coverage_pct: f64) -> Self {
        Self {
            year,
            name: String::new(),
            description: None,
            epoch: None,
            era: None,
            sea_level_m,
            global_temp_c,
            ice_coverage_pct,
            co2_ppm: None,
            texture_key: None,
            notable_features: None,
        }
    }

    /// Sets the CO2 concentration for this period.
    #[must_use]
    pub fn with_co2(mut self, co2_ppm: f64) -> Self {
        self.co2_ppm = Some(co2_ppm);
        self
    }
}

/// The `time_periods.json` dataset document.
///
/// Sibling arrays of the source document (geological events, land
/// bridges, ice sheets) are ignored here; only the time periods feed
/// the interpolation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimePeriodData {
    /// The known climate snapshots, in no particular order.
    #[serde(default)]
    pub time_periods: Vec<TimePeriod>,
}

impl TimePeriodData {
    /// Parses a dataset document from a JSON string.
    pub fn from_json_str(json: &str) -> ClimateResult<Self> {
        let data: Self =
            serde_json::from_str(json).map_err(|e| ClimateError::dataset(e.to_string()))?;
        log::debug!("loaded {} time periods", data.time_periods.len());
        Ok(data)
    }

    /// Parses a dataset document from a reader.
    pub fn from_reader(reader: impl std::io::Read) -> ClimateResult<Self> {
        let data: Self =
            serde_json::from_reader(reader).map_err(|e| ClimateError::dataset(e.to_string()))?;
        log::debug!("loaded {} time periods", data.time_periods.len());
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataset_document() {
        let json = r#"{
            "time_periods": [
                {
                    "year": 0,
                    "name": "Present Day",
                    "epoch": "Holocene",
                    "sea_level_m": 0.0,
                    "global_temp_c": 0.0,
                    "ice_coverage_pct": 10.0,
                    "co2_ppm": 415.0
                },
                {
                    "year": -20000,
                    "name": "Last Glacial Maximum",
                    "sea_level_m": -120.0,
                    "global_temp_c": -6.0,
                    "ice_coverage_pct": 30.0,
                    "co2_ppm": 190.0,
                    "notable_features": ["Bering land bridge exposed"]
                }
            ],
            "geological_events": [{"year": -74000, "name": "Toba eruption"}]
        }"#;

        let data = TimePeriodData::from_json_str(json).unwrap();
        assert_eq!(data.time_periods.len(), 2);
        assert_eq!(data.time_periods[0].year, 0);
        assert_eq!(data.time_periods[1].co2_ppm, Some(190.0));
        assert_eq!(data.time_periods[1].name, "Last Glacial Maximum");
    }

    #[test]
    fn test_parse_dataset_from_reader() {
        let json = br#"{
            "time_periods": [
                {"year": 0, "sea_level_m": 0.0, "global_temp_c": 0.0, "ice_coverage_pct": 10.0},
                {"year": -20000, "sea_level_m": -120.0, "global_temp_c": -6.0, "ice_coverage_pct": 30.0}
            ]
        }"#;

        let data = TimePeriodData::from_reader(std::io::Cursor::new(&json[..])).unwrap();
        assert_eq!(data.time_periods.len(), 2);
        assert_eq!(data.time_periods[1].year, -20000);

        let err = TimePeriodData::from_reader(std::io::Cursor::new(&b"{not json"[..])).unwrap_err();
        assert!(matches!(err, ClimateError::Dataset { .. }));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = TimePeriodData::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ClimateError::Dataset { .. }));
    }

    #[test]
    fn test_missing_time_periods_defaults_empty() {
        let data = TimePeriodData::from_json_str("{}").unwrap();
        assert!(data.time_periods.is_empty());
    }

    #[test]
    fn test_builder_helpers() {
        let period = TimePeriod::new(-20000, -120.0, -6.0, 30.0).with_co2(190.0);
        assert_eq!(period.year, -20000);
        assert_eq!(period.co2_ppm, Some(190.0));
    }
}
