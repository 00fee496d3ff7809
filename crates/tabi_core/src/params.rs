//! Trip parameters and input clamping.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EstimateError, EstimateResult};
use crate::models::Destination;

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 12;
pub const MIN_TRAVELERS: u32 = 1;
pub const MAX_TRAVELERS: u32 = 10;

/// Everything the estimator needs to know about a trip.
///
/// Fields are public so callers can build values directly; the estimator
/// clamps counts again before using them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TripParameters {
    pub destination: Destination,
    pub total_days: u32,
    pub traveler_count: u32,
    #[serde(default)]
    pub frequent_drinking: bool,
    #[serde(default)]
    pub peak_season: bool,
}

impl Default for TripParameters {
    fn default() -> Self {
        Self {
            destination: Destination::Other,
            total_days: MIN_DAYS,
            traveler_count: MIN_TRAVELERS,
            frequent_drinking: false,
            peak_season: false,
        }
    }
}

impl TripParameters {
    /// Create parameters, clamping days to [1, 12] and travelers to [1, 10].
    pub fn new(destination: Destination, total_days: i64, traveler_count: i64) -> Self {
        Self {
            destination,
            total_days: clamp_count("days", total_days, MIN_DAYS, MAX_DAYS),
            traveler_count: clamp_count("travelers", traveler_count, MIN_TRAVELERS, MAX_TRAVELERS),
            frequent_drinking: false,
            peak_season: false,
        }
    }

    /// Build parameters from unparsed text, as typed by a user.
    ///
    /// Unknown destinations and non-integer counts are errors; integer
    /// counts outside their range are clamped.
    pub fn from_raw(destination: &str, total_days: &str, traveler_count: &str) -> EstimateResult<Self> {
        let destination: Destination = destination.parse()?;
        let days = parse_count("days", total_days)?;
        let travelers = parse_count("travelers", traveler_count)?;
        Ok(Self::new(destination, days, travelers))
    }

    pub fn with_drinking(mut self, frequent_drinking: bool) -> Self {
        self.frequent_drinking = frequent_drinking;
        self
    }

    pub fn with_peak_season(mut self, peak_season: bool) -> Self {
        self.peak_season = peak_season;
        self
    }

    /// Copy with both counts forced into range.
    pub fn clamped(self) -> Self {
        Self {
            total_days: clamp_count("days", i64::from(self.total_days), MIN_DAYS, MAX_DAYS),
            traveler_count: clamp_count(
                "travelers",
                i64::from(self.traveler_count),
                MIN_TRAVELERS,
                MAX_TRAVELERS,
            ),
            ..self
        }
    }
}

/// Parse a whole-number count, tolerating surrounding whitespace.
pub fn parse_count(field: &'static str, raw: &str) -> EstimateResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| EstimateError::InvalidCount {
            field,
            value: raw.to_string(),
        })
}

fn clamp_count(field: &str, value: i64, min: u32, max: u32) -> u32 {
    let clamped = value.clamp(i64::from(min), i64::from(max));
    if clamped != value {
        warn!("{} {} out of range, clamped to {}", field, value, clamped);
    }
    // in [min, max] so the cast cannot truncate
    clamped as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_counts() {
        let params = TripParameters::new(Destination::Osaka, 30, 0);
        assert_eq!(params.total_days, MAX_DAYS);
        assert_eq!(params.traveler_count, MIN_TRAVELERS);

        let params = TripParameters::new(Destination::Osaka, -4, 11);
        assert_eq!(params.total_days, MIN_DAYS);
        assert_eq!(params.traveler_count, MAX_TRAVELERS);
    }

    #[test]
    fn test_from_raw() {
        let params = TripParameters::from_raw("Tokyo", " 4 ", "2").unwrap();
        assert_eq!(params.destination, Destination::Tokyo);
        assert_eq!(params.total_days, 4);
        assert_eq!(params.traveler_count, 2);
        assert!(!params.frequent_drinking);
        assert!(!params.peak_season);
    }

    #[test]
    fn test_from_raw_rejects_bad_input() {
        let err = TripParameters::from_raw("tokyo", "2.5", "1").unwrap_err();
        assert!(matches!(err, EstimateError::InvalidCount { field: "days", .. }));

        let err = TripParameters::from_raw("tokyo", "3", "").unwrap_err();
        assert!(matches!(err, EstimateError::InvalidCount { field: "travelers", .. }));

        let err = TripParameters::from_raw("seoul", "3", "1").unwrap_err();
        assert!(matches!(err, EstimateError::UnknownDestination(_)));
    }

    #[test]
    fn test_clamped_repairs_direct_construction() {
        let params = TripParameters {
            total_days: 0,
            traveler_count: 99,
            ..TripParameters::default()
        }
        .clamped();
        assert_eq!(params.total_days, 1);
        assert_eq!(params.traveler_count, 10);
    }

    #[test]
    fn test_builder_flags() {
        let params = TripParameters::new(Destination::Nagoya, 5, 3)
            .with_drinking(true)
            .with_peak_season(true);
        assert!(params.frequent_drinking);
        assert!(params.peak_season);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_string(&TripParameters::default()).unwrap();
        assert!(json.contains("\"totalDays\":1"));
        assert!(json.contains("\"destination\":\"default\""));
    }
}
