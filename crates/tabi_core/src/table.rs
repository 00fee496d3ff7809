//! Cost table: destination fares, nightly hotel bands, option surcharges and
//! flat fees.
//!
//! The standard table is compiled in. Alternative tables can be loaded from
//! TOML, YAML or JSON files; a loaded table must pass [`TableValidator`]
//! before it is handed out.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{EstimateError, EstimateResult};
use crate::models::{CostRange, Destination, OccupancyTier};
use crate::validator::TableValidator;

/// Round-trip flight band per destination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DestinationFares {
    #[serde(rename = "default")]
    pub other: CostRange,
    pub tokyo: CostRange,
    pub osaka: CostRange,
    pub nagoya: CostRange,
    pub fukuoka: CostRange,
    pub sapporo: CostRange,
}

impl DestinationFares {
    pub fn get(&self, destination: Destination) -> CostRange {
        match destination {
            Destination::Other => self.other,
            Destination::Tokyo => self.tokyo,
            Destination::Osaka => self.osaka,
            Destination::Nagoya => self.nagoya,
            Destination::Fukuoka => self.fukuoka,
            Destination::Sapporo => self.sapporo,
        }
    }
}

/// Nightly hotel band per person, by occupancy tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotelRates {
    pub solo: CostRange,
    pub pair: CostRange,
    pub group_default: CostRange,
}

impl HotelRates {
    pub fn get(&self, tier: OccupancyTier) -> CostRange {
        match tier {
            OccupancyTier::Solo => self.solo,
            OccupancyTier::Pair => self.pair,
            OccupancyTier::GroupDefault => self.group_default,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrinkingSurcharge {
    pub per_day: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeakSeasonSurcharge {
    /// Added to each paid night.
    pub per_day: u64,
    /// Added once to the flight bucket.
    pub one_time: u64,
}

/// Surcharges for the optional trip flags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionSurcharges {
    pub drinking: DrinkingSurcharge,
    pub peak_season: PeakSeasonSurcharge,
}

/// Flat fees that do not depend on destination or occupancy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixedFees {
    /// Airport to city round trip.
    pub airport_transport: u64,
    /// Shopping and contingency, once per trip.
    pub miscellaneous_allowance: u64,
    pub daily_transport: u64,
    /// Water and snacks, per expense day.
    pub daily_miscellaneous: u64,
    pub daily_food_short_trip: u64,
    pub daily_food_normal_trip: u64,
}

/// Complete set of prices the estimator reads from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CostTable {
    pub flights: DestinationFares,
    pub hotels: HotelRates,
    pub surcharges: OptionSurcharges,
    pub fees: FixedFees,
}

static STANDARD: CostTable = CostTable {
    flights: DestinationFares {
        other: CostRange::new(150_000, 350_000, 250_000),
        tokyo: CostRange::new(200_000, 350_000, 275_000),
        osaka: CostRange::new(150_000, 300_000, 225_000),
        nagoya: CostRange::new(150_000, 350_000, 250_000),
        fukuoka: CostRange::new(150_000, 300_000, 225_000),
        sapporo: CostRange::new(300_000, 600_000, 450_000),
    },
    hotels: HotelRates {
        solo: CostRange::new(50_000, 100_000, 75_000),
        pair: CostRange::new(40_000, 80_000, 60_000),
        group_default: CostRange::new(40_000, 60_000, 50_000),
    },
    surcharges: OptionSurcharges {
        drinking: DrinkingSurcharge { per_day: 30_000 },
        peak_season: PeakSeasonSurcharge {
            per_day: 10_000,
            one_time: 100_000,
        },
    },
    fees: FixedFees {
        airport_transport: 30_000,
        miscellaneous_allowance: 100_000,
        daily_transport: 15_000,
        daily_miscellaneous: 15_000,
        daily_food_short_trip: 30_000,
        daily_food_normal_trip: 50_000,
    },
};

impl Default for CostTable {
    fn default() -> Self {
        STANDARD
    }
}

impl CostTable {
    /// The built-in table.
    pub fn standard() -> &'static CostTable {
        &STANDARD
    }

    /// Load a table from a `.toml`, `.yaml`/`.yml` or `.json` file.
    ///
    /// Fails with [`EstimateError::InvalidTable`] if the table has
    /// validation errors; warnings are logged.
    pub fn from_path(path: impl AsRef<Path>) -> EstimateResult<Self> {
        let path = path.as_ref();
        let table = Self::parse_file(path)?;

        let result = TableValidator::validate(&table);
        for warning in &result.warnings {
            warn!("{}: {}", path.display(), warning);
        }
        if !result.valid {
            return Err(EstimateError::InvalidTable(result.errors.join("; ")));
        }

        Ok(table)
    }

    /// Read and deserialize a table file without validating it.
    pub fn parse_file(path: impl AsRef<Path>) -> EstimateResult<Self> {
        let path = path.as_ref();
        debug!("Loading cost table from {:?}", path);

        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let content = fs::read_to_string(path)?;
        let table: CostTable = match extension.as_str() {
            "toml" => toml::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            _ => return Err(EstimateError::UnsupportedFormat(path.to_path_buf())),
        };

        Ok(table)
    }

    /// Flight band for a destination.
    pub fn flight_band(&self, destination: Destination) -> CostRange {
        self.flights.get(destination)
    }

    /// Nightly hotel band for an occupancy tier.
    pub fn hotel_band(&self, tier: OccupancyTier) -> CostRange {
        self.hotels.get(tier)
    }

    /// Per-day food allowance: a same-day trip gets the reduced allowance.
    pub fn daily_food_cost(&self, total_days: u32) -> u64 {
        if total_days == 1 {
            self.fees.daily_food_short_trip
        } else {
            self.fees.daily_food_normal_trip
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_values() {
        let table = CostTable::standard();
        assert_eq!(
            table.flight_band(Destination::Tokyo),
            CostRange::new(200_000, 350_000, 275_000)
        );
        assert_eq!(
            table.flight_band(Destination::Sapporo),
            CostRange::new(300_000, 600_000, 450_000)
        );
        assert_eq!(table.hotel_band(OccupancyTier::Pair).avg, 60_000);
        assert_eq!(table.surcharges.peak_season.one_time, 100_000);
        assert_eq!(table.fees.daily_miscellaneous, 15_000);
        assert_eq!(*table, CostTable::default());
    }

    #[test]
    fn test_standard_flight_avg_is_midpoint() {
        let table = CostTable::standard();
        for destination in Destination::ALL {
            let band = table.flight_band(destination);
            assert_eq!(band.avg, band.midpoint(), "{}", destination);
        }
    }

    #[test]
    fn test_daily_food_cost_step() {
        let table = CostTable::standard();
        assert_eq!(table.daily_food_cost(1), 30_000);
        assert_eq!(table.daily_food_cost(2), 50_000);
        assert_eq!(table.daily_food_cost(12), 50_000);
    }

    #[test]
    fn test_toml_shape_matches_standard() {
        let encoded = toml::to_string(CostTable::standard()).unwrap();
        assert!(encoded.contains("group_default"));
        assert!(encoded.contains("one_time = 100000"));
        let decoded: CostTable = toml::from_str(&encoded).unwrap();
        assert_eq!(&decoded, CostTable::standard());
    }
}
