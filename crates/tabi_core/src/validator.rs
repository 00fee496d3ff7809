//! Cost table validation.

use crate::estimator::{expense_days, paid_nights};
use crate::models::{CostRange, Destination, OccupancyTier};
use crate::params::MAX_DAYS;
use crate::table::CostTable;

/// Validation result with details.
#[derive(Debug)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn merge(&mut self, other: ValidationResult) {
        other.errors.into_iter().for_each(|e| self.add_error(e));
        self.warnings.extend(other.warnings);
    }
}

/// Validator for cost tables.
pub struct TableValidator;

impl TableValidator {
    /// Validate every band and fee of a table.
    pub fn validate(table: &CostTable) -> ValidationResult {
        let mut result = ValidationResult::new();

        for destination in Destination::ALL {
            result.merge(Self::validate_band(
                &format!("flights.{}", destination.key()),
                &table.flights.get(destination),
            ));
        }

        result.merge(Self::validate_band("hotels.solo", &table.hotels.solo));
        result.merge(Self::validate_band("hotels.pair", &table.hotels.pair));
        result.merge(Self::validate_band(
            "hotels.group_default",
            &table.hotels.group_default,
        ));

        if Self::worst_case_total(table).is_none() {
            result.add_error(format!(
                "Worst-case total for a {}-day trip overflows the supported amount range",
                MAX_DAYS
            ));
        }

        if table.fees.daily_food_short_trip > table.fees.daily_food_normal_trip {
            result.add_warning(format!(
                "Short-trip food allowance ({}) exceeds the normal allowance ({})",
                table.fees.daily_food_short_trip, table.fees.daily_food_normal_trip
            ));
        }

        result
    }

    /// Upper bound of any total the estimator can derive from `table`, or
    /// `None` if it does not fit in a `u64`.
    pub fn worst_case_total(table: &CostTable) -> Option<u64> {
        let fees = &table.fees;
        let peak = &table.surcharges.peak_season;

        let flight_max = Destination::ALL
            .into_iter()
            .map(|d| table.flight_band(d).max)
            .max()?;
        let hotel_max = [OccupancyTier::Solo, OccupancyTier::Pair, OccupancyTier::GroupDefault]
            .into_iter()
            .map(|tier| table.hotel_band(tier).max)
            .max()?;
        let food_max = fees.daily_food_short_trip.max(fees.daily_food_normal_trip);

        let daily_max = food_max
            .checked_add(table.surcharges.drinking.per_day)?
            .checked_add(fees.daily_transport)?
            .checked_add(fees.daily_miscellaneous)?;
        let nightly_max = hotel_max.checked_add(peak.per_day)?;

        flight_max
            .checked_add(peak.one_time)?
            .checked_add(fees.airport_transport)?
            .checked_add(fees.miscellaneous_allowance)?
            .checked_add(daily_max.checked_mul(u64::from(expense_days(MAX_DAYS)))?)?
            .checked_add(nightly_max.checked_mul(u64::from(paid_nights(MAX_DAYS)))?)
    }

    /// Validate a single price band.
    pub fn validate_band(name: &str, band: &CostRange) -> ValidationResult {
        let mut result = ValidationResult::new();

        if band.min > band.max {
            result.add_error(format!(
                "{} has min {} greater than max {}",
                name, band.min, band.max
            ));
            return result;
        }

        if !band.is_ordered() {
            result.add_error(format!(
                "{} has avg {} outside [{}, {}]",
                name, band.avg, band.min, band.max
            ));
        } else if band.avg != band.midpoint() {
            result.add_warning(format!(
                "{} avg {} differs from the midpoint {}",
                name,
                band.avg,
                band.midpoint()
            ));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        let result = TableValidator::validate(CostTable::standard());
        assert!(result.valid, "{:?}", result.errors);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    #[test]
    fn test_inverted_band_is_error() {
        let result = TableValidator::validate_band("x", &CostRange::new(10, 5, 7));
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("greater than max"));
    }

    #[test]
    fn test_avg_outside_band_is_error() {
        let mut table = *CostTable::standard();
        table.hotels.pair = CostRange::new(40_000, 80_000, 90_000);

        let result = TableValidator::validate(&table);
        assert!(!result.valid);
        assert!(result.errors[0].starts_with("hotels.pair"));
    }

    #[test]
    fn test_worst_case_total() {
        // sapporo max + peak + fees, 11 days of 110,000, 11 nights of 110,000
        let expected = 600_000 + 100_000 + 30_000 + 100_000 + 11 * 110_000 + 11 * 110_000;
        assert_eq!(TableValidator::worst_case_total(CostTable::standard()), Some(expected));
    }

    #[test]
    fn test_overflowing_amounts_are_error() {
        let mut table = *CostTable::standard();
        table.flights.tokyo = CostRange::new(u64::MAX - 10, u64::MAX, u64::MAX - 5);

        let result = TableValidator::validate(&table);
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("overflows")));

        let mut table = *CostTable::standard();
        table.hotels.solo = CostRange::flat(u64::MAX / 10);
        assert!(TableValidator::worst_case_total(&table).is_none());
        assert!(!TableValidator::validate(&table).valid);
    }

    #[test]
    fn test_merge_keeps_validity() {
        let mut result = ValidationResult::new();
        result.merge(ValidationResult::new());
        assert!(result.valid);

        let mut failing = ValidationResult::new();
        failing.add_error("bad");
        result.merge(failing);
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["bad".to_string()]);
        assert!(ValidationResult::default().valid);
    }

    #[test]
    fn test_skewed_avg_is_warning() {
        let mut table = *CostTable::standard();
        table.flights.tokyo = CostRange::new(200_000, 350_000, 300_000);
        table.fees.daily_food_short_trip = 60_000;

        let result = TableValidator::validate(&table);
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 2);
    }
}
