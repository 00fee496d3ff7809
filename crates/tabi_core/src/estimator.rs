//! Cost derivation.
//!
//! Arrival and departure are collapsed into one travel day, so a trip of
//! `n > 1` days pays for `n - 1` nights and `n - 1` days of local spending.
//! A same-day trip pays for no night but still spends one day locally.

use tracing::debug;

use crate::breakdown::{Accommodation, CostBreakdown, DailyExpenses, FixedCosts};
use crate::models::{CostRange, OccupancyTier};
use crate::params::TripParameters;
use crate::table::CostTable;

/// Nights billed for a trip of `total_days` days.
pub fn paid_nights(total_days: u32) -> u32 {
    if total_days <= 1 {
        0
    } else {
        total_days - 1
    }
}

/// Days over which daily expenses are multiplied.
pub fn expense_days(total_days: u32) -> u32 {
    if total_days <= 1 {
        1
    } else {
        total_days - 1
    }
}

/// Estimate against the built-in cost table.
pub fn estimate(params: &TripParameters) -> CostBreakdown {
    CostEstimator::standard().estimate(params)
}

/// Estimator bound to a cost table.
#[derive(Debug, Clone, Copy)]
pub struct CostEstimator<'a> {
    table: &'a CostTable,
}

impl CostEstimator<'static> {
    pub fn standard() -> Self {
        Self::new(CostTable::standard())
    }
}

impl<'a> CostEstimator<'a> {
    /// Bind to `table`. Tables from [`CostTable::from_path`] are validated;
    /// hand-built tables should pass [`crate::TableValidator`] first so no
    /// total can overflow.
    pub fn new(table: &'a CostTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a CostTable {
        self.table
    }

    /// Derive the full breakdown. Counts are clamped first, so this never fails.
    pub fn estimate(&self, params: &TripParameters) -> CostBreakdown {
        let params = params.clamped();
        let table = self.table;

        let tier = OccupancyTier::for_travelers(params.traveler_count);
        let nightly = table.hotel_band(tier);
        let flight = table.flight_band(params.destination);

        let fixed_costs = self.fixed_costs(flight, params.peak_season);
        let accommodation = self.accommodation(tier, nightly, &params);
        let daily_expenses = self.daily_expenses(&params);

        let spread_base = fixed_costs.flat_fees() + daily_expenses.total_cost;
        let nights = u64::from(accommodation.nights);
        let total_cost = CostRange::new(
            fixed_costs.flight.min + spread_base + accommodation.daily_cost.min * nights,
            fixed_costs.flight.max + spread_base + accommodation.daily_cost.max * nights,
            fixed_costs.total + daily_expenses.total_cost + accommodation.total_cost,
        );

        debug!(
            destination = %params.destination,
            days = params.total_days,
            travelers = params.traveler_count,
            tier = %tier,
            avg = total_cost.avg,
            "Estimated trip cost"
        );

        CostBreakdown {
            fixed_costs,
            accommodation,
            daily_expenses,
            total_cost,
        }
    }

    fn fixed_costs(&self, flight: CostRange, peak_season: bool) -> FixedCosts {
        let fees = &self.table.fees;
        let flight_premium = if peak_season {
            self.table.surcharges.peak_season.one_time
        } else {
            0
        };

        FixedCosts {
            flight,
            flight_premium,
            airport_transport: fees.airport_transport,
            miscellaneous: fees.miscellaneous_allowance,
            total: flight.avg + flight_premium + fees.airport_transport + fees.miscellaneous_allowance,
        }
    }

    fn accommodation(&self, tier: OccupancyTier, nightly: CostRange, params: &TripParameters) -> Accommodation {
        let peak_per_night = if params.peak_season {
            self.table.surcharges.peak_season.per_day
        } else {
            0
        };
        let daily_cost = nightly.plus(peak_per_night);
        let nights = paid_nights(params.total_days);

        Accommodation {
            tier,
            daily_cost,
            nights,
            total_cost: daily_cost.avg * u64::from(nights),
        }
    }

    fn daily_expenses(&self, params: &TripParameters) -> DailyExpenses {
        let fees = &self.table.fees;
        let food = self.table.daily_food_cost(params.total_days);
        let drink = if params.frequent_drinking {
            self.table.surcharges.drinking.per_day
        } else {
            0
        };
        let total = food + drink + fees.daily_transport + fees.daily_miscellaneous;
        let days = expense_days(params.total_days);

        DailyExpenses {
            food,
            drink,
            transport: fees.daily_transport,
            miscellaneous: fees.daily_miscellaneous,
            total,
            days,
            total_cost: total * u64::from(days),
        }
    }
}
