//! Estimator output.

use serde::{Deserialize, Serialize};

use crate::models::{CostRange, OccupancyTier};

/// One-time costs paid regardless of trip length.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FixedCosts {
    pub flight: CostRange,
    /// Peak-season one-time surcharge, zero off-season.
    pub flight_premium: u64,
    pub airport_transport: u64,
    pub miscellaneous: u64,
    /// Average flight plus every flat fee.
    pub total: u64,
}

impl FixedCosts {
    /// Flight band with the premium applied, as shown on a receipt.
    pub fn flight_with_premium(&self) -> CostRange {
        self.flight.plus(self.flight_premium)
    }

    /// Flat amounts that carry no spread.
    pub fn flat_fees(&self) -> u64 {
        self.flight_premium + self.airport_transport + self.miscellaneous
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub tier: OccupancyTier,
    /// Nightly band with any peak surcharge folded in.
    pub daily_cost: CostRange,
    pub nights: u32,
    /// `daily_cost.avg * nights`.
    pub total_cost: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyExpenses {
    pub food: u64,
    pub drink: u64,
    pub transport: u64,
    pub miscellaneous: u64,
    /// Sum of the four per-day amounts.
    pub total: u64,
    pub days: u32,
    pub total_cost: u64,
}

/// Full cost breakdown for one set of trip parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub fixed_costs: FixedCosts,
    pub accommodation: Accommodation,
    pub daily_expenses: DailyExpenses,
    pub total_cost: CostRange,
}
