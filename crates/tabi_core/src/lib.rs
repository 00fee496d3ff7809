//! # tabi_core
//!
//! Per-person cost estimation for short trips to Japan.
//!
//! This crate provides:
//! - **Cost Table**: destination fares, nightly hotel bands, option surcharges
//!   and flat fees, built in or loaded from TOML/YAML/JSON
//! - **Estimator**: a pure mapping from [`TripParameters`] to a [`CostBreakdown`]
//! - **Validation**: sanity checks for custom cost tables
//!
//! ## Example
//!
//! ```rust
//! use tabi_core::{estimate, Destination, TripParameters};
//!
//! let params = TripParameters::new(Destination::Sapporo, 3, 2)
//!     .with_drinking(true)
//!     .with_peak_season(true);
//!
//! let breakdown = estimate(&params);
//! assert_eq!(breakdown.accommodation.nights, 2);
//! assert_eq!(breakdown.total_cost.avg, 1_040_000);
//! ```

pub mod breakdown;
pub mod config;
pub mod error;
pub mod estimator;
pub mod models;
pub mod params;
pub mod table;
pub mod validator;

pub use breakdown::{Accommodation, CostBreakdown, DailyExpenses, FixedCosts};
pub use config::{DisplayMode, EstimatorConfig, OutputFormat};
pub use error::{EstimateError, EstimateResult};
pub use estimator::{estimate, expense_days, paid_nights, CostEstimator};
pub use models::{CostRange, Destination, OccupancyTier};
pub use params::{TripParameters, MAX_DAYS, MAX_TRAVELERS, MIN_DAYS, MIN_TRAVELERS};
pub use table::CostTable;
pub use validator::{TableValidator, ValidationResult};
