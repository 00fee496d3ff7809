//! Core value types shared by the table and the estimator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;

/// An amount in Korean Won with a min/max spread and a representative average.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct CostRange {
    pub min: u64,
    pub max: u64,
    pub avg: u64,
}

impl CostRange {
    /// Create a range from its bounds and average.
    pub const fn new(min: u64, max: u64, avg: u64) -> Self {
        Self { min, max, avg }
    }

    /// A range without spread.
    pub const fn flat(amount: u64) -> Self {
        Self::new(amount, amount, amount)
    }

    /// Add the same amount to every value.
    pub const fn plus(self, amount: u64) -> Self {
        Self::new(self.min + amount, self.max + amount, self.avg + amount)
    }

    /// Multiply every value by `factor`.
    pub const fn times(self, factor: u64) -> Self {
        Self::new(self.min * factor, self.max * factor, self.avg * factor)
    }

    /// Arithmetic mean of the bounds, rounded down.
    pub const fn midpoint(&self) -> u64 {
        self.min + (self.max - self.min) / 2
    }

    /// Whether `min <= avg <= max`.
    pub const fn is_ordered(&self) -> bool {
        self.min <= self.avg && self.avg <= self.max
    }
}

/// Supported destinations.
///
/// `Other` is the catch-all band and uses the key `default`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    #[default]
    #[serde(rename = "default", alias = "other")]
    Other,
    Tokyo,
    Osaka,
    Nagoya,
    Fukuoka,
    Sapporo,
}

impl Destination {
    /// Every destination in listing order.
    pub const ALL: [Destination; 6] = [
        Destination::Other,
        Destination::Tokyo,
        Destination::Osaka,
        Destination::Nagoya,
        Destination::Fukuoka,
        Destination::Sapporo,
    ];

    /// Stable key used on the command line and in table files.
    pub fn key(&self) -> &'static str {
        match self {
            Destination::Other => "default",
            Destination::Tokyo => "tokyo",
            Destination::Osaka => "osaka",
            Destination::Nagoya => "nagoya",
            Destination::Fukuoka => "fukuoka",
            Destination::Sapporo => "sapporo",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Destination::Other => "기타",
            Destination::Tokyo => "도쿄",
            Destination::Osaka => "오사카",
            Destination::Nagoya => "나고야",
            Destination::Fukuoka => "후쿠오카",
            Destination::Sapporo => "삿포로",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Destination {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if key == "other" {
            return Ok(Destination::Other);
        }
        Destination::ALL
            .into_iter()
            .find(|d| d.key() == key)
            .ok_or_else(|| EstimateError::UnknownDestination(s.to_string()))
    }
}

/// Room-sharing bucket used to pick the nightly hotel band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyTier {
    Solo,
    Pair,
    GroupDefault,
}

impl OccupancyTier {
    /// One traveler is solo, two share a room, everything else uses the
    /// group band.
    pub fn for_travelers(traveler_count: u32) -> Self {
        match traveler_count {
            1 => OccupancyTier::Solo,
            2 => OccupancyTier::Pair,
            _ => OccupancyTier::GroupDefault,
        }
    }
}

impl fmt::Display for OccupancyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccupancyTier::Solo => write!(f, "solo"),
            OccupancyTier::Pair => write!(f, "pair"),
            OccupancyTier::GroupDefault => write!(f, "group"),
        }
    }
}
