//! Estimate command - Estimate the cost of a trip.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::info;

use tabi_core::{CostBreakdown, CostEstimator, DisplayMode, OutputFormat, TripParameters};

use super::{load_table, print_structured, resolve_config};
use crate::receipt::Receipt;

#[derive(Args)]
pub struct EstimateArgs {
    /// Destination key (default, tokyo, osaka, nagoya, fukuoka, sapporo)
    #[arg(short, long, default_value = "default")]
    pub destination: String,

    /// Trip length in days, clamped to 1..=12
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    pub days: String,

    /// Number of travelers, clamped to 1..=10
    #[arg(short = 'n', long, default_value = "1", allow_hyphen_values = true)]
    pub travelers: String,

    /// Drink frequently
    #[arg(long)]
    pub drinking: bool,

    /// Travel in peak season
    #[arg(long)]
    pub peak: bool,

    /// Show flight and hotel figures as min ~ max
    #[arg(long)]
    pub range: bool,

    /// Output format (text, json, yaml)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Cost table file to use instead of the built-in table
    #[arg(long)]
    pub table: Option<PathBuf>,
}

/// Structured output of the estimate command.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EstimateReport {
    parameters: TripParameters,
    breakdown: CostBreakdown,
}

pub fn execute(args: EstimateArgs) -> Result<()> {
    let params = TripParameters::from_raw(&args.destination, &args.days, &args.travelers)
        .context("Invalid trip parameters")?
        .with_drinking(args.drinking)
        .with_peak_season(args.peak);

    let mut config = resolve_config(args.table, args.format);
    if args.range {
        config.display = DisplayMode::Range;
    }

    info!(
        "Estimating {} for {} day(s), {} traveler(s)",
        params.destination, params.total_days, params.traveler_count
    );

    let table = load_table(&config)?;
    let breakdown = CostEstimator::new(&table).estimate(&params);

    match config.output {
        OutputFormat::Text => {
            print!("{}", Receipt::new(&params, &breakdown, config.display));
        }
        format => {
            let report = EstimateReport {
                parameters: params,
                breakdown,
            };
            print_structured(&report, format)?;
        }
    }

    Ok(())
}
