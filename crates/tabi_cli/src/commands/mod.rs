//! CLI command definitions.
//!
//! This module defines the command structure for the tabi CLI.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use tabi_core::{CostTable, EstimatorConfig, OutputFormat};

pub mod destinations;
pub mod estimate;
pub mod table;
pub mod validate_table;

/// tabi - Japan trip cost estimator
#[derive(Parser)]
#[command(name = "tabi")]
#[command(version, about = "tabi - per-person cost estimates for short trips to Japan")]
#[command(long_about = r#"
tabi estimates the per-person cost of a short trip to Japan from the
destination, trip length, traveler count, and two options (frequent
drinking, peak-season travel).

COMMANDS:
  estimate        → Estimate trip cost and print a receipt
  destinations    → List destinations and their flight bands
  table           → Print the active cost table
  validate-table  → Check a custom cost table file

ENVIRONMENT:
  TABI_COST_TABLE  Cost table file (TOML, YAML or JSON)
  TABI_DISPLAY     average | range
  TABI_OUTPUT      text | json | yaml

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the cost of a trip
    Estimate(estimate::EstimateArgs),

    /// List supported destinations
    Destinations(destinations::DestinationsArgs),

    /// Print the active cost table
    Table(table::TableArgs),

    /// Validate a cost table file
    #[command(name = "validate-table")]
    ValidateTable(validate_table::ValidateTableArgs),
}

/// Environment configuration with command-line overrides applied.
pub(crate) fn resolve_config(table: Option<PathBuf>, format: Option<OutputFormat>) -> EstimatorConfig {
    let mut config = EstimatorConfig::from_env();
    if let Some(path) = table {
        config.table_path = Some(path);
    }
    if let Some(format) = format {
        config.output = format;
    }
    config
}

pub(crate) fn load_table(config: &EstimatorConfig) -> Result<CostTable> {
    let table = config.load_table();
    match &config.table_path {
        Some(path) => table.with_context(|| format!("Failed to load cost table {}", path.display())),
        None => Ok(table?),
    }
}

/// Print a value as JSON or YAML.
pub(crate) fn print_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to serialize result")?,
        _ => serde_json::to_string_pretty(value).context("Failed to serialize result")?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_estimate_command() {
        let cli = Cli::try_parse_from([
            "tabi", "estimate", "-d", "sapporo", "--days", "3", "-n", "2", "--drinking", "--peak", "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Estimate(args) => {
                assert_eq!(args.destination, "sapporo");
                assert_eq!(args.days, "3");
                assert_eq!(args.travelers, "2");
                assert!(args.drinking);
                assert!(args.peak);
                assert_eq!(args.format, Some(OutputFormat::Json));
            }
            _ => panic!("expected estimate command"),
        }
    }

    #[test]
    fn test_negative_days_reach_clamping() {
        let cli = Cli::try_parse_from(["tabi", "estimate", "--days", "-3"]).unwrap();
        match cli.command {
            Commands::Estimate(args) => assert_eq!(args.days, "-3"),
            _ => panic!("expected estimate command"),
        }
    }

    #[test]
    fn test_resolve_config_overrides() {
        let config = resolve_config(Some(PathBuf::from("custom.toml")), Some(OutputFormat::Yaml));
        assert_eq!(config.table_path, Some(PathBuf::from("custom.toml")));
        assert_eq!(config.output, OutputFormat::Yaml);
    }
}
