//! Destinations command - List supported destinations.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use tabi_core::{CostRange, Destination, OutputFormat};

use super::{load_table, print_structured, resolve_config};
use crate::receipt::format_won;

#[derive(Args)]
pub struct DestinationsArgs {
    /// Output format (text, json, yaml)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Cost table file to read flight bands from
    #[arg(long)]
    table: Option<PathBuf>,
}

#[derive(Serialize)]
struct DestinationEntry {
    key: &'static str,
    label: &'static str,
    flight: CostRange,
}

pub fn execute(args: DestinationsArgs) -> Result<()> {
    let config = resolve_config(args.table, args.format);
    let table = load_table(&config)?;

    let entries: Vec<DestinationEntry> = Destination::ALL
        .into_iter()
        .map(|destination| DestinationEntry {
            key: destination.key(),
            label: destination.label(),
            flight: table.flight_band(destination),
        })
        .collect();

    if config.output != OutputFormat::Text {
        return print_structured(&entries, config.output);
    }

    for entry in &entries {
        println!(
            "{:<8} {}  항공권 {} ~ {} (평균 {})",
            entry.key,
            entry.label,
            format_won(entry.flight.min),
            format_won(entry.flight.max),
            format_won(entry.flight.avg)
        );
    }

    Ok(())
}
