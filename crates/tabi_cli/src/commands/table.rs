//! Table command - Print the active cost table.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use tabi_core::{CostRange, CostTable, Destination, OutputFormat};

use super::{load_table, print_structured, resolve_config};
use crate::receipt::format_won;

#[derive(Args)]
pub struct TableArgs {
    /// Output format (text, json, yaml)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Cost table file to print instead of the built-in table
    #[arg(long)]
    table: Option<PathBuf>,
}

pub fn execute(args: TableArgs) -> Result<()> {
    let config = resolve_config(args.table, args.format);
    let table = load_table(&config)?;

    match config.output {
        OutputFormat::Text => print_text(&table),
        format => print_structured(&table, format)?,
    }

    Ok(())
}

fn band(band: CostRange) -> String {
    format!(
        "{} ~ {} (평균 {})",
        format_won(band.min),
        format_won(band.max),
        format_won(band.avg)
    )
}

fn print_text(table: &CostTable) {
    println!("항공권 (왕복)");
    for destination in Destination::ALL {
        println!("  {:<8} {}", destination.key(), band(table.flight_band(destination)));
    }

    println!("숙박 (1박, 1인)");
    println!("  solo     {}", band(table.hotels.solo));
    println!("  pair     {}", band(table.hotels.pair));
    println!("  group    {}", band(table.hotels.group_default));

    println!("옵션");
    println!("  음주 (1일): {}", format_won(table.surcharges.drinking.per_day));
    println!("  성수기 (1박): {}", format_won(table.surcharges.peak_season.per_day));
    println!("  성수기 항공권: {}", format_won(table.surcharges.peak_season.one_time));

    let fees = &table.fees;
    println!("고정 비용");
    println!("  공항 왕복 교통비: {}", format_won(fees.airport_transport));
    println!("  기타 비용: {}", format_won(fees.miscellaneous_allowance));
    println!("  일일 교통비: {}", format_won(fees.daily_transport));
    println!("  일일 추가 비용: {}", format_won(fees.daily_miscellaneous));
    println!("  식비 (당일치기): {}", format_won(fees.daily_food_short_trip));
    println!("  식비 (1일): {}", format_won(fees.daily_food_normal_trip));
}
