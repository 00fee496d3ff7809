//! Validate-table command - Check a custom cost table file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use tabi_core::{CostTable, EstimateError, TableValidator};

#[derive(Args)]
pub struct ValidateTableArgs {
    /// Path to the cost table file (TOML, YAML or JSON)
    pub path: PathBuf,
}

pub fn execute(args: ValidateTableArgs) -> Result<()> {
    info!("Validating cost table: {}", args.path.display());

    let table = CostTable::parse_file(&args.path)
        .with_context(|| format!("Failed to read cost table {}", args.path.display()))?;
    let result = TableValidator::validate(&table);

    for warning in &result.warnings {
        println!("   ⚠️  {}", warning);
    }

    if result.valid {
        println!("✅ Cost table is valid");
        Ok(())
    } else {
        println!("❌ Cost table has errors:");
        for error in &result.errors {
            println!("      - {}", error);
        }
        let count = result.errors.len();
        Err(EstimateError::InvalidTable(result.errors.join("; ")))
            .with_context(|| format!("Cost table validation failed with {} error(s)", count))
    }
}
