//! Runtime configuration for callers of the estimator.
//!
//! Values come from environment variables; command-line flags layered on top
//! by the caller take precedence.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::EstimateResult;
use crate::table::CostTable;

pub const ENV_COST_TABLE: &str = "TABI_COST_TABLE";
pub const ENV_DISPLAY: &str = "TABI_DISPLAY";
pub const ENV_OUTPUT: &str = "TABI_OUTPUT";

/// How figures with a spread are displayed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Average,
    Range,
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "average" | "avg" => Ok(DisplayMode::Average),
            "range" => Ok(DisplayMode::Range),
            other => Err(format!("unknown display mode '{}'", other)),
        }
    }
}

/// Rendering format for results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Estimator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EstimatorConfig {
    /// Cost table file to use instead of the built-in table
    pub table_path: Option<PathBuf>,
    /// Range or average display
    pub display: DisplayMode,
    /// Output format
    pub output: OutputFormat,
}

impl EstimatorConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source. Unparseable values keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_COST_TABLE).filter(|p| !p.trim().is_empty()) {
            config.table_path = Some(PathBuf::from(path));
        }

        if let Some(display) = lookup(ENV_DISPLAY) {
            match display.parse() {
                Ok(mode) => config.display = mode,
                Err(e) => warn!("Ignoring {}: {}", ENV_DISPLAY, e),
            }
        }

        if let Some(output) = lookup(ENV_OUTPUT) {
            match output.parse() {
                Ok(format) => config.output = format,
                Err(e) => warn!("Ignoring {}: {}", ENV_OUTPUT, e),
            }
        }

        config
    }

    /// The configured cost table, or the built-in one.
    pub fn load_table(&self) -> EstimateResult<CostTable> {
        match &self.table_path {
            Some(path) => CostTable::from_path(path),
            None => {
                debug!("Using standard cost table");
                Ok(*CostTable::standard())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = EstimatorConfig::from_lookup(|_| None);
        assert_eq!(config, EstimatorConfig::default());
        assert_eq!(config.display, DisplayMode::Average);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.load_table().unwrap(), *CostTable::standard());
    }

    #[test]
    fn test_config_from_vars() {
        let config = EstimatorConfig::from_lookup(lookup_from(&[
            (ENV_COST_TABLE, "/etc/tabi/table.toml"),
            (ENV_DISPLAY, "Range"),
            (ENV_OUTPUT, "yml"),
        ]));
        assert_eq!(config.table_path, Some(PathBuf::from("/etc/tabi/table.toml")));
        assert_eq!(config.display, DisplayMode::Range);
        assert_eq!(config.output, OutputFormat::Yaml);
    }

    #[test]
    fn test_config_ignores_bad_values() {
        let config = EstimatorConfig::from_lookup(lookup_from(&[
            (ENV_COST_TABLE, "  "),
            (ENV_DISPLAY, "sideways"),
            (ENV_OUTPUT, "xml"),
        ]));
        assert_eq!(config, EstimatorConfig::default());
    }
}
