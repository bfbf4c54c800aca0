//! Configuration types for Veritax

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{VeritaxError, VeritaxResult};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Where the NCBI dump files live, so repeated runs can omit the positional
/// arguments
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaxonomyConfig {
    /// Path to nodes.dmp
    #[serde(default)]
    pub nodes_path: Option<String>,
    /// Path to names.dmp
    #[serde(default)]
    pub names_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report delimiter: "tab" or "comma"
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Record field holding the reported strain name
    #[serde(default = "default_reported_field")]
    pub reported_field: String,
    /// Record field holding the preferred strain name
    #[serde(default = "default_preferred_field")]
    pub preferred_field: String,
}

// Default value functions
fn default_delimiter() -> String {
    "tab".to_string()
}
fn default_reported_field() -> String {
    "virusStrainReported".to_string()
}
fn default_preferred_field() -> String {
    "virusStrainPreferred".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            reported_field: default_reported_field(),
            preferred_field: default_preferred_field(),
        }
    }
}

impl ReportConfig {
    /// The delimiter byte for the csv writer
    pub fn delimiter_byte(&self) -> VeritaxResult<u8> {
        match self.delimiter.as_str() {
            "tab" => Ok(b'\t'),
            "comma" => Ok(b','),
            other => Err(VeritaxError::Configuration(format!(
                "unknown delimiter '{}' (expected 'tab' or 'comma')",
                other
            ))),
        }
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> VeritaxResult<Config> {
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| VeritaxError::Configuration(e.to_string()))
}

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &Path) -> VeritaxResult<()> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| VeritaxError::Configuration(e.to_string()))?;
    std::fs::write(path, contents)?;
    Ok(())
}
