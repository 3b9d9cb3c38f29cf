use clap::ValueEnum;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use shoplist_shopping::AggregationOptions;
use std::env;

use crate::cli::OutputFormat;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub aggregation: AggregationConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AggregationConfig {
    /// Fail on an unparseable quantity instead of warning and counting it as 0
    #[serde(default)]
    pub strict_quantities: bool,
    /// Strip every leading preparation word ("fresh chopped parsley" → "parsley")
    #[serde(default)]
    pub strip_all_prefixes: bool,
    /// Keep checked items checked when the list is regenerated
    #[serde(default = "default_preserve_checked")]
    pub preserve_checked: bool,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            strict_quantities: false,
            strip_all_prefixes: false,
            preserve_checked: default_preserve_checked(),
        }
    }
}

impl AggregationConfig {
    pub fn options(&self) -> AggregationOptions {
        AggregationOptions {
            strict_quantities: self.strict_quantities,
            strip_all_prefixes: self.strip_all_prefixes,
        }
    }
}

fn default_preserve_checked() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Structured JSON logs instead of the console format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_output_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
        }
    }
}

fn default_output_format() -> String {
    "text".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SHOPLIST__AGGREGATION__STRICT_QUANTITIES, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("aggregation.strict_quantities", false)?
            .set_default("aggregation.strip_all_prefixes", false)?
            .set_default("aggregation.preserve_checked", true)?
            .set_default("observability.log_level", "info")?
            .set_default("observability.json", false)?
            .set_default("output.format", "text")?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SHOPLIST")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let level = self.observability.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "Unknown log level '{}', expected one of: {}",
                self.observability.log_level,
                LOG_LEVELS.join(", ")
            ));
        }
        OutputFormat::from_str(&self.output.format, true)
            .map_err(|_| format!("Unknown output format '{}'", self.output.format))?;
        Ok(())
    }

    /// Configured output format, text unless set to a valid alternative
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_str(&self.output.format, true).unwrap_or_default()
    }
}
