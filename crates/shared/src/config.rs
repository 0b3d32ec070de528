//! Application configuration management.

use std::path::Path;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use config::builder::DefaultState;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Variance classification settings.
    #[serde(default)]
    pub variance: VarianceConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Variance classification settings.
#[derive(Debug, Clone, Deserialize)]
pub struct VarianceConfig {
    /// Ordered threshold bands, lowest variance first.
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<ThresholdConfig>,
}

impl Default for VarianceConfig {
    fn default() -> Self {
        Self {
            thresholds: default_thresholds(),
        }
    }
}

/// One configured threshold band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Display label, unique within the list.
    pub label: String,
    /// Inclusive upper bound in percentage points. Omitted means unbounded.
    #[serde(default)]
    pub max_variance: Option<Decimal>,
    /// Display color token, passed through untouched.
    #[serde(default = "default_color")]
    pub color: String,
}

impl ThresholdConfig {
    fn new(label: &str, max_variance: Option<i64>, color: &str) -> Self {
        Self {
            label: label.to_string(),
            max_variance: max_variance.map(Decimal::from),
            color: color.to_string(),
        }
    }
}

/// The standard five-band set shipped with the application.
#[must_use]
pub fn default_thresholds() -> Vec<ThresholdConfig> {
    vec![
        ThresholdConfig::new("Excellent", Some(0), "#4caf50"),
        ThresholdConfig::new("Normal", Some(10), "#2196f3"),
        ThresholdConfig::new("Warning", Some(20), "#ff9800"),
        ThresholdConfig::new("Need Attention", Some(30), "#f57c00"),
        ThresholdConfig::new("Need Action", None, "#f44336"),
    ]
}

fn default_color() -> String {
    "#9e9e9e".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    "pmreport=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None)
    }

    /// Loads configuration, layering an explicit settings file over the
    /// `config/` directory defaults. Environment variables still win.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not exist or any source fails to parse.
    pub fn load_with(path: Option<&Path>) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        tracing::debug!(%run_mode, settings = ?path, "loading configuration");

        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        Self::finish(builder.add_source(Environment::with_prefix("PMREPORT").separator("__")))
    }

    /// Parses configuration from an inline TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or has the wrong shape.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::finish(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
