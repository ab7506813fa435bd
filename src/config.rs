//! Configuration management for `SurfNotify`
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::SurfNotifyError;
use crate::models::{Coordinate, Strictness};
use crate::surf::candidates::DEFAULT_CANDIDATE_LIMIT;
use crate::surf::nearby::DEFAULT_RADIUS_KM;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurfNotifyConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Spot search settings
    #[serde(default)]
    pub search: SearchConfig,
    /// Data file locations
    #[serde(default)]
    pub data: DataConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Spot search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Radius splitting nearby from distant spots, km
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
    /// Maximum number of spots assessed per check
    #[serde(default = "default_candidate_limit")]
    pub candidate_limit: usize,
    /// Distance strictness for users who have not chosen one
    #[serde(default)]
    pub default_strictness: Strictness,
    /// Centre used when a user has no known location
    #[serde(default = "default_fallback_location")]
    pub fallback_location: Coordinate,
}

/// Data file locations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Spot catalog JSON; the bundled catalog when unset
    pub spots_path: Option<PathBuf>,
    /// Users and conditions snapshot JSON
    pub snapshot_path: Option<PathBuf>,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_radius_km() -> f64 {
    DEFAULT_RADIUS_KM
}

fn default_candidate_limit() -> usize {
    DEFAULT_CANDIDATE_LIMIT
}

fn default_fallback_location() -> Coordinate {
    Coordinate::new(54.27, -8.6)
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius_km: default_radius_km(),
            candidate_limit: default_candidate_limit(),
            default_strictness: Strictness::default(),
            fallback_location: default_fallback_location(),
        }
    }
}

impl SurfNotifyConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // SURFNOTIFY_SEARCH__RADIUS_KM=30 overrides search.radius_km
        builder = builder.add_source(
            Environment::with_prefix("SURFNOTIFY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: SurfNotifyConfig = settings.try_deserialize().with_context(|| {
            format!(
                "Failed to deserialize configuration from {}",
                config_file.display()
            )
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("surfnotify").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if !(self.search.radius_km > 0.0 && self.search.radius_km <= 500.0) {
            return Err(SurfNotifyError::config(
                "Search radius must be greater than 0 and cannot exceed 500 km",
            )
            .into());
        }

        if self.search.candidate_limit == 0 || self.search.candidate_limit > 100 {
            return Err(SurfNotifyError::config(
                "Candidate limit must be between 1 and 100",
            )
            .into());
        }

        self.search
            .fallback_location
            .validate()
            .map_err(|e| SurfNotifyError::config(format!("Fallback location: {e}")))?;

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SurfNotifyError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "compact"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(SurfNotifyError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
