//! Configuration management for magnus.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)
//!
//! It also hosts the process-wide physical and naming constants. These are
//! read-only for the lifetime of the process.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{MagnusError, Result};

/// Standard gravity in m/s², used to convert geopotential to height.
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Magnus formula coefficient a (dimensionless).
pub const MAGNUS_A: f64 = 17.67;

/// Magnus formula coefficient b in °C.
pub const MAGNUS_B: f64 = 243.5;

/// Absolute tolerance when comparing coordinate values between fields.
/// Coordinates round-trip through file encodings, so bit equality is too strict.
pub const COORD_TOLERANCE: f64 = 1e-6;

/// Meteorological identifier of the temperature field.
pub const TEMPERATURE_VAR: &str = "air_temperature";

/// Meteorological identifier of the relative humidity field.
pub const HUMIDITY_VAR: &str = "relative_humidity";

/// Meteorological identifier of the geopotential field.
pub const GEOPOTENTIAL_VAR: &str = "geopotential";

/// Variables every gridded source must provide, by meteorological identifier.
pub const REQUIRED_VARIABLES: [&str; 3] = [TEMPERATURE_VAR, HUMIDITY_VAR, GEOPOTENTIAL_VAR];

/// Canonical axis order shared by every field in a field set. The order is a
/// contract: tabularization traverses axes in exactly this nesting order.
pub const AXIS_NAMES: [&str; 4] = ["time", "pressure", "latitude", "longitude"];

/// Command-line arguments for magnus
#[derive(Parser, Debug)]
#[command(name = "magnus")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the ERA5 pressure-level NetCDF file
    pub era5_file: PathBuf,

    /// Path to the station observation CSV file
    pub station_file: PathBuf,

    /// Destination for the flattened gridded table
    #[arg(long, env = "MAGNUS_GRID_OUTPUT")]
    pub grid_output: Option<PathBuf>,

    /// Destination for the station table with derived humidity
    #[arg(long, env = "MAGNUS_STATION_OUTPUT")]
    pub station_output: Option<PathBuf>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "MAGNUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "MAGNUS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Output destinations for the two tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Destination for the flattened gridded table
    #[serde(default = "default_grid_csv")]
    pub grid_csv: PathBuf,

    /// Destination for the station table
    #[serde(default = "default_station_csv")]
    pub station_csv: PathBuf,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    /// Returns the config together with the two input paths.
    pub fn load() -> Result<(Self, PathBuf, PathBuf)> {
        let args = Args::parse();

        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if let Some(grid_output) = args.grid_output {
            config.output.grid_csv = grid_output;
        }
        if let Some(station_output) = args.station_output {
            config.output.station_csv = station_output;
        }
        config.log_level = args.log_level;

        Ok((config, args.era5_file, args.station_file))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.output = other.output;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // The two tables must not clobber each other
        if self.output.grid_csv == self.output.station_csv {
            return Err(MagnusError::Config {
                message: format!(
                    "Grid and station outputs point at the same file: {}",
                    self.output.grid_csv.display()
                ),
            });
        }

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(MagnusError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            grid_csv: default_grid_csv(),
            station_csv: default_station_csv(),
        }
    }
}

// Default value functions for serde
fn default_grid_csv() -> PathBuf {
    PathBuf::from("era5_data.csv")
}

fn default_station_csv() -> PathBuf {
    PathBuf::from("metar_data_with_rh.csv")
}

fn default_log_level() -> String {
    "info".to_string()
}
