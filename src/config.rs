//! # Simulator Configuration
//!
//! Configuration for the thermometer range, the tick schedule and the device
//! identity. Every field has a default, so an empty file (or no file at all) is
//! a valid configuration.
//!
//! ## Example: TOML Configuration
//!
//! ```toml
//! [range]
//! min = 15.0
//! max = 35.0
//! low_temp = 22.0
//! high_temp = 28.0
//!
//! [simulation]
//! interval_ms = 1000
//! initial_baseline = 25.0
//! humidity_center = 56.0
//!
//! [device]
//! device_id = "thermo1"
//! ```

// src/config.rs - Single configuration file
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::thermometer::RangeConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid range: expected min < low_temp < high_temp < max, got {min} / {low_temp} / {high_temp} / {max}")]
    InvalidRange {
        min: f64,
        low_temp: f64,
        high_temp: f64,
        max: f64,
    },
    #[error("initial baseline {baseline} is outside [{min}, {max}]")]
    InvalidBaseline { baseline: f64, min: f64, max: f64 },
    #[error("tick interval must be > 0 ms")]
    InvalidInterval,
}

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub range: RangeConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub device: DeviceConfig,
}

/// Tick schedule and reading generation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default = "default_initial_baseline")]
    pub initial_baseline: f64,
    #[serde(default = "default_humidity_center")]
    pub humidity_center: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            initial_baseline: default_initial_baseline(),
            humidity_center: default_humidity_center(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeviceConfig {
    #[serde(default = "default_device_id")]
    pub device_id: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            device_id: default_device_id(),
        }
    }
}

impl Config {
    /// Check the range ordering, the baseline bounds and the tick interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.range;
        if !r.is_valid() {
            return Err(ConfigError::InvalidRange {
                min: r.min,
                low_temp: r.low_temp,
                high_temp: r.high_temp,
                max: r.max,
            });
        }
        let baseline = self.simulation.initial_baseline;
        if !(r.min..=r.max).contains(&baseline) {
            return Err(ConfigError::InvalidBaseline {
                baseline,
                min: r.min,
                max: r.max,
            });
        }
        if self.simulation.interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        Ok(())
    }
}

// Default value functions
fn default_interval_ms() -> u64 { 1000 }
fn default_initial_baseline() -> f64 { 25.0 }
fn default_humidity_center() -> f64 { 56.0 }
fn default_device_id() -> String { "thermo1".to_string() }

/// Load and validate configuration from a TOML file at the given path.
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        tracing::error!("Failed to read config file '{}': {}", path, e);
        ConfigError::Io(e)
    })?;
    let config: Config = toml::from_str(&contents).map_err(|e| {
        tracing::error!("Failed to parse config TOML: {}", e);
        ConfigError::Toml(e)
    })?;
    config.validate()?;
    Ok(config)
}
