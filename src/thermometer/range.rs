use serde::{Deserialize, Serialize};

/// Temperature domain of the thermometer and its colour band thresholds, in °C.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RangeConfig {
    #[serde(default = "default_min")]
    pub min: f64,
    #[serde(default = "default_max")]
    pub max: f64,
    #[serde(default = "default_low_temp")]
    pub low_temp: f64,
    #[serde(default = "default_high_temp")]
    pub high_temp: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            low_temp: default_low_temp(),
            high_temp: default_high_temp(),
        }
    }
}

impl RangeConfig {
    /// `min < low_temp < high_temp < max`
    pub fn is_valid(&self) -> bool {
        self.min < self.low_temp && self.low_temp < self.high_temp && self.high_temp < self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

fn default_min() -> f64 { 15.0 }
fn default_max() -> f64 { 35.0 }
fn default_low_temp() -> f64 { 22.0 }
fn default_high_temp() -> f64 { 28.0 }
