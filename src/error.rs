use thermo_shared::DeviceError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("payload serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
