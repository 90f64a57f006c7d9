use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("device '{0}' is not connected")]
    NotConnected(String),
    #[error("publish failed: {0}")]
    Publish(String),
}

/// Event topic for a device, e.g. `iot3/thermo1/evt/status/fmt/json`.
pub fn event_topic(device_id: &str, event: &str) -> String {
    format!("iot3/{}/evt/{}/fmt/json", device_id, event)
}

/// A connected device the simulator reports through.
///
/// Publishing is fire-and-forget from the caller's side: a returned error is
/// surfaced to the driver and not retried.
#[async_trait]
pub trait Device: Send + Sync {
    fn device_id(&self) -> &str;
    async fn connect(&self) -> Result<(), DeviceError>;
    async fn publish_event(&self, event: &str, payload: &str) -> Result<(), DeviceError>;
}

/// Device that writes every publish to the tracing log.
pub struct ConsoleDevice {
    device_id: String,
    connected: AtomicBool,
    published: AtomicU64,
}

impl ConsoleDevice {
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            connected: AtomicBool::new(false),
            published: AtomicU64::new(0),
        }
    }

    pub fn published_count(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Device for ConsoleDevice {
    fn device_id(&self) -> &str {
        &self.device_id
    }

    async fn connect(&self) -> Result<(), DeviceError> {
        self.connected.store(true, Ordering::Release);
        tracing::info!("Device '{}' connected", self.device_id);
        Ok(())
    }

    async fn publish_event(&self, event: &str, payload: &str) -> Result<(), DeviceError> {
        if !self.connected.load(Ordering::Acquire) {
            return Err(DeviceError::NotConnected(self.device_id.clone()));
        }
        let topic = event_topic(&self.device_id, event);
        let seq = self.published.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(seq, %topic, %payload, "publish");
        Ok(())
    }
}

/// Device that keeps every `(topic, payload)` it was asked to publish.
pub struct MemoryDevice {
    device_id: String,
    connected: AtomicBool,
    published: Mutex<Vec<(String, String)>>,
}

impl MemoryDevice {
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            connected: AtomicBool::new(false),
            published: Mutex::new(Vec::new()),
        }
    }

    pub async fn published(&self) -> Vec<(String, String)> {
        self.published.lock().await.clone()
    }
}

#[async_trait]
impl Device for MemoryDevice {
    fn device_id(&self) -> &str {
        &self.device_id
    }

    async fn connect(&self) -> Result<(), DeviceError> {
        self.connected.store(true, Ordering::Release);
        Ok(())
    }

    async fn publish_event(&self, event: &str, payload: &str) -> Result<(), DeviceError> {
        if !self.connected.load(Ordering::Acquire) {
            return Err(DeviceError::NotConnected(self.device_id.clone()));
        }
        let topic = event_topic(&self.device_id, event);
        self.published.lock().await.push((topic, payload.to_string()));
        Ok(())
    }
}
