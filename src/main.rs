// src/main.rs - thermometer simulator entry point
use clap::Parser;
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use std::time::Duration;
use thermo_shared::{ConsoleDevice, Device};

use thermo_sim::config::{self, Config};
use thermo_sim::display::{RawModeGuard, TerminalDisplay};
use thermo_sim::input::InputToken;
use thermo_sim::thermometer::ReadingGenerator;
use thermo_sim::{Driver, SimulationLoop};

/// Virtual thermometer sensor
#[derive(Parser, Debug)]
#[command(name = "thermo-sim", about = "Simulated thermometer that publishes status events and draws itself in the terminal.")]
struct Cli {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Milliseconds between ticks
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Device id used in the event topic
    #[arg(long)]
    device_id: Option<String>,

    /// Seed for reproducible readings
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Log level (logs go to stderr)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(interval_ms) = self.interval_ms {
            config.simulation.interval_ms = interval_ms;
        }
        if let Some(device_id) = &self.device_id {
            config.device.device_id = device_id.clone();
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let cli = Cli::parse();

    // Initialize logging; stdout belongs to the thermometer frame.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            config::load_config(path)?
        }
        None => Config::default(),
    };
    cli.apply(&mut config);
    config.validate()?;

    tracing::info!(
        "Range: {}..{} °C (cool < {}, hot >= {})",
        config.range.min,
        config.range.max,
        config.range.low_temp,
        config.range.high_temp
    );

    let generator = cli.seed.map(ReadingGenerator::seeded).unwrap_or_default();
    let mut sim = SimulationLoop::new(&config, generator);

    let device = ConsoleDevice::new(config.device.device_id.clone());
    device.connect().await?;
    tracing::info!("Device: {}", device.device_id());

    let guard = RawModeGuard::enable()?;
    let inputs = EventStream::new().map(|event| {
        event.map(|event| match event {
            Event::Key(key) => InputToken::from(key),
            _ => InputToken::Other,
        })
    });
    let mut display = TerminalDisplay::stdout();
    let driver = Driver::new(Duration::from_millis(config.simulation.interval_ms)).with_max_ticks(cli.ticks);
    let result = driver.run(&mut sim, &device, &mut display, Box::pin(inputs)).await;
    drop(guard);

    match result {
        Ok(summary) => {
            tracing::info!(
                "Stopped after {} ticks ({:?}), {} events published",
                summary.ticks,
                summary.reason,
                device.published_count()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Simulation failed: {}", e);
            Err(e.into())
        }
    }
}
