//! One simulation tick, and the driver that schedules ticks against key input.

use futures_util::{Stream, StreamExt};
use std::io;
use std::time::Duration;
use thermo_shared::{Device, StatusPayload};
use tokio::time::MissedTickBehavior;

use crate::config::Config;
use crate::display::FrameSink;
use crate::error::SimError;
use crate::input::{InputOutcome, InputToken, handle_input};
use crate::thermometer::{BaselineController, Reading, ReadingGenerator, ThermometerRenderer};

/// Event name status payloads are published under.
pub const STATUS_EVENT: &str = "status";

/// Simulation state: the baseline (with its legend table), the renderer and
/// the random source. Owned by the driver; ticks and input are applied one at
/// a time.
pub struct SimulationLoop {
    controller: BaselineController,
    renderer: ThermometerRenderer,
    generator: ReadingGenerator,
    humidity_center: f64,
}

impl SimulationLoop {
    pub fn new(config: &Config, generator: ReadingGenerator) -> Self {
        Self {
            controller: BaselineController::new(config.range, config.simulation.initial_baseline),
            renderer: ThermometerRenderer::new(config.range),
            generator,
            humidity_center: config.simulation.humidity_center,
        }
    }

    pub fn baseline(&self) -> f64 {
        self.controller.baseline()
    }

    pub fn handle_input(&mut self, token: InputToken) -> InputOutcome {
        handle_input(&mut self.controller, token)
    }

    /// Generate a reading, redraw, and publish the status payload.
    pub async fn tick<D, S>(&mut self, device: &D, display: &mut S) -> Result<StatusPayload, SimError>
    where
        D: Device + ?Sized,
        S: FrameSink + ?Sized,
    {
        let temperature = self.generator.generate(self.controller.baseline());
        self.render_frame(temperature, display)?;
        let reading = Reading {
            temperature,
            humidity: self.generator.generate(self.humidity_center),
        };
        let payload = StatusPayload::from(reading);
        self.publish(&payload, device, display).await?;
        Ok(payload)
    }

    pub fn render_frame<S: FrameSink + ?Sized>(&self, temperature: f64, display: &mut S) -> Result<(), SimError> {
        display.clear_frame()?;
        let frame = self.renderer.render(temperature, self.controller.column_index());
        display.write_lines(&frame)?;
        Ok(())
    }

    /// Publish errors are returned as-is; the caller decides whether to stop.
    pub async fn publish<D, S>(&self, payload: &StatusPayload, device: &D, display: &mut S) -> Result<(), SimError>
    where
        D: Device + ?Sized,
        S: FrameSink + ?Sized,
    {
        let text = payload.to_json()?;
        device.publish_event(STATUS_EVENT, &text).await?;
        display.echo_payload(&text)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Ctrl-C or Escape.
    Quit,
    TickLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub reason: StopReason,
}

/// Fires ticks on a fixed interval and routes key input between them.
#[derive(Debug, Clone)]
pub struct Driver {
    interval: Duration,
    max_ticks: Option<u64>,
}

impl Driver {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_ticks: None,
        }
    }

    pub fn with_max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Run until a quit token arrives or the tick limit is reached. Each tick
    /// or input event completes before the next one is taken, so the state is
    /// never observed mid-update. A closed input stream only stops input; ticks
    /// keep firing.
    pub async fn run<D, S, I>(
        &self,
        sim: &mut SimulationLoop,
        device: &D,
        display: &mut S,
        mut inputs: I,
    ) -> Result<RunSummary, SimError>
    where
        D: Device + ?Sized,
        S: FrameSink + ?Sized,
        I: Stream<Item = io::Result<InputToken>> + Unpin,
    {
        if self.max_ticks == Some(0) {
            return Ok(RunSummary { ticks: 0, reason: StopReason::TickLimit });
        }
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks = 0u64;
        let mut inputs_open = true;

        tracing::info!("Simulation running every {:?}", self.interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let payload = sim.tick(device, display).await.map_err(|e| {
                        tracing::error!("Tick {} failed: {}", ticks + 1, e);
                        e
                    })?;
                    ticks += 1;
                    tracing::debug!(ticks, temperature = payload.d.temperature, humidity = payload.d.humidity, "tick");
                    if self.max_ticks.is_some_and(|max| ticks >= max) {
                        return Ok(RunSummary { ticks, reason: StopReason::TickLimit });
                    }
                }
                next = inputs.next(), if inputs_open => match next {
                    Some(Ok(token)) => {
                        if sim.handle_input(token) == InputOutcome::Terminate {
                            tracing::info!("Quit requested after {} ticks", ticks);
                            return Ok(RunSummary { ticks, reason: StopReason::Quit });
                        }
                    }
                    Some(Err(e)) => return Err(SimError::Io(e)),
                    None => {
                        tracing::warn!("Input stream closed; continuing without keyboard control");
                        inputs_open = false;
                    }
                },
            }
        }
    }
}
