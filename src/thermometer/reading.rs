use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thermo_shared::StatusPayload;

/// One tick's sensor values, each rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub temperature: f64,
    pub humidity: f64,
}

impl From<Reading> for StatusPayload {
    fn from(reading: Reading) -> Self {
        StatusPayload::new(reading.temperature, reading.humidity)
    }
}

/// Produces readings scattered uniformly within ±1 of a centre value.
#[derive(Debug, Clone)]
pub struct ReadingGenerator {
    rng: StdRng,
}

impl ReadingGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, base: f64) -> f64 {
        let u: f64 = self.rng.random();
        jitter(base, u)
    }
}

impl Default for ReadingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// `round((base + (u - 0.5) * 2) * 10) / 10` for a draw `u` in `[0, 1)`.
///
/// Halves round up toward +∞, so `-0.25` becomes `-0.2`, not `-0.3`.
pub fn jitter(base: f64, u: f64) -> f64 {
    let raw = base + (u - 0.5) * 2.0;
    (raw * 10.0 + 0.5).floor() / 10.0
}
