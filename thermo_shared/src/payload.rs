//! Status payload published on every simulation tick.
//!
//! The wire shape is `{"d":{"temperature":<n>,"humidity":<n>}}`. Numbers with no
//! fractional part are written as JSON integers (`25`, not `25.0`) so consumers
//! that compare payload text see the same bytes a JavaScript device would send.

use serde::{Deserialize, Serialize, Serializer};

/// Largest integer an f64 holds exactly (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusData {
    #[serde(serialize_with = "serialize_reading")]
    pub temperature: f64,
    #[serde(serialize_with = "serialize_reading")]
    pub humidity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub d: StatusData,
}

impl StatusPayload {
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            d: StatusData { temperature, humidity },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn serialize_reading<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
