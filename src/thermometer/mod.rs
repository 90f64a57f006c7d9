//! Thermometer core: range, legend table, baseline state, readings and rendering.

pub mod baseline;
pub mod column_index;
pub mod range;
pub mod reading;
pub mod render;

pub use baseline::{BaselineController, Direction};
pub use column_index::{ColumnIndexTable, LEVELS};
pub use range::RangeConfig;
pub use reading::{Reading, ReadingGenerator};
pub use render::{TempBand, ThermometerRenderer};
