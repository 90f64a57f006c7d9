// thermo_shared: device abstraction and wire types shared by the simulator and its tests

pub mod device;
pub mod payload;

pub use device::{ConsoleDevice, Device, DeviceError, MemoryDevice, event_topic};
pub use payload::{StatusData, StatusPayload};
