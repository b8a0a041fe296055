//! This module contains the generational evolution machinery: per-generation parameters,
//! fitness variants, the simulator loop and telemetry.

mod config;
pub use self::config::*;

mod fitness;
pub use self::fitness::*;

mod simulator;
pub use self::simulator::*;

mod telemetry;
pub use self::telemetry::*;
