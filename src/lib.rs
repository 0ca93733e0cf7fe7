// src/lib.rs

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod session;

// Re-export key types for convenience
pub use common::{Measurement, PmsError, SensorVariant, SessionConfig, UnitMode};
pub use session::PmsSession;
