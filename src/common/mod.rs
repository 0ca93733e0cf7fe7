// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod checksum;
pub mod command;
pub mod config;
pub mod decode;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod measurement;
pub mod timing;
pub mod variant;

// --- Re-export key types/traits/functions for easier access ---

// From checksum.rs
pub use checksum::{compute_checksum, decode_checksum, encode_checksum, verify_frame_checksum};

// From command.rs
pub use command::{Command, CommandFrame};

// From config.rs
pub use config::SessionConfig;

// From decode.rs
pub use decode::decode_frame;

// From error.rs
pub use error::PmsError;

// From frame.rs
pub use frame::{FrameView, HEADER_LEN, MAX_FRAME_LEN, START_MARKER};

// From hal_traits.rs
pub use hal_traits::{PmsInstant, PmsSerial, PmsTimer};

// From measurement.rs
pub use measurement::Measurement;

// From timing.rs (constants - users can access via common::timing::*)
// No re-exports by default.

// From variant.rs
pub use variant::{SensorVariant, UnitMode};
