// src/common/config.rs

use super::variant::{SensorVariant, UnitMode};

/// Session configuration, fixed at construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Frame layout of the attached sensor. There is no auto-detection;
    /// the caller must know which unit is wired up.
    pub variant: SensorVariant,
    /// Calibration triplet reported by the convenience accessors.
    pub unit_mode: UnitMode,
    /// Set for firmware that reports particle counts accumulated from the
    /// smallest bin upward; the decoder then converts them to per-bin
    /// values. Has no effect on `Compact24`.
    pub truncated_counts: bool,
}

impl SessionConfig {
    pub fn new(variant: SensorVariant) -> Self {
        SessionConfig {
            variant,
            unit_mode: UnitMode::default(),
            truncated_counts: false,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(SensorVariant::Extended32)
    }
}
