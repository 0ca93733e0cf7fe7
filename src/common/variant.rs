// src/common/variant.rs

use super::frame::{CHECKSUM_LEN, HEADER_LEN};

/// The two PMSx003 frame layouts.
///
/// The compact layout is spoken by PMS2003/PMS3003 units; the extended
/// layout by PMS1003/PMS5003/PMS7003/PMSA003. The variant is fixed per
/// session at construction - the sensors offer no way to query it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SensorVariant {
    /// 24-byte frame: mass concentrations only, no particle counts.
    Compact24,
    /// 32-byte frame: mass concentrations plus six particle-count bins.
    Extended32,
}

impl SensorVariant {
    /// Total frame length on the wire, header and checksum included.
    pub const fn frame_len(&self) -> usize {
        match self {
            SensorVariant::Compact24 => 24,
            SensorVariant::Extended32 => 32,
        }
    }

    /// Body length the sensor is expected to declare in its header.
    ///
    /// The frame reader still treats the declared value as authoritative;
    /// this is only the nominal figure for this family.
    pub const fn body_len(&self) -> usize {
        self.frame_len() - HEADER_LEN
    }

    /// Whether frames of this variant carry the particle-count sextet.
    pub const fn has_particle_counts(&self) -> bool {
        matches!(self, SensorVariant::Extended32)
    }

    /// Bytes of decodable fields the layout requires in the data region
    /// (body minus checksum): two calibration triplets, plus six count
    /// bins for the extended layout.
    pub const fn min_data_len(&self) -> usize {
        match self {
            SensorVariant::Compact24 => 12,
            SensorVariant::Extended32 => 24,
        }
    }
}

/// Selects which calibration triplet is treated as the primary reading.
///
/// Every frame carries both; this only drives the convenience accessors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum UnitMode {
    /// TSI-standard calibration.
    #[default]
    Tsi,
    /// Standard-atmosphere calibration.
    Atmospheric,
}
