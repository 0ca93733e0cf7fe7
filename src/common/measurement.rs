// src/common/measurement.rs

use super::variant::UnitMode;

/// One decoded sensor reading.
///
/// Constructed whole from a checksum-validated frame; no field is ever
/// partially updated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// PM1.0, PM2.5, PM10 mass concentrations [µg/m³], TSI calibration.
    pub pm_tsi: [u16; 3],
    /// PM1.0, PM2.5, PM10 mass concentrations [µg/m³], standard-atmosphere
    /// calibration.
    pub pm_atm: [u16; 3],
    /// Particles per 100 cm³ of air with diameter exceeding 0.3, 0.5, 1.0,
    /// 2.5, 5.0 and 10 µm, in that order. `None` for the compact frame
    /// layout, which does not transmit counts.
    pub particle_counts: Option<[u16; 6]>,
}

impl Measurement {
    /// The calibration triplet selected by `mode`.
    pub fn primary(&self, mode: UnitMode) -> [u16; 3] {
        match mode {
            UnitMode::Tsi => self.pm_tsi,
            UnitMode::Atmospheric => self.pm_atm,
        }
    }

    /// PM1.0 [µg/m³] under the given calibration.
    pub fn pm1_0(&self, mode: UnitMode) -> u16 {
        self.primary(mode)[0]
    }

    /// PM2.5 [µg/m³] under the given calibration.
    pub fn pm2_5(&self, mode: UnitMode) -> u16 {
        self.primary(mode)[1]
    }

    /// PM10 [µg/m³] under the given calibration.
    pub fn pm10(&self, mode: UnitMode) -> u16 {
        self.primary(mode)[2]
    }
}
