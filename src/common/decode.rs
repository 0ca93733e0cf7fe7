//! Field decoding for checksum-validated response frames.
//!
//! Body layout (byte offsets relative to the start of the body, every
//! field an unsigned big-endian 16-bit word):
//!
//! | offset | field                                         |
//! |--------|-----------------------------------------------|
//! | 0..6   | PM1.0, PM2.5, PM10 [µg/m³], TSI calibration   |
//! | 6..12  | PM1.0, PM2.5, PM10 [µg/m³], std. atmosphere   |
//! | 12..24 | particle counts >0.3/0.5/1.0/2.5/5.0/10 µm    |
//! |        | per 100 cm³ (extended layout only)            |
//!
//! Remaining body bytes are reserved and ignored.

use super::config::SessionConfig;
use super::error::PmsError;
use super::frame::FrameView;
use super::measurement::Measurement;

/// Body offset of the TSI-calibration triplet.
const TSI_OFFSET: usize = 0;
/// Body offset of the standard-atmosphere triplet.
const ATM_OFFSET: usize = 6;
/// Body offset of the particle-count sextet (extended layout).
const COUNTS_OFFSET: usize = 12;

/// Decodes a checksum-validated frame into a [`Measurement`].
///
/// The frame must still include its header and trailing checksum; offsets
/// are resolved through the bounds-checked [`FrameView`]. A frame whose
/// data region is shorter than the configured variant's layout yields
/// `FrameTooShort` - the declared body length on the wire is authoritative
/// and is never assumed to match the nominal 20/28 bytes.
pub fn decode_frame<E>(raw: &[u8], config: &SessionConfig) -> Result<Measurement, PmsError<E>>
where
    E: core::fmt::Debug,
{
    let view = FrameView::new(raw);
    let needed = config.variant.min_data_len();
    let got = view.data_len();
    if got < needed {
        return Err(PmsError::FrameTooShort { needed, got });
    }

    // All offsets below are in-bounds once the data_len check passed
    let word = |offset| view.body_u16(offset).ok_or(PmsError::FrameTooShort { needed, got });

    let mut pm_tsi = [0u16; 3];
    let mut pm_atm = [0u16; 3];
    for bin in 0..3 {
        pm_tsi[bin] = word(TSI_OFFSET + 2 * bin)?;
        pm_atm[bin] = word(ATM_OFFSET + 2 * bin)?;
    }

    let particle_counts = if config.variant.has_particle_counts() {
        let mut counts = [0u16; 6];
        for bin in 0..6 {
            counts[bin] = word(COUNTS_OFFSET + 2 * bin)?;
        }
        if config.truncated_counts {
            de_accumulate(&mut counts);
        }
        Some(counts)
    } else {
        None
    };

    Ok(Measurement {
        pm_tsi,
        pm_atm,
        particle_counts,
    })
}

/// Converts counts accumulated from the smallest bin upward into per-bin
/// values, in place.
///
/// Must run from the top bin downward so each subtraction reads the
/// still-unmodified next-lower bin; the smallest bin is left unchanged.
/// Arithmetic wraps like the sensor's own 16-bit counters.
pub fn de_accumulate(counts: &mut [u16; 6]) {
    for bin in (1..6).rev() {
        counts[bin] = counts[bin].wrapping_sub(counts[bin - 1]);
    }
}
