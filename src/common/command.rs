//! PMSx003 host-to-sensor command frames.
//!
//! Every command is a fixed seven-byte frame: the 'BM' start marker, a
//! command code, a big-endian 16-bit parameter, and the additive checksum
//! over the preceding five bytes. The command set is shared by both frame
//! variants of the family.

use core::fmt;

use super::checksum::{compute_checksum, encode_checksum};
use super::frame::{COMMAND_LEN, START_MARKER};

/// The commands this driver issues.
///
/// The sensors understand more (sleep, wake, active-mode streaming), but a
/// passive-mode session only ever needs these two.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch the sensor to passive (on-demand) reporting. Sent once by
    /// `init()`; in passive mode the sensor is silent until triggered.
    EnterPassiveMode,
    /// Request a single measurement frame while in passive mode.
    TriggerMeasurement,
}

impl Command {
    /// Wire command code.
    pub const fn code(&self) -> u8 {
        match self {
            Command::EnterPassiveMode => 0xE1,
            Command::TriggerMeasurement => 0xE2,
        }
    }

    /// Wire parameter word. Zero selects passive mode for 0xE1; the
    /// trigger command takes no parameter.
    pub const fn parameter(&self) -> u16 {
        0x0000
    }

    /// Formats the command into its seven-byte wire frame.
    pub fn format_into(&self) -> CommandFrame {
        let mut raw = [0u8; COMMAND_LEN];
        raw[..2].copy_from_slice(&START_MARKER);
        raw[2] = self.code();
        raw[3..5].copy_from_slice(&self.parameter().to_be_bytes());
        let checksum = compute_checksum(&raw[..COMMAND_LEN - 2]);
        raw[5..].copy_from_slice(&encode_checksum(checksum));
        CommandFrame(raw)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::EnterPassiveMode => write!(f, "enter-passive-mode"),
            Command::TriggerMeasurement => write!(f, "trigger-measurement"),
        }
    }
}

/// A formatted seven-byte command frame, ready to write to the transport.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CommandFrame([u8; COMMAND_LEN]);

impl CommandFrame {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        COMMAND_LEN
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl AsRef<[u8]> for CommandFrame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
