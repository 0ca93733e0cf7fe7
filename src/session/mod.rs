// src/session/mod.rs

// I/O and acquisition helpers live in their own file; the shared test
// double is compiled for tests only.
mod io_helpers;
#[cfg(test)]
pub(crate) mod mock;

use arrayvec::ArrayVec;
use log::warn;

use crate::common::{
    checksum,
    command::Command,
    config::SessionConfig,
    decode::decode_frame,
    error::PmsError,
    frame::MAX_FRAME_LEN,
    hal_traits::{PmsSerial, PmsTimer},
    measurement::Measurement,
    variant::SensorVariant,
};

/// Where the session is in its lifecycle. A failed read never leaves
/// `PassiveModeSet`: only the measurement attempt failed, the sensor
/// itself stays configured.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum SessionState {
    Uninitialized,
    PassiveModeSet,
}

/// A synchronous request/response session with one PMSx003 sensor.
///
/// The session exclusively owns its transport and working buffer; callers
/// sharing a session across threads must serialize access themselves. Each
/// `read()` is a single attempt that may block for up to the response wait
/// budget (~800 ms) plus one poll interval.
#[derive(Debug)]
pub struct PmsSession<IF>
where
    IF: PmsSerial + PmsTimer,
{
    interface: IF,
    config: SessionConfig,
    state: SessionState,
    buffer: ArrayVec<u8, MAX_FRAME_LEN>,
    last: Option<Measurement>,
}

impl<IF> PmsSession<IF>
where
    IF: PmsSerial + PmsTimer,
{
    /// Creates a session over an already-configured 9600-8N1 transport.
    pub fn new(interface: IF, config: SessionConfig) -> Self {
        PmsSession {
            interface,
            config,
            state: SessionState::Uninitialized,
            buffer: ArrayVec::new(),
            last: None,
        }
    }

    /// Switches the sensor into passive (on-demand) reporting mode.
    ///
    /// Drains stale bytes and sends the passive-mode command; the sensor's
    /// acknowledgement, if any, is not parsed and gets drained before the
    /// next read. Must complete once before `read()`.
    pub fn init(&mut self) -> Result<(), PmsError<IF::Error>> {
        self.drain_stale_bytes()?;
        self.send_command(Command::EnterPassiveMode)?;
        self.state = SessionState::PassiveModeSet;
        Ok(())
    }

    /// Triggers one passive-mode measurement and decodes the response.
    ///
    /// A single attempt: any failure is returned as-is, the previously
    /// accepted measurement is kept, and the session stays ready for the
    /// next poll. Callers doing periodic polling should treat a non-`Ok`
    /// result as "no new measurement this cycle".
    pub fn read(&mut self) -> Result<Measurement, PmsError<IF::Error>> {
        if self.state != SessionState::PassiveModeSet {
            return Err(PmsError::NotInitialized);
        }

        self.acquire(Command::TriggerMeasurement)?;

        checksum::verify_frame_checksum::<IF::Error>(&self.buffer).map_err(|e| {
            warn!("discarding frame: {}", e);
            e
        })?;

        let measurement = decode_frame(&self.buffer, &self.config)?;
        self.last = Some(measurement);
        Ok(measurement)
    }

    /// The most recent accepted measurement, if any.
    pub fn last_measurement(&self) -> Option<&Measurement> {
        self.last.as_ref()
    }

    /// The configured unit mode's calibration triplet from the most recent
    /// accepted measurement.
    pub fn primary_pm(&self) -> Option<[u16; 3]> {
        self.last.map(|m| m.primary(self.config.unit_mode))
    }

    /// Frame layout this session was built for.
    pub fn variant(&self) -> SensorVariant {
        self.config.variant
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whether `init()` has completed.
    pub fn is_initialized(&self) -> bool {
        self.state == SessionState::PassiveModeSet
    }

    /// Consumes the session and hands the transport back.
    pub fn release(self) -> IF {
        self.interface
    }
}
