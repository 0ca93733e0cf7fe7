// src/session/io_helpers.rs

use super::PmsSession;
use crate::common::{
    command::Command,
    error::PmsError,
    frame::{HEADER_LEN, MAX_FRAME_LEN, START_MARKER},
    hal_traits::{PmsSerial, PmsTimer},
    timing,
};
use core::time::Duration;
use log::debug;
use nb::Result as NbResult;

// Implementation block for I/O related helpers
impl<IF> PmsSession<IF>
where
    IF: PmsSerial + PmsTimer,
{
    /// Executes a non-blocking I/O operation (`f`) repeatedly until it
    /// stops returning `WouldBlock`, returning the final result or a
    /// timeout error.
    pub(super) fn blocking_io_with_timeout<FN, T>(
        &mut self,
        timeout: Duration,
        mut f: FN,
    ) -> Result<T, PmsError<IF::Error>>
    where
        FN: FnMut(&mut IF) -> NbResult<T, IF::Error>,
    {
        let start_time = self.interface.now();
        let deadline = start_time + timeout;

        loop {
            match f(&mut self.interface) {
                Ok(result) => return Ok(result),
                Err(nb::Error::WouldBlock) => {
                    if self.interface.now() >= deadline {
                        return Err(PmsError::Timeout);
                    }
                    // Small delay to avoid busy-spinning 100% CPU
                    self.interface.delay_us(100);
                }
                Err(nb::Error::Other(e)) => return Err(PmsError::Io(e)),
            }
        }
    }

    /// Reads and drops whatever the transport has buffered. The sensor may
    /// have left stale or partial data from a previous cycle that must not
    /// be mistaken for the next response.
    pub(super) fn drain_stale_bytes(&mut self) -> Result<usize, PmsError<IF::Error>> {
        let mut drained = 0usize;
        loop {
            match self.interface.read_byte() {
                Ok(_) => drained += 1,
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(e)) => return Err(PmsError::Io(e)),
            }
        }
        if drained > 0 {
            debug!("dropped {} stale bytes", drained);
        }
        Ok(drained)
    }

    /// Writes the formatted command frame and force-flushes it so the
    /// write is not left sitting in a transmit buffer.
    pub(super) fn send_command(&mut self, command: Command) -> Result<(), PmsError<IF::Error>> {
        let frame = command.format_into();
        let write_timeout = timing::write_allowance(frame.len());

        for &byte in frame.as_bytes() {
            self.blocking_io_with_timeout(write_timeout, |iface| iface.write_byte(byte))?;
        }

        let flush_timeout = Duration::from_millis(10);
        self.blocking_io_with_timeout(flush_timeout, |iface| iface.flush())?;
        debug!("sent {} command", command);

        Ok(())
    }

    /// Waits for the first response byte with a coarse bounded poll.
    ///
    /// The sensor takes up to ~650 ms to complete a measurement, so this
    /// polls at `RESPONSE_POLL_INTERVAL` until `RESPONSE_WAIT_BUDGET`
    /// expires; the wait never overshoots the budget by more than one
    /// interval.
    pub(super) fn await_response(&mut self) -> Result<u8, PmsError<IF::Error>> {
        let deadline = self.interface.now() + timing::RESPONSE_WAIT_BUDGET;
        loop {
            match self.interface.read_byte() {
                Ok(byte) => return Ok(byte),
                Err(nb::Error::WouldBlock) => {
                    if self.interface.now() >= deadline {
                        return Err(PmsError::Timeout);
                    }
                    self.interface
                        .delay_ms(timing::RESPONSE_POLL_INTERVAL.as_millis() as u32);
                }
                Err(nb::Error::Other(e)) => return Err(PmsError::Io(e)),
            }
        }
    }

    /// Appends exactly `count` bytes of an in-flight frame to the working
    /// buffer. A transport that stops delivering mid-frame surfaces as
    /// `ReadShort`, never as a content error.
    pub(super) fn read_into_buffer(&mut self, count: usize) -> Result<(), PmsError<IF::Error>> {
        for got in 0..count {
            match self.blocking_io_with_timeout(timing::INTER_BYTE_TIMEOUT, |iface| {
                iface.read_byte()
            }) {
                Ok(byte) => self.buffer.push(byte),
                Err(PmsError::Timeout) => {
                    return Err(PmsError::ReadShort {
                        expected: count,
                        got,
                    })
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// One full request/response acquisition: drain, command, bounded wait,
    /// header, body. On success the working buffer holds the raw frame,
    /// checksum still unverified.
    pub(super) fn acquire(&mut self, command: Command) -> Result<(), PmsError<IF::Error>> {
        self.drain_stale_bytes()?;
        self.send_command(command)?;

        self.buffer.clear();
        let first = self.await_response()?;
        self.buffer.push(first);
        // Short header reads fail here, before any content is interpreted
        self.read_into_buffer(HEADER_LEN - 1)?;

        let marker = u16::from_be_bytes([self.buffer[0], self.buffer[1]]);
        if marker != u16::from_be_bytes(START_MARKER) {
            return Err(PmsError::HeaderMismatch { found: marker });
        }

        // The declared length is authoritative, but must fit the buffer
        let body_len = usize::from(u16::from_be_bytes([self.buffer[2], self.buffer[3]]));
        if HEADER_LEN + body_len > MAX_FRAME_LEN {
            return Err(PmsError::LengthOverflow {
                body_len,
                capacity: MAX_FRAME_LEN,
            });
        }

        self.read_into_buffer(body_len)?;
        debug!("received {}-byte frame", self.buffer.len());
        Ok(())
    }
}
