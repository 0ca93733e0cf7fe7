// src/session/mock.rs
//
// Shared test double for the session modules: a serial+timer interface
// over fixed arrays with a microsecond mock clock. A staged response is
// released only once the command has been flushed, optionally after a
// configurable latency, so the bounded response wait is testable.

use core::time::Duration;

use arrayvec::ArrayVec;

use crate::common::checksum::{compute_checksum, encode_checksum};
use crate::common::frame::{CHECKSUM_LEN, HEADER_LEN, MAX_FRAME_LEN, START_MARKER};
use crate::common::hal_traits::{PmsSerial, PmsTimer};
use crate::common::variant::SensorVariant;

// --- Mock Instant ---
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct MockInstant(pub u64);

impl core::ops::Add<Duration> for MockInstant {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        MockInstant(self.0.saturating_add(rhs.as_micros() as u64))
    }
}

impl core::ops::Sub<MockInstant> for MockInstant {
    type Output = Duration;
    fn sub(self, rhs: MockInstant) -> Duration {
        Duration::from_micros(self.0.saturating_sub(rhs.0))
    }
}

// --- Mock Comm Error ---
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct MockCommError;

// --- Mock Interface ---
pub(crate) struct MockInterface {
    pub now_us: u64,
    queue: [u8; 128],
    queue_len: usize,
    queue_pos: usize,
    pending: [u8; 64],
    pending_len: usize,
    // Bytes at or past this queue index only become readable at gate_at_us
    gate_index: usize,
    gate_at_us: u64,
    pub response_latency_us: u64,
    pub write_log: [u8; 64],
    pub write_len: usize,
    pub flush_count: u32,
    pub fail_writes: bool,
    pub fail_reads: bool,
}

impl MockInterface {
    pub fn new() -> Self {
        MockInterface {
            now_us: 0,
            queue: [0; 128],
            queue_len: 0,
            queue_pos: 0,
            pending: [0; 64],
            pending_len: 0,
            gate_index: usize::MAX,
            gate_at_us: 0,
            response_latency_us: 0,
            write_log: [0; 64],
            write_len: 0,
            flush_count: 0,
            fail_writes: false,
            fail_reads: false,
        }
    }

    /// Bytes readable immediately, as if left over from a previous cycle.
    pub fn stage_stale(&mut self, data: &[u8]) {
        assert!(self.queue_len + data.len() <= self.queue.len());
        self.queue[self.queue_len..self.queue_len + data.len()].copy_from_slice(data);
        self.queue_len += data.len();
    }

    /// Bytes released only after the next flush (plus the configured
    /// response latency), like a sensor answering a command.
    pub fn stage_response(&mut self, data: &[u8]) {
        assert!(self.pending_len + data.len() <= self.pending.len());
        self.pending[self.pending_len..self.pending_len + data.len()].copy_from_slice(data);
        self.pending_len += data.len();
    }

    pub fn written(&self) -> &[u8] {
        &self.write_log[..self.write_len]
    }

    fn release_pending(&mut self) {
        if self.pending_len == 0 {
            return;
        }
        self.gate_index = self.queue_len;
        self.gate_at_us = self.now_us.saturating_add(self.response_latency_us);
        let pending = &self.pending[..self.pending_len];
        assert!(self.queue_len + pending.len() <= self.queue.len());
        self.queue[self.queue_len..self.queue_len + pending.len()].copy_from_slice(pending);
        self.queue_len += pending.len();
        self.pending_len = 0;
    }
}

impl PmsTimer for MockInterface {
    type Instant = MockInstant;
    fn now(&self) -> Self::Instant {
        MockInstant(self.now_us)
    }
    fn delay_us(&mut self, us: u32) {
        self.now_us = self.now_us.saturating_add(u64::from(us));
    }
    fn delay_ms(&mut self, ms: u32) {
        self.now_us = self.now_us.saturating_add(u64::from(ms) * 1000);
    }
}

impl PmsSerial for MockInterface {
    type Error = MockCommError;

    fn read_byte(&mut self) -> nb::Result<u8, Self::Error> {
        if self.fail_reads {
            return Err(nb::Error::Other(MockCommError));
        }
        if self.queue_pos >= self.queue_len {
            return Err(nb::Error::WouldBlock);
        }
        if self.queue_pos >= self.gate_index && self.now_us < self.gate_at_us {
            return Err(nb::Error::WouldBlock);
        }
        let byte = self.queue[self.queue_pos];
        self.queue_pos += 1;
        Ok(byte)
    }

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        if self.fail_writes {
            return Err(nb::Error::Other(MockCommError));
        }
        if self.write_len >= self.write_log.len() {
            return Err(nb::Error::Other(MockCommError));
        }
        self.write_log[self.write_len] = byte;
        self.write_len += 1;
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        self.flush_count += 1;
        self.release_pending();
        Ok(())
    }
}

/// Builds a complete, checksum-correct response frame for the variant.
pub(crate) fn build_frame(
    variant: SensorVariant,
    tsi: [u16; 3],
    atm: [u16; 3],
    counts: [u16; 6],
) -> ArrayVec<u8, MAX_FRAME_LEN> {
    let body_len = variant.body_len();
    let mut frame: ArrayVec<u8, MAX_FRAME_LEN> = ArrayVec::new();
    frame.try_extend_from_slice(&START_MARKER).unwrap();
    frame
        .try_extend_from_slice(&(body_len as u16).to_be_bytes())
        .unwrap();
    for value in tsi.iter().chain(atm.iter()) {
        frame.try_extend_from_slice(&value.to_be_bytes()).unwrap();
    }
    if variant.has_particle_counts() {
        for value in counts.iter() {
            frame.try_extend_from_slice(&value.to_be_bytes()).unwrap();
        }
    }
    while frame.len() < HEADER_LEN + body_len - CHECKSUM_LEN {
        frame.push(0);
    }
    let checksum = compute_checksum(&frame);
    frame.try_extend_from_slice(&encode_checksum(checksum)).unwrap();
    frame
}
