// src/common/timing.rs

use core::time::Duration;

// The sensors speak 9600 baud 8N1 only; the link rate is not negotiable,
// so all read allowances below are derived from it.

/// Fixed UART rate of the whole PMSx003 family.
pub const UART_BAUD: u32 = 9600;

// === Response Timing ===

/// A passive-mode measurement takes the sensor up to ~650 ms to complete.
pub const MEASUREMENT_CYCLE_TYPICAL: Duration = Duration::from_millis(650);

/// Total budget to wait for the first response byte after a trigger.
/// Covers the measurement cycle with margin; expiry is a `Timeout`.
pub const RESPONSE_WAIT_BUDGET: Duration = Duration::from_millis(800);

/// Coarse poll interval while waiting for the first response byte. The
/// wait may overshoot the budget by at most one interval.
pub const RESPONSE_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Allowance for each subsequent byte of an in-flight frame. Several byte
/// times at 9600 baud; a gap this long means the frame was cut short.
pub const INTER_BYTE_TIMEOUT: Duration = Duration::from_millis(20);

// === Byte Timing at 9600 Baud (8N1) ===
// 1 start bit + 8 data bits + 1 stop bit = 10 bits per byte
// Time per byte = 10 / 9600 s ~= 1.042 ms

/// Nominal duration of a single bit at 9600 baud.
pub const BIT_DURATION: Duration = Duration::from_nanos(104_167);
/// Nominal duration of a single byte (10 bits total) at 9600 baud (8N1).
pub const BYTE_DURATION: Duration = Duration::from_micros(1042);

/// Write allowance for a buffer of `len` bytes, with margin for a lazy
/// transmit path.
pub fn write_allowance(len: usize) -> Duration {
    BYTE_DURATION * len as u32 + Duration::from_millis(20)
}
