// src/common/error.rs

// No cfg_attr dance needed here, thiserror is always available
#[derive(Debug, thiserror::Error)]
pub enum PmsError<E = ()>
where
    E: core::fmt::Debug, // Still need Debug for the generic Io error
{
    /// Underlying I/O error from the transport implementation.
    #[error("I/O error: {0:?}")] // Format string requires Debug on E
    Io(E),

    /// No response byte arrived within the wait budget.
    #[error("no response from sensor within the wait budget")]
    Timeout,

    /// The transport delivered fewer bytes than requested.
    ///
    /// Raised at the header stage as well as the body stage, before any
    /// content is interpreted.
    #[error("short read: expected {expected} bytes, got {got}")]
    ReadShort { expected: usize, got: usize },

    /// The first two response bytes are not the 'BM' start marker.
    #[error("bad start marker: {found:#06x}")]
    HeaderMismatch { found: u16 },

    /// The declared body length does not fit the working buffer.
    #[error("declared body length {body_len} overflows a {capacity}-byte frame buffer")]
    LengthOverflow { body_len: usize, capacity: usize },

    /// Declared checksum does not match the sum of the preceding bytes.
    #[error("checksum mismatch: declared {declared:#06x}, computed {computed:#06x}")]
    ChecksumMismatch { declared: u16, computed: u16 },

    /// A validated frame is too short for the configured variant's layout.
    #[error("frame too short: needed {needed} data bytes, got {got}")]
    FrameTooShort { needed: usize, got: usize },

    /// `read()` was called before the sensor was switched to passive mode.
    #[error("session not initialized; call init() first")]
    NotInitialized,
}

// No manual Display impl needed - thiserror handles it.

// Allow mapping from the underlying transport error if From is implemented
impl<E: core::fmt::Debug> From<E> for PmsError<E> {
    fn from(e: E) -> Self {
        PmsError::Io(e)
    }
}

// Note: For the Io(E) variant's #[error("...")] message to work correctly even
// in no_std, the underlying error type `E` must implement `core::fmt::Debug`.
