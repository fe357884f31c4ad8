//! Error types for macframe.

use thiserror::Error;

use crate::fields::FrameKind;

/// Main error type for all frame overlay operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    /// Buffer view too short to hold the fields being read.
    #[error("buffer too short: need {required} bytes, have {actual}")]
    BufferTooShort {
        /// Minimum number of bytes the operation requires.
        required: usize,
        /// Number of bytes actually available.
        actual: usize,
    },

    /// Byte range falls outside the buffer view.
    #[error("range at offset {offset} (length {length}) out of bounds for view of {available} bytes")]
    OutOfBounds {
        /// Start of the requested range.
        offset: usize,
        /// Length of the requested range.
        length: usize,
        /// Bytes available in the view.
        available: usize,
    },

    /// Malformed hardware address (wrong length or unparseable text).
    #[error("invalid hardware address: {0}")]
    InvalidAddress(String),

    /// Frame kind has no overlay variant in this library.
    #[error("unsupported frame kind: {0:?}")]
    UnsupportedKind(FrameKind),
}

/// Result type alias using FrameError.
pub type Result<T> = std::result::Result<T, FrameError>;
