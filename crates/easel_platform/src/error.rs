//! Platform error types

use thiserror::Error;

/// Errors raised while building portable values
///
/// Input normalization never fails; events that cannot be represented are
/// dropped by the backend instead. These errors only cover values an
/// application constructs itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Pixel data does not cover the rectangle it claims to describe
    #[error("pixel buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall {
        /// Bytes required for `stride * height`
        needed: usize,
        /// Bytes actually supplied
        actual: usize,
    },

    /// Row stride is shorter than one row of RGBA pixels
    #[error("row stride {stride} is shorter than {min} bytes")]
    StrideTooShort {
        /// Supplied stride
        stride: usize,
        /// Minimum stride (`4 * width`)
        min: usize,
    },
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
