//! Error types for statistics extraction
//!
//! This module provides error types for pixel buffer validation and
//! region cropping.

use std::fmt;

use crate::region::Region;

/// Reason a pixel buffer was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputKind {
    /// Width or height is zero
    ZeroDimensions {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
    },
    /// Channel count is not 3
    ChannelCount(usize),
    /// Sample slice length does not match `width * height * channels`
    LengthMismatch {
        /// Expected number of samples
        expected: usize,
        /// Actual number of samples
        actual: usize,
    },
}

impl fmt::Display for InvalidInputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputKind::ZeroDimensions { width, height } => {
                write!(f, "zero image dimensions ({}x{})", width, height)
            }
            InvalidInputKind::ChannelCount(n) => {
                write!(f, "expected 3 channels, got {}", n)
            }
            InvalidInputKind::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer length mismatch: expected {} samples, got {}",
                    expected, actual
                )
            }
        }
    }
}

/// Error type for statistics extraction.
///
/// Both variants are deterministic given the same input, so callers should
/// surface them rather than retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The pixel buffer is malformed
    InvalidInput(InvalidInputKind),
    /// The requested region has zero area after clamping to the image
    EmptyRegion {
        /// Region as requested by the caller
        requested: Region,
    },
}

impl From<InvalidInputKind> for StatsError {
    fn from(kind: InvalidInputKind) -> Self {
        StatsError::InvalidInput(kind)
    }
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::InvalidInput(kind) => write!(f, "invalid pixel buffer: {}", kind),
            StatsError::EmptyRegion { requested } => {
                write!(f, "region {} is empty after clamping", requested)
            }
        }
    }
}

impl std::error::Error for StatsError {}
