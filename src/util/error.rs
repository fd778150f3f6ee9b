//! Error types for graykit.

use std::io;
use thiserror::Error;

/// Result alias for graykit operations.
pub type Result<T> = std::result::Result<T, GrayKitError>;

/// Recoverable failures reported by buffer creation, filtering and PGM I/O.
///
/// Caller bugs such as out-of-range pixel positions are not represented here;
/// those panic at the offending call.
#[derive(Debug, Error)]
pub enum GrayKitError {
    /// Width times height does not fit in memory addressing.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Maxval outside `1..=255`.
    #[error("invalid maxval {maxval}, expected 1..=255")]
    InvalidMaxval { maxval: u32 },
    /// Pixel data length does not equal `width * height`.
    #[error("pixel buffer has {got} bytes, expected {needed}")]
    BufferLength { needed: usize, got: usize },
    /// A stored level exceeds the image maxval.
    #[error("pixel {index} has level {level} above maxval {maxval}")]
    LevelAboveMaxval { index: usize, level: u8, maxval: u8 },
    /// Pixel storage could not be reserved.
    #[error("failed to allocate memory for a {width}x{height} image")]
    Allocation { width: usize, height: usize },
    /// Malformed PGM stream.
    #[error("invalid PGM: {reason}")]
    Pgm { reason: &'static str },
    /// Operating system I/O failure; the OS error is kept as the source.
    #[error("{context} failed: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },
    /// Decoding or encoding through the `image` crate failed (`image-io`).
    #[error("image io error: {reason}")]
    ImageIo { reason: String },
}

impl GrayKitError {
    pub(crate) fn io(context: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| GrayKitError::Io { context, source }
    }

    /// Returns the underlying OS error code when the failure came from the OS.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            GrayKitError::Io { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }
}
