//! Errors

use thiserror::Error;

/// Result type with [Error] as the error variant
///
/// [Error]: enum.Error.html
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of rasterization calls and image file helpers
///
/// Geometry is validated before the first pixel is written, so a
///   returned error means the surface was not modified.
#[derive(Error, Debug)]
pub enum Error {
    /// Input geometry violates a precondition
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Odd number of active edges on a scanline while rejecting them
    #[error("unpaired active edge on scanline {y}: {count} active edges")]
    UnpairedEdges {
        y: i64,
        count: usize,
    },

    /// Image decoding or encoding failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// File could not be read or written
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn geometry<S: Into<String>>(msg: S) -> Self {
        Error::InvalidGeometry(msg.into())
    }
}
