//! See [`Error`].

use thiserror::Error;

/// Error types for this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A ground-truth image has no entry in the candidate map.
    #[error("no candidate entry for image `{0}`")]
    MissingImage(String),

    #[error("invalid rectangle: {width}x{height} (dimensions must be non-negative)")]
    InvalidRectangle { width: i32, height: i32 },

    #[error("malformed samples file")]
    Csv(#[from] csv::Error),

    #[error("samples file I/O failed")]
    Io(#[from] std::io::Error),
}

/// Type alias for [`Result<T, Error>`].
pub type Result<T> = std::result::Result<T, Error>;
