//! Error types for image export

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// The rasterizer could not produce a bitmap
    #[error("Rasterization failed: {0}")]
    Rasterize(String),

    /// Rasterizer produced a zero-sized bitmap
    #[error("Rasterizer produced an empty image")]
    EmptyImage,

    /// Encoding or decoding error from the image crate
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Writing the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;
