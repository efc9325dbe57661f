//! Error types for QRGEN operations

use thiserror::Error;

/// Result type alias using QRGEN's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for QRGEN operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input text was empty after trimming
    #[error("No input text to encode")]
    EmptyInput,

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// Output serialization failed
    #[error("Failed to render QR code: {0}")]
    Render(String),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

// Implement From conversions for common error types

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}

impl From<lopdf::Error> for Error {
    fn from(e: lopdf::Error) -> Self {
        Error::Render(format!("PDF serialization failed: {e}"))
    }
}
