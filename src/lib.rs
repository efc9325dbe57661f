//! QRGEN - headless QR code generation and export
//!
//! This library turns a text string (for example a wallet address) into a QR
//! symbol and serializes it to PNG, SVG, or PDF. Symbol computation is
//! delegated to the `qrcode` crate; QRGEN owns the workflow around it:
//! input validation, rendering geometry (module scale and quiet-zone width),
//! output file naming, and file export.
//!
//! # Features
//!
//! - **Encoding**: all four error-correction levels (L/M/Q/H)
//! - **Rendering**: PNG raster plus SVG and PDF vector output with identical
//!   geometry across formats
//! - **Naming**: sanitized file name suggestions derived from the input text
//!
//! # Example
//!
//! ```no_run
//! use qrgen::{EccLevel, EncodingRequest, OutputFormat};
//!
//! fn main() -> anyhow::Result<()> {
//!     let request = EncodingRequest::new(
//!         "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4",
//!         EccLevel::M,
//!         8,
//!         4,
//!         OutputFormat::Png,
//!     );
//!
//!     qrgen::generate_to_file(&request, "wallet.png")?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod error;
pub mod logging;
pub mod naming;
pub mod qr;
pub mod render;

// Re-exports for convenience
pub use error::{Error, Result};

pub use config::{DefaultOptions, LogRotation, LoggingOptions, QrGenConfig};
pub use naming::suggest_file_name;
pub use qr::{EccLevel, EncodingRequest, OutputFormat, QrEncoder, Symbol};
pub use render::{RenderOptions, render};

use std::path::Path;

/// Encode and render a request in one step.
///
/// Validates the request, encodes `text` at `ecc_level`, and serializes the
/// resulting symbol with the request's scale, border, and format. Every call
/// runs the full pipeline; nothing is cached between requests.
pub fn generate(request: &EncodingRequest) -> Result<Vec<u8>> {
    request.validate()?;
    let encoder = QrEncoder::with_ecc_level(request.ecc_level);
    let symbol = encoder.encode(&request.text)?;
    render::render(&symbol, &request.render_options(), request.format)
}

/// Encode and render a request, then write the bytes to `path`.
pub fn generate_to_file(request: &EncodingRequest, path: impl AsRef<Path>) -> Result<()> {
    let bytes = generate(request)?;
    std::fs::write(path.as_ref(), &bytes)?;
    tracing::info!(
        path = %path.as_ref().display(),
        bytes = bytes.len(),
        format = %request.format,
        "QR code written"
    );
    Ok(())
}
