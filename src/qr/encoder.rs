//! QR code encoder

use crate::error::{Error, Result};
use crate::qr::{EccLevel, Symbol};
use qrcode::{Color, QrCode};

/// QR code encoder
pub struct QrEncoder {
    /// Error correction level
    ecc_level: EccLevel,
}

impl QrEncoder {
    /// Create a new QR encoder with default settings (Medium ECC)
    pub fn new() -> Self {
        Self {
            ecc_level: EccLevel::M,
        }
    }

    /// Create a new QR encoder with a specific error correction level
    pub fn with_ecc_level(ecc_level: EccLevel) -> Self {
        Self { ecc_level }
    }

    /// Encode text into a QR symbol.
    ///
    /// The text is trimmed first; blank input fails with [`Error::EmptyInput`]
    /// and text exceeding the capacity of every symbol version at the chosen
    /// ECC level fails with [`Error::QrEncode`].
    pub fn encode(&self, text: &str) -> Result<Symbol> {
        let data = text.trim();
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }

        let code = QrCode::with_error_correction_level(data, self.ecc_level.into())
            .map_err(|e| Error::QrEncode(format!("Failed to create QR code: {e}")))?;

        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();

        Ok(Symbol::new(width, modules))
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}
