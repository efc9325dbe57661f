//! QR encoding types
//!
//! This module defines the request/result types of the generation workflow:
//! what to encode ([`EncodingRequest`]), at which error-correction level
//! ([`EccLevel`]), into which output format ([`OutputFormat`]), and the
//! encoded module matrix itself ([`Symbol`]).

mod encoder;

pub use encoder::QrEncoder;

use crate::error::{Error, Result};
use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error-correction capacity tier of a QR symbol, trading data capacity for
/// resilience to damage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EccLevel {
    /// ~7% of codewords can be restored
    L,
    /// ~15% of codewords can be restored
    #[default]
    M,
    /// ~25% of codewords can be restored
    Q,
    /// ~30% of codewords can be restored
    H,
}

impl EccLevel {
    /// Parse an error-correction level identifier (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "l" => Some(Self::L),
            "m" => Some(Self::M),
            "q" => Some(Self::Q),
            "h" => Some(Self::H),
            _ => None,
        }
    }
}

impl FromStr for EccLevel {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(value)
            .ok_or_else(|| format!("Unsupported ECC level '{value}', expected L, M, Q, or H"))
    }
}

impl fmt::Display for EccLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        };
        f.write_str(label)
    }
}

impl From<EccLevel> for qrcode::EcLevel {
    fn from(level: EccLevel) -> Self {
        match level {
            EccLevel::L => qrcode::EcLevel::L,
            EccLevel::M => qrcode::EcLevel::M,
            EccLevel::Q => qrcode::EcLevel::Q,
            EccLevel::H => qrcode::EcLevel::H,
        }
    }
}

/// Supported output file formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Grayscale raster image
    #[default]
    Png,
    /// Standalone vector XML document
    Svg,
    /// Single-page vector PDF document
    Pdf,
}

impl OutputFormat {
    /// Parse a format identifier (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Conventional file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(value)
            .ok_or_else(|| format!("Unsupported output format '{value}', expected png, svg, or pdf"))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A complete generation request: the text to encode plus all rendering
/// parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodingRequest {
    /// Text to encode; must be non-empty after trimming
    pub text: String,
    /// Error-correction level for the symbol
    pub ecc_level: EccLevel,
    /// Pixel scale of a single module, clamped to [1, 100]
    pub scale: u32,
    /// Quiet-zone width in modules, clamped to [0, 50]
    pub border: u32,
    /// Requested output format
    pub format: OutputFormat,
}

impl EncodingRequest {
    /// Create a request, clamping `scale` and `border` to their valid ranges.
    pub fn new(
        text: impl Into<String>,
        ecc_level: EccLevel,
        scale: u32,
        border: u32,
        format: OutputFormat,
    ) -> Self {
        Self {
            text: text.into(),
            ecc_level,
            scale: scale.clamp(RenderOptions::MIN_SCALE, RenderOptions::MAX_SCALE),
            border: border.min(RenderOptions::MAX_BORDER),
            format,
        }
    }

    /// Check that the request can be encoded at all.
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(())
    }

    /// Rendering geometry of this request.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(self.scale, self.border)
    }
}

/// An encoded QR symbol: a square matrix of light/dark modules
///
/// Fully determined by the (text, ECC level) pair it was encoded from and
/// immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    width: usize,
    modules: Vec<bool>,
}

impl Symbol {
    pub(crate) fn new(width: usize, modules: Vec<bool>) -> Self {
        debug_assert_eq!(modules.len(), width * width);
        Self { width, modules }
    }

    /// Edge length of the symbol in modules, excluding any quiet zone.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at (x, y) is dark.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.width + x]
    }

    /// Iterate over the coordinates of all dark modules, row by row.
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, dark)| **dark)
            .map(|(i, _)| (i % self.width, i / self.width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecc_level_parsing() {
        assert_eq!(EccLevel::parse("q"), Some(EccLevel::Q));
        assert_eq!(EccLevel::parse("H"), Some(EccLevel::H));
        assert_eq!(EccLevel::parse("x"), None);
        assert!("high".parse::<EccLevel>().is_err());
    }

    #[test]
    fn test_format_parsing_and_extension() {
        assert_eq!(OutputFormat::parse("PDF"), Some(OutputFormat::Pdf));
        assert_eq!(OutputFormat::parse("bmp"), None);
        assert_eq!(OutputFormat::Svg.extension(), "svg");
    }

    #[test]
    fn test_request_clamps_ranges() {
        let request = EncodingRequest::new("data", EccLevel::M, 0, 200, OutputFormat::Png);
        assert_eq!(request.scale, 1);
        assert_eq!(request.border, 50);
    }

    #[test]
    fn test_request_rejects_blank_text() {
        let request = EncodingRequest::new("  \t ", EccLevel::M, 8, 4, OutputFormat::Png);
        assert!(matches!(request.validate(), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_symbol_dark_modules() {
        let symbol = Symbol::new(2, vec![true, false, false, true]);
        assert!(symbol.is_dark(0, 0));
        assert!(!symbol.is_dark(1, 0));
        let dark: Vec<_> = symbol.dark_modules().collect();
        assert_eq!(dark, vec![(0, 0), (1, 1)]);
    }
}
