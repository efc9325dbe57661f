//! Serializers turning an encoded [`Symbol`] into output bytes
//!
//! All three formats share the same geometry: `border` quiet-zone modules on
//! every side and each module drawn as a `scale`-sized square, so a symbol of
//! width `w` renders at `(w + 2 * border) * scale` pixels (or points) per
//! edge. The `qrcode` crate's built-in renderers fix the quiet zone at four
//! modules, so the serializers here walk the module matrix directly.

mod pdf;
mod png;
mod svg;

use crate::error::Result;
use crate::qr::{OutputFormat, Symbol};

/// Scale and quiet-zone parameters shared by all output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    scale: u32,
    border: u32,
}

impl RenderOptions {
    /// Smallest accepted module scale
    pub const MIN_SCALE: u32 = 1;
    /// Largest accepted module scale
    pub const MAX_SCALE: u32 = 100;
    /// Widest accepted quiet zone in modules
    pub const MAX_BORDER: u32 = 50;

    /// Create options, clamping `scale` to [1, 100] and `border` to [0, 50].
    pub fn new(scale: u32, border: u32) -> Self {
        Self {
            scale: scale.clamp(Self::MIN_SCALE, Self::MAX_SCALE),
            border: border.min(Self::MAX_BORDER),
        }
    }

    /// Pixel scale of a single module.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Quiet-zone width in modules.
    pub fn border(&self) -> u32 {
        self.border
    }

    /// Edge length in pixels of the rendered output for `symbol`.
    pub(crate) fn pixel_size(&self, symbol: &Symbol) -> u32 {
        (symbol.width() as u32 + 2 * self.border) * self.scale
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 8,
            border: 4,
        }
    }
}

/// Serialize a symbol to bytes in the requested format.
pub fn render(symbol: &Symbol, options: &RenderOptions, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Png => png::render(symbol, options),
        OutputFormat::Svg => Ok(svg::render(symbol, options).into_bytes()),
        OutputFormat::Pdf => pdf::render(symbol, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::QrEncoder;

    #[test]
    fn test_options_clamping() {
        let options = RenderOptions::new(0, 80);
        assert_eq!(options.scale(), 1);
        assert_eq!(options.border(), 50);

        let options = RenderOptions::new(500, 0);
        assert_eq!(options.scale(), 100);
        assert_eq!(options.border(), 0);
    }

    #[test]
    fn test_pixel_size() {
        let symbol = QrEncoder::new().encode("hello").unwrap();
        let options = RenderOptions::new(8, 4);
        let expected = (symbol.width() as u32 + 8) * 8;
        assert_eq!(options.pixel_size(&symbol), expected);
    }

    #[test]
    fn test_render_dispatches_all_formats() {
        let symbol = QrEncoder::new().encode("hello").unwrap();
        let options = RenderOptions::default();
        for format in [OutputFormat::Png, OutputFormat::Svg, OutputFormat::Pdf] {
            let bytes = render(&symbol, &options, format).unwrap();
            assert!(!bytes.is_empty());
        }
    }
}
