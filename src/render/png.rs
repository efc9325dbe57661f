//! PNG rasterizer

use crate::error::Result;
use crate::qr::Symbol;
use crate::render::RenderOptions;
use image::{GrayImage, ImageFormat, Luma};
use std::io::Cursor;

const DARK: Luma<u8> = Luma([0u8]);
const LIGHT: Luma<u8> = Luma([255u8]);

/// Rasterize a symbol and encode it as PNG bytes.
pub(crate) fn render(symbol: &Symbol, options: &RenderOptions) -> Result<Vec<u8>> {
    let image = rasterize(symbol, options);
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

fn rasterize(symbol: &Symbol, options: &RenderOptions) -> GrayImage {
    let size = options.pixel_size(symbol);
    let scale = options.scale();
    let offset = options.border() * scale;

    let mut image = GrayImage::from_pixel(size, size, LIGHT);
    for (x, y) in symbol.dark_modules() {
        let px = offset + x as u32 * scale;
        let py = offset + y as u32 * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                image.put_pixel(px + dx, py + dy, DARK);
            }
        }
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::QrEncoder;

    #[test]
    fn test_raster_geometry() {
        let symbol = QrEncoder::new().encode("hello").unwrap();
        let options = RenderOptions::new(4, 2);
        let image = rasterize(&symbol, &options);

        let expected = (symbol.width() as u32 + 4) * 4;
        assert_eq!(image.width(), expected);
        assert_eq!(image.height(), expected);

        // Quiet zone stays light; the top-left finder pattern corner is dark.
        assert_eq!(*image.get_pixel(0, 0), LIGHT);
        assert_eq!(*image.get_pixel(8, 8), DARK);
    }

    #[test]
    fn test_zero_border() {
        let symbol = QrEncoder::new().encode("hello").unwrap();
        let image = rasterize(&symbol, &RenderOptions::new(1, 0));
        assert_eq!(image.width(), symbol.width() as u32);
        // Finder pattern starts at the very edge without a quiet zone.
        assert_eq!(*image.get_pixel(0, 0), DARK);
    }

    #[test]
    fn test_png_magic_bytes() {
        let symbol = QrEncoder::new().encode("hello").unwrap();
        let bytes = render(&symbol, &RenderOptions::default()).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
