//! SVG serializer
//!
//! Emits a standalone document with the viewBox in module units and the
//! width/height attributes in pixels, so the image scales losslessly while
//! defaulting to the same on-screen size as the PNG output.

use crate::qr::Symbol;
use crate::render::RenderOptions;
use std::fmt::Write;

/// Serialize a symbol as an SVG document.
pub(crate) fn render(symbol: &Symbol, options: &RenderOptions) -> String {
    let units = symbol.width() as u32 + 2 * options.border();
    let pixels = options.pixel_size(symbol);
    let border = options.border();

    let mut path = String::new();
    for (x, y) in symbol.dark_modules() {
        let _ = write!(path, "M{} {}h1v1h-1z", x as u32 + border, y as u32 + border);
    }

    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{pixels}\" height=\"{pixels}\" ",
            "viewBox=\"0 0 {units} {units}\" shape-rendering=\"crispEdges\">\n",
            "<rect width=\"{units}\" height=\"{units}\" fill=\"#ffffff\"/>\n",
            "<path d=\"{path}\" fill=\"#000000\"/>\n",
            "</svg>\n"
        ),
        pixels = pixels,
        units = units,
        path = path,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::QrEncoder;

    #[test]
    fn test_document_structure() {
        let symbol = QrEncoder::new().encode("hello").unwrap();
        let svg = render(&symbol, &RenderOptions::new(8, 4));

        let units = symbol.width() as u32 + 8;
        let pixels = units * 8;
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(&format!("width=\"{pixels}\" height=\"{pixels}\"")));
        assert!(svg.contains(&format!("viewBox=\"0 0 {units} {units}\"")));
        assert!(svg.contains("<path d=\"M"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_border_offsets_modules() {
        let symbol = QrEncoder::new().encode("hello").unwrap();
        let with_border = render(&symbol, &RenderOptions::new(1, 3));
        // Top-left finder corner lands at (border, border).
        assert!(with_border.contains("M3 3h1v1h-1z"));

        let without_border = render(&symbol, &RenderOptions::new(1, 0));
        assert!(without_border.contains("M0 0h1v1h-1z"));
    }
}
