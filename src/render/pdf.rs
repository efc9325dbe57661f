//! PDF serializer built on `lopdf`
//!
//! One page sized to the rendered symbol, a white background, and every dark
//! module appended as a `re` subpath filled in a single pass. PDF's origin is
//! bottom-left, so rows are flipped relative to the raster formats.

use crate::error::Result;
use crate::qr::Symbol;
use crate::render::RenderOptions;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

/// Serialize a symbol as a single-page PDF document.
pub(crate) fn render(symbol: &Symbol, options: &RenderOptions) -> Result<Vec<u8>> {
    let size = options.pixel_size(symbol) as i64;
    let scale = options.scale() as i64;
    let border = options.border() as i64;
    let width = symbol.width() as i64;

    let mut operations = vec![
        Operation::new("rg", vec![1.into(), 1.into(), 1.into()]),
        Operation::new("re", vec![0.into(), 0.into(), size.into(), size.into()]),
        Operation::new("f", vec![]),
        Operation::new("rg", vec![0.into(), 0.into(), 0.into()]),
    ];
    for (x, y) in symbol.dark_modules() {
        let px = (border + x as i64) * scale;
        let py = (border + width - 1 - y as i64) * scale;
        operations.push(Operation::new(
            "re",
            vec![px.into(), py.into(), scale.into(), scale.into()],
        ));
    }
    operations.push(Operation::new("f", vec![]));

    let content = Content { operations };
    let stream = Stream::new(dictionary! {}, content.encode()?);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let content_id = doc.add_object(stream);
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), size.into(), size.into()],
        "Resources" => dictionary! {},
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::QrEncoder;

    #[test]
    fn test_pdf_header_and_trailer() {
        let symbol = QrEncoder::new().encode("hello").unwrap();
        let bytes = render(&symbol, &RenderOptions::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len().saturating_sub(64)..]);
        assert!(tail.contains("%%EOF"));
    }

    #[test]
    fn test_page_matches_render_geometry() {
        let symbol = QrEncoder::new().encode("hello").unwrap();
        let options = RenderOptions::new(10, 2);
        let bytes = render(&symbol, &options).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let pages: Vec<_> = doc.get_pages().into_iter().collect();
        assert_eq!(pages.len(), 1);

        let size = options.pixel_size(&symbol) as i64;
        let (_, page_id) = pages[0];
        let page = doc.get_object(page_id).and_then(Object::as_dict).unwrap();
        let media_box = page.get(b"MediaBox").and_then(Object::as_array).unwrap();
        assert_eq!(media_box[2].as_i64().unwrap(), size);
        assert_eq!(media_box[3].as_i64().unwrap(), size);
    }
}
