//! Generate a QR code and save it in every supported format
//!
//! Usage: cargo run --example generate_qr

use qrgen::{EccLevel, EncodingRequest, OutputFormat, suggest_file_name};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let text = "Hello from QRGEN!";
    let stem = suggest_file_name(text);

    for format in [OutputFormat::Png, OutputFormat::Svg, OutputFormat::Pdf] {
        let request = EncodingRequest::new(text, EccLevel::M, 8, 4, format);
        let path = format!("{stem}.{}", format.extension());
        qrgen::generate_to_file(&request, &path)?;
        println!("✓ QR code generated and saved to {path}");
    }

    println!("  Content: {text}");

    Ok(())
}
