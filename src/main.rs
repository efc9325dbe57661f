//! qrgen CLI entrypoint

use anyhow::Context;
use clap::Parser;
use qrgen::{
    EccLevel, EncodingRequest, OutputFormat, QrGenConfig, RenderOptions, logging,
    suggest_file_name,
};
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "qrgen",
    version,
    about = "Generate QR codes and export them as PNG, SVG, or PDF"
)]
struct Cli {
    /// Text to encode, e.g. a wallet address
    text: String,

    /// Optional configuration file (toml/yaml). Defaults to qrgen.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Error-correction level (L, M, Q, H)
    #[arg(long, value_name = "LEVEL")]
    ecc: Option<EccLevel>,

    /// Pixel scale of a single module, clamped to 1-100
    #[arg(long, value_name = "N")]
    scale: Option<u32>,

    /// Quiet-zone width in modules, clamped to 0-50
    #[arg(long, value_name = "N")]
    border: Option<u32>,

    /// Output format (png, svg, pdf)
    #[arg(long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Output path. Defaults to a name derived from the text, in the cwd.
    #[arg(long, short, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Write the rendered bytes to stdout instead of a file
    #[arg(long)]
    stdout: bool,

    /// Output the result summary as formatted JSON instead of human-readable text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config =
        QrGenConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    logging::init(&config.logging).context("failed to initialise logging")?;

    let request = build_request(&cli, &config);
    let bytes = qrgen::generate(&request).context("failed to generate QR code")?;

    if cli.stdout {
        std::io::stdout()
            .write_all(&bytes)
            .context("failed to write to stdout")?;
        return Ok(());
    }

    let path = cli.output.clone().unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}.{}",
            suggest_file_name(&request.text),
            request.format.extension()
        ))
    });
    std::fs::write(&path, &bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;

    if cli.json {
        let summary = json!({
            "path": path.display().to_string(),
            "format": request.format.to_string(),
            "ecc_level": request.ecc_level.to_string(),
            "scale": request.scale,
            "border": request.border,
            "bytes": bytes.len(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Saved {} ({} bytes)", path.display(), bytes.len());
    }

    Ok(())
}

/// Merge CLI flags over configuration-file defaults over built-in defaults.
fn build_request(cli: &Cli, config: &QrGenConfig) -> EncodingRequest {
    let fallback = RenderOptions::default();
    let defaults = &config.defaults;

    EncodingRequest::new(
        cli.text.clone(),
        cli.ecc.or(defaults.ecc_level).unwrap_or_default(),
        cli.scale.or(defaults.scale).unwrap_or(fallback.scale()),
        cli.border.or(defaults.border).unwrap_or(fallback.border()),
        cli.format.or(defaults.format).unwrap_or_default(),
    )
}
