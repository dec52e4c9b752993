use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use asset_docs::cli::Args;
use asset_docs::config::LayoutSettings;
use asset_docs::model::{ImageFormat, Logo};
use asset_docs::parser::{parse_document, SidecarDescriptor};
use asset_docs::render::{LayoutEngine, PdfRenderer};
use asset_docs::theme::{self, PaletteRequest, PaletteResolver};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // Read and parse the document request
    let json = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;
    let mut doc = parse_document(&json).with_context(|| "Failed to parse document request")?;

    // Logo and its optional color sidecar
    let mut sidecar = None;
    if let Some(path) = &args.logo {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read logo: {}", path.display()))?;
        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .map(ImageFormat::from_extension)
            .unwrap_or(ImageFormat::Png);
        sidecar = SidecarDescriptor::load_for_logo(path);
        doc = doc.with_logo(Logo { bytes, format });
    }

    // Theme
    let company_code = args
        .company_code
        .clone()
        .or_else(|| doc.company.code.clone());
    let mut rng = match args.seed {
        Some(seed) => theme::seeded(seed),
        None => theme::from_entropy(),
    };
    let request = PaletteRequest {
        company_code: company_code.as_deref(),
        logo: doc.logo.as_ref().map(|l| l.bytes.as_slice()),
        sidecar,
    };
    let resolved = PaletteResolver::default().resolve(&request, &mut rng);
    log::info!(
        "Palette {} / {} from {}",
        resolved.palette.primary,
        resolved.palette.accent,
        resolved.source
    );
    let doc = doc.with_palette(resolved.palette);

    // Layout and render
    let settings = LayoutSettings::from_args(&args);
    let laid_out = LayoutEngine::new(settings)
        .layout(&doc)
        .with_context(|| format!("Failed to lay out {}", doc.number))?;
    let pdf_data = PdfRenderer::new(doc.number.as_str())
        .render(&laid_out)
        .with_context(|| "Failed to generate PDF")?;

    // Write output
    let output_path = args.output_path();
    fs::write(&output_path, pdf_data)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!(
        "Successfully wrote {} ({} page(s)) to {}",
        doc.number,
        laid_out.page_count(),
        output_path.display()
    );

    Ok(())
}
