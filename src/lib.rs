pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod theme;

pub use config::LayoutSettings;
pub use error::{ConfigError, LayoutError, RenderError};
pub use model::{DocumentKind, DocumentModel, EquipmentLine, Palette};
pub use parser::parse_document;
pub use render::{LaidOutDocument, LayoutEngine, PdfRenderer};
pub use theme::{PaletteRequest, PaletteResolver, ResolvedPalette};

/// High-level API for rendering a document to PDF.
///
/// Lays the document out with `settings` and renders the pages. The palette
/// and logo are taken from the model as-is; resolve them first with
/// [`PaletteResolver`] when theming from a logo.
///
/// # Example
///
/// ```no_run
/// use asset_docs::{parse_document, render_document, LayoutSettings};
///
/// let json = std::fs::read_to_string("delivery.json").unwrap();
/// let doc = parse_document(&json).unwrap();
/// let pdf_bytes = render_document(&doc, LayoutSettings::default()).unwrap();
///
/// std::fs::write("delivery.pdf", pdf_bytes).unwrap();
/// ```
pub fn render_document(doc: &DocumentModel, settings: LayoutSettings) -> Result<Vec<u8>, RenderError> {
    let laid_out = LayoutEngine::new(settings).layout(doc)?;
    PdfRenderer::new(doc.number.as_str()).render(&laid_out)
}
