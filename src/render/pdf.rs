//! PDF backend: turns laid-out pages into a printpdf document

use std::sync::Arc;

use printpdf::{
    Mm, PaintMode, PdfDocument, PdfPage, PdfSaveOptions, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectId, XObjectTransform,
};

use crate::error::RenderError;
use crate::render::command::{DrawCommand, LaidOutDocument, Page, TextAlign};
use crate::render::helpers::compress::compress_or_keep;
use crate::render::helpers::layer::LayerBuilder;
use crate::render::helpers::text_metrics::{get_measurer, FontStyle, MM_TO_PT};

/// Images are placed at 72 dpi so one pixel is one point before scaling
const IMAGE_DPI: f32 = 72.0;

/// Decoded images, keyed by the identity of their byte buffer
#[derive(Default)]
struct ImageCache {
    entries: Vec<(Arc<[u8]>, Option<(XObjectId, usize, usize)>)>,
}

impl ImageCache {
    fn get_or_insert(&mut self, doc: &mut PdfDocument, bytes: &Arc<[u8]>) -> Option<(XObjectId, usize, usize)> {
        if let Some((_, entry)) = self.entries.iter().find(|(b, _)| Arc::ptr_eq(b, bytes)) {
            return entry.clone();
        }
        let entry = match decode_on_white(bytes) {
            Ok(raw) => {
                let (w, h) = (raw.width, raw.height);
                Some((doc.add_image(&raw), w, h))
            }
            Err(e) => {
                log::warn!("Skipping logo: {}", e);
                None
            }
        };
        self.entries.push((Arc::clone(bytes), entry.clone()));
        entry
    }
}

/// Decode an image and flatten any transparency onto white
pub fn decode_on_white(bytes: &[u8]) -> Result<RawImage, RenderError> {
    let image = image::load_from_memory(bytes).map_err(|e| RenderError::ImageDecode(e.to_string()))?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for px in rgba.pixels() {
        let [r, g, b, a] = px.0;
        let a = u16::from(a);
        for c in [r, g, b] {
            let blended = (u16::from(c) * a + 255 * (255 - a)) / 255;
            pixels.push(blended as u8);
        }
    }

    Ok(RawImage {
        pixels: RawImageData::U8(pixels),
        width: width as usize,
        height: height as usize,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    })
}

/// Renders a [`LaidOutDocument`] to PDF bytes
pub struct PdfRenderer {
    title: String,
    compress: bool,
}

impl PdfRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            compress: true,
        }
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn render(&self, laid_out: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
        if laid_out.pages.is_empty() {
            return Err(RenderError::PdfGeneration("document has no pages".to_string()));
        }

        let mut doc = PdfDocument::new(&self.title);
        let mut images = ImageCache::default();

        let pages: Vec<PdfPage> = laid_out
            .pages
            .iter()
            .map(|page| {
                let ops = self.render_page(&mut doc, &mut images, page, laid_out.page_height);
                PdfPage::new(Mm(laid_out.page_width), Mm(laid_out.page_height), ops)
            })
            .collect();

        doc.with_pages(pages);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("printpdf reported {} warning(s)", warnings.len());
        }

        log::info!("Rendered {} page(s), {} bytes", laid_out.page_count(), bytes.len());
        Ok(if self.compress { compress_or_keep(bytes) } else { bytes })
    }

    fn render_page(
        &self,
        doc: &mut PdfDocument,
        images: &mut ImageCache,
        page: &Page,
        page_height: f32,
    ) -> Vec<printpdf::Op> {
        let mut layer = LayerBuilder::new();
        // top-left layout coordinates to PDF bottom-left
        let flip = |y: f32| page_height - y;

        for command in &page.commands {
            match command {
                DrawCommand::FillRect {
                    x,
                    y,
                    w,
                    h,
                    color,
                    radius,
                } => {
                    layer.set_fill_color(*color);
                    layer.add_rounded_rect(Mm(*x), Mm(flip(y + h)), Mm(*w), Mm(*h), Mm(*radius), PaintMode::Fill);
                }
                DrawCommand::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                    width,
                } => {
                    layer.set_outline_color(*color);
                    layer.set_outline_thickness(width * MM_TO_PT);
                    layer.add_line(Mm(*x1), Mm(flip(*y1)), Mm(*x2), Mm(flip(*y2)));
                }
                DrawCommand::Text {
                    x,
                    y,
                    content,
                    font_size,
                    bold,
                    italic,
                    color,
                    align,
                } => {
                    let style = FontStyle::new(*bold, *italic);
                    let left = aligned_x(content, *x, *font_size, style, *align);
                    layer.set_fill_color(*color);
                    layer.use_text(content.as_str(), *font_size, Mm(left), Mm(flip(*y)), style.builtin_font());
                }
                DrawCommand::Image { x, y, w, h, bytes, .. } => {
                    let Some((id, px_w, px_h)) = images.get_or_insert(doc, bytes) else {
                        continue;
                    };
                    let transform = contain(*x, flip(y + h), *w, *h, px_w, px_h);
                    layer.use_xobject(id, transform);
                }
                DrawCommand::NewPage => {}
            }
        }

        layer.into_ops()
    }
}

/// Left edge of a text run anchored at `x`
fn aligned_x(text: &str, x: f32, font_size: f32, style: FontStyle, align: TextAlign) -> f32 {
    let width = || get_measurer(style).measure_width_mm(text, font_size);
    match align {
        TextAlign::Left => x,
        TextAlign::Center => x - width() / 2.0,
        TextAlign::Right => x - width(),
    }
}

/// Fit an image of `px_w` × `px_h` pixels inside a box, keeping its aspect
/// ratio. Left aligned, vertically centred; `bottom` is in PDF space.
fn contain(x: f32, bottom: f32, w: f32, h: f32, px_w: usize, px_h: usize) -> XObjectTransform {
    let box_w = w * MM_TO_PT;
    let box_h = h * MM_TO_PT;
    let scale = (box_w / px_w.max(1) as f32).min(box_h / px_h.max(1) as f32);
    let drawn_h = px_h as f32 * scale;

    XObjectTransform {
        translate_x: Some(Pt(x * MM_TO_PT)),
        translate_y: Some(Pt(bottom * MM_TO_PT + (box_h - drawn_h) / 2.0)),
        scale_x: Some(scale),
        scale_y: Some(scale),
        dpi: Some(IMAGE_DPI),
        rotate: None,
    }
}
