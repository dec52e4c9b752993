//! Operation builder for printpdf pages
//!
//! Collects printpdf `Op`s for one page. Coordinates here are already in PDF
//! space (origin bottom-left, millimetres).

use printpdf::{
    BuiltinFont, Color as PdfColor, LinePoint, Mm, Op, PaintMode, PdfFontHandle, Point, Polygon,
    PolygonRing, Pt, TextItem, WindingOrder, XObjectId, XObjectTransform,
};

use crate::model::Color;

use super::colors::to_rgb;

/// Bezier handle length for a quarter circle: 4 * (sqrt(2) - 1) / 3
const KAPPA: f32 = 0.552_284_8;

fn point(x: f32, y: f32, bezier: bool) -> LinePoint {
    LinePoint {
        p: Point {
            x: Mm(x).into(),
            y: Mm(y).into(),
        },
        bezier,
    }
}

/// A builder that collects PDF operations
#[derive(Default)]
pub struct LayerBuilder {
    ops: Vec<Op>,
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Get a reference to the operations (for inspection)
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Set the fill color (also used for text)
    pub fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::SetFillColor {
            col: PdfColor::Rgb(to_rgb(color)),
        });
    }

    /// Set the outline/stroke color
    pub fn set_outline_color(&mut self, color: Color) {
        self.ops.push(Op::SetOutlineColor {
            col: PdfColor::Rgb(to_rgb(color)),
        });
    }

    /// Set the outline thickness in points
    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    }

    /// Draw text with a builtin font, `y` being the baseline
    pub fn use_text<S: Into<String>>(
        &mut self,
        text: S,
        font_size: f32,
        x: Mm,
        y: Mm,
        font: BuiltinFont,
    ) {
        let text_str = text.into();
        if text_str.is_empty() {
            return;
        }

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point {
                x: x.into(),
                y: y.into(),
            },
        });
        self.ops.push(Op::SetFont {
            size: Pt(font_size),
            font: PdfFontHandle::Builtin(font),
        });
        self.ops.push(Op::ShowText {
            items: vec![TextItem::Text(text_str)],
        });
        self.ops.push(Op::EndTextSection);
    }

    /// Add a filled or stroked rectangle
    ///
    /// Takes lower-left x, y and upper-right x, y coordinates with a paint mode
    pub fn add_rect(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm, mode: PaintMode) {
        let points = vec![
            point(x1.0, y1.0, false),
            point(x2.0, y1.0, false),
            point(x2.0, y2.0, false),
            point(x1.0, y2.0, false),
        ];
        self.push_polygon(points, mode);
    }

    /// Rectangle with quarter-circle corners. `x`, `y` is the lower-left corner.
    pub fn add_rounded_rect(&mut self, x: Mm, y: Mm, w: Mm, h: Mm, radius: Mm, mode: PaintMode) {
        let (x, y, w, h) = (x.0, y.0, w.0, h.0);
        let r = radius.0.min(w / 2.0).min(h / 2.0).max(0.0);
        if r == 0.0 {
            self.add_rect(Mm(x), Mm(y), Mm(x + w), Mm(y + h), mode);
            return;
        }
        let k = KAPPA * r;
        let (right, top) = (x + w, y + h);

        let points = vec![
            point(x + r, y, false),
            point(right - r, y, false),
            // bottom-right corner
            point(right - r + k, y, true),
            point(right, y + r - k, true),
            point(right, y + r, true),
            point(right, top - r, false),
            // top-right corner
            point(right, top - r + k, true),
            point(right - r + k, top, true),
            point(right - r, top, true),
            point(x + r, top, false),
            // top-left corner
            point(x + r - k, top, true),
            point(x, top - r + k, true),
            point(x, top - r, true),
            point(x, y + r, false),
            // bottom-left corner
            point(x, y + r - k, true),
            point(x + r - k, y, true),
            point(x + r, y, true),
        ];
        self.push_polygon(points, mode);
    }

    /// Draw a line from (x1, y1) to (x2, y2)
    pub fn add_line(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm) {
        let points = vec![point(x1.0, y1.0, false), point(x2.0, y2.0, false)];
        self.push_polygon(points, PaintMode::Stroke);
    }

    /// Place an image XObject with the given transform
    ///
    /// Use `PdfDocument::add_image()` to register the image and get the XObjectId.
    pub fn use_xobject(&mut self, id: XObjectId, transform: XObjectTransform) {
        self.ops.push(Op::UseXobject { id, transform });
    }

    fn push_polygon(&mut self, points: Vec<LinePoint>, mode: PaintMode) {
        let polygon = Polygon {
            rings: vec![PolygonRing { points }],
            mode,
            winding_order: WindingOrder::NonZero,
        };
        self.ops.push(Op::DrawPolygon { polygon });
    }
}
