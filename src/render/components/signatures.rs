use crate::model::BLACK;
use crate::render::helpers::canvas::TextStyle;
use crate::render::helpers::colors::{MUTED_TEXT, RULE, SIGNATURE_RULE};
use crate::render::layouts::context::LayoutContext;

const GAP: f32 = 10.0;
const SEPARATOR_WIDTH: f32 = 0.5;
const LINE_WIDTH: f32 = 0.3;
const LINE_OFFSET: f32 = 18.0;
const DATE_OFFSET: f32 = 23.0;
const DATE_PLACEHOLDER: &str = "Date: ___/___/______";

/// Two signature slots side by side
pub struct SignaturesRenderer<'a> {
    labels: [&'a str; 2],
}

impl<'a> SignaturesRenderer<'a> {
    pub fn new(labels: [&'a str; 2]) -> Self {
        Self { labels }
    }

    pub fn render(&self, ctx: &mut LayoutContext<'_>) {
        let s = ctx.settings;
        if ctx.cursor.y > s.page_height - s.signature_reserve {
            ctx.new_page(s.margin + GAP);
        }

        let right_edge = s.page_width - s.margin;
        let col_width = (s.page_width - 3.0 * s.margin) / 2.0;
        let right_x = s.page_width / 2.0 + s.margin / 2.0;

        ctx.cursor.advance(GAP);
        let y = ctx.cursor.y;
        ctx.canvas
            .line(s.margin, y, right_edge, y, RULE, SEPARATOR_WIDTH);
        ctx.cursor.advance(GAP);

        let y = ctx.cursor.y;
        let label = TextStyle::new(s.body_font_size, BLACK).bold();
        let date = TextStyle::new(s.detail_font_size, MUTED_TEXT);
        let slots = [
            (s.margin, s.margin + col_width - GAP),
            (right_x, right_edge),
        ];
        for (text, (x1, x2)) in self.labels.iter().zip(slots) {
            ctx.canvas.text(*text, x1, y, label);
            ctx.canvas
                .line(x1, y + LINE_OFFSET, x2, y + LINE_OFFSET, SIGNATURE_RULE, LINE_WIDTH);
            ctx.canvas.text(DATE_PLACEHOLDER, x1, y + DATE_OFFSET, date);
        }
        ctx.cursor.advance(DATE_OFFSET);
    }
}
