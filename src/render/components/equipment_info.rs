//! Labelled facts about the serviced machine, two per row in a shaded box

use crate::render::helpers::canvas::TextStyle;
use crate::render::helpers::colors::{BODY_TEXT, BOX_FILL, MUTED_TEXT};
use crate::render::helpers::text_metrics::FontStyle;
use crate::render::layouts::context::LayoutContext;

const HEADING: &str = "INFORMATIONS ÉQUIPEMENT";
const HEADING_HEIGHT: f32 = 7.0;
const CORNER_RADIUS: f32 = 2.0;
const INSET_X: f32 = 10.0;
/// Baseline of the first row below the box top
const FIRST_BASELINE: f32 = 7.0;
const ROW_STEP: f32 = 6.0;
/// Value column offset from its label
const VALUE_OFFSET: f32 = 25.0;

pub struct EquipmentInfoRenderer<'a> {
    fields: &'a [(&'static str, String)],
}

impl<'a> EquipmentInfoRenderer<'a> {
    pub fn new(fields: &'a [(&'static str, String)]) -> Self {
        Self { fields }
    }

    pub fn render(&self, ctx: &mut LayoutContext<'_>) {
        if self.fields.is_empty() {
            return;
        }
        let s = ctx.settings;
        let rows = self.fields.len().div_ceil(2);
        let height = FIRST_BASELINE + rows as f32 * ROW_STEP;

        if !ctx.fits(HEADING_HEIGHT + height, s.table_limit()) {
            ctx.new_page(s.margin);
        }
        let heading = TextStyle::new(s.body_font_size, ctx.palette.primary).bold();
        ctx.canvas.text(HEADING, s.margin, ctx.cursor.y + 5.0, heading);
        ctx.cursor.advance(HEADING_HEIGHT);

        let top = ctx.cursor.y;
        let width = ctx.cursor.content_width();
        ctx.canvas
            .rounded_rect(s.margin, top, width, height, CORNER_RADIUS, BOX_FILL);

        let size = s.detail_font_size;
        let label_style = TextStyle::new(size, BODY_TEXT).bold();
        let value_style = TextStyle::new(size, MUTED_TEXT);
        let half = width / 2.0;
        let value_width = half - VALUE_OFFSET - INSET_X;

        for (i, (label, value)) in self.fields.iter().enumerate() {
            let x = s.margin + INSET_X + (i % 2) as f32 * half;
            let baseline = top + FIRST_BASELINE + (i / 2) as f32 * ROW_STEP;
            ctx.canvas
                .text(format!("{}:", label), x, baseline, label_style);
            let value = ctx.truncate(value, value_width, size, FontStyle::REGULAR);
            ctx.canvas.text(value, x + VALUE_OFFSET, baseline, value_style);
        }

        ctx.cursor.advance(height + s.block_gap);
    }
}
