//! Two side-by-side rounded boxes under the header
//!
//! Each box is wrapped once; the same lines give its height and are drawn.

use crate::model::BLACK;
use crate::render::helpers::canvas::TextStyle;
use crate::render::helpers::colors::{BOX_FILL, MUTED_TEXT};
use crate::render::helpers::text_metrics::FontStyle;
use crate::render::layouts::context::LayoutContext;
use crate::render::layouts::templates::InfoBox;

const CORNER_RADIUS: f32 = 3.0;
const PADDING_X: f32 = 5.0;
const LABEL_OFFSET: f32 = 6.0;
const FIRST_LINE_OFFSET: f32 = 13.0;
/// Space above the first line and below the last one
const VERTICAL_CHROME: f32 = 11.0;

const TITLE_FONT_SIZE: f32 = 12.0;

/// One laid-out line of a box
#[derive(Debug, Clone, PartialEq)]
struct BoxLine {
    text: String,
    title: bool,
}

pub struct InfoBoxesRenderer<'a> {
    pub left: &'a InfoBox,
    pub right: &'a InfoBox,
}

impl<'a> InfoBoxesRenderer<'a> {
    pub fn render(&self, ctx: &mut LayoutContext<'_>) {
        let s = ctx.settings;
        let m = s.margin;
        let col_width = (s.page_width - 3.0 * m) / 2.0;
        let right_x = s.page_width / 2.0 + m / 2.0;

        let left_lines = Self::wrap_box(ctx, self.left, col_width);
        let right_lines = Self::wrap_box(ctx, self.right, col_width);

        let height = Self::box_height(ctx, left_lines.len().max(right_lines.len()));
        log::debug!("Info boxes: {:.1} mm high", height);

        let top = ctx.cursor.y;
        Self::draw_box(ctx, self.left, &left_lines, m, top, col_width, height);
        Self::draw_box(ctx, self.right, &right_lines, right_x, top, col_width, height);

        ctx.cursor.advance(height + s.block_gap);
    }

    /// Height shared by both boxes for the longer content
    fn box_height(ctx: &LayoutContext<'_>, lines: usize) -> f32 {
        let s = ctx.settings;
        (VERTICAL_CHROME + s.box_line_height * lines as f32).max(s.box_min_height)
    }

    fn wrap_box(ctx: &LayoutContext<'_>, info: &InfoBox, col_width: f32) -> Vec<BoxLine> {
        let width = col_width - 2.0 * PADDING_X;
        let body_size = ctx.settings.label_font_size;

        let mut lines: Vec<BoxLine> = ctx
            .wrap(&info.title, width, TITLE_FONT_SIZE, FontStyle::BOLD)
            .into_iter()
            .map(|text| BoxLine { text, title: true })
            .collect();

        for detail in &info.lines {
            lines.extend(
                ctx.wrap(detail, width, body_size, FontStyle::REGULAR)
                    .into_iter()
                    .map(|text| BoxLine { text, title: false }),
            );
        }
        lines
    }

    fn draw_box(
        ctx: &mut LayoutContext<'_>,
        info: &InfoBox,
        lines: &[BoxLine],
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) {
        let s = ctx.settings;
        ctx.canvas
            .rounded_rect(x, y, width, height, CORNER_RADIUS, BOX_FILL);

        let label_style = TextStyle::new(s.label_font_size, MUTED_TEXT).bold();
        ctx.canvas
            .text(info.label.as_str(), x + PADDING_X, y + LABEL_OFFSET, label_style);

        let title_style = TextStyle::new(TITLE_FONT_SIZE, BLACK).bold();
        let detail_style = TextStyle::new(s.label_font_size, MUTED_TEXT);

        for (i, line) in lines.iter().enumerate() {
            let baseline = y + FIRST_LINE_OFFSET + s.box_line_height * i as f32;
            let style = if line.title { title_style } else { detail_style };
            ctx.canvas
                .text(line.text.as_str(), x + PADDING_X, baseline, style);
        }
    }
}
