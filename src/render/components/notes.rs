//! Free-text notes in a shaded box, paginated line by line

use crate::error::LayoutError;
use crate::render::helpers::canvas::TextStyle;
use crate::render::helpers::colors::{BOX_FILL, NOTE_TEXT};
use crate::render::helpers::text_metrics::FontStyle;
use crate::render::layouts::context::LayoutContext;

const LINE_HEIGHT: f32 = 5.0;
const PAD_X: f32 = 5.0;
const PAD_Y: f32 = 4.0;
/// Baseline of the first line below the padding
const ASCENT: f32 = 3.5;
const HEADING_HEIGHT: f32 = 7.0;
const CORNER_RADIUS: f32 = 2.0;
const BULLET: &str = "•";
const BULLET_INDENT: f32 = 4.0;

#[derive(Debug, Clone, PartialEq)]
struct NoteLine {
    text: String,
    /// First line of a bullet paragraph
    bullet: bool,
}

pub struct NotesRenderer<'a> {
    heading: &'a str,
    text: &'a str,
    bullets: bool,
}

impl<'a> NotesRenderer<'a> {
    pub fn new(heading: &'a str, text: &'a str, bullets: bool) -> Self {
        Self {
            heading,
            text,
            bullets,
        }
    }

    /// Fails when a fresh page has no room for a single line
    pub fn render(&self, ctx: &mut LayoutContext<'_>) -> Result<(), LayoutError> {
        let s = ctx.settings;
        let limit = s.table_limit();
        let lines = self.wrap(ctx);
        if lines.is_empty() {
            return Ok(());
        }

        if !ctx.fits(HEADING_HEIGHT + 2.0 * PAD_Y + LINE_HEIGHT, limit) {
            ctx.new_page(s.margin);
        }
        let heading = TextStyle::new(s.body_font_size, ctx.palette.primary).bold();
        ctx.canvas
            .text(self.heading, s.margin, ctx.cursor.y + 5.0, heading);
        ctx.cursor.advance(HEADING_HEIGHT);

        let mut remaining = lines.as_slice();
        let mut fresh_page = false;
        while !remaining.is_empty() {
            let room = limit - ctx.cursor.y - 2.0 * PAD_Y;
            let fit = ((room / LINE_HEIGHT).floor().max(0.0) as usize).min(remaining.len());
            if fit == 0 {
                if fresh_page {
                    return Err(LayoutError::InvalidGeometry(format!(
                        "page height {} mm cannot hold a line of notes",
                        s.page_height
                    )));
                }
                ctx.new_page(s.margin);
                fresh_page = true;
                continue;
            }

            let (chunk, rest) = remaining.split_at(fit);
            self.draw_chunk(ctx, chunk);
            remaining = rest;
            if !remaining.is_empty() {
                log::debug!("Notes continue on next page ({} lines left)", remaining.len());
                ctx.new_page(s.margin);
                fresh_page = true;
            }
        }

        ctx.cursor.advance(s.block_gap);
        Ok(())
    }

    fn text_width(&self, ctx: &LayoutContext<'_>) -> f32 {
        let width = ctx.cursor.content_width() - 2.0 * PAD_X;
        if self.bullets {
            width - BULLET_INDENT
        } else {
            width
        }
    }

    fn wrap(&self, ctx: &LayoutContext<'_>) -> Vec<NoteLine> {
        let size = ctx.settings.label_font_size;
        let width = self.text_width(ctx);

        if !self.bullets {
            return ctx
                .wrap(self.text, width, size, FontStyle::REGULAR)
                .into_iter()
                .map(|text| NoteLine {
                    text,
                    bullet: false,
                })
                .collect();
        }

        let mut out = Vec::new();
        for paragraph in self.text.lines().map(str::trim).filter(|p| !p.is_empty()) {
            let wrapped = ctx.wrap(paragraph, width, size, FontStyle::REGULAR);
            out.extend(wrapped.into_iter().enumerate().map(|(i, text)| NoteLine {
                text,
                bullet: i == 0,
            }));
        }
        out
    }

    fn draw_chunk(&self, ctx: &mut LayoutContext<'_>, lines: &[NoteLine]) {
        let s = ctx.settings;
        let top = ctx.cursor.y;
        let height = 2.0 * PAD_Y + lines.len() as f32 * LINE_HEIGHT;

        ctx.canvas.rounded_rect(
            s.margin,
            top,
            ctx.cursor.content_width(),
            height,
            CORNER_RADIUS,
            BOX_FILL,
        );

        let style = TextStyle::new(s.label_font_size, NOTE_TEXT);
        let x = s.margin + PAD_X;
        let text_x = if self.bullets { x + BULLET_INDENT } else { x };
        for (i, line) in lines.iter().enumerate() {
            let baseline = top + PAD_Y + ASCENT + i as f32 * LINE_HEIGHT;
            if line.bullet {
                ctx.canvas.text(BULLET, x, baseline, style);
            }
            ctx.canvas.text(line.text.as_str(), text_x, baseline, style);
        }

        ctx.cursor.advance(height);
    }
}
