//! Two-column list of installed software on intervention sheets

use crate::model::WHITE;
use crate::render::helpers::canvas::TextStyle;
use crate::render::helpers::colors::{BODY_TEXT, MUTED_TEXT, ZEBRA_FILL};
use crate::render::helpers::text_metrics::FontStyle;
use crate::render::layouts::context::LayoutContext;

const HEADING_HEIGHT: f32 = 7.0;
const HEADER_LABEL: &str = "LOGICIEL";
const TEXT_INSET: f32 = 3.0;
const BASELINE: f32 = 5.5;

pub struct SoftwareListRenderer<'a> {
    names: &'a [String],
}

impl<'a> SoftwareListRenderer<'a> {
    pub fn new(names: &'a [String]) -> Self {
        Self { names }
    }

    pub fn render(&self, ctx: &mut LayoutContext<'_>) {
        if self.names.is_empty() {
            return;
        }
        let s = ctx.settings;
        let limit = s.table_limit();
        let row_h = s.software_row_height;

        // heading, header bar and one row stay together
        if !ctx.fits(HEADING_HEIGHT + 2.0 * row_h, limit) {
            ctx.new_page(s.margin);
        }
        let heading = TextStyle::new(s.body_font_size, ctx.palette.primary).bold();
        ctx.canvas
            .text("LOGICIELS INSTALLÉS", s.margin, ctx.cursor.y + 5.0, heading);
        ctx.cursor.advance(HEADING_HEIGHT);
        Self::draw_header(ctx);

        let half = ctx.cursor.content_width() / 2.0;
        let style = TextStyle::new(s.label_font_size, BODY_TEXT);
        for (row, pair) in self.names.chunks(2).enumerate() {
            if !ctx.fits(row_h, limit) {
                ctx.new_page(s.margin);
                Self::draw_header(ctx);
            }
            let y = ctx.cursor.y;
            if row % 2 == 0 {
                ctx.canvas
                    .fill_rect(s.margin, y, ctx.cursor.content_width(), row_h, ZEBRA_FILL);
            }
            for (col, name) in pair.iter().enumerate() {
                let x = s.margin + col as f32 * half + TEXT_INSET;
                let text = ctx.truncate(name, half - 2.0 * TEXT_INSET, s.label_font_size, FontStyle::REGULAR);
                ctx.canvas.text(text, x, y + BASELINE, style);
            }
            ctx.cursor.advance(row_h);
        }

        let total = TextStyle::new(s.detail_font_size, MUTED_TEXT).italic();
        ctx.canvas.text(
            format!("Total: {} logiciel(s) installé(s)", self.names.len()),
            s.margin,
            ctx.cursor.y + 5.0,
            total,
        );
        ctx.cursor.advance(row_h + s.block_gap);
    }

    fn draw_header(ctx: &mut LayoutContext<'_>) {
        let s = ctx.settings;
        let y = ctx.cursor.y;
        let width = ctx.cursor.content_width();
        ctx.canvas
            .fill_rect(s.margin, y, width, s.software_row_height, ctx.palette.primary);

        let style = TextStyle::new(s.label_font_size, WHITE).bold();
        ctx.canvas
            .text(HEADER_LABEL, s.margin + TEXT_INSET, y + BASELINE, style);
        ctx.canvas
            .text(HEADER_LABEL, s.margin + width / 2.0 + TEXT_INSET, y + BASELINE, style);
        ctx.cursor.advance(s.software_row_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutSettings;
    use crate::model::Palette;
    use crate::render::command::Page;
    use crate::render::helpers::text_metrics::HelveticaMetrics;

    fn render(names: &[String], start_y: f32) -> Vec<Page> {
        let settings = LayoutSettings::default();
        let mut ctx = LayoutContext::new(&settings, Palette::default(), &HelveticaMetrics);
        ctx.cursor.y = start_y;
        SoftwareListRenderer::new(names).render(&mut ctx);
        ctx.finish()
    }

    fn headers(page: &Page) -> usize {
        page.texts().filter(|t| *t == HEADER_LABEL).count() / 2
    }

    #[test]
    fn test_pairs_and_total() {
        let names: Vec<String> = ["Office", "Firefox", "7-Zip"].iter().map(|s| s.to_string()).collect();
        let pages = render(&names, 100.0);
        assert_eq!(pages.len(), 1);
        assert_eq!(headers(&pages[0]), 1);
        assert!(pages[0].contains_text("7-Zip"));
        assert!(pages[0].contains_text("Total: 3 logiciel(s) installé(s)"));
    }

    #[test]
    fn test_header_repeated_after_page_break() {
        let names: Vec<String> = (0..40).map(|i| format!("Logiciel {}", i)).collect();
        // 20 rows of 8 mm starting near the bottom reserve
        let pages = render(&names, 150.0);
        assert_eq!(pages.len(), 2);
        assert_eq!(headers(&pages[0]), 1);
        assert_eq!(headers(&pages[1]), 1);
        assert!(pages[1].contains_text("Logiciel 39"));
    }

    #[test]
    fn test_empty_list_draws_nothing() {
        let pages = render(&[], 100.0);
        assert!(pages[0].commands.is_empty());
    }
}
