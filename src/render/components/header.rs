//! First-page header: logo, title, number and date, accent rule

use std::sync::Arc;

use crate::model::Logo;
use crate::render::command::TextAlign;
use crate::render::helpers::canvas::TextStyle;
use crate::render::helpers::colors::MUTED_TEXT;
use crate::render::layouts::context::LayoutContext;

/// Accent rule thickness in mm
const RULE_WIDTH: f32 = 2.0;

/// Offsets of the header lines below the top margin
const TITLE_OFFSET: f32 = 8.0;
const NUMBER_OFFSET: f32 = 15.0;
const DATE_OFFSET: f32 = 21.0;

pub struct HeaderRenderer<'a> {
    pub title: &'a str,
    pub number: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub logo: Option<&'a Logo>,
}

impl<'a> HeaderRenderer<'a> {
    /// Draw the header and move the cursor to the content area
    pub fn render(&self, ctx: &mut LayoutContext<'_>) {
        let s = ctx.settings;
        let m = s.margin;
        let right = s.page_width - m;

        if let Some(logo) = self.logo {
            ctx.canvas.image(
                Arc::from(logo.bytes.as_slice()),
                logo.format,
                m,
                m,
                s.logo_width,
                s.logo_height,
            );
        }

        let title_style = TextStyle::new(s.title_font_size, ctx.palette.primary)
            .bold()
            .align(TextAlign::Right);
        ctx.canvas.text(self.title, right, m + TITLE_OFFSET, title_style);

        let meta = TextStyle::new(s.meta_font_size, MUTED_TEXT).align(TextAlign::Right);
        ctx.canvas
            .text(format!("N° {}", self.number), right, m + NUMBER_OFFSET, meta);
        ctx.canvas.text(
            format!("{} - {}", self.date, self.time),
            right,
            m + DATE_OFFSET,
            meta,
        );

        ctx.canvas.line(
            m,
            s.header_rule_y,
            right,
            s.header_rule_y,
            ctx.palette.accent,
            RULE_WIDTH,
        );

        ctx.cursor.y = s.content_top;
    }
}
