//! Page footers, applied once the final page count is known

use crate::config::LayoutSettings;
use crate::model::Palette;
use crate::render::command::{DrawCommand, Page, TextAlign};
use crate::render::helpers::colors::{FAINT_TEXT, FOOTER_TEXT};

const RULE_OFFSET: f32 = 18.0;
const NOTE_OFFSET: f32 = 12.0;
const PAGE_OFFSET: f32 = 10.0;
const COMPANY_OFFSET: f32 = 6.0;
const RULE_WIDTH: f32 = 1.5;

pub struct FooterRenderer<'a> {
    settings: &'a LayoutSettings,
    palette: Palette,
    generated_at: &'a str,
    company: &'a str,
}

impl<'a> FooterRenderer<'a> {
    pub fn new(settings: &'a LayoutSettings, palette: Palette, generated_at: &'a str, company: &'a str) -> Self {
        Self {
            settings,
            palette,
            generated_at,
            company,
        }
    }

    /// Append one footer block to every page
    pub fn apply(&self, pages: &mut [Page]) {
        let total = pages.len();
        for page in pages.iter_mut() {
            let number = page.number;
            page.commands.extend(self.footer(number, total));
        }
    }

    fn footer(&self, number: usize, total: usize) -> Vec<DrawCommand> {
        let s = self.settings;
        let h = s.page_height;
        let center = s.page_width / 2.0;

        let mut out = vec![
            DrawCommand::Line {
                x1: s.margin,
                y1: h - RULE_OFFSET,
                x2: s.page_width - s.margin,
                y2: h - RULE_OFFSET,
                color: self.palette.accent,
                width: RULE_WIDTH,
            },
            DrawCommand::Text {
                x: center,
                y: h - NOTE_OFFSET,
                content: format!("Document généré le {}", self.generated_at),
                font_size: s.footer_note_font_size,
                bold: false,
                italic: true,
                color: FAINT_TEXT,
                align: TextAlign::Center,
            },
        ];

        let company = self.company.trim();
        if !company.is_empty() {
            out.push(DrawCommand::Text {
                x: center,
                y: h - COMPANY_OFFSET,
                content: company.to_string(),
                font_size: s.footer_font_size,
                bold: true,
                italic: false,
                color: self.palette.primary,
                align: TextAlign::Center,
            });
        }

        out.push(DrawCommand::Text {
            x: s.page_width - s.margin,
            y: h - PAGE_OFFSET,
            content: page_label(number, total),
            font_size: s.footer_font_size,
            bold: false,
            italic: false,
            color: FOOTER_TEXT,
            align: TextAlign::Right,
        });
        out
    }
}

pub fn page_label(number: usize, total: usize) -> String {
    format!("Page {}/{}", number, total)
}
