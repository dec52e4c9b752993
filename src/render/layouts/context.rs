use crate::config::LayoutSettings;
use crate::model::Palette;
use crate::render::command::Page;
use crate::render::helpers::canvas::Canvas;
use crate::render::helpers::text_metrics::{FontStyle, TextMeasure};
use crate::render::helpers::wrap::{measure_lines, truncate_to_width};

/// Position of the layout pass: page and vertical offset from the page top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    /// 0-based index of the page being filled
    pub page_index: usize,
    /// Distance from the top edge in mm
    pub y: f32,
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
}

impl PageCursor {
    pub fn new(settings: &LayoutSettings) -> Self {
        Self {
            page_index: 0,
            y: settings.margin,
            page_width: settings.page_width,
            page_height: settings.page_height,
            margin: settings.margin,
        }
    }

    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }
}

/// Mutable state shared by the components during one document layout
pub struct LayoutContext<'a> {
    pub settings: &'a LayoutSettings,
    pub palette: Palette,
    pub measurer: &'a dyn TextMeasure,
    pub cursor: PageCursor,
    pub canvas: Canvas,
}

impl<'a> LayoutContext<'a> {
    pub fn new(settings: &'a LayoutSettings, palette: Palette, measurer: &'a dyn TextMeasure) -> Self {
        Self {
            settings,
            palette,
            measurer,
            cursor: PageCursor::new(settings),
            canvas: Canvas::new(),
        }
    }

    /// Start a new page and put the cursor at `top`
    pub fn new_page(&mut self, top: f32) {
        self.canvas.new_page();
        self.cursor.page_index += 1;
        self.cursor.y = top;
        log::debug!("Page break, now on page {}", self.cursor.page_index + 1);
    }

    /// Whether a block of `height` mm starting at the cursor stays above `limit`
    pub fn fits(&self, height: f32, limit: f32) -> bool {
        self.cursor.y + height <= limit
    }

    pub fn text_width(&self, text: &str, font_size: f32, style: FontStyle) -> f32 {
        self.measurer.measure_text(text, font_size, style)
    }

    pub fn wrap(&self, text: &str, width: f32, font_size: f32, style: FontStyle) -> Vec<String> {
        measure_lines(text, width, font_size, style, self.measurer)
    }

    pub fn truncate(&self, text: &str, width: f32, font_size: f32, style: FontStyle) -> String {
        truncate_to_width(text, width, font_size, style, self.measurer)
    }

    pub fn finish(self) -> Vec<Page> {
        self.canvas.into_pages()
    }
}
