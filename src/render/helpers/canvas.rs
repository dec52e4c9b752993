//! Collects draw commands page by page
//!
//! The layout counterpart of [`LayerBuilder`](super::layer::LayerBuilder): the
//! engine emits backend-neutral commands here, the PDF backend later turns
//! each page into printpdf operations.

use std::sync::Arc;

use crate::model::{Color, ImageFormat};
use crate::render::command::{DrawCommand, Page, TextAlign};

use super::text_metrics::FontStyle;

/// Font, color and alignment of a text run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub font: FontStyle,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(font_size: f32, color: Color) -> Self {
        Self {
            font_size,
            font: FontStyle::REGULAR,
            color,
            align: TextAlign::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.font.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.font.italic = true;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// Pages under construction
#[derive(Debug)]
pub struct Canvas {
    finished: Vec<Page>,
    current: Page,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            finished: Vec::new(),
            current: Page::new(1),
        }
    }

    /// Close the current page and start the next one
    pub fn new_page(&mut self) {
        let next = Page::new(self.current.number + 1);
        let done = std::mem::replace(&mut self.current, next);
        self.finished.push(done);
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.current.commands.push(command);
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.push(DrawCommand::FillRect {
            x,
            y,
            w,
            h,
            color,
            radius: 0.0,
        });
    }

    pub fn rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, color: Color) {
        self.push(DrawCommand::FillRect {
            x,
            y,
            w,
            h,
            color,
            radius,
        });
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color, width: f32) {
        self.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        });
    }

    /// Draw a single line of text; blank strings are skipped
    pub fn text<S: Into<String>>(&mut self, content: S, x: f32, y: f32, style: TextStyle) {
        let content = content.into();
        if content.is_empty() {
            return;
        }
        self.push(DrawCommand::Text {
            x,
            y,
            content,
            font_size: style.font_size,
            bold: style.font.bold,
            italic: style.font.italic,
            color: style.color,
            align: style.align,
        });
    }

    pub fn image(&mut self, bytes: Arc<[u8]>, format: ImageFormat, x: f32, y: f32, w: f32, h: f32) {
        self.push(DrawCommand::Image {
            x,
            y,
            w,
            h,
            bytes,
            format,
        });
    }

    pub fn into_pages(mut self) -> Vec<Page> {
        self.finished.push(self.current);
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_are_numbered_in_order() {
        let mut canvas = Canvas::new();
        canvas.text("one", 0.0, 10.0, TextStyle::new(10.0, Color::gray(0)));
        canvas.new_page();
        canvas.new_page();

        let pages = canvas.into_pages();
        assert_eq!(pages.iter().map(|p| p.number).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(pages[0].contains_text("one"));
        assert!(pages[1].commands.is_empty());
    }

    #[test]
    fn test_empty_text_is_skipped() {
        let mut canvas = Canvas::new();
        canvas.text("", 0.0, 0.0, TextStyle::new(10.0, Color::gray(0)).bold());
        assert!(canvas.into_pages()[0].commands.is_empty());
    }
}
