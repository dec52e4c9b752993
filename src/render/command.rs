//! Backend-neutral drawing commands
//!
//! Coordinates are millimetres from the top-left corner of the page. For text
//! `y` is the baseline and `x` the anchor given by `align`.

use std::sync::Arc;

use crate::model::{Color, ImageFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
        /// Corner radius, 0 for square corners
        radius: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
        width: f32,
    },
    Text {
        x: f32,
        y: f32,
        content: String,
        font_size: f32,
        bold: bool,
        italic: bool,
        color: Color,
        align: TextAlign,
    },
    Image {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        bytes: Arc<[u8]>,
        format: ImageFormat,
    },
    NewPage,
}

impl DrawCommand {
    /// Text content, if this is a text command
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Vertical extent `(top, bottom)` covered by the command
    pub fn vertical_extent(&self) -> Option<(f32, f32)> {
        match *self {
            DrawCommand::FillRect { y, h, .. } | DrawCommand::Image { y, h, .. } => Some((y, y + h)),
            DrawCommand::Line { y1, y2, .. } => Some((y1.min(y2), y1.max(y2))),
            DrawCommand::Text { y, .. } => Some((y, y)),
            DrawCommand::NewPage => None,
        }
    }
}

/// One laid-out page
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based page number
    pub number: usize,
    pub commands: Vec<DrawCommand>,
}

impl Page {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            commands: Vec::new(),
        }
    }

    /// All text drawn on the page, in emission order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(DrawCommand::text)
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }
}

/// Result of a layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<Page>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Flat command sequence with `NewPage` between pages
    pub fn command_stream(&self) -> Vec<DrawCommand> {
        let mut out = Vec::new();
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                out.push(DrawCommand::NewPage);
            }
            out.extend(page.commands.iter().cloned());
        }
        out
    }
}
