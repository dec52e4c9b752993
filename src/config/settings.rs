use crate::cli::Args;
use crate::error::LayoutError;

use super::defaults::*;

/// Geometry and typography for one layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSettings {
    // Page dimensions (in mm)
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,

    // Pagination
    pub table_bottom_reserve: f32,
    pub signature_reserve: f32,

    // Header block (in mm)
    pub logo_width: f32,
    pub logo_height: f32,
    pub header_rule_y: f32,
    pub content_top: f32,

    // Blocks and tables (in mm)
    pub table_header_height: f32,
    pub row_padding: f32,
    pub row_line_height: f32,
    pub min_row_height: f32,
    pub box_line_height: f32,
    pub box_min_height: f32,
    pub block_gap: f32,
    pub software_row_height: f32,

    // Typography (in points)
    pub title_font_size: f32,
    pub meta_font_size: f32,
    pub body_font_size: f32,
    pub label_font_size: f32,
    pub detail_font_size: f32,
    pub footer_font_size: f32,
    pub footer_note_font_size: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            margin: DEFAULT_PAGE_MARGIN,

            table_bottom_reserve: DEFAULT_TABLE_BOTTOM_RESERVE,
            signature_reserve: DEFAULT_SIGNATURE_RESERVE,

            logo_width: DEFAULT_LOGO_WIDTH,
            logo_height: DEFAULT_LOGO_HEIGHT,
            header_rule_y: DEFAULT_HEADER_RULE_Y,
            content_top: DEFAULT_CONTENT_TOP,

            table_header_height: DEFAULT_TABLE_HEADER_HEIGHT,
            row_padding: DEFAULT_ROW_PADDING,
            row_line_height: DEFAULT_ROW_LINE_HEIGHT,
            min_row_height: DEFAULT_MIN_ROW_HEIGHT,
            box_line_height: DEFAULT_BOX_LINE_HEIGHT,
            box_min_height: DEFAULT_BOX_MIN_HEIGHT,
            block_gap: DEFAULT_BLOCK_GAP,
            software_row_height: DEFAULT_SOFTWARE_ROW_HEIGHT,

            title_font_size: DEFAULT_TITLE_FONT_SIZE,
            meta_font_size: DEFAULT_META_FONT_SIZE,
            body_font_size: DEFAULT_BODY_FONT_SIZE,
            label_font_size: DEFAULT_LABEL_FONT_SIZE,
            detail_font_size: DEFAULT_DETAIL_FONT_SIZE,
            footer_font_size: DEFAULT_FOOTER_FONT_SIZE,
            footer_note_font_size: DEFAULT_FOOTER_NOTE_FONT_SIZE,
        }
    }
}

impl LayoutSettings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let (page_width, page_height) = args.page_dimensions();
        Self {
            page_width,
            page_height,
            margin: args.margin.unwrap_or(DEFAULT_PAGE_MARGIN),
            ..Default::default()
        }
    }

    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Get the usable content area width
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Lowest y a table row may reach before a page break
    pub fn table_limit(&self) -> f32 {
        self.page_height - self.table_bottom_reserve
    }

    /// Reject geometry that cannot hold a single table row
    pub fn validate(&self) -> Result<(), LayoutError> {
        let geometry = [
            ("page width", self.page_width),
            ("page height", self.page_height),
            ("margin", self.margin),
        ];
        if let Some((name, value)) = geometry.iter().find(|(_, v)| !v.is_finite()) {
            return Err(LayoutError::InvalidGeometry(format!("{} is {}", name, value)));
        }
        if !(self.page_width > 0.0 && self.page_height > 0.0) {
            return Err(LayoutError::InvalidGeometry(format!(
                "page size {}x{} mm",
                self.page_width, self.page_height
            )));
        }
        if self.margin < 0.0 || self.content_width() <= 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "margin {} mm leaves no content width",
                self.margin
            )));
        }
        let usable = self.table_limit() - self.margin - self.table_header_height;
        if usable < self.min_row_height {
            return Err(LayoutError::InvalidGeometry(format!(
                "page height {} mm cannot hold a table row",
                self.page_height
            )));
        }
        Ok(())
    }
}
