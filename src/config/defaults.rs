/// A4 portrait width in mm
pub const DEFAULT_PAGE_WIDTH: f32 = 210.0;

/// A4 portrait height in mm
pub const DEFAULT_PAGE_HEIGHT: f32 = 297.0;

/// Default page margin in mm
pub const DEFAULT_PAGE_MARGIN: f32 = 15.0;

/// Space kept free under the table rows (signatures and footer) in mm
pub const DEFAULT_TABLE_BOTTOM_RESERVE: f32 = 80.0;

/// Minimum room needed for the signature block in mm
pub const DEFAULT_SIGNATURE_RESERVE: f32 = 60.0;

/// Logo box on the first page in mm
pub const DEFAULT_LOGO_WIDTH: f32 = 55.0;
pub const DEFAULT_LOGO_HEIGHT: f32 = 25.0;

/// Vertical position of the accent rule under the header in mm
pub const DEFAULT_HEADER_RULE_Y: f32 = 48.0;

/// Where content starts on the first page in mm
pub const DEFAULT_CONTENT_TOP: f32 = 58.0;

/// Table header bar height in mm
pub const DEFAULT_TABLE_HEADER_HEIGHT: f32 = 10.0;

/// Table cell padding in mm
pub const DEFAULT_ROW_PADDING: f32 = 6.0;

/// Line height inside table cells in mm
pub const DEFAULT_ROW_LINE_HEIGHT: f32 = 5.2;

/// Minimum table row height in mm
pub const DEFAULT_MIN_ROW_HEIGHT: f32 = 18.0;

/// Info box line height in mm
pub const DEFAULT_BOX_LINE_HEIGHT: f32 = 7.0;

/// Minimum info box height in mm
pub const DEFAULT_BOX_MIN_HEIGHT: f32 = 32.0;

/// Gap between blocks in mm
pub const DEFAULT_BLOCK_GAP: f32 = 8.0;

/// Software list row height in mm
pub const DEFAULT_SOFTWARE_ROW_HEIGHT: f32 = 8.0;

/// Title font size in points
pub const DEFAULT_TITLE_FONT_SIZE: f32 = 20.0;

/// Header metadata (number, date) font size in points
pub const DEFAULT_META_FONT_SIZE: f32 = 10.0;

/// Body font size in points
pub const DEFAULT_BODY_FONT_SIZE: f32 = 10.0;

/// Small labels (table header, box labels) in points
pub const DEFAULT_LABEL_FONT_SIZE: f32 = 9.0;

/// Equipment details font size in points
pub const DEFAULT_DETAIL_FONT_SIZE: f32 = 8.0;

/// Footer font size in points
pub const DEFAULT_FOOTER_FONT_SIZE: f32 = 8.0;

/// Footer generation note font size in points
pub const DEFAULT_FOOTER_NOTE_FONT_SIZE: f32 = 7.0;
