use printpdf::Rgb;

use crate::model::Color;

/// Background of info and notes boxes
pub const BOX_FILL: Color = Color::new(248, 249, 250);

/// Zebra stripe on even table rows
pub const ZEBRA_FILL: Color = Color::gray(250);

/// Row borders and separators
pub const RULE: Color = Color::gray(220);

/// Signature lines
pub const SIGNATURE_RULE: Color = Color::gray(180);

/// Serial and inventory text
pub const BODY_TEXT: Color = Color::gray(60);

/// Notes text
pub const NOTE_TEXT: Color = Color::gray(40);

/// Secondary text (dates, detail values, placeholders)
pub const MUTED_TEXT: Color = Color::gray(100);

/// Empty-state and generation notes
pub const FAINT_TEXT: Color = Color::gray(120);

/// Page numbers
pub const FOOTER_TEXT: Color = Color::gray(150);

/// Convert to a printpdf RGB color
pub fn to_rgb(color: Color) -> Rgb {
    let (r, g, b) = color.to_unit();
    Rgb::new(r, g, b, None)
}
