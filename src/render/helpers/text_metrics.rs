//! Text measurement utilities for PDF builtin fonts
//!
//! Layout decisions (wrapping, truncation, right alignment) are taken against
//! the same Helvetica metrics the PDF backend draws with, so a line measured to
//! fit a column also fits once rendered.

use std::sync::OnceLock;

use printpdf::BuiltinFont;

/// Millimetres per inch
const MM_PER_INCH: f32 = 25.4;
/// Points per millimetre
pub const MM_TO_PT: f32 = 72.0 / MM_PER_INCH;
/// Millimetres per point
pub const PT_TO_MM: f32 = MM_PER_INCH / 72.0;

/// Weight and slant of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
}

impl FontStyle {
    pub const REGULAR: FontStyle = FontStyle {
        bold: false,
        italic: false,
    };
    pub const BOLD: FontStyle = FontStyle {
        bold: true,
        italic: false,
    };
    pub const ITALIC: FontStyle = FontStyle {
        bold: false,
        italic: true,
    };

    pub fn new(bold: bool, italic: bool) -> Self {
        Self { bold, italic }
    }

    /// The Helvetica face used to draw this style
    pub fn builtin_font(self) -> BuiltinFont {
        match (self.bold, self.italic) {
            (false, false) => BuiltinFont::Helvetica,
            (true, false) => BuiltinFont::HelveticaBold,
            (false, true) => BuiltinFont::HelveticaOblique,
            (true, true) => BuiltinFont::HelveticaBoldOblique,
        }
    }
}

/// Trait for text measurement operations
pub trait TextMeasure {
    /// Measure text width in mm at a given font size
    fn measure_text(&self, text: &str, font_size: f32, style: FontStyle) -> f32;
}

// =============================================================================
// Builtin PDF Font Metrics
// =============================================================================
//
// PDF's Standard 14 fonts have well-defined metrics from Adobe's AFM files.
// Character widths are in 1000 units per em.

/// Text measurer for one PDF builtin font
///
/// Uses hardcoded Adobe AFM metrics for accurate text measurement.
pub struct BuiltinFontMeasurer {
    font: BuiltinFont,
}

impl BuiltinFontMeasurer {
    pub fn new(font: BuiltinFont) -> Self {
        Self { font }
    }

    fn is_bold(&self) -> bool {
        matches!(
            self.font,
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique
        )
    }

    fn ascii_width(&self, code: u8) -> u16 {
        let table = if self.is_bold() {
            &HELVETICA_BOLD_WIDTHS
        } else {
            &HELVETICA_WIDTHS
        };
        table.get(code as usize).copied().unwrap_or(278)
    }

    /// Get character width in 1000 units per em
    fn char_width(&self, c: char) -> u16 {
        if c.is_ascii() {
            return self.ascii_width(c as u8);
        }

        if let Some(width) = latin_extra_width(c, self.is_bold()) {
            return width;
        }

        // Accented letters share the advance width of their base letter
        match fold_accent(c) {
            Some(base) => self.ascii_width(base as u8),
            None => 500,
        }
    }

    /// Measure text width in points
    pub fn measure_width_pt(&self, text: &str, font_size: f32) -> f32 {
        let total_width: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        (total_width as f32 / 1000.0) * font_size
    }

    /// Measure text width in mm
    pub fn measure_width_mm(&self, text: &str, font_size: f32) -> f32 {
        self.measure_width_pt(text, font_size) * PT_TO_MM
    }
}

/// Get a builtin font measurer for Helvetica (sans-serif regular)
pub fn get_helvetica_measurer() -> &'static BuiltinFontMeasurer {
    static MEASURER: OnceLock<BuiltinFontMeasurer> = OnceLock::new();
    MEASURER.get_or_init(|| BuiltinFontMeasurer::new(BuiltinFont::Helvetica))
}

/// Get a builtin font measurer for Helvetica-Bold
pub fn get_helvetica_bold_measurer() -> &'static BuiltinFontMeasurer {
    static MEASURER: OnceLock<BuiltinFontMeasurer> = OnceLock::new();
    MEASURER.get_or_init(|| BuiltinFontMeasurer::new(BuiltinFont::HelveticaBold))
}

/// Oblique faces share the upright advance widths
pub fn get_measurer(style: FontStyle) -> &'static BuiltinFontMeasurer {
    if style.bold {
        get_helvetica_bold_measurer()
    } else {
        get_helvetica_measurer()
    }
}

/// Helvetica family measurer used by the layout engine and the PDF backend
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl TextMeasure for HelveticaMetrics {
    fn measure_text(&self, text: &str, font_size: f32, style: FontStyle) -> f32 {
        get_measurer(style).measure_width_mm(text, font_size)
    }
}

/// Base letter of a Latin-1 accented letter
fn fold_accent(c: char) -> Option<char> {
    let base = match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ð' => 'D',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'Þ' => 'P',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    };
    Some(base)
}

/// AFM widths of the non-ASCII glyphs that do not follow their base letter
fn latin_extra_width(c: char, bold: bool) -> Option<u16> {
    let (regular, heavy) = match c {
        '\u{a0}' => (278, 278),
        '…' => (1000, 1000),
        '•' => (350, 350),
        '–' => (556, 556),
        '—' => (1000, 1000),
        '‘' | '’' => (222, 278),
        '“' | '”' => (333, 500),
        '«' | '»' => (556, 556),
        '°' => (400, 400),
        '€' => (556, 556),
        '×' | '±' => (584, 584),
        '©' | '®' => (737, 737),
        '²' | '³' => (333, 333),
        '·' => (278, 278),
        'ì'..='ï' => (278, 278),
        'ð' | 'þ' | 'µ' => (556, 611),
        'ß' => (611, 611),
        'æ' => (889, 889),
        'Æ' | 'Œ' => (1000, 1000),
        'œ' => (944, 944),
        _ => return None,
    };
    Some(if bold { heavy } else { regular })
}

// =============================================================================
// Adobe AFM Character Width Tables (ASCII subset, in 1000 units per em)
// =============================================================================

/// Helvetica character widths (indices 0-127, only 32-126 are valid)
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
];

/// Helvetica-Bold character widths
#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
];
