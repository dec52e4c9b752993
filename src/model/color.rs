use std::fmt;

use crate::parser::hex::parse_hex_color;

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the `#` is optional). Exactly six hex digits are required.
    pub fn from_hex(value: &str) -> Option<Self> {
        parse_hex_color(value)
    }

    /// Build from integer channels, rejecting anything outside 0..=255
    pub fn from_channels(channels: &[i64]) -> Option<Self> {
        match channels {
            [r, g, b] => Some(Self::new(
                u8::try_from(*r).ok()?,
                u8::try_from(*g).ok()?,
                u8::try_from(*b).ok()?,
            )),
            _ => None,
        }
    }

    /// Add `delta` to every channel, saturating at 255
    pub fn lighten(self, delta: u8) -> Self {
        Self::new(
            self.r.saturating_add(delta),
            self.g.saturating_add(delta),
            self.b.saturating_add(delta),
        )
    }

    /// Squared Euclidean distance in RGB space
    pub fn distance_sq(self, other: Color) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Near-white pixels are treated as background
    pub fn is_near_white(self) -> bool {
        self.r > 240 && self.g > 240 && self.b > 240
    }

    /// Channels scaled to 0.0-1.0 for PDF color operators
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);

/// Amount added to each channel when an accent is derived from a primary color
pub const ACCENT_LIGHTEN: u8 = 40;

/// Primary/accent pair used to theme a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub accent: Color,
}

impl Palette {
    pub const fn new(primary: Color, accent: Color) -> Self {
        Self { primary, accent }
    }

    /// Palette with the accent derived by lightening the primary
    pub fn from_primary(primary: Color) -> Self {
        Self::new(primary, primary.lighten(ACCENT_LIGHTEN))
    }
}

impl Default for Palette {
    fn default() -> Self {
        DEFAULT_PALETTE
    }
}

pub const DEFAULT_PALETTE: Palette = Palette::new(Color::new(26, 35, 126), Color::new(33, 150, 243));
