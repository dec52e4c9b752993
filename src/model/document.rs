use serde::Deserialize;

use super::color::Palette;
use super::equipment::EquipmentLine;

/// Issuing company
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Company {
    pub name: String,
    pub code: Option<String>,
}

/// Person the document is addressed to (or who returns the equipment)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Recipient {
    pub name: String,
    pub email: Option<String>,
    pub office: Option<String>,
}

/// What kind of document is produced, with the fields specific to it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentKind {
    DeliveryNote,
    ReturnNote {
        destination: String,
        #[serde(default)]
        reason: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Intervention {
        #[serde(default)]
        service: Option<String>,
        #[serde(default)]
        phone: Option<String>,
        #[serde(default)]
        started_at: Option<String>,
        #[serde(default)]
        ended_at: Option<String>,
        #[serde(default)]
        duration_minutes: Option<u32>,
        #[serde(default)]
        software: Vec<String>,
    },
}

impl DocumentKind {
    /// Prefix of sequential document numbers
    pub fn number_prefix(&self) -> &'static str {
        match self {
            DocumentKind::DeliveryNote => "BL",
            DocumentKind::ReturnNote { .. } => "BR",
            DocumentKind::Intervention { .. } => "FI",
        }
    }

    /// Delivery and return notes refuse to list the same equipment twice
    pub fn requires_unique_equipment(&self) -> bool {
        matches!(
            self,
            DocumentKind::DeliveryNote | DocumentKind::ReturnNote { .. }
        )
    }
}

/// Logo image attached to the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Guess the format from a file extension (anything but `.png` is JPEG)
    pub fn from_extension(ext: &str) -> Self {
        if ext.eq_ignore_ascii_case("png") {
            ImageFormat::Png
        } else {
            ImageFormat::Jpeg
        }
    }
}

/// Everything needed to lay out one document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentModel {
    pub kind: DocumentKind,
    /// Sequential number, e.g. `BL-2024-0007`
    pub number: String,
    pub date: String,
    pub time: String,
    /// Human readable generation timestamp printed in footers
    pub generated_at: String,
    pub company: Company,
    #[serde(default)]
    pub recipient: Recipient,
    #[serde(default)]
    pub equipment: Vec<EquipmentLine>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(skip)]
    pub palette: Palette,
    #[serde(skip)]
    pub logo: Option<Logo>,
}

impl DocumentModel {
    /// Notes with surrounding whitespace removed, `None` when blank
    pub fn trimmed_notes(&self) -> Option<&str> {
        self.notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_logo(mut self, logo: Logo) -> Self {
        self.logo = Some(logo);
        self
    }
}

/// Format a sequential number as `PREFIX-YYYY-NNNN`
pub fn format_document_number(prefix: &str, year: i32, sequence: u32) -> String {
    format!("{}-{}-{:04}", prefix, year, sequence)
}
