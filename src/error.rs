use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Duplicate equipment in document: {}", keys.join(", "))]
    DuplicateEquipment { keys: Vec<String> },

    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error("Failed to decode image: {0}")]
    ImageDecode(String),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid color specification: {0}")]
    InvalidColor(String),

    #[error("Invalid sidecar descriptor: {0}")]
    InvalidSidecar(String),

    #[error("Invalid document request: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}
