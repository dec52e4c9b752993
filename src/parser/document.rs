use crate::error::ConfigError;
use crate::model::DocumentModel;

/// Parse a document request from JSON
///
/// Palette and logo are not part of the request; they are attached after
/// theme resolution.
pub fn parse_document(json: &str) -> Result<DocumentModel, ConfigError> {
    let doc: DocumentModel = serde_json::from_str(json)?;
    log::debug!(
        "Parsed {} {} with {} equipment line(s)",
        doc.kind.number_prefix(),
        doc.number,
        doc.equipment.len()
    );
    Ok(doc)
}
