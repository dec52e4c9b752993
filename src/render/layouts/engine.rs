//! Document layout engine
//!
//! Runs the sections of a document in order over one [`LayoutContext`]:
//! 1. Header (first page only)
//! 2. Info boxes
//! 3. Serviced machine summary (intervention sheets)
//! 4. Equipment table, or the empty-state note
//! 5. Notes, when present
//! 6. Installed software (intervention sheets)
//! 7. Signatures
//!
//! Footers are added afterwards, once the page count is final.

use crate::config::LayoutSettings;
use crate::error::LayoutError;
use crate::model::{find_duplicate_keys, DocumentModel};
use crate::render::command::LaidOutDocument;
use crate::render::components::{
    EquipmentInfoRenderer, EquipmentTableRenderer, FooterRenderer, HeaderRenderer,
    InfoBoxesRenderer, NotesRenderer, SignaturesRenderer, SoftwareListRenderer,
};
use crate::render::helpers::text_metrics::{HelveticaMetrics, TextMeasure};

use super::context::LayoutContext;
use super::templates::DocumentTemplate;

/// Lays documents out into pages of draw commands
pub struct LayoutEngine {
    settings: LayoutSettings,
}

impl LayoutEngine {
    pub fn new(settings: LayoutSettings) -> Self {
        Self { settings }
    }

    /// Lay out `doc` measuring text with the builtin Helvetica metrics
    pub fn layout(&self, doc: &DocumentModel) -> Result<LaidOutDocument, LayoutError> {
        self.layout_with(doc, &HelveticaMetrics)
    }

    /// Lay out `doc` with a caller-provided text measurer
    pub fn layout_with(
        &self,
        doc: &DocumentModel,
        measurer: &dyn TextMeasure,
    ) -> Result<LaidOutDocument, LayoutError> {
        self.settings.validate()?;
        validate_equipment(doc)?;

        let template = DocumentTemplate::for_document(doc);
        let mut ctx = LayoutContext::new(&self.settings, doc.palette, measurer);

        HeaderRenderer {
            title: template.title,
            number: &doc.number,
            date: &doc.date,
            time: &doc.time,
            logo: doc.logo.as_ref(),
        }
        .render(&mut ctx);

        InfoBoxesRenderer {
            left: &template.left,
            right: &template.right,
        }
        .render(&mut ctx);

        if let Some(fields) = &template.equipment_info {
            EquipmentInfoRenderer::new(fields).render(&mut ctx);
        }

        EquipmentTableRenderer::new(&doc.equipment).render(&mut ctx);

        if let Some(notes) = doc.trimmed_notes() {
            NotesRenderer::new(template.notes_heading, notes, template.bullet_notes).render(&mut ctx)?;
        }

        SoftwareListRenderer::new(&template.software).render(&mut ctx);
        SignaturesRenderer::new(template.signatures).render(&mut ctx);

        let mut pages = ctx.finish();
        FooterRenderer::new(&self.settings, doc.palette, &doc.generated_at, &doc.company.name)
            .apply(&mut pages);

        log::info!(
            "Laid out {} ({} equipment lines) on {} page(s)",
            doc.number,
            doc.equipment.len(),
            pages.len()
        );

        Ok(LaidOutDocument {
            page_width: self.settings.page_width,
            page_height: self.settings.page_height,
            pages,
        })
    }
}

/// Reject delivery and return notes that list the same equipment twice
pub fn validate_equipment(doc: &DocumentModel) -> Result<(), LayoutError> {
    if !doc.kind.requires_unique_equipment() {
        return Ok(());
    }
    let keys = find_duplicate_keys(&doc.equipment);
    if keys.is_empty() {
        Ok(())
    } else {
        log::warn!("Rejecting {}: duplicate equipment {:?}", doc.number, keys);
        Err(LayoutError::DuplicateEquipment { keys })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Company, DocumentKind, EquipmentLine, Recipient};

    fn doc(kind: DocumentKind, equipment: Vec<EquipmentLine>) -> DocumentModel {
        DocumentModel {
            kind,
            number: "BL-2024-0001".to_string(),
            date: "01/02/2024".to_string(),
            time: "10:00".to_string(),
            generated_at: "01/02/2024 10:00".to_string(),
            company: Company {
                name: "Acme".to_string(),
                code: None,
            },
            recipient: Recipient {
                name: "Jeanne Martin".to_string(),
                ..Default::default()
            },
            equipment,
            notes: None,
            palette: Default::default(),
            logo: None,
        }
    }

    #[test]
    fn test_duplicates_rejected_for_delivery() {
        let lines = vec![
            EquipmentLine::new("machine", "A"),
            EquipmentLine::new("machine", "A"),
            EquipmentLine::new("machine", "B"),
        ];
        let err = LayoutEngine::new(LayoutSettings::default())
            .layout(&doc(DocumentKind::DeliveryNote, lines))
            .unwrap_err();
        match err {
            LayoutError::DuplicateEquipment { keys } => assert_eq!(keys, vec!["A"]),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_duplicates_allowed_on_intervention() {
        let lines = vec![EquipmentLine::new("machine", "A"), EquipmentLine::new("machine", "A")];
        let kind = DocumentKind::Intervention {
            service: None,
            phone: None,
            started_at: None,
            ended_at: None,
            duration_minutes: None,
            software: Vec::new(),
        };
        assert!(LayoutEngine::new(LayoutSettings::default())
            .layout(&doc(kind, lines))
            .is_ok());
    }

    #[test]
    fn test_header_only_on_first_page() {
        let lines: Vec<_> = (0..20)
            .map(|i| EquipmentLine::new("machine", format!("SN{:02}", i)))
            .collect();
        let laid_out = LayoutEngine::new(LayoutSettings::default())
            .layout(&doc(DocumentKind::DeliveryNote, lines))
            .unwrap();
        assert!(laid_out.page_count() > 1);
        assert!(laid_out.pages[0].contains_text("BON DE LIVRAISON"));
        for page in &laid_out.pages[1..] {
            assert!(!page.contains_text("BON DE LIVRAISON"));
        }
    }

    #[test]
    fn test_invalid_geometry_is_reported() {
        let settings = LayoutSettings::default().with_margin(200.0);
        let result = LayoutEngine::new(settings).layout(&doc(DocumentKind::DeliveryNote, Vec::new()));
        assert!(matches!(result, Err(LayoutError::InvalidGeometry(_))));
    }

    #[test]
    fn test_nan_margin_is_rejected_before_layout() {
        let mut model = doc(DocumentKind::DeliveryNote, Vec::new());
        model.notes = Some("Une ligne de note\n".repeat(60));
        let settings = LayoutSettings::default().with_margin(f32::NAN);
        let result = LayoutEngine::new(settings).layout(&model);
        assert!(matches!(result, Err(LayoutError::InvalidGeometry(_))));
    }
}
