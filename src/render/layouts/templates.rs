//! Per-kind wording of the documents
//!
//! Everything that differs between a delivery note, a return note and an
//! intervention sheet lives here; the components only draw what they get.

use crate::model::{DocumentKind, DocumentModel, EquipmentLine};
use crate::parser::parse_timestamp;

/// Placeholder for a missing value
pub const NOT_SPECIFIED: &str = "Non spécifié";
const INVALID_DATE: &str = "Date invalide";
const NOT_COMPUTABLE: &str = "Non calculable";

/// Content of one of the two boxes under the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoBox {
    /// Small uppercase caption ("DE", "À"...)
    pub label: String,
    /// Main line, drawn bold
    pub title: String,
    /// Detail lines
    pub lines: Vec<String>,
}

impl InfoBox {
    fn new(label: &str, title: &str) -> Self {
        Self {
            label: label.to_string(),
            title: title.trim().to_string(),
            lines: Vec::new(),
        }
    }

    /// Append `Label: value` when the value is not blank
    fn field(mut self, label: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.lines.push(format!("{}: {}", label, value));
        }
        self
    }

    /// Append `Label: value` unconditionally
    fn entry(mut self, label: &str, value: String) -> Self {
        self.lines.push(format!("{}: {}", label, value));
        self
    }

    fn line(mut self, value: Option<&str>) -> Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.lines.push(value.to_string());
        }
        self
    }
}

/// Wording and optional sections of one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTemplate {
    pub title: &'static str,
    pub left: InfoBox,
    pub right: InfoBox,
    pub notes_heading: &'static str,
    /// Notes drawn as one bullet per paragraph
    pub bullet_notes: bool,
    pub software: Vec<String>,
    /// Labelled facts about the serviced machine (intervention sheets)
    pub equipment_info: Option<Vec<(&'static str, String)>>,
    pub signatures: [&'static str; 2],
}

impl DocumentTemplate {
    pub fn for_document(doc: &DocumentModel) -> Self {
        let company = &doc.company;
        let recipient = &doc.recipient;

        match &doc.kind {
            DocumentKind::DeliveryNote => Self {
                title: "BON DE LIVRAISON",
                left: InfoBox::new("DE", &company.name).field("Code", company.code.as_deref()),
                right: InfoBox::new("À", &recipient.name)
                    .line(recipient.email.as_deref())
                    .field("Bureau", recipient.office.as_deref()),
                notes_heading: "NOTES",
                bullet_notes: false,
                software: Vec::new(),
                equipment_info: None,
                signatures: ["Signature du livreur", "Signature du bénéficiaire"],
            },
            DocumentKind::ReturnNote {
                destination,
                reason,
            } => Self {
                title: "BON DE RETOUR",
                left: InfoBox::new("DE", &company.name).field("Code", company.code.as_deref()),
                right: InfoBox::new("RETOURNÉ PAR", &recipient.name)
                    .field("Destination", Some(destination.to_uppercase().as_str()))
                    .field("Raison", reason.as_deref()),
                notes_heading: "REMARQUES",
                bullet_notes: false,
                software: Vec::new(),
                equipment_info: None,
                signatures: ["Signature de l'émetteur", "Signature du réceptionnaire"],
            },
            DocumentKind::Intervention {
                service,
                phone,
                started_at,
                ended_at,
                duration_minutes,
                software,
            } => Self {
                title: "FICHE D'INTERVENTION",
                left: InfoBox::new("INFORMATIONS CLIENT", &recipient.name)
                    .field("Société", Some(company.name.as_str()))
                    .field("Service", service.as_deref())
                    .field("Email", recipient.email.as_deref())
                    .field("Tél", phone.as_deref()),
                right: InfoBox::new("INFORMATIONS INTERVENTION", "")
                    .entry("Début", format_timestamp(started_at.as_deref()))
                    .entry("Fin", format_timestamp(ended_at.as_deref()))
                    .entry(
                        "Durée",
                        intervention_duration(started_at.as_deref(), ended_at.as_deref(), *duration_minutes),
                    ),
                notes_heading: "TRAVAUX EFFECTUÉS",
                bullet_notes: true,
                software: software
                    .iter()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                equipment_info: Some(equipment_info(doc.equipment.first())),
                signatures: ["Signature de l'intervenant", "Signature du client"],
            },
        }
    }
}

/// Brand, model, serial, inventory code, machine type and OS of `line`
fn equipment_info(line: Option<&EquipmentLine>) -> Vec<(&'static str, String)> {
    let specs = line.and_then(|l| l.specs.as_ref());
    let or_unknown = |value: Option<&str>| {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(NOT_SPECIFIED)
            .to_string()
    };
    vec![
        ("Marque", or_unknown(line.and_then(|l| l.brand.as_deref()))),
        ("Modèle", or_unknown(line.and_then(|l| l.model.as_deref()))),
        ("S/N", or_unknown(line.map(|l| l.serial_number.as_str()))),
        ("Code inventaire", or_unknown(line.and_then(|l| l.inventory_code.as_deref()))),
        ("Type", or_unknown(specs.and_then(|s| s.machine_type.as_deref()))),
        ("OS", or_unknown(specs.and_then(|s| s.os_version.as_deref()))),
    ]
}

/// `dd/mm/yyyy hh:mm`, or the placeholder for a missing or unreadable value
pub fn format_timestamp(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => NOT_SPECIFIED.to_string(),
        Some(text) => match parse_timestamp(text) {
            Some(t) => t.format("%d/%m/%Y %H:%M").to_string(),
            None => INVALID_DATE.to_string(),
        },
    }
}

/// Time between the two timestamps in either order. Without two readable
/// timestamps the precomputed minute count is used, if any.
pub fn intervention_duration(
    started_at: Option<&str>,
    ended_at: Option<&str>,
    fallback_minutes: Option<u32>,
) -> String {
    let parse = |value: Option<&str>| value.and_then(parse_timestamp);
    match (parse(started_at), parse(ended_at)) {
        (Some(start), Some(end)) => {
            let minutes = (end - start).num_minutes().unsigned_abs();
            format_duration(u32::try_from(minutes).unwrap_or(u32::MAX))
        }
        _ => fallback_minutes
            .map(format_duration)
            .unwrap_or_else(|| NOT_COMPUTABLE.to_string()),
    }
}

/// `75` → `1h 15min`, `40` → `40min`
pub fn format_duration(minutes: u32) -> String {
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if hours > 0 {
        format!("{}h {}min", hours, minutes)
    } else {
        format!("{}min", minutes)
    }
}
