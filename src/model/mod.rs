pub mod color;
pub mod document;
pub mod equipment;

pub use color::{Color, Palette, BLACK, DEFAULT_PALETTE, WHITE};
pub use document::{
    format_document_number, Company, DocumentKind, DocumentModel, ImageFormat, Logo, Recipient,
};
pub use equipment::{find_duplicate_keys, EquipmentLine, MachineSpecs};
