//! Layout components, one per document section

pub mod equipment_info;
pub mod equipment_table;
pub mod footer;
pub mod header;
pub mod info_boxes;
pub mod notes;
pub mod signatures;
pub mod software;

pub use equipment_info::EquipmentInfoRenderer;
pub use equipment_table::{DetailLine, EquipmentTableRenderer, TableColumns};
pub use footer::{page_label, FooterRenderer};
pub use header::HeaderRenderer;
pub use info_boxes::InfoBoxesRenderer;
pub use notes::NotesRenderer;
pub use signatures::SignaturesRenderer;
pub use software::SoftwareListRenderer;
