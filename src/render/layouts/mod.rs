//! Document layout: context, per-kind templates and the engine driving them

pub mod context;
pub mod engine;
pub mod templates;

pub use context::{LayoutContext, PageCursor};
pub use engine::{validate_equipment, LayoutEngine};
pub use templates::{format_duration, format_timestamp, intervention_duration, DocumentTemplate, InfoBox, NOT_SPECIFIED};
