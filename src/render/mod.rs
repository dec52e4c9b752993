//! Document layout and PDF rendering

pub mod command;
pub mod components;
pub mod helpers;
pub mod layouts;
pub mod pdf;

// Re-export commonly used items for convenience
pub use command::{DrawCommand, LaidOutDocument, Page, TextAlign};
pub use helpers::{measure_lines, truncate_to_width, FontStyle, HelveticaMetrics, TextMeasure};
pub use layouts::LayoutEngine;
pub use pdf::PdfRenderer;
