//! Helper utilities for layout and PDF rendering

pub mod canvas;
pub mod colors;
pub mod compress;
pub mod layer;
pub mod text_metrics;
pub mod wrap;

pub use canvas::{Canvas, TextStyle};
pub use compress::compress_pdf;
pub use layer::LayerBuilder;
pub use text_metrics::{
    get_helvetica_bold_measurer, get_helvetica_measurer, BuiltinFontMeasurer, FontStyle,
    HelveticaMetrics, TextMeasure,
};
pub use wrap::{measure_lines, truncate_to_width, ELLIPSIS};
