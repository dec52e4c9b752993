//! Document theming: logo color extraction and palette resolution

pub mod extract;
pub mod random;
pub mod resolve;

pub use extract::{extract_palette, Cluster, ColorExtractor};
pub use random::{from_entropy, seeded, RandomSource};
pub use resolve::{PaletteRequest, PaletteResolver, PaletteSource, ResolvedPalette};
