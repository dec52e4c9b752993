use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "asset-docs")]
#[command(
    author,
    version,
    about = "Render delivery notes, return notes and intervention sheets to PDF"
)]
pub struct Args {
    /// Input JSON document request
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output PDF file path (defaults to input with .pdf extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Company logo (PNG or JPEG). A `<stem>.color.json` sidecar next to it is honoured.
    #[arg(short, long)]
    pub logo: Option<PathBuf>,

    /// Company code used for palette tables (overrides the code in the document)
    #[arg(short = 'c', long)]
    pub company_code: Option<String>,

    /// Page size
    #[arg(short = 's', long, value_enum, default_value = "a4")]
    pub page_size: PageSize,

    /// Page orientation
    #[arg(long, value_enum, default_value = "portrait")]
    pub orientation: Orientation,

    /// Page margin in mm
    #[arg(short = 'm', long)]
    pub margin: Option<f32>,

    /// Seed for logo color extraction (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
}

impl PageSize {
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Legal => (215.9, 355.6),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Args {
    /// Get the output path, defaulting to input with .pdf extension
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("pdf"))
    }

    /// Get page dimensions in mm (width, height) accounting for orientation
    pub fn page_dimensions(&self) -> (f32, f32) {
        let (w, h) = self.page_size.dimensions_mm();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_command_line() {
        let args = Args::parse_from(["asset-docs", "note.json"]);
        assert_eq!(args.page_size, PageSize::A4);
        assert_eq!(args.orientation, Orientation::Portrait);
        assert_eq!(args.output_path(), PathBuf::from("note.pdf"));
        assert!(args.logo.is_none());
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_page_dimensions() {
        let args = Args::parse_from(["asset-docs", "note.json", "--orientation", "landscape"]);
        let (w, h) = args.page_dimensions();
        assert!((w - 297.0).abs() < 0.1);
        assert!((h - 210.0).abs() < 0.1);
    }

    #[test]
    fn test_all_options() {
        let args = Args::parse_from([
            "asset-docs",
            "in.json",
            "-o",
            "out.pdf",
            "--logo",
            "logos/acme.png",
            "-c",
            "GREEN",
            "-s",
            "letter",
            "-m",
            "12.5",
            "--seed",
            "42",
            "-vv",
        ]);
        assert_eq!(args.output_path(), PathBuf::from("out.pdf"));
        assert_eq!(args.company_code.as_deref(), Some("GREEN"));
        assert_eq!(args.page_size, PageSize::Letter);
        assert_eq!(args.margin, Some(12.5));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.verbose, 2);
    }
}
