//! Palette resolution
//!
//! Order: sidecar, company table, logo extraction, default. Forced entries are
//! applied afterwards whatever the earlier steps produced.

use std::fmt;

use crate::model::{Color, Palette, DEFAULT_PALETTE};
use crate::parser::SidecarDescriptor;

use super::extract::ColorExtractor;
use super::random::RandomSource;

/// Palettes used when a company has no sidecar file
pub const COMPANY_PALETTES: &[(&str, Palette)] = &[
    (
        "GREEN",
        Palette::new(Color::new(27, 94, 32), Color::new(76, 175, 80)),
    ),
    (
        "TRANS",
        Palette::new(Color::new(13, 71, 161), Color::new(33, 150, 243)),
    ),
];

/// Brand palettes that replace whatever was resolved for these codes
pub const FORCED_PALETTES: &[(&str, Palette)] = &[
    (
        "TRANS",
        Palette::new(Color::new(0, 0, 0), Color::new(220, 18, 18)),
    ),
    (
        "TRTU",
        Palette::new(Color::new(26, 35, 126), Color::new(26, 35, 126)),
    ),
];

/// Where a resolved palette came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSource {
    Sidecar,
    CompanyTable,
    Extracted,
    Default,
    Forced,
}

impl fmt::Display for PaletteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaletteSource::Sidecar => "sidecar",
            PaletteSource::CompanyTable => "company table",
            PaletteSource::Extracted => "logo extraction",
            PaletteSource::Default => "default",
            PaletteSource::Forced => "forced override",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPalette {
    pub palette: Palette,
    pub source: PaletteSource,
}

/// Inputs of one resolution
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteRequest<'a> {
    pub company_code: Option<&'a str>,
    pub logo: Option<&'a [u8]>,
    pub sidecar: Option<SidecarDescriptor>,
}

fn lookup(table: &[(&str, Palette)], code: Option<&str>) -> Option<Palette> {
    let code = code?.trim();
    if code.is_empty() {
        return None;
    }
    table
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(code))
        .map(|(_, palette)| *palette)
}

/// Company palette from the table, if the code has one
pub fn company_palette(code: Option<&str>) -> Option<Palette> {
    lookup(COMPANY_PALETTES, code)
}

/// Forced palette for the code, if any
pub fn forced_palette(code: Option<&str>) -> Option<Palette> {
    lookup(FORCED_PALETTES, code)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteResolver {
    extractor: ColorExtractor,
}

impl PaletteResolver {
    pub fn new(extractor: ColorExtractor) -> Self {
        Self { extractor }
    }

    pub fn resolve<R: RandomSource + ?Sized>(
        &self,
        request: &PaletteRequest<'_>,
        rng: &mut R,
    ) -> ResolvedPalette {
        let resolved = self.resolve_unforced(request, rng);

        if let Some(palette) = forced_palette(request.company_code) {
            log::debug!(
                "Forced palette for {:?} replaces {} result",
                request.company_code,
                resolved.source
            );
            return ResolvedPalette {
                palette,
                source: PaletteSource::Forced,
            };
        }

        resolved
    }

    fn resolve_unforced<R: RandomSource + ?Sized>(
        &self,
        request: &PaletteRequest<'_>,
        rng: &mut R,
    ) -> ResolvedPalette {
        if let Some(sidecar) = request.sidecar {
            return ResolvedPalette {
                palette: sidecar.palette(),
                source: PaletteSource::Sidecar,
            };
        }

        if let Some(palette) = company_palette(request.company_code) {
            return ResolvedPalette {
                palette,
                source: PaletteSource::CompanyTable,
            };
        }

        if let Some(bytes) = request.logo {
            if let Some(palette) = self.extractor.palette(bytes, rng) {
                log::debug!(
                    "Palette extracted from logo: primary {}, accent {}",
                    palette.primary,
                    palette.accent
                );
                return ResolvedPalette {
                    palette,
                    source: PaletteSource::Extracted,
                };
            }
        }

        ResolvedPalette {
            palette: DEFAULT_PALETTE,
            source: PaletteSource::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::random::seeded;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn red_logo() -> Vec<u8> {
        let img = RgbaImage::from_pixel(20, 20, Rgba([200, 10, 10, 255]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    fn resolve(request: PaletteRequest<'_>) -> ResolvedPalette {
        PaletteResolver::default().resolve(&request, &mut seeded(5))
    }

    #[test]
    fn test_default_when_nothing_known() {
        let r = resolve(PaletteRequest::default());
        assert_eq!(r.palette, DEFAULT_PALETTE);
        assert_eq!(r.source, PaletteSource::Default);
    }

    #[test]
    fn test_sidecar_wins_over_logo() {
        let logo = red_logo();
        let r = resolve(PaletteRequest {
            company_code: Some("ACME"),
            logo: Some(&logo),
            sidecar: Some(SidecarDescriptor::Single(Color::new(16, 32, 48))),
        });
        assert_eq!(r.source, PaletteSource::Sidecar);
        assert_eq!(r.palette, Palette::new(Color::new(16, 32, 48), Color::new(56, 72, 88)));
    }

    #[test]
    fn test_company_table_ignores_logo_content() {
        let logo = red_logo();
        let r = resolve(PaletteRequest {
            company_code: Some("green"),
            logo: Some(&logo),
            sidecar: None,
        });
        assert_eq!(r.source, PaletteSource::CompanyTable);
        assert_eq!(r.palette.primary, Color::new(27, 94, 32));
    }

    #[test]
    fn test_extraction_from_logo() {
        let logo = red_logo();
        let r = resolve(PaletteRequest {
            company_code: Some("ACME"),
            logo: Some(&logo),
            sidecar: None,
        });
        assert_eq!(r.source, PaletteSource::Extracted);
        assert_eq!(r.palette.primary, Color::new(200, 10, 10));
        assert_eq!(r.palette.accent, Color::new(240, 50, 50));
    }

    #[test]
    fn test_undecodable_logo_falls_back_to_default() {
        let r = resolve(PaletteRequest {
            company_code: None,
            logo: Some(b"garbage"),
            sidecar: None,
        });
        assert_eq!(r.source, PaletteSource::Default);
    }

    #[test]
    fn test_forced_override_beats_sidecar() {
        let r = resolve(PaletteRequest {
            company_code: Some(" trans "),
            logo: None,
            sidecar: Some(SidecarDescriptor::Single(Color::new(1, 2, 3))),
        });
        assert_eq!(r.source, PaletteSource::Forced);
        assert_eq!(r.palette, Palette::new(Color::new(0, 0, 0), Color::new(220, 18, 18)));

        let r = resolve(PaletteRequest {
            company_code: Some("TRTU"),
            ..Default::default()
        });
        assert_eq!(r.palette, Palette::new(Color::new(26, 35, 126), Color::new(26, 35, 126)));
    }
}
