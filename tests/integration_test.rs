use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use asset_docs::config::LayoutSettings;
use asset_docs::error::{LayoutError, RenderError};
use asset_docs::model::{Color, Company, DocumentKind, DocumentModel, EquipmentLine, ImageFormat, Logo, Palette, Recipient};
use asset_docs::parser::{parse_document, SidecarDescriptor};
use asset_docs::render::{
    truncate_to_width, FontStyle, HelveticaMetrics, LaidOutDocument, LayoutEngine, PdfRenderer,
    TextMeasure,
};
use asset_docs::render::helpers::ELLIPSIS;
use asset_docs::theme::{seeded, PaletteRequest, PaletteResolver, PaletteSource};
use asset_docs::render_document;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture(name: &str) -> DocumentModel {
    let content = fs::read_to_string(fixtures_path().join(name)).expect("Failed to read fixture");
    parse_document(&content).expect("Failed to parse fixture")
}

fn delivery(equipment: Vec<EquipmentLine>) -> DocumentModel {
    DocumentModel {
        kind: DocumentKind::DeliveryNote,
        number: "BL-2024-0001".to_string(),
        date: "01/02/2024".to_string(),
        time: "10:00".to_string(),
        generated_at: "01/02/2024 10:00".to_string(),
        company: Company {
            name: "Acme".to_string(),
            code: Some("ACME".to_string()),
        },
        recipient: Recipient {
            name: "Jeanne Martin".to_string(),
            email: Some("jeanne@example.com".to_string()),
            office: None,
        },
        equipment,
        notes: None,
        palette: Palette::default(),
        logo: None,
    }
}

fn layout(doc: &DocumentModel) -> LaidOutDocument {
    LayoutEngine::new(LayoutSettings::default())
        .layout(doc)
        .expect("layout should succeed")
}

fn png_logo(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(w, h, |x, _| {
        if x < w / 2 {
            image::Rgba([200, 30, 30, 255])
        } else {
            image::Rgba([255, 255, 255, 0])
        }
    });
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

/// Page holding the text `needle`, by index
fn page_of(doc: &LaidOutDocument, needle: &str) -> Option<usize> {
    doc.pages.iter().position(|p| p.contains_text(needle))
}

#[test]
fn test_render_delivery_fixture() {
    let doc = load_fixture("delivery_note.json");
    assert_eq!(doc.equipment.len(), 3);

    let pdf_bytes = render_document(&doc, LayoutSettings::default()).expect("Failed to render PDF");
    assert!(!pdf_bytes.is_empty());
    assert!(pdf_bytes.starts_with(b"%PDF"));
}

#[test]
fn test_render_intervention_with_logo() {
    let doc = load_fixture("intervention.json").with_logo(Logo {
        bytes: png_logo(120, 40),
        format: ImageFormat::Png,
    });
    let laid_out = layout(&doc);
    let page = &laid_out.pages[0];
    assert!(page.contains_text("FICHE D'INTERVENTION"));
    assert!(page.contains_text("Début: 14/03/2024 10:00"));
    assert!(page.contains_text("Durée: 1h 15min"));
    assert!(page.contains_text("INFORMATIONS ÉQUIPEMENT"));
    assert!(page.contains_text("Lenovo"));
    assert!(page.contains_text("Windows 11"));
    assert!(page.contains_text("TRAVAUX EFFECTUÉS"));
    assert!(page_of(&laid_out, "LOGICIELS INSTALLÉS").is_some());
    assert!(page_of(&laid_out, "Total: 5 logiciel(s) installé(s)").is_some());

    let pdf_bytes = PdfRenderer::new("FI-2024-0007").render(&laid_out).expect("Failed to render PDF");
    assert!(pdf_bytes.starts_with(b"%PDF"));
}

#[test]
fn test_intervention_duration_is_derived_from_timestamps() {
    let mut doc = load_fixture("intervention.json");
    if let DocumentKind::Intervention {
        started_at,
        ended_at,
        duration_minutes,
        ..
    } = &mut doc.kind
    {
        *started_at = Some("2024-03-14T08:30:00Z".to_string());
        *ended_at = Some("2024-03-14T10:10:00Z".to_string());
        *duration_minutes = None;
    }
    let laid_out = layout(&doc);
    assert!(laid_out.pages[0].contains_text("Durée: 1h 40min"));

    if let DocumentKind::Intervention { ended_at, .. } = &mut doc.kind {
        *ended_at = None;
    }
    let laid_out = layout(&doc);
    assert!(laid_out.pages[0].contains_text("Fin: Non spécifié"));
    assert!(laid_out.pages[0].contains_text("Durée: Non calculable"));
}

#[test]
fn test_nan_margin_is_rejected() {
    let doc = load_fixture("delivery_note.json");
    let settings = LayoutSettings::default().with_margin(f32::NAN);
    assert!(matches!(
        LayoutEngine::new(settings).layout(&doc),
        Err(LayoutError::InvalidGeometry(_))
    ));
}

#[test]
fn test_zero_equipment_gives_single_page() {
    let laid_out = layout(&delivery(Vec::new()));
    assert_eq!(laid_out.page_count(), 1);

    let page = &laid_out.pages[0];
    assert!(page.contains_text("BON DE LIVRAISON"));
    assert!(page.contains_text("Aucun équipement"));
    assert!(page.contains_text("Page 1/1"));
    assert!(!page.contains_text("NUMÉRO DE SÉRIE"));
}

#[test]
fn test_page_break_on_fifth_of_six_rows() {
    // two wrapped lines per row: 22.4 mm each, four fit under the first header
    let rows: Vec<_> = (1..=6)
        .map(|i| EquipmentLine::new("machine", format!("SN-0{}\nlot A", i)))
        .collect();
    let laid_out = layout(&delivery(rows));

    assert_eq!(laid_out.page_count(), 2);
    for index in ["1", "2", "3", "4"] {
        assert_eq!(page_of(&laid_out, index), Some(0), "row {}", index);
    }
    for index in ["5", "6"] {
        assert_eq!(page_of(&laid_out, index), Some(1), "row {}", index);
    }

    let headers_on_page_2 = laid_out.pages[1]
        .texts()
        .filter(|t| *t == "NUMÉRO DE SÉRIE")
        .count();
    assert_eq!(headers_on_page_2, 1);

    // re-emitted header sits at the top margin, above row 5
    let settings = LayoutSettings::default();
    let header_top = laid_out.pages[1]
        .commands
        .iter()
        .filter_map(|c| c.vertical_extent())
        .map(|(top, _)| top)
        .fold(f32::MAX, f32::min);
    assert!((header_top - settings.margin).abs() < 1e-4);
}

#[test]
fn test_uniform_rows_page_count() {
    // 18 mm rows: 6 on the first page, 10 on each following page
    let rows: Vec<_> = (0..30)
        .map(|i| EquipmentLine::new("screen", format!("S{:02}", i)))
        .collect();
    let laid_out = layout(&delivery(rows));
    assert_eq!(laid_out.page_count(), 4);
}

#[test]
fn test_rows_never_split_across_pages() {
    let rows: Vec<_> = (0..25)
        .map(|i| {
            let lines = 1 + i % 4;
            let serial = (0..lines)
                .map(|j| format!("R{}-L{}", i, j))
                .collect::<Vec<_>>()
                .join("\n");
            EquipmentLine::new("machine", serial)
        })
        .collect();
    let laid_out = layout(&delivery(rows));
    let limit = LayoutSettings::default().table_limit();

    for i in 0..25 {
        let lines = 1 + i % 4;
        let page = page_of(&laid_out, &format!("R{}-L0", i)).expect("row is drawn");
        for j in 0..lines {
            assert_eq!(page_of(&laid_out, &format!("R{}-L{}", i, j)), Some(page));
        }
        assert_eq!(page_of(&laid_out, &(i + 1).to_string()), Some(page));
    }

    for page in &laid_out.pages {
        for cmd in &page.commands {
            if let Some(text) = cmd.text() {
                if text.starts_with('R') && text.contains("-L") {
                    let (_, bottom) = cmd.vertical_extent().unwrap();
                    assert!(bottom <= limit);
                }
            }
        }
    }
}

#[test]
fn test_every_page_has_one_footer() {
    let rows: Vec<_> = (0..40)
        .map(|i| EquipmentLine::new("machine", format!("SN{:03}", i)))
        .collect();
    let mut doc = delivery(rows);
    doc.notes = Some("Une note\n".repeat(30));
    let laid_out = layout(&doc);
    let total = laid_out.page_count();
    assert!(total >= 4);

    for (n, page) in laid_out.pages.iter().enumerate() {
        let labels: Vec<_> = page.texts().filter(|t| t.starts_with("Page ")).collect();
        assert_eq!(labels, vec![format!("Page {}/{}", n + 1, total)]);
        let generated = page
            .texts()
            .filter(|t| t.starts_with("Document généré le"))
            .count();
        assert_eq!(generated, 1);
    }
}

#[test]
fn test_duplicate_serials_reject_document() {
    let rows = vec![
        EquipmentLine::new("machine", "A"),
        EquipmentLine::new("machine", "A"),
        EquipmentLine::new("machine", "B"),
    ];
    match render_document(&delivery(rows), LayoutSettings::default()) {
        Err(RenderError::Layout(LayoutError::DuplicateEquipment { keys })) => {
            assert_eq!(keys, vec!["A".to_string()]);
        }
        other => panic!("expected duplicate rejection, got {:?}", other.map(|b| b.len())),
    }
}

#[test]
fn test_truncation_fits_width() {
    let measurer = HelveticaMetrics;
    let samples = [
        "Intel Core i7-1365U vPro",
        "NUMÉRO DE SÉRIE",
        "Station de travail",
        "W",
        "",
    ];
    for text in samples {
        for width in [5.0_f32, 8.0, 13.0, 21.0, 34.0, 60.0] {
            for style in [FontStyle::REGULAR, FontStyle::BOLD] {
                let out = truncate_to_width(text, width, 10.0, style, &measurer);
                assert!(measurer.measure_text(&out, 10.0, style) <= width + 1e-4);
                assert!(out == text || out.ends_with(ELLIPSIS), "{:?} -> {:?}", text, out);
            }
        }
    }
}

#[test]
fn test_software_header_repeats_after_break() {
    let mut doc = load_fixture("intervention.json");
    if let DocumentKind::Intervention { software, .. } = &mut doc.kind {
        *software = (0..80).map(|i| format!("Logiciel {:02}", i)).collect();
    }
    let laid_out = layout(&doc);
    assert!(laid_out.page_count() >= 2);

    let last_row_page = page_of(&laid_out, "Logiciel 79").expect("last software drawn");
    assert!(last_row_page > 0);
    assert!(laid_out.pages[last_row_page].contains_text("LOGICIEL"));
}

#[test]
fn test_explicit_palettes_ignore_logo_content() {
    let resolver = PaletteResolver::default();
    let sidecar = SidecarDescriptor::parse(r##"{"color": "#336699"}"##).unwrap();
    let logos = [png_logo(30, 30), b"not an image".to_vec(), Vec::new()];

    for logo in &logos {
        for seed in 0..3 {
            let request = PaletteRequest {
                company_code: Some("ACME"),
                logo: Some(logo.as_slice()),
                sidecar: Some(sidecar),
            };
            let resolved = resolver.resolve(&request, &mut seeded(seed));
            assert_eq!(resolved.source, PaletteSource::Sidecar);
            assert_eq!(resolved.palette.primary, Color::new(0x33, 0x66, 0x99));

            let request = PaletteRequest {
                company_code: Some("green"),
                logo: Some(logo.as_slice()),
                sidecar: None,
            };
            let resolved = resolver.resolve(&request, &mut seeded(seed));
            assert_eq!(resolved.source, PaletteSource::CompanyTable);
            assert_eq!(resolved.palette.primary, Color::new(27, 94, 32));
        }
    }
}

#[test]
fn test_forced_palette_beats_sidecar() {
    let request = PaletteRequest {
        company_code: Some("TRANS"),
        logo: None,
        sidecar: Some(SidecarDescriptor::Single(Color::new(1, 2, 3))),
    };
    let resolved = PaletteResolver::default().resolve(&request, &mut seeded(1));
    assert_eq!(resolved.source, PaletteSource::Forced);
    assert_eq!(resolved.palette.accent, Color::new(220, 18, 18));
}

#[test]
fn test_palette_is_threaded_into_commands() {
    let palette = Palette::new(Color::new(10, 20, 30), Color::new(40, 50, 60));
    let doc = delivery(vec![EquipmentLine::new("machine", "SN1")]).with_palette(palette);
    let laid_out = layout(&doc);
    let stream = laid_out.command_stream();
    let uses_primary = stream.iter().any(|c| {
        matches!(c, asset_docs::render::DrawCommand::FillRect { color, .. } if *color == palette.primary)
    });
    assert!(uses_primary);
}
