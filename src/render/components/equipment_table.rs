//! Equipment table with per-row pagination
//!
//! Every row is fully measured before anything is drawn, so the page-break
//! check runs on the final row height and a row never straddles two pages.

use crate::model::{EquipmentLine, BLACK, WHITE};
use crate::render::helpers::canvas::TextStyle;
use crate::render::helpers::colors::{BODY_TEXT, FAINT_TEXT, MUTED_TEXT, RULE, ZEBRA_FILL};
use crate::render::helpers::text_metrics::FontStyle;
use crate::render::helpers::wrap::ELLIPSIS;
use crate::render::layouts::context::LayoutContext;

/// Horizontal inset of cell text
const CELL_INSET: f32 = 2.0;
const INDEX_INSET: f32 = 3.0;
const HEADER_BASELINE: f32 = 6.5;
const BORDER_WIDTH: f32 = 0.1;
const DETAILS_FLOOR: f32 = 20.0;

const EMPTY_MESSAGE: &str = "Aucun équipement";

/// Column widths in mm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableColumns {
    pub index: f32,
    pub kind: f32,
    pub serial: f32,
    pub inventory: f32,
    pub details: f32,
}

impl TableColumns {
    /// Split `width` into the five columns. Fixed columns get a proportion with
    /// a floor; details take the remainder and are never narrower than 20 mm.
    pub fn compute(width: f32) -> Self {
        let index = (width * 0.05).round().max(10.0);
        let kind = (width * 0.14).round().max(28.0);
        let serial = (width * 0.13).round().max(36.0);
        let inventory = (width * 0.13).round().max(36.0);

        let fixed = index + kind + serial + inventory;
        let details = width - fixed;
        if details >= DETAILS_FLOOR {
            return Self {
                index,
                kind,
                serial,
                inventory,
                details,
            };
        }

        let scale = ((width - DETAILS_FLOOR) / fixed).max(0.0);
        log::debug!("Narrow table ({:.1} mm), scaling fixed columns by {:.2}", width, scale);
        Self {
            index: index * scale,
            kind: kind * scale,
            serial: serial * scale,
            inventory: inventory * scale,
            details: DETAILS_FLOOR.min(width),
        }
    }

    /// Left edge of each column, starting at `left`
    pub fn offsets(&self, left: f32) -> [f32; 5] {
        let kind = left + self.index;
        let serial = kind + self.kind;
        let inventory = serial + self.serial;
        let details = inventory + self.inventory;
        [left, kind, serial, inventory, details]
    }

    pub fn total(&self) -> f32 {
        self.index + self.kind + self.serial + self.inventory + self.details
    }
}

/// One line of the details cell
#[derive(Debug, Clone, PartialEq)]
pub enum DetailLine {
    /// Brand and model text
    Plain(String),
    /// First line of a labelled spec: bold label followed by the value
    Labelled { label: String, value: String },
    /// Wrapped rest of a labelled value
    Continuation(String),
}

impl DetailLine {
    fn text_mut(&mut self) -> &mut String {
        match self {
            DetailLine::Plain(text) | DetailLine::Continuation(text) => text,
            DetailLine::Labelled { value, .. } => value,
        }
    }
}

/// Measured content of one row
#[derive(Debug, Clone, PartialEq)]
struct RowLayout {
    index: String,
    kind: String,
    serial: Vec<String>,
    inventory: Vec<String>,
    details: Vec<DetailLine>,
}

impl RowLayout {
    fn line_count(&self) -> usize {
        self.serial
            .len()
            .max(self.inventory.len())
            .max(self.details.len())
            .max(1)
    }
}

pub struct EquipmentTableRenderer<'a> {
    lines: &'a [EquipmentLine],
}

impl<'a> EquipmentTableRenderer<'a> {
    pub fn new(lines: &'a [EquipmentLine]) -> Self {
        Self { lines }
    }

    pub fn render(&self, ctx: &mut LayoutContext<'_>) {
        let s = ctx.settings;

        if self.lines.is_empty() {
            let style = TextStyle::new(s.body_font_size, FAINT_TEXT).italic();
            ctx.canvas
                .text(EMPTY_MESSAGE, s.margin, ctx.cursor.y + s.row_padding, style);
            ctx.cursor.advance(s.min_row_height);
            return;
        }

        let columns = TableColumns::compute(ctx.cursor.content_width());
        let limit = s.table_limit();
        let max_lines = Self::max_lines_per_page(ctx);

        let rows: Vec<RowLayout> = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| Self::measure_row(ctx, &columns, i, line, max_lines))
            .collect();

        // header and first row always travel together
        let first = Self::row_height(ctx, &rows[0]);
        if !ctx.fits(s.table_header_height + first, limit) {
            ctx.new_page(s.margin);
        }
        Self::draw_header(ctx, &columns);

        for (i, row) in rows.iter().enumerate() {
            let height = Self::row_height(ctx, row);
            if !ctx.fits(height, limit) {
                log::debug!(
                    "Row {} ({:.1} mm) does not fit at y={:.1}, breaking page",
                    i + 1,
                    height,
                    ctx.cursor.y
                );
                ctx.new_page(s.margin);
                Self::draw_header(ctx, &columns);
            }
            Self::draw_row(ctx, &columns, i, row, height);
        }

        ctx.cursor.advance(s.block_gap);
    }

    fn row_height(ctx: &LayoutContext<'_>, row: &RowLayout) -> f32 {
        let s = ctx.settings;
        (row.line_count() as f32 * s.row_line_height + 2.0 * s.row_padding).max(s.min_row_height)
    }

    /// Most lines a row can hold under a header on a fresh page
    fn max_lines_per_page(ctx: &LayoutContext<'_>) -> usize {
        let s = ctx.settings;
        let available = s.table_limit() - s.margin - s.table_header_height - 2.0 * s.row_padding;
        ((available / s.row_line_height).floor() as usize).max(1)
    }

    fn measure_row(
        ctx: &LayoutContext<'_>,
        columns: &TableColumns,
        i: usize,
        line: &EquipmentLine,
        max_lines: usize,
    ) -> RowLayout {
        let s = ctx.settings;
        let body = s.body_font_size;
        let small = s.label_font_size;

        let inventory = line.inventory_code.as_deref().unwrap_or("");

        let mut row = RowLayout {
            index: ctx.truncate(&(i + 1).to_string(), columns.index - 2.0 * CELL_INSET, body, FontStyle::BOLD),
            kind: ctx.truncate(&line.display_type(), columns.kind - 2.0 * CELL_INSET, body, FontStyle::BOLD),
            serial: ctx.wrap(&line.serial_number, columns.serial - 2.0 * CELL_INSET, small, FontStyle::REGULAR),
            inventory: ctx.wrap(inventory, columns.inventory - 2.0 * CELL_INSET, small, FontStyle::REGULAR),
            details: Self::detail_lines(ctx, line, columns.details - 2.0 * CELL_INSET),
        };

        if row.line_count() > max_lines {
            log::warn!(
                "Row {} needs {} lines, clamping to {}",
                i + 1,
                row.line_count(),
                max_lines
            );
            Self::clamp(ctx, &mut row.serial, max_lines, columns.serial - 2.0 * CELL_INSET, small);
            Self::clamp(ctx, &mut row.inventory, max_lines, columns.inventory - 2.0 * CELL_INSET, small);
            if row.details.len() > max_lines {
                row.details.truncate(max_lines);
                if let Some(last) = row.details.last_mut() {
                    let text = last.text_mut();
                    let marked = format!("{}{}", text, ELLIPSIS);
                    *text = ctx.truncate(&marked, columns.details - 2.0 * CELL_INSET, s.detail_font_size, FontStyle::REGULAR);
                }
            }
        }
        row
    }

    fn clamp(ctx: &LayoutContext<'_>, lines: &mut Vec<String>, max: usize, width: f32, size: f32) {
        if lines.len() <= max {
            return;
        }
        lines.truncate(max);
        if let Some(last) = lines.last_mut() {
            let marked = format!("{}{}", last, ELLIPSIS);
            *last = ctx.truncate(&marked, width, size, FontStyle::REGULAR);
        }
    }

    /// Brand/model followed by the labelled machine specs
    fn detail_lines(ctx: &LayoutContext<'_>, line: &EquipmentLine, width: f32) -> Vec<DetailLine> {
        let size = ctx.settings.detail_font_size;
        let mut out: Vec<DetailLine> = line
            .brand_model()
            .map(|bm| ctx.wrap(&bm, width, size, FontStyle::REGULAR))
            .unwrap_or_default()
            .into_iter()
            .map(DetailLine::Plain)
            .collect();

        let Some(specs) = line.specs.as_ref() else {
            return out;
        };

        for (label, value) in specs.labelled() {
            let label = format!("{}:", label);
            let label_width = ctx.text_width(&format!("{} ", label), size, FontStyle::BOLD);
            let mut wrapped = ctx
                .wrap(value, (width - label_width).max(1.0), size, FontStyle::REGULAR)
                .into_iter();
            if let Some(first) = wrapped.next() {
                out.push(DetailLine::Labelled { label, value: first });
            }
            out.extend(wrapped.map(|rest| DetailLine::Continuation(format!("  {}", rest))));
        }
        out
    }

    fn draw_header(ctx: &mut LayoutContext<'_>, columns: &TableColumns) {
        let s = ctx.settings;
        let y = ctx.cursor.y;
        let [index_x, kind_x, serial_x, inventory_x, details_x] = columns.offsets(s.margin);

        ctx.canvas
            .fill_rect(s.margin, y, columns.total(), s.table_header_height, ctx.palette.primary);

        let style = TextStyle::new(s.label_font_size, WHITE).bold();
        let baseline = y + HEADER_BASELINE;
        ctx.canvas.text("#", index_x + INDEX_INSET, baseline, style);
        ctx.canvas.text("TYPE", kind_x + CELL_INSET, baseline, style);
        ctx.canvas.text("NUMÉRO DE SÉRIE", serial_x + CELL_INSET, baseline, style);
        ctx.canvas.text("Code inventaire", inventory_x + CELL_INSET, baseline, style);
        ctx.canvas.text("DÉTAILS", details_x + CELL_INSET, baseline, style);

        ctx.cursor.advance(s.table_header_height);
    }

    fn draw_row(ctx: &mut LayoutContext<'_>, columns: &TableColumns, i: usize, row: &RowLayout, height: f32) {
        let s = ctx.settings;
        let y = ctx.cursor.y;
        let width = columns.total();
        let [index_x, kind_x, serial_x, inventory_x, details_x] = columns.offsets(s.margin);

        // parity follows the global row index across pages
        if i % 2 == 0 {
            ctx.canvas.fill_rect(s.margin, y, width, height, ZEBRA_FILL);
        }
        ctx.canvas
            .line(s.margin, y + height, s.margin + width, y + height, RULE, BORDER_WIDTH);

        let text_y = y + s.row_padding + s.row_line_height;
        let step = s.row_line_height;

        let index_style = TextStyle::new(s.body_font_size, ctx.palette.primary).bold();
        ctx.canvas
            .text(row.index.as_str(), index_x + INDEX_INSET, text_y, index_style);
        ctx.canvas.text(
            row.kind.as_str(),
            kind_x + CELL_INSET,
            text_y,
            TextStyle::new(s.body_font_size, BLACK).bold(),
        );

        let body = TextStyle::new(s.label_font_size, BODY_TEXT);
        for (n, text) in row.serial.iter().enumerate() {
            ctx.canvas
                .text(text.as_str(), serial_x + CELL_INSET, text_y + n as f32 * step, body);
        }
        for (n, text) in row.inventory.iter().enumerate() {
            ctx.canvas
                .text(text.as_str(), inventory_x + CELL_INSET, text_y + n as f32 * step, body);
        }

        let plain = TextStyle::new(s.detail_font_size, BODY_TEXT);
        let label_style = TextStyle::new(s.detail_font_size, BLACK).bold();
        let value_style = TextStyle::new(s.detail_font_size, MUTED_TEXT);
        let x = details_x + CELL_INSET;
        for (n, line) in row.details.iter().enumerate() {
            let line_y = text_y + n as f32 * step;
            match line {
                DetailLine::Plain(text) => ctx.canvas.text(text.as_str(), x, line_y, plain),
                DetailLine::Labelled { label, value } => {
                    let offset = ctx.text_width(&format!("{} ", label), s.detail_font_size, FontStyle::BOLD);
                    ctx.canvas.text(label.as_str(), x, line_y, label_style);
                    ctx.canvas.text(value.as_str(), x + offset, line_y, value_style);
                }
                DetailLine::Continuation(text) => ctx.canvas.text(text.as_str(), x, line_y, value_style),
            }
        }

        ctx.cursor.advance(height);
    }
}
