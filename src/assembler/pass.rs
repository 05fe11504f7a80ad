use super::cursor::PageCursor;
use super::{AssemblyReport, HeaderOutcome, PageLayout};
use crate::fields::{DetailLine, FieldMapping, FieldValue};
use crate::resolve::{FieldResolver, FieldSpec};
use furips_layout::{
    RowField, compute_single_box_row, compute_two_box_row, distribute_columns, estimate_width,
    truncate_to_width, wrap_lines,
};
use furips_render_core::utils::TEXT_INSET;
use furips_render_core::{CanvasRenderer, CharacterGrid, TextStyle};
use furips_types::{Alignment, LayoutBox, Point, Rect};
use std::path::Path;

const LINE_SPACING: f32 = 1.25;

/// One field group of a template row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowEntry {
    pub label: &'static str,
    pub field: FieldSpec,
    pub min_box_width: Option<f32>,
}

impl RowEntry {
    pub(crate) const fn new(label: &'static str, field: FieldSpec) -> Self {
        Self {
            label,
            field,
            min_box_width: None,
        }
    }

    pub(crate) const fn min_width(mut self, width: f32) -> Self {
        self.min_box_width = Some(width);
        self
    }
}

/// A column of the service detail table.
#[derive(Clone, Copy)]
pub(crate) struct TableColumn {
    pub title: &'static str,
    pub weight: f32,
    pub alignment: Alignment,
    pub value: fn(&DetailLine) -> &str,
}

/// A single top-to-bottom drawing pass over one page.
pub(crate) struct DrawPass<'a, C: CanvasRenderer> {
    canvas: &'a mut C,
    layout: &'a PageLayout,
    data: &'a FieldMapping,
    resolver: &'a FieldResolver,
    coded_resolver: &'a FieldResolver,
    cursor: PageCursor,
    report: AssemblyReport,
}

impl<'a, C: CanvasRenderer> DrawPass<'a, C> {
    pub(crate) fn new(
        canvas: &'a mut C,
        layout: &'a PageLayout,
        data: &'a FieldMapping,
        resolver: &'a FieldResolver,
        coded_resolver: &'a FieldResolver,
    ) -> Self {
        let cursor = PageCursor::new(canvas.page_size(), layout.margin, layout.element_gap);
        Self {
            canvas,
            layout,
            data,
            resolver,
            coded_resolver,
            cursor,
            report: AssemblyReport::default(),
        }
    }

    pub(crate) fn layout(&self) -> &'a PageLayout {
        self.layout
    }

    pub(crate) fn data(&self) -> &'a FieldMapping {
        self.data
    }

    pub(crate) fn finish(self) -> AssemblyReport {
        self.report
    }

    /// The header band: the image scaled into it, or a bordered placeholder.
    pub(crate) fn header(&mut self, image: Option<&Path>) {
        let Some(frame) = self.place(self.layout.header_height, "header") else {
            return;
        };
        let outcome = match image {
            Some(path) => self.header_image(frame, path),
            None => HeaderOutcome::Placeholder,
        };
        if outcome == HeaderOutcome::Placeholder {
            self.canvas
                .draw_rect(frame, self.layout.placeholder_color, self.layout.border_width);
        }
        self.report.header = outcome;
    }

    fn header_image(&mut self, frame: Rect, path: &Path) -> HeaderOutcome {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("Header image {} unavailable: {}", path.display(), e);
                return HeaderOutcome::Placeholder;
            }
        };
        match self.canvas.draw_image(frame, &bytes) {
            Ok(()) => HeaderOutcome::Image,
            Err(e) => {
                log::warn!("Header image {} could not be drawn: {}", path.display(), e);
                HeaderOutcome::Placeholder
            }
        }
    }

    pub(crate) fn title(&mut self, text: &str) {
        self.bar(text, self.layout.title_height, self.layout.title_font_size, "title bar");
    }

    pub(crate) fn section(&mut self, text: &str) {
        self.bar(text, self.layout.bar_height, self.layout.bar_font_size, "section bar");
    }

    fn bar(&mut self, text: &str, height: f32, font_size: f32, element: &str) {
        let Some(frame) = self.place(height, element) else {
            return;
        };
        self.canvas.fill_rect(frame, self.layout.bar_fill);
        self.canvas
            .draw_rect(frame, self.layout.border_color, self.layout.border_width);
        let style = TextStyle::new(font_size).centered().bold();
        let shown = truncate_to_width(text, font_size, frame.width - 2.0 * TEXT_INSET);
        self.canvas.write_text(frame, &shown, &style);
    }

    /// Label/value groups side by side, shrunk together when they overflow.
    pub(crate) fn field_row(&mut self, entries: &[RowEntry]) {
        let Some(frame) = self.place(self.layout.row_height, "field row") else {
            return;
        };
        let values: Vec<FieldValue> = entries.iter().map(|e| self.resolve(&e.field)).collect();
        let fields: Vec<RowField<'_>> = entries
            .iter()
            .zip(&values)
            .map(|(e, v)| {
                RowField::new(e.label, &v.text, e.min_box_width.unwrap_or(self.layout.min_box_width))
            })
            .collect();
        let boxes = compute_two_box_row(&fields, frame, &self.layout.row_style);

        for ((pair, entry), value) in boxes.chunks(2).zip(entries).zip(&values) {
            if let [label, boxed] = pair {
                self.label(label.rect(), entry.label);
                self.value(boxed, &value.text);
            }
        }
    }

    /// A label followed by one value box spanning the rest of the row. Values wrap
    /// when the box is tall enough for several lines.
    pub(crate) fn full_width_row(&mut self, label: &str, field: FieldSpec, height: f32) {
        let Some(frame) = self.place(height, "full-width row") else {
            return;
        };
        let value = self.resolve(&field);
        let boxes = compute_single_box_row(label, frame, &self.layout.row_style);
        if let [label_box, boxed] = boxes.as_slice() {
            self.label(label_box.rect(), label);
            self.value(boxed, &value.text);
        }
    }

    /// A label followed by the fixed-count character grid of a coded identifier.
    pub(crate) fn code_grid_row(&mut self, label: &str, field: FieldSpec) {
        let layout = self.layout;
        let height = layout.row_height.max(layout.grid_box_size);
        let Some(frame) = self.place(height, "code grid") else {
            return;
        };
        let value = self.resolve_coded(&field);
        let style = &layout.row_style;
        let label_width = estimate_width(label, style.label_font_size) + style.inner_padding;
        self.label(Rect::new(frame.x, frame.y, label_width, frame.height), label);

        let origin = Point::new(
            frame.x + label_width + style.gap,
            frame.y + (frame.height - layout.grid_box_size) / 2.0,
        );
        let mut grid = CharacterGrid::new(origin, value.text.trim(), layout.grid_cells);
        grid.box_size = layout.grid_box_size;
        grid.gap = layout.grid_gap;
        grid.font_size = style.value_font_size;
        grid.border_width = layout.border_width;
        grid.border_color = layout.border_color;
        self.canvas.draw_character_grid(&grid);
    }

    /// A label and one checkbox per `(code, caption)` option. The box whose code
    /// matches the first character of the value is marked with an X.
    pub(crate) fn option_row(&mut self, label: &str, field: FieldSpec, options: &[(&str, &str)]) {
        let layout = self.layout;
        let Some(frame) = self.place(layout.row_height, "option row") else {
            return;
        };
        let value = self.resolve(&field);
        let selected = first_upper(&value.text);
        let style = &layout.row_style;
        let size = layout.checkbox_size;

        let label_width = estimate_width(label, style.label_font_size) + style.inner_padding;
        self.label(Rect::new(frame.x, frame.y, label_width, frame.height), label);
        let mut x = frame.x + label_width + style.gap;

        for (code, caption) in options {
            let caption_width = estimate_width(caption, style.label_font_size) + style.inner_padding;
            self.label(Rect::new(x, frame.y, caption_width, frame.height), caption);
            x += caption_width;

            let cell = Rect::new(x, frame.y + (frame.height - size) / 2.0, size, size);
            self.canvas.draw_rect(cell, layout.border_color, layout.border_width);
            if selected.is_some() && selected == first_upper(code) {
                self.mark(cell);
            }
            x += size + style.mid_gap;
        }
    }

    /// The service table: a filled header row and up to `table_max_rows` bordered rows.
    pub(crate) fn detail_table(&mut self, columns: &[TableColumn], rows: &[DetailLine]) {
        let layout = self.layout;
        let mut shown = rows.len();
        if shown > layout.table_max_rows {
            log::warn!(
                "{} detail rows exceed the table capacity of {}; extra rows dropped",
                rows.len(),
                layout.table_max_rows
            );
            shown = layout.table_max_rows;
        }
        let room = self.cursor.remaining() - layout.table_header_height;
        let fit = if room > 0.0 {
            (room / layout.table_row_height).floor() as usize
        } else {
            0
        };
        if fit < shown {
            log::warn!("Only {} of {} detail rows fit on the page", fit, shown);
            shown = fit;
        }
        self.report.dropped_detail_rows += rows.len() - shown;

        let height = layout.table_header_height + shown as f32 * layout.table_row_height;
        let Some(frame) = self.place(height, "detail table") else {
            return;
        };
        let weights: Vec<f32> = columns.iter().map(|c| c.weight).collect();
        let widths = distribute_columns(&weights, frame.width);
        let font_size = layout.table_font_size;

        let mut x = frame.x;
        for (column, width) in columns.iter().zip(&widths) {
            let cell = Rect::new(x, frame.y, *width, layout.table_header_height);
            self.canvas.fill_rect(cell, layout.bar_fill);
            self.canvas.draw_rect(cell, layout.border_color, layout.border_width);
            let title = truncate_to_width(column.title, font_size, cell.width - 2.0 * TEXT_INSET);
            self.canvas
                .write_text(cell, &title, &TextStyle::new(font_size).centered().bold());
            x += width;
        }

        for (i, row) in rows.iter().take(shown).enumerate() {
            let y = frame.y + layout.table_header_height + i as f32 * layout.table_row_height;
            let mut x = frame.x;
            for (column, width) in columns.iter().zip(&widths) {
                let cell = Rect::new(x, y, *width, layout.table_row_height);
                self.canvas.draw_rect(cell, layout.border_color, layout.border_width);
                let text = truncate_to_width((column.value)(row), font_size, cell.width - 2.0 * TEXT_INSET);
                let mut style = TextStyle::new(font_size);
                style.alignment = column.alignment;
                self.canvas.write_text(cell, &text, &style);
                x += width;
            }
        }
    }

    /// Claims a full-width band, or skips the element when it would cross the
    /// bottom margin.
    fn place(&mut self, height: f32, element: &str) -> Option<Rect> {
        if !self.cursor.fits(height) {
            log::warn!(
                "Skipping {} at y={:.1}: it would cross the bottom margin",
                element,
                self.cursor.y()
            );
            self.report.skipped_elements += 1;
            return None;
        }
        Some(self.cursor.take(height))
    }

    fn resolve(&mut self, field: &FieldSpec) -> FieldValue {
        let value = self.resolver.resolve(field, self.data);
        self.note_unresolved(field, &value);
        value
    }

    fn resolve_coded(&mut self, field: &FieldSpec) -> FieldValue {
        let value = self.coded_resolver.resolve(field, self.data);
        self.note_unresolved(field, &value);
        value
    }

    fn note_unresolved(&mut self, field: &FieldSpec, value: &FieldValue) {
        if value.is_empty() {
            self.report.unresolved.push(field.canonical);
        }
    }

    fn label(&mut self, rect: Rect, text: &str) {
        let font_size = self.layout.row_style.label_font_size;
        let shown = truncate_to_width(text, font_size, rect.width - 2.0 * TEXT_INSET);
        self.canvas.write_text(rect, &shown, &TextStyle::new(font_size));
    }

    fn value(&mut self, boxed: &LayoutBox, text: &str) {
        let rect = boxed.rect();
        self.canvas
            .draw_rect(rect, self.layout.border_color, self.layout.border_width);

        let font_size = self.layout.row_style.value_font_size;
        let mut style = TextStyle::new(font_size);
        style.alignment = boxed.alignment;
        let inner_width = rect.width - 2.0 * TEXT_INSET;
        let line_height = font_size * LINE_SPACING;
        let capacity = ((rect.height - TEXT_INSET) / line_height).floor().max(1.0) as usize;

        if capacity == 1 {
            let shown = truncate_to_width(text, font_size, inner_width);
            self.canvas.write_text(rect, &shown, &style);
            return;
        }

        let mut lines = wrap_lines(text, font_size, inner_width);
        if lines.len() > capacity {
            lines.truncate(capacity);
            if let Some(last) = lines.last_mut() {
                let marked = format!("{}...", last);
                *last = truncate_to_width(&marked, font_size, inner_width).into_owned();
            }
        }
        for (i, line) in lines.iter().enumerate() {
            let line_rect = Rect::new(
                rect.x,
                rect.y + TEXT_INSET / 2.0 + i as f32 * line_height,
                rect.width,
                line_height,
            );
            self.canvas.write_text(line_rect, line, &style);
        }
    }

    fn mark(&mut self, cell: Rect) {
        let inner = cell.inset(1.5);
        let (color, width) = (self.layout.border_color, self.layout.border_width);
        self.canvas.draw_line(
            Point::new(inner.x, inner.y),
            Point::new(inner.right(), inner.bottom()),
            color,
            width,
        );
        self.canvas.draw_line(
            Point::new(inner.x, inner.bottom()),
            Point::new(inner.right(), inner.y),
            color,
            width,
        );
    }
}

fn first_upper(text: &str) -> Option<char> {
    text.trim().chars().next().map(|c| c.to_ascii_uppercase())
}
