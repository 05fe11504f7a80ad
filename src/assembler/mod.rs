//! Page assembly: turns a template and a field mapping into drawing calls.
//!
//! A template is a fixed sequence of elements (header band, title and section bars,
//! field rows, code grids, the service table) drawn in one top-to-bottom pass. The
//! pass never paginates; an element that would cross the bottom margin is skipped
//! with a warning.

mod cursor;
mod furips1;
mod furips2;
mod pass;
mod template;

pub use template::TemplateId;

use crate::fields::FieldMapping;
use crate::resolve::FieldResolver;
use furips_layout::RowStyle;
use furips_render_core::{CanvasRenderer, RenderError, RenderedDocument};
use furips_render_lopdf::LopdfCanvas;
use furips_types::{Color, Size};
use pass::DrawPass;
use std::path::Path;

/// Page geometry and styling shared by every template.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub page: Size,
    pub margin: f32,
    /// Vertical space after every element.
    pub element_gap: f32,
    pub header_height: f32,
    pub title_height: f32,
    pub title_font_size: f32,
    pub bar_height: f32,
    pub bar_font_size: f32,
    pub bar_fill: Color,
    pub row_height: f32,
    /// Height of free-text rows such as the event description.
    pub text_block_height: f32,
    pub row_style: RowStyle,
    pub min_box_width: f32,
    pub border_color: Color,
    pub border_width: f32,
    pub placeholder_color: Color,
    pub grid_cells: usize,
    pub grid_box_size: f32,
    pub grid_gap: f32,
    pub checkbox_size: f32,
    pub table_header_height: f32,
    pub table_row_height: f32,
    pub table_font_size: f32,
    pub table_max_rows: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page: Size::a4(),
            margin: 20.0,
            element_gap: 4.0,
            header_height: 70.0,
            title_height: 16.0,
            title_font_size: 9.0,
            bar_height: 12.0,
            bar_font_size: 7.5,
            bar_fill: Color::gray(215),
            row_height: 16.0,
            text_block_height: 36.0,
            row_style: RowStyle::default(),
            min_box_width: 40.0,
            border_color: Color::BLACK,
            border_width: 0.6,
            placeholder_color: Color::gray(160),
            grid_cells: 12,
            grid_box_size: 14.0,
            grid_gap: 2.0,
            checkbox_size: 9.0,
            table_header_height: 16.0,
            table_row_height: 15.0,
            table_font_size: 6.5,
            table_max_rows: 20,
        }
    }
}

/// How the header band was filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderOutcome {
    Image,
    #[default]
    Placeholder,
}

/// What a drawing pass degraded on its way down the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    pub header: HeaderOutcome,
    /// Canonical names of fields drawn empty.
    pub unresolved: Vec<&'static str>,
    /// Elements left out because they would cross the bottom margin.
    pub skipped_elements: usize,
    pub dropped_detail_rows: usize,
}

/// Draws templates onto a canvas.
#[derive(Debug)]
pub struct DocumentAssembler {
    layout: PageLayout,
    resolver: FieldResolver,
    coded_resolver: FieldResolver,
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAssembler {
    pub fn new() -> Self {
        Self::with_layout(PageLayout::default())
    }

    pub fn with_layout(layout: PageLayout) -> Self {
        Self {
            layout,
            resolver: FieldResolver::standard(),
            coded_resolver: FieldResolver::coded(),
        }
    }

    /// Replaces the resolver chains used for ordinary fields and for code grids.
    pub fn with_resolvers(mut self, standard: FieldResolver, coded: FieldResolver) -> Self {
        self.resolver = standard;
        self.coded_resolver = coded;
        self
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Draws `template` onto any canvas. Never fails: missing data, a missing header
    /// image and overflowing elements only degrade the page.
    pub fn draw<C: CanvasRenderer>(
        &self,
        canvas: &mut C,
        template: TemplateId,
        data: &FieldMapping,
        header_image: Option<&Path>,
    ) -> AssemblyReport {
        log::debug!("Drawing template {} with {} field(s)", template, data.len());
        let mut pass = DrawPass::new(canvas, &self.layout, data, &self.resolver, &self.coded_resolver);
        match template {
            TemplateId::Furips1 => furips1::draw(&mut pass, header_image),
            TemplateId::Furips2 => furips2::draw(&mut pass, header_image),
        }
        pass.finish()
    }

    /// Draws `template` onto a fresh PDF page and serializes it.
    pub fn assemble(
        &self,
        template: TemplateId,
        data: &FieldMapping,
        header_image: Option<&Path>,
    ) -> Result<RenderedDocument, RenderError> {
        let mut canvas = LopdfCanvas::new(self.layout.page);
        let report = self.draw(&mut canvas, template, data, header_image);
        if !report.unresolved.is_empty() {
            log::info!(
                "{}: {} field(s) left blank: {}",
                template,
                report.unresolved.len(),
                report.unresolved.join(", ")
            );
        }
        if report.skipped_elements > 0 || report.dropped_detail_rows > 0 {
            log::warn!(
                "{}: {} element(s) and {} detail row(s) did not fit on the page",
                template,
                report.skipped_elements,
                report.dropped_detail_rows
            );
        }
        canvas.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::DetailLine;
    use furips_render_core::{DrawCommand, RecordingCanvas};
    use furips_types::Rect;

    fn claim() -> FieldMapping {
        [
            ("consecutivo", "000000000008"),
            ("factura", "123123"),
            ("victima_nombre", "Juan Perez"),
            ("victima_documento", "1234567890"),
            ("codigo_habilitacion", "12AB3456"),
            ("zona", "urbana"),
        ]
        .into_iter()
        .collect()
    }

    fn draw(template: TemplateId, data: &FieldMapping) -> (RecordingCanvas, AssemblyReport) {
        let mut canvas = RecordingCanvas::new(Size::a4());
        let report = DocumentAssembler::new().draw(&mut canvas, template, data, None);
        (canvas, report)
    }

    fn grid_cells(canvas: &RecordingCanvas) -> Vec<Rect> {
        canvas
            .stroked_rects()
            .into_iter()
            .filter(|r| r.width == 14.0 && r.height == 14.0)
            .collect()
    }

    fn text_in(canvas: &RecordingCanvas, cell: Rect) -> Option<&str> {
        canvas.commands().iter().find_map(|c| match c {
            DrawCommand::Text { rect, text, .. } if *rect == cell => Some(text.as_str()),
            _ => None,
        })
    }

    #[test]
    fn furips1_places_values_and_code_grid() {
        let (canvas, report) = draw(TemplateId::Furips1, &claim());
        let texts = canvas.texts();
        for expected in ["000000000008", "123123", "Juan Perez", "1234567890"] {
            assert!(texts.contains(&expected), "missing {}", expected);
        }

        let cells = grid_cells(&canvas);
        assert_eq!(cells.len(), 12);
        let shown: Vec<Option<String>> = cells
            .iter()
            .map(|c| text_in(&canvas, *c).map(str::to_string))
            .collect();
        let expected: Vec<Option<String>> = "12AB3456"
            .chars()
            .map(|c| Some(c.to_string()))
            .chain(std::iter::repeat_n(None, 4))
            .collect();
        assert_eq!(shown, expected);
        assert_eq!(report.skipped_elements, 0);
    }

    #[test]
    fn missing_header_draws_placeholder_band() {
        let (canvas, report) = draw(TemplateId::Furips1, &claim());
        assert_eq!(report.header, HeaderOutcome::Placeholder);
        assert_eq!(canvas.image_count(), 0);
        assert_eq!(canvas.stroked_rects()[0], Rect::new(20.0, 20.0, 555.0, 70.0));
    }

    #[test]
    fn unreadable_header_falls_back_to_placeholder() {
        let mut canvas = RecordingCanvas::new(Size::a4());
        let report = DocumentAssembler::new().draw(
            &mut canvas,
            TemplateId::Furips1,
            &claim(),
            Some(Path::new("/nonexistent/Encabezado_Furips.png")),
        );
        assert_eq!(report.header, HeaderOutcome::Placeholder);
        assert_eq!(canvas.image_count(), 0);
    }

    #[test]
    fn elements_never_overlap_vertically() {
        let (canvas, _) = draw(TemplateId::Furips1, &claim());
        let mut bands: Vec<Rect> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Fill { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect();
        bands.sort_by(|a, b| a.y.total_cmp(&b.y));
        for pair in bands.windows(2) {
            assert!(pair[0].bottom() <= pair[1].y);
        }
        for rect in canvas.stroked_rects() {
            assert!(rect.bottom() <= 842.0 - 20.0);
        }
    }

    #[test]
    fn urban_zone_is_marked() {
        let (canvas, _) = draw(TemplateId::Furips1, &claim());
        let lines = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        assert_eq!(lines, 2);
    }

    #[test]
    fn empty_mapping_reports_unresolved_fields() {
        let (canvas, report) = draw(TemplateId::Furips1, &FieldMapping::new());
        assert!(report.unresolved.contains(&"codigo_habilitacion"));
        assert!(report.unresolved.contains(&"victima_nombre"));
        // Boxes are still drawn.
        assert_eq!(grid_cells(&canvas).len(), 12);
    }

    #[test]
    fn blank_fields_stay_blank_beside_similar_keys() {
        let data: FieldMapping = [
            ("factura", ""),
            ("placa", ""),
            ("municipio", ""),
            ("total_gmq_facturado", "150000"),
            ("placa_ambulancia", "AMB123"),
            ("propietario_municipio", "Palmira"),
        ]
        .into_iter()
        .collect();
        let (canvas, report) = draw(TemplateId::Furips1, &data);

        // Each value is drawn only in its own box.
        let texts = canvas.texts();
        for value in ["150000", "AMB123", "Palmira"] {
            assert_eq!(texts.iter().filter(|t| **t == value).count(), 1, "{}", value);
        }
        for field in ["factura", "placa", "municipio"] {
            assert!(report.unresolved.contains(&field), "{} resolved", field);
        }
    }

    #[test]
    fn furips2_caps_table_rows() {
        let line = DetailLine {
            codigo: "890701".into(),
            descripcion: "Consulta de urgencias".into(),
            valor_facturado: "45000".into(),
            ..DetailLine::default()
        };
        let data = claim().with_details(vec![line; 25]);
        let (canvas, report) = draw(TemplateId::Furips2, &data);

        assert_eq!(report.dropped_detail_rows, 5);
        let codes = canvas.texts().iter().filter(|t| **t == "890701").count();
        assert_eq!(codes, 20);
    }

    #[test]
    fn overflowing_elements_are_skipped() {
        let mut canvas = RecordingCanvas::new(Size::new(595.0, 200.0));
        let report = DocumentAssembler::new().draw(&mut canvas, TemplateId::Furips1, &claim(), None);
        assert!(report.skipped_elements > 0);
        for rect in canvas.stroked_rects() {
            assert!(rect.bottom() <= 180.0);
        }
    }
}
