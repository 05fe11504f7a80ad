use crate::image::{decode_rgb, fit_contain};
use crate::writer::PdfPageWriter;
use furips_render_core::utils::{BOLD_OFFSET, flip_y, text_origin, to_win_ansi};
use furips_render_core::{CanvasRenderer, RenderError, RenderedDocument, TextStyle};
use furips_types::{Color, Point, Rect, Size};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, Stream, StringFormat, dictionary};
use std::io::Cursor;

const PDF_VERSION: &str = "1.7";
const FONT_RESOURCE: &str = "F1";
const BASE_FONT: &str = "Helvetica";

/// A single-page canvas that records PDF content operations in memory.
pub struct LopdfCanvas {
    page: Size,
    operations: Vec<Operation>,
    images: Vec<(String, Stream)>,
}

impl LopdfCanvas {
    pub fn new(page: Size) -> Self {
        Self {
            page,
            operations: Vec::new(),
            images: Vec::new(),
        }
    }

    pub fn a4() -> Self {
        Self::new(Size::a4())
    }

    /// Serializes the page into a complete one-page PDF.
    pub fn finish(self) -> Result<RenderedDocument, RenderError> {
        let mut writer = PdfPageWriter::new(PDF_VERSION, font_dictionary());
        for (name, stream) in self.images {
            writer.register_xobject(&name, stream);
        }
        let content_id = writer.buffer_content_stream(Content {
            operations: self.operations,
        })?;
        writer.write_page_object(content_id, self.page.width, self.page.height);

        let bytes = writer.finish(Cursor::new(Vec::new()))?.into_inner();
        log::debug!("Serialized page: {} bytes", bytes.len());
        Ok(RenderedDocument::new(bytes, self.page))
    }

    /// Lower-left corner of `rect` in PDF coordinates.
    fn pdf_origin(&self, rect: Rect) -> (f32, f32) {
        (rect.x, flip_y(rect.bottom(), self.page.height))
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn push_color(&mut self, operator: &str, color: Color) {
        let [r, g, b] = color.to_unit();
        self.push(operator, vec![r.into(), g.into(), b.into()]);
    }

    fn push_text_run(&mut self, origin: Point, text: &[u8], style: &TextStyle) {
        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![Object::Name(FONT_RESOURCE.as_bytes().to_vec()), style.font_size.into()],
        );
        self.push_color("rg", style.color);
        self.push("Td", vec![origin.x.into(), flip_y(origin.y, self.page.height).into()]);
        self.push(
            "Tj",
            vec![Object::String(text.to_vec(), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }
}

impl CanvasRenderer for LopdfCanvas {
    fn page_size(&self) -> Size {
        self.page
    }

    fn draw_rect(&mut self, rect: Rect, border: Color, border_width: f32) {
        let (x, y) = self.pdf_origin(rect);
        self.push("q", vec![]);
        self.push("w", vec![border_width.into()]);
        self.push_color("RG", border);
        self.push("re", vec![x.into(), y.into(), rect.width.into(), rect.height.into()]);
        self.push("S", vec![]);
        self.push("Q", vec![]);
    }

    fn fill_rect(&mut self, rect: Rect, fill: Color) {
        let (x, y) = self.pdf_origin(rect);
        self.push("q", vec![]);
        self.push_color("rg", fill);
        self.push("re", vec![x.into(), y.into(), rect.width.into(), rect.height.into()]);
        self.push("f", vec![]);
        self.push("Q", vec![]);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        let page_height = self.page.height;
        self.push("q", vec![]);
        self.push("w", vec![width.into()]);
        self.push_color("RG", color);
        self.push("m", vec![from.x.into(), flip_y(from.y, page_height).into()]);
        self.push("l", vec![to.x.into(), flip_y(to.y, page_height).into()]);
        self.push("S", vec![]);
        self.push("Q", vec![]);
    }

    fn write_text(&mut self, rect: Rect, text: &str, style: &TextStyle) {
        if text.trim().is_empty() {
            return;
        }
        let origin = text_origin(rect, text, style);
        let encoded = to_win_ansi(text);
        self.push_text_run(origin, &encoded, style);
        if style.bold {
            let shifted = Point::new(origin.x + BOLD_OFFSET, origin.y);
            self.push_text_run(shifted, &encoded, style);
        }
    }

    fn draw_image(&mut self, rect: Rect, encoded: &[u8]) -> Result<(), RenderError> {
        let xobject = decode_rgb(encoded)?;
        let placed = fit_contain(rect, xobject.width, xobject.height);
        let name = format!("Im{}", self.images.len() + 1);
        let (x, y) = self.pdf_origin(placed);

        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                placed.width.into(),
                Object::Integer(0),
                Object::Integer(0),
                placed.height.into(),
                x.into(),
                y.into(),
            ],
        );
        self.push("Do", vec![Object::Name(name.as_bytes().to_vec())]);
        self.push("Q", vec![]);
        self.images.push((name, xobject.stream));
        Ok(())
    }
}

fn font_dictionary() -> Dictionary {
    let helvetica = dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => BASE_FONT,
        "Encoding" => "WinAnsiEncoding",
    };
    dictionary! { FONT_RESOURCE => helvetica }
}
