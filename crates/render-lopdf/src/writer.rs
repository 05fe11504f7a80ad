use furips_render_core::RenderError;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::io::Write;

/// Collects the objects of a small PDF and writes them out in one go.
///
/// The resources, page tree and catalog ids are reserved up front so page objects can
/// reference them before they are filled in by [`finish`](Self::finish).
pub struct PdfPageWriter {
    document: Document,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    font_dict: Dictionary,
    xobjects: Dictionary,
    page_ids: Vec<ObjectId>,
}

impl PdfPageWriter {
    pub fn new(version: &str, font_dict: Dictionary) -> Self {
        let mut document = Document::with_version(version);
        let resources_id = document.new_object_id();
        let pages_id = document.new_object_id();
        let catalog_id = document.new_object_id();

        Self {
            document,
            catalog_id,
            pages_id,
            resources_id,
            font_dict,
            xobjects: Dictionary::new(),
            page_ids: Vec::new(),
        }
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        self.document.add_object(object)
    }

    pub fn buffer_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.buffer_object(Object::Stream(stream)))
    }

    /// Adds an image or form XObject and exposes it to pages under `name`.
    pub fn register_xobject(&mut self, name: &str, stream: Stream) -> ObjectId {
        let id = self.buffer_object(Object::Stream(stream));
        self.xobjects.set(name.as_bytes(), Object::Reference(id));
        id
    }

    pub fn write_page_object(&mut self, content_id: ObjectId, page_width: f32, page_height: f32) -> ObjectId {
        let media_box: Vec<Object> = vec![0.0_f32.into(), 0.0_f32.into(), page_width.into(), page_height.into()];
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => media_box,
            "Contents" => Object::Reference(content_id),
            "Resources" => self.resources_id,
        };
        let page_id = self.buffer_object(page_dict.into());
        self.page_ids.push(page_id);
        page_id
    }

    pub fn finish<W: Write>(mut self, mut writer: W) -> Result<W, RenderError> {
        let mut resources = dictionary! { "Font" => self.font_dict };
        if !self.xobjects.is_empty() {
            resources.set("XObject", self.xobjects);
        }
        self.document.objects.insert(self.resources_id, resources.into());

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.document.objects.insert(self.pages_id, pages_dict.into());

        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.document.objects.insert(self.catalog_id, catalog_dict.into());
        self.document.trailer.set("Root", self.catalog_id);

        self.document
            .save_to(&mut writer)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        writer.flush()?;
        Ok(writer)
    }
}
