pub mod fixtures;
pub mod pdf_assertions;

use furips::{DocumentGenerator, GeneratorBuilder};
use lopdf::content::{Content, Operation};
use lopdf::Document as LopdfDocument;
use std::path::Path;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A generator writing under `dir` without a header image.
pub fn generator_in(dir: &Path) -> GeneratorBuilder {
    DocumentGenerator::builder()
        .with_output_dir(dir)
        .without_header_image()
}

/// Wrapper around a generated PDF with its decoded page content.
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
    pub operations: Vec<Operation>,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        let page_id = *doc.get_pages().values().next().ok_or("document has no pages")?;
        let operations = Content::decode(&doc.get_page_content(page_id)?)?.operations;
        Ok(Self {
            bytes,
            doc,
            operations,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(std::fs::read(path)?)
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}
