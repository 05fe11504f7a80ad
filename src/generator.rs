use crate::assembler::{DocumentAssembler, PageLayout, TemplateId};
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::fields::FieldMapping;
use crate::persist::{PersistenceManager, open_in_viewer};
use furips_render_core::RenderedDocument;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Keys tried, in order, for the document id used in output file names.
const DOCUMENT_ID_KEYS: &[&str] = &["idAccidente", "id_accidente", "consecutivo", "numero_consecutivo"];

/// Renders a template with one field mapping and saves the result.
#[derive(Debug)]
pub struct DocumentGenerator {
    config: GeneratorConfig,
    assembler: DocumentAssembler,
    persistence: PersistenceManager,
}

impl DocumentGenerator {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produces the single-page PDF in memory.
    pub fn render(&self, template: TemplateId, data: &FieldMapping) -> Result<RenderedDocument, GenerationError> {
        Ok(self.assembler.assemble(template, data, self.config.header_image())?)
    }

    /// Renders and saves to `destination`, returning where the file actually landed.
    pub fn generate(
        &self,
        template: TemplateId,
        data: &FieldMapping,
        destination: &Path,
    ) -> Result<PathBuf, GenerationError> {
        let document = self.render(template, data)?;
        let saved = self.persistence.save(document, destination)?;
        if self.config.open_viewer {
            open_in_viewer(&saved);
        }
        Ok(saved)
    }

    /// Renders and saves under the configured output directory as
    /// `furips_<id>_<template>.pdf`.
    pub fn generate_to_output_dir(
        &self,
        template: TemplateId,
        data: &FieldMapping,
        document_id: &str,
    ) -> Result<PathBuf, GenerationError> {
        let destination = self.config.output_path_for(template, document_id);
        self.generate(template, data, &destination)
    }

    /// Full path from JSON input: template name and a JSON object of field values.
    pub fn generate_from_json(&self, template: &str, json: &str) -> Result<PathBuf, GenerationError> {
        let template: TemplateId = template.parse()?;
        let value: Value = serde_json::from_str(json)?;
        let data = FieldMapping::from_json(&value)?;
        let id = document_id(&data);
        self.generate_to_output_dir(template, &data, &id)
    }
}

fn document_id(data: &FieldMapping) -> String {
    DOCUMENT_ID_KEYS
        .iter()
        .filter_map(|key| data.get(key))
        .map(str::trim)
        .find(|id| !id.is_empty())
        .unwrap_or("sin_id")
        .to_string()
}

/// A builder for [`DocumentGenerator`].
#[derive(Debug, Default)]
pub struct GeneratorBuilder {
    config: GeneratorConfig,
    layout: Option<PageLayout>,
    persistence: Option<PersistenceManager>,
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn with_header_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.header_image = Some(path.into());
        self
    }

    pub fn without_header_image(mut self) -> Self {
        self.config.header_image = None;
        self
    }

    pub fn open_viewer(mut self, open: bool) -> Self {
        self.config.open_viewer = open;
        self
    }

    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_persistence(mut self, persistence: PersistenceManager) -> Self {
        self.persistence = Some(persistence);
        self
    }

    pub fn build(self) -> Result<DocumentGenerator, GenerationError> {
        self.config.validate()?;
        let layout = self.layout.unwrap_or_default();
        if layout.page.width <= 2.0 * layout.margin || layout.page.height <= 2.0 * layout.margin {
            return Err(GenerationError::Config(format!(
                "margin {} leaves no room on a {}x{} page",
                layout.margin, layout.page.width, layout.page.height
            )));
        }
        Ok(DocumentGenerator {
            config: self.config,
            assembler: DocumentAssembler::with_layout(layout),
            persistence: self.persistence.unwrap_or_default(),
        })
    }
}
