//! Single-page FURIPS claim documents rendered to PDF.
//!
//! A [`DocumentGenerator`] takes a [`TemplateId`] and a [`FieldMapping`], draws the
//! template onto a lopdf-backed canvas and saves the bytes through a
//! [`PersistenceManager`] that never loses a rendered document to a rename failure.
//!
//! ```no_run
//! use furips::{DocumentGenerator, FieldMapping, TemplateId};
//! use std::path::Path;
//!
//! let data: FieldMapping = [("consecutivo", "000000000008"), ("factura", "123123")]
//!     .into_iter()
//!     .collect();
//! let generator = DocumentGenerator::builder().without_header_image().build()?;
//! let saved = generator.generate(TemplateId::Furips1, &data, Path::new("output/furips_8_furips1.pdf"))?;
//! println!("saved to {}", saved.display());
//! # Ok::<(), furips::GenerationError>(())
//! ```

pub mod assembler;
pub mod config;
pub mod error;
pub mod fields;
pub mod generator;
pub mod logging;
pub mod persist;
pub mod resolve;

pub use assembler::{AssemblyReport, DocumentAssembler, HeaderOutcome, PageLayout, TemplateId};
pub use config::GeneratorConfig;
pub use error::GenerationError;
pub use fields::{DetailLine, FieldMapping, FieldValue};
pub use generator::{DocumentGenerator, GeneratorBuilder};
pub use persist::{PersistenceError, PersistenceManager, SaveStrategy, open_in_viewer};
pub use resolve::{FieldResolver, FieldSpec, ResolutionStrategy};

pub use furips_layout as layout;
pub use furips_render_core as render;
pub use furips_render_lopdf as pdf;
pub use furips_types as types;
