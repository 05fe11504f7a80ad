use crate::assembler::TemplateId;
use crate::error::GenerationError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_OUTPUT_DIR: &str = "FURIPS_OUTPUT_DIR";
pub const ENV_HEADER_IMAGE: &str = "FURIPS_HEADER_IMAGE";
pub const ENV_OPEN_VIEWER: &str = "FURIPS_OPEN_VIEWER";
pub const ENV_LOG: &str = "FURIPS_LOG";

/// Runtime settings of the generator.
///
/// Defaults can be overridden by a JSON document and then by `FURIPS_*` environment
/// variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    /// Image drawn in the header band. `None` always draws the placeholder.
    pub header_image: Option<PathBuf>,
    /// Open each saved document in the platform viewer.
    pub open_viewer: bool,
    pub log_level: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            header_image: Some(PathBuf::from("imagenes").join("Encabezado_Furips.png")),
            open_viewer: false,
            log_level: "info".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Defaults layered with the process environment.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Parses a JSON settings document; absent keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, GenerationError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `FURIPS_*` overrides read through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|v| !v.trim().is_empty()) {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(image) = lookup(ENV_HEADER_IMAGE) {
            self.header_image = if image.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(image))
            };
        }
        if let Some(flag) = lookup(ENV_OPEN_VIEWER) {
            match parse_flag(&flag) {
                Some(open) => self.open_viewer = open,
                None => log::warn!("Ignoring {}={:?}: expected a boolean", ENV_OPEN_VIEWER, flag),
            }
        }
        if let Some(level) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            self.log_level = level;
        }
        self
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(GenerationError::Config("output_dir must not be empty".into()));
        }
        Ok(())
    }

    /// `<output_dir>/furips_<id>_<template>.pdf`
    pub fn output_path_for(&self, template: TemplateId, document_id: &str) -> PathBuf {
        self.output_dir
            .join(format!("furips_{}_{}.pdf", sanitize_id(document_id), template))
    }

    pub fn header_image(&self) -> Option<&Path> {
        self.header_image.as_deref()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Keeps document ids usable as a single path component.
fn sanitize_id(id: &str) -> String {
    let cleaned: String = id
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "sin_id".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(
            config.header_image(),
            Some(Path::new("imagenes/Encabezado_Furips.png"))
        );
        assert!(!config.open_viewer);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn env_overrides() {
        let config = GeneratorConfig::default().with_overrides(lookup(&[
            (ENV_OUTPUT_DIR, "/tmp/furips"),
            (ENV_HEADER_IMAGE, ""),
            (ENV_OPEN_VIEWER, "Yes"),
            (ENV_LOG, "debug"),
        ]));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/furips"));
        assert_eq!(config.header_image, None);
        assert!(config.open_viewer);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn invalid_flag_keeps_previous_value() {
        let config = GeneratorConfig::default().with_overrides(lookup(&[(ENV_OPEN_VIEWER, "maybe")]));
        assert!(!config.open_viewer);
    }

    #[test]
    fn json_keeps_defaults_for_absent_keys() {
        let config = GeneratorConfig::from_json_str(r#"{ "output_dir": "salida", "open_viewer": true }"#).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("salida"));
        assert!(config.open_viewer);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn json_rejects_empty_output_dir() {
        assert!(matches!(
            GeneratorConfig::from_json_str(r#"{ "output_dir": "" }"#),
            Err(GenerationError::Config(_))
        ));
    }

    #[test]
    fn output_path_naming() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.output_path_for(TemplateId::Furips1, "8"),
            PathBuf::from("output/furips_8_furips1.pdf")
        );
        assert_eq!(
            config.output_path_for(TemplateId::Furips2, "../x y"),
            PathBuf::from("output/furips____x_y_furips2.pdf")
        );
        assert_eq!(
            config.output_path_for(TemplateId::Furips2, " "),
            PathBuf::from("output/furips_sin_id_furips2.pdf")
        );
    }
}
