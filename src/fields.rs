//! The input contract: one document instance as an ordered field-name to value map.

use crate::error::GenerationError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key under which service detail rows arrive in JSON input.
const DETAILS_KEY: &str = "detalles";

/// A resolved display string bound to a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub name: String,
    pub text: String,
}

impl FieldValue {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One billed service line of a claim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailLine {
    pub tipo_servicio: String,
    pub codigo: String,
    pub descripcion: String,
    pub cantidad: String,
    pub valor_unitario: String,
    pub valor_facturado: String,
    pub valor_reclamado: String,
}

impl DetailLine {
    fn from_json(obj: &serde_json::Map<String, Value>) -> Self {
        let get = |key: &str| obj.get(key).and_then(display_string).unwrap_or_default();
        Self {
            tipo_servicio: get("tipo_servicio"),
            codigo: get("codigo"),
            descripcion: get("descripcion"),
            cantidad: get("cantidad"),
            valor_unitario: get("valor_unitario"),
            valor_facturado: get("valor_facturado"),
            valor_reclamado: get("valor_reclamado"),
        }
    }
}

/// Field values of one document, in insertion order, plus optional detail rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    fields: IndexMap<String, String>,
    details: Vec<DetailLine>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.details.is_empty()
    }

    pub fn details(&self) -> &[DetailLine] {
        &self.details
    }

    pub fn push_detail(&mut self, line: DetailLine) {
        self.details.push(line);
    }

    pub fn with_details(mut self, details: Vec<DetailLine>) -> Self {
        self.details = details;
        self
    }

    /// Builds a mapping from a JSON object.
    ///
    /// Strings are kept verbatim, numbers and booleans are stringified and `null`
    /// becomes the empty string. The `detalles` array becomes detail rows. Other
    /// nested values are skipped.
    pub fn from_json(value: &Value) -> Result<Self, GenerationError> {
        let obj = value
            .as_object()
            .ok_or_else(|| GenerationError::Input("document data must be a JSON object".into()))?;

        let mut mapping = Self::new();
        for (key, value) in obj {
            if key == DETAILS_KEY {
                if let Value::Array(rows) = value {
                    mapping.details = rows
                        .iter()
                        .filter_map(Value::as_object)
                        .map(DetailLine::from_json)
                        .collect();
                }
                continue;
            }
            match display_string(value) {
                Some(text) => {
                    mapping.insert(key.clone(), text);
                }
                None => log::debug!("Skipping non-scalar field '{}'", key),
            }
        }
        Ok(mapping)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (k, v) in iter {
            mapping.insert(k, v);
        }
        mapping
    }
}

fn display_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
