//! Field resolution: locating a template field's value in a loosely keyed mapping.
//!
//! Upstream systems deliver the same field under several key spellings. Each
//! [`ResolutionStrategy`] is one way of finding a value; a [`FieldResolver`]
//! tries its strategies in order and the first match wins.

use crate::fields::{FieldMapping, FieldValue};

/// A template field: its canonical name and the exact keys it may arrive under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

impl FieldSpec {
    pub const fn new(canonical: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { canonical, aliases }
    }

    /// The canonical name followed by the aliases.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.canonical).chain(self.aliases.iter().copied())
    }
}

pub trait ResolutionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns the matching raw value, or `None` when this strategy finds nothing.
    fn resolve<'m>(&self, field: &FieldSpec, mapping: &'m FieldMapping) -> Option<&'m str>;
}

/// Looks up the canonical name and each alias verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactKey;

impl ResolutionStrategy for ExactKey {
    fn name(&self) -> &'static str {
        "exact-key"
    }

    fn resolve<'m>(&self, field: &FieldSpec, mapping: &'m FieldMapping) -> Option<&'m str> {
        field
            .keys()
            .filter_map(|key| mapping.get(key))
            .find(|value| has_content(value))
    }
}

/// Matches the first key whose normalized form ends with the normalized canonical name.
///
/// Handles qualified keys such as ``setPrestador.`codigo_habilitacion` ``. The name must
/// start at a separator, so `total_gmq_facturado` is not taken for `factura`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizedKeyContains;

impl ResolutionStrategy for NormalizedKeyContains {
    fn name(&self) -> &'static str {
        "normalized-key"
    }

    fn resolve<'m>(&self, field: &FieldSpec, mapping: &'m FieldMapping) -> Option<&'m str> {
        let target = normalize_key(field.canonical);
        mapping
            .iter()
            .find(|(key, value)| has_content(value) && qualifies(&normalize_key(key), &target))
            .map(|(_, value)| value)
    }
}

/// `key` is `target` itself or `target` qualified by a prefix ending in `_`.
fn qualifies(key: &str, target: &str) -> bool {
    key.strip_suffix(target)
        .is_some_and(|prefix| prefix.is_empty() || prefix.ends_with('_'))
}

/// Accepts the first value that looks like a code: bounded length, at least one digit.
///
/// Only meaningful for numeric identifiers; it ignores the field entirely. Lengths are
/// measured on the value as given, surrounding whitespace included.
#[derive(Debug, Clone, Copy)]
pub struct DigitValueScan {
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for DigitValueScan {
    fn default() -> Self {
        Self {
            min_len: 4,
            max_len: 20,
        }
    }
}

impl ResolutionStrategy for DigitValueScan {
    fn name(&self) -> &'static str {
        "digit-scan"
    }

    fn resolve<'m>(&self, _field: &FieldSpec, mapping: &'m FieldMapping) -> Option<&'m str> {
        mapping.iter().map(|(_, value)| value).find(|value| {
            let len = value.chars().count();
            (self.min_len..=self.max_len).contains(&len) && value.chars().any(|c| c.is_ascii_digit())
        })
    }
}

/// Lowercases and strips quoting so differently spelled keys compare equal.
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, '`' | '\'' | '"'))
        .map(|c| match c {
            '.' | '-' | ' ' | '/' | ':' => '_',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}

fn has_content(value: &str) -> bool {
    !value.trim().is_empty()
}

/// An ordered chain of strategies.
pub struct FieldResolver {
    strategies: Vec<Box<dyn ResolutionStrategy>>,
}

impl FieldResolver {
    /// Exact keys only. Ordinary fields fall back between their named aliases and
    /// nothing else, since loose matching would borrow a sibling field's value.
    pub fn standard() -> Self {
        Self::with_strategies(vec![Box::new(ExactKey)])
    }

    /// Exact key, then qualified key, then the digit-bearing value scan, for code fields.
    pub fn coded() -> Self {
        Self::with_strategies(vec![
            Box::new(ExactKey),
            Box::new(NormalizedKeyContains),
            Box::new(DigitValueScan::default()),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn ResolutionStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Resolves a field, yielding an empty value when no strategy matches.
    pub fn resolve(&self, field: &FieldSpec, mapping: &FieldMapping) -> FieldValue {
        for strategy in &self.strategies {
            if let Some(value) = strategy.resolve(field, mapping) {
                log::debug!("Field '{}' resolved by {}", field.canonical, strategy.name());
                return FieldValue::new(field.canonical, value);
            }
        }
        log::debug!("Field '{}' has no value", field.canonical);
        FieldValue::empty(field.canonical)
    }
}

impl Default for FieldResolver {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for FieldResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldResolver")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HABILITACION: FieldSpec =
        FieldSpec::new("codigo_habilitacion", &["codigoHabilitacion", "cod_habilitacion"]);
    const MUNICIPIO: FieldSpec = FieldSpec::new("municipio", &["minicipioEvento", "municipioEvento"]);

    fn mapping(entries: &[(&str, &str)]) -> FieldMapping {
        entries.iter().copied().collect()
    }

    #[test]
    fn exact_key_wins() {
        let data = mapping(&[("codigo_habilitacion", "12345")]);
        assert_eq!(FieldResolver::coded().resolve(&HABILITACION, &data).text, "12345");
    }

    #[test]
    fn alias_is_tried_after_canonical() {
        let data = mapping(&[("minicipioEvento", "Cali")]);
        assert_eq!(FieldResolver::standard().resolve(&MUNICIPIO, &data).text, "Cali");
    }

    #[test]
    fn qualified_key_matches_after_normalization() {
        let data = mapping(&[("setPrestador.`codigo_habilitacion`", "98765")]);
        let value = FieldResolver::coded().resolve(&HABILITACION, &data);
        assert_eq!(value.name, "codigo_habilitacion");
        assert_eq!(value.text, "98765");
    }

    #[test]
    fn digit_scan_is_the_last_resort() {
        let data = mapping(&[("foo", "AB12CD")]);
        assert_eq!(FieldResolver::coded().resolve(&HABILITACION, &data).text, "AB12CD");
        assert!(FieldResolver::standard().resolve(&HABILITACION, &data).is_empty());
    }

    #[test]
    fn digit_scan_respects_bounds() {
        let data = mapping(&[("a", "123"), ("b", "ABCDEF"), ("c", "123456789012345678901"), ("d", "X-4455")]);
        assert_eq!(DigitValueScan::default().resolve(&HABILITACION, &data), Some("X-4455"));
    }

    #[test]
    fn first_match_in_insertion_order() {
        let data = mapping(&[("x.codigo_habilitacion", "111"), ("y.codigo_habilitacion", "222")]);
        assert_eq!(NormalizedKeyContains.resolve(&HABILITACION, &data), Some("111"));
    }

    #[test]
    fn blank_values_do_not_match() {
        let data = mapping(&[("codigo_habilitacion", "  "), ("prestador.codigo_habilitacion", "5500")]);
        assert_eq!(FieldResolver::coded().resolve(&HABILITACION, &data).text, "5500");
    }

    #[test]
    fn ordinary_fields_never_borrow_sibling_keys() {
        let factura = FieldSpec::new("factura", &["numero_factura"]);
        let data = mapping(&[
            ("factura", ""),
            ("municipio", ""),
            ("total_gmq_facturado", "150000"),
            ("propietario_municipio", "Palmira"),
            ("prestador.factura", "F-77"),
        ]);
        let resolver = FieldResolver::standard();
        assert!(resolver.resolve(&factura, &data).is_empty());
        assert!(resolver.resolve(&MUNICIPIO, &data).is_empty());
        assert_eq!(resolver.strategy_names(), vec!["exact-key"]);
    }

    #[test]
    fn qualified_match_needs_a_separator_boundary() {
        let data = mapping(&[
            ("codigo_habilitacion_recibe", "4400"),
            ("xcodigo_habilitacion", "5500"),
            ("ips.codigo_habilitacion", "6600"),
        ]);
        assert_eq!(NormalizedKeyContains.resolve(&HABILITACION, &data), Some("6600"));
        assert!(qualifies("codigo_habilitacion", "codigo_habilitacion"));
        assert!(!qualifies("total_gmq_facturado", "factura"));
    }

    #[test]
    fn digit_scan_measures_untrimmed_value() {
        let data = mapping(&[("a", " 123")]);
        assert_eq!(DigitValueScan::default().resolve(&HABILITACION, &data), Some(" 123"));
    }

    #[test]
    fn unresolved_field_is_empty_not_an_error() {
        let value = FieldResolver::coded().resolve(&MUNICIPIO, &FieldMapping::new());
        assert_eq!(value, FieldValue::empty("municipio"));
    }

    #[test]
    fn normalization() {
        assert_eq!(normalize_key("setPrestador.`Codigo-Habilitacion`"), "setprestador_codigo_habilitacion");
        assert_eq!(normalize_key("\"fecha evento\""), "fecha_evento");
    }
}
