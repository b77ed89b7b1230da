//! RDF namespace and prefix management
//!
//! This module holds the prefix table used when serializing observations.
//! The table keeps registration order, which is the order of the JSON-LD
//! `@context` and of the declarations written for an empty graph. The
//! Turtle-family writers order non-empty prefix headers themselves.

use indexmap::IndexMap;
use std::sync::LazyLock;
use thiserror::Error;

pub const SOSA: &str = "http://www.w3.org/ns/sosa/";
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
pub const QUDT: &str = "http://qudt.org/1.1/schema/qudt#";
pub const QUDT_UNIT: &str = "http://qudt.org/1.1/vocab/unit#";
pub const DCT: &str = "http://purl.org/dc/terms/";
pub const CC: &str = "http://creativecommons.org/ns#";

/// Base IRI for minted observation identifiers
pub const BASE_OBSERVATION_IRI: &str = "https://energy-charts.info/observation/";

/// Process-wide registry used for every serialized response
pub static ENERGY_CHARTS: LazyLock<NamespaceManager> = LazyLock::new(NamespaceManager::energy_charts);

/// Prefix errors
#[derive(Error, Debug)]
pub enum PrefixError {
    /// Unknown prefix
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Invalid IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),
}

pub type PrefixResult<T> = Result<T, PrefixError>;

/// Namespace (prefix → IRI mapping)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Prefix
    pub prefix: String,
    /// IRI
    pub iri: String,
}

impl Namespace {
    /// Create a new namespace
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            iri: iri.into(),
        }
    }
}

/// Ordered prefix table
#[derive(Debug, Clone, Default)]
pub struct NamespaceManager {
    prefixes: IndexMap<String, String>,
}

impl NamespaceManager {
    /// Create an empty namespace manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefixes used by the price observation graph
    pub fn energy_charts() -> Self {
        let mut mgr = Self::new();
        mgr.add_prefix("sosa", SOSA);
        mgr.add_prefix("rdf", RDF);
        mgr.add_prefix("xsd", XSD);
        mgr.add_prefix("qudt", QUDT);
        mgr.add_prefix("qudt_unit", QUDT_UNIT);
        mgr.add_prefix("dct", DCT);
        mgr.add_prefix("cc", CC);
        mgr
    }

    /// Add a prefix, replacing the IRI of an existing one in place
    pub fn add_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Get IRI for a prefix
    pub fn get_iri(&self, prefix: &str) -> PrefixResult<&str> {
        self.prefixes
            .get(prefix)
            .map(|s| s.as_str())
            .ok_or_else(|| PrefixError::UnknownPrefix(prefix.to_string()))
    }

    /// Expand a compact IRI (prefix:local) to full IRI
    pub fn expand(&self, compact_iri: &str) -> PrefixResult<String> {
        let (prefix, local) = compact_iri
            .split_once(':')
            .ok_or_else(|| PrefixError::InvalidIri(compact_iri.to_string()))?;
        Ok(format!("{}{}", self.get_iri(prefix)?, local))
    }

    /// Compact an IRI using the longest matching namespace
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.prefixes
            .iter()
            .filter(|(_, namespace)| iri.len() > namespace.len() && iri.starts_with(namespace.as_str()))
            .max_by_key(|(_, namespace)| namespace.len())
            .map(|(prefix, namespace)| format!("{}:{}", prefix, &iri[namespace.len()..]))
    }

    /// Iterate `(prefix, iri)` pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, i)| (p.as_str(), i.as_str()))
    }

    /// Get all registered prefixes
    pub fn prefixes(&self) -> Vec<Namespace> {
        self.iter().map(|(prefix, iri)| Namespace::new(prefix, iri)).collect()
    }

    /// Number of registered prefixes
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Whether no prefix is registered
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let prefixes: Vec<&str> = ENERGY_CHARTS.iter().map(|(p, _)| p).collect();
        assert_eq!(prefixes, vec!["sosa", "rdf", "xsd", "qudt", "qudt_unit", "dct", "cc"]);
    }

    #[test]
    fn test_registry_iris() {
        assert_eq!(ENERGY_CHARTS.get_iri("sosa").unwrap(), "http://www.w3.org/ns/sosa/");
        assert_eq!(ENERGY_CHARTS.get_iri("qudt_unit").unwrap(), "http://qudt.org/1.1/vocab/unit#");
        assert_eq!(ENERGY_CHARTS.get_iri("cc").unwrap(), "http://creativecommons.org/ns#");
        assert!(matches!(ENERGY_CHARTS.get_iri("foaf"), Err(PrefixError::UnknownPrefix(_))));
    }

    #[test]
    fn test_expand() {
        let expanded = ENERGY_CHARTS.expand("qudt_unit:CCY_EUR-PER-KiloW-HR").unwrap();
        assert_eq!(expanded, "http://qudt.org/1.1/vocab/unit#CCY_EUR-PER-KiloW-HR");

        assert!(matches!(ENERGY_CHARTS.expand("Observation"), Err(PrefixError::InvalidIri(_))));
    }

    #[test]
    fn test_compact() {
        assert_eq!(
            ENERGY_CHARTS.compact("http://www.w3.org/ns/sosa/resultTime"),
            Some("sosa:resultTime".to_string())
        );
        assert_eq!(
            ENERGY_CHARTS.compact("http://purl.org/dc/terms/creator"),
            Some("dct:creator".to_string())
        );
        assert_eq!(ENERGY_CHARTS.compact("https://www.smard.de/"), None);
        assert_eq!(ENERGY_CHARTS.compact(SOSA), None);
    }

    #[test]
    fn test_compact_prefers_longest_namespace() {
        let mut mgr = NamespaceManager::new();
        mgr.add_prefix("ec", "https://energy-charts.info/");
        mgr.add_prefix("obs", BASE_OBSERVATION_IRI);

        assert_eq!(
            mgr.compact("https://energy-charts.info/observation/price_1704067200"),
            Some("obs:price_1704067200".to_string())
        );
    }
}
