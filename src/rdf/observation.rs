//! Price series → SOSA observation graph
//!
//! # Mapping Strategy
//!
//! Every index `i` of a price series becomes one `sosa:Observation` named
//! `<base>price_<unix_seconds[i]>` carrying:
//!
//! - `rdf:type sosa:Observation`
//! - `sosa:resultTime` as an `xsd:dateTime` with millisecond precision
//! - `dct:source`, `dct:license` and `dct:creator` provenance
//! - `sosa:hasResult` pointing to a fresh blank node
//!
//! The blank node is a `qudt:QuantityValue` whose `qudt:numericValue` is the
//! price converted from EUR/MWh to EUR/kWh, typed `xsd:float`, with unit
//! `qudt_unit:CCY_EUR-PER-KiloW-HR`.
//!
//! Repeated timestamps mint the same observation IRI; the builder does not
//! deduplicate them.

use chrono::{DateTime, SecondsFormat, Utc};
use energycharts_client::PriceResponse;
use oxrdf::{BlankNode, GraphName, Literal, NamedNode, NamedNodeRef, Quad, Subject, Term};
use thiserror::Error;

use super::namespace::BASE_OBSERVATION_IRI;
use super::vocab::{dct, provenance, qudt, qudt_unit, rdf, sosa, xsd};

/// Statements emitted per observation subject
pub const OBSERVATION_STATEMENTS: usize = 6;
/// Statements emitted per quantity value blank node
pub const QUANTITY_VALUE_STATEMENTS: usize = 3;

/// Mapping errors
#[derive(Error, Debug)]
pub enum MappingError {
    /// Timestamps and prices are not index-aligned
    #[error("Length mismatch: {timestamps} timestamps but {prices} prices")]
    LengthMismatch {
        /// Number of timestamps
        timestamps: usize,
        /// Number of prices
        prices: usize,
    },

    /// Invalid IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// Timestamp outside the representable date range
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),
}

pub type MappingResult<T> = Result<T, MappingError>;

/// Borrowed view of a price series
#[derive(Debug, Clone, Copy)]
pub struct PriceSeries<'a> {
    /// UTC Unix timestamps in seconds
    pub unix_seconds: &'a [i64],
    /// Prices in EUR/MWh, index-aligned with `unix_seconds`
    pub price: &'a [f64],
}

impl<'a> PriceSeries<'a> {
    /// Create a series view
    pub fn new(unix_seconds: &'a [i64], price: &'a [f64]) -> Self {
        Self { unix_seconds, price }
    }

    /// Number of timestamps
    pub fn len(&self) -> usize {
        self.unix_seconds.len()
    }

    /// Whether the series is empty
    pub fn is_empty(&self) -> bool {
        self.unix_seconds.is_empty()
    }
}

impl<'a> From<&'a PriceResponse> for PriceSeries<'a> {
    fn from(response: &'a PriceResponse) -> Self {
        Self::new(&response.unix_seconds, &response.price)
    }
}

/// Insertion-ordered set of quads
#[derive(Debug, Clone, Default)]
pub struct QuadSet {
    quads: Vec<Quad>,
}

impl QuadSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with room for `capacity` quads
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            quads: Vec::with_capacity(capacity),
        }
    }

    /// Append a statement to the default graph
    pub fn push(
        &mut self,
        subject: impl Into<Subject>,
        predicate: NamedNodeRef<'_>,
        object: impl Into<Term>,
    ) {
        self.quads.push(Quad::new(
            subject,
            predicate.into_owned(),
            object,
            GraphName::DefaultGraph,
        ));
    }

    /// Number of quads
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Whether the set holds no quads
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Iterate quads in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Quad> {
        self.quads.iter()
    }

    /// Quads whose subject is `subject`
    pub fn with_subject<'a>(&'a self, subject: &'a Subject) -> impl Iterator<Item = &'a Quad> + 'a {
        self.quads.iter().filter(move |q| &q.subject == subject)
    }
}

impl<'a> IntoIterator for &'a QuadSet {
    type Item = &'a Quad;
    type IntoIter = std::slice::Iter<'a, Quad>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads.iter()
    }
}

impl IntoIterator for QuadSet {
    type Item = Quad;
    type IntoIter = std::vec::IntoIter<Quad>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads.into_iter()
    }
}

/// ISO-8601 UTC instant of a Unix timestamp, millisecond precision
pub fn result_time(unix_seconds: i64) -> MappingResult<String> {
    unix_seconds
        .checked_mul(1000)
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|instant| instant.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or(MappingError::InvalidTimestamp(unix_seconds))
}

/// Lexical form of a EUR/MWh price converted to EUR/kWh
///
/// Negative zero is written as `0`.
pub fn price_per_kwh(price_per_mwh: f64) -> String {
    (price_per_mwh / 1000.0 + 0.0).to_string()
}

/// Builds the observation graph of a price series
#[derive(Debug, Clone)]
pub struct ObservationGraphBuilder {
    base_iri: String,
}

impl ObservationGraphBuilder {
    /// Create a builder minting observation IRIs under `base_iri`
    pub fn new(base_iri: impl Into<String>) -> Self {
        Self {
            base_iri: base_iri.into(),
        }
    }

    /// IRI of the observation at `unix_seconds`
    pub fn observation_iri(&self, unix_seconds: i64) -> MappingResult<NamedNode> {
        NamedNode::new(format!("{}price_{}", self.base_iri, unix_seconds))
            .map_err(|e| MappingError::InvalidIri(e.to_string()))
    }

    /// Map a price series to quads.
    ///
    /// Fails before emitting anything when the series is not index-aligned.
    pub fn build(&self, series: PriceSeries<'_>) -> MappingResult<QuadSet> {
        if series.unix_seconds.len() != series.price.len() {
            return Err(MappingError::LengthMismatch {
                timestamps: series.unix_seconds.len(),
                prices: series.price.len(),
            });
        }

        let mut quads =
            QuadSet::with_capacity(series.len() * (OBSERVATION_STATEMENTS + QUANTITY_VALUE_STATEMENTS));

        for (&timestamp, &price) in series.unix_seconds.iter().zip(series.price) {
            let observation = self.observation_iri(timestamp)?;
            let quantity = BlankNode::default();

            quads.push(observation.clone(), rdf::TYPE, sosa::OBSERVATION.into_owned());
            quads.push(
                observation.clone(),
                sosa::RESULT_TIME,
                Literal::new_typed_literal(result_time(timestamp)?, xsd::DATE_TIME),
            );
            quads.push(observation.clone(), dct::SOURCE, provenance::SOURCE.into_owned());
            quads.push(observation.clone(), dct::LICENSE, provenance::LICENSE.into_owned());
            quads.push(
                observation.clone(),
                dct::CREATOR,
                Literal::new_simple_literal(provenance::CREATOR),
            );
            quads.push(observation, sosa::HAS_RESULT, quantity.clone());

            quads.push(quantity.clone(), rdf::TYPE, qudt::QUANTITY_VALUE.into_owned());
            quads.push(
                quantity.clone(),
                qudt::NUMERIC_VALUE,
                Literal::new_typed_literal(price_per_kwh(price), xsd::FLOAT),
            );
            quads.push(quantity, qudt::UNIT, qudt_unit::CCY_EUR_PER_KILOW_HR.into_owned());
        }

        Ok(quads)
    }
}

impl Default for ObservationGraphBuilder {
    fn default() -> Self {
        Self::new(BASE_OBSERVATION_IRI)
    }
}
