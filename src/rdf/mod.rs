//! RDF view of energy-charts price series
//!
//! This module turns a flat price series into a graph of SOSA observations
//! and writes it in one of several RDF syntaxes:
//! - namespace registry and vocabulary constants
//! - observation graph builder (series → quads)
//! - syntax serializers (Turtle, N-Triples, N-Quads, TriG, N3, JSON-LD)
//!
//! # Example
//!
//! ```rust
//! use energycharts_rdf::rdf::{
//!     ObservationGraphBuilder, PriceSeries, RdfSerializer, RdfSyntax, ENERGY_CHARTS,
//! };
//!
//! let quads = ObservationGraphBuilder::default()
//!     .build(PriceSeries::new(&[1704067200], &[100.0]))
//!     .unwrap();
//! let turtle = RdfSerializer::serialize(&quads, &ENERGY_CHARTS, RdfSyntax::Turtle)
//!     .unwrap()
//!     .into_string()
//!     .unwrap();
//! assert!(turtle.contains("qudt_unit:CCY_EUR-PER-KiloW-HR"));
//! ```

pub mod namespace;
pub mod observation;
mod serialization;
pub mod vocab;

use energycharts_client::PriceResponse;
use thiserror::Error;

pub use namespace::{
    Namespace, NamespaceManager,
    PrefixError, PrefixResult,
    BASE_OBSERVATION_IRI, ENERGY_CHARTS,
};

pub use observation::{
    ObservationGraphBuilder, PriceSeries, QuadSet,
    MappingError, MappingResult,
};

pub use serialization::{
    JsonLdSerializer, RdfSerializer, RdfSyntax, SerializedRdf,
    SerializeError, SerializeResult,
};

/// Errors of the series → document conversion
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The series could not be mapped to quads
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// The quads could not be written
    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convert a price response to an RDF document.
///
/// `media_type` selects the syntax; `None` means Turtle.
pub fn prices_to_rdf(response: &PriceResponse, media_type: Option<&str>) -> ConversionResult<String> {
    let quads = ObservationGraphBuilder::default().build(PriceSeries::from(response))?;
    let document = match media_type {
        Some(media_type) => RdfSerializer::serialize_media_type(&quads, &ENERGY_CHARTS, media_type)?,
        None => RdfSerializer::serialize(&quads, &ENERGY_CHARTS, RdfSyntax::Turtle)?,
    };
    Ok(document.into_string()?)
}
