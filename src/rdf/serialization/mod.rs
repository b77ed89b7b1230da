//! RDF serialization formats
//!
//! Supports:
//! - Turtle (TTL)
//! - N-Triples (NT)
//! - N-Quads (NQ)
//! - TriG
//! - N3
//! - JSON-LD
//!
//! The line-based and Turtle-family syntaxes go through `oxrdfio`; JSON-LD is
//! written directly with `serde_json`. Quads are written in the order they
//! were built and the whole document is buffered before it is handed out.

mod jsonld;

pub use jsonld::JsonLdSerializer;

use super::namespace::NamespaceManager;
use super::observation::QuadSet;
use oxrdfio::{RdfFormat, RdfSerializer as OxRdfSerializer};
use std::fmt;
use std::io::Write;
use thiserror::Error;

/// RDF serialization syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdfSyntax {
    /// Turtle format (.ttl)
    Turtle,
    /// N-Triples format (.nt)
    NTriples,
    /// N-Quads format (.nq)
    NQuads,
    /// TriG format (.trig)
    TriG,
    /// Notation3 format (.n3)
    N3,
    /// JSON-LD format (.jsonld)
    JsonLd,
}

impl RdfSyntax {
    /// Every supported syntax, Turtle first
    pub const ALL: [RdfSyntax; 6] = [
        RdfSyntax::Turtle,
        RdfSyntax::NTriples,
        RdfSyntax::NQuads,
        RdfSyntax::TriG,
        RdfSyntax::N3,
        RdfSyntax::JsonLd,
    ];

    /// Canonical media type
    pub fn media_type(self) -> &'static str {
        match self {
            RdfSyntax::Turtle => "text/turtle",
            RdfSyntax::NTriples => "application/n-triples",
            RdfSyntax::NQuads => "application/n-quads",
            RdfSyntax::TriG => "application/trig",
            RdfSyntax::N3 => "text/n3",
            RdfSyntax::JsonLd => "application/ld+json",
        }
    }

    /// Look up a syntax by media type, ignoring case and parameters
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type.split(';').next().unwrap_or_default().trim();
        Self::ALL
            .into_iter()
            .find(|syntax| syntax.media_type().eq_ignore_ascii_case(essence))
    }

    /// Usual file extension
    pub fn file_extension(self) -> &'static str {
        match self {
            RdfSyntax::Turtle => "ttl",
            RdfSyntax::NTriples => "nt",
            RdfSyntax::NQuads => "nq",
            RdfSyntax::TriG => "trig",
            RdfSyntax::N3 => "n3",
            RdfSyntax::JsonLd => "jsonld",
        }
    }

    /// Whether the syntax declares namespace prefixes
    pub fn is_prefixed(self) -> bool {
        !matches!(self, RdfSyntax::NTriples | RdfSyntax::NQuads)
    }

    fn ox_format(self) -> Option<RdfFormat> {
        match self {
            RdfSyntax::Turtle => Some(RdfFormat::Turtle),
            RdfSyntax::NTriples => Some(RdfFormat::NTriples),
            RdfSyntax::NQuads => Some(RdfFormat::NQuads),
            RdfSyntax::TriG => Some(RdfFormat::TriG),
            RdfSyntax::N3 => Some(RdfFormat::N3),
            RdfSyntax::JsonLd => None,
        }
    }
}

impl fmt::Display for RdfSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RdfSyntax::Turtle => "Turtle",
            RdfSyntax::NTriples => "N-Triples",
            RdfSyntax::NQuads => "N-Quads",
            RdfSyntax::TriG => "TriG",
            RdfSyntax::N3 => "N3",
            RdfSyntax::JsonLd => "JSON-LD",
        };
        f.write_str(name)
    }
}

/// Serialization errors
#[derive(Error, Debug)]
pub enum SerializeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type SerializeResult<T> = Result<T, SerializeError>;

/// A fully serialized document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedRdf {
    /// Document bytes, UTF-8
    pub bytes: Vec<u8>,
    /// Media type of `bytes`
    pub content_type: &'static str,
}

impl SerializedRdf {
    /// Decode the document as text
    pub fn into_string(self) -> SerializeResult<String> {
        String::from_utf8(self.bytes).map_err(|e| SerializeError::Serialize(e.to_string()))
    }
}

/// RDF serializer
pub struct RdfSerializer;

impl RdfSerializer {
    /// Serialize quads in the given syntax
    pub fn serialize(
        quads: &QuadSet,
        namespaces: &NamespaceManager,
        syntax: RdfSyntax,
    ) -> SerializeResult<SerializedRdf> {
        let bytes = match syntax.ox_format() {
            Some(format) => Self::serialize_with_oxrdfio(quads, namespaces, format, syntax)?,
            None => JsonLdSerializer::serialize(quads, namespaces)?,
        };

        Ok(SerializedRdf {
            bytes,
            content_type: syntax.media_type(),
        })
    }

    /// Serialize quads in the syntax named by a media type
    pub fn serialize_media_type(
        quads: &QuadSet,
        namespaces: &NamespaceManager,
        media_type: &str,
    ) -> SerializeResult<SerializedRdf> {
        let syntax = RdfSyntax::from_media_type(media_type)
            .ok_or_else(|| SerializeError::UnsupportedFormat(media_type.to_string()))?;
        Self::serialize(quads, namespaces, syntax)
    }

    fn serialize_with_oxrdfio(
        quads: &QuadSet,
        namespaces: &NamespaceManager,
        format: RdfFormat,
        syntax: RdfSyntax,
    ) -> SerializeResult<Vec<u8>> {
        let mut serializer = OxRdfSerializer::from_format(format);
        for (prefix, iri) in namespaces.iter() {
            serializer = serializer
                .with_prefix(prefix, iri)
                .map_err(|e| SerializeError::Serialize(format!("prefix {}: {}", prefix, e)))?;
        }

        let mut writer = serializer.for_writer(Vec::new());
        for quad in quads {
            writer.serialize_quad(quad)?;
        }
        let mut output = writer.finish()?;

        // Empty graphs still declare their prefixes
        if output.is_empty() && syntax.is_prefixed() {
            write_prefix_declarations(&mut output, namespaces)?;
        }
        Ok(output)
    }
}

fn write_prefix_declarations(output: &mut Vec<u8>, namespaces: &NamespaceManager) -> SerializeResult<()> {
    for (prefix, iri) in namespaces.iter() {
        writeln!(output, "@prefix {}: <{}> .", prefix, iri)?;
    }
    Ok(())
}
