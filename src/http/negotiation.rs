//! Content negotiation for `/prices`
//!
//! The Accept header is split into media ranges, ordered by quality (stable,
//! so equally weighted ranges keep their header order) and scanned once:
//! the first range naming JSON or a supported RDF syntax wins. Without any
//! match the response is Turtle.

use crate::rdf::RdfSyntax;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::ACCEPT;
use axum::http::request::Parts;
use mime::Mime;
use std::cmp::Ordering;
use std::convert::Infallible;
use tracing::debug;

pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Representation selected for a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Upstream JSON passed through
    Json,
    /// RDF in the given syntax
    Rdf(RdfSyntax),
}

impl ResponseFormat {
    /// Content-Type of the response body
    pub fn content_type(self) -> &'static str {
        match self {
            ResponseFormat::Json => JSON_MEDIA_TYPE,
            ResponseFormat::Rdf(syntax) => syntax.media_type(),
        }
    }
}

impl Default for ResponseFormat {
    fn default() -> Self {
        ResponseFormat::Rdf(RdfSyntax::Turtle)
    }
}

/// One entry of an Accept header
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRange {
    /// `type/subtype`, lowercase
    pub essence: String,
    /// Quality in `0.0..=1.0`
    pub quality: f32,
}

/// Parse an Accept header into media ranges, highest quality first.
///
/// Unparseable entries and entries with `q=0` are dropped; a malformed
/// quality counts as `1`.
pub fn parse_accept_header(header: &str) -> Vec<MediaRange> {
    let mut ranges: Vec<MediaRange> = header
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| entry.parse::<Mime>().ok())
        .map(|mime| MediaRange {
            essence: mime.essence_str().to_ascii_lowercase(),
            quality: mime
                .get_param("q")
                .map(|q| parse_quality(q.as_str()))
                .unwrap_or(1.0),
        })
        .filter(|range| range.quality > 0.0)
        .collect();

    ranges.sort_by(|a, b| b.quality.partial_cmp(&a.quality).unwrap_or(Ordering::Equal));
    ranges
}

fn parse_quality(value: &str) -> f32 {
    match value.trim().parse::<f32>() {
        Ok(q) if q.is_finite() => q.clamp(0.0, 1.0),
        _ => 1.0,
    }
}

/// Pick the response representation for an Accept header value
pub fn negotiate(accept: &str) -> ResponseFormat {
    for range in parse_accept_header(accept) {
        if range.essence == JSON_MEDIA_TYPE {
            return ResponseFormat::Json;
        }
        if let Some(syntax) = RdfSyntax::from_media_type(&range.essence) {
            return ResponseFormat::Rdf(syntax);
        }
    }
    ResponseFormat::default()
}

/// Negotiates the representation from the request's Accept headers.
#[async_trait]
impl<S> FromRequestParts<S> for ResponseFormat
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let accept = parts
            .headers
            .get_all(ACCEPT)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>()
            .join(",");

        let format = negotiate(&accept);
        debug!("Negotiated {} for Accept: {:?}", format.content_type(), accept);
        Ok(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_alone() {
        assert_eq!(negotiate("application/json"), ResponseFormat::Json);
    }

    #[test]
    fn test_quality_beats_header_order() {
        assert_eq!(
            negotiate("application/json;q=0.5, text/turtle;q=0.9"),
            ResponseFormat::Rdf(RdfSyntax::Turtle)
        );
        assert_eq!(
            negotiate("text/turtle;q=0.4, application/n-triples"),
            ResponseFormat::Rdf(RdfSyntax::NTriples)
        );
    }

    #[test]
    fn test_equal_quality_keeps_header_order() {
        assert_eq!(
            negotiate("application/trig, application/json"),
            ResponseFormat::Rdf(RdfSyntax::TriG)
        );
        assert_eq!(
            negotiate("application/json, application/trig"),
            ResponseFormat::Json
        );
    }

    #[test]
    fn test_every_rdf_media_type() {
        for syntax in RdfSyntax::ALL {
            assert_eq!(negotiate(syntax.media_type()), ResponseFormat::Rdf(syntax));
        }
    }

    #[test]
    fn test_fallback_to_turtle() {
        assert_eq!(negotiate(""), ResponseFormat::Rdf(RdfSyntax::Turtle));
        assert_eq!(negotiate("text/html, */*;q=0.8"), ResponseFormat::Rdf(RdfSyntax::Turtle));
        assert_eq!(negotiate("not a media type"), ResponseFormat::Rdf(RdfSyntax::Turtle));
    }

    #[test]
    fn test_unsupported_entries_are_skipped() {
        assert_eq!(
            negotiate("text/html, application/xhtml+xml, application/ld+json;q=0.9"),
            ResponseFormat::Rdf(RdfSyntax::JsonLd)
        );
    }

    #[test]
    fn test_zero_quality_is_not_acceptable() {
        assert_eq!(
            negotiate("application/json;q=0, text/n3;q=0.1"),
            ResponseFormat::Rdf(RdfSyntax::N3)
        );
    }

    #[test]
    fn test_parse_accept_header() {
        let ranges = parse_accept_header("text/turtle;q=0.5, Application/JSON, text/n3;q=oops");
        assert_eq!(
            ranges,
            vec![
                MediaRange { essence: "application/json".to_string(), quality: 1.0 },
                MediaRange { essence: "text/n3".to_string(), quality: 1.0 },
                MediaRange { essence: "text/turtle".to_string(), quality: 0.5 },
            ]
        );
    }

    #[test]
    fn test_content_type() {
        assert_eq!(ResponseFormat::Json.content_type(), "application/json");
        assert_eq!(ResponseFormat::default().content_type(), "text/turtle");
    }
}
