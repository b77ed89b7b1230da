//! End-to-end tests of the price series → RDF document conversion

use energycharts_client::PriceResponse;
use energycharts_rdf::rdf::{
    ConversionError, NamespaceManager, ObservationGraphBuilder, PriceSeries, RdfSerializer,
    RdfSyntax, SerializeError, ENERGY_CHARTS,
};
use energycharts_rdf::prices_to_rdf;

fn sample_response() -> PriceResponse {
    PriceResponse {
        license_info: "CC BY 4.0 (creativecommons.org/licenses/by/4.0) from Bundesnetzagentur | SMARD.de"
            .to_string(),
        unix_seconds: vec![1704067200, 1704070800],
        price: vec![89.5, 75.25],
        unit: "EUR / MWh".to_string(),
        deprecated: false,
    }
}

#[test]
fn test_turtle_document() {
    let turtle = prices_to_rdf(&sample_response(), None).unwrap();

    for prefix in ["sosa", "xsd", "qudt", "qudt_unit", "dct"] {
        assert!(turtle.contains(&format!("@prefix {}:", prefix)), "missing {}:\n{}", prefix, turtle);
    }
    assert!(turtle.contains("0.0895"));
    assert!(turtle.contains("0.07525"));
    assert!(turtle.contains("2024-01-01T00:00:00.000Z"));
    assert!(turtle.contains("2024-01-01T01:00:00.000Z"));
    assert!(turtle.contains("<https://www.smard.de/>"));
    assert!(turtle.contains("<https://energy-charts.info/observation/price_1704067200>"));
    assert!(turtle.contains("qudt_unit:CCY_EUR-PER-KiloW-HR"));
    assert!(turtle.contains("Bundesnetzagentur | SMARD.de"));
}

#[test]
fn test_single_point_turtle() {
    let response = PriceResponse {
        unix_seconds: vec![1704067200],
        price: vec![100.0],
        ..sample_response()
    };
    let turtle = prices_to_rdf(&response, Some("text/turtle")).unwrap();

    assert!(turtle.contains("\"0.1\"^^xsd:float"), "{}", turtle);
    assert!(turtle.contains("qudt_unit:CCY_EUR-PER-KiloW-HR"));
    assert!(turtle.contains("sosa:Observation"));
}

#[test]
fn test_ntriples_document_uses_full_iris() {
    let ntriples = prices_to_rdf(&sample_response(), Some("application/n-triples")).unwrap();

    assert!(!ntriples.contains("@prefix"));
    assert!(ntriples.contains(
        "<https://energy-charts.info/observation/price_1704067200> \
         <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> \
         <http://www.w3.org/ns/sosa/Observation> ."
    ));
    assert!(ntriples.contains(
        "\"0.0895\"^^<http://www.w3.org/2001/XMLSchema#float>"
    ));
    assert!(ntriples.contains(
        "\"2024-01-01T00:00:00.000Z\"^^<http://www.w3.org/2001/XMLSchema#dateTime>"
    ));
    assert!(ntriples.contains(
        "<http://purl.org/dc/terms/license> <https://creativecommons.org/licenses/by/4.0/>"
    ));

    // Two points, nine statements each
    assert_eq!(ntriples.lines().filter(|line| !line.trim().is_empty()).count(), 18);
}

#[test]
fn test_every_syntax_renders() {
    let quads = ObservationGraphBuilder::default()
        .build(PriceSeries::from(&sample_response()))
        .unwrap();

    for syntax in RdfSyntax::ALL {
        let document = RdfSerializer::serialize(&quads, &ENERGY_CHARTS, syntax).unwrap();
        assert_eq!(document.content_type, syntax.media_type());

        let text = document.into_string().unwrap();
        assert!(text.contains("0.0895"), "{} output lacks the price:\n{}", syntax, text);
    }
}

#[test]
fn test_jsonld_document() {
    let jsonld = prices_to_rdf(&sample_response(), Some("application/ld+json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&jsonld).unwrap();

    assert_eq!(value["@context"]["sosa"], "http://www.w3.org/ns/sosa/");
    // Observation and quantity node per point
    assert_eq!(value["@graph"].as_array().unwrap().len(), 4);
}

#[test]
fn test_empty_series() {
    let empty = PriceResponse {
        unix_seconds: vec![],
        price: vec![],
        ..sample_response()
    };

    for syntax in RdfSyntax::ALL {
        let document = prices_to_rdf(&empty, Some(syntax.media_type())).unwrap();
        assert!(!document.contains("price_"), "{} output mentions an observation:\n{}", syntax, document);

        if syntax.is_prefixed() {
            for (prefix, iri) in ENERGY_CHARTS.iter() {
                assert!(document.contains(prefix), "{} output lacks {}:\n{}", syntax, prefix, document);
                assert!(document.contains(iri), "{} output lacks {}:\n{}", syntax, iri, document);
            }
        } else {
            assert!(document.trim().is_empty(), "{} output is not empty:\n{}", syntax, document);
        }
    }

    let turtle = prices_to_rdf(&empty, Some("text/turtle")).unwrap();
    assert!(turtle.contains("@prefix sosa: <http://www.w3.org/ns/sosa/>"));
}

#[test]
fn test_mismatched_series_is_rejected() {
    let broken = PriceResponse {
        price: vec![89.5],
        ..sample_response()
    };

    match prices_to_rdf(&broken, None) {
        Err(ConversionError::Mapping(err)) => {
            assert_eq!(err.to_string(), "Length mismatch: 2 timestamps but 1 prices")
        }
        other => panic!("expected mapping error, got {:?}", other),
    }
}

#[test]
fn test_unsupported_media_type() {
    match prices_to_rdf(&sample_response(), Some("application/rdf+xml")) {
        Err(ConversionError::Serialize(SerializeError::UnsupportedFormat(media_type))) => {
            assert_eq!(media_type, "application/rdf+xml")
        }
        other => panic!("expected unsupported format, got {:?}", other),
    }
}

#[test]
fn test_custom_base_iri() {
    let quads = ObservationGraphBuilder::new("http://example.org/obs/")
        .build(PriceSeries::new(&[0], &[-12.0]))
        .unwrap();
    let ntriples = RdfSerializer::serialize(&quads, &NamespaceManager::new(), RdfSyntax::NTriples)
        .unwrap()
        .into_string()
        .unwrap();

    assert!(ntriples.contains("<http://example.org/obs/price_0>"));
    assert!(ntriples.contains("\"1970-01-01T00:00:00.000Z\""));
    assert!(ntriples.contains("\"-0.012\""));
}
