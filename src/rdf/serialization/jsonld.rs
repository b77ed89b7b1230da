//! JSON-LD format implementation (flattened)
//!
//! Registered namespaces become the `@context`; every subject becomes one
//! node object in `@graph`, in the order subjects first appear.

use crate::rdf::namespace::NamespaceManager;
use crate::rdf::observation::QuadSet;
use crate::rdf::vocab::{rdf, xsd};
use super::{SerializeError, SerializeResult};
use indexmap::IndexMap;
use oxrdf::{Subject, Term};
use serde_json::{json, Map, Value};

/// JSON-LD serializer
pub struct JsonLdSerializer;

impl JsonLdSerializer {
    /// Serialize quads to a flattened JSON-LD document
    pub fn serialize(quads: &QuadSet, namespaces: &NamespaceManager) -> SerializeResult<Vec<u8>> {
        let document = Self::to_value(quads, namespaces)?;
        serde_json::to_vec_pretty(&document).map_err(|e| SerializeError::Serialize(e.to_string()))
    }

    /// Build the JSON-LD document as a JSON value
    pub fn to_value(quads: &QuadSet, namespaces: &NamespaceManager) -> SerializeResult<Value> {
        let mut nodes: IndexMap<String, Map<String, Value>> = IndexMap::new();

        for quad in quads {
            let id = match &quad.subject {
                Subject::NamedNode(n) => compact_iri(namespaces, n.as_str()),
                Subject::BlankNode(b) => b.to_string(),
                #[allow(unreachable_patterns)]
                _ => return Err(SerializeError::Serialize("RDF-star subjects are not supported".to_string())),
            };
            let node = nodes.entry(id.clone()).or_insert_with(|| {
                let mut node = Map::new();
                node.insert("@id".to_string(), Value::String(id));
                node
            });

            let (key, value) = match &quad.object {
                Term::NamedNode(n) if quad.predicate.as_ref() == rdf::TYPE => {
                    ("@type".to_string(), Value::String(compact_iri(namespaces, n.as_str())))
                }
                object => (
                    compact_iri(namespaces, quad.predicate.as_str()),
                    object_value(namespaces, object)?,
                ),
            };

            match node.entry(key).or_insert_with(|| Value::Array(Vec::new())) {
                Value::Array(values) => values.push(value),
                other => *other = Value::Array(vec![other.take(), value]),
            }
        }

        let context: Map<String, Value> = namespaces
            .iter()
            .map(|(prefix, iri)| (prefix.to_string(), Value::String(iri.to_string())))
            .collect();
        let graph: Vec<Value> = nodes.into_values().map(Value::Object).collect();

        Ok(json!({
            "@context": context,
            "@graph": graph,
        }))
    }
}

fn compact_iri(namespaces: &NamespaceManager, iri: &str) -> String {
    namespaces.compact(iri).unwrap_or_else(|| iri.to_string())
}

fn object_value(namespaces: &NamespaceManager, object: &Term) -> SerializeResult<Value> {
    Ok(match object {
        Term::NamedNode(n) => json!({ "@id": compact_iri(namespaces, n.as_str()) }),
        Term::BlankNode(b) => json!({ "@id": b.to_string() }),
        Term::Literal(l) => {
            if let Some(lang) = l.language() {
                json!({ "@value": l.value(), "@language": lang })
            } else if l.datatype() == xsd::STRING {
                json!({ "@value": l.value() })
            } else {
                json!({ "@value": l.value(), "@type": compact_iri(namespaces, l.datatype().as_str()) })
            }
        }
        #[allow(unreachable_patterns)]
        _ => return Err(SerializeError::Serialize("RDF-star objects are not supported".to_string())),
    })
}
